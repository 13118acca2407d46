use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "wiki")]
#[command(about = "Browse and edit a Markdown encyclopedia from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding entry files (defaults to $WIKI_ENTRIES_DIR, then ./entries)
    #[arg(long, global = true, value_name = "PATH")]
    pub entries_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all entry titles
    #[command(alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print an entry
    Show {
        /// Entry title
        title: String,
        /// Omit the heading line
        #[arg(long)]
        body: bool,
    },
    /// Search entry titles
    Search {
        /// Search query
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a random entry title
    Random,
    /// Create a new entry
    #[command(alias = "add")]
    New {
        /// Entry title
        title: String,
        /// Entry content (read from stdin or $EDITOR when omitted)
        content: Vec<String>,
    },
    /// Edit an existing entry in $EDITOR
    Edit {
        /// Entry title
        title: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
