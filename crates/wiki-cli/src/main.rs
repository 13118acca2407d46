//! Wiki CLI - Command-line interface for the Markdown encyclopedia
//!
//! Browse, search, and edit entries straight from the entries directory.

mod cli;
mod commands;
mod error;


use std::io::{self, Write};

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::common::open_store;
use crate::commands::completions::run_completions;
use crate::commands::edit::run_edit;
use crate::commands::list::run_list;
use crate::commands::new::run_new;
use crate::commands::random::run_random;
use crate::commands::search::run_search;
use crate::commands::show::run_show;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wiki=warn".parse().expect("valid directive")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help().map_err(CliError::Io)?;
        println!();
        return Ok(());
    };

    if let Commands::Completions { shell, output } = &command {
        return run_completions(*shell, output.as_deref());
    }

    let store = open_store(cli.entries_dir);
    let mut stdout = io::stdout().lock();

    match command {
        Commands::List { json } => run_list(&store, json, &mut stdout)?,
        Commands::Show { title, body } => run_show(&store, &title, body, &mut stdout)?,
        Commands::Search { query, json } => run_search(&store, &query, json, &mut stdout)?,
        Commands::Random => run_random(&store, &mut stdout)?,
        Commands::New { title, content } => run_new(&store, &title, &content, &mut stdout)?,
        Commands::Edit { title } => run_edit(&store, &title, &mut stdout)?,
        Commands::Completions { .. } => {}
    }

    stdout.flush()?;
    Ok(())
}
