pub mod common;
pub mod completions;
pub mod edit;
pub mod list;
pub mod new;
pub mod random;
pub mod search;
pub mod show;
