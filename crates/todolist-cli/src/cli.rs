use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todolist")]
#[command(about = "Manage several todo lists in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH", env = "TODOLIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start with no lists instead of the example lists
    #[arg(long)]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
