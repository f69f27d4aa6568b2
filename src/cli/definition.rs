//! Top-level clap definitions for the `tsk` binary

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::done::DoneArgs;
use super::list::ListArgs;
use super::prioritize::{PrioritizeArgs, ReprioritizeArgs};
use super::rm::RmArgs;

#[derive(Parser)]
#[command(
    name = "tsk",
    about = "Personal task list with GenAI-assisted prioritization",
    version
)]
pub struct Cli {
    /// Tasks file to use (overrides the configured data file)
    #[arg(short = 'f', long = "file", env = "TASKLING_FILE", global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// List tasks
    List(ListArgs),

    /// Mark a task done
    Done(DoneArgs),

    /// Remove a task
    Rm(RmArgs),

    /// Ask the configured model to prioritize all tasks
    Prioritize(PrioritizeArgs),

    /// Manually set one task's priority
    Reprioritize(ReprioritizeArgs),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
