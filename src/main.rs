//! Taskling - Personal task list with GenAI-assisted prioritization

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskling::cli::{self, Cli, Commands};
use taskling::config;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("TASKLING_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskling=debug")
            .init();
    }

    let cli = Cli::parse();

    // Completions need no task data; handle them before touching the
    // file system at all.
    if let Commands::Completion { shell } = &cli.command {
        generate(*shell, &mut Cli::command(), "tsk", &mut std::io::stdout());
        return Ok(());
    }

    let path = config::tasks_file_path(cli.file)?;

    match cli.command {
        Commands::Add(args) => cli::add::run(&path, args),
        Commands::List(args) => cli::list::run(&path, args),
        Commands::Done(args) => cli::done::run(&path, args),
        Commands::Rm(args) => cli::rm::run(&path, args),
        Commands::Prioritize(args) => cli::prioritize::run(&path, args).await,
        Commands::Reprioritize(args) => cli::prioritize::run_reprioritize(&path, args),
        Commands::Completion { .. } => unreachable!(),
    }
}
