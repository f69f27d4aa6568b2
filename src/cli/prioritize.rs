//! `tsk prioritize` and `tsk reprioritize` command implementations

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::ai::{OpenAiPrioritizer, Prioritizer};
use crate::config::Config;
use crate::error::TaskError;
use crate::task::{Priority, Store};

#[derive(Args)]
pub struct PrioritizeArgs {
    /// Model to use (overrides the configured one)
    #[arg(short, long)]
    model: Option<String>,
}

#[derive(Args)]
pub struct ReprioritizeArgs {
    /// Task id
    pub id: i64,

    /// Priority: high|medium|low or 3|2|1
    pub priority: String,
}

pub async fn run(path: &Path, args: PrioritizeArgs) -> Result<()> {
    let mut config = Config::load()?.prioritizer;
    if let Some(model) = args.model {
        config.model = model;
    }
    run_with(path, &OpenAiPrioritizer::new(config)).await
}

/// The prioritization round against any collaborator. Separate from
/// [`run`] so tests can substitute a deterministic one.
pub async fn run_with(path: &Path, prioritizer: &dyn Prioritizer) -> Result<()> {
    let store = Store::new(path);
    let tasks = store.load()?;

    if tasks.is_empty() {
        println!("No tasks to prioritize.");
        return Ok(());
    }

    let assignments = prioritizer.assign(&tasks).await?;
    let applied = store.apply_priorities(&assignments)?;
    println!("prioritized {} of {} tasks", applied, tasks.len());
    Ok(())
}

pub fn run_reprioritize(path: &Path, args: ReprioritizeArgs) -> Result<()> {
    let priority = Priority::parse(&args.priority).ok_or_else(|| {
        TaskError::InvalidInput(format!(
            "invalid priority {:?}, use high|medium|low or 3|2|1",
            args.priority
        ))
    })?;

    let store = Store::new(path);
    store.set_priority(args.id, priority.value())?;
    println!("set {} priority to {}", args.id, priority.label());
    Ok(())
}
