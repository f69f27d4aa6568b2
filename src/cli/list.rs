//! `tsk list` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::{format_line, select, ListOptions, SortMode, Store};

#[derive(Args)]
pub struct ListArgs {
    /// Show all tasks, including done ones
    #[arg(long)]
    all: bool,

    /// Show only the top N tasks by priority
    #[arg(long, value_name = "N", default_value_t = 0)]
    top: usize,

    /// Alias for --top; wins when both are given
    #[arg(short = 'n', long = "n", value_name = "N", default_value_t = 0)]
    n: usize,

    /// Sort by priority high to low
    #[arg(long)]
    priority: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl ListArgs {
    fn options(&self) -> ListOptions {
        ListOptions {
            show_all: self.all,
            sort: if self.priority {
                SortMode::Priority
            } else {
                SortMode::Insertion
            },
            limit: if self.n > 0 { self.n } else { self.top },
        }
    }
}

pub fn run(path: &Path, args: ListArgs) -> Result<()> {
    let store = Store::new(path);
    let tasks = store.load()?;
    let selected = select(&tasks, &args.options());

    if selected.is_empty() {
        println!("No tasks.");
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    for task in selected {
        println!("{}", format_line(task));
    }

    Ok(())
}
