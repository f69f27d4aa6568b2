//! `tsk add` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::Store;

#[derive(Args)]
pub struct AddArgs {
    /// Task text; multiple words are joined with single spaces
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,
}

impl AddArgs {
    pub fn joined_text(&self) -> String {
        self.text.join(" ")
    }
}

pub fn run(path: &Path, args: AddArgs) -> Result<()> {
    let store = Store::new(path);
    let task = store.add(&args.joined_text())?;
    println!("added {}: {}", task.id, task.text);
    Ok(())
}
