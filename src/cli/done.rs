//! `tsk done` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::Store;

#[derive(Args)]
pub struct DoneArgs {
    /// Task id
    pub id: i64,
}

pub fn run(path: &Path, args: DoneArgs) -> Result<()> {
    let store = Store::new(path);
    store.mark_done(args.id)?;
    println!("marked {} done", args.id);
    Ok(())
}
