//! `tsk rm` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::Store;

#[derive(Args)]
pub struct RmArgs {
    /// Task id
    pub id: i64,
}

pub fn run(path: &Path, args: RmArgs) -> Result<()> {
    let store = Store::new(path);
    store.remove(args.id)?;
    println!("removed {}", args.id);
    Ok(())
}
