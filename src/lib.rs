//! Taskling library - Core functionality for the task list manager
//!
//! The [`task`] module owns storage and listing; [`ai`] supplies the
//! prioritization collaborator; [`cli`] and [`config`] wire both into
//! the `tsk` binary.

pub mod ai;
pub mod cli;
pub mod config;
pub mod error;
pub mod task;
