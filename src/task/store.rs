//! Task store - JSON file persistence and mutation operations
//!
//! Every mutation is a full load-modify-persist round trip over a single
//! JSON file; there is no diffing and no stored id counter. Mutations hold
//! an advisory lock on a sibling `.lock` file for the duration of the round
//! trip, which keeps two cooperating processes from interleaving writes.
//! Processes that skip the lock can still race (last writer wins) — an
//! accepted limitation of a single-user tool.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, warn};

use super::Task;
use crate::error::{Result, TaskError};

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection in persisted order.
    ///
    /// A missing file is an empty collection, not an error; so is an empty
    /// or whitespace-only one. Anything else that fails to read or parse
    /// surfaces as a storage error.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        Ok(tasks)
    }

    /// Replace the file with the given collection in one step.
    ///
    /// The encoded array is written to a temporary file in the destination
    /// directory and renamed over the target, so readers never observe a
    /// half-written file.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let dir = self.ensure_parent_dir()?;

        let content = serde_json::to_string_pretty(tasks)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(&self.path)
            .map_err(|e| TaskError::Storage(e.to_string()))?;

        debug!("wrote {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }

    /// Append a new task, assigning `max(existing ids) + 1` (or 1 when the
    /// collection is empty). Returns the task as persisted.
    pub fn add(&self, text: &str) -> Result<Task> {
        if text.is_empty() {
            return Err(TaskError::InvalidInput("task text is empty".into()));
        }

        let _lock = self.lock_exclusive()?;
        let mut tasks = self.load()?;

        // The next id is derived, never stored: emptying the collection
        // restarts numbering at 1.
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let task = Task::new(next_id, text);
        tasks.push(task.clone());
        self.save(&tasks)?;

        Ok(task)
    }

    /// Mark the task with the given id done. Marking an already-done task
    /// succeeds and leaves it done.
    pub fn mark_done(&self, id: i64) -> Result<()> {
        let _lock = self.lock_exclusive()?;
        let mut tasks = self.load()?;

        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        task.done = true;

        self.save(&tasks)
    }

    /// Delete the task with the given id.
    pub fn remove(&self, id: i64) -> Result<()> {
        let _lock = self.lock_exclusive()?;
        let mut tasks = self.load()?;

        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Err(TaskError::NotFound(id));
        }

        self.save(&tasks)
    }

    /// Set the priority of the task with the given id. Only 1..=3 is
    /// settable; 0 exists solely as the unset default.
    pub fn set_priority(&self, id: i64, priority: u8) -> Result<()> {
        check_priority_range(id, priority)?;

        let _lock = self.lock_exclusive()?;
        let mut tasks = self.load()?;

        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        task.priority = priority;

        self.save(&tasks)
    }

    /// Apply a batch of prioritizer assignments in one round trip.
    ///
    /// All-or-nothing: every priority is range-checked before any mutation,
    /// so a single bad assignment leaves the file untouched. Assignments
    /// for ids no longer in the collection are skipped, not errors. Returns
    /// how many tasks were actually updated.
    pub fn apply_priorities(&self, assignments: &BTreeMap<i64, u8>) -> Result<usize> {
        for (&id, &priority) in assignments {
            check_priority_range(id, priority)?;
        }

        let _lock = self.lock_exclusive()?;
        let mut tasks = self.load()?;

        let mut applied = 0;
        for (&id, &priority) in assignments {
            match tasks.iter_mut().find(|t| t.id == id) {
                Some(task) => {
                    task.priority = priority;
                    applied += 1;
                }
                None => warn!("skipping priority assignment for unknown task id {}", id),
            }
        }

        if applied > 0 {
            self.save(&tasks)?;
        }
        Ok(applied)
    }

    fn ensure_parent_dir(&self) -> Result<PathBuf> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Take the advisory lock for one mutation round trip. The lock lives
    /// on a sibling file so the data file itself can be renamed over.
    fn lock_exclusive(&self) -> Result<File> {
        self.ensure_parent_dir()?;

        let mut lock_path = self.path.clone().into_os_string();
        lock_path.push(".lock");

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(PathBuf::from(lock_path))?;
        file.lock_exclusive()?;
        Ok(file)
    }
}

fn check_priority_range(id: i64, priority: u8) -> Result<()> {
    if !(1..=3).contains(&priority) {
        return Err(TaskError::InvalidInput(format!(
            "priority {} for task {} is not in 1..=3",
            priority, id
        )));
    }
    Ok(())
}
