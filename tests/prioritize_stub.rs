//! Integration tests for collaborator wiring
//!
//! A deterministic stub stands in for the model so the prioritization
//! round can be checked end to end: the full round trip, unknown-id
//! skipping, and the all-or-nothing guarantee when the collaborator
//! misbehaves.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use taskling::ai::Prioritizer;
use taskling::cli::prioritize::run_with;
use taskling::error::{Result as TaskResult, TaskError};
use taskling::task::{Store, Task};

fn tasks_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("tasks.json")
}

/// Returns a fixed assignment map and records what it was shown.
struct FixedPrioritizer {
    assignments: BTreeMap<i64, u8>,
    seen_tasks: AtomicUsize,
    calls: AtomicUsize,
}

impl FixedPrioritizer {
    fn new(assignments: BTreeMap<i64, u8>) -> Self {
        Self {
            assignments,
            seen_tasks: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Prioritizer for FixedPrioritizer {
    async fn assign(&self, tasks: &[Task]) -> TaskResult<BTreeMap<i64, u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_tasks.store(tasks.len(), Ordering::SeqCst);
        Ok(self.assignments.clone())
    }
}

struct FailingPrioritizer;

#[async_trait]
impl Prioritizer for FailingPrioritizer {
    async fn assign(&self, _tasks: &[Task]) -> TaskResult<BTreeMap<i64, u8>> {
        Err(TaskError::Collaborator("model returned prose".to_string()))
    }
}

#[tokio::test]
async fn test_stub_assignments_reach_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = tasks_path(&dir);
    let store = Store::new(&path);

    let a = store.add("urgent thing").unwrap();
    let b = store.add("background thing").unwrap();

    let stub = FixedPrioritizer::new(BTreeMap::from([(a.id, 3), (b.id, 1)]));
    run_with(&path, &stub).await.unwrap();

    let tasks = store.load().unwrap();
    assert_eq!(tasks[0].priority, 3);
    assert_eq!(tasks[1].priority, 1);
}

#[tokio::test]
async fn test_collaborator_sees_the_whole_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = tasks_path(&dir);
    let store = Store::new(&path);

    store.add("open").unwrap();
    let done = store.add("finished").unwrap();
    store.mark_done(done.id).unwrap();

    let stub = FixedPrioritizer::new(BTreeMap::new());
    run_with(&path, &stub).await.unwrap();

    // Done tasks are sent too; filtering is a listing concern.
    assert_eq!(stub.seen_tasks.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_assignments_for_missing_ids_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = tasks_path(&dir);
    let store = Store::new(&path);

    let real = store.add("still here").unwrap();

    let stub = FixedPrioritizer::new(BTreeMap::from([(real.id, 2), (4242, 3)]));
    run_with(&path, &stub).await.unwrap();

    let tasks = store.load().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].priority, 2);
}

#[tokio::test]
async fn test_collaborator_failure_leaves_the_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = tasks_path(&dir);
    let store = Store::new(&path);

    store.add("precious").unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let err = run_with(&path, &FailingPrioritizer).await.unwrap_err();
    assert!(err.to_string().contains("prioritization failed"));
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[tokio::test]
async fn test_out_of_range_assignment_aborts_the_whole_batch() {
    let dir = tempfile::tempdir().unwrap();
    let path = tasks_path(&dir);
    let store = Store::new(&path);

    let a = store.add("fine").unwrap();
    let b = store.add("poisoned").unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let stub = FixedPrioritizer::new(BTreeMap::from([(a.id, 2), (b.id, 9)]));
    assert!(run_with(&path, &stub).await.is_err());

    // The valid assignment must not have been applied either.
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[tokio::test]
async fn test_empty_collection_never_calls_the_collaborator() {
    let dir = tempfile::tempdir().unwrap();
    let path = tasks_path(&dir);

    let stub = FixedPrioritizer::new(BTreeMap::new());
    run_with(&path, &stub).await.unwrap();

    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    assert!(!path.exists(), "an empty round should not create the file");
}
