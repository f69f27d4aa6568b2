//! GenAI-assisted prioritization
//!
//! The store never talks to a model. A [`Prioritizer`] turns the current
//! task list into a finished id -> priority map, and the store applies
//! that map like any other mutation. This module holds the trait, the
//! prompt we send, and the parser that turns a model reply back into
//! assignments; the OpenAI-compatible implementation lives in
//! [`openai`].

pub mod openai;

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::{Result, TaskError};
use crate::task::Task;

pub use openai::OpenAiPrioritizer;

/// Proposes priorities for a set of tasks.
///
/// Implementations return a map of task id to priority in 1..=3. They
/// never mutate tasks themselves; the caller decides what to do with
/// the proposal.
#[async_trait]
pub trait Prioritizer {
    async fn assign(&self, tasks: &[Task]) -> Result<BTreeMap<i64, u8>>;
}

/// System message pinning the reply contract.
pub const SYSTEM_PROMPT: &str = "You are prioritizing a personal todo list. \
    Assign every task a priority: 3 = high, 2 = medium, 1 = low. \
    Respond with a JSON array of {\"id\": <task id>, \"priority\": <1|2|3>} \
    objects, one per task. No other text.";

/// Render the user message for one prioritization round. Done state and
/// any current priority ride along so the model can keep finished work
/// out of the top slots.
pub fn build_prompt(tasks: &[Task]) -> String {
    let mut prompt = String::from("Tasks:\n");

    for task in tasks {
        let state = if task.done { "done" } else { "open" };
        prompt.push_str(&format!("- id {} ({}): {}", task.id, state, task.text));
        if task.priority != 0 {
            prompt.push_str(&format!(" [currently {}]", task.priority));
        }
        prompt.push('\n');
    }

    prompt
}

#[derive(Debug, Deserialize)]
struct Assignment {
    id: i64,
    priority: i64,
}

/// Parse a model reply into id -> priority assignments.
///
/// Models wrap JSON in code fences often enough that we strip them
/// before parsing. Anything that is not an array of id/priority objects
/// with priorities in 1..=3 is a collaborator error; ids the model
/// invents are left for the store to skip.
pub fn parse_assignments(reply: &str) -> Result<BTreeMap<i64, u8>> {
    let body = strip_code_fences(reply);

    let entries: Vec<Assignment> = serde_json::from_str(body.trim())
        .map_err(|e| TaskError::Collaborator(format!("unparseable reply: {e}")))?;

    let mut assignments = BTreeMap::new();
    for entry in entries {
        if !(1..=3).contains(&entry.priority) {
            return Err(TaskError::Collaborator(format!(
                "priority {} for task {} is out of range",
                entry.priority, entry.id
            )));
        }
        if assignments.insert(entry.id, entry.priority as u8).is_some() {
            return Err(TaskError::Collaborator(format!(
                "duplicate assignment for task {}",
                entry.id
            )));
        }
    }
    Ok(assignments)
}

fn strip_code_fences(reply: &str) -> &str {
    let fence = regex::Regex::new(r"(?s)```(?:json)?\s*(.*?)```").unwrap();
    match fence.captures(reply).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str(),
        None => reply,
    }
}
