//! Task data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority level a task can be set to.
///
/// On the wire a priority is a plain integer (3 = high, 2 = medium,
/// 1 = low, 0 = unset); this enum covers the three settable levels and
/// handles the textual forms the CLI accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Parse a priority from a word or numeral.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" | "3" => Some(Self::High),
            "medium" | "med" | "2" => Some(Self::Medium),
            "low" | "1" => Some(Self::Low),
            _ => None,
        }
    }

    /// The numeric value stored on a task.
    pub fn value(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Map a stored numeric value back; 0 and anything out of range is None.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }

    /// Get the label
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

fn priority_is_unset(priority: &u8) -> bool {
    *priority == 0
}

/// A single task record as persisted in the tasks file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within the collection, strictly positive, assigned by the
    /// store and never reused while the task exists.
    pub id: i64,

    /// Task text, immutable after creation.
    pub text: String,

    /// Completion flag; flips one way, pending to done.
    #[serde(default)]
    pub done: bool,

    /// Creation time, used as the tie-break when sorting by priority.
    pub created: DateTime<Utc>,

    /// 3 = high, 2 = medium, 1 = low; 0 until explicitly set and
    /// omitted from the file while unset.
    #[serde(default, skip_serializing_if = "priority_is_unset")]
    pub priority: u8,
}

impl Task {
    /// Create a new pending task with no priority.
    pub fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
            created: Utc::now(),
            priority: 0,
        }
    }
}
