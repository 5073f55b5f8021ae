//! Wire types for `POST /api/analyze/`.
//!
//! The request is fixed by this client. The response belongs to the backend;
//! [`AnalysisReport`] is the typed view of the payload it currently returns,
//! tolerant of enum spellings it has not seen before.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Request body: `{"notes_text": "..."}`. No validation is applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzeRequest<'a> {
    pub notes_text: &'a str,
}

/// Structured result of analysing a block of ops notes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub priorities: Vec<Priority>,
    pub tasks: Vec<Task>,
    pub blockers: Vec<Blocker>,
    pub weekly_report: WeeklyReport,
    pub questions: Vec<Question>,
    pub meta: Meta,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Priority {
    pub title: String,
    #[serde(default)]
    pub reason: String,
    pub urgency: Level,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub title: String,
    #[serde(default = "unassigned")]
    pub owner: String,
    #[serde(default)]
    pub due: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub confidence: f64,
}

fn unassigned() -> String {
    "unassigned".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Blocker {
    pub title: String,
    #[serde(default)]
    pub impacts: Vec<String>,
    #[serde(default)]
    pub suggested_fix: String,
    pub severity: Level,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WeeklyReport {
    pub done: Vec<String>,
    pub next: Vec<String>,
    pub risks: Vec<String>,
    pub asks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    #[serde(default)]
    pub why: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meta {
    pub received_chars: u64,
    pub mode: Mode,
}

/// Urgency / severity scale.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Medium,
    Low,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    Doing,
    Done,
    Blocked,
    Other,
}

/// How the backend produced the report.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Nova,
    Dummy,
    Fallback,
    Other,
}

/// Case-insensitive string decoding; unknown spellings map to `Other`.
macro_rules! lenient_enum {
    ($ty:ident { $($name:literal => $variant:ident),+ $(,)? }) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(match raw.to_ascii_lowercase().as_str() {
                    $($name => $ty::$variant,)+
                    _ => $ty::Other,
                })
            }
        }
    };
}

lenient_enum!(Level {
    "high" => High,
    "medium" => Medium,
    "low" => Low,
});

lenient_enum!(TaskStatus {
    "todo" => Todo,
    "doing" => Doing,
    "done" => Done,
    "blocked" => Blocked,
});

lenient_enum!(Mode {
    "nova" => Nova,
    "dummy" => Dummy,
    "fallback" => Fallback,
});

const REQUIRED_KEYS: [&str; 6] = [
    "priorities",
    "tasks",
    "blockers",
    "weekly_report",
    "questions",
    "meta",
];

impl AnalysisReport {
    /// Light structural check of a raw payload before decoding.
    ///
    /// Reports the first problem found: a non-object root, missing top-level
    /// keys (all of them, sorted), or a key with the wrong JSON type.
    pub fn check_shape(value: &Value) -> Result<(), String> {
        let Some(obj) = value.as_object() else {
            return Err("Root is not an object.".to_string());
        };

        let mut missing: Vec<&str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| !obj.contains_key(*key))
            .collect();
        if !missing.is_empty() {
            missing.sort_unstable();
            let listed = missing
                .iter()
                .map(|key| format!("'{key}'"))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(format!("Missing keys: [{listed}]"));
        }

        for key in ["tasks", "blockers", "priorities", "questions"] {
            if !obj[key].is_array() {
                return Err(format!("{key} must be a list"));
            }
        }
        for key in ["weekly_report", "meta"] {
            if !obj[key].is_object() {
                return Err(format!("{key} must be an object"));
            }
        }
        Ok(())
    }

    pub fn open_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(|t| !matches!(t.status, TaskStatus::Done))
    }
}
