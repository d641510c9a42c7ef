//! In-memory task store — the authoritative task collection.
//!
//! Owns the tasks and the monotonic id counter; enforces every field
//! rule. Handlers call into this module and translate its errors, they
//! never validate task fields themselves.

pub mod error;
pub mod validate;

use std::str::FromStr;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use error::TaskError;
use validate::{validate, ValidationMode};

// ─── Model ────────────────────────────────────────────────────────────────────

/// Task priority. Defaults to `Low` when a payload omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

#[derive(Debug, Error)]
#[error("Priority must be one of: low, medium, high")]
pub struct InvalidPriority;

impl FromStr for Priority {
    type Err = InvalidPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(InvalidPriority),
        }
    }
}

/// A stored task. `id` and `created_at` are set once at creation and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub completed: bool,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
}

/// Incoming task payload for create and update. Every field is optional
/// so present/absent is explicit; `priority` stays a raw string here and
/// is checked against [`Priority`] by validation, so a bad value is
/// reported together with any other violations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub completed: Option<bool>,
}

impl TaskInput {
    /// True when the payload carries no fields at all (e.g. a bare `{}`).
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.completed.is_none()
    }
}

// ─── Store ────────────────────────────────────────────────────────────────────

struct StoreInner {
    tasks: Vec<Task>,
    next_id: u64,
}

/// Process-scoped task collection. Ids start at "1" and are never
/// reused, even after deletion. No persistence — the collection resets
/// on restart.
pub struct TaskStore {
    inner: RwLock<StoreInner>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a task from `input` (full validation — title required).
    ///
    /// Assigns the next id, trims the title, defaults the optional
    /// fields, and stamps `created_at`. A validation failure leaves the
    /// collection untouched.
    pub async fn create(&self, input: TaskInput) -> Result<Task, TaskError> {
        let violations = validate(&input, ValidationMode::Full);
        if !violations.is_empty() {
            return Err(TaskError::Validation { violations });
        }

        let mut inner = self.inner.write().await;
        let id = inner.next_id.to_string();
        inner.next_id += 1;

        let task = Task {
            id,
            title: input.title.as_deref().unwrap_or_default().trim().to_string(),
            description: input.description.unwrap_or_default(),
            priority: input
                .priority
                .as_deref()
                .and_then(|p| p.parse().ok())
                .unwrap_or_default(),
            completed: input.completed.unwrap_or(false),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        inner.tasks.push(task.clone());
        debug!(id = %task.id, "task created");
        Ok(task)
    }

    /// Snapshot of all tasks in insertion order.
    pub async fn list(&self) -> Vec<Task> {
        self.inner.read().await.tasks.clone()
    }

    /// Fetch a task by exact id.
    pub async fn get(&self, id: &str) -> Result<Task, TaskError> {
        self.inner
            .read()
            .await
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    /// Merge the fields present in `input` into the task with the given
    /// id. Lookup happens before validation, so an unknown id is a
    /// `NotFound` even when the payload is also invalid.
    ///
    /// The write lock is held across the whole lookup-validate-replace
    /// sequence; concurrent updates to one id are last-write-wins.
    pub async fn update(&self, id: &str, input: TaskInput) -> Result<Task, TaskError> {
        let mut inner = self.inner.write().await;
        let updated = Self::apply(&mut inner, id, input)?;
        debug!(id = %updated.id, "task updated");
        Ok(updated)
    }

    /// Flip `completed`, going through the same merge path as `update`
    /// so no other field can change through this operation. The write
    /// lock covers both the read of `completed` and the merge, so
    /// concurrent toggles serialize instead of losing updates.
    pub async fn toggle(&self, id: &str) -> Result<Task, TaskError> {
        let mut inner = self.inner.write().await;
        let completed = inner
            .tasks
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.completed)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;

        let updated = Self::apply(
            &mut inner,
            id,
            TaskInput {
                completed: Some(!completed),
                ..Default::default()
            },
        )?;
        debug!(id = %updated.id, completed = updated.completed, "task toggled");
        Ok(updated)
    }

    /// Lookup-validate-replace for `update` and `toggle`. Callers hold
    /// the write lock, so the whole sequence is one critical section.
    fn apply(inner: &mut StoreInner, id: &str, input: TaskInput) -> Result<Task, TaskError> {
        let idx = inner
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;

        let violations = validate(&input, ValidationMode::Partial);
        if !violations.is_empty() {
            return Err(TaskError::Validation { violations });
        }

        let existing = &inner.tasks[idx];
        let updated = Task {
            id: existing.id.clone(),
            title: input
                .title
                .as_deref()
                .map(|t| t.trim().to_string())
                .unwrap_or_else(|| existing.title.clone()),
            description: input
                .description
                .unwrap_or_else(|| existing.description.clone()),
            priority: input
                .priority
                .as_deref()
                .and_then(|p| p.parse().ok())
                .unwrap_or(existing.priority),
            completed: input.completed.unwrap_or(existing.completed),
            created_at: existing.created_at.clone(),
        };
        // In-place replace — list order is creation order, always.
        inner.tasks[idx] = updated.clone();
        Ok(updated)
    }

    /// Remove the task with the given id. The id is never reissued.
    pub async fn delete(&self, id: &str) -> Result<(), TaskError> {
        let mut inner = self.inner.write().await;
        let before = inner.tasks.len();
        inner.tasks.retain(|t| t.id != id);
        if inner.tasks.len() == before {
            return Err(TaskError::NotFound(id.to_string()));
        }
        debug!(id = %id, "task deleted");
        Ok(())
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
