//! Per-tier read model.
//!
//! # Responsibility
//! - Present one tier the way list surfaces render it: incomplete rows
//!   first, each with checked state and a relative-age display.
//!
//! # Invariants
//! - `refresh` only reads; lifespan processing happens in the sweep.
//! - Row order is the store order (completed-then-insertion).

use crate::clock::format_relative_age;
use crate::model::item::{Priority, TodoId, TodoItem};
use crate::repo::todo_repo::{RepoResult, TodoRepository};

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub created_at: i64,
    /// Human-readable age ("just now", "3h ago"), fixed at refresh time.
    pub age_display: String,
}

impl TodoRow {
    /// Checkbox state for the completed column.
    pub fn is_checked(&self) -> bool {
        self.completed
    }

    /// Titles stay editable only while the item is active.
    pub fn title_editable(&self) -> bool {
        !self.completed
    }

    fn from_item(item: &TodoItem, now: i64) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            completed: item.completed,
            created_at: item.timestamp,
            age_display: format_relative_age(item.age_secs(now)),
        }
    }
}

/// Filtered view over one priority tier.
#[derive(Debug, Clone)]
pub struct TierView {
    priority: Priority,
    rows: Vec<TodoRow>,
}

impl TierView {
    pub fn new(priority: Priority) -> Self {
        Self {
            priority,
            rows: Vec::new(),
        }
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn rows(&self) -> &[TodoRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reloads rows from the store through the owned handle the caller
    /// passes in.
    pub fn refresh<R: TodoRepository>(&mut self, repo: &R, now: i64) -> RepoResult<()> {
        let items = repo.list_tier(self.priority)?;
        self.rows = items
            .iter()
            .map(|item| TodoRow::from_item(item, now))
            .collect();
        Ok(())
    }
}
