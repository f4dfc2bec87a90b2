//! Todo item domain model.
//!
//! # Responsibility
//! - Define the canonical todo record and its priority tiers.
//! - Provide tier stepping helpers with saturating bounds.
//!
//! # Invariants
//! - `timestamp` is set once at creation and never mutated afterwards.
//! - Numeric tier codes are part of the storage contract.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned row identity.
pub type TodoId = i64;

/// Fixed urgency buckets, ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Today = 1,
    Later = 2,
    Sometime = 3,
    Someday = 4,
}

impl Priority {
    /// Every tier, in urgency order.
    pub const ALL: [Priority; 4] = [
        Priority::Today,
        Priority::Later,
        Priority::Sometime,
        Priority::Someday,
    ];

    /// Numeric code stored in the `priority` column.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Parses a stored tier code. Anything outside the defined tiers is
    /// rejected so read paths can surface corrupt rows.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Today),
            2 => Some(Self::Later),
            3 => Some(Self::Sometime),
            4 => Some(Self::Someday),
            _ => None,
        }
    }

    /// Tier label shown by presentation layers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Later => "Later",
            Self::Sometime => "Sometime",
            Self::Someday => "Someday",
        }
    }

    /// One tier more urgent. Saturates at `Today`.
    pub fn promoted(self) -> Self {
        Self::from_code(self.code() - 1).unwrap_or(self)
    }

    /// One tier less urgent. Saturates at `Someday`, so automatic
    /// demotion can never step outside the defined set.
    pub fn demoted(self) -> Self {
        Self::from_code(self.code() + 1).unwrap_or(self)
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical persisted todo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    /// Creation time in epoch seconds. Lifespan processing only ever
    /// mutates `priority`, `completed`, or deletes the row.
    pub timestamp: i64,
    pub priority: Priority,
}

impl TodoItem {
    /// Age relative to `now`, clamped to zero against clock skew.
    pub fn age_secs(&self, now: i64) -> i64 {
        (now - self.timestamp).max(0)
    }
}

/// Insert payload. The store assigns `id`; `completed` always starts
/// false regardless of caller input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoItem {
    pub title: String,
    pub timestamp: i64,
    pub priority: Priority,
}

impl NewTodoItem {
    pub fn new(title: impl Into<String>, timestamp: i64, priority: Priority) -> Self {
        Self {
            title: title.into(),
            timestamp,
            priority,
        }
    }

    /// Write paths must call this before building SQL.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        validate_title(&self.title)
    }
}

pub(crate) fn validate_title(title: &str) -> Result<(), ItemValidationError> {
    if title.trim().is_empty() {
        return Err(ItemValidationError::EmptyTitle);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyTitle,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "todo title must not be empty"),
        }
    }
}

impl Error for ItemValidationError {}

#[cfg(test)]
mod tests {
    use super::{NewTodoItem, Priority, TodoItem};

    #[test]
    fn tier_codes_roundtrip() {
        for tier in Priority::ALL {
            assert_eq!(Priority::from_code(tier.code()), Some(tier));
        }
        assert_eq!(Priority::from_code(0), None);
        assert_eq!(Priority::from_code(5), None);
    }

    #[test]
    fn stepping_saturates_at_both_ends() {
        assert_eq!(Priority::Today.promoted(), Priority::Today);
        assert_eq!(Priority::Today.demoted(), Priority::Later);
        assert_eq!(Priority::Someday.demoted(), Priority::Someday);
        assert_eq!(Priority::Someday.promoted(), Priority::Sometime);
    }

    #[test]
    fn age_clamps_to_zero_for_future_timestamps() {
        let item = TodoItem {
            id: 1,
            title: "t".to_string(),
            completed: false,
            timestamp: 1_000,
            priority: Priority::Today,
        };
        assert_eq!(item.age_secs(900), 0);
        assert_eq!(item.age_secs(1_250), 250);
    }

    #[test]
    fn validate_rejects_blank_titles() {
        let blank = NewTodoItem::new("   ", 0, Priority::Today);
        assert!(blank.validate().is_err());

        let ok = NewTodoItem::new("water plants", 0, Priority::Today);
        assert!(ok.validate().is_ok());
    }
}
