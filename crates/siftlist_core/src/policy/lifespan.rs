//! Per-tier lifespan rules.
//!
//! An item's tier determines how long it may stay active before it is
//! demoted one tier, and how long a completed item lingers before it is
//! deleted. `None` disables the respective rule.

use crate::model::item::Priority;
use serde::{Deserialize, Serialize};

const COMPLETED_RETENTION_SECS: i64 = 5 * 60;

/// Lifespan pair for one tier, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLifespan {
    /// Maximum age while active before demotion. `None` never demotes.
    pub active_secs: Option<i64>,
    /// Maximum age once completed before deletion. `None` never deletes.
    pub completed_secs: Option<i64>,
}

impl TierLifespan {
    pub const fn new(active_secs: Option<i64>, completed_secs: Option<i64>) -> Self {
        Self {
            active_secs,
            completed_secs,
        }
    }
}

/// Decision for a single item at a single point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifespanAction {
    /// Item stays as-is.
    Keep,
    /// Active item exceeded its tier lifespan; move it down one tier.
    Demote(Priority),
    /// Completed item exceeded its retention window; remove it.
    Delete,
}

/// Full per-tier rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifespanPolicy {
    today: TierLifespan,
    later: TierLifespan,
    sometime: TierLifespan,
    someday: TierLifespan,
}

impl Default for LifespanPolicy {
    /// Stock rules: Today demotes after 8h, Later after 12h, Sometime
    /// after 5 days, Someday keeps active items forever. Completed items
    /// linger five minutes on every tier.
    fn default() -> Self {
        Self {
            today: TierLifespan::new(Some(8 * 60 * 60), Some(COMPLETED_RETENTION_SECS)),
            later: TierLifespan::new(Some(12 * 60 * 60), Some(COMPLETED_RETENTION_SECS)),
            sometime: TierLifespan::new(Some(5 * 24 * 60 * 60), Some(COMPLETED_RETENTION_SECS)),
            someday: TierLifespan::new(None, Some(COMPLETED_RETENTION_SECS)),
        }
    }
}

impl LifespanPolicy {
    /// Returns the rule pair for one tier.
    pub fn tier(&self, tier: Priority) -> TierLifespan {
        match tier {
            Priority::Today => self.today,
            Priority::Later => self.later,
            Priority::Sometime => self.sometime,
            Priority::Someday => self.someday,
        }
    }

    /// Replaces one tier's rules, builder style.
    pub fn with_tier(mut self, tier: Priority, lifespan: TierLifespan) -> Self {
        match tier {
            Priority::Today => self.today = lifespan,
            Priority::Later => self.later = lifespan,
            Priority::Sometime => self.sometime = lifespan,
            Priority::Someday => self.someday = lifespan,
        }
        self
    }

    /// Decides what should happen to an item of `age_secs` on `tier`.
    ///
    /// Pure function; callers persist the outcome. Demotion steps exactly
    /// one tier and saturates at the last one, so an active lifespan on
    /// `Someday` evaluates to `Keep`.
    pub fn evaluate(&self, tier: Priority, completed: bool, age_secs: i64) -> LifespanAction {
        let lifespan = self.tier(tier);

        if completed {
            return match lifespan.completed_secs {
                Some(limit) if age_secs > limit => LifespanAction::Delete,
                _ => LifespanAction::Keep,
            };
        }

        match lifespan.active_secs {
            Some(limit) if age_secs > limit => {
                let target = tier.demoted();
                if target == tier {
                    LifespanAction::Keep
                } else {
                    LifespanAction::Demote(target)
                }
            }
            _ => LifespanAction::Keep,
        }
    }
}
