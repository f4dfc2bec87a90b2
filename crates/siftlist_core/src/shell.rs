//! Shell state switching between the two layouts of the same views.
//!
//! # Responsibility
//! - Own the per-tier views and the active layout mode.
//! - Fan a refresh out to every visible view after each mutation.
//!
//! # Invariants
//! - Dock mode always shows `Today`; desk mode shows every tier.
//! - Refresh failures are logged and swallowed; views keep their last
//!   good rows.

use crate::model::item::{Priority, TodoId};
use crate::policy::lifespan::LifespanPolicy;
use crate::repo::todo_repo::{RepoResult, TodoRepository};
use crate::service::todo_service::TodoService;
use crate::view::tier_view::TierView;
use log::error;

/// Which of the two layouts is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Full window: one tab per tier.
    Desk,
    /// Compact strip pinned to the `Today` tier.
    Dock,
}

/// Presentation container over the tier views.
pub struct Shell<R: TodoRepository> {
    service: TodoService<R>,
    policy: LifespanPolicy,
    mode: LayoutMode,
    current_tab: Priority,
    views: [TierView; 4],
}

impl<R: TodoRepository> Shell<R> {
    pub fn new(service: TodoService<R>, policy: LifespanPolicy) -> Self {
        Self {
            service,
            policy,
            mode: LayoutMode::Desk,
            current_tab: Priority::Today,
            views: Priority::ALL.map(TierView::new),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: LayoutMode) {
        self.mode = mode;
    }

    pub fn toggle_dock(&mut self) {
        self.mode = match self.mode {
            LayoutMode::Desk => LayoutMode::Dock,
            LayoutMode::Dock => LayoutMode::Desk,
        };
    }

    /// Tier receiving new items: the selected tab on the desk, always
    /// `Today` when docked.
    pub fn current_tier(&self) -> Priority {
        match self.mode {
            LayoutMode::Desk => self.current_tab,
            LayoutMode::Dock => Priority::Today,
        }
    }

    /// Selects the desk tab. Remembered across dock round-trips.
    pub fn select_tab(&mut self, tier: Priority) {
        self.current_tab = tier;
    }

    pub fn service(&self) -> &TodoService<R> {
        &self.service
    }

    /// One tier's view, regardless of visibility.
    pub fn view(&self, tier: Priority) -> &TierView {
        &self.views[view_index(tier)]
    }

    /// Views the active layout presents, in tier order.
    pub fn visible_views(&self) -> Vec<&TierView> {
        match self.mode {
            LayoutMode::Desk => self.views.iter().collect(),
            LayoutMode::Dock => vec![&self.views[view_index(Priority::Today)]],
        }
    }

    /// Adds an item to the current tier, then refreshes.
    pub fn add(&mut self, title: &str, now: i64) -> RepoResult<TodoId> {
        let id = self.service.add_item(title, self.current_tier(), now)?;
        self.refresh(now);
        Ok(id)
    }

    /// Checks or unchecks one row, then refreshes.
    pub fn set_completed(&mut self, id: TodoId, completed: bool, now: i64) -> RepoResult<()> {
        if completed {
            self.service.complete(id)?;
        } else {
            self.service.reopen(id)?;
        }
        self.refresh(now);
        Ok(())
    }

    pub fn promote(&mut self, id: TodoId, now: i64) -> RepoResult<()> {
        self.service.promote(id)?;
        self.refresh(now);
        Ok(())
    }

    pub fn demote(&mut self, id: TodoId, now: i64) -> RepoResult<()> {
        self.service.demote(id)?;
        self.refresh(now);
        Ok(())
    }

    pub fn move_to(&mut self, id: TodoId, tier: Priority, now: i64) -> RepoResult<()> {
        self.service.move_to(id, tier)?;
        self.refresh(now);
        Ok(())
    }

    pub fn rename(&mut self, id: TodoId, title: &str, now: i64) -> RepoResult<()> {
        self.service.rename(id, title)?;
        self.refresh(now);
        Ok(())
    }

    pub fn remove(&mut self, id: TodoId, now: i64) -> RepoResult<()> {
        self.service.remove(id)?;
        self.refresh(now);
        Ok(())
    }

    /// Runs the lifespan sweep, then reloads every visible view.
    ///
    /// Store failures here have no user-facing surface: they are logged
    /// and the previous rows stay visible.
    pub fn refresh(&mut self, now: i64) {
        if let Err(err) = self.service.sweep(&self.policy, now) {
            error!("event=shell_refresh module=shell status=error stage=sweep error={err}");
        }

        let tiers: &[Priority] = match self.mode {
            LayoutMode::Desk => &Priority::ALL,
            LayoutMode::Dock => &[Priority::Today],
        };
        let repo = self.service.repo();
        for tier in tiers {
            if let Err(err) = self.views[view_index(*tier)].refresh(repo, now) {
                error!(
                    "event=shell_refresh module=shell status=error tier={} error={err}",
                    tier.code()
                );
            }
        }
    }
}

fn view_index(tier: Priority) -> usize {
    (tier.code() - 1) as usize
}
