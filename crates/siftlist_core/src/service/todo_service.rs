//! Todo use-case service.
//!
//! # Responsibility
//! - Provide the mutation entry points presentation state calls into.
//! - Delegate persistence to the repository contract.
//!
//! # Invariants
//! - New items always start active, stamped once with creation time.
//! - Completed items keep a read-only title until reopened.
//! - Promote/demote saturate at the outer tiers instead of failing.

use crate::model::item::{NewTodoItem, Priority, TodoId, TodoItem};
use crate::policy::lifespan::LifespanPolicy;
use crate::policy::sweep::{run_sweep, SweepOutcome};
use crate::repo::todo_repo::{RepoError, RepoResult, TodoChanges, TodoRepository};

/// Use-case service wrapper for todo operations.
pub struct TodoService<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read access to the owned store handle, for view refreshes.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Creates an active item on `tier`, stamped with `now`.
    ///
    /// Titles are trimmed before validation, so whitespace-only input is
    /// rejected rather than stored.
    pub fn add_item(
        &self,
        title: impl Into<String>,
        tier: Priority,
        now: i64,
    ) -> RepoResult<TodoId> {
        let title = title.into();
        let item = NewTodoItem::new(title.trim(), now, tier);
        self.repo.create(&item)
    }

    /// Fetches one item by id.
    pub fn get_item(&self, id: TodoId) -> RepoResult<Option<TodoItem>> {
        self.repo.get(id)
    }

    /// Lists one tier in display order.
    pub fn items_for(&self, tier: Priority) -> RepoResult<Vec<TodoItem>> {
        self.repo.list_tier(tier)
    }

    /// Marks an item completed.
    pub fn complete(&self, id: TodoId) -> RepoResult<()> {
        self.repo.update(id, &TodoChanges::completed(true))
    }

    /// Puts a completed item back into the active set.
    pub fn reopen(&self, id: TodoId) -> RepoResult<()> {
        self.repo.update(id, &TodoChanges::completed(false))
    }

    /// Moves an item one tier up. No-op at `Today`.
    pub fn promote(&self, id: TodoId) -> RepoResult<()> {
        let item = self.require(id)?;
        let target = item.priority.promoted();
        if target == item.priority {
            return Ok(());
        }
        self.repo.update(id, &TodoChanges::priority(target))
    }

    /// Moves an item one tier down. No-op at `Someday`.
    pub fn demote(&self, id: TodoId) -> RepoResult<()> {
        let item = self.require(id)?;
        let target = item.priority.demoted();
        if target == item.priority {
            return Ok(());
        }
        self.repo.update(id, &TodoChanges::priority(target))
    }

    /// Sends an item to an arbitrary tier.
    pub fn move_to(&self, id: TodoId, tier: Priority) -> RepoResult<()> {
        let item = self.require(id)?;
        if item.priority == tier {
            return Ok(());
        }
        self.repo.update(id, &TodoChanges::priority(tier))
    }

    /// Renames an active item. Completed items are read-only.
    pub fn rename(&self, id: TodoId, title: impl Into<String>) -> RepoResult<()> {
        let item = self.require(id)?;
        if item.completed {
            return Err(RepoError::InvalidData(format!(
                "todo {id} is completed and its title is read-only"
            )));
        }
        let title = title.into();
        self.repo.update(id, &TodoChanges::title(title.trim()))
    }

    /// Removes an item outright.
    pub fn remove(&self, id: TodoId) -> RepoResult<()> {
        self.repo.delete(id)
    }

    /// Runs one lifespan pass over the whole store.
    pub fn sweep(&self, policy: &LifespanPolicy, now: i64) -> RepoResult<SweepOutcome> {
        run_sweep(&self.repo, policy, now)
    }

    fn require(&self, id: TodoId) -> RepoResult<TodoItem> {
        self.repo.get(id)?.ok_or(RepoError::NotFound(id))
    }
}
