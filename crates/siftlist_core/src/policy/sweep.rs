//! Explicit lifespan sweep over the whole store.
//!
//! The shipped design evaluates lifespans as an independent pass so it
//! can run on a timer, on demand, or inside tests, with no presentation
//! callback involved.

use crate::policy::lifespan::{LifespanAction, LifespanPolicy};
use crate::repo::todo_repo::{RepoResult, TodoChanges, TodoRepository};
use log::{debug, info};

/// Counts of what one sweep pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepOutcome {
    pub examined: usize,
    pub demoted: usize,
    pub deleted: usize,
}

/// Applies `policy` to every stored item at time `now`.
///
/// Each item receives at most one action per pass: active items past
/// their tier lifespan drop one tier, completed items past their
/// retention window are deleted. Creation timestamps are never touched,
/// so a long-idle item crosses multiple tiers only across multiple
/// passes.
pub fn run_sweep<R: TodoRepository>(
    repo: &R,
    policy: &LifespanPolicy,
    now: i64,
) -> RepoResult<SweepOutcome> {
    let mut outcome = SweepOutcome::default();

    for item in repo.list_all()? {
        outcome.examined += 1;
        match policy.evaluate(item.priority, item.completed, item.age_secs(now)) {
            LifespanAction::Keep => {}
            LifespanAction::Demote(target) => {
                repo.update(item.id, &TodoChanges::priority(target))?;
                outcome.demoted += 1;
                debug!(
                    "event=sweep_demote module=policy id={} from={} to={}",
                    item.id,
                    item.priority.code(),
                    target.code()
                );
            }
            LifespanAction::Delete => {
                repo.delete(item.id)?;
                outcome.deleted += 1;
                debug!("event=sweep_delete module=policy id={}", item.id);
            }
        }
    }

    info!(
        "event=sweep module=policy status=ok examined={} demoted={} deleted={}",
        outcome.examined, outcome.demoted, outcome.deleted
    );
    Ok(outcome)
}
