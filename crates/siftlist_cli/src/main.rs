//! Launch entry point.
//!
//! No flags: resolve the user profile, open the store, run one lifespan
//! sweep through the shell and print the visible tiers. Anything richer
//! than this plain-text rendering belongs to a presentation layer, not
//! to this workspace.

use siftlist_core::clock::now_epoch_secs;
use siftlist_core::db::open_db;
use siftlist_core::logging::{default_log_level, init_logging};
use siftlist_core::paths::AppPaths;
use siftlist_core::repo::todo_repo::SqliteTodoRepository;
use siftlist_core::service::todo_service::TodoService;
use siftlist_core::shell::Shell;
use siftlist_core::LifespanPolicy;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("siftlist: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let paths = AppPaths::resolve().map_err(|err| err.to_string())?;
    paths.ensure().map_err(|err| err.to_string())?;

    if let Err(message) = init_logging(default_log_level(), &paths.log_dir) {
        // Logging is diagnostics only; the app keeps working without it.
        eprintln!("siftlist: {message}");
    }

    let conn = open_db(&paths.db_file).map_err(|err| err.to_string())?;
    let repo = SqliteTodoRepository::try_new(&conn).map_err(|err| err.to_string())?;
    let mut shell = Shell::new(TodoService::new(repo), LifespanPolicy::default());
    shell.refresh(now_epoch_secs());

    for view in shell.visible_views() {
        println!("== {} ==", view.priority().label());
        if view.is_empty() {
            println!("  (empty)");
            continue;
        }
        for row in view.rows() {
            let mark = if row.is_checked() { "x" } else { " " };
            println!("  [{mark}] {} ({})", row.title, row.age_display);
        }
    }

    Ok(())
}
