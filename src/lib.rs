pub mod analysis;
pub mod commands;
pub mod models;

use models::dashboard::DashboardState;
use models::issue::Issue;
use std::sync::{Arc, Mutex};

/// Handle the presentation layer holds on the dashboard session. All
/// mutation goes through the command functions; the lock is never held
/// across a command boundary.
pub type SharedDashboard = Arc<Mutex<DashboardState>>;

/// Assemble a dashboard session from an injected seed dataset. The store is
/// fixed for the lifetime of the session; detail-view edits stay in their
/// transient drafts.
pub fn run(seed: Vec<Issue>) -> SharedDashboard {
    let _ = env_logger::try_init();
    log::info!("dashboard session starting with {} seeded issues", seed.len());
    Arc::new(Mutex::new(DashboardState::new(seed)))
}
