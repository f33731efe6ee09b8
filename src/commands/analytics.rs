use crate::analysis::{insights, overview};
use crate::models::stats::{AnalyticsReport, Insights, OverviewStats};
use crate::SharedDashboard;
use chrono::Utc;

/// Stat-card counters. Computed over the full store: the headline numbers
/// do not react to list filters.
pub fn get_overview(state: &SharedDashboard) -> Result<OverviewStats, String> {
    let state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    Ok(overview::overview_stats(&state_lock.issues))
}

/// The analytics view payload, anchored to today's UTC date.
pub fn get_analytics(state: &SharedDashboard) -> Result<AnalyticsReport, String> {
    let state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    Ok(insights::analytics_report(
        &state_lock.issues,
        Utc::now().date_naive(),
    ))
}

/// The ranked insights panel.
pub fn get_insights(state: &SharedDashboard) -> Result<Insights, String> {
    let state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    Ok(insights::insights(&state_lock.issues))
}
