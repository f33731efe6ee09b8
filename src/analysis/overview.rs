use crate::models::issue::{
    Issue, PRIORITY_URGENT, STATUS_IN_PROGRESS, STATUS_NEW, STATUS_RESOLVED,
};
use crate::models::stats::OverviewStats;

/// Count the headline numbers for the stat cards. Each counter is an exact
/// match on one field, so the status counters are mutually exclusive.
pub fn overview_stats(issues: &[Issue]) -> OverviewStats {
    OverviewStats {
        total_issues: issues.len(),
        new_issues: count_status(issues, STATUS_NEW),
        in_progress: count_status(issues, STATUS_IN_PROGRESS),
        resolved: count_status(issues, STATUS_RESOLVED),
        urgent_issues: issues
            .iter()
            .filter(|i| i.priority == PRIORITY_URGENT)
            .count(),
    }
}

/// Share of resolved issues as a whole percent. An empty store reads as 0
/// rather than dividing by zero.
pub fn resolution_rate(issues: &[Issue]) -> u32 {
    let total = issues.len();
    if total == 0 {
        return 0;
    }
    let resolved = count_status(issues, STATUS_RESOLVED);
    ((resolved as f64 / total as f64) * 100.0).round() as u32
}

fn count_status(issues: &[Issue], status: &str) -> usize {
    issues.iter().filter(|i| i.status == status).count()
}
