use crate::analysis::breakdown::{category_breakdown, department_breakdown, priority_breakdown};
use crate::analysis::overview::resolution_rate;
use crate::analysis::trend::daily_trend;
use crate::models::issue::{Issue, PRIORITY_URGENT, STATUS_RESOLVED};
use crate::models::stats::{AnalyticsReport, Insights};
use chrono::NaiveDate;

/// Assemble the full analytics payload. `today` anchors the trend window so
/// callers (and tests) control the clock.
pub fn analytics_report(issues: &[Issue], today: NaiveDate) -> AnalyticsReport {
    let department_stats = department_breakdown(issues);

    AnalyticsReport {
        total_issues: issues.len(),
        resolved_issues: issues.iter().filter(|i| i.status == STATUS_RESOLVED).count(),
        resolution_rate: resolution_rate(issues),
        active_departments: department_stats.len(),
        category_stats: category_breakdown(issues),
        department_stats,
        priority_stats: priority_breakdown(issues),
        daily_stats: daily_trend(issues, today),
    }
}

/// The ranked highlights of the insights panel. Top entries come from the
/// stable ranking, so ties resolve to the first-encountered value.
pub fn insights(issues: &[Issue]) -> Insights {
    Insights {
        most_active_category: category_breakdown(issues).top().map(String::from),
        best_performing_department: department_breakdown(issues).top().map(String::from),
        urgent_issues: issues
            .iter()
            .filter(|i| i.priority == PRIORITY_URGENT)
            .count(),
    }
}
