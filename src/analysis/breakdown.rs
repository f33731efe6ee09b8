use crate::models::issue::Issue;
use crate::models::stats::CountMap;

/// Group issues by one field and count occurrences. Keys appear only when
/// present in the input, in first-encounter order; out-of-enum values are
/// counted under their literal string rather than rejected.
pub fn count_by<F>(issues: &[Issue], key: F) -> CountMap
where
    F: Fn(&Issue) -> &str,
{
    let mut counts = CountMap::new();
    for issue in issues {
        counts.bump(key(issue));
    }
    counts
}

pub fn category_breakdown(issues: &[Issue]) -> CountMap {
    count_by(issues, |issue| &issue.category)
}

pub fn department_breakdown(issues: &[Issue]) -> CountMap {
    count_by(issues, |issue| &issue.department)
}

pub fn priority_breakdown(issues: &[Issue]) -> CountMap {
    count_by(issues, |issue| &issue.priority)
}
