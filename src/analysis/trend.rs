use crate::models::issue::Issue;
use crate::models::stats::DailyCount;
use chrono::{Duration, NaiveDate};

/// The 7 calendar days ending at `today` inclusive, oldest first.
pub fn last_seven_days(today: NaiveDate) -> Vec<NaiveDate> {
    (0..7).map(|i| today - Duration::days(6 - i)).collect()
}

/// Submission counts for the 7 calendar days ending at `today`. Always
/// exactly 7 entries in chronological order, zero-count days included.
/// Matching is a string-prefix test against the UTC calendar date, so
/// unparseable `submittedAt` values simply never match.
pub fn daily_trend(issues: &[Issue], today: NaiveDate) -> Vec<DailyCount> {
    last_seven_days(today)
        .into_iter()
        .map(|day| {
            let date = day.format("%Y-%m-%d").to_string();
            let count = issues
                .iter()
                .filter(|issue| issue.submitted_at.starts_with(&date))
                .count();
            DailyCount {
                date,
                label: day.format("%b %-d").to_string(),
                count,
            }
        })
        .collect()
}
