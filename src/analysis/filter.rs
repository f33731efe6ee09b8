use crate::models::issue::Issue;
use serde::{Deserialize, Serialize};

/// Sentinel value that lets every record through a selector filter.
pub const FILTER_ALL: &str = "all";

/// The four independent filter criteria. An empty query and "all" selectors
/// pass the whole store through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub query: String,
    pub category: String,
    pub status: String,
    pub priority: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            query: String::new(),
            category: FILTER_ALL.to_string(),
            status: FILTER_ALL.to_string(),
            priority: FILTER_ALL.to_string(),
        }
    }
}

impl FilterCriteria {
    /// True when every criterion is at its pass-through sentinel.
    pub fn is_passthrough(&self) -> bool {
        self.query.is_empty()
            && self.category == FILTER_ALL
            && self.status == FILTER_ALL
            && self.priority == FILTER_ALL
    }
}

/// Select the subsequence of issues satisfying all four criteria, in input
/// order. An empty result is a valid state, not an error.
pub fn filter_issues(issues: &[Issue], criteria: &FilterCriteria) -> Vec<Issue> {
    let query = criteria.query.to_lowercase();
    issues
        .iter()
        .filter(|issue| matches(issue, criteria, &query))
        .cloned()
        .collect()
}

fn matches(issue: &Issue, criteria: &FilterCriteria, query: &str) -> bool {
    let matches_search = query.is_empty()
        || issue.title.to_lowercase().contains(query)
        || issue.description.to_lowercase().contains(query);
    let matches_category = criteria.category == FILTER_ALL || issue.category == criteria.category;
    let matches_status = criteria.status == FILTER_ALL || issue.status == criteria.status;
    let matches_priority = criteria.priority == FILTER_ALL || issue.priority == criteria.priority;

    matches_search && matches_category && matches_status && matches_priority
}
