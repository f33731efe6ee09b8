use crate::models::issue::Issue;
use crate::SharedDashboard;

/// Copy shown by the list views when a filter combination matches nothing.
/// An empty result is a valid state, not an error.
pub const EMPTY_RESULT_MESSAGE: &str = "No issues found";
pub const EMPTY_RESULT_HINT: &str = "Try adjusting your filters";

/// Issues as the current filter criteria see them, in store order. Both the
/// dashboard list and the issues table render from this.
pub fn list_issues(state: &SharedDashboard) -> Result<Vec<Issue>, String> {
    let state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    Ok(state_lock.filtered())
}

/// Look one issue up by id, ignoring filters.
pub fn get_issue(state: &SharedDashboard, id: &str) -> Result<Issue, String> {
    let state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    state_lock
        .issue(id)
        .cloned()
        .ok_or(format!("Issue not found: {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::seed::demo_issues;
    use crate::run;

    #[test]
    fn list_returns_the_whole_store_with_default_filters() {
        let state = run(demo_issues());
        let issues = list_issues(&state).expect("list issues");
        assert_eq!(issues.len(), 5);
        assert_eq!(issues[0].id, "1");
    }

    #[test]
    fn lookup_ignores_active_filters() {
        let state = run(demo_issues());
        state
            .lock()
            .expect("lock state")
            .filters
            .priority = "urgent".to_string();

        let issue = get_issue(&state, "3").expect("lookup issue");
        assert_eq!(issue.category, "trash");
    }

    #[test]
    fn unknown_id_is_an_error() {
        let state = run(demo_issues());
        let err = get_issue(&state, "42").expect_err("should fail");
        assert_eq!(err, "Issue not found: 42");
    }
}
