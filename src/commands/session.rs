use crate::models::dashboard::CurrentView;
use crate::models::draft::IssueDraft;
use crate::models::issue::Issue;
use crate::SharedDashboard;
use serde::{Deserialize, Serialize};

/// Header copy for the active view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewHeader {
    pub title: String,
    pub subtitle: String,
}

/// Partial update for the open detail view's draft. Absent fields are left
/// untouched; an empty `assigned_to` means unassigned and an empty
/// `estimated_completion` clears the estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPatch {
    pub status: Option<String>,
    pub assigned_to: Option<String>,
    pub priority: Option<String>,
    pub estimated_completion: Option<String>,
    pub pending_comment: Option<String>,
}

pub fn set_view(state: &SharedDashboard, view: CurrentView) -> Result<ViewHeader, String> {
    let mut state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    state_lock.current_view = view;
    Ok(ViewHeader {
        title: view.title().to_string(),
        subtitle: view.subtitle().to_string(),
    })
}

pub fn get_view(state: &SharedDashboard) -> Result<CurrentView, String> {
    let state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    Ok(state_lock.current_view)
}

/// Filter setters recompute synchronously; each returns the new visible
/// count so list headers can update in the same round trip.
pub fn set_search_query(state: &SharedDashboard, query: String) -> Result<usize, String> {
    let mut state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    state_lock.filters.query = query;
    Ok(state_lock.filtered().len())
}

pub fn set_category_filter(state: &SharedDashboard, category: String) -> Result<usize, String> {
    let mut state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    state_lock.filters.category = category;
    Ok(state_lock.filtered().len())
}

pub fn set_status_filter(state: &SharedDashboard, status: String) -> Result<usize, String> {
    let mut state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    state_lock.filters.status = status;
    Ok(state_lock.filtered().len())
}

pub fn set_priority_filter(state: &SharedDashboard, priority: String) -> Result<usize, String> {
    let mut state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    state_lock.filters.priority = priority;
    Ok(state_lock.filtered().len())
}

/// Reset every criterion to its pass-through sentinel.
pub fn clear_filters(state: &SharedDashboard) -> Result<usize, String> {
    let mut state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    state_lock.filters = Default::default();
    Ok(state_lock.issues.len())
}

/// Open an issue's detail view. Initializes a fresh draft from the issue's
/// current values; any draft for a previously open issue is discarded.
pub fn open_issue(state: &SharedDashboard, id: &str) -> Result<IssueDraft, String> {
    let mut state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    let draft = state_lock
        .issue(id)
        .map(IssueDraft::for_issue)
        .ok_or(format!("Issue not found: {id}"))?;
    log::debug!("opening detail view for issue {id}");
    state_lock.draft = Some(draft.clone());
    Ok(draft)
}

/// Close the detail view, discarding the draft with no confirmation and no
/// write-back.
pub fn close_issue(state: &SharedDashboard) -> Result<(), String> {
    let mut state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    if let Some(draft) = state_lock.draft.take() {
        if draft.is_dirty() {
            log::debug!("discarding unsaved edits for issue {}", draft.issue_id);
        }
    }
    Ok(())
}

/// The issue currently open in the detail view, rendered with its draft
/// edits applied.
pub fn selected_issue(state: &SharedDashboard) -> Result<Option<Issue>, String> {
    let state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    let Some(draft) = state_lock.draft.as_ref() else {
        return Ok(None);
    };
    Ok(state_lock
        .issue(&draft.issue_id)
        .map(|issue| draft.preview(issue)))
}

/// Apply a partial edit to the open draft.
pub fn update_draft(state: &SharedDashboard, patch: DraftPatch) -> Result<IssueDraft, String> {
    let mut state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    let draft = state_lock
        .draft
        .as_mut()
        .ok_or("No issue is open for editing".to_string())?;

    if let Some(status) = patch.status {
        draft.status = status;
    }
    if let Some(assigned_to) = patch.assigned_to {
        draft.assigned_to = assigned_to;
    }
    if let Some(priority) = patch.priority {
        draft.priority = priority;
    }
    if let Some(estimated_completion) = patch.estimated_completion {
        draft.estimated_completion = if estimated_completion.is_empty() {
            None
        } else {
            Some(estimated_completion)
        };
    }
    if let Some(pending_comment) = patch.pending_comment {
        draft.pending_comment = pending_comment;
    }

    Ok(draft.clone())
}

/// The "Mark as Resolved" button.
pub fn mark_resolved(state: &SharedDashboard) -> Result<IssueDraft, String> {
    let mut state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    let draft = state_lock
        .draft
        .as_mut()
        .ok_or("No issue is open for editing".to_string())?;
    draft.mark_resolved();
    Ok(draft.clone())
}
