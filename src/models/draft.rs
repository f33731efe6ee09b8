use crate::models::issue::{Issue, Priority, Status, STATUS_RESOLVED};
use serde::{Deserialize, Serialize};

/// Staff members offered by the assignment dropdown.
pub const ASSIGNEE_OPTIONS: [&str; 4] = [
    "Mike Wilson",
    "Sarah Brown",
    "John Davis",
    "Lisa Johnson",
];

/// Snapshot of the editable fields at the moment the detail view opened.
/// Used only to answer `is_dirty`.
#[derive(Debug, Clone, Default, PartialEq)]
struct DraftBaseline {
    status: Status,
    assigned_to: String,
    priority: Priority,
    estimated_completion: Option<String>,
}

/// Provisional edits held while a single issue's detail view is open.
/// Everything here is scoped to the view's lifetime: closing the view drops
/// the draft and the backing store never sees these values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDraft {
    pub issue_id: String,
    pub status: Status,
    pub assigned_to: String, // empty string = unassigned
    pub priority: Priority,
    pub estimated_completion: Option<String>,
    pub pending_comment: String,
    #[serde(skip)]
    baseline: DraftBaseline,
}

impl IssueDraft {
    /// Initialize a draft from the issue's current field values.
    pub fn for_issue(issue: &Issue) -> Self {
        let baseline = DraftBaseline {
            status: issue.status.clone(),
            assigned_to: issue.assigned_to.clone().unwrap_or_default(),
            priority: issue.priority.clone(),
            estimated_completion: issue.estimated_completion.clone(),
        };

        IssueDraft {
            issue_id: issue.id.clone(),
            status: baseline.status.clone(),
            assigned_to: baseline.assigned_to.clone(),
            priority: baseline.priority.clone(),
            estimated_completion: baseline.estimated_completion.clone(),
            pending_comment: String::new(),
            baseline,
        }
    }

    /// Whether any editable field differs from the values the view opened
    /// with. The pending comment counts: typed-but-unposted text is an edit.
    pub fn is_dirty(&self) -> bool {
        self.status != self.baseline.status
            || self.assigned_to != self.baseline.assigned_to
            || self.priority != self.baseline.priority
            || self.estimated_completion != self.baseline.estimated_completion
            || !self.pending_comment.is_empty()
    }

    /// The "Mark as Resolved" shortcut. Draft-local like every other edit.
    pub fn mark_resolved(&mut self) {
        self.status = STATUS_RESOLVED.to_string();
    }

    /// A display copy of the issue with the draft's edits applied, for
    /// rendering the open detail view. The original issue is untouched.
    pub fn preview(&self, issue: &Issue) -> Issue {
        let mut shown = issue.clone();
        shown.status = self.status.clone();
        shown.assigned_to = if self.assigned_to.is_empty() {
            None
        } else {
            Some(self.assigned_to.clone())
        };
        shown.priority = self.priority.clone();
        shown.estimated_completion = self.estimated_completion.clone();
        shown
    }
}
