use crate::analysis::filter::{filter_issues, FilterCriteria};
use crate::models::draft::IssueDraft;
use crate::models::issue::Issue;
use serde::{Deserialize, Serialize};

/// The three top-level views of the dashboard shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrentView {
    #[default]
    Dashboard,
    Issues,
    Analytics,
}

impl CurrentView {
    /// Navigation order of the sidebar.
    pub const ALL: [CurrentView; 3] = [
        CurrentView::Dashboard,
        CurrentView::Issues,
        CurrentView::Analytics,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            CurrentView::Dashboard => "Dashboard",
            CurrentView::Issues => "Issues Management",
            CurrentView::Analytics => "Analytics",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            CurrentView::Dashboard => "Real-time overview of civic issues",
            CurrentView::Issues => "Manage and track all reported issues",
            CurrentView::Analytics => "Performance insights and trends",
        }
    }
}

/// Session state shared by every view: the injected issue store plus the
/// UI-agnostic pieces the shell tracks between renders. The store is fixed
/// for the lifetime of the session; the draft is the only mutable record
/// state and it never writes back.
#[derive(Debug, Default)]
pub struct DashboardState {
    pub issues: Vec<Issue>,
    pub current_view: CurrentView,
    pub filters: FilterCriteria,
    pub draft: Option<IssueDraft>, // present iff a detail view is open
}

impl DashboardState {
    pub fn new(seed: Vec<Issue>) -> Self {
        DashboardState {
            issues: seed,
            ..DashboardState::default()
        }
    }

    pub fn issue(&self, id: &str) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.id == id)
    }

    /// The store as the current filter criteria see it.
    pub fn filtered(&self) -> Vec<Issue> {
        filter_issues(&self.issues, &self.filters)
    }

    /// Id of the issue whose detail view is open, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.draft.as_ref().map(|draft| draft.issue_id.as_str())
    }
}
