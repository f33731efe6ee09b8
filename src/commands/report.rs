use crate::models::issue::{
    is_known_category, is_known_priority, Issue, Location, STATUS_NEW,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Intake form for a newly reported issue. Ids, status, and the submission
/// timestamp are assigned at construction, never supplied by the reporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIssueReport {
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    pub location: Location,
    pub department: String,
    pub submitted_by: String,
    #[serde(default)]
    pub photos: Vec<String>,
}

/// Validate a report and construct the issue record. The shared store is
/// fixed at startup, so the built record is returned to the caller rather
/// than inserted anywhere.
pub fn submit_report(report: NewIssueReport) -> Result<Issue, String> {
    validate(&report)?;

    let issue = Issue {
        id: Uuid::new_v4().to_string(),
        title: report.title,
        description: report.description,
        category: report.category,
        priority: report.priority,
        status: STATUS_NEW.to_string(),
        location: report.location,
        department: report.department,
        submitted_by: report.submitted_by,
        submitted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        assigned_to: None,
        photos: report.photos,
        estimated_completion: None,
    };

    log::info!("report accepted as issue {}", issue.id);
    Ok(issue)
}

fn validate(report: &NewIssueReport) -> Result<(), String> {
    if report.title.trim().is_empty() {
        return Err("Report title must not be empty".to_string());
    }
    if report.description.trim().is_empty() {
        return Err("Report description must not be empty".to_string());
    }
    if report.location.address.trim().is_empty() {
        return Err("Report address must not be empty".to_string());
    }
    if !is_known_category(&report.category) {
        return Err(format!("Unknown category: {}", report.category));
    }
    if !is_known_priority(&report.priority) {
        return Err(format!("Unknown priority: {}", report.priority));
    }
    Ok(())
}
