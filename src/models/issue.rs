use serde::{Deserialize, Serialize};

/// Category/priority/status are open string fields. The known values below
/// cover everything the intake forms produce, but aggregation must keep
/// working when seed data carries values outside these tables.
pub type Category = String;
pub type Priority = String;
pub type Status = String;

pub const CATEGORY_POTHOLE: &str = "pothole";
pub const CATEGORY_STREETLIGHT: &str = "streetlight";
pub const CATEGORY_TRASH: &str = "trash";
pub const CATEGORY_GRAFFITI: &str = "graffiti";
pub const CATEGORY_OTHER: &str = "other";

pub const PRIORITY_URGENT: &str = "urgent";
pub const PRIORITY_HIGH: &str = "high";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_LOW: &str = "low";

pub const STATUS_NEW: &str = "new";
pub const STATUS_ASSIGNED: &str = "assigned";
pub const STATUS_IN_PROGRESS: &str = "in-progress";
pub const STATUS_RESOLVED: &str = "resolved";

/// Known values in the order the selector UIs present them.
pub const CATEGORIES: [&str; 5] = [
    CATEGORY_POTHOLE,
    CATEGORY_STREETLIGHT,
    CATEGORY_TRASH,
    CATEGORY_GRAFFITI,
    CATEGORY_OTHER,
];
pub const PRIORITIES: [&str; 4] = [
    PRIORITY_URGENT,
    PRIORITY_HIGH,
    PRIORITY_MEDIUM,
    PRIORITY_LOW,
];
pub const STATUSES: [&str; 4] = [
    STATUS_NEW,
    STATUS_ASSIGNED,
    STATUS_IN_PROGRESS,
    STATUS_RESOLVED,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// A single reported civic problem. Field names on the wire follow the seed
/// data shape (`submittedAt`, `assignedTo`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category, // "pothole" | "streetlight" | "trash" | "graffiti" | "other"
    pub priority: Priority, // "urgent" | "high" | "medium" | "low"
    pub status: Status,     // "new" | "assigned" | "in-progress" | "resolved"
    pub location: Location,
    pub department: String,
    pub submitted_by: String,
    pub submitted_at: String, // ISO-8601, immutable after creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_completion: Option<String>,
}

/// One line in the detail view's activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub author: String,
    pub message: String,
    pub timestamp: String,
    pub kind: String, // "system" | "staff"
}

impl Issue {
    /// The system entry every issue starts its activity feed with.
    pub fn routing_entry(&self) -> ActivityEntry {
        ActivityEntry {
            author: "System".to_string(),
            message: format!(
                "Issue automatically routed to {} department",
                self.department
            ),
            timestamp: self.submitted_at.clone(),
            kind: "system".to_string(),
        }
    }
}

pub fn is_known_category(value: &str) -> bool {
    CATEGORIES.contains(&value)
}

pub fn is_known_priority(value: &str) -> bool {
    PRIORITIES.contains(&value)
}

pub fn is_known_status(value: &str) -> bool {
    STATUSES.contains(&value)
}

/// Badge/marker tone token for a priority value. Unknown values get the
/// neutral tone, matching how the views render out-of-set data.
pub fn priority_tone(priority: &str) -> &'static str {
    match priority {
        PRIORITY_URGENT => "red",
        PRIORITY_HIGH => "orange",
        PRIORITY_MEDIUM => "blue",
        PRIORITY_LOW => "gray",
        _ => "gray",
    }
}

/// Badge tone token for a status value.
pub fn status_tone(status: &str) -> &'static str {
    match status {
        STATUS_NEW => "red",
        STATUS_ASSIGNED => "yellow",
        STATUS_IN_PROGRESS => "blue",
        STATUS_RESOLVED => "green",
        _ => "gray",
    }
}

/// Icon token shown next to a status badge and on map markers.
pub fn status_icon(status: &str) -> &'static str {
    match status {
        STATUS_NEW => "alert-triangle",
        STATUS_ASSIGNED => "clock",
        STATUS_IN_PROGRESS => "clock-spin",
        STATUS_RESOLVED => "check-circle",
        _ => "circle",
    }
}

/// Human label for a status value: "in-progress" -> "In Progress".
pub fn status_label(status: &str) -> String {
    status
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Short timestamp for list rows: "Jan 13, 08:30 AM". Falls back to the raw
/// string when the value is not a parseable ISO-8601 timestamp.
pub fn format_timestamp_short(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%b %-d, %I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Long timestamp for the detail view: "January 13, 2025, 08:30 AM".
pub fn format_timestamp_long(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%B %-d, %Y, %I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_split_on_hyphen() {
        assert_eq!(status_label("in-progress"), "In Progress");
        assert_eq!(status_label("new"), "New");
        assert_eq!(status_label(""), "");
    }

    #[test]
    fn unknown_values_get_neutral_tones() {
        assert_eq!(priority_tone("severe"), "gray");
        assert_eq!(status_tone("reopened"), "gray");
        assert_eq!(status_icon("reopened"), "circle");
    }

    #[test]
    fn timestamps_format_and_fall_back() {
        assert_eq!(
            format_timestamp_short("2025-01-13T08:30:00Z"),
            "Jan 13, 08:30 AM"
        );
        assert_eq!(
            format_timestamp_long("2025-01-13T08:30:00Z"),
            "January 13, 2025, 08:30 AM"
        );
        assert_eq!(format_timestamp_short("not-a-date"), "not-a-date");
    }

    #[test]
    fn issue_round_trips_with_wire_field_names() {
        let raw = r#"{
            "id": "1",
            "title": "Large pothole on Main Street",
            "description": "Deep pothole causing damage to vehicles.",
            "category": "pothole",
            "priority": "urgent",
            "status": "new",
            "location": { "lat": 28.6139, "lng": 77.209, "address": "Connaught Place, New Delhi" },
            "department": "Public Works",
            "submittedBy": "John Smith",
            "submittedAt": "2025-01-13T08:30:00Z",
            "photos": []
        }"#;

        let issue: Issue = serde_json::from_str(raw).expect("deserialize issue");
        assert_eq!(issue.submitted_by, "John Smith");
        assert_eq!(issue.assigned_to, None);

        let encoded = serde_json::to_value(&issue).expect("serialize issue");
        assert_eq!(encoded["submittedAt"], "2025-01-13T08:30:00Z");
        assert!(encoded.get("assignedTo").is_none());
    }

    #[test]
    fn routing_entry_names_the_department() {
        let issue = Issue {
            id: "9".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            category: CATEGORY_OTHER.to_string(),
            priority: PRIORITY_LOW.to_string(),
            status: STATUS_NEW.to_string(),
            location: Location {
                lat: 0.0,
                lng: 0.0,
                address: "a".to_string(),
            },
            department: "Sanitation".to_string(),
            submitted_by: "s".to_string(),
            submitted_at: "2025-01-13T08:30:00Z".to_string(),
            assigned_to: None,
            photos: vec![],
            estimated_completion: None,
        };

        let entry = issue.routing_entry();
        assert_eq!(
            entry.message,
            "Issue automatically routed to Sanitation department"
        );
        assert_eq!(entry.kind, "system");
        assert_eq!(entry.timestamp, issue.submitted_at);
    }
}
