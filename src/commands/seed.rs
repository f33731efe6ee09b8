use crate::models::issue::{Issue, Location};
use std::fs;
use std::path::Path;

/// Parse a seed dataset from a JSON array of issue records. Malformed JSON
/// is the one hard failure of the intake path; field values are not
/// validated beyond shape, so out-of-enum strings flow through by design.
pub fn load_seed(raw: &str) -> Result<Vec<Issue>, String> {
    serde_json::from_str(raw).map_err(|e| format!("Failed to parse seed data: {e}"))
}

/// Read and parse a seed dataset from a file on disk.
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<Vec<Issue>, String> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read seed file {}: {e}", path.display()))?;
    let issues = load_seed(&raw)?;
    log::info!("loaded {} issues from {}", issues.len(), path.display());
    Ok(issues)
}

/// The five-record demonstration dataset the dashboard ships with.
pub fn demo_issues() -> Vec<Issue> {
    const PHOTO: &str = "https://images.pexels.com/photos/1105766/pexels-photo-1105766.jpeg";

    vec![
        Issue {
            id: "1".to_string(),
            title: "Large pothole on Main Street".to_string(),
            description:
                "Deep pothole causing damage to vehicles. Located near intersection with Oak Ave."
                    .to_string(),
            category: "pothole".to_string(),
            priority: "urgent".to_string(),
            status: "new".to_string(),
            location: Location {
                lat: 28.6139,
                lng: 77.2090,
                address: "Connaught Place, New Delhi, Delhi 110001".to_string(),
            },
            department: "Public Works".to_string(),
            submitted_by: "John Smith".to_string(),
            submitted_at: "2025-01-13T08:30:00Z".to_string(),
            assigned_to: None,
            photos: vec![PHOTO.to_string()],
            estimated_completion: None,
        },
        Issue {
            id: "2".to_string(),
            title: "Broken streetlight".to_string(),
            description: "Streetlight has been out for 3 days, creating safety hazard.".to_string(),
            category: "streetlight".to_string(),
            priority: "high".to_string(),
            status: "assigned".to_string(),
            location: Location {
                lat: 19.0760,
                lng: 72.8777,
                address: "Marine Drive, Mumbai, Maharashtra 400020".to_string(),
            },
            department: "Electrical".to_string(),
            submitted_by: "Mary Johnson".to_string(),
            submitted_at: "2025-01-12T14:15:00Z".to_string(),
            assigned_to: Some("Mike Wilson".to_string()),
            photos: vec![PHOTO.to_string()],
            estimated_completion: Some("2025-01-15T17:00:00Z".to_string()),
        },
        Issue {
            id: "3".to_string(),
            title: "Overflowing trash bin".to_string(),
            description: "Trash bin at park entrance is overflowing, attracting pests.".to_string(),
            category: "trash".to_string(),
            priority: "medium".to_string(),
            status: "in-progress".to_string(),
            location: Location {
                lat: 13.0827,
                lng: 80.2707,
                address: "Marina Beach, Chennai, Tamil Nadu 600013".to_string(),
            },
            department: "Sanitation".to_string(),
            submitted_by: "Robert Davis".to_string(),
            submitted_at: "2025-01-11T10:45:00Z".to_string(),
            assigned_to: Some("Sarah Brown".to_string()),
            photos: vec![PHOTO.to_string()],
            estimated_completion: None,
        },
        Issue {
            id: "4".to_string(),
            title: "Road construction debris".to_string(),
            description: "Construction materials blocking pedestrian walkway near metro station."
                .to_string(),
            category: "other".to_string(),
            priority: "high".to_string(),
            status: "new".to_string(),
            location: Location {
                lat: 12.9716,
                lng: 77.5946,
                address: "MG Road, Bangalore, Karnataka 560001".to_string(),
            },
            department: "Public Works".to_string(),
            submitted_by: "Priya Sharma".to_string(),
            submitted_at: "2025-01-13T11:20:00Z".to_string(),
            assigned_to: None,
            photos: vec![PHOTO.to_string()],
            estimated_completion: None,
        },
        Issue {
            id: "5".to_string(),
            title: "Water logging after rain".to_string(),
            description: "Severe water logging making roads impassable during monsoon.".to_string(),
            category: "other".to_string(),
            priority: "urgent".to_string(),
            status: "assigned".to_string(),
            location: Location {
                lat: 22.5726,
                lng: 88.3639,
                address: "Park Street, Kolkata, West Bengal 700016".to_string(),
            },
            department: "Water Management".to_string(),
            submitted_by: "Amit Kumar".to_string(),
            submitted_at: "2025-01-12T16:45:00Z".to_string(),
            assigned_to: Some("Rajesh Gupta".to_string()),
            photos: vec![PHOTO.to_string()],
            estimated_completion: Some("2025-01-16T12:00:00Z".to_string()),
        },
    ]
}
