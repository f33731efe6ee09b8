use crate::models::issue::{priority_tone, status_icon, Issue, PRIORITY_URGENT};
use crate::SharedDashboard;
use serde::{Deserialize, Serialize};

/// Everything the map needs to draw one issue marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub id: String,
    pub title: String,
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub tone: String, // priority tone token
    pub icon: String, // status icon token
    pub pulse: bool,  // urgent markers get the pulsing halo
    pub left_pct: f64,
    pub top_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lng: f64,
}

/// Markers for the currently filtered issues. Placement is a deterministic
/// spread keyed on list position, so the same filter always draws the same
/// layout.
pub fn get_map_markers(state: &SharedDashboard) -> Result<Vec<MapMarker>, String> {
    let state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    Ok(project_markers(&state_lock.filtered()))
}

/// Center of the currently visible markers, if any.
pub fn get_map_center(state: &SharedDashboard) -> Result<Option<MapCenter>, String> {
    let state_lock = state.lock().map_err(|_| "State lock error".to_string())?;
    Ok(map_center(&state_lock.filtered()))
}

pub fn project_markers(issues: &[Issue]) -> Vec<MapMarker> {
    issues
        .iter()
        .enumerate()
        .map(|(index, issue)| MapMarker {
            id: issue.id.clone(),
            title: issue.title.clone(),
            lat: issue.location.lat,
            lng: issue.location.lng,
            address: issue.location.address.clone(),
            tone: priority_tone(&issue.priority).to_string(),
            icon: status_icon(&issue.status).to_string(),
            pulse: issue.priority == PRIORITY_URGENT,
            left_pct: (30 + (index * 15) % 40) as f64,
            top_pct: (40 + (index * 12) % 30) as f64,
        })
        .collect()
}

/// Mean coordinate of the visible issues; `None` when nothing is visible.
pub fn map_center(issues: &[Issue]) -> Option<MapCenter> {
    if issues.is_empty() {
        return None;
    }
    let count = issues.len() as f64;
    Some(MapCenter {
        lat: issues.iter().map(|i| i.location.lat).sum::<f64>() / count,
        lng: issues.iter().map(|i| i.location.lng).sum::<f64>() / count,
    })
}
