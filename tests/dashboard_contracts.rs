use std::fs;
use tempfile::TempDir;

use civiclens_lib::commands::analytics::{get_analytics, get_insights, get_overview};
use civiclens_lib::commands::issues::{
    get_issue, list_issues, EMPTY_RESULT_HINT, EMPTY_RESULT_MESSAGE,
};
use civiclens_lib::commands::map_view::get_map_markers;
use civiclens_lib::commands::report::{submit_report, NewIssueReport};
use civiclens_lib::commands::seed::{demo_issues, load_seed_file};
use civiclens_lib::commands::session::{
    clear_filters, close_issue, open_issue, selected_issue, set_priority_filter,
    set_search_query, set_view, update_draft, DraftPatch,
};
use civiclens_lib::models::dashboard::CurrentView;
use civiclens_lib::models::issue::Location;
use civiclens_lib::run;

fn write_seed_file(dir: &TempDir) -> String {
    let path = dir.path().join("seed.json");
    let raw = serde_json::to_string_pretty(&demo_issues()).expect("serialize seed");
    fs::write(&path, raw).expect("write seed file");
    path.to_string_lossy().to_string()
}

#[test]
fn seed_file_round_trips_into_a_session() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let seed_path = write_seed_file(&dir);

    let issues = load_seed_file(&seed_path).expect("load seed file");
    assert_eq!(issues, demo_issues());

    let state = run(issues);
    let listed = list_issues(&state).expect("list issues");
    assert_eq!(listed.len(), 5);
}

#[test]
fn default_session_lists_the_full_store_in_order() {
    let state = run(demo_issues());

    let listed = list_issues(&state).expect("list issues");
    let ids: Vec<&str> = listed.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn priority_filter_drives_list_and_map_together() {
    let state = run(demo_issues());

    let visible = set_priority_filter(&state, "urgent".to_string()).expect("set filter");
    assert_eq!(visible, 2);

    let listed = list_issues(&state).expect("list issues");
    let ids: Vec<&str> = listed.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "5"]);

    let markers = get_map_markers(&state).expect("markers");
    assert_eq!(markers.len(), 2);
    assert!(markers.iter().all(|m| m.pulse));
}

#[test]
fn unmatched_search_is_an_empty_state_not_an_error() {
    let state = run(demo_issues());

    let visible = set_search_query(&state, "escalator".to_string()).expect("set query");
    assert_eq!(visible, 0);
    assert!(list_issues(&state).expect("list issues").is_empty());
    // The views render this copy over the empty list.
    assert_eq!(EMPTY_RESULT_MESSAGE, "No issues found");
    assert_eq!(EMPTY_RESULT_HINT, "Try adjusting your filters");

    assert_eq!(clear_filters(&state).expect("clear filters"), 5);
}

#[test]
fn overview_and_analytics_ignore_list_filters() {
    let state = run(demo_issues());
    set_search_query(&state, "streetlight".to_string()).expect("set query");

    let stats = get_overview(&state).expect("overview");
    assert_eq!(stats.total_issues, 5);
    assert_eq!(stats.new_issues, 2);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.resolved, 0);
    assert_eq!(stats.urgent_issues, 2);

    let report = get_analytics(&state).expect("analytics");
    assert_eq!(report.total_issues, 5);
    assert_eq!(report.resolution_rate, 0);
    assert_eq!(report.daily_stats.len(), 7);

    let departments = &report.department_stats;
    assert_eq!(departments.get("Public Works"), 2);
    assert_eq!(departments.get("Electrical"), 1);
    assert_eq!(departments.get("Sanitation"), 1);
    assert_eq!(departments.get("Water Management"), 1);
    assert_eq!(departments.len(), 4);
}

#[test]
fn insights_surface_the_busiest_buckets() {
    let state = run(demo_issues());
    let highlights = get_insights(&state).expect("insights");

    assert_eq!(highlights.most_active_category.as_deref(), Some("other"));
    assert_eq!(
        highlights.best_performing_department.as_deref(),
        Some("Public Works")
    );
    assert_eq!(highlights.urgent_issues, 2);
}

#[test]
fn detail_view_edits_stay_in_the_draft() {
    let state = run(demo_issues());

    let draft = open_issue(&state, "1").expect("open issue");
    assert_eq!(draft.status, "new");
    assert!(!draft.is_dirty());

    let draft = update_draft(
        &state,
        DraftPatch {
            status: Some("in-progress".to_string()),
            assigned_to: Some("Lisa Johnson".to_string()),
            ..DraftPatch::default()
        },
    )
    .expect("update draft");
    assert!(draft.is_dirty());

    // The open view renders the draft; the store still holds seed values.
    let shown = selected_issue(&state).expect("selected").expect("open");
    assert_eq!(shown.status, "in-progress");
    assert_eq!(shown.assigned_to.as_deref(), Some("Lisa Johnson"));

    let stored = get_issue(&state, "1").expect("lookup issue");
    assert_eq!(stored.status, "new");
    assert_eq!(stored.assigned_to, None);

    // Closing discards everything, no confirmation, no write-back.
    close_issue(&state).expect("close issue");
    assert_eq!(selected_issue(&state).expect("selected"), None);
    let stored = get_issue(&state, "1").expect("lookup issue");
    assert_eq!(stored.status, "new");
}

#[test]
fn reports_validate_and_build_but_never_touch_the_store() {
    let state = run(demo_issues());

    let issue = submit_report(NewIssueReport {
        title: "Graffiti on underpass wall".to_string(),
        description: "Fresh tags covering the pedestrian underpass.".to_string(),
        category: "graffiti".to_string(),
        priority: "low".to_string(),
        location: Location {
            lat: 17.3850,
            lng: 78.4867,
            address: "Necklace Road, Hyderabad".to_string(),
        },
        department: "Public Works".to_string(),
        submitted_by: "Ravi Teja".to_string(),
        photos: vec![],
    })
    .expect("submit report");

    assert_eq!(issue.status, "new");
    assert_eq!(issue.category, "graffiti");
    assert!(get_issue(&state, &issue.id).is_err());
    assert_eq!(list_issues(&state).expect("list issues").len(), 5);
}

#[test]
fn view_switching_carries_header_copy() {
    let state = run(demo_issues());

    let header = set_view(&state, CurrentView::Issues).expect("set view");
    assert_eq!(header.title, "Issues Management");

    let header = set_view(&state, CurrentView::Dashboard).expect("set view");
    assert_eq!(header.subtitle, "Real-time overview of civic issues");
}
