use serde::{Deserialize, Serialize};

/// The stat-card numbers shown in the sidebar and dashboard header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_issues: usize,
    pub new_issues: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub urgent_issues: usize,
}

/// One bucket of a grouped count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    pub key: String,
    pub count: usize,
}

/// Counting map that remembers first-encounter key order, so grouped output
/// and tie-breaks stay deterministic regardless of input data. Serializes as
/// the ordered entry list the charting views consume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountMap {
    entries: Vec<CountEntry>,
}

impl CountMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the bucket for `key`, creating it at the end on first sight.
    pub fn bump(&mut self, key: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.count += 1;
            return;
        }
        self.entries.push(CountEntry {
            key: key.to_string(),
            count: 1,
        });
    }

    pub fn get(&self, key: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Buckets in first-encounter order.
    pub fn entries(&self) -> &[CountEntry] {
        &self.entries
    }

    /// Buckets sorted by count descending. The sort is stable, so equal
    /// counts keep their first-encounter order.
    pub fn ranked(&self) -> Vec<CountEntry> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// Key of the largest bucket, if any.
    pub fn top(&self) -> Option<&str> {
        let mut best: Option<&CountEntry> = None;
        for entry in &self.entries {
            if best.map(|b| entry.count > b.count).unwrap_or(true) {
                best = Some(entry);
            }
        }
        best.map(|entry| entry.key.as_str())
    }

    /// Largest single count; chart bars scale against this.
    pub fn max_count(&self) -> usize {
        self.entries.iter().map(|e| e.count).max().unwrap_or(0)
    }
}

/// One day of the 7-day submission trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: String,  // YYYY-MM-DD
    pub label: String, // e.g. "Jan 13"
    pub count: usize,
}

/// Everything the analytics view renders in one payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub total_issues: usize,
    pub resolved_issues: usize,
    pub resolution_rate: u32, // whole percent, 0 on empty input
    pub active_departments: usize,
    pub category_stats: CountMap,
    pub department_stats: CountMap,
    pub priority_stats: CountMap,
    pub daily_stats: Vec<DailyCount>,
}

/// The "Performance Insights" panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub most_active_category: Option<String>,
    pub best_performing_department: Option<String>,
    pub urgent_issues: usize,
}
