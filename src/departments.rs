//! Department display names and per-department counts.

use crate::manifest::ImageRecord;

/// Names whose display form is not plain title case, keyed by the trimmed,
/// lowercased directory name.
const SPECIAL_CASES: &[(&str, &str)] = &[
    ("cte, computer science & engineering", "CTE, Computer Science & Engineering"),
    ("english", "English"),
    ("science", "Science"),
    ("math", "Math"),
    ("history", "History"),
    ("health and physical science", "Health & Physical Science"),
    ("parent and student engagement", "Parent & Student Engagement"),
    ("health and safety", "Health & Safety"),
];

/// Formats a department directory name for display.
///
/// Known names map to their fixed display form; anything else is title-cased
/// word by word with runs of whitespace collapsed.
#[must_use]
pub fn format_department(raw: &str) -> String {
    let key = raw.trim().to_lowercase();
    if let Some((_, display)) = SPECIAL_CASES.iter().find(|(k, _)| *k == key) {
        return (*display).to_string();
    }
    key.split_whitespace().map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// How many people a department has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentSummary {
    /// Directory name as found on disk.
    pub department: String,
    /// Display form from [`format_department`].
    pub display_name: String,
    /// Number of records in the department.
    pub count: usize,
}

/// Groups records by department, in the order departments first appear.
#[must_use]
pub fn summarize(records: &[ImageRecord]) -> Vec<DepartmentSummary> {
    let mut summaries: Vec<DepartmentSummary> = Vec::new();
    for record in records {
        match summaries.iter_mut().find(|s| s.department == record.department) {
            Some(summary) => summary.count += 1,
            None => summaries.push(DepartmentSummary {
                department: record.department.clone(),
                display_name: format_department(&record.department),
                count: 1,
            }),
        }
    }
    summaries
}
