//! `roster departments` command.

use crate::config::Config;
use crate::context::ServiceContext;
use crate::departments::{summarize, DepartmentSummary};
use crate::error::Result;
use crate::manifest::generator;

/// Execute the `departments` command: scan the tree and print one line per
/// department. Nothing is written.
///
/// # Errors
///
/// Returns an error if the scan fails.
pub fn run(ctx: &ServiceContext, config: &Config) -> Result<()> {
    let records = generator::generate(ctx, config)?;
    let summaries = summarize(&records);
    for line in report_lines(&summaries, records.len()) {
        println!("{line}");
    }
    Ok(())
}

/// Renders the report printed by [`run`].
#[must_use]
pub fn report_lines(summaries: &[DepartmentSummary], total: usize) -> Vec<String> {
    if summaries.is_empty() {
        return vec!["No departments found.".to_string()];
    }
    let mut lines: Vec<String> = summaries
        .iter()
        .map(|s| format!("{} ({}): {}", s.display_name, s.department, s.count))
        .collect();
    lines.push(format!("Total: {total} people in {} departments", summaries.len()));
    lines
}
