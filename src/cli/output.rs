//! Output formatting utilities

use crate::application::BuildReport;
use crate::domain::tags::TagCount;
use crate::domain::Environment;
use std::path::Path;

/// Format a build summary for display
pub fn format_build_report(
    report: &BuildReport,
    environment: &Environment,
    dir: &Path,
) -> String {
    let mut output = format!(
        "Built {} article(s), {} tag(s), {} author(s) [{}]\n",
        report.included_posts, report.tags, report.authors, environment
    );
    if report.drafts_skipped > 0 {
        output.push_str(&format!(
            "Skipped {} draft(s) of {} post(s)\n",
            report.drafts_skipped, report.total_posts
        ));
    }
    output.push_str(&format!("Output: {}\n", dir.display()));
    output
}

/// Format a list of tags for display.
pub fn format_tag_list(tags: &[TagCount]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let width = tags.iter().map(|t| t.name.chars().count()).max().unwrap_or(0);
    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("{:<width$}  {}\n", tag.name, tag.post_count));
    }

    output
}
