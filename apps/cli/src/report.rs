//! Feedback report shape and terminal rendering.

use std::fmt::Write;

use serde::Deserialize;

/// Feedback produced by the analyzer.
///
/// Every field defaults when the server's pass-through JSON omits it, so a
/// structurally thin reply still renders — just with empty sections.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FeedbackReport {
    pub summary: String,
    pub score: i64,
    #[serde(rename = "jobReadiness")]
    pub job_readiness: String,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub issues: Vec<String>,
}

/// Renders the report for the terminal: summary and score up top, then the
/// four labeled sections, one icon-prefixed row per item.
pub fn render(report: &FeedbackReport) -> String {
    let mut out = String::new();

    out.push_str("Resume Feedback\n");
    out.push_str("===============\n\n");
    let _ = writeln!(out, "Summary: {}", report.summary);
    let _ = writeln!(out, "Score: {}/100", report.score);
    let _ = writeln!(out, "Job Readiness: {}", report.job_readiness);

    section(&mut out, "✔️ Strengths", "👍", &report.strengths);
    section(&mut out, "⚠️ Weaknesses", "⚠️", &report.weaknesses);
    section(&mut out, "💡 Suggestions", "✅", &report.suggestions);
    section(&mut out, "🚫 Issues", "❗", &report.issues);

    out
}

fn section(out: &mut String, title: &str, icon: &str, items: &[String]) {
    let _ = writeln!(out, "\n{title}");
    for item in items {
        let _ = writeln!(out, "  {icon} {item}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_full_report() {
        let report = FeedbackReport {
            summary: "Solid resume".to_string(),
            score: 80,
            job_readiness: "Mid-level".to_string(),
            suggestions: vec!["Add metrics".to_string()],
            strengths: vec!["Clear layout".to_string()],
            weaknesses: vec!["No summary section".to_string()],
            issues: vec!["Typo on page 1".to_string()],
        };

        let rendered = render(&report);
        assert!(rendered.contains("Summary: Solid resume"));
        assert!(rendered.contains("Score: 80/100"));
        assert!(rendered.contains("Job Readiness: Mid-level"));
        assert!(rendered.contains("✔️ Strengths"));
        assert!(rendered.contains("👍 Clear layout"));
        assert!(rendered.contains("⚠️ No summary section"));
        assert!(rendered.contains("✅ Add metrics"));
        assert!(rendered.contains("❗ Typo on page 1"));
    }

    #[test]
    fn test_render_empty_sections_have_no_rows() {
        let rendered = render(&FeedbackReport::default());
        // Headers are present, but no item rows under them.
        assert!(rendered.contains("✔️ Strengths"));
        assert!(rendered.contains("🚫 Issues"));
        assert!(!rendered.contains("👍"));
        assert!(!rendered.contains("❗"));
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        // The server forwards whatever JSON the model produced; a thin shape
        // must still deserialize.
        let report: FeedbackReport =
            serde_json::from_value(json!({ "summary": "only a summary" })).unwrap();
        assert_eq!(report.summary, "only a summary");
        assert_eq!(report.score, 0);
        assert!(report.job_readiness.is_empty());
        assert!(report.strengths.is_empty());
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_job_readiness_wire_name() {
        let report: FeedbackReport =
            serde_json::from_value(json!({ "jobReadiness": "Senior" })).unwrap();
        assert_eq!(report.job_readiness, "Senior");
    }
}
