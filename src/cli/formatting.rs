//! Display formatting for CLI output.
//!
//! Pure functions so the rendered text can be tested without a terminal.

use crate::data::{CheckKind, CheckReport};
use crate::issue::HostDialect;

/// Returns the `[check]` label, ANSI-colored when `color` is set.
pub(crate) fn format_check_label(check: CheckKind, color: bool) -> String {
    if !color {
        return format!("[{check}]");
    }
    let code = match check {
        CheckKind::Message => "31",
        CheckKind::Shortlog => "33",
        CheckKind::Body => "36",
        CheckKind::Issue => "35",
    };
    format!("\x1b[{code}m[{check}]\x1b[0m")
}

/// Returns the icon for the overall result.
pub(crate) fn determine_report_icon(passes: bool) -> &'static str {
    if passes {
        "\u{2705}"
    } else {
        "\u{274c}"
    }
}

/// Renders a check report as indented text, one finding per line.
pub(crate) fn format_text_report(report: &CheckReport, color: bool) -> String {
    let icon = determine_report_icon(report.passes);
    let mut lines = Vec::with_capacity(report.findings.len() + 1);

    if report.passes {
        lines.push(format!("{icon} HEAD commit ({}): no findings", report.backend));
    } else {
        lines.push(format!(
            "{icon} HEAD commit ({}): {} finding(s)",
            report.backend,
            report.findings.len()
        ));
    }

    for finding in &report.findings {
        lines.push(format!(
            "   {} {}",
            format_check_label(finding.check, color),
            finding.message
        ));
    }

    lines.join("\n")
}

/// Renders the registry rows, one host per line with its keyword alternation.
pub(crate) fn format_hosts<'a>(dialects: impl IntoIterator<Item = &'a HostDialect>) -> String {
    dialects
        .into_iter()
        .map(|d| format!("{:<10} {:<4} {}", d.host_id, d.backend, d.keyword_pattern))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Finding;
    use crate::issue::dialect::DIALECTS;
    use crate::vcs::Backend;

    #[test]
    fn label_plain_and_colored() {
        assert_eq!(format_check_label(CheckKind::Issue, false), "[issue]");
        let colored = format_check_label(CheckKind::Shortlog, true);
        assert!(colored.contains("[shortlog]"));
        assert!(colored.contains("\x1b[33m")); // yellow
    }

    #[test]
    fn report_icons() {
        assert_eq!(determine_report_icon(true), "\u{2705}");
        assert_eq!(determine_report_icon(false), "\u{274c}");
    }

    #[test]
    fn passing_report() {
        let report = CheckReport::new(Backend::Git, Vec::new());
        insta::assert_snapshot!(format_text_report(&report, false), @"✅ HEAD commit (git): no findings");
    }

    #[test]
    fn failing_report() {
        let report = CheckReport::new(
            Backend::Mercurial,
            vec![
                Finding::new(CheckKind::Shortlog, "Shortlog of HEAD commit contains a period at end."),
                Finding::new(CheckKind::Issue, "Invalid issue number: #0"),
            ],
        );
        insta::assert_snapshot!(format_text_report(&report, false), @r"
❌ HEAD commit (hg): 2 finding(s)
   [shortlog] Shortlog of HEAD commit contains a period at end.
   [issue] Invalid issue number: #0
");
    }

    #[test]
    fn hosts_listing() {
        let listing = format_hosts(DIALECTS);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("github     git  [Cc]lose"));
        assert!(lines[2].starts_with("bitbucket  hg   "));
    }
}
