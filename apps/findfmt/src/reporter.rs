//! Terminal report for analysis results.
//!
//! Each finding is printed as a block framed by horizontal rules:
//!
//! ```text
//!  ------------------------------------------------------------------------
//!  src/Foo.php:10
//!  ------------------------------------------------------------------------
//!  - '#Found\ error#'
//!  🪪 method.notFound
//!  ------------------------------------------------------------------------
//! ```
//!
//! The message is shown as a `#...#` framed, regex-escaped literal so it can
//! be pasted straight into an ignore list. Findings that surfaced through a
//! rendered template show the template location first, followed by
//! `rendered in: <file:line>`.

use crate::models::{AnalysisResult, Finding};
use crate::output::Output;
use crate::paths;
use std::path::PathBuf;

/// Columns kept free on the right so rules fit Linux and Windows terminal
/// windows without wrapping.
pub const WIDTH_MARGIN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
/// Outcome of a report, mirroring process exit codes.
pub enum ResultStatus {
    Success = 0,
    Failure = 1,
}

impl ResultStatus {
    pub fn exit_code(self) -> i32 {
        self as i32
    }
}

/// Renders an analysis result into an output sink.
pub trait Reporter {
    fn format_result(&self, result: &AnalysisResult, output: &mut dyn Output) -> ResultStatus;
}

/// Separator-framed report sized to the terminal.
pub struct TerminalReporter {
    width: usize,
    base_dir: PathBuf,
}

impl TerminalReporter {
    /// `width` is the terminal width; `base_dir` is where paths are made
    /// relative to (normally the working directory).
    pub fn new(width: usize, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            width,
            base_dir: base_dir.into(),
        }
    }

    fn separator(&self) -> String {
        format!(" {}", "-".repeat(self.width.saturating_sub(WIDTH_MARGIN)))
    }

    fn location(&self, file: &str, line: u32) -> String {
        format!("{}:{}", paths::display_path(file, &self.base_dir), line)
    }

    fn print_finding(&self, finding: &Finding, separator: &str, output: &mut dyn Output) {
        output.plain_line(separator);

        let location = self.location(&finding.file, finding.line);
        match &finding.template {
            Some(template) => {
                output.plain_line(&self.location(&template.file, template.line));
                output.plain_line(&format!("rendered in: {}", location));
            }
            None => output.plain_line(&format!(" {}", location)),
        }
        output.plain_line(separator);

        output.plain_line(&format!(" - '{}'", regex_message(&finding.message)));
        if let Some(identifier) = finding.suppression_identifier() {
            output.plain_line(&format!(" 🪪 {}", identifier));
        }

        output.plain_line(separator);
        output.blank_line();
    }
}

impl Reporter for TerminalReporter {
    fn format_result(&self, result: &AnalysisResult, output: &mut dyn Output) -> ResultStatus {
        if result.is_clean() {
            output.success_line("No errors");
            return ResultStatus::Success;
        }

        let separator = self.separator();
        for finding in result.findings() {
            self.print_finding(finding, &separator, output);
        }

        output.blank_line();
        output.error_line(&format!("Found {} errors", result.total_errors_count()));

        for error in result.not_file_specific_errors() {
            output.warning_line(error);
        }
        for warning in result.warnings() {
            output.warning_line(warning);
        }

        log::debug!(
            "reported {} findings, {} loose errors, {} warnings",
            result.findings().len(),
            result.not_file_specific_errors().len(),
            result.warnings().len()
        );
        ResultStatus::Failure
    }
}

/// Characters escaped in messages, the PCRE quoting set with `#` as delimiter.
const QUOTED_CHARS: &str = ".\\+*?[^]$(){}=!<>|:-#/";

/// Message as a `#`-delimited literal pattern.
///
/// Trailing dots are dropped first. Spaces are escaped as well so the
/// pattern still matches literally in extended (`x`) mode; NUL becomes `\000`.
pub fn regex_message(message: &str) -> String {
    let trimmed = message.trim_end_matches('.');
    let mut out = String::with_capacity(trimmed.len() + 8);
    out.push('#');
    for ch in trimmed.chars() {
        match ch {
            '\0' => out.push_str("\\000"),
            ' ' => out.push_str("\\ "),
            c if QUOTED_CHARS.contains(c) => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push('#');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{BufferedOutput, LineKind};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn sep(width: usize) -> String {
        format!(" {}", "-".repeat(width - WIDTH_MARGIN))
    }

    fn run(reporter: &TerminalReporter, result: &AnalysisResult) -> (ResultStatus, BufferedOutput) {
        let mut out = BufferedOutput::new();
        let status = reporter.format_result(result, &mut out);
        (status, out)
    }

    #[test]
    fn test_clean_result_prints_single_success_line() {
        let reporter = TerminalReporter::new(80, ".");
        let (status, out) = run(&reporter, &AnalysisResult::empty());
        assert_eq!(status, ResultStatus::Success);
        assert_eq!(status.exit_code(), 0);
        assert_eq!(out.lines().len(), 1);
        assert_eq!(out.lines()[0].kind, LineKind::Success);
        assert_eq!(out.lines()[0].text, "No errors");
    }

    #[test]
    fn test_single_existing_file_scenario() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/Foo.php"), "<?php").unwrap();

        let result = AnalysisResult::new(
            vec![Finding::new("src/Foo.php", 10, "Found error.")],
            vec![],
            vec![],
            1,
        )
        .unwrap();
        let reporter = TerminalReporter::new(40, root);
        let (status, out) = run(&reporter, &result);

        let loc = format!(
            " {}:10",
            std::path::Path::new("src").join("Foo.php").to_string_lossy()
        );
        let s = sep(40);
        assert_eq!(
            out.texts(),
            vec![
                s.as_str(),
                loc.as_str(),
                s.as_str(),
                " - '#Found\\ error#'",
                s.as_str(),
                "",
                "",
                "Found 1 errors",
            ]
        );
        assert_eq!(out.lines()[7].kind, LineKind::Error);
        assert_eq!(status, ResultStatus::Failure);
        assert_eq!(status.exit_code(), 1);
    }

    #[test]
    fn test_template_finding_prints_origin_then_rendered_in() {
        let finding = Finding::new("views/cache/a.php (in context of class A)", 12, "Bad.")
            .with_template("templates/a.twig", 3)
            .with_identifier("variable.undefined");
        let result = AnalysisResult::new(vec![finding], vec![], vec![], 1).unwrap();
        let dir = tempdir().unwrap();
        let reporter = TerminalReporter::new(30, dir.path());
        let (_, out) = run(&reporter, &result);
        let s = sep(30);
        assert_eq!(
            out.texts(),
            vec![
                s.as_str(),
                "templates/a.twig:3",
                "rendered in: views/cache/a.php:12",
                s.as_str(),
                " - '#Bad#'",
                " 🪪 variable.undefined",
                s.as_str(),
                "",
                "",
                "Found 1 errors",
            ]
        );
    }

    #[test]
    fn test_identifier_hidden_when_not_ignorable() {
        let finding = Finding::new("a.php", 1, "m")
            .with_identifier("x.y")
            .ignorable(false);
        let result = AnalysisResult::new(vec![finding], vec![], vec![], 1).unwrap();
        let (_, out) = run(&TerminalReporter::new(20, "."), &result);
        assert!(out.texts().iter().all(|t| !t.contains("🪪")));
    }

    #[test]
    fn test_warnings_follow_summary_in_order() {
        let result = AnalysisResult::new(
            vec![],
            vec!["Loose error".into()],
            vec!["First warning".into(), "Second warning".into()],
            1,
        )
        .unwrap();
        let (status, out) = run(&TerminalReporter::new(80, "."), &result);
        assert_eq!(status, ResultStatus::Failure);
        let lines: Vec<_> = out.lines().iter().map(|l| (l.kind, l.text.as_str())).collect();
        assert_eq!(
            lines,
            vec![
                (LineKind::Blank, ""),
                (LineKind::Error, "Found 1 errors"),
                (LineKind::Warning, "Loose error"),
                (LineKind::Warning, "First warning"),
                (LineKind::Warning, "Second warning"),
            ]
        );
    }

    #[test]
    fn test_warnings_only_still_fail() {
        let result = AnalysisResult::new(vec![], vec![], vec!["w".into()], 0).unwrap();
        let (status, out) = run(&TerminalReporter::new(80, "."), &result);
        assert_eq!(status, ResultStatus::Failure);
        assert!(out.texts().contains(&"Found 0 errors"));
    }

    #[test]
    fn test_every_separator_has_same_length() {
        let result = AnalysisResult::new(
            vec![
                Finding::new("a.php", 1, "one").with_template("t.twig", 2),
                Finding::new("b.php", 3, "two"),
            ],
            vec![],
            vec![],
            2,
        )
        .unwrap();
        let (_, out) = run(&TerminalReporter::new(50, "."), &result);
        let rules: Vec<_> = out
            .texts()
            .into_iter()
            .filter(|t| t.starts_with(" -") && !t.starts_with(" - '"))
            .collect();
        assert_eq!(rules.len(), 6);
        assert!(rules.iter().all(|r| *r == sep(50)));
    }

    #[test]
    fn test_narrow_width_saturates() {
        let reporter = TerminalReporter::new(5, ".");
        assert_eq!(reporter.separator(), " ");
    }

    #[test]
    fn test_regex_message_trims_and_escapes() {
        assert_eq!(regex_message("Unexpected type."), "#Unexpected\\ type#");
        assert_eq!(regex_message("Done..."), "#Done#");
        assert_eq!(
            regex_message("Call to method foo() on array|null."),
            "#Call\\ to\\ method\\ foo\\(\\)\\ on\\ array\\|null#"
        );
        assert_eq!(regex_message("Use #tag"), "#Use\\ \\#tag#");
        assert_eq!(regex_message("1.5 is fine"), "#1\\.5\\ is\\ fine#");
    }

    #[test]
    fn test_regex_message_quotes_pcre_set_only() {
        assert_eq!(
            regex_message("Call to Foo::bar() on array<int> & x!=y."),
            "#Call\\ to\\ Foo\\:\\:bar\\(\\)\\ on\\ array\\<int\\>\\ &\\ x\\!\\=y#"
        );
        assert_eq!(regex_message("a~b&c"), "#a~b&c#");
        assert_eq!(regex_message("path/to-file"), "#path\\/to\\-file#");
        assert_eq!(regex_message("nul\0byte"), "#nul\\000byte#");
        assert_eq!(regex_message("back\\slash"), "#back\\\\slash#");
    }
}
