//! Analysis result snapshot and its host JSON wire format.
//!
//! The wire format mirrors what analysers usually dump:
//!
//! ```json
//! {
//!   "files": [{ "file": "src/Foo.php", "line": 10, "message": "Found error.",
//!               "identifier": "x.y", "canBeIgnored": true,
//!               "metadata": { "template_file_path": "a.twig", "template_line": 3 } }],
//!   "notFileSpecificErrors": [],
//!   "warnings": [],
//!   "totalErrorsCount": 1
//! }
//! ```
//!
//! Every key is optional. A missing `totalErrorsCount` counts the listed
//! findings and not-file-specific errors.

use super::finding::{Finding, TemplateOrigin};
use crate::error::{InputError, ResultError};
use serde::Deserialize;
use std::fs;
use std::io::Read;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable snapshot of one analysis run.
pub struct AnalysisResult {
    findings: Vec<Finding>,
    not_file_specific_errors: Vec<String>,
    warnings: Vec<String>,
    total_errors_count: usize,
}

impl AnalysisResult {
    /// Build a validated result.
    ///
    /// Rejects a non-zero count on an otherwise empty result and findings
    /// with line 0.
    pub fn new(
        findings: Vec<Finding>,
        not_file_specific_errors: Vec<String>,
        warnings: Vec<String>,
        total_errors_count: usize,
    ) -> Result<Self, ResultError> {
        if let Some(bad) = findings.iter().find(|f| f.line == 0) {
            return Err(ResultError::InvalidLine {
                file: bad.file.clone(),
            });
        }
        if findings.is_empty()
            && not_file_specific_errors.is_empty()
            && warnings.is_empty()
            && total_errors_count != 0
        {
            return Err(ResultError::InconsistentCount {
                count: total_errors_count,
            });
        }
        Ok(Self {
            findings,
            not_file_specific_errors,
            warnings,
            total_errors_count,
        })
    }

    /// A result with nothing to report.
    pub fn empty() -> Self {
        Self {
            findings: Vec::new(),
            not_file_specific_errors: Vec::new(),
            warnings: Vec::new(),
            total_errors_count: 0,
        }
    }

    /// Parse and validate the host JSON wire format.
    pub fn from_json(s: &str) -> Result<Self, ResultError> {
        let raw: RawResult = serde_json::from_str(s)?;
        raw.try_into()
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn not_file_specific_errors(&self) -> &[String] {
        &self.not_file_specific_errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn total_errors_count(&self) -> usize {
        self.total_errors_count
    }

    /// True when there are no findings, no loose errors and no warnings.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
            && self.not_file_specific_errors.is_empty()
            && self.warnings.is_empty()
    }
}

/// Read a result from a JSON file, or from stdin when `input` is `None` or `-`.
pub fn load(input: Option<&str>) -> Result<AnalysisResult, InputError> {
    let (name, text) = match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|err| InputError::Io {
                    source_name: "stdin".into(),
                    err,
                })?;
            ("stdin".to_string(), buf)
        }
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|err| InputError::Io {
                source_name: path.to_string(),
                err,
            })?;
            (path.to_string(), text)
        }
    };
    log::debug!("read {} bytes of result JSON from {}", text.len(), name);
    Ok(AnalysisResult::from_json(&text)?)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResult {
    #[serde(default)]
    files: Vec<RawFinding>,
    #[serde(default)]
    not_file_specific_errors: Vec<String>,
    #[serde(default)]
    warnings: Vec<String>,
    #[serde(default)]
    total_errors_count: Option<usize>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFinding {
    file: String,
    line: u32,
    message: String,
    #[serde(default)]
    identifier: Option<String>,
    #[serde(default = "default_can_be_ignored")]
    can_be_ignored: bool,
    #[serde(default)]
    metadata: RawMetadata,
}

// Keys keep the snake_case spelling analysers use inside metadata maps.
#[derive(Deserialize, Default)]
struct RawMetadata {
    #[serde(default)]
    template_file_path: Option<String>,
    #[serde(default)]
    template_line: Option<u32>,
}

fn default_can_be_ignored() -> bool {
    true
}

impl TryFrom<RawFinding> for Finding {
    type Error = ResultError;

    fn try_from(raw: RawFinding) -> Result<Self, Self::Error> {
        let template = match (raw.metadata.template_file_path, raw.metadata.template_line) {
            (Some(file), Some(line)) => Some(TemplateOrigin { file, line }),
            (None, None) => None,
            _ => return Err(ResultError::PartialTemplate { file: raw.file }),
        };
        Ok(Finding {
            file: raw.file,
            line: raw.line,
            message: raw.message,
            identifier: raw.identifier,
            template,
            can_be_ignored: raw.can_be_ignored,
        })
    }
}

impl TryFrom<RawResult> for AnalysisResult {
    type Error = ResultError;

    fn try_from(raw: RawResult) -> Result<Self, Self::Error> {
        let findings = raw
            .files
            .into_iter()
            .map(Finding::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let total = raw
            .total_errors_count
            .unwrap_or(findings.len() + raw.not_file_specific_errors.len());
        AnalysisResult::new(findings, raw.not_file_specific_errors, raw.warnings, total)
    }
}
