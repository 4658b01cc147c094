//! Error types raised while building analysis results and reading input.
//!
//! The reporter itself never fails; everything here happens before a result
//! reaches it.

use thiserror::Error;

#[derive(Debug, Error)]
/// A host-supplied result that violates the data model.
pub enum ResultError {
    #[error("invalid result JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("total error count is {count} but the result lists no findings, errors or warnings")]
    InconsistentCount { count: usize },

    #[error("finding in '{file}' has line 0; lines start at 1")]
    InvalidLine { file: String },

    #[error("finding in '{file}' has template metadata with only one of template_file_path/template_line")]
    PartialTemplate { file: String },
}

#[derive(Debug, Error)]
/// Failure to obtain a result for the CLI.
pub enum InputError {
    #[error("cannot read {source_name}: {err}")]
    Io {
        source_name: String,
        #[source]
        err: std::io::Error,
    },

    #[error(transparent)]
    Result(#[from] ResultError),
}

impl InputError {
    /// Process exit code for input that cannot be reported on.
    pub fn exit_code(&self) -> i32 {
        2
    }
}
