//! findfmt core library.
//!
//! Renders analysis findings computed by an external analyser into a
//! terminal report: one separator-framed block per finding, an error
//! summary, then loose errors and warnings.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `error`: Errors raised while building results and reading input.
//! - `models`: Findings and analysis results, plus the host JSON format.
//! - `output`: Output sinks (console and buffered).
//! - `paths`: Display path cleanup and relativization.
//! - `reporter`: The terminal report itself.
//! - `terminal`: Terminal width detection.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod paths;
pub mod reporter;
pub mod terminal;
pub mod utils;

pub use error::{InputError, ResultError};
pub use models::{AnalysisResult, Finding, TemplateOrigin};
pub use output::{BufferedOutput, ConsoleOutput, Output};
pub use reporter::{Reporter, ResultStatus, TerminalReporter};
