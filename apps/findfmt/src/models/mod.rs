//! Shared data models for analysis results handed over by the host tool.

pub mod finding;
pub mod result;

pub use finding::{Finding, TemplateOrigin};
pub use result::{load, AnalysisResult};
