//! A single located finding and its optional template origin.

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where a finding surfaced when it was reported through a rendered template.
pub struct TemplateOrigin {
    pub file: String,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One issue bound to a file and line.
///
/// `file` may carry a trailing `(in context of ...)` note added by the
/// analyser; printers strip it before showing the path.
pub struct Finding {
    pub file: String,
    pub line: u32,
    pub message: String,
    pub identifier: Option<String>,
    pub template: Option<TemplateOrigin>,
    pub can_be_ignored: bool,
}

impl Finding {
    pub fn new(file: impl Into<String>, line: u32, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            message: message.into(),
            identifier: None,
            template: None,
            can_be_ignored: true,
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_template(mut self, file: impl Into<String>, line: u32) -> Self {
        self.template = Some(TemplateOrigin {
            file: file.into(),
            line,
        });
        self
    }

    /// Set whether the identifier may be used to silence this finding.
    pub fn ignorable(mut self, can_be_ignored: bool) -> Self {
        self.can_be_ignored = can_be_ignored;
        self
    }

    /// Identifier to show next to the message, if the finding can be silenced by it.
    pub fn suppression_identifier(&self) -> Option<&str> {
        if self.can_be_ignored {
            self.identifier.as_deref()
        } else {
            None
        }
    }
}
