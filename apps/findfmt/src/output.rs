//! Output sinks the reporter writes to.
//!
//! `ConsoleOutput` prints to stdout with `[OK]`/`[ERROR]`/`[WARNING]` labels
//! (colored unless disabled or `NO_COLOR` is set). `BufferedOutput` records
//! every line for inspection.

use owo_colors::OwoColorize;

/// Line-oriented sink with one method per line style.
pub trait Output {
    /// Write a line exactly as given.
    fn plain_line(&mut self, text: &str);
    fn warning_line(&mut self, text: &str);
    fn error_line(&mut self, text: &str);
    fn success_line(&mut self, text: &str);
    fn blank_line(&mut self);
}

/// Whether colors should be used given an explicit preference.
pub fn use_colors(preference: Option<bool>) -> bool {
    preference.unwrap_or(true) && std::env::var_os("NO_COLOR").is_none()
}

/// Stdout sink in the style of a console status block.
pub struct ConsoleOutput {
    color: bool,
}

impl ConsoleOutput {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn label(&self, text: &str, kind: LineKind) -> String {
        match kind {
            LineKind::Success => {
                if self.color {
                    format!("{} {}", "[OK]".green().bold(), text.green())
                } else {
                    format!("[OK] {}", text)
                }
            }
            LineKind::Error => {
                if self.color {
                    format!("{} {}", "[ERROR]".red().bold(), text.red())
                } else {
                    format!("[ERROR] {}", text)
                }
            }
            LineKind::Warning => {
                if self.color {
                    format!("{} {}", "[WARNING]".yellow().bold(), text.yellow())
                } else {
                    format!("[WARNING] {}", text)
                }
            }
            LineKind::Plain | LineKind::Blank => text.to_string(),
        }
    }
}

impl Output for ConsoleOutput {
    fn plain_line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn warning_line(&mut self, text: &str) {
        println!(" {}", self.label(text, LineKind::Warning));
    }

    fn error_line(&mut self, text: &str) {
        println!(" {}", self.label(text, LineKind::Error));
    }

    fn success_line(&mut self, text: &str) {
        println!(" {}", self.label(text, LineKind::Success));
    }

    fn blank_line(&mut self) {
        println!();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Style a recorded line was written with.
pub enum LineKind {
    Plain,
    Warning,
    Error,
    Success,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

#[derive(Debug, Default)]
/// In-memory sink keeping lines in write order.
pub struct BufferedOutput {
    lines: Vec<Line>,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Line texts without their styles; blank lines are empty strings.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    /// All lines joined with `\n`, styles dropped.
    pub fn render(&self) -> String {
        self.texts().join("\n")
    }

    fn push(&mut self, kind: LineKind, text: &str) {
        self.lines.push(Line {
            kind,
            text: text.to_string(),
        });
    }
}

impl Output for BufferedOutput {
    fn plain_line(&mut self, text: &str) {
        self.push(LineKind::Plain, text);
    }

    fn warning_line(&mut self, text: &str) {
        self.push(LineKind::Warning, text);
    }

    fn error_line(&mut self, text: &str) {
        self.push(LineKind::Error, text);
    }

    fn success_line(&mut self, text: &str) {
        self.push(LineKind::Success, text);
    }

    fn blank_line(&mut self) {
        self.push(LineKind::Blank, "");
    }
}
