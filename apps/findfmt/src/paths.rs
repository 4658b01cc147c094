//! Path cleanup for display: drop analyser context notes and make existing
//! files relative to the working directory so terminals keep them clickable.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

// "src/Foo.php (in context of class Bar)" -> "src/Foo.php"
static CONTEXT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<file>.*?)(\s+\(in context.*?)?$").expect("context pattern is valid")
});

/// Strip a trailing `(in context ...)` note from a reported file path.
pub fn strip_context(raw: &str) -> &str {
    CONTEXT_REGEX
        .captures(raw)
        .and_then(|c| c.name("file"))
        .map(|m| m.as_str())
        .unwrap_or(raw)
}

/// Express an existing `path` relative to `base`.
///
/// Both sides are canonicalized when possible so symlinked temp dirs and
/// `..` segments compare equal. Returns `None` when no relative form exists.
pub fn relative_to(path: &Path, base: &Path) -> Option<String> {
    let abs = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let base = base.canonicalize().unwrap_or_else(|_| base.to_path_buf());
    let rel = pathdiff::diff_paths(&abs, &base)?;
    if rel.as_os_str().is_empty() {
        return Some(".".to_string());
    }
    Some(rel.to_string_lossy().to_string())
}

/// Path shown to the user for a raw reported file.
///
/// Paths that do not exist are shown as reported (minus the context note).
/// Relative inputs are looked up against `base`.
pub fn display_path(raw: &str, base: &Path) -> String {
    let clean = strip_context(raw);
    let candidate: PathBuf = {
        let p = Path::new(clean);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            base.join(p)
        }
    };
    if clean.is_empty() || !candidate.exists() {
        return clean.to_string();
    }
    match relative_to(&candidate, base) {
        Some(rel) => {
            log::debug!("relativized '{}' to '{}'", clean, rel);
            rel
        }
        None => clean.to_string(),
    }
}
