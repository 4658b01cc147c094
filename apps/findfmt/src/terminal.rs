//! Terminal width detection for sizing horizontal rules.

/// Width assumed when neither `COLUMNS` nor the tty reports one.
pub const DEFAULT_WIDTH: usize = 80;

/// Detect the current terminal width.
///
/// Order: `COLUMNS` (positive integer) > tty size > [`DEFAULT_WIDTH`].
pub fn detect_width() -> usize {
    if let Some(w) = width_from_env(std::env::var("COLUMNS").ok().as_deref()) {
        log::debug!("terminal width {} from COLUMNS", w);
        return w;
    }
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => {
            log::debug!("terminal width {} from tty", cols);
            cols as usize
        }
        _ => {
            log::debug!("terminal width unknown; using {}", DEFAULT_WIDTH);
            DEFAULT_WIDTH
        }
    }
}

fn width_from_env(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|w| *w > 0)
}
