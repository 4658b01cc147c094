//! Configuration discovery and effective settings resolution.
//!
//! findfmt reads `findfmt.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `width`: detected from the terminal
//! - `color`: true (still off when `NO_COLOR` is set)
//! - `base_dir`: current working directory
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::terminal;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILES: [&str; 3] = ["findfmt.toml", "findfmt.yaml", "findfmt.yml"];

#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
/// Root configuration loaded from `findfmt.toml|yaml`.
pub struct FindfmtConfig {
    /// Fixed terminal width instead of detection.
    pub width: Option<usize>,
    pub color: Option<bool>,
    /// Directory displayed paths are made relative to, relative to the repo root.
    pub base_dir: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_found: bool,
    pub width: usize,
    pub color: bool,
    pub base_dir: PathBuf,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `findfmt.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `FindfmtConfig` from `findfmt.toml` or `findfmt.yaml|yml` if present.
///
/// A file that cannot be read or parsed is logged and treated as absent.
pub fn load_config(root: &Path) -> Option<FindfmtConfig> {
    let toml_path = root.join("findfmt.toml");
    if toml_path.exists() {
        let s = read_logged(&toml_path)?;
        return match toml::from_str::<FindfmtConfig>(&s) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                log::warn!("ignoring {}: {}", toml_path.display(), e);
                None
            }
        };
    }
    for yml in ["findfmt.yaml", "findfmt.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = read_logged(&p)?;
            return match serde_yaml::from_str::<FindfmtConfig>(&s) {
                Ok(cfg) => Some(cfg),
                Err(e) => {
                    log::warn!("ignoring {}: {}", p.display(), e);
                    None
                }
            };
        }
    }
    None
}

fn read_logged(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(s) => Some(s),
        Err(e) => {
            log::warn!("cannot read {}: {}", path.display(), e);
            None
        }
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_width: Option<usize>,
    cli_color: Option<bool>,
    cli_base_dir: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root);
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();
    log::debug!(
        "repo root {} (config {})",
        repo_root.display(),
        if config_found { "found" } else { "absent" }
    );

    let width = cli_width
        .or(cfg.width)
        .filter(|w| *w > 0)
        .unwrap_or_else(terminal::detect_width);

    let color = cli_color.or(cfg.color).unwrap_or(true);

    let base_dir = match (cli_base_dir, cfg.base_dir.as_deref()) {
        (Some(cli), _) => PathBuf::from(cli),
        (None, Some(from_cfg)) => repo_root.join(from_cfg),
        (None, None) => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    Effective {
        repo_root,
        config_found,
        width,
        color,
        base_dir,
    }
}
