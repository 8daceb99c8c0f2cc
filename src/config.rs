use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::editor::CachePolicy;
use crate::storage::{DEFAULT_OUTPUT, StorageKind};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub naive: bool,
    pub live_render: bool,
    pub storage: Option<StorageKind>,
    pub output: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            naive: self.naive || other.naive,
            live_render: self.live_render || other.live_render,
            storage: other.storage.or(self.storage),
            output: other.output.clone().or_else(|| self.output.clone()),
        }
    }

    pub fn storage_kind(&self) -> StorageKind {
        self.storage.unwrap_or_default()
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    pub const fn cache_policy(&self) -> CachePolicy {
        if self.live_render {
            CachePolicy::Invalidate
        } else {
            CachePolicy::Snapshot
        }
    }
}

/// Platform config directory, e.g. `$XDG_CONFIG_HOME` or `~/.config`.
fn config_home() -> Option<PathBuf> {
    let var = |name: &str| std::env::var_os(name).map(PathBuf::from);
    if cfg!(target_os = "windows") {
        var("APPDATA")
    } else if cfg!(target_os = "macos") {
        var("HOME").map(|home| home.join("Library").join("Application Support"))
    } else {
        var("XDG_CONFIG_HOME").or_else(|| var("HOME").map(|home| home.join(".config")))
    }
}

/// Saved defaults shared by every working directory.
///
/// Falls back to the local override when no config directory is known.
pub fn global_config_path() -> PathBuf {
    config_home().map_or_else(local_override_path, |dir| {
        dir.join("docedit").join("config")
    })
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".doceditrc")
}

/// Read saved flags from `path`. A missing file yields the defaults.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(ConfigFlags::default()),
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read config {}", path.display()));
        }
    };
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(str::split_whitespace)
        .map(ToOwned::to_owned)
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# docedit defaults (saved with --save)".to_string());
    if flags.naive {
        lines.push("--naive".to_string());
    }
    if flags.live_render {
        lines.push("--live-render".to_string());
    }
    if let Some(kind) = flags.storage {
        lines.push(format!("--storage {}", kind.as_str()));
    }
    if let Some(output) = &flags.output {
        lines.push(format!("--output {}", output.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

/// Delete the saved flags at `path`; nothing to do if none were saved.
pub fn clear_config_flags(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Err(err) if err.kind() != ErrorKind::NotFound => {
            Err(err).with_context(|| format!("Failed to remove {}", path.display()))
        }
        _ => Ok(()),
    }
}

/// Extract the flags worth persisting from raw command-line tokens.
///
/// Unknown tokens (including `--save`, `--clear` and the program name)
/// are skipped.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--naive" {
            flags.naive = true;
        } else if token == "--live-render" {
            flags.live_render = true;
        } else if token == "--storage" {
            if let Some(next) = tokens.get(i + 1) {
                flags.storage = StorageKind::parse(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--storage=") {
            flags.storage = StorageKind::parse(value);
        } else if token == "--output" || token == "-o" {
            if let Some(next) = tokens.get(i + 1) {
                flags.output = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--output=") {
            flags.output = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}
