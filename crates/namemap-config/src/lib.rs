//! Configuration for namemap: where the mapping table lives, how strictly it is parsed, and
//! how logging is set up.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

mod diagnostics;
mod logging;

pub use diagnostics::ConfigDiagnostics;
pub use logging::{global_log_buffer, init_tracing, LogBuffer};

/// File names probed (in order) by [`discover_config_path`].
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
    ["namemap.toml", ".namemap.toml", ".namemap/config.toml"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Simple level (`info`, `debug`, ...) or a full `EnvFilter` directive string.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,

    /// Emit logs in JSON format.
    #[serde(default)]
    pub json: bool,

    /// Mirror logs to stderr (in addition to the in-memory buffer).
    #[serde(default = "LoggingConfig::default_stderr")]
    pub stderr: bool,

    /// Append logs to the given file path. If the file cannot be opened, file logging is
    /// disabled while other sinks remain active.
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Number of log lines kept in memory.
    #[serde(default = "LoggingConfig::default_buffer_lines")]
    pub buffer_lines: usize,
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_owned()
    }

    fn default_stderr() -> bool {
        true
    }

    pub(crate) fn default_buffer_lines() -> usize {
        1_000
    }

    /// Filter for `level`, with `RUST_LOG` directives appended when that variable is set.
    pub fn env_filter(&self) -> EnvFilter {
        self.env_filter_with(std::env::var("RUST_LOG").ok().as_deref())
    }

    /// Tries `level` + `rust_log`, then `rust_log` alone, then `level` alone, then `info`.
    fn env_filter_with(&self, rust_log: Option<&str>) -> EnvFilter {
        let level = normalize_level(&self.level);
        let mut candidates = Vec::with_capacity(3);
        if let Some(env) = rust_log.map(str::trim).filter(|env| !env.is_empty()) {
            candidates.push(format!("{level},{env}"));
            candidates.push(env.to_owned());
        }
        candidates.push(level);

        candidates
            .iter()
            .find_map(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::default().add_directive(LevelFilter::INFO.into()))
    }
}

/// Bare level names are matched case-insensitively (`warning` means `warn`); anything else is
/// passed through as `EnvFilter` directives.
fn normalize_level(input: &str) -> String {
    let trimmed = input.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => "info".to_owned(),
        "warning" => "warn".to_owned(),
        level @ ("trace" | "debug" | "info" | "warn" | "error") => level.to_owned(),
        _ => trimmed.to_owned(),
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            json: false,
            stderr: Self::default_stderr(),
            file: None,
            buffer_lines: Self::default_buffer_lines(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingsConfig {
    /// SRG mapping file. Relative paths are resolved against the config file's directory.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Reject `MD:` records whose descriptors are not valid method descriptors.
    #[serde(default)]
    pub validate_descriptors: bool,
}

impl MappingsConfig {
    fn resolve_relative_to(&mut self, base: &Path) {
        if let Some(path) = self.path.as_mut() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamemapConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub mappings: MappingsConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // The default `Display` embeds a source snippet; keep only the message.
        ConfigError::Toml(err.message().to_owned())
    }
}

impl NamemapConfig {
    /// Load a config file from TOML.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_from_path_with_diagnostics(path).map(|(config, _)| config)
    }

    /// Load a config file from TOML and report keys that were not recognized.
    pub fn load_from_path_with_diagnostics(
        path: impl AsRef<Path>,
    ) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let (mut config, diagnostics) = Self::load_from_str_with_diagnostics(&text)?;
        if let Some(dir) = path.parent() {
            config.mappings.resolve_relative_to(dir);
        }

        for key in &diagnostics.unknown_keys {
            tracing::warn!(
                target: "namemap.config",
                key = %key,
                path = %path.display(),
                "ignoring unknown config key"
            );
        }

        Ok((config, diagnostics))
    }

    pub fn load_from_str_with_diagnostics(
        text: &str,
    ) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let (config, unknown_keys) =
            diagnostics::deserialize_toml_with_unknown_keys::<NamemapConfig>(text)?;
        Ok((config, ConfigDiagnostics { unknown_keys }))
    }
}

/// Locate the config file for a workspace root, trying [`CONFIG_FILE_CANDIDATES`] in order.
pub fn discover_config_path(workspace_root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_CANDIDATES
        .into_iter()
        .map(|name| workspace_root.join(name))
        .find(|path| path.is_file())
        .map(|path| path.canonicalize().unwrap_or(path))
}

/// Load the configuration for a workspace root.
///
/// If no config is present, returns [`NamemapConfig::default`] and `None`.
pub fn load_for_workspace(
    workspace_root: &Path,
) -> Result<(NamemapConfig, Option<PathBuf>), ConfigError> {
    let Some(path) = discover_config_path(workspace_root) else {
        tracing::debug!(
            target: "namemap.config",
            root = %workspace_root.display(),
            "no config file found; using defaults"
        );
        return Ok((NamemapConfig::default(), None));
    };

    let config = NamemapConfig::load_from_path(&path)?;
    Ok((config, Some(path)))
}
