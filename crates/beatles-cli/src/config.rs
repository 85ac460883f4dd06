use anyhow::{Context, Result};
use beatles_search::{
    format_mode, parse_mode, MatchError, MatchOptions, Strategy, Template, TemplateError,
    DEFAULT_LIMIT, DEFAULT_RATIO,
};
use confyg::Confygery;
use serde::Deserialize;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Prefix for environment overrides (`BS_MATCH_MODE`, ...).
pub const ENV_PREFIX: &str = "BS_";

/// Recognized option names, in display order.
pub const OPTION_NAMES: [&str; 8] = [
    "DEBUG",
    "PURGE_QUERY",
    "MATCH_MODE",
    "MATCH_LIMIT",
    "MATCH_RATIO",
    "FMT",
    "LIST_ALL",
    "SHOW_ENVS",
];

/// Short spellings accepted for `MATCH_MODE`, `MATCH_LIMIT` and `MATCH_RATIO`.
pub const OPTION_ALIASES: [&str; 3] = ["MODE", "LIMIT", "RATIO"];

fn is_option_name(name: &str) -> bool {
    OPTION_NAMES.contains(&name) || OPTION_ALIASES.contains(&name)
}

/// `BS_*` variables among `keys` that name no known option, sorted.
///
/// Keys that are not valid UTF-8 cannot carry the prefix and are skipped.
pub fn unrecognized_env_vars<I, K>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = K>,
    K: AsRef<OsStr>,
{
    let mut unknown: Vec<String> = keys
        .into_iter()
        .filter_map(|key| key.as_ref().to_str().map(str::to_string))
        .filter(|key| {
            key.strip_prefix(ENV_PREFIX)
                .is_some_and(|name| !is_option_name(name))
        })
        .collect();
    unknown.sort();
    unknown
}

/// Errors found while validating configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: &'static str,
    },

    #[error(transparent)]
    InvalidMode(#[from] MatchError),

    #[error("invalid FMT template: {0}")]
    InvalidTemplate(#[from] TemplateError),
}

impl ConfigError {
    fn invalid(key: &str, value: impl ToString, reason: &'static str) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason,
        }
    }
}

/// One layer of unvalidated settings.
///
/// Layers are read from the config file, the environment and the command
/// line, then stacked with [`Settings::overlay`]. Unset values fall through
/// to the layer below and finally to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub debug: Option<bool>,
    pub purge_query: Option<bool>,
    #[serde(alias = "mode")]
    pub match_mode: Option<String>,
    #[serde(alias = "limit")]
    pub match_limit: Option<i64>,
    #[serde(alias = "ratio")]
    pub match_ratio: Option<f64>,
    pub fmt: Option<String>,
    pub list_all: Option<bool>,
    pub show_envs: Option<bool>,
}

impl Settings {
    /// Read a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let path_str = path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;

        let mut builder = Confygery::new().context("Failed to create config builder")?;
        builder
            .add_file(path_str)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;

        let settings: Self = builder
            .build()
            .context("Failed to build configuration")?;

        Ok(settings)
    }

    /// Collect `BS_*` overrides from environment-style key/value pairs.
    ///
    /// `MATCH_MODE`, `MATCH_LIMIT` and `MATCH_RATIO` may also be given as
    /// `MODE`, `LIMIT` and `RATIO`; the long name wins when both are set.
    /// Unrelated variables are ignored whatever their encoding. A recognized
    /// variable whose value is not valid UTF-8 is an error.
    pub fn from_env_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        let mut settings = Self::default();
        let mut short = Self::default();

        for (key, value) in vars {
            let Some(env_key) = key.as_ref().to_str() else {
                continue;
            };
            let Some(name) = env_key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            if !is_option_name(name) {
                continue;
            }
            let value = value.as_ref();
            let value = value.to_str().ok_or_else(|| {
                ConfigError::invalid(env_key, value.to_string_lossy(), "expected UTF-8 text")
            })?;
            match name {
                "DEBUG" => settings.debug = Some(parse_bool(env_key, value)?),
                "PURGE_QUERY" => settings.purge_query = Some(parse_bool(env_key, value)?),
                "MATCH_MODE" => settings.match_mode = Some(value.to_string()),
                "MODE" => short.match_mode = Some(value.to_string()),
                "MATCH_LIMIT" => settings.match_limit = Some(parse_int(env_key, value)?),
                "LIMIT" => short.match_limit = Some(parse_int(env_key, value)?),
                "MATCH_RATIO" => settings.match_ratio = Some(parse_float(env_key, value)?),
                "RATIO" => short.match_ratio = Some(parse_float(env_key, value)?),
                "FMT" => settings.fmt = Some(value.to_string()),
                "LIST_ALL" => settings.list_all = Some(parse_bool(env_key, value)?),
                "SHOW_ENVS" => settings.show_envs = Some(parse_bool(env_key, value)?),
                _ => {}
            }
        }

        Ok(short.overlay(settings))
    }

    /// Stack `higher` on top of `self`; set values in `higher` win.
    #[must_use]
    pub fn overlay(self, higher: Self) -> Self {
        Self {
            debug: higher.debug.or(self.debug),
            purge_query: higher.purge_query.or(self.purge_query),
            match_mode: higher.match_mode.or(self.match_mode),
            match_limit: higher.match_limit.or(self.match_limit),
            match_ratio: higher.match_ratio.or(self.match_ratio),
            fmt: higher.fmt.or(self.fmt),
            list_all: higher.list_all.or(self.list_all),
            show_envs: higher.show_envs.or(self.show_envs),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(key, value, "expected a boolean (1/0, true/false)")),
    }
}

fn parse_int(key: &str, value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid(key, value, "expected an integer"))
}

fn parse_float(key: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid(key, value, "expected a number"))
}

/// Validated, immutable configuration for one run.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (BS_* prefix)
/// 3. Config file (~/.config/beatles-song/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone)]
pub struct Config {
    /// Emit diagnostics on stderr.
    pub debug: bool,

    /// Strip "(...)" annotations from the query before matching.
    pub purge_query: bool,

    /// Strategies to run, in order.
    pub strategies: Vec<Strategy>,

    /// Maximum number of results, always at least 1.
    pub match_limit: usize,

    /// Rank threshold in [0, 1].
    pub match_ratio: f64,

    /// Output line template.
    pub fmt: Template,

    /// Print every catalog record and exit.
    pub list_all: bool,

    /// Print recognized options and their values and exit.
    pub show_envs: bool,

    /// `BS_*` variables in the environment that name no known option.
    pub ignored_env: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            purge_query: false,
            strategies: vec![Strategy::Rank],
            match_limit: DEFAULT_LIMIT,
            match_ratio: DEFAULT_RATIO,
            fmt: Template::default(),
            list_all: false,
            show_envs: false,
            ignored_env: Vec::new(),
        }
    }
}

impl Config {
    /// Validate a stack of settings, filling gaps with defaults.
    pub fn from_settings(settings: Settings) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let strategies = match settings.match_mode {
            Some(mode) => parse_mode(&mode)?,
            None => defaults.strategies,
        };

        let match_limit = match settings.match_limit {
            None => defaults.match_limit,
            Some(limit) => usize::try_from(limit)
                .ok()
                .filter(|&limit| limit > 0)
                .ok_or_else(|| {
                    ConfigError::invalid("MATCH_LIMIT", limit, "expected a positive integer")
                })?,
        };

        let match_ratio = settings.match_ratio.unwrap_or(defaults.match_ratio);
        if !(0.0..=1.0).contains(&match_ratio) {
            return Err(ConfigError::invalid(
                "MATCH_RATIO",
                match_ratio,
                "expected a number between 0 and 1",
            ));
        }

        let fmt = match settings.fmt {
            Some(source) => Template::parse(&source)?,
            None => defaults.fmt,
        };

        Ok(Self {
            debug: settings.debug.unwrap_or(defaults.debug),
            purge_query: settings.purge_query.unwrap_or(defaults.purge_query),
            strategies,
            match_limit,
            match_ratio,
            fmt,
            list_all: settings.list_all.unwrap_or(defaults.list_all),
            show_envs: settings.show_envs.unwrap_or(defaults.show_envs),
            ignored_env: defaults.ignored_env,
        })
    }

    /// Load configuration from the config file, the process environment and
    /// command-line overrides.
    ///
    /// `config_path` replaces the default file location; an explicitly given
    /// file must exist, the default one is optional.
    pub fn load(config_path: Option<&Path>, cli: Settings) -> Result<Self> {
        let file = match config_path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                Settings::from_file(path)?
            }
            None => {
                let path = config_file_path();
                if path.exists() {
                    Settings::from_file(&path)?
                } else {
                    Settings::default()
                }
            }
        };

        let vars: Vec<(OsString, OsString)> = std::env::vars_os().collect();
        let env = Settings::from_env_vars(vars.iter().map(|(key, value)| (key, value)))?;

        let mut config = Self::from_settings(file.overlay(env).overlay(cli))?;
        config.ignored_env = unrecognized_env_vars(vars.iter().map(|(key, _)| key));
        Ok(config)
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions::default()
            .with_strategies(self.strategies.clone())
            .with_limit(self.match_limit)
            .with_min_ratio(self.match_ratio)
            .with_purge(self.purge_query)
    }

    /// Effective value of every recognized option, keyed by option name.
    pub fn entries(&self) -> [(&'static str, String); 8] {
        let flag = |b: bool| String::from(if b { "1" } else { "0" });
        [
            (OPTION_NAMES[0], flag(self.debug)),
            (OPTION_NAMES[1], flag(self.purge_query)),
            (OPTION_NAMES[2], format_mode(&self.strategies)),
            (OPTION_NAMES[3], self.match_limit.to_string()),
            (OPTION_NAMES[4], self.match_ratio.to_string()),
            (OPTION_NAMES[5], self.fmt.as_str().to_string()),
            (OPTION_NAMES[6], flag(self.list_all)),
            (OPTION_NAMES[7], flag(self.show_envs)),
        ]
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/beatles-song/config.toml
/// - macOS: ~/Library/Application Support/beatles-song/config.toml
/// - Windows: %APPDATA%\beatles-song\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("beatles-song")
        .join("config.toml")
}
