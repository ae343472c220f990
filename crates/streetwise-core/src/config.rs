//! Configuration loading and discovery.
//!
//! This module provides configuration file discovery by:
//! 1. Walking up from the current directory to find project config
//! 2. Loading user config from XDG config directory
//! 3. Merging with sensible defaults
//!
//! # Supported formats
//!
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Config file locations (in order of precedence, highest first):
//! - `streetwise.<ext>` in current directory or any parent
//! - `.streetwise.<ext>` in current directory or any parent
//! - `~/.config/streetwise/config.<ext>` (user config)
//!
//! When multiple files exist in the same directory, all are merged via figment.
//! Later extensions override earlier: toml < yaml < yml < json.
//!
//! Environment variables prefixed `STREETWISE_` override every file;
//! nested keys use a double underscore (`STREETWISE_QUIZ__QUESTIONS=5`).
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use streetwise_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::DEFAULT_MAX_INPUT_BYTES;
use crate::error::{ConfigError, ConfigResult};
use crate::quiz::QuizSettings;
use crate::vocabulary::{StreetType, Vocabulary};

/// The configuration for streetwise.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (falls back to platform defaults if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Street listing to read (text or PDF).
    pub source: Option<Utf8PathBuf>,
    /// Read at most this many pages of the listing.
    pub max_pages: Option<usize>,
    /// Maximum listing size in bytes (default: 5 MiB).
    ///
    /// Use `disable_input_limit` to remove the limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the listing size limit entirely.
    pub disable_input_limit: bool,
    /// Default number of streets shown by a type lookup.
    pub lookup_count: Option<usize>,
    /// Quiz defaults.
    pub quiz: QuizSettings,
    /// Street types recognized on top of the built-in table.
    ///
    /// An entry whose abbreviation matches a built-in type replaces it.
    pub extra_types: Option<Vec<StreetType>>,
}

impl Config {
    /// Effective listing size limit; `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        }
    }

    /// The built-in street types plus `extra_types`.
    pub fn vocabulary(&self) -> Vocabulary {
        match &self.extra_types {
            Some(extra) => Vocabulary::with_extra(extra),
            None => Vocabulary::builtin(),
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "streetwise";

/// Environment variable prefix.
const ENV_PREFIX: &str = "STREETWISE_";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/streetwise/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set a boundary marker to stop directory traversal. Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Disable boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order after discovered files; later files win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. `STREETWISE_*` environment variables
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to search root)
    /// 4. User config (`~/.config/streetwise/config.<ext>`)
    /// 5. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // STREETWISE_SOURCE=listing.txt, STREETWISE_QUIZ__CHOICES=3, etc.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            source = ?config.source,
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Load configuration, returning an error if no config file is found.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && self.find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .is_some_and(|root| !self.find_project_configs(root).is_empty());
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns the config files of the closest directory that has any,
    /// dotfiles first so a regular `streetwise.<ext>` wins.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();
            for ext in CONFIG_EXTENSIONS {
                let dotfile = dir.join(format!(".{APP_NAME}.{ext}"));
                if dotfile.is_file() {
                    found.push(dotfile);
                }
            }
            for ext in CONFIG_EXTENSIONS {
                let regular = dir.join(format!("{APP_NAME}.{ext}"));
                if regular.is_file() {
                    found.push(regular);
                }
            }

            if !found.is_empty() {
                return found;
            }

            // A config beside the marker still counts.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// Find user config in XDG config directory.
    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

/// Get the project directories for XDG-compliant path resolution.
fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Get the user config directory path.
///
/// Returns `~/.config/streetwise/` on Linux, `~/Library/Application Support/streetwise/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

/// Get the local data directory path, used for log files.
pub fn user_data_local_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.data_local_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{ChoiceCount, FormatChoice, KindChoice};
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serializes tests that mutate environment variables via `set_var`/`remove_var`.
    static TEST_ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn utf8(path: std::path::PathBuf) -> Utf8PathBuf {
        Utf8PathBuf::try_from(path).unwrap()
    }

    fn load_file(path: &Utf8Path) -> Config {
        ConfigLoader::new()
            .with_user_config(false)
            .with_file(path)
            .load()
            .unwrap()
            .0
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert!(config.source.is_none());
        assert_eq!(config.quiz, QuizSettings::default());
        assert_eq!(config.input_limit(), Some(DEFAULT_MAX_INPUT_BYTES));
    }

    #[test]
    fn test_loader_builds_with_defaults() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn test_single_file_overrides_default() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let config_path = utf8(tmp.path().join("config.toml"));
        fs::write(
            &config_path,
            r#"log_level = "debug"
source = "listings/streets.txt"
max_pages = 39
lookup_count = 3

[quiz]
questions = 5
kind = "type"
format = "choice"
"#,
        )
        .unwrap();

        let config = load_file(&config_path);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(
            config.source.as_ref().map(|p| p.as_str()),
            Some("listings/streets.txt")
        );
        assert_eq!(config.max_pages, Some(39));
        assert_eq!(config.lookup_count, Some(3));
        assert_eq!(config.quiz.questions, 5);
        assert_eq!(config.quiz.kind, KindChoice::Type);
        assert_eq!(config.quiz.format, FormatChoice::Choice);
        // Unset quiz keys keep their defaults.
        assert_eq!(config.quiz.choices, ChoiceCount::default());
    }

    #[test]
    fn test_later_file_overrides_earlier() {
        let tmp = TempDir::new().unwrap();
        let base = utf8(tmp.path().join("base.toml"));
        fs::write(&base, r#"log_level = "warn""#).unwrap();
        let over = utf8(tmp.path().join("override.yaml"));
        fs::write(&over, "log_level: error\n").unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&base)
            .with_file(&over)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(sources.primary_file(), Some(over.as_path()));
    }

    #[test]
    fn test_project_config_discovery() {
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("project");
        let sub_dir = project_dir.join("data").join("deep");
        fs::create_dir_all(&sub_dir).unwrap();
        fs::write(project_dir.join(".streetwise.toml"), r#"log_level = "debug""#).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(sub_dir))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_boundary_marker_stops_search() {
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();
        fs::write(parent.join(".streetwise.toml"), r#"log_level = "warn""#).unwrap();
        fs::create_dir(child.join(".git")).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker(".git")
            .with_project_search(utf8(work))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn dotfile_before_regular() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".streetwise.toml"), "max_pages = 3\nlog_level = \"debug\"\n")
            .unwrap();
        fs::write(tmp.path().join("streetwise.yaml"), "log_level: error\n").unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(tmp.path().to_path_buf()))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.max_pages, Some(3));
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn only_closest_directory_contributes() {
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        fs::create_dir_all(&child).unwrap();
        fs::write(parent.join("streetwise.toml"), "max_pages = 3\n").unwrap();
        fs::write(child.join(".streetwise.toml"), r#"log_level = "error""#).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(child))
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert!(config.max_pages.is_none());
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_load_or_error_fails_when_no_config() {
        let result = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load_or_error();
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn invalid_value_is_a_deserialize_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = utf8(tmp.path().join("config.toml"));
        fs::write(&config_path, "[quiz]\nkind = \"trivia\"\n").unwrap();

        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load();
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn disable_input_limit_overrides_max_bytes() {
        let tmp = TempDir::new().unwrap();
        let config_path = utf8(tmp.path().join("config.toml"));
        fs::write(
            &config_path,
            "max_input_bytes = 1024\ndisable_input_limit = true\n",
        )
        .unwrap();

        let config = load_file(&config_path);
        assert!(config.disable_input_limit);
        assert_eq!(config.max_input_bytes, Some(1024));
        assert_eq!(config.input_limit(), None);
    }

    #[test]
    fn max_input_bytes_sets_the_limit() {
        let config = Config {
            max_input_bytes: Some(2048),
            ..Config::default()
        };
        assert_eq!(config.input_limit(), Some(2048));
    }

    #[test]
    fn extra_types_deserialize_from_yaml() {
        let yaml = r#"
extra_types:
  - abbr: Espl
    long: Esplanade
  - abbr: Crt
    long: Court
    name_word: true
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let extra = config.extra_types.as_ref().unwrap();
        assert_eq!(extra.len(), 2);
        assert_eq!(extra[0].abbr, "Espl");
        assert!(!extra[0].name_word);

        let vocab = config.vocabulary();
        assert_eq!(vocab.resolve("esplanade").map(|t| t.abbr.as_str()), Some("Espl"));
        assert!(vocab.resolve("Crt").unwrap().name_word);
        assert_eq!(vocab.len(), Vocabulary::builtin().len() + 1);
    }

    #[test]
    fn no_extra_types_is_builtin_vocabulary() {
        let config: Config = serde_yaml::from_str("log_level: info\n").unwrap();
        assert!(config.extra_types.is_none());
        assert_eq!(config.vocabulary().len(), Vocabulary::builtin().len());
    }

    #[test]
    fn test_user_config_dir() {
        if let Some(path) = user_config_dir() {
            assert!(path.as_str().contains("streetwise"));
        }
    }

    #[test]
    fn test_choice_range_from_file() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let config_path = utf8(tmp.path().join("config.toml"));
        fs::write(&config_path, "[quiz]\nchoices = \"3-5\"\n").unwrap();

        let config = load_file(&config_path);
        assert_eq!(config.quiz.choices, ChoiceCount::range(3, 5).unwrap());
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_overrides_file_config() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let tmp = TempDir::new().unwrap();
        let config_path = utf8(tmp.path().join("config.toml"));
        fs::write(&config_path, "max_pages = 10\n[quiz]\nchoices = 5\n").unwrap();

        // SAFETY: Test environment; mutex serializes env access across tests.
        unsafe {
            std::env::set_var("STREETWISE_MAX_PAGES", "2");
            std::env::set_var("STREETWISE_QUIZ__CHOICES", "3");
        }

        let config = load_file(&config_path);

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("STREETWISE_MAX_PAGES");
            std::env::remove_var("STREETWISE_QUIZ__CHOICES");
        }

        assert_eq!(config.max_pages, Some(2));
        assert_eq!(config.quiz.choices, ChoiceCount::fixed(3));
    }
}
