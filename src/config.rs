//! Configuration management for datelabel
//!
//! Holds the blog's site build settings (passed through untouched to the
//! static-site generator), the date locale override and logging settings.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_LOG_LEVEL, DEFAULT_SITE_URL, DEFAULT_SYNTAX_THEME,
    LOCAL_CONFIG_FILE_NAME, SUPPORTED_INTEGRATIONS,
};
use crate::format::DateLabelFormatter;
use crate::locale;
use crate::utils::datetime;
use anyhow::{Context, Result};
use icu::locale::Locale;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub markdown: MarkdownConfig,
    /// Old path -> new path
    pub redirects: BTreeMap<String, String>,
    pub dates: DatesConfig,
    pub logging: LoggingConfig,
}

/// Site build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL the site is deployed under
    pub url: String,
    /// Enabled content integrations ("mdx", "sitemap")
    pub integrations: Vec<String>,
}

/// Markdown rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Syntax-highlighting theme for code blocks
    pub syntax_theme: String,
}

/// Date label configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatesConfig {
    /// Locale for date labels; the host locale when unset
    pub locale: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level written to stderr ("off", "error", "warn", "info", "debug", "trace")
    pub level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SITE_URL.to_string(),
            integrations: SUPPORTED_INTEGRATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            syntax_theme: DEFAULT_SYNTAX_THEME.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Ok(xdg_config) = Self::get_default_config_path() {
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(self.site.url.starts_with("http://") || self.site.url.starts_with("https://")) {
            anyhow::bail!("site.url must start with http:// or https://, got '{}'", self.site.url);
        }

        self.validate_integrations()?;

        if self.markdown.syntax_theme.trim().is_empty() {
            anyhow::bail!("markdown.syntax_theme cannot be empty");
        }

        self.validate_redirects()?;

        if let Some(name) = &self.dates.locale {
            if locale::parse_locale(name).is_none() {
                anyhow::bail!("Malformed dates.locale '{}'", name);
            }
        }

        self.logging.level_filter()?;

        Ok(())
    }

    fn validate_integrations(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for integration in &self.site.integrations {
            if integration.is_empty() {
                anyhow::bail!("site.integrations cannot contain an empty name");
            }
            if !SUPPORTED_INTEGRATIONS.contains(&integration.as_str()) {
                anyhow::bail!(
                    "Unsupported integration '{}'. Supported integrations: {}",
                    integration,
                    SUPPORTED_INTEGRATIONS.join(", ")
                );
            }
            if !seen.insert(integration.as_str()) {
                anyhow::bail!("Integration '{}' is listed more than once", integration);
            }
        }
        Ok(())
    }

    fn validate_redirects(&self) -> Result<()> {
        for (from, to) in &self.redirects {
            if !from.starts_with('/') {
                anyhow::bail!("Redirect source '{}' must start with '/'", from);
            }
            if !to.starts_with('/') {
                anyhow::bail!("Redirect target '{}' for '{}' must start with '/'", to, from);
            }
            if from == to {
                anyhow::bail!("Redirect '{}' points to itself", from);
            }
        }
        Ok(())
    }

    /// Check if an integration is enabled
    pub fn is_integration_enabled(&self, name: &str) -> bool {
        self.site.integrations.iter().any(|i| i == name)
    }

    /// Look up the redirect target for a path
    pub fn redirect_for(&self, path: &str) -> Option<&str> {
        self.redirects.get(path).map(String::as_str)
    }

    /// Locale set by `dates.locale`, if any
    pub fn locale_override(&self) -> Option<Locale> {
        self.dates.locale.as_deref().and_then(locale::parse_locale)
    }

    /// Dedicated formatter for the `dates.locale` override
    ///
    /// `None` means labels should come from [`DateLabelFormatter::shared`].
    pub fn override_formatter(&self) -> Option<DateLabelFormatter> {
        self.locale_override().map(DateLabelFormatter::with_locale)
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# datelabel Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::ISO_DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}
