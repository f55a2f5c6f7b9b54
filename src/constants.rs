//! Constants used throughout the application
//!
//! This module centralizes file names, defaults and user-facing messages.

// Config file lookup
pub const LOCAL_CONFIG_FILE_NAME: &str = "datelabel.toml";
pub const CONFIG_DIR_NAME: &str = "datelabel";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// Site defaults
pub const DEFAULT_SITE_URL: &str = "https://nivani.github.io";
pub const DEFAULT_SYNTAX_THEME: &str = "github-light";
/// Content integrations the site generator understands
pub const SUPPORTED_INTEGRATIONS: [&str; 2] = ["mdx", "sitemap"];

pub const DEFAULT_LOG_LEVEL: &str = "warn";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const USAGE: &str = "Usage: datelabel [--config PATH] [--generate-config [PATH]] <date>...";
