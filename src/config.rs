//! Layered YAML configuration.
//!
//! Candidates are tried in order (user config, then system config); the
//! first file that exists wins, and no file at all falls back to built-in
//! defaults. The file shape is an ordered `modules` list plus one optional
//! option block per module name:
//!
//! ```yaml
//! modules:
//!   - xresources
//!   - shell
//!   - termite
//! termite:
//!   partial: ~/.config/termite/config.part
//!   command: "killall -USR1 termite"
//! ```

use crate::error::ConfigError;
use crate::layout::Layout;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Module order applied when no config file selects one.
pub const DEFAULT_MODULES: [&str; 10] = [
    "xresources",
    "shell",
    "termite",
    "dunst",
    "vim",
    "rofi",
    "emacs",
    "bar",
    "wallpaper",
    "current-theme",
];

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// Per-module option block (`<module>:` section in config.yaml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModuleOptions {
    /// Template name; overrides a built-in effect's default template and is
    /// required for generic template modules.
    pub template: Option<String>,
    /// Output path override; `~` is expanded.
    pub target: Option<String>,
    /// Fragment file prepended to the rendered block; a missing file is
    /// silently treated as empty.
    pub partial: Option<String>,
    /// Reload command override; an empty string disables the default.
    pub command: Option<String>,
}

/// Loaded configuration: the ordered module list plus per-module options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub modules: Vec<String>,
    options: BTreeMap<String, ModuleOptions>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modules: DEFAULT_MODULES.iter().map(|m| m.to_string()).collect(),
            options: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Option block for a module; a default block when none is configured.
    pub fn module_options(&self, name: &str) -> ModuleOptions {
        self.options.get(name).cloned().unwrap_or_default()
    }

    /// Parse a config document. An empty document (or one holding only
    /// comments) deserializes to YAML null and means "all defaults".
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let parsed: FileConfig = serde_yaml::from_str::<Option<FileConfig>>(text)?.unwrap_or_default();
        let mut config = Self {
            options: parsed.options,
            ..Self::default()
        };
        if let Some(modules) = parsed.modules {
            config.modules = modules;
        }
        Ok(config)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    modules: Option<Vec<String>>,
    /// Every other top-level key is a per-module option block.
    #[serde(flatten)]
    options: BTreeMap<String, ModuleOptions>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from the layered candidate chain.
pub fn load_config(layout: &Layout) -> Result<Config, ConfigError> {
    for candidate in layout.config_candidates() {
        match std::fs::read_to_string(&candidate) {
            Ok(text) => return Config::from_yaml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(ConfigError::Io(e)),
        }
    }
    Ok(Config::default())
}
