//! Resolved filesystem layout.
//!
//! All path decisions live here and the resolved layout is threaded through
//! the call chain, so effects never consult environment variables directly.
//! Tests build a [`Layout::rooted`] under a temp directory instead of
//! touching the real home.

use std::path::{Path, PathBuf};

/// System-wide configuration root.
pub const SYSTEM_ROOT: &str = "/etc/tinct";

/// Home, config, data, and system roots used by every effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// User home directory.
    pub home: PathBuf,
    /// `$XDG_CONFIG_HOME` or `~/.config`.
    pub config_home: PathBuf,
    /// `$XDG_DATA_HOME` or `~/.local/share`.
    pub data_home: PathBuf,
    /// System-wide configuration root (normally [`SYSTEM_ROOT`]).
    pub system_root: PathBuf,
}

impl Layout {
    /// Resolve the layout for the current user. `None` when no home
    /// directory can be determined.
    pub fn discover() -> Option<Self> {
        Some(Self {
            home: dirs::home_dir()?,
            config_home: dirs::config_dir()?,
            data_home: dirs::data_dir()?,
            system_root: PathBuf::from(SYSTEM_ROOT),
        })
    }

    /// Layout with every root placed under `root`. Used by tests.
    pub fn rooted(root: &Path) -> Self {
        Self {
            home: root.to_path_buf(),
            config_home: root.join(".config"),
            data_home: root.join(".local").join("share"),
            system_root: root.join("etc").join("tinct"),
        }
    }

    /// User-level template directory, searched before the system one.
    pub fn user_template_dir(&self) -> PathBuf {
        self.config_home.join("tinct").join("templates")
    }

    /// System-wide template directory.
    pub fn system_template_dir(&self) -> PathBuf {
        self.system_root.join("templates")
    }

    /// Per-user data directory (current-theme marker lives here).
    pub fn data_dir(&self) -> PathBuf {
        self.data_home.join("tinct")
    }

    /// Ordered configuration-file candidates; the first that exists wins.
    pub fn config_candidates(&self) -> [PathBuf; 2] {
        [
            self.config_home.join("tinct").join("config.yaml"),
            self.system_root.join("config.yaml"),
        ]
    }
}
