//! Unified error types for tinct.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// SchemeError
// ---------------------------------------------------------------------------

/// Errors raised while normalizing a color document into a scheme.
#[derive(Debug)]
pub enum SchemeError {
    /// The document is not valid JSON.
    Json(serde_json::Error),
    /// The document is not valid YAML.
    Yaml(serde_yaml::Error),
    /// List-form document with the wrong number of entries.
    SlotCount(usize),
    /// Mapping-form document missing a `baseNN` key.
    MissingSlot(&'static str),
    /// A slot value that is not a six-digit hex color.
    InvalidColor { slot: String, value: String },
}

impl fmt::Display for SchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "json: {e}"),
            Self::Yaml(e) => write!(f, "yaml: {e}"),
            Self::SlotCount(found) => write!(f, "expected 16 colors, found {found}"),
            Self::MissingSlot(slot) => write!(f, "missing color slot `{slot}`"),
            Self::InvalidColor { slot, value } => {
                write!(f, "invalid color for `{slot}`: `{value}` (expected 6 hex digits)")
            }
        }
    }
}

impl std::error::Error for SchemeError {}

impl From<serde_json::Error> for SchemeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<serde_yaml::Error> for SchemeError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e)
    }
}

// ---------------------------------------------------------------------------
// ThemeError
// ---------------------------------------------------------------------------

/// Errors while locating or reading a theme source. All of these are fatal
/// and map to exit code 66 (`EX_NOINPUT`).
#[derive(Debug)]
pub enum ThemeError {
    /// The given theme path does not exist.
    NotFound(PathBuf),
    /// A theme directory without `colors.json` or `colors.yaml`.
    NoColorDocument(PathBuf),
    /// A colors file whose format cannot be inferred from its extension.
    UnknownFormat(PathBuf),
    /// No THEME argument and no piped-document format flag.
    MissingSource,
    Io(std::io::Error),
    Scheme(SchemeError),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "theme source {} does not exist", path.display()),
            Self::NoColorDocument(dir) => {
                write!(f, "no colors.json or colors.yaml in {}", dir.display())
            }
            Self::UnknownFormat(path) => write!(
                f,
                "cannot infer the color document format of {} (use -j or -y)",
                path.display()
            ),
            Self::MissingSource => {
                write!(f, "no theme source: pass a THEME path or pipe a document with -j/-y")
            }
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Scheme(e) => write!(f, "colors: {e}"),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<std::io::Error> for ThemeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<SchemeError> for ThemeError {
    fn from(e: SchemeError) -> Self {
        Self::Scheme(e)
    }
}

// ---------------------------------------------------------------------------
// TemplateError
// ---------------------------------------------------------------------------

/// Errors while resolving or rendering a mustache template.
#[derive(Debug)]
pub enum TemplateError {
    /// `<name>.mustache` exists in none of the searched directories.
    NotFound { name: String, searched: Vec<PathBuf> },
    Io(std::io::Error),
    Render(mustache::Error),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name, searched } => {
                let dirs: Vec<String> = searched.iter().map(|p| p.display().to_string()).collect();
                write!(f, "template `{name}` not found (searched {})", dirs.join(", "))
            }
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Render(e) => write!(f, "render: {e}"),
        }
    }
}

impl std::error::Error for TemplateError {}

impl From<std::io::Error> for TemplateError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<mustache::Error> for TemplateError {
    fn from(e: mustache::Error) -> Self {
        Self::Render(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Yaml(e) => write!(f, "yaml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e)
    }
}

// ---------------------------------------------------------------------------
// EffectError
// ---------------------------------------------------------------------------

/// Errors from a single effect run. Never fatal: the dispatcher reports the
/// failure and moves on to the next configured module.
#[derive(Debug)]
pub enum EffectError {
    Template(TemplateError),
    Io(std::io::Error),
    Json(serde_json::Error),
    /// A generic template module without a required option.
    MissingOption(&'static str),
}

impl fmt::Display for EffectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Json(e) => write!(f, "json: {e}"),
            Self::MissingOption(option) => write!(f, "missing module option `{option}`"),
        }
    }
}

impl std::error::Error for EffectError {}

impl From<TemplateError> for EffectError {
    fn from(e: TemplateError) -> Self {
        Self::Template(e)
    }
}

impl From<std::io::Error> for EffectError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for EffectError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

// ---------------------------------------------------------------------------
// TinctError — top-level
// ---------------------------------------------------------------------------

/// Top-level fatal error for the CLI driver.
#[derive(Debug)]
pub enum TinctError {
    Theme(ThemeError),
    Config(ConfigError),
}

impl TinctError {
    /// Process exit code: missing/unreadable theme input uses sysexits.h
    /// `EX_NOINPUT` (66), everything else a plain failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Theme(_) => 66,
            Self::Config(_) => 1,
        }
    }
}

impl fmt::Display for TinctError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Theme(e) => write!(f, "theme: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for TinctError {}

impl From<ThemeError> for TinctError {
    fn from(e: ThemeError) -> Self {
        Self::Theme(e)
    }
}

impl From<ConfigError> for TinctError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
