//! Theme-source loading.
//!
//! A theme source is a directory holding a color document (and optionally a
//! `wallpaper` file), a single colors file, or a document piped on stdin.
//! Directory probing tries `colors.json` before `colors.yaml`, matching the
//! documented theme layout.

use crate::error::{SchemeError, ThemeError};
use crate::scheme::{ColorDocument, Scheme};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Color-document encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

/// A loaded theme: the validated scheme plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub scheme: Scheme,
    /// Directory wallpaper lookups resolve against.
    pub dir: PathBuf,
    /// Theme source string as given; recorded by the `current-theme` effect.
    pub origin: String,
}

impl Theme {
    /// Wallpaper image shipped with the theme, when present.
    pub fn wallpaper(&self) -> Option<PathBuf> {
        let path = self.dir.join("wallpaper");
        path.is_file().then_some(path)
    }
}

/// Load a theme from a directory or colors file path.
///
/// `forced` overrides format detection (the `-j`/`-y` flags); for a
/// directory it is ignored, since the document file name fixes the format.
pub fn load(source: &str, forced: Option<SourceFormat>) -> Result<Theme, ThemeError> {
    let path = Path::new(source);
    if path.is_dir() {
        let scheme = load_dir(path)?;
        Ok(Theme {
            scheme,
            dir: path.to_path_buf(),
            origin: source.to_string(),
        })
    } else if path.is_file() {
        let format = forced
            .or_else(|| format_from_extension(path))
            .ok_or_else(|| ThemeError::UnknownFormat(path.to_path_buf()))?;
        let scheme = parse_file(path, format)?;
        let dir = match path.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(Theme {
            scheme,
            dir,
            origin: source.to_string(),
        })
    } else {
        Err(ThemeError::NotFound(path.to_path_buf()))
    }
}

/// Load a theme from a piped color document. The theme directory falls back
/// to the working directory.
pub fn load_stdin(mut input: impl Read, format: SourceFormat) -> Result<Theme, ThemeError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let scheme = parse_text(&text, format)?;
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let origin = dir.display().to_string();
    Ok(Theme { scheme, dir, origin })
}

/// Parse a color document from text in the given format.
pub fn parse_text(text: &str, format: SourceFormat) -> Result<Scheme, ThemeError> {
    let doc: ColorDocument = match format {
        SourceFormat::Json => serde_json::from_str(text).map_err(SchemeError::Json)?,
        SourceFormat::Yaml => serde_yaml::from_str(text).map_err(SchemeError::Yaml)?,
    };
    Ok(Scheme::from_document(&doc)?)
}

fn load_dir(dir: &Path) -> Result<Scheme, ThemeError> {
    let json = dir.join("colors.json");
    if json.is_file() {
        return parse_file(&json, SourceFormat::Json);
    }
    let yaml = dir.join("colors.yaml");
    if yaml.is_file() {
        return parse_file(&yaml, SourceFormat::Yaml);
    }
    Err(ThemeError::NoColorDocument(dir.to_path_buf()))
}

fn parse_file(path: &Path, format: SourceFormat) -> Result<Scheme, ThemeError> {
    let text = std::fs::read_to_string(path)?;
    parse_text(&text, format)
}

fn format_from_extension(path: &Path) -> Option<SourceFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Some(SourceFormat::Json),
        Some("yaml") | Some("yml") => Some(SourceFormat::Yaml),
        _ => None,
    }
}
