//! Color-scheme normalization.
//!
//! A base16 color document is either an ordered list of 16 hex colors or a
//! mapping keyed `base00`..`base0F` with optional name/author metadata. Both
//! forms normalize into a validated [`Scheme`], which expands into the flat
//! key/value context that mustache templates consume.
//!
//! Validation is up front: slot count, slot presence, and hex syntax are all
//! checked before any effect runs, so a malformed document can never fail
//! halfway through applying a theme.

use crate::error::SchemeError;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The sixteen slot names of a base16 palette, in palette order.
pub const SLOTS: [&str; 16] = [
    "base00", "base01", "base02", "base03", "base04", "base05", "base06", "base07", "base08",
    "base09", "base0A", "base0B", "base0C", "base0D", "base0E", "base0F",
];

/// Scheme name used when the document carries none.
pub const DEFAULT_SCHEME_NAME: &str = "base16-custom";

// ---------------------------------------------------------------------------
// Rgb
// ---------------------------------------------------------------------------

/// One color slot split into channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a six-digit hex color, tolerating a leading `#`.
    pub fn parse(slot: &str, raw: &str) -> Result<Self, SchemeError> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || SchemeError::InvalidColor {
            slot: slot.to_string(),
            value: raw.to_string(),
        };
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| invalid())?;
        let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| invalid())?;
        let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| invalid())?;
        Ok(Self { r, g, b })
    }

    /// Lowercase `rrggbb` form.
    pub fn hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Uppercase `RRGGBB` form.
    pub fn hex_upper(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// ---------------------------------------------------------------------------
// ColorDocument
// ---------------------------------------------------------------------------

/// Raw parsed form of a color document, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorDocument {
    /// Ordered list of 16 hex colors (`colors.json` array form).
    List(Vec<String>),
    /// Mapping keyed by slot name, plus optional metadata fields.
    Map(BTreeMap<String, String>),
}

// ---------------------------------------------------------------------------
// Scheme
// ---------------------------------------------------------------------------

/// A validated base16 scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    pub name: String,
    pub author: String,
    /// Slugified scheme name, used in generated file names.
    pub slug: String,
    bases: [Rgb; 16],
}

impl Scheme {
    pub fn from_document(doc: &ColorDocument) -> Result<Self, SchemeError> {
        match doc {
            ColorDocument::List(entries) => Self::from_list(entries),
            ColorDocument::Map(map) => Self::from_mapping(map),
        }
    }

    /// Normalize the ordered list form. The list must hold exactly 16 colors.
    pub fn from_list(entries: &[String]) -> Result<Self, SchemeError> {
        if entries.len() != SLOTS.len() {
            return Err(SchemeError::SlotCount(entries.len()));
        }
        let mut bases = [Rgb::default(); 16];
        for (index, raw) in entries.iter().enumerate() {
            bases[index] = Rgb::parse(SLOTS[index], raw)?;
        }
        Ok(Self::assemble(None, None, bases))
    }

    /// Normalize the keyed mapping form. Every `baseNN` slot must be present.
    pub fn from_mapping(map: &BTreeMap<String, String>) -> Result<Self, SchemeError> {
        let mut bases = [Rgb::default(); 16];
        for (index, slot) in SLOTS.iter().enumerate() {
            let raw = map.get(*slot).ok_or(SchemeError::MissingSlot(*slot))?;
            bases[index] = Rgb::parse(slot, raw)?;
        }
        let name = ["scheme", "scheme-name", "name"]
            .iter()
            .find_map(|key| map.get(*key))
            .cloned();
        let author = ["author", "scheme-author"]
            .iter()
            .find_map(|key| map.get(*key))
            .cloned();
        Ok(Self::assemble(name, author, bases))
    }

    fn assemble(name: Option<String>, author: Option<String>, bases: [Rgb; 16]) -> Self {
        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SCHEME_NAME.to_string());
        let slug = slugify(&name);
        Self {
            name,
            author: author.unwrap_or_default(),
            slug,
            bases,
        }
    }

    /// Color for palette slot `index` (0..16).
    pub fn base(&self, index: usize) -> Rgb {
        self.bases[index]
    }

    /// All sixteen colors in palette order.
    pub fn bases(&self) -> &[Rgb; 16] {
        &self.bases
    }

    /// Flat template context: ten derived keys per slot plus scheme metadata.
    ///
    /// Per slot `baseNN`: `-hex`, `-hex-r/g/b`, `-rgb-r/g/b` (0–255) and
    /// `-dec-r/g/b` (channel / 255). Metadata keys are `scheme-name`,
    /// `scheme-author`, and `scheme-slug`.
    pub fn context(&self) -> BTreeMap<String, String> {
        let mut ctx = BTreeMap::new();
        for (slot, rgb) in SLOTS.iter().zip(self.bases.iter()) {
            ctx.insert(format!("{slot}-hex"), rgb.hex());
            ctx.insert(format!("{slot}-hex-r"), format!("{:02x}", rgb.r));
            ctx.insert(format!("{slot}-hex-g"), format!("{:02x}", rgb.g));
            ctx.insert(format!("{slot}-hex-b"), format!("{:02x}", rgb.b));
            ctx.insert(format!("{slot}-rgb-r"), rgb.r.to_string());
            ctx.insert(format!("{slot}-rgb-g"), rgb.g.to_string());
            ctx.insert(format!("{slot}-rgb-b"), rgb.b.to_string());
            ctx.insert(format!("{slot}-dec-r"), format_unit(rgb.r));
            ctx.insert(format!("{slot}-dec-g"), format_unit(rgb.g));
            ctx.insert(format!("{slot}-dec-b"), format_unit(rgb.b));
        }
        ctx.insert("scheme-name".into(), self.name.clone());
        ctx.insert("scheme-author".into(), self.author.clone());
        ctx.insert("scheme-slug".into(), self.slug.clone());
        ctx
    }
}

/// Format `channel / 255` keeping a decimal point on whole values, so
/// templates always see float-shaped text (`0.0`, `1.0`, `0.5019…`).
fn format_unit(channel: u8) -> String {
    let value = f64::from(channel) / 255.0;
    if value == value.trunc() {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Lowercase the name and collapse non-alphanumeric runs to single dashes.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
