//! Shared test fixtures.
//!
//! Std-only helpers so unit tests across modules can build temp layouts,
//! sample schemes, and effect contexts without extra dependencies.

use crate::config::{Config, ModuleOptions};
use crate::effects::EffectContext;
use crate::layout::Layout;
use crate::scheme::Scheme;
use crate::template::TemplateStore;
use crate::theme::Theme;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("tinct-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Sixteen distinct hex colors in palette order; base00 is black, base01
/// white, so channel assertions have obvious expectations.
pub fn sample_hex_list() -> Vec<String> {
    [
        "000000", "ffffff", "1a1b26", "24283b", "414868", "565f89", "9aa5ce", "c0caf5",
        "f7768e", "ff9e64", "e0af68", "9ece6a", "73daca", "7dcfff", "7aa2f7", "bb9af7",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// `colors.json` list-form document for [`sample_hex_list`].
pub fn sample_colors_json() -> String {
    serde_json::to_string(&sample_hex_list()).expect("failed to serialize sample colors")
}

/// `colors.yaml` mapping-form document for [`sample_hex_list`] with the
/// given scheme name.
pub fn sample_colors_yaml(name: &str) -> String {
    let mut out = format!("scheme: \"{name}\"\nauthor: \"fixture\"\n");
    for (slot, hex) in crate::scheme::SLOTS.iter().zip(sample_hex_list()) {
        out.push_str(&format!("{slot}: \"{hex}\"\n"));
    }
    out
}

/// Validated scheme built from [`sample_hex_list`].
pub fn sample_scheme() -> Scheme {
    Scheme::from_list(&sample_hex_list()).expect("sample colors must validate")
}

/// Module options with the reload command disabled, so effect tests never
/// spawn external programs.
pub fn quiet_options() -> ModuleOptions {
    ModuleOptions {
        command: Some(String::new()),
        ..ModuleOptions::default()
    }
}

/// Owns everything an [`EffectContext`] borrows.
pub struct EffectHarness {
    pub colors: BTreeMap<String, String>,
    pub theme: Theme,
    pub layout: Layout,
    pub templates: TemplateStore,
    pub options: ModuleOptions,
}

impl EffectHarness {
    pub fn ctx(&self) -> EffectContext<'_> {
        EffectContext {
            scheme: &self.theme.scheme,
            colors: &self.colors,
            theme: &self.theme,
            layout: &self.layout,
            templates: &self.templates,
            options: &self.options,
        }
    }
}

/// Effect harness rooted under the fixture: sample scheme, a `theme/`
/// source directory, and the fixture-local template search path.
pub fn sample_effect_context(fixture: &TestTempDir, options: ModuleOptions) -> EffectHarness {
    let layout = Layout::rooted(fixture.path());
    let theme_dir = fixture.child("theme");
    fs::create_dir_all(&theme_dir).expect("failed to create theme fixture directory");
    let scheme = sample_scheme();
    let colors = scheme.context();
    let theme = Theme {
        scheme,
        origin: theme_dir.display().to_string(),
        dir: theme_dir,
    };
    let templates = TemplateStore::new(&layout);
    EffectHarness {
        colors,
        theme,
        layout,
        templates,
        options,
    }
}

/// Dispatch-level fixture: theme, layout, template store, default config.
pub fn effect_fixture(fixture: &TestTempDir) -> (Theme, Layout, TemplateStore, Config) {
    let harness = sample_effect_context(fixture, ModuleOptions::default());
    (harness.theme, harness.layout, harness.templates, Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn sample_documents_agree_on_the_palette() {
        let from_json = crate::theme::parse_text(
            &sample_colors_json(),
            crate::theme::SourceFormat::Json,
        )
        .unwrap();
        let from_yaml = crate::theme::parse_text(
            &sample_colors_yaml("x"),
            crate::theme::SourceFormat::Yaml,
        )
        .unwrap();
        assert_eq!(from_json.bases(), from_yaml.bases());
    }
}
