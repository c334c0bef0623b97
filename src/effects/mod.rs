//! Theme-application effects.
//!
//! Each integration is a named effect: it receives the normalized scheme,
//! the theme source, its per-module option block, and the resolved layout,
//! and performs one idempotent side effect (write a file, then optionally
//! fire a reload command). Effects run sequentially in configured order; an
//! unknown or failing module is reported and skipped so the remaining
//! modules still apply.

pub mod bar;
pub mod current_theme;
pub mod dunst;
pub mod emacs;
pub mod generic;
pub mod rofi;
pub mod shell;
pub mod termite;
pub mod vim;
pub mod wallpaper;
pub mod xresources;

use crate::config::{Config, ModuleOptions};
use crate::error::EffectError;
use crate::layout::Layout;
use crate::scheme::Scheme;
use crate::template::TemplateStore;
use crate::theme::Theme;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// Effect trait
// ---------------------------------------------------------------------------

/// Everything an effect may consult while running.
pub struct EffectContext<'a> {
    pub scheme: &'a Scheme,
    /// Flat mustache context derived from the scheme.
    pub colors: &'a BTreeMap<String, String>,
    pub theme: &'a Theme,
    pub layout: &'a Layout,
    pub templates: &'a TemplateStore,
    pub options: &'a ModuleOptions,
}

impl EffectContext<'_> {
    /// Target path: the configured override (with `~` expansion) or `default`.
    pub fn target(&self, default: PathBuf) -> PathBuf {
        match &self.options.target {
            Some(target) => PathBuf::from(shellexpand::tilde(target).into_owned()),
            None => default,
        }
    }

    /// Partial path: the configured override (with `~` expansion) or `default`.
    pub fn partial(&self, default: Option<PathBuf>) -> Option<PathBuf> {
        match &self.options.partial {
            Some(partial) => Some(PathBuf::from(shellexpand::tilde(partial).into_owned())),
            None => default,
        }
    }
}

/// A single named integration.
pub trait Effect {
    /// Registry name matching the configured module name.
    fn name(&self) -> &'static str;

    /// Apply the effect. Called once per invocation.
    fn run(&self, ctx: &EffectContext) -> Result<(), EffectError>;
}

// ---------------------------------------------------------------------------
// Effect registry
// ---------------------------------------------------------------------------

/// Registry of available effects, dispatched by configured module name.
pub struct EffectRegistry {
    effects: Vec<Box<dyn Effect>>,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self { effects: Vec::new() }
    }

    /// Registry holding every built-in effect.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(xresources::Xresources);
        registry.register(shell::ShellExports);
        registry.register(termite::Termite);
        registry.register(dunst::Dunst);
        registry.register(vim::Vim);
        registry.register(emacs::Emacs);
        registry.register(rofi::Rofi);
        registry.register(bar::StatusBar);
        registry.register(wallpaper::Wallpaper);
        registry.register(current_theme::CurrentTheme);
        registry.register(generic::Template);
        registry
    }

    /// Register an effect.
    pub fn register(&mut self, effect: impl Effect + 'static) {
        self.effects.push(Box::new(effect));
    }

    /// Find an effect by name.
    pub fn find(&self, name: &str) -> Option<&dyn Effect> {
        self.effects.iter().find(|e| e.name() == name).map(|e| e.as_ref())
    }

    /// Registered effect names, in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.effects.iter().map(|e| e.name()).collect()
    }

    /// True if no effects are registered.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl Default for EffectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Outcome of one dispatch pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Modules that ran to completion, in order.
    pub applied: Vec<String>,
    /// Modules skipped because they were unknown or failed.
    pub skipped: Vec<String>,
}

/// Run the requested modules in order against one theme.
///
/// Module failures are not fatal: a module that cannot be resolved or whose
/// effect errors is logged, recorded in the summary, and the rest still run.
pub fn dispatch(
    registry: &EffectRegistry,
    modules: &[String],
    theme: &Theme,
    layout: &Layout,
    templates: &TemplateStore,
    config: &Config,
) -> DispatchSummary {
    let colors = theme.scheme.context();
    let mut summary = DispatchSummary::default();
    for name in modules {
        let options = config.module_options(name);
        let ctx = EffectContext {
            scheme: &theme.scheme,
            colors: &colors,
            theme,
            layout,
            templates,
            options: &options,
        };
        let result = match registry.find(name) {
            Some(effect) => effect.run(&ctx),
            // A config block naming a template is a generic template module
            // dispatched under its own name.
            None if options.template.is_some() => generic::Template.run(&ctx),
            None => {
                warn!("unknown module `{name}`; skipping");
                summary.skipped.push(name.clone());
                continue;
            }
        };
        match result {
            Ok(()) => {
                info!("applied {name}");
                summary.applied.push(name.clone());
            }
            Err(e) => {
                warn!("module `{name}` failed: {e}");
                summary.skipped.push(name.clone());
            }
        }
    }
    summary
}

// ---------------------------------------------------------------------------
// Shared write helpers
// ---------------------------------------------------------------------------

/// Write `content` to `path`, creating parent directories first.
pub(crate) fn write_target(path: &Path, content: &str) -> Result<(), EffectError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Prepend the partial file when it exists. A configured-but-missing partial
/// is treated as absent.
pub(crate) fn apply_partial(
    partial: Option<&Path>,
    rendered: String,
) -> Result<String, EffectError> {
    let Some(path) = partial else {
        return Ok(rendered);
    };
    match fs::read_to_string(path) {
        Ok(fragment) => Ok(format!("{fragment}\n{rendered}")),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(rendered),
        Err(e) => Err(EffectError::Io(e)),
    }
}

/// Render a template-backed effect: resolve the template (the `template`
/// option overrides `default_template`), prepend the partial, write.
pub(crate) fn render_into(
    ctx: &EffectContext,
    default_template: &str,
    default_partial: Option<PathBuf>,
    target: &Path,
) -> Result<(), EffectError> {
    let template = ctx.options.template.as_deref().unwrap_or(default_template);
    let rendered = ctx.templates.render(template, ctx.colors)?;
    let content = apply_partial(ctx.partial(default_partial).as_deref(), rendered)?;
    write_target(target, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{effect_fixture, sample_scheme, TestTempDir};
    use std::cell::Cell;

    struct Touch {
        ran: Cell<usize>,
    }

    impl Effect for Touch {
        fn name(&self) -> &'static str {
            "touch"
        }
        fn run(&self, _ctx: &EffectContext) -> Result<(), EffectError> {
            self.ran.set(self.ran.get() + 1);
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Effect for AlwaysFails {
        fn name(&self) -> &'static str {
            "always-fails"
        }
        fn run(&self, _ctx: &EffectContext) -> Result<(), EffectError> {
            Err(EffectError::MissingOption("target"))
        }
    }

    #[test]
    fn new_registry_is_empty() {
        assert!(EffectRegistry::new().is_empty());
    }

    #[test]
    fn builtin_registry_knows_every_default_module() {
        let registry = EffectRegistry::builtin();
        for name in crate::config::DEFAULT_MODULES {
            assert!(registry.find(name).is_some(), "missing effect `{name}`");
        }
        assert!(registry.find("template").is_some());
    }

    #[test]
    fn find_returns_registered_effect_by_name() {
        let mut registry = EffectRegistry::new();
        registry.register(Touch { ran: Cell::new(0) });
        assert!(registry.find("touch").is_some());
        assert!(registry.find("other").is_none());
        assert_eq!(registry.names(), vec!["touch"]);
    }

    #[test]
    fn unknown_module_does_not_abort_the_rest() {
        let fixture = TestTempDir::new("dispatch-unknown");
        let (theme, layout, templates, config) = effect_fixture(&fixture);
        let mut registry = EffectRegistry::new();
        registry.register(Touch { ran: Cell::new(0) });
        let modules = vec!["no-such".to_string(), "touch".to_string()];
        let summary = dispatch(&registry, &modules, &theme, &layout, &templates, &config);
        assert_eq!(summary.applied, vec!["touch"]);
        assert_eq!(summary.skipped, vec!["no-such"]);
    }

    #[test]
    fn failing_module_is_skipped_but_not_fatal() {
        let fixture = TestTempDir::new("dispatch-failing");
        let (theme, layout, templates, config) = effect_fixture(&fixture);
        let mut registry = EffectRegistry::new();
        registry.register(AlwaysFails);
        registry.register(Touch { ran: Cell::new(0) });
        let modules = vec!["always-fails".to_string(), "touch".to_string()];
        let summary = dispatch(&registry, &modules, &theme, &layout, &templates, &config);
        assert_eq!(summary.applied, vec!["touch"]);
        assert_eq!(summary.skipped, vec!["always-fails"]);
    }

    #[test]
    fn modules_run_in_configured_order() {
        let fixture = TestTempDir::new("dispatch-order");
        let (theme, layout, templates, config) = effect_fixture(&fixture);
        let registry = EffectRegistry::builtin();
        let modules = vec!["current-theme".to_string(), "shell".to_string()];
        let summary = dispatch(&registry, &modules, &theme, &layout, &templates, &config);
        assert_eq!(summary.applied, vec!["current-theme", "shell"]);
    }

    #[test]
    fn apply_partial_prepends_existing_fragment() {
        let fixture = TestTempDir::new("partial");
        let path = fixture.write_text("config.part", "keep me");
        let merged = apply_partial(Some(path.as_path()), "colors".to_string()).unwrap();
        assert_eq!(merged, "keep me\ncolors");
    }

    #[test]
    fn missing_partial_is_silently_absent() {
        let fixture = TestTempDir::new("partial-missing");
        let merged =
            apply_partial(Some(fixture.child("nope.part").as_path()), "colors".to_string())
                .unwrap();
        assert_eq!(merged, "colors");
    }

    #[test]
    fn write_target_creates_parent_directories() {
        let fixture = TestTempDir::new("write-target");
        let target = fixture.child("deep/nested/file");
        write_target(&target, "content").unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "content");
        // Second write is idempotent.
        write_target(&target, "content").unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "content");
    }

    #[test]
    fn target_override_takes_precedence_over_default() {
        let fixture = TestTempDir::new("target-override");
        let (theme, layout, templates, _config) = effect_fixture(&fixture);
        let scheme = sample_scheme();
        let colors = scheme.context();
        let options = ModuleOptions {
            target: Some(fixture.child("override").display().to_string()),
            ..ModuleOptions::default()
        };
        let ctx = EffectContext {
            scheme: &scheme,
            colors: &colors,
            theme: &theme,
            layout: &layout,
            templates: &templates,
            options: &options,
        };
        assert_eq!(ctx.target(fixture.child("default")), fixture.child("override"));
        let none = ModuleOptions::default();
        let ctx = EffectContext { options: &none, ..ctx };
        assert_eq!(ctx.target(fixture.child("default")), fixture.child("default"));
    }
}
