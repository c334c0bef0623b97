//! tinct — apply a base16 color scheme to a desktop environment.
//!
//! The library core normalizes a 16-slot color document into a canonical
//! key/value mapping, renders mustache templates against it, and dispatches
//! a configured list of effects. Each effect writes one themed artifact
//! (shell exports, terminal config, editor theme, X resources, ...) and
//! optionally fires a reload command.
//!
//! # Quick start
//!
//! ```no_run
//! use tinct::config::Config;
//! use tinct::effects::{dispatch, EffectRegistry};
//! use tinct::layout::Layout;
//! use tinct::template::TemplateStore;
//!
//! let layout = Layout::discover().expect("home directory");
//! let theme = tinct::theme::load("./my-theme", None).unwrap();
//! let templates = TemplateStore::new(&layout);
//! let registry = EffectRegistry::builtin();
//! let modules = vec!["xresources".to_string(), "shell".to_string()];
//! let summary = dispatch(&registry, &modules, &theme, &layout, &templates, &Config::default());
//! println!("applied {} modules", summary.applied.len());
//! ```

pub mod build_info;
pub mod config;
pub mod effects;
pub mod error;
pub mod layout;
pub mod process;
pub mod scheme;
pub mod template;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
