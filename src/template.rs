//! Mustache template resolution and rendering.
//!
//! Templates are plain `<name>.mustache` files holding base16 context keys
//! (`{{base00-hex}}`, `{{scheme-name}}`, ...). Resolution checks the user
//! template directory first so a user copy shadows the system-wide one.

use crate::error::TemplateError;
use crate::layout::Layout;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Ordered template search path.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    search: Vec<PathBuf>,
}

impl TemplateStore {
    pub fn new(layout: &Layout) -> Self {
        Self {
            search: vec![layout.user_template_dir(), layout.system_template_dir()],
        }
    }

    /// Store with an explicit search path, earliest directory preferred.
    pub fn with_search_path(search: Vec<PathBuf>) -> Self {
        Self { search }
    }

    pub fn search_path(&self) -> &[PathBuf] {
        &self.search
    }

    /// Resolve `<name>.mustache` against the search path.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, TemplateError> {
        for dir in &self.search {
            let candidate = dir.join(format!("{name}.mustache"));
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
        Err(TemplateError::NotFound {
            name: name.to_string(),
            searched: self.search.clone(),
        })
    }

    /// Render the named template against the scheme context.
    pub fn render(
        &self,
        name: &str,
        context: &BTreeMap<String, String>,
    ) -> Result<String, TemplateError> {
        let path = self.resolve(name)?;
        let source = fs::read_to_string(path)?;
        let template = mustache::compile_str(&source)?;
        Ok(template.render_to_string(context)?)
    }
}
