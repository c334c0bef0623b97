//! Status-bar color entries.
//!
//! The bar reads a JSON config of its own; only the `fg`/`bg` entries belong
//! to the color scheme, so the file is merged in place rather than
//! overwritten. An existing file that is not a JSON object is rewritten.

use super::{write_target, Effect, EffectContext};
use crate::error::EffectError;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Merges scheme foreground/background into the bar's JSON config.
pub struct StatusBar;

impl Effect for StatusBar {
    fn name(&self) -> &'static str {
        "bar"
    }

    fn run(&self, ctx: &EffectContext) -> Result<(), EffectError> {
        let target = ctx.target(ctx.layout.config_home.join("rxbarrc"));
        let mut doc = read_status(&target);
        doc.insert("fg".into(), json!([format!("#{}", ctx.scheme.base(5).hex_upper())]));
        doc.insert("bg".into(), json!([format!("#{}", ctx.scheme.base(0).hex_upper())]));
        let text = serde_json::to_string(&Value::Object(doc))?;
        write_target(&target, &text)
    }
}

fn read_status(path: &Path) -> Map<String, Value> {
    let Ok(text) = fs::read_to_string(path) else {
        return Map::new();
    };
    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => map,
        _ => {
            warn!("existing {} is not a JSON object; rewriting", path.display());
            Map::new()
        }
    }
}
