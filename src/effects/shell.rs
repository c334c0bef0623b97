//! Shell color exports.
//!
//! No template here: the export block is fixed, only the colors vary.

use super::{write_target, Effect, EffectContext};
use crate::error::EffectError;
use crate::process;
use crate::scheme::Scheme;
use std::fmt::Write as _;

/// Writes an `export COLORS_*` block for shell startup files.
pub struct ShellExports;

impl Effect for ShellExports {
    fn name(&self) -> &'static str {
        "shell"
    }

    fn run(&self, ctx: &EffectContext) -> Result<(), EffectError> {
        let target = ctx.target(ctx.layout.home.join(".bash_colors"));
        write_target(&target, &render_exports(ctx.scheme))?;
        process::run_with_override(ctx.options.command.as_deref(), || {});
        Ok(())
    }
}

/// Semantic exports (foreground base05, background base00, cursor base06)
/// plus one numbered export per palette slot.
fn render_exports(scheme: &Scheme) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "export COLORS_foreground=\"#{}\"", scheme.base(5).hex());
    let _ = writeln!(out, "export COLORS_background=\"#{}\"", scheme.base(0).hex());
    let _ = writeln!(out, "export COLORS_cursorColor=\"#{}\"", scheme.base(6).hex());
    for (index, rgb) in scheme.bases().iter().enumerate() {
        let _ = writeln!(out, "export COLORS_color{index}=\"#{}\"", rgb.hex());
    }
    out
}
