//! Dunst notification daemon colors.

use super::{render_into, Effect, EffectContext};
use crate::error::EffectError;
use crate::process;

/// Rebuilds the dunstrc from the user partial plus the rendered `dunst`
/// template. Dunst picks the file up on restart; no reload signal.
pub struct Dunst;

impl Effect for Dunst {
    fn name(&self) -> &'static str {
        "dunst"
    }

    fn run(&self, ctx: &EffectContext) -> Result<(), EffectError> {
        let dunst_dir = ctx.layout.config_home.join("dunst");
        let target = ctx.target(dunst_dir.join("dunstrc"));
        let partial = Some(dunst_dir.join("dunstrc.part"));
        render_into(ctx, "dunst", partial, &target)?;
        process::run_with_override(ctx.options.command.as_deref(), || {});
        Ok(())
    }
}
