//! X resource database colors.

use super::{render_into, Effect, EffectContext};
use crate::error::EffectError;
use crate::process;

/// Renders the `xresources` template into `~/.Xresources.d/colors` and
/// reloads the X resource database.
pub struct Xresources;

impl Effect for Xresources {
    fn name(&self) -> &'static str {
        "xresources"
    }

    fn run(&self, ctx: &EffectContext) -> Result<(), EffectError> {
        let target = ctx.target(ctx.layout.home.join(".Xresources.d").join("colors"));
        render_into(ctx, "xresources", None, &target)?;
        let xresources = ctx.layout.home.join(".Xresources");
        process::run_with_override(ctx.options.command.as_deref(), || {
            process::run("xrdb", &[xresources.display().to_string()]);
        });
        Ok(())
    }
}
