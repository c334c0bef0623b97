//! Vim color definitions.

use super::{render_into, Effect, EffectContext};
use crate::error::EffectError;
use crate::process;

/// Renders the `vim` template into `~/.vim_colors`. Running editors pick it
/// up on their next `source`; there is no reliable reload signal to send.
pub struct Vim;

impl Effect for Vim {
    fn name(&self) -> &'static str {
        "vim"
    }

    fn run(&self, ctx: &EffectContext) -> Result<(), EffectError> {
        let target = ctx.target(ctx.layout.home.join(".vim_colors"));
        render_into(ctx, "vim", None, &target)?;
        process::run_with_override(ctx.options.command.as_deref(), || {});
        Ok(())
    }
}
