//! Emacs theme file.

use super::{render_into, Effect, EffectContext};
use crate::error::EffectError;
use crate::process;

/// Renders the `emacs` template into the private themes directory, named
/// after the scheme slug so distinct schemes do not clobber each other.
pub struct Emacs;

impl Effect for Emacs {
    fn name(&self) -> &'static str {
        "emacs"
    }

    fn run(&self, ctx: &EffectContext) -> Result<(), EffectError> {
        let file_name = format!("base16-{}-theme.el", ctx.scheme.slug);
        let target = ctx.target(
            ctx.layout
                .home
                .join(".emacs.d")
                .join("private")
                .join("themes")
                .join(file_name),
        );
        render_into(ctx, "emacs", None, &target)?;
        process::run_with_override(ctx.options.command.as_deref(), || {});
        Ok(())
    }
}
