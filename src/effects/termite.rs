//! Termite terminal colors.

use super::{render_into, Effect, EffectContext};
use crate::error::EffectError;
use crate::process;

/// Rebuilds the termite config from the user partial plus the rendered
/// `termite` template, then signals running instances to reload.
pub struct Termite;

impl Effect for Termite {
    fn name(&self) -> &'static str {
        "termite"
    }

    fn run(&self, ctx: &EffectContext) -> Result<(), EffectError> {
        let termite_dir = ctx.layout.config_home.join("termite");
        let target = ctx.target(termite_dir.join("config"));
        let partial = Some(termite_dir.join("config.part"));
        render_into(ctx, "termite", partial, &target)?;
        process::run_with_override(ctx.options.command.as_deref(), || {
            process::run("killall", &["-USR1", "termite"]);
        });
        Ok(())
    }
}
