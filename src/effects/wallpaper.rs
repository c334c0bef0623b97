//! Theme wallpaper.

use super::{Effect, EffectContext};
use crate::error::EffectError;
use crate::process;
use tracing::debug;

/// Sets the wallpaper shipped with the theme, when there is one. The setter
/// command receives the image path as its final argument.
pub struct Wallpaper;

impl Effect for Wallpaper {
    fn name(&self) -> &'static str {
        "wallpaper"
    }

    fn run(&self, ctx: &EffectContext) -> Result<(), EffectError> {
        let Some(path) = ctx.theme.wallpaper() else {
            debug!("no wallpaper in {}", ctx.theme.dir.display());
            return Ok(());
        };
        let path_arg = path.display().to_string();
        match ctx.options.command.as_deref() {
            Some(line) if line.trim().is_empty() => debug!("wallpaper command disabled by config"),
            Some(line) => process::run_line_with(line, &[path_arg]),
            None => process::run("feh", &["--bg-fill".to_string(), path_arg]),
        }
        Ok(())
    }
}
