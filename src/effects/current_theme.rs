//! Current-theme marker.

use super::{write_target, Effect, EffectContext};
use crate::error::EffectError;
use tracing::debug;

/// Records the applied theme's source path so other tooling (and the next
/// shell login) can find it.
pub struct CurrentTheme;

impl Effect for CurrentTheme {
    fn name(&self) -> &'static str {
        "current-theme"
    }

    fn run(&self, ctx: &EffectContext) -> Result<(), EffectError> {
        let target = ctx.target(ctx.layout.data_dir().join("current_theme"));
        debug!("writing current theme to {}", target.display());
        write_target(&target, &ctx.theme.origin)
    }
}
