//! Rofi launcher colors (X resources based).

use super::{render_into, Effect, EffectContext};
use crate::error::EffectError;
use crate::process;

/// Renders the `rofi` template next to the X resource colors and reloads
/// the resource database so rofi picks the palette up.
pub struct Rofi;

impl Effect for Rofi {
    fn name(&self) -> &'static str {
        "rofi"
    }

    fn run(&self, ctx: &EffectContext) -> Result<(), EffectError> {
        let target = ctx.target(ctx.layout.home.join(".Xresources.d").join("rofi_colors"));
        render_into(ctx, "rofi", None, &target)?;
        let xresources = ctx.layout.home.join(".Xresources");
        process::run_with_override(ctx.options.command.as_deref(), || {
            process::run("xrdb", &[xresources.display().to_string()]);
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{quiet_options, sample_effect_context, TestTempDir};

    #[test]
    fn writes_rofi_colors_beside_xresources_colors() {
        let fixture = TestTempDir::new("rofi");
        fixture.write_text(
            ".config/tinct/templates/rofi.mustache",
            "rofi.color-window: #{{base00-hex}}\n",
        );
        let harness = sample_effect_context(&fixture, quiet_options());
        Rofi.run(&harness.ctx()).unwrap();
        let written =
            std::fs::read_to_string(fixture.child(".Xresources.d/rofi_colors")).unwrap();
        assert_eq!(written, "rofi.color-window: #000000\n");
    }
}
