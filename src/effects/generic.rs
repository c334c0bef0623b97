//! Config-driven template module.
//!
//! Any configured module whose options name a `template` dispatches here:
//! render that template, prepend the optional partial, write to the
//! required `target`, then run the optional command. This lets one config
//! drive integrations that have no built-in effect.

use super::{render_into, Effect, EffectContext};
use crate::error::EffectError;
use crate::process;
use std::path::PathBuf;

/// Renders an arbitrary configured template to a configured target.
pub struct Template;

impl Effect for Template {
    fn name(&self) -> &'static str {
        "template"
    }

    fn run(&self, ctx: &EffectContext) -> Result<(), EffectError> {
        let template = ctx
            .options
            .template
            .as_deref()
            .ok_or(EffectError::MissingOption("template"))?;
        let target_raw = ctx
            .options
            .target
            .as_deref()
            .ok_or(EffectError::MissingOption("target"))?;
        let target = PathBuf::from(shellexpand::tilde(target_raw).into_owned());
        render_into(ctx, template, None, &target)?;
        process::run_with_override(ctx.options.command.as_deref(), || {});
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModuleOptions;
    use crate::testsupport::{sample_effect_context, TestTempDir};

    #[test]
    fn renders_configured_template_to_configured_target() {
        let fixture = TestTempDir::new("generic");
        fixture.write_text(
            ".config/tinct/templates/alacritty.mustache",
            "background: \"0x{{base00-hex}}\"\n",
        );
        let options = ModuleOptions {
            template: Some("alacritty".into()),
            target: Some(fixture.child("alacritty.yml").display().to_string()),
            command: Some(String::new()),
            ..ModuleOptions::default()
        };
        let harness = sample_effect_context(&fixture, options);
        Template.run(&harness.ctx()).unwrap();
        let written = std::fs::read_to_string(fixture.child("alacritty.yml")).unwrap();
        assert_eq!(written, "background: \"0x000000\"\n");
    }

    #[test]
    fn missing_required_options_are_reported() {
        let fixture = TestTempDir::new("generic-missing");
        let harness = sample_effect_context(&fixture, ModuleOptions::default());
        let err = Template.run(&harness.ctx()).unwrap_err();
        assert!(matches!(err, EffectError::MissingOption("template")), "got {err:?}");

        let options = ModuleOptions {
            template: Some("alacritty".into()),
            ..ModuleOptions::default()
        };
        let harness = sample_effect_context(&fixture, options);
        let err = Template.run(&harness.ctx()).unwrap_err();
        assert!(matches!(err, EffectError::MissingOption("target")), "got {err:?}");
    }
}
