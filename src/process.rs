//! External command invocation.
//!
//! Reload hooks are fire-and-forget: commands run synchronously, the exit
//! status is logged but never checked, and a spawn failure degrades to a
//! warning instead of failing the effect.

use std::process::Command;
use tracing::{debug, warn};

/// Run `program` with `args`, waiting for completion.
pub fn run<S: AsRef<str>>(program: &str, args: &[S]) {
    let rendered: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    debug!("> {} {}", program, rendered.join(" "));
    match Command::new(program).args(&rendered).status() {
        Ok(status) => debug!("{program} exited with {status}"),
        Err(e) => warn!("failed to run {program}: {e}"),
    }
}

/// Split a configured command line and run it. Empty lines are ignored.
pub fn run_line(line: &str) {
    if let Some(words) = split_line(line) {
        run(&words[0], &words[1..]);
    }
}

/// Like [`run_line`], with extra arguments appended after splitting.
pub fn run_line_with(line: &str, extra: &[String]) {
    if let Some(mut words) = split_line(line) {
        words.extend(extra.iter().cloned());
        run(&words[0], &words[1..]);
    }
}

/// Run the configured override when present, otherwise the default action.
/// An empty override disables the command entirely.
pub fn run_with_override(override_line: Option<&str>, default: impl FnOnce()) {
    match override_line {
        Some(line) if line.trim().is_empty() => debug!("reload command disabled by config"),
        Some(line) => run_line(line),
        None => default(),
    }
}

fn split_line(line: &str) -> Option<Vec<String>> {
    match shell_words::split(line) {
        Ok(words) if words.is_empty() => None,
        Ok(words) => Some(words),
        Err(e) => {
            warn!("unparsable command line `{line}`: {e}");
            None
        }
    }
}
