//! Verbosity to tracing subscriber mapping.
//!
//! Log lines go to standard output so they appear in front of the summary
//! line, never after it.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Crates whose events are shown at `-v` and `-vv`.
const OWN_CRATES: &[&str] = &["zonesync", "zonesync_core", "zonesync_dns", "zonesync_cli"];

/// Level for a `-v` count; `None` keeps logging off.
#[must_use]
pub const fn level_for(verbosity: u8) -> Option<Level> {
    match verbosity {
        0 => None,
        1 => Some(Level::INFO),
        2 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

/// Filter directives for a `-v` count.
///
/// Up to `-vv` only this workspace logs; `-vvv` opens up resolver internals.
#[must_use]
pub fn directives(verbosity: u8) -> Option<String> {
    let level = level_for(verbosity)?;
    let level = level.as_str().to_lowercase();

    if verbosity >= 3 {
        return Some(level);
    }

    let mut directives = vec!["warn".to_string()];
    directives.extend(OWN_CRATES.iter().map(|krate| format!("{krate}={level}")));
    Some(directives.join(","))
}

/// Install the global subscriber for this run.
pub fn init(verbosity: u8) {
    let Some(directives) = directives(verbosity) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directives))
        .with_writer(std::io::stdout)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}
