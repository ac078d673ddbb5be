//! Tracing initialization.
//!
//! Off unless `FGL_LOG` is set, e.g. `FGL_LOG=fgl_parse=debug`. Output is
//! an indented span tree on stderr.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "FGL_LOG";

/// Install the global subscriber. Call once, before any command runs.
pub fn init() {
    let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
        return;
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true),
        )
        .init();
}
