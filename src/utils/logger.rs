//! Logger setup.
//!
//! The browser build logs to the devtools console through `console_log`;
//! native builds (tests and the manifest tool) use `env_logger`, so
//! `RUST_LOG` can still override the level there.

use log::LevelFilter;

/// Install the logger for the current target. Later calls only adjust the
/// level.
pub fn init(level: LevelFilter) {
    #[cfg(target_arch = "wasm32")]
    if let Some(max) = level.to_level() {
        let _ = console_log::init_with_level(max);
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();

    log::set_max_level(level);
}
