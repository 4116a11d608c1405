//! Browser logging initialization for gatekeeper_web.
//!
//! Log lines go to the developer console, tagged with the dispatch sequence.

use log::LevelFilter;

pub fn initialize() {
    // Debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    page_logging::initialize_console(level);
}
