//! Gatekeeper engine: effect execution, timers and configuration, independent of the browser.
mod config;
mod export;
mod headless;
mod host;
mod runtime;
mod timers;

pub use config::{ConfigError, PageConfig};
pub use export::{build_csv_export, rows_to_csv, ExportFile, CSV_MIME_TYPE, EXPORT_FILENAME};
pub use headless::{HeadlessPage, RecordingHost};
pub use host::{run_effects, Host, HostError};
pub use runtime::{Dispatch, PageRuntime};
pub use timers::TimerQueue;
