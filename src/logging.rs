//! Tracing setup. The terminal belongs to the dashboard, so log lines go to
//! a file or nowhere.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when none is configured.
pub const DEFAULT_FILTER: &str = "info";

/// Appends log lines to `path`, filtered by `filter` (`EnvFilter` syntax).
///
/// Without a path nothing is installed and every event is dropped.
pub fn init(path: Option<&Path>, filter: &str) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    let filter_layer =
        EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed, e.g. by a test harness.
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
    Ok(())
}
