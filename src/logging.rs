//! Logger setup
//!
//! The terminal client draws over stdout, so it logs to a file. The
//! dictionary server logs to stderr. `RUST_LOG` picks the level; the
//! default is `info`.

use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

const DEFAULT_FILTER: &str = "info";

/// Log to `path`, appending. Creates the parent directory if needed.
pub fn init_file(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(io::Error::other)
}

/// Log to stderr
pub fn init_stderr() {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stderr)
        .init();
}

/// Disable logging entirely (no writable location)
pub fn disable() {
    log::set_max_level(log::LevelFilter::Off);
}
