//! Command implementations behind the release CI binaries.
//!
//! Each binary in `src/bin/` parses its own [`clap`] arguments, installs the
//! stderr log subscriber from [`logging`] and hands off to the matching
//! `run` function here. The `run` functions take their output streams as
//! parameters so tests can capture what a pipeline step would see.

pub mod args;
pub mod check_version;
pub mod docker_preview;
pub mod logging;
pub mod update_version;
