use tracing::level_filters::LevelFilter;

use crate::args::Verbosity;

/// Installs the global `tracing` subscriber.
///
/// Logs go to stderr: stdout is reserved for the text a pipeline step
/// consumes.
pub fn init(verbosity: Verbosity) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))
}

fn level_filter(verbosity: Verbosity) -> LevelFilter {
    match verbosity.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
