use std::path::PathBuf;

use clap::ArgAction;
use clap::Args;
use release_tools_manifest::DEFAULT_MANIFEST_PATH;

/// Where to find the Cargo manifest.
#[derive(Debug, Clone, Args)]
pub struct ManifestArgs {
    /// Path to the manifest, relative to the working directory.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MANIFEST_PATH)]
    pub manifest_path: PathBuf,
}

/// Log verbosity shared by every binary.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct Verbosity {
    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
