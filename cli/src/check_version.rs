//! `check-cargo-version`: tells a pipeline whether the manifest still needs a
//! version bump.
//!
//! Prints `true` on stdout when the recorded `package.version` differs from
//! the computed version and `false` when they match. A pipeline step branches
//! on that literal; the exit status only signals whether the manifest could
//! be read.

use std::io::Write;

use clap::Parser;
use release_tools_manifest::Manifest;
use release_tools_manifest::VersionStatus;

use crate::args::ManifestArgs;
use crate::args::Verbosity;

#[derive(Debug, Parser)]
#[command(
    name = "check-cargo-version",
    version,
    about = "Report whether Cargo.toml needs its package.version updated"
)]
pub struct Cli {
    /// Version computed by the pipeline.
    pub new_version: String,

    #[command(flatten)]
    pub manifest: ManifestArgs,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

pub fn run(cli: &Cli, stdout: &mut impl Write, stderr: &mut impl Write) -> anyhow::Result<()> {
    let manifest = Manifest::open(&cli.manifest.manifest_path)?;
    let status = manifest.compare_version(&cli.new_version)?;
    let path = manifest.path().display();
    let new_version = &cli.new_version;

    match &status {
        VersionStatus::Differs { recorded } => {
            tracing::info!(
                "recorded version {} differs from {new_version}",
                recorded.as_deref().unwrap_or("<not a string>")
            );
            writeln!(
                stderr,
                "Version in {path} ('package'.'version') does not match computed version ({new_version})."
            )?;
        }
        VersionStatus::Matches => {
            writeln!(
                stderr,
                "Version in {path} matches computed version: {new_version}"
            )?;
        }
    }
    writeln!(stdout, "{}", status.needs_update())?;
    Ok(())
}
