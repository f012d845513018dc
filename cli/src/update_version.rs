//! `update-cargo-version`: rewrites `package.version` in place.

use clap::Parser;
use release_tools_manifest::Manifest;

use crate::args::ManifestArgs;
use crate::args::Verbosity;

#[derive(Debug, Parser)]
#[command(
    name = "update-cargo-version",
    version,
    about = "Set package.version in Cargo.toml, keeping the rest of the file intact"
)]
pub struct Cli {
    /// Version to record in the manifest.
    pub new_version: String,

    #[command(flatten)]
    pub manifest: ManifestArgs,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut manifest = Manifest::open(&cli.manifest.manifest_path)?;
    manifest.set_package_version(&cli.new_version)?;
    manifest.write()?;
    tracing::info!(
        "set package.version to {} in {}",
        cli.new_version,
        manifest.path().display()
    );
    Ok(())
}
