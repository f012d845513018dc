use clap::Parser;
use release_tools_cli::logging;
use release_tools_cli::update_version;

fn main() -> anyhow::Result<()> {
    let cli = update_version::Cli::parse();
    logging::init(cli.verbosity)?;
    update_version::run(&cli)
}
