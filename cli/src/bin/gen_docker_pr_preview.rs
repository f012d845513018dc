use clap::Parser;
use release_tools_cli::docker_preview;
use release_tools_cli::logging;

fn main() -> anyhow::Result<()> {
    let cli = docker_preview::Cli::parse();
    logging::init(cli.verbosity)?;
    docker_preview::run(&mut std::io::stdin().lock(), &mut std::io::stdout().lock())
}
