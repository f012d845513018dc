use clap::Parser;
use release_tools_cli::check_version;
use release_tools_cli::logging;

fn main() -> anyhow::Result<()> {
    let cli = check_version::Cli::parse();
    logging::init(cli.verbosity)?;
    check_version::run(
        &cli,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}
