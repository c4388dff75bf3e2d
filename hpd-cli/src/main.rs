//! HPD CLI - Command line tool for production dashboard filters and figures.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "hpd-cli",
    version,
    about = "Hydrocarbon production dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: hpd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("dispatching command");
    hpd_cmd::run(cli.command)
}
