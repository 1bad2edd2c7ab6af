//! CLI entry point for evaluating discrete distribution probabilities

use clap::Parser;
use pmodels::io::cli::Cli;
use pmodels::io::logging::init_log;

fn main() -> pmodels::Result<()> {
    let cli = Cli::parse();
    init_log(cli.log_level())?;

    let mut stdout = std::io::stdout().lock();
    cli.execute(&mut stdout)?;
    Ok(())
}
