mod cli;

use color_eyre::Report;
use structopt::StructOpt;

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    cli::Cli::from_args().exec()
}
