mod lineup;

use color_eyre::Report;
use structopt::StructOpt;
use tracing::Level;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct Cli {
    /// Verbosity of the diagnostics written to stderr
    #[structopt(long, default_value = "warn")]
    log_level: Level,

    #[structopt(flatten)]
    lineup: lineup::Lineup,
}

impl Cli {
    pub fn exec(self) -> Result<(), Report> {
        tracing_subscriber::fmt()
            .with_max_level(self.log_level)
            .with_writer(std::io::stderr)
            .init();
        self.lineup.exec()
    }
}
