use color_eyre::Report;
use open_mic_lottery::lottery::{self, Name, Seed, TicketsDistribution};
use open_mic_lottery::signups::load_signups;
use open_mic_lottery::utils::csv::dump_data_to_csv;
use serde::Serialize;
use std::path::{Path, PathBuf};
use structopt::StructOpt;
use tracing::info;

const REPORT_RULE: &str = "----------------------------------------";

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct Lineup {
    /// Signup sheet csv file path
    signups: PathBuf,

    /// Number of comedians to draw
    #[structopt(long, short, default_value = "4")]
    winners: usize,

    /// Hex encoded 32 bytes seed, to replay a previous draw
    #[structopt(long, parse(try_from_str = parse_seed))]
    seed: Option<Seed>,

    /// Also write the lineup to this csv file
    #[structopt(long, short)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct LineupRecord<'a> {
    #[serde(rename = "Order")]
    order: usize,
    #[serde(rename = "Full name")]
    full_name: &'a str,
}

fn parse_seed(src: &str) -> Result<Seed, hex::FromHexError> {
    let mut seed = Seed::default();
    hex::decode_to_slice(src, &mut seed)?;
    Ok(seed)
}

fn print_tickets_report(distribution: &TicketsDistribution) {
    println!("\nTicket counts for eligible comedians:");
    println!("{}", REPORT_RULE);
    for (name, tickets) in distribution.iter() {
        println!("{}: {} ticket(s)", name, tickets);
    }
    println!("{}", REPORT_RULE);
}

fn print_lineup(winners: &[Name]) {
    println!("\nSelected comedians:");
    for (order, winner) in winners.iter().enumerate() {
        println!("{}. {}", order + 1, winner);
    }
}

fn write_lineup(winners: &[Name], to: &Path) -> Result<(), Report> {
    let records: Vec<LineupRecord> = winners
        .iter()
        .enumerate()
        .map(|(order, full_name)| LineupRecord {
            order: order + 1,
            full_name,
        })
        .collect();
    dump_data_to_csv(&records, to)?;
    Ok(())
}

impl Lineup {
    pub fn exec(self) -> Result<(), Report> {
        let Self {
            signups,
            winners,
            seed,
            output,
        } = self;

        let signups = load_signups(&signups)?;
        let eligible = lottery::eligible_signups(&signups)?;
        let distribution = lottery::tickets_distribution(eligible);
        print_tickets_report(&distribution);

        let seed = seed.unwrap_or_else(lottery::random_seed);
        info!(seed = %hex::encode(seed), winners, "drawing lineup");
        let lineup = lottery::draw_winners(&distribution, winners, &mut lottery::seeded_rng(seed))?;
        print_lineup(&lineup);

        if let Some(output) = output {
            write_lineup(&lineup, &output)?;
        }
        Ok(())
    }
}
