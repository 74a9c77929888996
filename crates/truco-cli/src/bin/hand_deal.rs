use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use truco_cli::format_report;
use truco_engine::deal::{deal_reactive_snapshot, deal_snapshot};

#[derive(Parser, Debug)]
#[command(author, version, about = "Deal random snapshots and print the bot's decisions")]
struct Args {
    /// Number of snapshots to deal
    #[arg(short, long, default_value_t = 1)]
    count: u32,

    /// Deal snapshots where the opponent has already led a card
    #[arg(short, long)]
    reactive: bool,

    /// Seed for reproducible deals
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for i in 0..args.count {
        let intel = if args.reactive {
            deal_reactive_snapshot(&mut rng)
        } else {
            deal_snapshot(&mut rng)
        };
        let summary = truco_engine::summarize(&intel);
        if i > 0 {
            println!();
        }
        println!("=== Deal {} ===", i + 1);
        print!("{}", format_report(&intel, &summary));
    }
}
