use clap::Parser;
use std::path::PathBuf;
use truco_cli::{format_report, load_snapshot};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the bot's four decisions for a snapshot file")]
struct Args {
    /// Path to a snapshot file (.json, .yaml or .yml)
    snapshot: PathBuf,

    /// Emit the decisions as JSON instead of a text report
    #[arg(short, long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let intel = match load_snapshot(&args.snapshot) {
        Ok(intel) => intel,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let summary = truco_engine::summarize(&intel);
    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("failed to serialize decisions: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", format_report(&intel, &summary));
    }
}
