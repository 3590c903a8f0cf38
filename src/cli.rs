pub use clap::Parser;

use clap::ValueEnum;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Shuffle once with this seed and print the complete deck instead of running the demonstration
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// How many cards from the top of the deck to show after each demonstration shuffle
    #[arg(short = 't', long = "top", default_value_t = 8)]
    pub top_cards: usize,

    /// Number of shuffles with fresh seeds in the demonstration
    #[arg(short = 'n', long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=20))]
    pub shuffles: u8,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human readable listing
    Text,
    /// One JSON document per shuffle, each on its own line
    Json,
}
