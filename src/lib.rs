use std::io::Write;

use anyhow::Result;

use cli::{Cli, Format};
use display::{JsonTranscript, SameSeedAttempt, TextTranscript, Transcript};
use seed::SeedSource;
use shuffler::Shuffler;

pub mod cli;
pub mod deck;
pub mod display;
pub mod seed;
pub mod shuffler;
#[cfg(test)]
mod test_helpers;

const ORIGINAL_ORDER_TOP_CARDS: usize = 10;
const REPRODUCIBLE_SEED: u64 = 12345;
const DIFFERENT_SEEDS: [u64; 3] = [1000, 2000, 3000];
const DIFFERENT_SEEDS_TOP_CARDS: usize = 5;

/// Shuffles the standard deck and writes the results to `out`. Runs the seed demonstration unless `cli` carries a
/// seed, in which case a single seeded shuffle of the complete deck is printed.
pub fn run(cli: &Cli, seed_source: impl SeedSource, out: &mut impl Write) -> Result<()> {
    let mut shuffler = Shuffler::new(deck::standard_deck(), seed_source);
    match cli.format {
        Format::Text => session(&mut shuffler, cli, &mut TextTranscript::new(out)),
        Format::Json => session(&mut shuffler, cli, &mut JsonTranscript::new(out)),
    }
}

fn session<S: SeedSource>(
    shuffler: &mut Shuffler<String, S>,
    cli: &Cli,
    transcript: &mut impl Transcript,
) -> Result<()> {
    match cli.seed {
        Some(seed) => {
            shuffler.shuffle_with_seed(seed);
            transcript.full_deck(seed, shuffler.all())
        }
        None => demonstrate(shuffler, cli, transcript),
    }
}

fn demonstrate<S: SeedSource>(
    shuffler: &mut Shuffler<String, S>,
    cli: &Cli,
    transcript: &mut impl Transcript,
) -> Result<()> {
    log::debug!("Showing original order");
    transcript.original_order(shuffler.prefix(ORIGINAL_ORDER_TOP_CARDS))?;

    log::debug!("Shuffling {} times with fresh seeds", cli.shuffles);
    transcript.fresh_shuffles_heading()?;
    for number in 1..=cli.shuffles {
        let seed = shuffler.shuffle_with_fresh_seed();
        transcript.fresh_shuffle(number, seed, cli.top_cards, shuffler.prefix(cli.top_cards))?;
    }

    log::debug!("Shuffling twice with seed {REPRODUCIBLE_SEED}");
    transcript.same_seed_heading()?;
    let mut reproduced = Vec::with_capacity(2);
    for attempt in [SameSeedAttempt::First, SameSeedAttempt::Second] {
        shuffler.shuffle_with_seed(REPRODUCIBLE_SEED);
        let top = shuffler.prefix(cli.top_cards);
        transcript.same_seed_shuffle(attempt, REPRODUCIBLE_SEED, cli.top_cards, top)?;
        reproduced.push(top.to_vec());
    }
    if reproduced[0] == reproduced[1] {
        transcript.same_seed_identical()?;
    }

    log::debug!("Shuffling with seeds {DIFFERENT_SEEDS:?}");
    transcript.different_seeds_heading()?;
    for seed in DIFFERENT_SEEDS {
        shuffler.shuffle_with_seed(seed);
        transcript.different_seed(seed, shuffler.prefix(DIFFERENT_SEEDS_TOP_CARDS))?;
    }

    Ok(())
}
