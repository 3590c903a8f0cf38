//! Renders shuffle results as text listings or JSON lines

use std::{fmt::Display, io::Write};

use anyhow::Result;
use serde::Serialize;

const CARDS_PER_ROW: usize = 4;

/// Single shuffle outcome as emitted in JSON output
#[derive(Debug, Serialize)]
pub struct ShuffleReport<'a, T> {
    /// Absent for the unshuffled, original order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub cards: &'a [T],
}

impl<'a, T: Serialize> ShuffleReport<'a, T> {
    pub fn new(seed: Option<u64>, cards: &'a [T]) -> Self {
        ShuffleReport { seed, cards }
    }

    pub fn write_json_line(&self, out: &mut impl Write) -> Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Numbered list, one card per line, followed by an empty line
pub fn write_top_cards<T: Display>(
    out: &mut impl Write,
    requested: usize,
    cards: &[T],
) -> Result<()> {
    writeln!(out, "Top {requested} cards:")?;
    for (position, card) in cards.iter().enumerate() {
        writeln!(out, "{}. {card}", position + 1)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Numbered grid with four cards per row
pub fn write_full_deck<T: Display>(out: &mut impl Write, cards: &[T]) -> Result<()> {
    writeln!(out, "Complete deck configuration:")?;
    for (index, card) in cards.iter().enumerate() {
        /* Pad via to_string so width applies to types that ignore formatter flags */
        write!(out, "{:>2}. {:<15}", index + 1, card.to_string())?;
        if (index + 1) % CARDS_PER_ROW == 0 {
            writeln!(out)?;
        }
    }
    writeln!(out, "\n")?;
    Ok(())
}

pub fn write_seed_line<T: Display>(out: &mut impl Write, seed: u64, cards: &[T]) -> Result<()> {
    let joined = cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(out, "Seed {seed} - Top {}: {joined}\n", cards.len())?;
    Ok(())
}

/// Which of the two shuffles with the same seed is being reported
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SameSeedAttempt {
    First,
    Second,
}

/// Receives each step of a shuffle session and writes it out in one output format. Headings and notices write
/// nothing unless overridden.
pub trait Transcript {
    fn original_order(&mut self, cards: &[String]) -> Result<()>;

    fn fresh_shuffles_heading(&mut self) -> Result<()> {
        Ok(())
    }

    fn fresh_shuffle(
        &mut self,
        number: u8,
        seed: u64,
        requested: usize,
        cards: &[String],
    ) -> Result<()>;

    fn same_seed_heading(&mut self) -> Result<()> {
        Ok(())
    }

    fn same_seed_shuffle(
        &mut self,
        attempt: SameSeedAttempt,
        seed: u64,
        requested: usize,
        cards: &[String],
    ) -> Result<()>;

    fn same_seed_identical(&mut self) -> Result<()> {
        Ok(())
    }

    fn different_seeds_heading(&mut self) -> Result<()> {
        Ok(())
    }

    fn different_seed(&mut self, seed: u64, cards: &[String]) -> Result<()>;

    fn full_deck(&mut self, seed: u64, cards: &[String]) -> Result<()>;
}

/// Human readable listing
pub struct TextTranscript<'a, W> {
    out: &'a mut W,
}

impl<'a, W: Write> TextTranscript<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        TextTranscript { out }
    }

    fn seeded(&mut self, seed: u64) -> Result<()> {
        writeln!(self.out, "Shuffling with specific seed: {seed}")?;
        Ok(())
    }
}

impl<W: Write> Transcript for TextTranscript<'_, W> {
    fn original_order(&mut self, cards: &[String]) -> Result<()> {
        writeln!(
            self.out,
            "Random Seed Demonstration using Fisher-Yates Shuffle using one deck of cards\n"
        )?;
        writeln!(self.out, "Original deck order:")?;
        write_top_cards(self.out, cards.len(), cards)
    }

    fn fresh_shuffles_heading(&mut self) -> Result<()> {
        writeln!(self.out, "--- Multiple Shuffles with Random Seeds ---")?;
        Ok(())
    }

    fn fresh_shuffle(
        &mut self,
        number: u8,
        seed: u64,
        requested: usize,
        cards: &[String],
    ) -> Result<()> {
        writeln!(self.out, "Shuffle #{number}:")?;
        writeln!(self.out, "Shuffling with seed: {seed}")?;
        write_top_cards(self.out, requested, cards)
    }

    fn same_seed_heading(&mut self) -> Result<()> {
        writeln!(self.out, "--- Reproducible Shuffles with Same Seed ---")?;
        Ok(())
    }

    fn same_seed_shuffle(
        &mut self,
        attempt: SameSeedAttempt,
        seed: u64,
        requested: usize,
        cards: &[String],
    ) -> Result<()> {
        match attempt {
            SameSeedAttempt::First => writeln!(self.out, "First shuffle with seed {seed}:")?,
            SameSeedAttempt::Second => writeln!(self.out, "Second shuffle with same seed {seed}:")?,
        }
        self.seeded(seed)?;
        write_top_cards(self.out, requested, cards)
    }

    fn same_seed_identical(&mut self) -> Result<()> {
        writeln!(self.out, "Notice: Same seed produces identical shuffle!")?;
        Ok(())
    }

    fn different_seeds_heading(&mut self) -> Result<()> {
        writeln!(self.out, "\n--- Different Seeds, Different Results ---")?;
        Ok(())
    }

    fn different_seed(&mut self, seed: u64, cards: &[String]) -> Result<()> {
        self.seeded(seed)?;
        write_seed_line(self.out, seed, cards)
    }

    fn full_deck(&mut self, seed: u64, cards: &[String]) -> Result<()> {
        self.seeded(seed)?;
        write_full_deck(self.out, cards)
    }
}

/// One [ShuffleReport] per line
pub struct JsonTranscript<'a, W> {
    out: &'a mut W,
}

impl<'a, W: Write> JsonTranscript<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        JsonTranscript { out }
    }

    fn report(&mut self, seed: Option<u64>, cards: &[String]) -> Result<()> {
        ShuffleReport::new(seed, cards).write_json_line(self.out)
    }
}

impl<W: Write> Transcript for JsonTranscript<'_, W> {
    fn original_order(&mut self, cards: &[String]) -> Result<()> {
        self.report(None, cards)
    }

    fn fresh_shuffle(&mut self, _: u8, seed: u64, _: usize, cards: &[String]) -> Result<()> {
        self.report(Some(seed), cards)
    }

    fn same_seed_shuffle(
        &mut self,
        _: SameSeedAttempt,
        seed: u64,
        _: usize,
        cards: &[String],
    ) -> Result<()> {
        self.report(Some(seed), cards)
    }

    fn different_seed(&mut self, seed: u64, cards: &[String]) -> Result<()> {
        self.report(Some(seed), cards)
    }

    fn full_deck(&mut self, seed: u64, cards: &[String]) -> Result<()> {
        self.report(Some(seed), cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_top_cards_numbers_from_one() {
        let mut out = Vec::new();

        write_top_cards(&mut out, 3, &["A of Hearts", "2 of Hearts"]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Top 3 cards:\n1. A of Hearts\n2. 2 of Hearts\n\n"
        );
    }

    #[test]
    fn write_full_deck_breaks_rows_after_four_cards() {
        let mut out = Vec::new();
        let cards = ["A", "2", "3", "4", "5"];

        write_full_deck(&mut out, &cards).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "Complete deck configuration:");
        assert_eq!(
            lines[1],
            format!(" 1. {:<15} 2. {:<15} 3. {:<15} 4. {:<15}", "A", "2", "3", "4")
        );
        assert_eq!(lines[2], format!(" 5. {:<15}", "5"));
    }

    #[test]
    fn write_seed_line_joins_cards_with_separator() {
        let mut out = Vec::new();

        write_seed_line(&mut out, 1000, &["Q of Clubs", "3 of Spades"]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Seed 1000 - Top 2: Q of Clubs | 3 of Spades\n\n"
        );
    }

    #[test]
    fn shuffle_report_omits_missing_seed() {
        let mut out = Vec::new();
        let cards = ["A of Hearts".to_string()];

        ShuffleReport::new(None, &cards)
            .write_json_line(&mut out)
            .unwrap();
        ShuffleReport::new(Some(7), &cards)
            .write_json_line(&mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"cards\":[\"A of Hearts\"]}\n{\"seed\":7,\"cards\":[\"A of Hearts\"]}\n"
        );
    }

    #[test]
    fn text_transcript_announces_seed_before_seeded_listings() {
        /* Arrange */
        let mut out = Vec::new();
        let cards = ["Q of Clubs".to_string(), "3 of Spades".to_string()];
        let mut transcript = TextTranscript::new(&mut out);

        /* Act */
        transcript
            .same_seed_shuffle(SameSeedAttempt::Second, 12345, 2, &cards)
            .unwrap();
        transcript.different_seed(1000, &cards).unwrap();

        /* Assert */
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Second shuffle with same seed 12345:\n\
             Shuffling with specific seed: 12345\n\
             Top 2 cards:\n1. Q of Clubs\n2. 3 of Spades\n\n\
             Shuffling with specific seed: 1000\n\
             Seed 1000 - Top 2: Q of Clubs | 3 of Spades\n\n"
        );
    }

    #[test]
    fn json_transcript_skips_headings_and_notices() {
        let mut out = Vec::new();
        let cards = ["A of Hearts".to_string()];
        let mut transcript = JsonTranscript::new(&mut out);

        transcript.fresh_shuffles_heading().unwrap();
        transcript.fresh_shuffle(1, 5, 8, &cards).unwrap();
        transcript.same_seed_identical().unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"seed\":5,\"cards\":[\"A of Hearts\"]}\n"
        );
    }
}
