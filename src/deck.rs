pub const SUITS: [&str; 4] = ["Hearts", "Diamonds", "Clubs", "Spades"];

pub const RANKS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

pub const DECK_SIZE: usize = SUITS.len() * RANKS.len();

/// Card labels in canonical order: every rank of Hearts first, Spades last.
pub fn standard_deck() -> Vec<String> {
    SUITS
        .iter()
        .flat_map(|suit| RANKS.iter().map(move |rank| format!("{rank} of {suit}")))
        .collect()
}
