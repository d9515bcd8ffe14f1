use crate::cards::{Card, Suit};
use std::collections::HashSet;

/// Flush iff the set of suits present has exactly one member, so card
/// order never matters.
pub fn is_flush(cards: &[Card]) -> bool {
    let suits: HashSet<Suit> = cards.iter().map(|c| c.suit()).collect();
    suits.len() == 1
}
