use crate::cards::{parse_cards, Card};
use std::fmt;
use std::str::FromStr;

/// Number of cards in a video-poker hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly {expected} cards, got {actual}")]
    InvalidHandSize { expected: usize, actual: usize },
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A dealt hand of exactly `N` cards, in deal order.
///
/// Card uniqueness is the dealer's business and is not checked here.
///
/// ```
/// use video_poker::hand::{Hand, HandError};
///
/// let hand: Hand = "Kc Kd Kh 4s 4c".parse().unwrap();
/// assert_eq!(hand.len(), 5);
///
/// let short = "Kc Kd Kh 4s".parse::<Hand>();
/// assert_eq!(short, Err(HandError::InvalidHandSize { expected: 5, actual: 4 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand<const N: usize = HAND_SIZE> {
    cards: [Card; N],
}

impl<const N: usize> Hand<N> {
    pub const fn new(cards: [Card; N]) -> Self {
        Self { cards }
    }

    /// Build a hand from a slice, failing unless it holds exactly `N` cards.
    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; N] = slice
            .try_into()
            .map_err(|_| HandError::InvalidHandSize { expected: N, actual: slice.len() })?;
        Ok(Self { cards })
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub const fn cards(&self) -> &[Card; N] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<const N: usize> From<[Card; N]> for Hand<N> {
    fn from(cards: [Card; N]) -> Self {
        Self::new(cards)
    }
}

impl<const N: usize> TryFrom<&[Card]> for Hand<N> {
    type Error = HandError;
    fn try_from(slice: &[Card]) -> Result<Self, Self::Error> {
        Self::from_slice(slice)
    }
}

impl<const N: usize> TryFrom<Vec<Card>> for Hand<N> {
    type Error = HandError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::from_slice(&cards)
    }
}

impl<'a, const N: usize> IntoIterator for &'a Hand<N> {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<const N: usize> FromStr for Hand<N> {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

impl<const N: usize> fmt::Display for Hand<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
