use crate::cards::{Card, Rank, Suit};
use crate::hand::Hand;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A standard 52-card deck that deals hands off the top.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use video_poker::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|s| Rank::ALL.into_iter().map(move |r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        log::debug!("shuffling {} cards with seed {seed}", self.cards.len());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Deal a full hand, or `None` (leaving the deck untouched) when fewer
    /// than `N` cards remain.
    ///
    /// ```
    /// use video_poker::deck::Deck;
    /// use video_poker::hand::Hand;
    ///
    /// let mut deck = Deck::standard();
    /// deck.shuffle_seeded(7);
    /// let hand: Hand = deck.deal_hand().unwrap();
    /// assert_eq!(hand.len(), 5);
    /// assert_eq!(deck.len(), 47);
    /// ```
    pub fn deal_hand<const N: usize>(&mut self) -> Option<Hand<N>> {
        if self.cards.len() < N {
            return None;
        }
        let at = self.cards.len() - N;
        let dealt = self.cards.split_off(at);
        Hand::from_slice(&dealt).ok()
    }
}
