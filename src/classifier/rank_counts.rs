use crate::cards::{Card, Rank};

/// Rank multiset of a hand: how many cards share each rank.
///
/// Example: KKK44 counts as [(King, 3), (Four, 2)], multiplicities [3, 2].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankCounts {
    /// (rank, count), sorted by count desc then rank desc.
    groups: Vec<(Rank, usize)>,
}

impl RankCounts {
    pub fn from_cards(cards: &[Card]) -> Self {
        // indexed by rank value (2-14)
        let mut counts = [0usize; 15];
        for card in cards {
            counts[card.rank().value() as usize] += 1;
        }

        let mut groups: Vec<(Rank, usize)> = Rank::ALL
            .iter()
            .rev()
            .map(|&rank| (rank, counts[rank.value() as usize]))
            .filter(|&(_, count)| count > 0)
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Number of unique ranks.
    pub fn distinct(&self) -> usize {
        self.groups.len()
    }

    /// Counts per distinct rank, descending.
    pub fn multiplicities(&self) -> Vec<usize> {
        self.groups.iter().map(|&(_, count)| count).collect()
    }

    /// Distinct ranks, highest first.
    pub fn ranks_desc(&self) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = self.groups.iter().map(|&(rank, _)| rank).collect();
        ranks.sort_by(|a, b| b.cmp(a));
        ranks
    }
}
