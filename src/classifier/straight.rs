use super::rank_counts::RankCounts;
use crate::cards::Rank;

/// Whether a hand's ranks form a straight, and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// A straight needs `hand_size` distinct ranks, each one below the
    /// previous when sorted descending. Ace only ever plays high, so
    /// A-2-3-4-5 is not a straight.
    pub fn detect(counts: &RankCounts, hand_size: usize) -> Self {
        if hand_size == 0 || counts.distinct() != hand_size {
            return Self::NONE;
        }
        let ranks = counts.ranks_desc();
        let consecutive = ranks.windows(2).all(|w| w[0].value() == w[1].value() + 1);
        if consecutive {
            StraightInfo { is_straight: true, top_rank: ranks.first().copied() }
        } else {
            Self::NONE
        }
    }

    const NONE: StraightInfo = StraightInfo { is_straight: false, top_rank: None };
}
