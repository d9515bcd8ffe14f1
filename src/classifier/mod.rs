pub(crate) mod rank_counts;
pub(crate) mod resolution;
pub(crate) mod straight;
pub(crate) mod suits;

use crate::cards::{Card, Rank};
use crate::category::Category;
use crate::hand::{Hand, HandError, HAND_SIZE};
use rank_counts::RankCounts;
use straight::StraightInfo;

/// Hand size for which a flush can only accompany HighCard or Straight.
const FIVE_CARDS: usize = 5;

/// Classify a hand into exactly one poker category.
///
/// Pure and total: the same hand always yields the same category.
///
/// ```
/// use video_poker::category::Category;
/// use video_poker::classifier::classify;
/// use video_poker::hand::Hand;
///
/// let hand: Hand = "Ts Js Qs Ks As".parse().unwrap();
/// assert_eq!(classify(&hand), Category::RoyalFlush);
///
/// let hand: Hand = "5c 6d 7h 8s 9c".parse().unwrap();
/// assert_eq!(classify(&hand), Category::Straight);
/// ```
///
/// Only [`HAND_SIZE`]-card hands are accepted; other sizes have to go
/// through a fallible conversion first.
///
/// ```compile_fail
/// use video_poker::classifier::classify;
/// use video_poker::hand::Hand;
///
/// let four: Hand<4> = "Ac Ad Ah As".parse().unwrap();
/// classify(&four);
/// ```
pub fn classify(hand: &Hand) -> Category {
    classify_sized(hand)
}

/// Any-size classification; only [`HAND_SIZE`] hands are public.
pub(crate) fn classify_sized<const N: usize>(hand: &Hand<N>) -> Category {
    let category = classify_slice(hand.as_slice());
    log::trace!("classified [{hand}] as {category}");
    category
}

/// Classify a card slice that must hold exactly [`HAND_SIZE`] cards.
///
/// ```
/// use video_poker::cards::parse_cards;
/// use video_poker::classifier::classify_cards;
/// use video_poker::hand::HandError;
///
/// let four = parse_cards("Ac Ad Ah As").unwrap();
/// assert_eq!(
///     classify_cards(&four),
///     Err(HandError::InvalidHandSize { expected: 5, actual: 4 })
/// );
/// ```
pub fn classify_cards(cards: &[Card]) -> Result<Category, HandError> {
    let hand = Hand::<HAND_SIZE>::from_slice(cards)?;
    Ok(classify(&hand))
}

fn classify_slice(cards: &[Card]) -> Category {
    let counts = RankCounts::from_cards(cards);
    let straight = StraightInfo::detect(&counts, cards.len());

    let base = if straight.is_straight {
        Category::Straight
    } else {
        resolution::resolve(&counts.multiplicities())
    };

    if !flush_check_applies(base, cards.len()) || !suits::is_flush(cards) {
        return base;
    }

    match (base, straight.top_rank) {
        (Category::Straight, Some(Rank::Ace)) => Category::RoyalFlush,
        (Category::Straight, _) => Category::StraightFlush,
        _ => Category::Flush,
    }
}

/// Same-suited cards are distinct only if their ranks are, so a paired
/// single-suit hand must contain a duplicated card. Five-card hands keep
/// the HighCard/Straight-only check and leave such hands paired; other
/// sizes test every category weaker than Flush.
fn flush_check_applies(base: Category, hand_size: usize) -> bool {
    if hand_size == FIVE_CARDS {
        matches!(base, Category::HighCard | Category::Straight)
    } else {
        base < Category::Flush
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Suit};

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    #[test]
    fn straight_flush_below_ace_is_not_royal() {
        assert_eq!(classify(&hand("9h Th Jh Qh Kh")), Category::StraightFlush);
        assert_eq!(classify(&hand("2d 3d 4d 5d 6d")), Category::StraightFlush);
    }

    #[test]
    fn royal_flush_in_any_order() {
        assert_eq!(classify(&hand("Ac Tc Kc Jc Qc")), Category::RoyalFlush);
    }

    #[test]
    fn suited_wheel_is_only_a_flush() {
        assert_eq!(classify(&hand("As 2s 3s 4s 5s")), Category::Flush);
        assert_eq!(classify(&hand("As 2d 3s 4s 5s")), Category::HighCard);
    }

    #[test]
    fn five_card_flush_check_skips_paired_hands() {
        // only reachable with a duplicated card
        let a = Card::new(Rank::Ace, Suit::Spades);
        let k = Card::new(Rank::King, Suit::Spades);
        let two = Card::new(Rank::Two, Suit::Spades);
        let nine = Card::new(Rank::Nine, Suit::Spades);
        let h = Hand::new([a, a, k, two, nine]);
        assert_eq!(classify(&h), Category::Pair);
    }

    #[test]
    fn five_copies_of_one_card_resolve_to_flush() {
        // [5] matches no multiplicity pattern, falls back to HighCard and is upgraded
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(classify(&Hand::new([a; 5])), Category::Flush);
        let mixed = [a, a, a, a, Card::new(Rank::Ace, Suit::Hearts)];
        assert_eq!(classify(&Hand::new(mixed)), Category::FourOfAKind);
    }

    #[test]
    fn other_hand_sizes_check_flush_below_flush_only() {
        let three: Hand<3> = "5h 6h 7h".parse().unwrap();
        assert_eq!(classify_sized(&three), Category::StraightFlush);

        let paired: Hand<3> = "5h 5h 9h".parse().unwrap();
        assert_eq!(classify_sized(&paired), Category::Flush);

        let quads: Hand<6> = "5h 5h 5h 5h 9h 2h".parse().unwrap();
        assert_eq!(classify_sized(&quads), Category::FourOfAKind);
    }

    #[test]
    fn shortcut_only_for_five_cards() {
        assert!(flush_check_applies(Category::HighCard, 5));
        assert!(flush_check_applies(Category::Straight, 5));
        assert!(!flush_check_applies(Category::Pair, 5));
        assert!(!flush_check_applies(Category::ThreeOfAKind, 5));
        for n in [3, 4, 6, 7] {
            assert!(flush_check_applies(Category::Pair, n));
            assert!(flush_check_applies(Category::Straight, n));
            assert!(!flush_check_applies(Category::FullHouse, n));
        }
    }

    #[test]
    fn seven_card_full_house_by_prefix() {
        let seven: Hand<7> = "Kc Kd Kh 4s 4c 9d 2h".parse().unwrap();
        assert_eq!(classify_sized(&seven), Category::FullHouse);
    }

    #[test]
    fn empty_hand_is_high_card() {
        let empty = Hand::<0>::new([]);
        assert_eq!(classify_sized(&empty), Category::HighCard);
    }

    #[test]
    fn classify_cards_checks_length() {
        let six = parse_cards("2c 3c 4c 5c 6c 7c").unwrap();
        assert_eq!(
            classify_cards(&six),
            Err(HandError::InvalidHandSize { expected: 5, actual: 6 })
        );
        assert_eq!(classify_cards(&six[..5]), Ok(Category::StraightFlush));
    }
}
