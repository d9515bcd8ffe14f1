use video_poker::cards::parse_cards;
use video_poker::category::Category;
use video_poker::classifier::{classify, classify_cards};
use video_poker::hand::{Hand, HandError, HAND_SIZE};

#[test]
fn four_cards_fail_with_invalid_hand_size() {
    let cards = parse_cards("Ac Ad Ah As").unwrap();
    let err = classify_cards(&cards).unwrap_err();
    assert_eq!(err, HandError::InvalidHandSize { expected: HAND_SIZE, actual: 4 });
    assert_eq!(err.to_string(), "expected exactly 5 cards, got 4");
}

#[test]
fn six_cards_fail_with_invalid_hand_size() {
    let cards = parse_cards("Ac Ad Ah As 7c 8d").unwrap();
    assert!(matches!(
        classify_cards(&cards),
        Err(HandError::InvalidHandSize { expected: 5, actual: 6 })
    ));
}

#[test]
fn empty_input_fails() {
    assert!(matches!(
        classify_cards(&[]),
        Err(HandError::InvalidHandSize { expected: 5, actual: 0 })
    ));
}

#[test]
fn parsing_a_hand_enforces_size() {
    assert!(matches!(
        "Ac Ad Ah".parse::<Hand>(),
        Err(HandError::InvalidHandSize { expected: 5, actual: 3 })
    ));
}

#[test]
fn exact_size_classifies() {
    let cards = parse_cards("Ac Ad Ah As 7c").unwrap();
    assert_eq!(classify_cards(&cards), Ok(Category::FourOfAKind));
    let hand = Hand::<HAND_SIZE>::try_from(cards).unwrap();
    assert_eq!(classify(&hand), Category::FourOfAKind);
}

#[test]
fn wrong_sized_hands_cannot_reach_classify() {
    for text in ["Ac Ad Ah As", "Ac Ad Ah As 7c 8d"] {
        let cards = parse_cards(text).unwrap();
        let actual = cards.len();
        let expected = Err(HandError::InvalidHandSize { expected: HAND_SIZE, actual });

        assert_eq!(text.parse::<Hand>().map(|h| classify(&h)), expected);
        assert_eq!(Hand::try_from(cards.as_slice()).map(|h: Hand| classify(&h)), expected);
        assert_eq!(Hand::try_from(cards.clone()).map(|h: Hand| classify(&h)), expected);
        assert_eq!(classify_cards(&cards), expected);
    }
}

#[test]
fn other_sized_hands_still_parse_but_only_convert_back_fallibly() {
    let four: Hand<4> = "Ac Ad Ah As".parse().unwrap();
    assert_eq!(
        Hand::<HAND_SIZE>::from_slice(four.as_slice()),
        Err(HandError::InvalidHandSize { expected: HAND_SIZE, actual: 4 })
    );
    assert_eq!(
        classify_cards(four.as_slice()),
        Err(HandError::InvalidHandSize { expected: HAND_SIZE, actual: 4 })
    );
}
