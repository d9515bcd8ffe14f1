use crate::category::Category;

/// Multiplicity patterns in priority order; first prefix match wins.
/// `[1]` is the catch-all for hands without a repeated rank, so it must
/// stay last.
pub const MULTIPLICITY_TABLE: [(&[usize], Category); 6] = [
    (&[4], Category::FourOfAKind),
    (&[3, 2], Category::FullHouse),
    (&[3], Category::ThreeOfAKind),
    (&[2, 2], Category::TwoPair),
    (&[2], Category::Pair),
    (&[1], Category::HighCard),
];

/// Resolve a category from rank multiplicities sorted descending.
///
/// Anything no pattern matches (an empty hand, or five or more copies of
/// one rank, which needs duplicated cards) resolves to HighCard. Such a
/// hand can still be upgraded afterwards: five identical cards classify as
/// Flush.
pub fn resolve(multiplicities: &[usize]) -> Category {
    MULTIPLICITY_TABLE
        .iter()
        .find(|(pattern, _)| multiplicities.starts_with(pattern))
        .map(|&(_, category)| category)
        .unwrap_or(Category::HighCard)
}
