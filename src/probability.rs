//! Fixed frequency of each category among all five-card hands dealt from a
//! standard 52-card deck, in percent. Display data only; nothing here is
//! derived from the classifier.

use crate::category::Category;

/// Percentage chance of being dealt `category` in five cards.
///
/// ```
/// use video_poker::category::Category;
/// use video_poker::probability::probability;
///
/// assert_eq!(probability(Category::FullHouse), 0.1441);
/// ```
pub const fn probability(category: Category) -> f64 {
    match category {
        Category::HighCard => 50.1177,
        Category::Pair => 42.2569,
        Category::TwoPair => 4.7539,
        Category::ThreeOfAKind => 2.1128,
        Category::Straight => 0.3925,
        Category::Flush => 0.1965,
        Category::FullHouse => 0.1441,
        Category::FourOfAKind => 0.0240,
        Category::StraightFlush => 0.00139,
        Category::RoyalFlush => 0.000154,
    }
}

/// Every category with its percentage, weakest first.
pub fn probabilities() -> impl Iterator<Item = (Category, f64)> {
    Category::ALL.into_iter().map(|c| (c, probability(c)))
}

impl Category {
    pub const fn probability(self) -> f64 {
        probability(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sums_to_one_hundred() {
        let total: f64 = probabilities().map(|(_, p)| p).sum();
        assert!((total - 100.0).abs() < 0.01, "total was {total}");
    }

    #[test]
    fn stronger_categories_are_rarer_above_pair() {
        let ps: Vec<f64> = probabilities().skip(1).map(|(_, p)| p).collect();
        assert!(ps.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn method_and_function_agree() {
        for c in Category::ALL {
            assert_eq!(c.probability(), probability(c));
        }
        assert_eq!(probabilities().count(), Category::ALL.len());
    }
}
