//! Best-five-card showdown evaluation.

use std::cmp::Ordering;

use crate::cards::Card;

/// Hand rank categories, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    /// Get the category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

/// Comparable showdown value.
/// Format: category (4 bits) | kicker1 (4 bits) | ... | kicker5 (4 bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShowdownRank(u32);

impl ShowdownRank {
    fn new(category: HandCategory, kickers: &[u8]) -> Self {
        let mut value = (category as u32) << 20;
        for (i, &k) in kickers.iter().take(5).enumerate() {
            value |= (k as u32) << (16 - i * 4);
        }
        Self(value)
    }

    /// Get the hand category.
    pub fn category(&self) -> HandCategory {
        HandCategory::ALL
            .get((self.0 >> 20) as usize)
            .copied()
            .unwrap_or(HandCategory::HighCard)
    }
}

/// High card of the best straight among face values (2-14), Ace also low.
fn straight_high(values: &[u8]) -> Option<u8> {
    let mut present = [false; 15];
    for &v in values {
        present[v as usize] = true;
        if v == 14 {
            present[1] = true;
        }
    }
    (5..=14u8).rev().find(|&high| (high - 4..=high).all(|v| present[v as usize]))
}

/// Rank exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> ShowdownRank {
    let mut counts = [0u8; 15];
    let mut values = [0u8; 5];
    for (slot, card) in values.iter_mut().zip(cards) {
        *slot = card.rank().value();
        counts[*slot as usize] += 1;
    }

    let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight = straight_high(&values);

    if let (true, Some(high)) = (flush, straight) {
        return ShowdownRank::new(HandCategory::StraightFlush, &[high]);
    }

    // Values grouped by multiplicity, highest multiplicity then highest value first.
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&v| counts[v as usize] > 0)
        .map(|v| (counts[v as usize], v))
        .collect();
    groups.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));
    let ordered: Vec<u8> = groups.iter().map(|&(_, v)| v).collect();
    let shape: Vec<u8> = groups.iter().map(|&(n, _)| n).collect();

    let category = match shape.as_slice() {
        [4, ..] => HandCategory::FourOfAKind,
        [3, 2] => HandCategory::FullHouse,
        _ if flush => HandCategory::Flush,
        _ if straight.is_some() => HandCategory::Straight,
        [3, ..] => HandCategory::ThreeOfAKind,
        [2, 2, ..] => HandCategory::TwoPair,
        [2, ..] => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    match (category, straight) {
        (HandCategory::Straight, Some(high)) => ShowdownRank::new(category, &[high]),
        _ => ShowdownRank::new(category, &ordered),
    }
}

/// Rank the best five-card hand among 5 to 7 cards.
///
/// Returns `None` for fewer than five cards.
pub fn evaluate_best(cards: &[Card]) -> Option<ShowdownRank> {
    let n = cards.len();
    if n < 5 {
        return None;
    }

    let mut best: Option<ShowdownRank> = None;
    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                for d in (c + 1)..n {
                    for e in (d + 1)..n {
                        let rank = evaluate_five(&[cards[a], cards[b], cards[c], cards[d], cards[e]]);
                        if best.map_or(true, |current| rank > current) {
                            best = Some(rank);
                        }
                    }
                }
            }
        }
    }
    best
}

/// Compare two players' cards against the same board.
pub fn compare(first: &[Card], second: &[Card], board: &[Card]) -> Ordering {
    let with_board = |hole: &[Card]| -> Vec<Card> { hole.iter().chain(board).copied().collect() };
    evaluate_best(&with_board(first)).cmp(&evaluate_best(&with_board(second)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn best(s: &str) -> ShowdownRank {
        evaluate_best(&Card::parse_many(s).unwrap()).unwrap()
    }

    #[test]
    fn test_categories() {
        assert_eq!(best("AsKsQsJsTs").category(), HandCategory::StraightFlush);
        assert_eq!(best("9h9s9d9c2h").category(), HandCategory::FourOfAKind);
        assert_eq!(best("9h9s9dKcKh").category(), HandCategory::FullHouse);
        assert_eq!(best("Ah9h6h4h2h").category(), HandCategory::Flush);
        assert_eq!(best("As2d3h4c5s").category(), HandCategory::Straight);
        assert_eq!(best("9h9s9dKc2h").category(), HandCategory::ThreeOfAKind);
        assert_eq!(best("9h9sKdKc2h").category(), HandCategory::TwoPair);
        assert_eq!(best("9h9sKdQc2h").category(), HandCategory::OnePair);
        assert_eq!(best("9h7sKdQc2h").category(), HandCategory::HighCard);
        assert_eq!(HandCategory::Flush.name(), "Flush");
    }

    #[test]
    fn test_best_of_seven() {
        // Flush on board beats the pair in hand.
        assert_eq!(best("AhAs 2h5h9hJhKd").category(), HandCategory::Flush);
        assert_eq!(best("7h8s 4c5d6hKdKc").category(), HandCategory::Straight);
        assert_eq!(evaluate_best(&Card::parse_many("AhAs2h5h").unwrap()), None);
    }

    #[test]
    fn test_ordering() {
        assert!(best("AsKdQhJcTs") > best("As2d3h4c5s"), "broadway beats wheel");
        assert!(best("6s2d3h4c5s") > best("As2d3h4c5s"), "six-high beats wheel");
        assert!(best("AhAsKdQc2h") > best("AhAsKdJc9h"), "kicker");
        assert!(best("KhKs2d2c3h") > best("QhQsJdJcAh"), "higher top pair");
        assert_eq!(best("AhKsQd9c7h"), best("AsKdQc9h7s"), "suits irrelevant");
    }

    #[test]
    fn test_compare() {
        let board = Card::parse_many("Kd9c4h2s7d").unwrap();
        let kings = Card::parse_many("KhQs").unwrap();
        let nines = Card::parse_many("9h8s").unwrap();
        assert_eq!(compare(&kings, &nines, &board), Ordering::Greater);
        assert_eq!(compare(&nines, &kings, &board), Ordering::Less);
        let board = Card::parse_many("AsKsQsJsTs").unwrap();
        assert_eq!(compare(&kings, &nines, &board), Ordering::Equal);
    }
}
