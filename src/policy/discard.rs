//! Discard selection: score every hole card and throw away the least useful.

use crate::cards::{Board, Hand, HandProfile, Rank};

/// Retention score of each hole card. Higher means more worth keeping.
///
/// Components: own pair or trips, pairing with the board, suit concentration
/// toward a flush, membership in the best straight window, and high-card value.
pub fn retention_scores(hand: &Hand, board: &Board) -> Vec<f64> {
    let hole = HandProfile::new(hand.cards());
    let shared = HandProfile::new(board.cards());
    let combined = HandProfile::new(&hand.cards().iter().chain(board.cards()).copied().collect::<Vec<_>>());

    hand.cards()
        .iter()
        .map(|card| {
            let value = card.rank().value();
            let mut score = 0.0;

            score += match hole.rank_count(value) {
                3 => 15.0,
                2 => 12.0,
                _ => 0.0,
            };

            score += match shared.rank_count(value) {
                0 => 0.0,
                1 => 4.0,
                _ => 10.0,
            };

            score += match combined.suit_count(card.suit()) {
                n if n >= 4 => 8.0,
                3 => 4.0,
                _ => 0.0,
            };

            if combined.in_best_window(value) {
                score += 6.0;
            }

            score += match card.rank() {
                Rank::Ace => 5.0,
                Rank::King | Rank::Queen => 3.0,
                Rank::Jack | Rank::Ten => 1.5,
                _ => 0.0,
            };

            score
        })
        .collect()
}

/// Index of the card to discard: the strictly lowest score, first on ties.
pub fn choose_discard(hand: &Hand, board: &Board) -> usize {
    let scores = retention_scores(hand, board);
    let mut worst = 0;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score < scores[worst] {
            worst = i;
        }
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discard(hand: &str) -> usize {
        choose_discard(&Hand::parse(hand).unwrap(), &Board::new())
    }

    #[test]
    fn test_keeps_pair() {
        assert_eq!(discard("7h7s2d"), 2);
        assert_eq!(discard("2dKhKs"), 0);
    }

    #[test]
    fn test_keeps_suited_high_cards() {
        // Ah and Kh share a suit, 4c is unsuited and low.
        let scores = retention_scores(&Hand::parse("Ah4cKh").unwrap(), &Board::new());
        assert_eq!(scores, vec![5.0, 0.0, 3.0]);
        assert_eq!(discard("Ah4cKh"), 1);
    }

    #[test]
    fn test_board_synergy() {
        let hand = Hand::parse("9s5dKh").unwrap();
        let board = Board::parse("5c5h2s").unwrap();
        assert_eq!(choose_discard(&hand, &board), 0);
        let scores = retention_scores(&hand, &board);
        assert_eq!(scores[1], 10.0);
    }

    #[test]
    fn test_straight_window_bonus() {
        let hand = Hand::parse("8s7dKh").unwrap();
        let board = Board::parse("6c5h2s").unwrap();
        let scores = retention_scores(&hand, &board);
        assert_eq!(scores[0], 6.0);
        assert_eq!(scores[1], 6.0);
        assert_eq!(scores[2], 3.0);
        assert_eq!(choose_discard(&hand, &board), 2);
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        assert_eq!(discard("2c7d4h"), 0);
        assert_eq!(discard("Tc2d3h"), 1);
    }

    #[test]
    fn test_deterministic_and_in_range() {
        use crate::cards::Deck;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let mut deck = Deck::shuffled(&mut rng);
            let hand = Hand::new(deck.deal_n(3)).unwrap();
            let idx = choose_discard(&hand, &Board::new());
            assert!(idx < 3);
            assert_eq!(idx, choose_discard(&hand, &Board::new()));
        }
    }
}
