//! Rank and suit multiplicity facts over a set of cards.
//!
//! `HandProfile` is the shared substrate of every estimator: it counts ranks
//! and suits once and answers flush, straight and draw questions from those
//! counts. Straights are Ace-low aware: an Ace also counts as rank 1.

use super::card::{Card, Suit};

/// Width of a straight window.
const STRAIGHT_LEN: u8 = 5;

/// Precomputed multiplicities for a set of cards (hole cards plus board).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandProfile {
    /// Count per face value, indexed 2..=14.
    rank_counts: [u8; 15],
    /// Count per suit, indexed by `Suit as usize`.
    suit_counts: [u8; 4],
    /// Sorted unique face values, with 1 prepended when an Ace is present.
    unique: Vec<u8>,
}

impl HandProfile {
    /// Build a profile from any set of cards.
    pub fn new(cards: &[Card]) -> Self {
        let mut rank_counts = [0u8; 15];
        let mut suit_counts = [0u8; 4];
        for card in cards {
            rank_counts[card.rank().value() as usize] += 1;
            suit_counts[card.suit() as usize] += 1;
        }

        let mut unique: Vec<u8> = (2..=14u8).filter(|&v| rank_counts[v as usize] > 0).collect();
        if rank_counts[14] > 0 {
            unique.insert(0, 1);
        }

        Self { rank_counts, suit_counts, unique }
    }

    /// Number of cards of the given face value (2-14).
    pub fn rank_count(&self, value: u8) -> u8 {
        self.rank_counts.get(value as usize).copied().unwrap_or(0)
    }

    /// Number of cards of the given suit.
    pub fn suit_count(&self, suit: Suit) -> u8 {
        self.suit_counts[suit as usize]
    }

    /// Largest number of cards sharing one suit.
    pub fn max_suit_count(&self) -> u8 {
        self.suit_counts.iter().copied().max().unwrap_or(0)
    }

    /// Rank multiplicities sorted descending, zero counts dropped.
    pub fn multiplicities(&self) -> Vec<u8> {
        let mut counts: Vec<u8> = self.rank_counts.iter().copied().filter(|&c| c > 0).collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts
    }

    /// Face values appearing exactly `n` times, highest first.
    pub fn values_with_count(&self, n: u8) -> Vec<u8> {
        (2..=14u8).rev().filter(|&v| self.rank_counts[v as usize] == n).collect()
    }

    /// Five or more cards of one suit.
    pub fn has_flush(&self) -> bool {
        self.max_suit_count() >= 5
    }

    /// Exactly four cards of one suit.
    pub fn has_flush_draw(&self) -> bool {
        self.max_suit_count() == 4
    }

    /// Five consecutive face values, found by a running-length scan.
    pub fn has_straight(&self) -> bool {
        let mut run = 1u8;
        for pair in self.unique.windows(2) {
            if pair[1] == pair[0] + 1 {
                run += 1;
                if run >= STRAIGHT_LEN {
                    return true;
                }
            } else {
                run = 1;
            }
        }
        false
    }

    /// Distinct face values inside the window `[base, base + 5)`.
    fn window_count(&self, base: u8) -> u8 {
        self.unique.iter().filter(|&&v| v >= base && v < base + STRAIGHT_LEN).count() as u8
    }

    /// Most distinct values found in any five-wide window anchored on a held value.
    pub fn best_window_count(&self) -> u8 {
        self.unique.iter().map(|&base| self.window_count(base)).max().unwrap_or(0)
    }

    /// Some five-wide window holds at least four distinct values.
    pub fn has_straight_window(&self) -> bool {
        self.best_window_count() >= 4
    }

    /// Best window holds exactly four distinct values (an open or gutshot draw).
    pub fn has_straight_draw(&self) -> bool {
        self.best_window_count() == 4
    }

    /// Check whether `value` sits inside a window achieving the best count.
    ///
    /// Aces are tested both as 14 and as 1. Returns false when no window
    /// reaches four distinct values.
    pub fn in_best_window(&self, value: u8) -> bool {
        let best = self.best_window_count();
        if best < 4 {
            return false;
        }
        let candidates: &[u8] = if value == 14 { &[14, 1] } else { &[value] };
        self.unique
            .iter()
            .filter(|&&base| self.window_count(base) == best)
            .any(|&base| candidates.iter().any(|&v| v >= base && v < base + STRAIGHT_LEN))
    }
}
