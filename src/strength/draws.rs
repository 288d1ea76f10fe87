//! Draw outs and the outs-to-equity rule of thumb.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{Board, Card, HandProfile, Hand};

/// Outs for a four-card flush draw.
pub const FLUSH_OUTS: u8 = 9;
/// Outs for a four-card straight draw.
pub const STRAIGHT_OUTS: u8 = 8;
/// Outs added by a straight draw on top of a flush draw.
pub const COMBO_EXTRA_OUTS: u8 = 6;
/// Outs for a pocket pair improving to trips.
pub const PAIR_TO_TRIPS_OUTS: u8 = 2;
/// Outs for two pair improving to a full house.
pub const TWO_PAIR_TO_FH_OUTS: u8 = 4;

/// Kind of draw detected. Only one is ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawType {
    /// Four to a flush.
    Flush,
    /// Four to a straight.
    Straight,
    /// Flush and straight draw together.
    Combo,
    /// A hole pair drawing to trips.
    PairToTrips,
    /// Two pair drawing to a full house.
    TwoPairToFh,
}

impl fmt::Display for DrawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DrawType::Flush => "flush",
            DrawType::Straight => "straight",
            DrawType::Combo => "combo",
            DrawType::PairToTrips => "pair_to_trips",
            DrawType::TwoPairToFh => "two_pair_to_fh",
        };
        f.write_str(name)
    }
}

/// Outs and the draw they come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DrawAssessment {
    /// Cards that complete the draw.
    pub outs: u8,
    /// Draw type, `None` when there is no draw.
    pub draw: Option<DrawType>,
}

/// Count the outs of a hand on a board.
///
/// Flush draws count 9. A straight draw counts 8 alone, or adds 6 to a flush
/// draw and reports `Combo`. Weaker draws (pocket pair to trips, two pair to
/// a full house) only count when nothing stronger was found.
pub fn count_outs(hand: &Hand, board: &Board) -> DrawAssessment {
    let all: Vec<Card> = hand.cards().iter().chain(board.cards()).copied().collect();
    let combined = HandProfile::new(&all);
    let hole = HandProfile::new(hand.cards());

    let mut result = DrawAssessment::default();

    if combined.has_flush_draw() {
        result.outs += FLUSH_OUTS;
        result.draw = Some(DrawType::Flush);
    }

    if combined.has_straight_draw() {
        if result.outs == 0 {
            result.outs += STRAIGHT_OUTS;
            result.draw = Some(DrawType::Straight);
        } else {
            result.outs += COMBO_EXTRA_OUTS;
            result.draw = Some(DrawType::Combo);
        }
    }

    if result.outs == 0 && !hole.values_with_count(2).is_empty() {
        result.outs += PAIR_TO_TRIPS_OUTS;
        result.draw = Some(DrawType::PairToTrips);
    }

    if result.outs == 0 && combined.values_with_count(2).len() >= 2 {
        result.outs += TWO_PAIR_TO_FH_OUTS;
        result.draw = Some(DrawType::TwoPairToFh);
    }

    result
}

/// Winning probability from outs: 4% per out with two streets to come,
/// 2% with one, nothing on the river.
pub fn draw_equity(outs: u8, streets_remaining: u8) -> f64 {
    let percent = match streets_remaining {
        0 => 0,
        1 => (outs as u32 * 2).min(100),
        _ => (outs as u32 * 4).min(100),
    };
    percent as f64 / 100.0
}

/// Best of made-hand strength and draw equity when a draw exists.
pub fn combined_equity(made_strength: f64, draw: Option<DrawType>, draw_equity: f64) -> f64 {
    match draw {
        Some(_) => made_strength.max(draw_equity),
        None => made_strength,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outs(hand: &str, board: &str) -> DrawAssessment {
        count_outs(&Hand::parse(hand).unwrap(), &Board::parse(board).unwrap())
    }

    #[test]
    fn test_flush_draw() {
        let a = outs("AhKh", "9h4h2c");
        assert_eq!(a, DrawAssessment { outs: 9, draw: Some(DrawType::Flush) });
    }

    #[test]
    fn test_straight_draw() {
        let a = outs("9s8d", "7h6c2s");
        assert_eq!(a, DrawAssessment { outs: 8, draw: Some(DrawType::Straight) });

        // Wheel draw through the Ace.
        let a = outs("As2d", "3h4cKs");
        assert_eq!(a.draw, Some(DrawType::Straight));
    }

    #[test]
    fn test_combo_draw() {
        let a = outs("9h8h", "7h6c2h");
        assert_eq!(a.draw, Some(DrawType::Combo));
        assert_eq!(a.outs, FLUSH_OUTS + COMBO_EXTRA_OUTS);
        assert!(a.outs < FLUSH_OUTS + STRAIGHT_OUTS);
    }

    #[test]
    fn test_weak_draws_only_without_stronger() {
        let a = outs("QhQs", "9d4c2h");
        assert_eq!(a, DrawAssessment { outs: 2, draw: Some(DrawType::PairToTrips) });

        let a = outs("Qh9s", "9dQc2h");
        assert_eq!(a, DrawAssessment { outs: 4, draw: Some(DrawType::TwoPairToFh) });

        // Pocket pair with a flush draw reports only the flush.
        let a = outs("QhQs", "9h4h2h");
        assert_eq!(a.draw, Some(DrawType::Flush));
        assert_eq!(a.outs, 9);

        assert_eq!(outs("AsKd", "9h4c2s"), DrawAssessment::default());
    }

    #[test]
    fn test_draw_equity_rule() {
        assert_eq!(draw_equity(9, 2), 0.36);
        assert_eq!(draw_equity(9, 1), 0.18);
        assert_eq!(draw_equity(9, 0), 0.0);
        assert_eq!(draw_equity(40, 2), 1.0);
    }

    #[test]
    fn test_draw_equity_monotone() {
        for streets in 0..=2u8 {
            for o in 0..30u8 {
                assert!(draw_equity(o + 1, streets) >= draw_equity(o, streets));
            }
        }
        for o in 0..30u8 {
            assert!(draw_equity(o, 2) >= draw_equity(o, 1));
            assert!(draw_equity(o, 1) >= draw_equity(o, 0));
            assert_eq!(draw_equity(o, 0), 0.0);
        }
    }

    #[test]
    fn test_combined_equity() {
        assert_eq!(combined_equity(0.35, Some(DrawType::Flush), 0.36), 0.36);
        assert_eq!(combined_equity(0.50, Some(DrawType::Straight), 0.32), 0.50);
        assert_eq!(combined_equity(0.15, None, 0.36), 0.15);
    }
}
