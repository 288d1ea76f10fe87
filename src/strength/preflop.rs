//! Preflop hand strength for three-card (and post-discard two-card) hands.

use crate::cards::{Hand, HandProfile};

/// Strength assigned to three of a kind in the hole.
pub const TRIPS_STRENGTH: f64 = 0.95;

/// Score a hole hand before the board is dealt.
///
/// Deterministic and pure. Trips score a flat 0.95; a pair scores
/// `0.55 + pair/14 * 0.25 + kicker/14 * 0.05`; unpaired hands score on the two
/// highest ranks (with Ace-specific tiers) plus bonuses for suitedness and
/// connectivity. The result never exceeds 1.0.
pub fn preflop_strength(hand: &Hand) -> f64 {
    let cards = hand.cards();
    let profile = HandProfile::new(cards);

    let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank().value()).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    if !profile.values_with_count(3).is_empty() {
        return TRIPS_STRENGTH;
    }

    if let Some(&pair) = profile.values_with_count(2).first() {
        let kicker = ranks.iter().copied().find(|&r| r != pair);
        let kicker_term = kicker.map_or(0.0, |k| k as f64 / 14.0 * 0.05);
        return (0.55 + pair as f64 / 14.0 * 0.25 + kicker_term).min(1.0);
    }

    let (high, second) = (ranks[0], ranks[1]);
    let top_two = high + second;
    let mut strength = if high == 14 {
        if second >= 12 {
            0.50 + (second - 12) as f64 * 0.05
        } else if second >= 10 {
            0.40 + (second - 10) as f64 * 0.05
        } else {
            0.25 + second as f64 / 14.0 * 0.10
        }
    } else if top_two >= 24 {
        0.40
    } else if top_two >= 22 {
        0.32
    } else {
        top_two as f64 / 28.0 * 0.30
    };

    match profile.max_suit_count() {
        3 => strength += 0.12,
        2 => strength += 0.06,
        _ => {}
    }

    let gaps: Vec<u8> = ranks.windows(2).map(|w| w[0] - w[1]).collect();
    if gaps.iter().all(|&g| g <= 1) {
        strength += 0.10;
    } else if gaps.iter().all(|&g| g <= 2) {
        strength += 0.05;
    }

    strength.min(1.0)
}
