//! Fixed-threshold policy: no draw math and no opponent model.

use rand::RngCore;

use super::{chance, Action, ActionKind, ActionPolicy, RoundContext};
use crate::cards::{Card, HandProfile};
use crate::opponent::ExploitAdjustments;
use crate::strength::{pot_odds, preflop_strength};

/// Coarse postflop tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    /// Nothing worth betting.
    Weak,
    /// One pair or a draw.
    Medium,
    /// Two pair or better.
    Strong,
}

/// Straight, flush, trips or two pair is strong; a pair or a four-card draw
/// is medium; anything else is weak.
pub fn coarse_tier(cards: &[Card]) -> Tier {
    let profile = HandProfile::new(cards);
    let counts = profile.multiplicities();
    let top = counts.first().copied().unwrap_or(0);
    let second = counts.get(1).copied().unwrap_or(0);

    if profile.has_flush() || profile.has_straight() || top >= 3 || (top == 2 && second == 2) {
        Tier::Strong
    } else if top == 2 || profile.has_flush_draw() || profile.has_straight_window() {
        Tier::Medium
    } else {
        Tier::Weak
    }
}

/// The simpler bot: strength thresholds and fixed frequencies.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPolicy;

impl ActionPolicy for HeuristicPolicy {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn preflop(&self, ctx: &RoundContext, _rng: &mut dyn RngCore) -> Action {
        let cost = ctx.continue_cost();
        if cost == 0 {
            return if ctx.can(ActionKind::Check) { Action::Check } else { Action::Call };
        }

        let strength = preflop_strength(&ctx.hand);
        let odds = pot_odds(cost, ctx.pot());

        if strength < 0.20 {
            Action::Fold
        } else if strength < 0.35 {
            if odds > 0.35 {
                Action::Fold
            } else {
                Action::Call
            }
        } else if strength < 0.60 {
            Action::Call
        } else {
            match ctx.raise_bounds {
                Some((min, max)) if ctx.can(ActionKind::Raise) => {
                    let size_factor = 0.4 + (strength - 0.60) * 0.6;
                    let target = min as f64 + max.saturating_sub(min) as f64 * size_factor * 0.3;
                    Action::Raise(target as u32)
                }
                _ => Action::Call,
            }
        }
    }

    fn postflop(
        &self,
        ctx: &RoundContext,
        _exploits: Option<ExploitAdjustments>,
        rng: &mut dyn RngCore,
    ) -> Action {
        let tier = coarse_tier(&ctx.all_cards());
        let cost = ctx.continue_cost();
        let pot = ctx.pot();

        if cost == 0 {
            return match tier {
                Tier::Strong => ctx.raise_to(ctx.my_pip + pot).unwrap_or(Action::Check),
                Tier::Medium if ctx.in_position() && ctx.can(ActionKind::Raise) && chance(rng, 0.35) => {
                    ctx.min_raise().unwrap_or(Action::Check)
                }
                _ => Action::Check,
            };
        }

        match tier {
            Tier::Strong => {
                if ctx.can(ActionKind::Raise) && chance(rng, 0.65) {
                    if let Some(raise) = ctx.raise_to(ctx.opp_pip + pot) {
                        return raise;
                    }
                }
                Action::Call
            }
            Tier::Medium if pot_odds(cost, pot) <= 0.40 && ctx.can(ActionKind::Call) => Action::Call,
            _ => Action::Fold,
        }
    }
}
