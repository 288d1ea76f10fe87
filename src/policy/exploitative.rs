//! Pot-odds/EV policy with opponent-aware deviations.

use rand::RngCore;

use super::{chance, Action, ActionKind, ActionPolicy, RoundContext};
use crate::opponent::ExploitAdjustments;
use crate::strength::{
    combined_equity, count_outs, draw_equity, expected_value, pot_odds, postflop_evaluate,
    preflop_strength, should_call, HandBucket,
};

/// Preflop strength from which a hand plays aggressively.
pub const TOP_TIER: f64 = 0.60;

/// The full decision engine: strength tiers, draw math and exploit hints.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExploitativePolicy;

/// First legal of check, then fold.
fn check_or_fold(ctx: &RoundContext) -> Action {
    if ctx.can(ActionKind::Check) {
        Action::Check
    } else {
        Action::Fold
    }
}

/// First legal of fold, check, then call.
fn fold_or_check(ctx: &RoundContext) -> Action {
    if ctx.can(ActionKind::Fold) {
        Action::Fold
    } else if ctx.can(ActionKind::Check) {
        Action::Check
    } else {
        Action::Call
    }
}

/// Call if legal, otherwise check or fold.
fn call_or_check(ctx: &RoundContext) -> Action {
    if ctx.can(ActionKind::Call) {
        Action::Call
    } else {
        check_or_fold(ctx)
    }
}

impl ExploitativePolicy {
    fn preflop_facing_cost(&self, ctx: &RoundContext, strength: f64, rng: &mut dyn RngCore) -> Action {
        if strength >= TOP_TIER {
            if ctx.can(ActionKind::Raise) && chance(rng, 0.75) {
                if let Some((min, max)) = ctx.raise_bounds {
                    let size_factor = 0.6 + (strength - TOP_TIER) * 0.8;
                    let target = min as f64 + max.saturating_sub(min) as f64 * size_factor * 0.5;
                    if let Some(raise) = ctx.raise_to(target as u32) {
                        return raise;
                    }
                }
            }
            return call_or_check(ctx);
        }

        if !ctx.in_position() {
            if strength >= 0.40 {
                let odds = if ctx.pot() > 0 { pot_odds(ctx.continue_cost(), ctx.pot()) } else { 0.0 };
                if odds <= 0.35 && ctx.can(ActionKind::Call) {
                    return Action::Call;
                }
            }
            return fold_or_check(ctx);
        }

        if chance(rng, 0.05) {
            if let Some(raise) = ctx.min_raise() {
                return raise;
            }
        }
        if strength >= 0.35 && ctx.can(ActionKind::Call) {
            return Action::Call;
        }
        fold_or_check(ctx)
    }

    fn preflop_unopened(&self, ctx: &RoundContext, strength: f64, rng: &mut dyn RngCore) -> Action {
        if strength >= TOP_TIER {
            if ctx.can(ActionKind::Raise) && chance(rng, 0.90) {
                if let Some((min, max)) = ctx.raise_bounds {
                    let scale = if strength > 0.75 { 0.5 } else { 0.35 };
                    let target = (min as f64 + max as f64) * scale;
                    if let Some(raise) = ctx.raise_to(target as u32) {
                        return raise;
                    }
                }
            }
        } else if ctx.in_position() && ctx.can(ActionKind::Raise) {
            if strength >= 0.45 && chance(rng, 0.50) {
                if let Some(raise) = ctx.min_raise() {
                    return raise;
                }
            }
            if chance(rng, 0.05) {
                if let Some(raise) = ctx.min_raise() {
                    return raise;
                }
            }
        }

        if ctx.can(ActionKind::Check) {
            Action::Check
        } else {
            Action::Call
        }
    }
}

impl ActionPolicy for ExploitativePolicy {
    fn name(&self) -> &'static str {
        "exploitative"
    }

    fn preflop(&self, ctx: &RoundContext, rng: &mut dyn RngCore) -> Action {
        let strength = preflop_strength(&ctx.hand);
        if ctx.continue_cost() > 0 {
            self.preflop_facing_cost(ctx, strength, rng)
        } else {
            self.preflop_unopened(ctx, strength, rng)
        }
    }

    fn postflop(
        &self,
        ctx: &RoundContext,
        exploits: Option<ExploitAdjustments>,
        rng: &mut dyn RngCore,
    ) -> Action {
        let made = postflop_evaluate(&ctx.all_cards());
        let draw = count_outs(&ctx.hand, &ctx.board);
        let draw_eq = draw_equity(draw.outs, ctx.street.streets_remaining());
        let equity = combined_equity(made.strength, draw.draw, draw_eq);
        let hints = exploits.unwrap_or_default();
        let bucket = made.bucket;
        let in_position = ctx.in_position();
        let pot = ctx.pot();

        log::debug!(
            "{} {} | bucket={} outs={} draw={:?} equity={:.2}",
            ctx.street, ctx.hand, bucket, draw.outs, draw.draw, equity
        );

        let cost = ctx.continue_cost();
        if cost == 0 {
            if bucket.is_strong_or_better() {
                let bet_prob = if bucket == HandBucket::Nuts { 0.95 } else { 0.85 };
                if ctx.can(ActionKind::Raise) && chance(rng, bet_prob) {
                    let mut multiplier = match bucket {
                        HandBucket::Nuts => 1.2,
                        HandBucket::VeryStrong => 1.0,
                        _ => 0.8,
                    };
                    if hints.value_bet_bigger {
                        multiplier *= 1.25;
                    }
                    let pot_bet = (pot as f64 * 0.75 * multiplier) as u32;
                    if let Some(raise) = ctx.raise_to(ctx.my_pip + pot_bet) {
                        return raise;
                    }
                }
                return check_or_fold(ctx);
            }

            if draw.draw.is_some() && draw.outs >= 8 {
                if in_position && chance(rng, (draw_eq * 1.5).min(0.60)) {
                    if let Some(raise) = ctx.min_raise() {
                        return raise;
                    }
                }
                return check_or_fold(ctx);
            }

            if bucket.is_medium() {
                let stab = if hints.bluff_more { 0.50 } else { 0.30 };
                if in_position && ctx.can(ActionKind::Raise) && chance(rng, stab) {
                    if let Some(raise) = ctx.min_raise() {
                        return raise;
                    }
                }
                return check_or_fold(ctx);
            }

            if in_position && chance(rng, 0.05) {
                if let Some(raise) = ctx.min_raise() {
                    return raise;
                }
            }
            return check_or_fold(ctx);
        }

        let odds = pot_odds(cost, pot);

        if bucket.is_strong_or_better() {
            let raise_prob = if bucket >= HandBucket::VeryStrong { 0.85 } else { 0.60 };
            if ctx.can(ActionKind::Raise) && chance(rng, raise_prob) {
                if let Some(raise) = ctx.raise_to(ctx.opp_pip + pot) {
                    return raise;
                }
            }
            return call_or_check(ctx);
        }

        if draw.draw.is_some() {
            if should_call(equity, odds) {
                if ctx.can(ActionKind::Call) {
                    log::debug!(
                        "draw call: outs={} equity={:.2} odds={:.2} ev={:+.1}",
                        draw.outs,
                        equity,
                        odds,
                        expected_value(equity, cost, pot)
                    );
                    return Action::Call;
                }
                return ctx.fallback();
            }
            if in_position && draw.outs >= 8 && chance(rng, 0.15) {
                if let Some(raise) = ctx.min_raise() {
                    return raise;
                }
            }
            return fold_or_check(ctx);
        }

        if bucket.is_medium() {
            let mut adjusted = equity;
            if hints.call_lighter {
                adjusted *= 1.2;
            }
            if hints.fold_more {
                adjusted *= 0.9;
            }
            if adjusted > odds && ctx.can(ActionKind::Call) {
                return Action::Call;
            }
            return fold_or_check(ctx);
        }

        if odds <= 0.20 && chance(rng, 0.10) && ctx.can(ActionKind::Call) {
            return Action::Call;
        }
        fold_or_check(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Street;
    use crate::policy::context::tests::ctx;
    use rand::rngs::mock::StepRng;

    const BETTING: [ActionKind; 3] = [ActionKind::Fold, ActionKind::Call, ActionKind::Raise];
    const UNOPENED: [ActionKind; 2] = [ActionKind::Check, ActionKind::Raise];

    /// Draws 0.0: every probabilistic branch fires.
    fn always() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Draws just under 1.0: no probabilistic branch fires.
    fn never() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn decide(c: &RoundContext, exploits: Option<ExploitAdjustments>, rng: &mut StepRng) -> Action {
        ExploitativePolicy.decide(c, exploits, rng)
    }

    #[test]
    fn test_suited_connectors_unopened_never_fold() {
        for big_blind in [false, true] {
            let mut c = ctx(Street::Preflop, "9h8h7h", "", 2, 2, &UNOPENED);
            c.big_blind = big_blind;
            for action in [decide(&c, None, &mut always()), decide(&c, None, &mut never())] {
                assert!(matches!(action, Action::Check | Action::Raise(_)), "{:?}", action);
                if let Action::Raise(t) = action {
                    assert!((4..=100).contains(&t));
                }
            }
        }
    }

    #[test]
    fn test_full_house_river_facing_bet() {
        let c = ctx(Street::River, "KhKs", "Kd9c9h4s2d", 10, 30, &BETTING);
        assert_eq!(postflop_evaluate(&c.all_cards()).bucket, HandBucket::VeryStrong);
        assert_eq!(decide(&c, None, &mut always()), Action::Raise(70));
        assert_eq!(decide(&c, None, &mut never()), Action::Call);
    }

    #[test]
    fn test_flush_draw_turn_facing_pot_bet_folds() {
        // Pot odds 0.5 against 9 outs with one card to come (0.35 combined).
        let c = ctx(Street::Turn, "AhKh", "9h4h2c7s", 0, 40, &BETTING);
        let draw = count_outs(&c.hand, &c.board);
        assert_eq!(draw.outs, 9);
        assert!(pot_odds(c.continue_cost(), c.pot()) > draw_equity(draw.outs, 1));
        assert_eq!(decide(&c, None, &mut never()), Action::Fold);

        // Semi-bluff trigger.
        assert_eq!(decide(&c, None, &mut always()), Action::Raise(42));
    }

    #[test]
    fn test_draw_calls_with_odds() {
        // Flop flush draw: equity 0.36 against pot odds 0.17.
        let c = ctx(Street::Flop, "AhKh", "9h4h2c", 20, 30, &BETTING);
        assert_eq!(decide(&c, None, &mut never()), Action::Call);
    }

    #[test]
    fn test_preflop_top_tier_facing_raise() {
        let c = ctx(Street::Preflop, "AhAsKd", "", 2, 6, &BETTING);
        assert!(matches!(decide(&c, None, &mut always()), Action::Raise(_)));
        assert_eq!(decide(&c, None, &mut never()), Action::Call);
    }

    #[test]
    fn test_preflop_out_of_position_call_or_fold() {
        let mut c = ctx(Street::Preflop, "9c5d2h", "", 2, 6, &BETTING);
        c.big_blind = true;
        assert_eq!(decide(&c, None, &mut always()), Action::Fold);

        // Strength around 0.45 with cheap odds calls.
        let mut c = ctx(Street::Preflop, "AcTd3h", "", 2, 4, &BETTING);
        c.big_blind = true;
        assert!(preflop_strength(&c.hand) >= 0.40);
        assert_eq!(decide(&c, None, &mut never()), Action::Call);
    }

    #[test]
    fn test_preflop_in_position_bluff() {
        let c = ctx(Street::Preflop, "9c5d2h", "", 1, 2, &BETTING);
        assert_eq!(decide(&c, None, &mut always()), Action::Raise(4));
        assert_eq!(decide(&c, None, &mut never()), Action::Fold);
    }

    #[test]
    fn test_value_bet_sizing() {
        let c = ctx(Street::Flop, "KhKs", "Kd9c2h", 20, 20, &UNOPENED);
        // Strong bucket: 0.75 * 0.8 * 40 = 24.
        assert_eq!(decide(&c, None, &mut always()), Action::Raise(44));
        assert_eq!(decide(&c, None, &mut never()), Action::Check);

        let bigger = ExploitAdjustments { value_bet_bigger: true, ..Default::default() };
        assert_eq!(decide(&c, Some(bigger), &mut always()), Action::Raise(50));
    }

    #[test]
    fn test_medium_stab_frequency() {
        // A draw of 0.4 fires 0.50 but not 0.30.
        let mut rng = StepRng::new((0.4 * u64::MAX as f64) as u64, 0);
        let c = ctx(Street::Flop, "8h8s", "Kd4c2h", 20, 20, &UNOPENED);
        assert_eq!(decide(&c, None, &mut rng), Action::Check);

        let bluff = ExploitAdjustments { bluff_more: true, ..Default::default() };
        let mut rng = StepRng::new((0.4 * u64::MAX as f64) as u64, 0);
        assert_eq!(decide(&c, Some(bluff), &mut rng), Action::Raise(22));
    }

    #[test]
    fn test_medium_call_adjusted_by_hints() {
        // Top pair of eights: equity 0.40 vs odds 0.375.
        let c = ctx(Street::River, "8h9s", "8dKc4h3s2c", 10, 40, &BETTING);
        assert_eq!(decide(&c, None, &mut never()), Action::Call);

        let fold_more = ExploitAdjustments { fold_more: true, ..Default::default() };
        assert_eq!(decide(&c, Some(fold_more), &mut never()), Action::Fold);
    }

    #[test]
    fn test_weak_speculative_call() {
        let c = ctx(Street::River, "7h2s", "KdJc9h4s3c", 40, 50, &BETTING);
        assert_eq!(decide(&c, None, &mut always()), Action::Call);
        assert_eq!(decide(&c, None, &mut never()), Action::Fold);
    }
}
