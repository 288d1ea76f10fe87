//! Action selection.
//!
//! A policy is stateless given its inputs: the `RoundContext`, the current
//! exploit hints, and a random source for mixed strategies. The discard,
//! preflop and postflop states are selected from the context alone.
//!
//! ## Modules
//!
//! - `action`: Action, ActionKind and the legal-action set
//! - `context`: Per-decision RoundContext with legality helpers
//! - `discard`: Retention scoring for the discard phase
//! - `exploitative`: Pot-odds/EV policy that uses opponent hints
//! - `heuristic`: Fixed-threshold policy

/// Actions and legal-action sets.
pub mod action;
/// Per-decision snapshot.
pub mod context;
/// Discard scoring.
pub mod discard;
/// Opponent-aware policy.
pub mod exploitative;
/// Fixed-heuristic policy.
pub mod heuristic;

pub use action::{Action, ActionKind, LegalActions};
pub use context::RoundContext;
pub use discard::{choose_discard, retention_scores};
pub use exploitative::ExploitativePolicy;
pub use heuristic::HeuristicPolicy;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cards::Street;
use crate::opponent::ExploitAdjustments;

/// Uniform draw on [0, 1) compared against `probability`.
#[inline]
pub(crate) fn chance(rng: &mut dyn RngCore, probability: f64) -> bool {
    rng.gen::<f64>() < probability
}

/// A pluggable strategy.
///
/// Implementors supply the preflop and postflop logic; discard selection and
/// dispatch are shared. `decide` always returns a legal action.
pub trait ActionPolicy: Send + Sync {
    /// Name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Pick an action before the flop.
    fn preflop(&self, ctx: &RoundContext, rng: &mut dyn RngCore) -> Action;

    /// Pick an action once the board is out.
    fn postflop(
        &self,
        ctx: &RoundContext,
        exploits: Option<ExploitAdjustments>,
        rng: &mut dyn RngCore,
    ) -> Action;

    /// Pick the hole card to throw away.
    fn discard(&self, ctx: &RoundContext) -> Action {
        Action::Discard(choose_discard(&ctx.hand, &ctx.board))
    }

    /// Dispatch on the decision state and repair anything illegal.
    fn decide(
        &self,
        ctx: &RoundContext,
        exploits: Option<ExploitAdjustments>,
        rng: &mut dyn RngCore,
    ) -> Action {
        let proposed = if ctx.is_discard_phase() {
            self.discard(ctx)
        } else if ctx.legal.len() == 1 {
            ctx.fallback()
        } else if ctx.street == Street::Preflop {
            self.preflop(ctx, rng)
        } else {
            self.postflop(ctx, exploits, rng)
        };
        ctx.legalize(proposed)
    }
}

/// Selectable policy implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    /// EV and opponent-aware play.
    Exploitative,
    /// Fixed strength tiers.
    Heuristic,
}

impl PolicyKind {
    /// Instantiate the policy.
    pub fn build(&self) -> Box<dyn ActionPolicy> {
        match self {
            PolicyKind::Exploitative => Box::new(ExploitativePolicy),
            PolicyKind::Heuristic => Box::new(HeuristicPolicy),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Exploitative => write!(f, "exploitative"),
            PolicyKind::Heuristic => write!(f, "heuristic"),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exploitative" | "ev" => Ok(PolicyKind::Exploitative),
            "heuristic" | "simple" => Ok(PolicyKind::Heuristic),
            other => Err(format!("unknown policy '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::context::tests::ctx;
    use super::*;
    use crate::cards::{Board, Deck, Hand};
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn random_context(rng: &mut StdRng) -> RoundContext {
        let mut deck = Deck::shuffled(rng);
        let street = *[Street::Preflop, Street::Flop, Street::Turn, Street::River]
            .choose(rng)
            .unwrap();
        let discard = street == Street::Preflop && rng.gen_bool(0.2);
        let hand_size = if street == Street::Preflop { 3 } else { 2 };
        let hand = Hand::new(deck.deal_n(hand_size)).unwrap();
        let board = Board::from_cards(deck.deal_n(street.num_board_cards())).unwrap();

        let mut kinds: Vec<ActionKind> = if discard {
            vec![ActionKind::Discard]
        } else {
            [ActionKind::Fold, ActionKind::Check, ActionKind::Call, ActionKind::Raise]
                .into_iter()
                .filter(|_| rng.gen_bool(0.6))
                .collect()
        };
        if kinds.is_empty() {
            kinds.push(ActionKind::Check);
        }
        let legal = LegalActions::from_kinds(&kinds);

        let my_pip = rng.gen_range(0..50);
        let opp_pip = my_pip + if rng.gen_bool(0.5) { rng.gen_range(0..80) } else { 0 };
        let min = rng.gen_range(0..300);
        let max = rng.gen_range(min..=400);

        RoundContext {
            street,
            hand,
            board,
            my_pip,
            opp_pip,
            my_stack: 400 - opp_pip,
            opp_stack: 400 - opp_pip,
            legal,
            raise_bounds: legal.contains(ActionKind::Raise).then_some((min, max)),
            big_blind: rng.gen_bool(0.5),
        }
    }

    fn assert_legal(ctx: &RoundContext, action: Action) {
        assert!(ctx.legal.contains(action.kind()), "{:?} not in {:?}", action, ctx.legal);
        if let Action::Raise(target) = action {
            let (min, max) = ctx.raise_bounds.unwrap();
            assert!(target >= min && target <= max, "{} outside [{}, {}]", target, min, max);
        }
        if let Action::Discard(index) = action {
            assert!(index < ctx.hand.len());
        }
    }

    #[test]
    fn test_decide_always_legal() {
        let mut rng = StdRng::seed_from_u64(2024);
        let policies = [PolicyKind::Exploitative.build(), PolicyKind::Heuristic.build()];
        let hints = [
            None,
            Some(ExploitAdjustments::default()),
            Some(ExploitAdjustments { bluff_more: true, value_bet_bigger: true, ..Default::default() }),
            Some(ExploitAdjustments { call_lighter: true, fold_more: true, ..Default::default() }),
        ];

        for i in 0..5000 {
            let context = random_context(&mut rng);
            assert!(context.validate().is_ok());
            for policy in &policies {
                let action = policy.decide(&context, hints[i % hints.len()], &mut rng);
                assert_legal(&context, action);
            }
        }
    }

    #[test]
    fn test_decide_legal_with_extreme_draws() {
        let mut rng = StdRng::seed_from_u64(99);
        let policy = ExploitativePolicy;
        for _ in 0..2000 {
            let context = random_context(&mut rng);
            let mut always = StepRng::new(0, 0);
            let mut never = StepRng::new(u64::MAX, 0);
            assert_legal(&context, policy.decide(&context, None, &mut always));
            assert_legal(&context, policy.decide(&context, None, &mut never));
        }
    }

    #[test]
    fn test_unchecked_bounds_do_not_overflow() {
        let policies = [PolicyKind::Exploitative.build(), PolicyKind::Heuristic.build()];
        let bounds = [(100, 10), (u32::MAX - 1, u32::MAX), (0, u32::MAX)];
        let spots = [
            (Street::Preflop, "AhAsKd", "", 1, 2),
            (Street::Flop, "AhAs", "AdKc2h", 0, 10),
            (Street::River, "KhKs", "Kd9c9h4s2d", 0, 0),
        ];
        for (street, hand, board, my_pip, opp_pip) in spots {
            let kinds = [ActionKind::Fold, ActionKind::Check, ActionKind::Call, ActionKind::Raise];
            let mut c = ctx(street, hand, board, my_pip, opp_pip, &kinds);
            for b in bounds {
                c.raise_bounds = Some(b);
                for policy in &policies {
                    for mut rng in [StepRng::new(0, 0), StepRng::new(u64::MAX, 0)] {
                        let action = policy.decide(&c, None, &mut rng);
                        assert!(c.legal.contains(action.kind()), "{:?} with bounds {:?}", action, b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_single_legal_action() {
        let mut rng = StepRng::new(0, 0);
        let c = ctx(Street::River, "AhAs", "AdAc2h3h4s", 0, 10, &[ActionKind::Call]);
        assert_eq!(ExploitativePolicy.decide(&c, None, &mut rng), Action::Call);

        let c = ctx(Street::Flop, "2h7s", "9dQc4h", 0, 0, &[ActionKind::Check]);
        assert_eq!(HeuristicPolicy.decide(&c, None, &mut rng), Action::Check);
    }

    #[test]
    fn test_discard_dispatch() {
        let mut rng = StepRng::new(0, 0);
        let c = ctx(Street::Preflop, "7h7s2d", "", 2, 2, &[ActionKind::Discard]);
        assert_eq!(ExploitativePolicy.decide(&c, None, &mut rng), Action::Discard(2));
        assert_eq!(HeuristicPolicy.decide(&c, None, &mut rng), Action::Discard(2));
    }

    #[test]
    fn test_policy_kind_parse() {
        assert_eq!("heuristic".parse::<PolicyKind>(), Ok(PolicyKind::Heuristic));
        assert_eq!("EV".parse::<PolicyKind>(), Ok(PolicyKind::Exploitative));
        assert!("gto".parse::<PolicyKind>().is_err());
        assert_eq!(PolicyKind::Exploitative.build().name(), "exploitative");
        assert_eq!(PolicyKind::default(), PolicyKind::Exploitative);
    }
}
