//! Bankroll guard: overrides that lock in a lead.

use super::config::GuardConfig;
use crate::cards::Street;
use crate::policy::{Action, ActionKind, RoundContext};
use crate::strength::preflop_strength;

/// Bankroll and remaining match length at a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BankrollState {
    /// Chips won or lost since the match started.
    pub bankroll: i64,
    /// Rounds left after the current one.
    pub rounds_remaining: u32,
}

/// Conservative overrides applied before the policy.
#[derive(Debug, Clone)]
pub struct BankrollGuard {
    config: GuardConfig,
}

impl BankrollGuard {
    /// Create a guard with the given thresholds.
    pub fn new(config: GuardConfig) -> Self {
        Self { config }
    }

    /// Forced action, if either rule fires.
    ///
    /// Near the end of the match with a secure lead, fold (or check when
    /// folding is not offered). With a smaller lead, fold weak hands preflop.
    /// Neither rule touches the discard decision.
    pub fn check(&self, ctx: &RoundContext, state: BankrollState) -> Option<Action> {
        if !self.config.enabled || ctx.is_discard_phase() {
            return None;
        }

        if state.rounds_remaining < self.config.endgame_rounds
            && state.bankroll >= self.config.secure_threshold
        {
            if ctx.can(ActionKind::Fold) {
                return Some(Action::Fold);
            }
            if ctx.can(ActionKind::Check) {
                return Some(Action::Check);
            }
        }

        if state.bankroll >= self.config.lock_threshold
            && ctx.street == Street::Preflop
            && ctx.can(ActionKind::Fold)
            && preflop_strength(&ctx.hand) < self.config.lock_min_strength
        {
            return Some(Action::Fold);
        }

        None
    }
}
