//! Per-decision snapshot supplied by the engine.

use super::action::{Action, ActionKind, LegalActions};
use crate::cards::{Board, Card, Hand, Street};
use crate::error::BotError;

/// Smallest raise increment, one big blind.
const FALLBACK_RAISE_STEP: u32 = 2;

/// Everything the policy may look at for a single decision.
///
/// Built fresh by the engine for every decision and never mutated by the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundContext {
    /// Current street.
    pub street: Street,
    /// Hole cards.
    pub hand: Hand,
    /// Community cards.
    pub board: Board,
    /// Chips this player has put in on the current street.
    pub my_pip: u32,
    /// Chips the opponent has put in on the current street.
    pub opp_pip: u32,
    /// Chips this player has behind.
    pub my_stack: u32,
    /// Chips the opponent has behind.
    pub opp_stack: u32,
    /// Kinds the engine accepts for this decision.
    pub legal: LegalActions,
    /// Inclusive raise-target bounds, present whenever raising is legal.
    pub raise_bounds: Option<(u32, u32)>,
    /// Whether this player posted the big blind this round.
    pub big_blind: bool,
}

impl RoundContext {
    /// Check the snapshot is internally consistent.
    pub fn validate(&self) -> Result<(), BotError> {
        if self.legal.is_empty() {
            return Err(BotError::NoLegalActions);
        }
        if self.legal.contains(ActionKind::Raise) {
            let (min, max) = self.raise_bounds.ok_or(BotError::MissingRaiseBounds)?;
            if min > max {
                return Err(BotError::InvalidRaiseBounds { min, max });
            }
        }
        if self.legal.contains(ActionKind::Discard) {
            // The flop may already be on the board.
            if !self.hand.is_pre_discard() {
                return Err(BotError::InvalidHand { expected: "3", actual: self.hand.len() });
            }
            return Ok(());
        }
        if self.street > Street::Preflop && self.hand.is_pre_discard() {
            return Err(BotError::InvalidHand { expected: "2", actual: self.hand.len() });
        }
        if self.board.len() != self.street.num_board_cards() {
            return Err(BotError::InvalidBoard(self.board.len()));
        }
        Ok(())
    }

    /// Chips needed to call.
    #[inline]
    pub fn continue_cost(&self) -> u32 {
        self.opp_pip.saturating_sub(self.my_pip)
    }

    /// Pot as seen by the policies: both pips on this street.
    #[inline]
    pub fn pot(&self) -> u32 {
        self.my_pip + self.opp_pip
    }

    /// The small blind (button) acts last postflop.
    #[inline]
    pub fn in_position(&self) -> bool {
        !self.big_blind
    }

    /// Check if the discard decision is pending.
    pub fn is_discard_phase(&self) -> bool {
        self.legal.contains(ActionKind::Discard)
    }

    /// Check if a kind is legal.
    #[inline]
    pub fn can(&self, kind: ActionKind) -> bool {
        self.legal.contains(kind)
    }

    /// Hole cards followed by board cards.
    pub fn all_cards(&self) -> Vec<Card> {
        self.hand.cards().iter().chain(self.board.cards()).copied().collect()
    }

    /// A raise to `target` clamped into bounds, if raising is legal.
    pub fn raise_to(&self, target: u32) -> Option<Action> {
        if !self.can(ActionKind::Raise) {
            return None;
        }
        let (min, max) = self.raise_bounds?;
        Some(Action::Raise(target.clamp(min, max.max(min))))
    }

    /// A minimum-size raise, if raising is legal.
    pub fn min_raise(&self) -> Option<Action> {
        let (min, _) = self.raise_bounds?;
        self.raise_to(min)
    }

    /// First legal action in `check > call > fold > anything else`.
    pub fn fallback(&self) -> Action {
        [ActionKind::Check, ActionKind::Call, ActionKind::Fold]
            .into_iter()
            .chain(self.legal.iter())
            .find_map(|kind| self.concrete(kind))
            .unwrap_or(Action::Check)
    }

    /// Return `action` if it is legal here, otherwise the fallback.
    ///
    /// Raise targets are clamped into bounds rather than rejected.
    pub fn legalize(&self, action: Action) -> Action {
        let repaired = match action {
            Action::Raise(target) => self.raise_to(target),
            Action::Discard(index) if index < self.hand.len() => {
                self.can(ActionKind::Discard).then_some(action)
            }
            Action::Discard(_) => None,
            other => self.can(other.kind()).then_some(other),
        };
        match repaired {
            Some(legal) => legal,
            None => {
                let fallback = self.fallback();
                log::warn!("illegal action {} replaced by {}", action, fallback);
                fallback
            }
        }
    }

    /// Min-raise target by the match rules when no bounds were supplied,
    /// capped at all-in.
    fn unbounded_min_raise(&self) -> u32 {
        let step = self.continue_cost().max(FALLBACK_RAISE_STEP);
        (self.opp_pip + step).min(self.my_pip + self.my_stack)
    }

    fn concrete(&self, kind: ActionKind) -> Option<Action> {
        if !self.can(kind) {
            return None;
        }
        match kind {
            ActionKind::Fold => Some(Action::Fold),
            ActionKind::Check => Some(Action::Check),
            ActionKind::Call => Some(Action::Call),
            ActionKind::Raise => self.min_raise().or(Some(Action::Raise(self.unbounded_min_raise()))),
            ActionKind::Discard => Some(Action::Discard(0)),
        }
    }
}
