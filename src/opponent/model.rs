//! Sliding-window opponent profiling and exploit hints.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::window::SlidingWindow;
use crate::bot::config::OpponentConfig;
use crate::policy::action::ActionKind;

/// Base playing style derived from VPIP/PFR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StyleKind {
    /// Too few samples to classify.
    Unknown,
    /// Loose and passive.
    Fish,
    /// Loose and aggressive.
    Lag,
    /// Very tight.
    Nity,
    /// Tight and aggressive.
    Tag,
    /// None of the above.
    Balanced,
}

/// How the opponent reacts to aggression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tendency {
    /// Folds to raises too often.
    Weak,
    /// Rarely folds to raises.
    Sticky,
}

/// Style label: a base kind plus an optional tendency suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpponentStyle {
    /// Base style.
    pub kind: StyleKind,
    /// Postflop tendency, when one stands out.
    pub tendency: Option<Tendency>,
}

impl OpponentStyle {
    /// Style before enough samples exist.
    pub const UNKNOWN: Self = Self { kind: StyleKind::Unknown, tendency: None };

    /// Check whether a classification has been made.
    pub fn is_known(&self) -> bool {
        self.kind != StyleKind::Unknown
    }
}

impl Default for OpponentStyle {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Display for OpponentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = match self.kind {
            StyleKind::Unknown => return f.write_str("unknown"),
            StyleKind::Fish => "FISH",
            StyleKind::Lag => "LAG",
            StyleKind::Nity => "NITY",
            StyleKind::Tag => "TAG",
            StyleKind::Balanced => "BALANCED",
        };
        match self.tendency {
            Some(Tendency::Weak) => write!(f, "{base}_WEAK"),
            Some(Tendency::Sticky) => write!(f, "{base}_STICKY"),
            None => f.write_str(base),
        }
    }
}

/// Directions in which to deviate against the current opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExploitAdjustments {
    /// Stab more often in position.
    pub bluff_more: bool,
    /// Size value bets up.
    pub value_bet_bigger: bool,
    /// Continue with weaker made hands.
    pub call_lighter: bool,
    /// Give up marginal hands sooner.
    pub fold_more: bool,
}

/// Snapshot of the observed rates, for logging and reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpponentStats {
    /// Fraction of rounds the opponent put chips in voluntarily preflop.
    pub vpip: f64,
    /// Fraction of rounds the opponent raised preflop.
    pub pfr: f64,
    /// Fraction of faced bets the opponent folded to.
    pub fold_to_raise: f64,
    /// Fraction of faced bets the opponent raised.
    pub aggression: f64,
    /// Current classification.
    pub style: OpponentStyle,
    /// Sample coverage of the window, 0 to 1.
    pub confidence: f64,
}

/// Rolling behavioral model of the single opponent in a match.
///
/// Observations go into four sliding windows; the style label and confidence
/// are recomputed only at `end_hand`.
#[derive(Debug, Clone)]
pub struct OpponentModel {
    vpip: SlidingWindow,
    pfr: SlidingWindow,
    fold_to_raise: SlidingWindow,
    aggression: SlidingWindow,
    min_samples: usize,
    confidence_floor: f64,
    style: OpponentStyle,
    confidence: f64,
}

impl OpponentModel {
    /// Create an empty model.
    pub fn new(config: &OpponentConfig) -> Self {
        Self {
            vpip: SlidingWindow::new(config.window_size),
            pfr: SlidingWindow::new(config.window_size),
            fold_to_raise: SlidingWindow::new(config.window_size),
            aggression: SlidingWindow::new(config.window_size),
            min_samples: config.min_samples,
            confidence_floor: config.confidence_floor,
            style: OpponentStyle::UNKNOWN,
            confidence: 0.0,
        }
    }

    /// Record a preflop decision. Only voluntary decisions are sampled.
    pub fn record_preflop_action(&mut self, kind: ActionKind, voluntary: bool) {
        if voluntary {
            self.vpip.push(matches!(kind, ActionKind::Call | ActionKind::Raise));
            self.pfr.push(kind == ActionKind::Raise);
        }
    }

    /// Record a postflop decision. Only decisions facing a bet are sampled.
    pub fn record_postflop_action(&mut self, kind: ActionKind, faced_bet: bool) {
        if faced_bet {
            self.fold_to_raise.push(kind == ActionKind::Fold);
            self.aggression.push(kind == ActionKind::Raise);
        }
    }

    /// Recompute the style label and confidence at the end of a round.
    pub fn end_hand(&mut self) {
        let samples = self.vpip.len();
        if samples < self.min_samples {
            self.style = OpponentStyle::UNKNOWN;
            self.confidence = 0.0;
            return;
        }

        let vpip = self.vpip.rate_or(0.0);
        let pfr = self.pfr.rate_or(0.0);
        let fold_to_raise = self.fold_to_raise.rate_or(0.5);

        let kind = if vpip > 0.70 {
            if pfr < 0.50 {
                StyleKind::Fish
            } else {
                StyleKind::Lag
            }
        } else if vpip < 0.25 {
            StyleKind::Nity
        } else if pfr > 0.40 {
            StyleKind::Tag
        } else {
            StyleKind::Balanced
        };

        let tendency = if fold_to_raise > 0.75 {
            Some(Tendency::Weak)
        } else if fold_to_raise < 0.20 {
            Some(Tendency::Sticky)
        } else {
            None
        };

        self.style = OpponentStyle { kind, tendency };
        self.confidence = (samples as f64 / self.vpip.capacity() as f64).min(1.0);
    }

    /// Current style label.
    pub fn style(&self) -> OpponentStyle {
        self.style
    }

    /// Confidence in [0, 1], proportional to the VPIP sample count.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Exploit hints, or `None` while confidence is below the floor.
    ///
    /// Stickiness always cancels bluffing.
    pub fn exploit_adjustments(&self) -> Option<ExploitAdjustments> {
        if self.confidence < self.confidence_floor {
            return None;
        }

        let mut adjustments = ExploitAdjustments::default();
        let OpponentStyle { kind, tendency } = self.style;

        if kind == StyleKind::Fish {
            adjustments.value_bet_bigger = true;
            adjustments.fold_more = true;
        } else if kind == StyleKind::Nity || tendency == Some(Tendency::Weak) {
            adjustments.bluff_more = true;
        } else if kind == StyleKind::Lag {
            adjustments.call_lighter = true;
        }

        if tendency == Some(Tendency::Sticky) {
            adjustments.bluff_more = false;
        }

        Some(adjustments)
    }

    /// Observed rates, or `None` before the first VPIP sample.
    pub fn stats(&self) -> Option<OpponentStats> {
        if self.vpip.is_empty() {
            return None;
        }
        Some(OpponentStats {
            vpip: self.vpip.rate_or(0.0),
            pfr: self.pfr.rate_or(0.0),
            fold_to_raise: self.fold_to_raise.rate_or(0.5),
            aggression: self.aggression.rate_or(0.0),
            style: self.style,
            confidence: self.confidence,
        })
    }
}

impl Default for OpponentModel {
    fn default() -> Self {
        Self::new(&OpponentConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed `n` voluntary preflop decisions, `calls` of them calls and
    /// `raises` of them raises, the rest folds.
    fn feed_preflop(model: &mut OpponentModel, n: usize, calls: usize, raises: usize) {
        for i in 0..n {
            let kind = if i < raises {
                ActionKind::Raise
            } else if i < raises + calls {
                ActionKind::Call
            } else {
                ActionKind::Fold
            };
            model.record_preflop_action(kind, true);
        }
    }

    #[test]
    fn test_empty_model() {
        let mut model = OpponentModel::default();
        model.end_hand();
        assert_eq!(model.style(), OpponentStyle::UNKNOWN);
        assert_eq!(model.confidence(), 0.0);
        assert_eq!(model.exploit_adjustments(), None);
        assert_eq!(model.stats(), None);
    }

    #[test]
    fn test_confidence_requires_min_samples() {
        let mut model = OpponentModel::default();
        feed_preflop(&mut model, 9, 5, 0);
        model.end_hand();
        assert_eq!(model.confidence(), 0.0);
        assert!(!model.style().is_known());

        feed_preflop(&mut model, 1, 1, 0);
        model.end_hand();
        assert!(model.confidence() > 0.0);
        assert!((model.confidence() - 10.0 / 60.0).abs() < 1e-12);
        assert!(model.style().is_known());
    }

    #[test]
    fn test_involuntary_actions_ignored() {
        let mut model = OpponentModel::default();
        model.record_preflop_action(ActionKind::Call, false);
        model.record_postflop_action(ActionKind::Fold, false);
        assert_eq!(model.stats(), None);
    }

    #[test]
    fn test_classification() {
        let mut fish = OpponentModel::default();
        feed_preflop(&mut fish, 60, 50, 5);
        fish.end_hand();
        assert_eq!(fish.style().kind, StyleKind::Fish);
        assert_eq!(fish.confidence(), 1.0);

        let mut lag = OpponentModel::default();
        feed_preflop(&mut lag, 60, 10, 40);
        lag.end_hand();
        assert_eq!(lag.style().kind, StyleKind::Lag);

        let mut nit = OpponentModel::default();
        feed_preflop(&mut nit, 60, 5, 5);
        nit.end_hand();
        assert_eq!(nit.style().kind, StyleKind::Nity);

        let mut tag = OpponentModel::default();
        feed_preflop(&mut tag, 60, 5, 30);
        tag.end_hand();
        assert_eq!(tag.style().kind, StyleKind::Tag);

        let mut balanced = OpponentModel::default();
        feed_preflop(&mut balanced, 60, 20, 10);
        balanced.end_hand();
        assert_eq!(balanced.style().kind, StyleKind::Balanced);
        assert_eq!(balanced.style().to_string(), "BALANCED");
    }

    #[test]
    fn test_tendency_suffixes() {
        let mut weak = OpponentModel::default();
        feed_preflop(&mut weak, 60, 20, 10);
        for _ in 0..10 {
            weak.record_postflop_action(ActionKind::Fold, true);
        }
        weak.end_hand();
        assert_eq!(weak.style().to_string(), "BALANCED_WEAK");

        let mut sticky = OpponentModel::default();
        feed_preflop(&mut sticky, 60, 50, 5);
        for _ in 0..10 {
            sticky.record_postflop_action(ActionKind::Call, true);
        }
        sticky.end_hand();
        assert_eq!(sticky.style().to_string(), "FISH_STICKY");
        assert_eq!(sticky.stats().unwrap().aggression, 0.0);
    }

    #[test]
    fn test_exploit_adjustments() {
        let mut fish = OpponentModel::default();
        feed_preflop(&mut fish, 60, 50, 5);
        fish.end_hand();
        let adj = fish.exploit_adjustments().unwrap();
        assert!(adj.value_bet_bigger && adj.fold_more);
        assert!(!adj.bluff_more && !adj.call_lighter);

        let mut nit = OpponentModel::default();
        feed_preflop(&mut nit, 60, 5, 5);
        nit.end_hand();
        assert!(nit.exploit_adjustments().unwrap().bluff_more);

        let mut lag = OpponentModel::default();
        feed_preflop(&mut lag, 60, 10, 40);
        lag.end_hand();
        assert!(lag.exploit_adjustments().unwrap().call_lighter);

        // Sticky overrides the nit's bluffing hint.
        let mut sticky_nit = OpponentModel::default();
        feed_preflop(&mut sticky_nit, 60, 5, 5);
        for _ in 0..10 {
            sticky_nit.record_postflop_action(ActionKind::Call, true);
        }
        sticky_nit.end_hand();
        assert_eq!(sticky_nit.style().to_string(), "NITY_STICKY");
        assert!(!sticky_nit.exploit_adjustments().unwrap().bluff_more);
    }

    #[test]
    fn test_confidence_floor_gates_hints() {
        let mut model = OpponentModel::default();
        feed_preflop(&mut model, 14, 2, 1);
        model.end_hand();
        assert!(model.confidence() > 0.0 && model.confidence() < 0.25);
        assert_eq!(model.exploit_adjustments(), None);

        feed_preflop(&mut model, 1, 0, 0);
        model.end_hand();
        assert!(model.exploit_adjustments().is_some());
    }
}
