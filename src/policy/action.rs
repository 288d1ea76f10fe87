//! Actions the bot can emit and the legal-action set the engine supplies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A decision returned to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Give up the round.
    Fold,
    /// Pass when there is nothing to call.
    Check,
    /// Match the opponent's pip.
    Call,
    /// Raise so that this street's pip becomes the given target.
    Raise(u32),
    /// Throw away the hole card at the given index.
    Discard(usize),
}

impl Action {
    /// Get the kind of this action, dropping its payload.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Fold => ActionKind::Fold,
            Action::Check => ActionKind::Check,
            Action::Call => ActionKind::Call,
            Action::Raise(_) => ActionKind::Raise,
            Action::Discard(_) => ActionKind::Discard,
        }
    }

    /// Get the match protocol code for this action.
    pub fn short_code(&self) -> String {
        match self {
            Action::Fold => "F".to_string(),
            Action::Check => "K".to_string(),
            Action::Call => "C".to_string(),
            Action::Raise(target) => format!("R{}", target),
            Action::Discard(index) => format!("D{}", index),
        }
    }

    /// Parse an action from its protocol code.
    pub fn from_short_code(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let head = chars.next()?;
        let rest = chars.as_str();

        match head {
            'F' if rest.is_empty() => Some(Action::Fold),
            'K' if rest.is_empty() => Some(Action::Check),
            'C' if rest.is_empty() => Some(Action::Call),
            'R' => rest.parse().ok().map(Action::Raise),
            'D' => rest.parse().ok().map(Action::Discard),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => write!(f, "Fold"),
            Action::Check => write!(f, "Check"),
            Action::Call => write!(f, "Call"),
            Action::Raise(target) => write!(f, "Raise to {}", target),
            Action::Discard(index) => write!(f, "Discard #{}", index),
        }
    }
}

/// Payload-free action category, as listed in the legal-action set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Give up the round.
    Fold,
    /// Pass with nothing to call.
    Check,
    /// Match the opponent.
    Call,
    /// Raise to a target.
    Raise,
    /// Throw away a hole card.
    Discard,
}

impl ActionKind {
    /// All kinds, in bit order.
    pub const ALL: [ActionKind; 5] = [
        ActionKind::Fold,
        ActionKind::Check,
        ActionKind::Call,
        ActionKind::Raise,
        ActionKind::Discard,
    ];

    #[inline]
    fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Raise => "raise",
            ActionKind::Discard => "discard",
        };
        f.write_str(name)
    }
}

/// Set of currently legal action kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LegalActions(u8);

impl LegalActions {
    /// The empty set.
    pub const NONE: Self = Self(0);

    /// Build a set from a list of kinds.
    pub fn from_kinds(kinds: &[ActionKind]) -> Self {
        kinds.iter().fold(Self::NONE, |set, &kind| set.with(kind))
    }

    /// Copy of this set with `kind` added.
    pub fn with(self, kind: ActionKind) -> Self {
        Self(self.0 | kind.bit())
    }

    /// Check if a kind is legal.
    #[inline]
    pub fn contains(&self, kind: ActionKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Check if nothing is legal.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of legal kinds.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate over legal kinds in bit order.
    pub fn iter(&self) -> impl Iterator<Item = ActionKind> + '_ {
        ActionKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}

impl fmt::Debug for LegalActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_codes() {
        assert_eq!(Action::Fold.short_code(), "F");
        assert_eq!(Action::Check.short_code(), "K");
        assert_eq!(Action::Raise(24).short_code(), "R24");
        assert_eq!(Action::Discard(2).short_code(), "D2");

        assert_eq!(Action::from_short_code("C"), Some(Action::Call));
        assert_eq!(Action::from_short_code("R120"), Some(Action::Raise(120)));
        assert_eq!(Action::from_short_code("D0"), Some(Action::Discard(0)));
        assert_eq!(Action::from_short_code("R"), None);
        assert_eq!(Action::from_short_code("Fx"), None);
        assert_eq!(Action::from_short_code("X"), None);
        assert_eq!(Action::from_short_code(""), None);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Action::Raise(10).kind(), ActionKind::Raise);
        assert_eq!(Action::Discard(1).kind(), ActionKind::Discard);
        assert_eq!(Action::Call.kind(), ActionKind::Call);
    }

    #[test]
    fn test_legal_actions() {
        let legal = LegalActions::from_kinds(&[ActionKind::Fold, ActionKind::Call]);
        assert!(legal.contains(ActionKind::Fold));
        assert!(!legal.contains(ActionKind::Raise));
        assert_eq!(legal.len(), 2);
        assert_eq!(legal.iter().collect::<Vec<_>>(), vec![ActionKind::Fold, ActionKind::Call]);

        let legal = LegalActions::NONE.with(ActionKind::Raise).with(ActionKind::Call);
        assert_eq!(legal.iter().collect::<Vec<_>>(), vec![ActionKind::Call, ActionKind::Raise]);
        assert!(LegalActions::NONE.is_empty());
    }
}
