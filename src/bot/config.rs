//! Configuration for the bot and the match it plays.
//!
//! Every threshold the decision engine uses outside the policy tables lives
//! here, so a match can be replayed or tuned from a JSON file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::policy::PolicyKind;

/// Top-level bot configuration.
///
/// # Example
/// ```
/// use rust_pokerbot::bot::BotConfig;
/// use rust_pokerbot::policy::PolicyKind;
///
/// let config = BotConfig::default().with_seed(7).with_policy(PolicyKind::Heuristic);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.opponent.window_size, 60);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Strategy used for every decision.
    pub policy: PolicyKind,

    /// Random seed for the mixed-strategy draws.
    ///
    /// If `None`, the session seeds from entropy.
    pub seed: Option<u64>,

    /// Hands that must be played before exploit hints are consulted.
    pub exploit_min_hands: u32,

    /// Rounds between opponent-stats log lines. Zero disables them.
    pub stats_log_interval: u32,

    /// Opponent profiling parameters.
    pub opponent: OpponentConfig,

    /// Bankroll protection thresholds.
    pub guard: GuardConfig,

    /// Match constants of the engine.
    pub stakes: StakesConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::Exploitative,
            seed: None,
            exploit_min_hands: 10,
            stats_log_interval: 50,
            opponent: OpponentConfig::default(),
            guard: GuardConfig::default(),
            stakes: StakesConfig::default(),
        }
    }
}

/// Sliding-window opponent model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    /// Observations kept per statistic.
    pub window_size: usize,
    /// VPIP samples required before a style is assigned.
    pub min_samples: usize,
    /// Confidence below which no exploit hints are produced.
    pub confidence_floor: f64,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self { window_size: 60, min_samples: 10, confidence_floor: 0.25 }
    }
}

/// Bankroll guard thresholds, in chips of bankroll delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Whether the guard may override the policy at all.
    pub enabled: bool,
    /// Lead at which the endgame lock-in rule applies.
    pub secure_threshold: i64,
    /// Lead at which preflop play tightens.
    pub lock_threshold: i64,
    /// Remaining rounds below which the lock-in rule applies.
    pub endgame_rounds: u32,
    /// Preflop strength needed to keep playing once locked.
    pub lock_min_strength: f64,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            secure_threshold: 300,
            lock_threshold: 150,
            endgame_rounds: 100,
            lock_min_strength: 0.75,
        }
    }
}

/// Blinds, stacks and match length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StakesConfig {
    /// Rounds in a match.
    pub num_rounds: u32,
    /// Stack each player starts every round with.
    pub starting_stack: u32,
    /// Small blind posted by the button.
    pub small_blind: u32,
    /// Big blind posted by the other seat.
    pub big_blind: u32,
}

impl Default for StakesConfig {
    fn default() -> Self {
        Self { num_rounds: 1000, starting_stack: 400, small_blind: 1, big_blind: 2 }
    }
}

impl BotConfig {
    /// Create a new BotConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set the policy.
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    /// Builder method: enable or disable the bankroll guard.
    pub fn with_guard(mut self, enabled: bool) -> Self {
        self.guard.enabled = enabled;
        self
    }

    /// Parse a configuration from JSON and validate it.
    ///
    /// Missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let opp = &self.opponent;
        if opp.min_samples == 0 || opp.min_samples > opp.window_size {
            return Err(ConfigError::InvalidWindow {
                window: opp.window_size,
                min_samples: opp.min_samples,
            });
        }
        if !(0.0..=1.0).contains(&opp.confidence_floor) {
            return Err(ConfigError::InvalidProbability("confidence_floor", opp.confidence_floor));
        }
        if !(0.0..=1.0).contains(&self.guard.lock_min_strength) {
            return Err(ConfigError::InvalidProbability(
                "lock_min_strength",
                self.guard.lock_min_strength,
            ));
        }
        if self.guard.lock_threshold > self.guard.secure_threshold {
            return Err(ConfigError::InvalidThreshold {
                lock: self.guard.lock_threshold,
                secure: self.guard.secure_threshold,
            });
        }

        let stakes = &self.stakes;
        if stakes.small_blind == 0
            || stakes.big_blind < stakes.small_blind
            || stakes.starting_stack < stakes.big_blind
            || stakes.num_rounds == 0
        {
            return Err(ConfigError::InvalidStakes(format!(
                "{} rounds, stack {}, blinds {}/{}",
                stakes.num_rounds, stakes.starting_stack, stakes.small_blind, stakes.big_blind
            )));
        }

        Ok(())
    }
}

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed.
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON is malformed.
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Minimum samples must lie in `1..=window`.
    #[error("minimum samples {min_samples} must be between 1 and the window size {window}")]
    InvalidWindow {
        /// Configured window size.
        window: usize,
        /// Configured minimum samples.
        min_samples: usize,
    },

    /// A named probability-like value outside `[0, 1]`.
    #[error("{0} {1} is out of range [0, 1]")]
    InvalidProbability(&'static str, f64),

    /// The lock threshold must not exceed the secure threshold.
    #[error("lock threshold {lock} exceeds secure threshold {secure}")]
    InvalidThreshold {
        /// Configured lock threshold.
        lock: i64,
        /// Configured secure threshold.
        secure: i64,
    },

    /// Blinds, stack or round count are inconsistent.
    #[error("invalid stakes: {0}")]
    InvalidStakes(String),
}
