//! Per-match session: the state that outlives a single decision.
//!
//! The engine drives a `MatchSession` through three hooks: `on_round_start`,
//! `decide` (once per decision point) and `on_round_end`. Opponent actions
//! seen during a round are fed through `observe_opponent`.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::config::BotConfig;
use super::guard::{BankrollGuard, BankrollState};
use crate::cards::{Card, Hand, Street};
use crate::error::BotError;
use crate::opponent::{ExploitAdjustments, OpponentModel};
use crate::policy::{Action, ActionKind, ActionPolicy, RoundContext};

/// An opponent decision as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentAction {
    /// Street the action was taken on.
    pub street: Street,
    /// What the opponent did.
    pub kind: ActionKind,
    /// Whether the opponent was facing a bet when acting.
    pub faced_bet: bool,
}

/// Bot state owned for the length of one match.
pub struct MatchSession {
    config: BotConfig,
    policy: Box<dyn ActionPolicy>,
    guard: BankrollGuard,
    opponent: OpponentModel,
    rng: StdRng,
    hands_played: u32,
    bankroll: i64,
    round_num: u32,
    game_clock: f64,
    hand: Option<Hand>,
    big_blind: bool,
    opp_preflop_seen: bool,
}

impl MatchSession {
    /// Create a session from a validated configuration.
    pub fn new(config: BotConfig) -> Result<Self, BotError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            policy: config.policy.build(),
            guard: BankrollGuard::new(config.guard.clone()),
            opponent: OpponentModel::new(&config.opponent),
            rng,
            hands_played: 0,
            bankroll: 0,
            round_num: 0,
            game_clock: 0.0,
            hand: None,
            big_blind: false,
            opp_preflop_seen: false,
            config,
        })
    }

    /// Round start hook.
    pub fn on_round_start(
        &mut self,
        bankroll: i64,
        round_num: u32,
        game_clock: f64,
        hand: &Hand,
        big_blind: bool,
    ) {
        self.hands_played += 1;
        self.bankroll = bankroll;
        self.round_num = round_num;
        self.game_clock = game_clock;
        self.hand = Some(hand.clone());
        self.big_blind = big_blind;
        self.opp_preflop_seen = false;
    }

    /// Round end hook. Updates the bankroll and the opponent model.
    pub fn on_round_end(
        &mut self,
        bankroll_delta: i64,
        final_street: Street,
        my_cards: Option<&Hand>,
        opp_cards: Option<&[Card]>,
    ) {
        self.bankroll += bankroll_delta;
        self.opponent.end_hand();

        if let Some(cards) = opp_cards.filter(|c| !c.is_empty()) {
            let shown: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
            log::debug!(
                "round {} ended on {} ({:+}), showdown {} vs {}",
                self.round_num,
                final_street,
                bankroll_delta,
                my_cards.or(self.hand.as_ref()).map(|h| h.to_string()).unwrap_or_default(),
                shown.join("")
            );
        }

        let interval = self.config.stats_log_interval;
        if interval > 0 && self.round_num % interval == 0 {
            match self.opponent.stats() {
                Some(stats) => log::info!(
                    "round {} | bankroll {:+} | clock {:.1}s | opp {} vpip={:.2} pfr={:.2} ftr={:.2} agg={:.2} conf={:.2}",
                    self.round_num,
                    self.bankroll,
                    self.game_clock,
                    stats.style,
                    stats.vpip,
                    stats.pfr,
                    stats.fold_to_raise,
                    stats.aggression,
                    stats.confidence
                ),
                None => log::info!("round {} | bankroll {:+} | no opponent samples", self.round_num, self.bankroll),
            }
        }
    }

    /// Feed one opponent decision into the model.
    ///
    /// Only the first preflop decision of each round counts as voluntary.
    pub fn observe_opponent(&mut self, action: OpponentAction) {
        if action.kind == ActionKind::Discard {
            return;
        }
        if action.street == Street::Preflop {
            if !self.opp_preflop_seen {
                self.opponent.record_preflop_action(action.kind, true);
                self.opp_preflop_seen = true;
            }
        } else {
            self.opponent.record_postflop_action(action.kind, action.faced_bet);
        }
    }

    /// Choose an action using the session's own random source.
    pub fn decide(&mut self, ctx: &RoundContext) -> Action {
        let state = self.bankroll_state();
        let exploits = self.exploits();
        select(self.policy.as_ref(), &self.guard, ctx, state, exploits, &mut self.rng)
    }

    /// Choose an action drawing randomness from `rng`.
    pub fn decide_with(&self, ctx: &RoundContext, rng: &mut dyn RngCore) -> Action {
        select(self.policy.as_ref(), &self.guard, ctx, self.bankroll_state(), self.exploits(), rng)
    }

    /// Exploit hints, once enough hands have been played.
    pub fn exploits(&self) -> Option<ExploitAdjustments> {
        if self.hands_played >= self.config.exploit_min_hands {
            self.opponent.exploit_adjustments()
        } else {
            None
        }
    }

    /// Current bankroll and rounds left.
    pub fn bankroll_state(&self) -> BankrollState {
        BankrollState {
            bankroll: self.bankroll,
            rounds_remaining: self.config.stakes.num_rounds.saturating_sub(self.round_num),
        }
    }

    /// Opponent model built so far.
    pub fn opponent(&self) -> &OpponentModel {
        &self.opponent
    }

    /// Rounds started this match.
    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }

    /// Bankroll after every finished round.
    pub fn bankroll(&self) -> i64 {
        self.bankroll
    }

    /// Whether this player posted the big blind this round.
    pub fn big_blind(&self) -> bool {
        self.big_blind
    }

    /// Name of the active policy.
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Configuration the session was built with.
    pub fn config(&self) -> &BotConfig {
        &self.config
    }
}

/// Guard first, then the policy. Invalid contexts get the fallback action.
fn select(
    policy: &dyn ActionPolicy,
    guard: &BankrollGuard,
    ctx: &RoundContext,
    state: BankrollState,
    exploits: Option<ExploitAdjustments>,
    rng: &mut dyn RngCore,
) -> Action {
    if let Err(e) = ctx.validate() {
        let fallback = ctx.fallback();
        log::error!("invalid round context ({}), playing {}", e, fallback);
        return fallback;
    }

    if let Some(forced) = guard.check(ctx, state) {
        log::debug!("guard forced {} at bankroll {:+}", forced, state.bankroll);
        return forced;
    }

    let action = policy.decide(ctx, exploits, rng);
    log::debug!("{} {} {} -> {}", policy.name(), ctx.street, ctx.hand, action);
    action
}
