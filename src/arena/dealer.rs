//! Heads-up dealer with the discard rule, used for self-play.
//!
//! Positions are 0 (small blind, acts first preflop) and 1 (big blind, acts
//! first postflop). Seats swap positions every round.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::time::Instant;

use super::report::MatchReport;
use super::showdown;
use crate::bot::{BotConfig, MatchSession, OpponentAction, StakesConfig};
use crate::cards::{Board, Deck, Hand, Street};
use crate::error::BotError;
use crate::policy::{Action, ActionKind, LegalActions, RoundContext};

/// Betting state of one round, indexed by position.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Current street.
    pub street: Street,
    /// Chips each position has put in on this street.
    pub pips: [u32; 2],
    /// Chips each position has behind.
    pub stacks: [u32; 2],
    /// Hole cards per position.
    pub hands: [Hand; 2],
    /// Community cards dealt so far.
    pub board: Board,
    /// Actions taken on this street; its parity is the active position.
    button: u32,
    big_blind: u32,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Position that folded.
    Fold(usize),
    /// Both players reached the river and showed down.
    Showdown,
}

/// What happens after an action is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Continue,
    StreetClosed,
    Over(RoundOutcome),
}

impl RoundState {
    /// Post blinds and hand out the hole cards.
    pub fn new(hands: [Hand; 2], stakes: &StakesConfig) -> Self {
        let pips = [stakes.small_blind, stakes.big_blind];
        Self {
            street: Street::Preflop,
            stacks: [stakes.starting_stack - pips[0], stakes.starting_stack - pips[1]],
            pips,
            hands,
            board: Board::new(),
            button: 0,
            big_blind: stakes.big_blind,
        }
    }

    /// Position to act.
    pub fn active(&self) -> usize {
        (self.button % 2) as usize
    }

    /// Legal kinds for the active position.
    pub fn legal_actions(&self) -> LegalActions {
        let me = self.active();
        let cost = self.continue_cost(me);
        let mut legal = if cost == 0 {
            LegalActions::from_kinds(&[ActionKind::Check])
        } else {
            LegalActions::from_kinds(&[ActionKind::Fold, ActionKind::Call])
        };

        let raise_forbidden = if cost == 0 {
            self.stacks[0] == 0 || self.stacks[1] == 0
        } else {
            cost >= self.stacks[me] || self.stacks[1 - me] == 0
        };
        if !raise_forbidden {
            legal = legal.with(ActionKind::Raise);
        }
        legal
    }

    /// Inclusive raise-target bounds for the active position.
    pub fn raise_bounds(&self) -> (u32, u32) {
        let me = self.active();
        let cost = self.continue_cost(me);
        let max_contribution = self.stacks[me].min(self.stacks[1 - me] + cost);
        let min_contribution = max_contribution.min(cost + cost.max(self.big_blind));
        (self.pips[me] + min_contribution, self.pips[me] + max_contribution)
    }

    fn continue_cost(&self, position: usize) -> u32 {
        self.pips[1 - position].saturating_sub(self.pips[position])
    }

    /// Snapshot for a betting decision of the active position.
    pub fn context(&self) -> RoundContext {
        let me = self.active();
        let legal = self.legal_actions();
        RoundContext {
            street: self.street,
            hand: self.hands[me].clone(),
            board: self.board.clone(),
            my_pip: self.pips[me],
            opp_pip: self.pips[1 - me],
            my_stack: self.stacks[me],
            opp_stack: self.stacks[1 - me],
            legal,
            raise_bounds: legal.contains(ActionKind::Raise).then(|| self.raise_bounds()),
            big_blind: me == 1,
        }
    }

    /// Snapshot for the discard decision of `position`.
    pub fn discard_context(&self, position: usize) -> RoundContext {
        RoundContext {
            street: Street::Preflop,
            hand: self.hands[position].clone(),
            board: self.board.clone(),
            my_pip: 0,
            opp_pip: 0,
            my_stack: self.stacks[position],
            opp_stack: self.stacks[1 - position],
            legal: LegalActions::from_kinds(&[ActionKind::Discard]),
            raise_bounds: None,
            big_blind: position == 1,
        }
    }

    /// Check whether `action` is allowed for the active position.
    pub fn is_legal(&self, action: Action) -> bool {
        if !self.legal_actions().contains(action.kind()) {
            return false;
        }
        match action {
            Action::Raise(target) => {
                let (min, max) = self.raise_bounds();
                (min..=max).contains(&target)
            }
            _ => true,
        }
    }

    /// Apply a legal betting action for the active position.
    fn apply(&mut self, action: Action) -> Transition {
        let me = self.active();
        match action {
            Action::Fold => Transition::Over(RoundOutcome::Fold(me)),
            Action::Call => {
                let cost = self.continue_cost(me);
                self.stacks[me] -= cost;
                self.pips[me] += cost;
                if self.street == Street::Preflop && self.button == 0 {
                    // Small blind completes; the big blind keeps its option.
                    self.button += 1;
                    Transition::Continue
                } else {
                    Transition::StreetClosed
                }
            }
            Action::Check => {
                if (self.street == Street::Preflop && self.button > 0) || self.button > 1 {
                    Transition::StreetClosed
                } else {
                    self.button += 1;
                    Transition::Continue
                }
            }
            Action::Raise(target) => {
                let contribution = target - self.pips[me];
                self.stacks[me] -= contribution;
                self.pips[me] = target;
                self.button += 1;
                Transition::Continue
            }
            Action::Discard(_) => Transition::Continue,
        }
    }

    /// Reset betting for the next street. The big blind acts first.
    fn next_street(&mut self, street: Street) {
        self.street = street;
        self.pips = [0, 0];
        self.button = 1;
    }

    /// Chips each position has put in this round.
    fn contributions(&self, starting_stack: u32) -> [i64; 2] {
        [0, 1].map(|p| starting_stack as i64 - self.stacks[p] as i64)
    }
}

/// Replacement for an illegal action: check if possible, else fold.
fn replacement(legal: LegalActions) -> Action {
    if legal.contains(ActionKind::Check) {
        Action::Check
    } else {
        Action::Fold
    }
}

/// Two sessions playing a full match.
pub struct Dealer {
    seats: [MatchSession; 2],
    stakes: StakesConfig,
    rng: StdRng,
    seed: u64,
    bankrolls: [i64; 2],
    illegal: [u32; 2],
    action_counts: [FxHashMap<ActionKind, u64>; 2],
    showdowns: u32,
    started: Instant,
}

impl Dealer {
    /// Seat two bots. Stakes come from seat 0's configuration.
    pub fn new(hero: BotConfig, villain: BotConfig, seed: u64) -> Result<Self, BotError> {
        let stakes = hero.stakes.clone();
        Ok(Self {
            seats: [MatchSession::new(hero)?, MatchSession::new(villain)?],
            stakes,
            rng: StdRng::seed_from_u64(seed),
            seed,
            bankrolls: [0, 0],
            illegal: [0, 0],
            action_counts: Default::default(),
            showdowns: 0,
            started: Instant::now(),
        })
    }

    /// Play every round and report the result.
    pub fn run(mut self) -> Result<MatchReport, BotError> {
        let rounds = self.stakes.num_rounds;
        let mut deltas = Vec::with_capacity(rounds as usize);
        for round in 1..=rounds {
            let delta = self.play_round(round)?;
            deltas.push(delta[0]);
        }

        let report = MatchReport {
            policies: [0, 1].map(|s| self.seats[s].policy_name().to_string()),
            seed: self.seed,
            rounds,
            bankrolls: self.bankrolls,
            mean_pnl: 0.0,
            std_pnl: 0.0,
            sharpe: 0.0,
            illegal_actions: self.illegal,
            opponent_styles: [0, 1].map(|s| self.seats[s].opponent().style().to_string()),
            action_counts: self.action_counts,
            showdowns: self.showdowns,
        };
        Ok(report.with_pnl(&deltas))
    }

    /// Play one round and return each seat's result.
    pub fn play_round(&mut self, round: u32) -> Result<[i64; 2], BotError> {
        // Seat holding the small blind.
        let sb_seat = ((round - 1) % 2) as usize;
        let seat_of = |position: usize| if position == 0 { sb_seat } else { 1 - sb_seat };

        let mut deck = Deck::shuffled(&mut self.rng);
        let hands = [
            Hand::new(deck.deal_n(Hand::DEALT))?,
            Hand::new(deck.deal_n(Hand::DEALT))?,
        ];
        let mut state = RoundState::new(hands, &self.stakes);

        let clock = self.started.elapsed().as_secs_f64();
        for position in 0..2 {
            let seat = seat_of(position);
            self.seats[seat].on_round_start(
                self.bankrolls[seat],
                round,
                clock,
                &state.hands[position],
                position == 1,
            );
        }

        let outcome = loop {
            let position = state.active();
            let seat = seat_of(position);
            let ctx = state.context();
            let proposed = self.seats[seat].decide(&ctx);
            let action = if state.is_legal(proposed) {
                proposed
            } else {
                self.illegal[seat] += 1;
                log::warn!("seat {} played illegal {} on {}", seat, proposed, state.street);
                replacement(ctx.legal)
            };
            *self.action_counts[seat].entry(action.kind()).or_insert(0) += 1;

            self.seats[1 - seat].observe_opponent(OpponentAction {
                street: state.street,
                kind: action.kind(),
                faced_bet: ctx.continue_cost() > 0,
            });

            match state.apply(action) {
                Transition::Continue => {}
                Transition::Over(outcome) => break outcome,
                Transition::StreetClosed => match state.street {
                    Street::Preflop => {
                        self.discard_phase(&mut state, &seat_of)?;
                        state.next_street(Street::Flop);
                        for card in deck.deal_n(3) {
                            state.board.add(card)?;
                        }
                    }
                    Street::River => break RoundOutcome::Showdown,
                    street => {
                        let next = street.next().unwrap_or(Street::River);
                        state.next_street(next);
                        if let Some(card) = deck.deal() {
                            state.board.add(card)?;
                        }
                    }
                },
            }
        };

        let contributions = state.contributions(self.stakes.starting_stack);
        let mut by_position = [0i64; 2];
        match outcome {
            RoundOutcome::Fold(folder) => {
                by_position[folder] = -contributions[folder];
                by_position[1 - folder] = contributions[folder];
            }
            RoundOutcome::Showdown => {
                self.showdowns += 1;
                match showdown::compare(state.hands[0].cards(), state.hands[1].cards(), state.board.cards()) {
                    Ordering::Greater => {
                        by_position = [contributions[1], -contributions[1]];
                    }
                    Ordering::Less => {
                        by_position = [-contributions[0], contributions[0]];
                    }
                    Ordering::Equal => {
                        let diff = (contributions[1] - contributions[0]) / 2;
                        by_position = [diff, -diff];
                    }
                }
            }
        }

        let mut deltas = [0i64; 2];
        for position in 0..2 {
            let seat = seat_of(position);
            deltas[seat] = by_position[position];
            self.bankrolls[seat] += by_position[position];
            let opp_cards = match outcome {
                RoundOutcome::Showdown => Some(state.hands[1 - position].cards()),
                RoundOutcome::Fold(_) => None,
            };
            self.seats[seat].on_round_end(
                by_position[position],
                state.street,
                Some(&state.hands[position]),
                opp_cards,
            );
        }
        Ok(deltas)
    }

    /// Each position throws one hole card, big blind first.
    fn discard_phase(
        &mut self,
        state: &mut RoundState,
        seat_of: &dyn Fn(usize) -> usize,
    ) -> Result<(), BotError> {
        for position in [1, 0] {
            let seat = seat_of(position);
            let ctx = state.discard_context(position);
            let index = match self.seats[seat].decide(&ctx) {
                Action::Discard(index) if index < Hand::DEALT => index,
                other => {
                    self.illegal[seat] += 1;
                    log::warn!("seat {} played {} instead of a discard", seat, other);
                    0
                }
            };
            *self.action_counts[seat].entry(ActionKind::Discard).or_insert(0) += 1;
            state.hands[position] = state.hands[position].discard(index)?;
        }
        Ok(())
    }

    /// Final bankroll per seat so far.
    pub fn bankrolls(&self) -> [i64; 2] {
        self.bankrolls
    }
}
