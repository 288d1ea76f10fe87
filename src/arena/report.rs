//! Match results and their summary statistics.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::policy::ActionKind;

/// Outcome of one self-play match, from seat 0's point of view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Policy name per seat.
    pub policies: [String; 2],
    /// Seed the dealer shuffled with.
    pub seed: u64,
    /// Rounds played.
    pub rounds: u32,
    /// Final bankroll per seat.
    pub bankrolls: [i64; 2],
    /// Mean of seat 0's per-round result.
    pub mean_pnl: f64,
    /// Standard deviation of seat 0's per-round result.
    pub std_pnl: f64,
    /// `mean / std`, zero when the results never varied.
    pub sharpe: f64,
    /// Illegal actions the dealer had to replace, per seat.
    pub illegal_actions: [u32; 2],
    /// How each seat classified its opponent at the end.
    pub opponent_styles: [String; 2],
    /// Actions taken per seat.
    pub action_counts: [FxHashMap<ActionKind, u64>; 2],
    /// Rounds that reached showdown.
    pub showdowns: u32,
}

impl MatchReport {
    /// Fill in the PnL statistics from seat 0's per-round results.
    pub fn with_pnl(mut self, deltas: &[i64]) -> Self {
        let (mean, std) = mean_std(deltas);
        self.mean_pnl = mean;
        self.std_pnl = std;
        self.sharpe = if std > 0.0 { mean / std } else { 0.0 };
        self
    }

    /// Seat that finished ahead, `None` on an exact tie.
    pub fn winner(&self) -> Option<usize> {
        match self.bankrolls[0].cmp(&self.bankrolls[1]) {
            std::cmp::Ordering::Greater => Some(0),
            std::cmp::Ordering::Less => Some(1),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Population mean and standard deviation.
pub fn mean_std(values: &[i64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
    let var = values.iter().map(|&v| (v as f64 - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

/// Aggregate over several matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaSummary {
    /// Policy name per seat.
    pub policies: [String; 2],
    /// Matches summarized.
    pub matches: usize,
    /// Matches won per seat.
    pub wins: [usize; 2],
    /// Mean final bankroll of seat 0.
    pub mean_bankroll: f64,
    /// Standard deviation of seat 0's final bankroll.
    pub std_bankroll: f64,
    /// Illegal actions summed over seats and matches.
    pub total_illegal_actions: u32,
    /// Per-match reports.
    pub reports: Vec<MatchReport>,
}

impl ArenaSummary {
    /// Summarize finished matches.
    pub fn from_reports(reports: Vec<MatchReport>) -> Self {
        let policies = reports
            .first()
            .map(|r| r.policies.clone())
            .unwrap_or_default();

        let mut wins = [0usize; 2];
        for seat in reports.iter().filter_map(MatchReport::winner) {
            wins[seat] += 1;
        }

        let finals: Vec<i64> = reports.iter().map(|r| r.bankrolls[0]).collect();
        let (mean_bankroll, std_bankroll) = mean_std(&finals);
        let total_illegal_actions = reports.iter().map(|r| r.illegal_actions.iter().sum::<u32>()).sum();

        Self {
            policies,
            matches: reports.len(),
            wins,
            mean_bankroll,
            std_bankroll,
            total_illegal_actions,
            reports,
        }
    }

    /// Save as pretty JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
