//! Self-play arena: pit two policies against each other over many matches.
//!
//! Usage:
//!   cargo run --release --bin self_play -- [OPTIONS]
//!
//! Matches run in parallel, one seed each. Seat 0 is the hero.

use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use rust_pokerbot::arena::{self, ArenaSummary};
use rust_pokerbot::bot::BotConfig;
use rust_pokerbot::policy::PolicyKind;

#[derive(Parser)]
#[command(name = "self_play")]
#[command(about = "Run self-play matches between two bot policies")]
struct Args {
    /// Number of matches to play
    #[arg(short, long, default_value_t = 20)]
    matches: u64,

    /// Rounds per match (overrides the config file)
    #[arg(short, long)]
    rounds: Option<u32>,

    /// Base seed; match `i` is dealt with `seed + i`
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Policy for seat 0
    #[arg(long, default_value = "exploitative")]
    hero: PolicyKind,

    /// Policy for seat 1
    #[arg(long, default_value = "heuristic")]
    villain: PolicyKind,

    /// Bot configuration JSON shared by both seats
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the summary JSON here
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut base = match &args.config {
        Some(path) => BotConfig::from_json_file(path)?,
        None => BotConfig::default(),
    };
    if let Some(rounds) = args.rounds {
        base.stakes.num_rounds = rounds;
    }
    base.validate()?;

    log::info!(
        "{} matches of {} rounds: {} vs {}",
        args.matches,
        base.stakes.num_rounds,
        args.hero,
        args.villain
    );

    let pb = ProgressBar::new(args.matches);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .expect("valid template")
            .progress_chars("#>-"),
    );

    let start = Instant::now();
    let reports = (0..args.matches)
        .into_par_iter()
        .map(|i| {
            let seed = args.seed.wrapping_add(i);
            // Bots get their own streams, distinct from the deck's.
            let hero = base.clone().with_policy(args.hero).with_seed(seed.wrapping_mul(2).wrapping_add(1));
            let villain = base.clone().with_policy(args.villain).with_seed(seed.wrapping_mul(2).wrapping_add(2));
            let report = arena::run_match(hero, villain, seed);
            pb.inc(1);
            report
        })
        .collect::<Result<Vec<_>, _>>()?;
    pb.finish_and_clear();

    let summary = ArenaSummary::from_reports(reports);
    println!("{} vs {} over {} matches ({:.1}s)", summary.policies[0], summary.policies[1], summary.matches, start.elapsed().as_secs_f64());
    println!("  wins:            {} - {}", summary.wins[0], summary.wins[1]);
    println!("  mean bankroll:   {:+.1} (std {:.1})", summary.mean_bankroll, summary.std_bankroll);
    println!("  illegal actions: {}", summary.total_illegal_actions);

    if let Some(path) = &args.output {
        summary.save_json(path)?;
        println!("  saved to {}", path.display());
    }

    Ok(())
}
