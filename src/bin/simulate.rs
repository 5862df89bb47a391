use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use co_ngua::ai::{Agent, CaptureFirstBot, RandomBot};
use co_ngua::config::MatchConfig;
use co_ngua::game::{Color, MatchState, PlayerKind, RollOutcome, NUM_COLORS};

/// Run unattended bot-vs-bot matches and print a result tally.
#[derive(Parser)]
#[command(name = "simulate", about = "Simulate bot-vs-bot horse race matches")]
struct Cli {
    /// Number of matches to play
    #[arg(long, default_value_t = 100)]
    matches: u64,

    /// Policy for every seat: capture-first or random
    #[arg(long, default_value = "capture-first")]
    policy: String,

    /// Path to TOML configuration file
    #[arg(long, default_value = "match.toml")]
    config: PathBuf,

    /// Override the RNG seed from the config
    #[arg(long)]
    seed: Option<u64>,

    /// Override the per-match turn cap from the config
    #[arg(long)]
    max_turns: Option<u64>,
}

/// Counters from one finished (or abandoned) match.
struct MatchSummary {
    winner: Option<Color>,
    rolls: u64,
    passes: u64,
    captures: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.policy.as_str() {
        "capture-first" | "random" => {}
        other => bail!(
            "unknown policy '{}' (expected 'capture-first' or 'random')",
            other
        ),
    }

    let mut config = MatchConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(max_turns) = cli.max_turns {
        config.max_turns = max_turns;
    }
    config.validate()?;

    if config.seats.iter().any(|s| *s != PlayerKind::Bot) {
        bail!("simulation needs four bot seats; set seats = [\"bot\", ...] in the config");
    }
    if cli.matches == 0 {
        bail!("nothing to do with --matches 0");
    }

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());

    println!(
        "Simulating {} matches with {} bots (seed {})...",
        cli.matches, cli.policy, seed
    );
    println!("-------------------------------------------");

    let mut wins = [0u64; NUM_COLORS];
    let mut unfinished = 0u64;
    let mut total_rolls = 0u64;
    let mut total_passes = 0u64;
    let mut total_captures = 0u64;

    for m in 0..cli.matches {
        let summary = play_match(&cli.policy, seed.wrapping_add(m), config.max_turns)?;
        match summary.winner {
            Some(color) => wins[color.index()] += 1,
            None => unfinished += 1,
        }
        total_rolls += summary.rolls;
        total_passes += summary.passes;
        total_captures += summary.captures;

        if (m + 1) % 10 == 0 || m + 1 == cli.matches {
            println!(
                "Match {}/{} | winner: {} | rolls: {} | captures: {}",
                m + 1,
                cli.matches,
                summary
                    .winner
                    .map(|c| c.name())
                    .unwrap_or("none (turn cap)"),
                summary.rolls,
                summary.captures
            );
        }
    }

    println!("-------------------------------------------");
    println!("Results over {} matches:", cli.matches);
    for color in Color::ALL {
        let w = wins[color.index()];
        println!(
            "  {:<6} : {} wins ({:.1}%)",
            color.name(),
            w,
            w as f64 / cli.matches as f64 * 100.0
        );
    }
    if unfinished > 0 {
        println!("  unfinished: {} (turn cap {})", unfinished, config.max_turns);
    }
    println!(
        "Avg rolls/match: {:.1} | passed rolls: {:.1}% | captures/match: {:.1}",
        total_rolls as f64 / cli.matches as f64,
        total_passes as f64 / total_rolls as f64 * 100.0,
        total_captures as f64 / cli.matches as f64
    );

    Ok(())
}

/// Play one match to the win or the roll cap, with dice and bots derived
/// from the given seed.
fn play_match(policy: &str, match_seed: u64, max_rolls: u64) -> Result<MatchSummary> {
    let mut dice = StdRng::seed_from_u64(match_seed);
    let mut bots: [Box<dyn Agent>; NUM_COLORS] =
        std::array::from_fn(|i| make_bot(policy, match_seed.wrapping_add(i as u64 + 1)));
    let mut state = MatchState::new([PlayerKind::Bot; NUM_COLORS]);

    let mut rolls = 0u64;
    let mut passes = 0u64;
    let mut captures = 0u64;

    while state.winner().is_none() && rolls < max_rolls {
        rolls += 1;
        let first: u8 = dice.random_range(1..=6);
        let second: u8 = dice.random_range(1..=6);
        let mover = state.turn();
        match state.register_roll(first, second)? {
            RollOutcome::Passed => passes += 1,
            RollOutcome::AwaitingSelection => {
                let horse = bots[mover.index()]
                    .choose_horse(&state)
                    .context("policy returned no horse for a pending selection")?;
                let record = state
                    .apply_move(horse)?
                    .context("selection applied without a pending roll")?;
                if record.captured.is_some() {
                    captures += 1;
                }
            }
        }
    }

    Ok(MatchSummary {
        winner: state.winner(),
        rolls,
        passes,
        captures,
    })
}

fn make_bot(policy: &str, seed: u64) -> Box<dyn Agent> {
    match policy {
        "capture-first" => Box::new(CaptureFirstBot::seeded(seed)),
        "random" => Box::new(RandomBot::seeded(seed)),
        _ => unreachable!(),
    }
}
