use crate::game::MatchState;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::{eligible_horses, Agent};

/// An agent that selects uniformly at random from eligible horses.
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn new() -> Self {
        RandomBot {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible simulations.
    pub fn seeded(seed: u64) -> Self {
        RandomBot {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomBot {
    fn choose_horse(&mut self, state: &MatchState) -> Option<usize> {
        let horses = eligible_horses(state);
        if horses.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..horses.len());
        Some(horses[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{MatchState, PlayerKind, RollOutcome, Square, NUM_COLORS, WIN_SLOT};

    fn all_bots() -> MatchState {
        MatchState::new([PlayerKind::Bot; NUM_COLORS])
    }

    /// Drive a match with four seeded bots until someone wins or the roll
    /// cap runs out. Returns the roll count.
    fn drive_match(state: &mut MatchState, seed: u64, cap: u32) -> u32 {
        let mut dice = StdRng::seed_from_u64(seed);
        let mut bots: Vec<RandomBot> = (0..NUM_COLORS as u64)
            .map(|i| RandomBot::seeded(seed.wrapping_add(i + 1)))
            .collect();

        let mut rolls = 0;
        while state.winner().is_none() && rolls < cap {
            rolls += 1;
            let first: u8 = dice.random_range(1..=6);
            let second: u8 = dice.random_range(1..=6);
            let mover = state.turn();
            if state.register_roll(first, second).unwrap() == RollOutcome::AwaitingSelection {
                let horse = bots[mover.index()].choose_horse(state).unwrap();
                state.apply_move(horse).unwrap().unwrap();
            }
        }
        rolls
    }

    #[test]
    fn test_random_bot_selects_eligible_horse() {
        let mut bot = RandomBot::new();
        let mut state = all_bots();
        // Doubles release every home horse of the color on turn.
        state.register_roll(6, 6).unwrap();

        for _ in 0..100 {
            let horse = bot.choose_horse(&state).unwrap();
            assert!(
                state.movability()[horse].is_eligible(),
                "horse {} is not eligible",
                horse
            );
        }
    }

    #[test]
    fn test_random_bot_without_pending_roll() {
        let mut bot = RandomBot::new();
        let state = all_bots();
        assert_eq!(bot.choose_horse(&state), None);
    }

    #[test]
    fn test_random_bot_name() {
        let bot = RandomBot::new();
        assert_eq!(bot.name(), "Random");
    }

    #[test]
    fn test_random_bots_play_full_match() {
        let mut state = all_bots();
        for seed in [11, 12, 13] {
            state.reset();
            drive_match(&mut state, seed, 100_000);
            if state.winner().is_some() {
                break;
            }
        }

        let winner = state.winner().expect("no seed produced a finished match");
        for horse in winner.horse_range() {
            match state.positions()[horse] {
                Square::Lane(owner, slot) => {
                    assert_eq!(owner, winner);
                    assert!(slot >= WIN_SLOT);
                }
                other => panic!("winner horse {} rests at {:?}", horse, other),
            }
        }
    }

    #[test]
    fn test_seeded_match_is_deterministic() {
        let mut first = all_bots();
        let rolls_a = drive_match(&mut first, 77, 50_000);
        let mut second = all_bots();
        let rolls_b = drive_match(&mut second, 77, 50_000);

        assert_eq!(rolls_a, rolls_b);
        assert_eq!(first.winner(), second.winner());
        assert_eq!(first.positions(), second.positions());
    }
}
