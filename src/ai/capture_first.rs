use crate::game::MatchState;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::{eligible_horses, Agent};

/// An agent that always takes a capture when one is on offer.
///
/// The lowest-indexed horse with an attack verdict wins; without one the
/// pick is uniform among the movable horses.
pub struct CaptureFirstBot {
    rng: StdRng,
}

impl CaptureFirstBot {
    pub fn new() -> Self {
        CaptureFirstBot {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible simulations.
    pub fn seeded(seed: u64) -> Self {
        CaptureFirstBot {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for CaptureFirstBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for CaptureFirstBot {
    fn choose_horse(&mut self, state: &MatchState) -> Option<usize> {
        if let Some(horse) = state.movability().iter().position(|v| v.is_attack()) {
            return Some(horse);
        }
        let horses = eligible_horses(state);
        if horses.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..horses.len());
        Some(horses[idx])
    }

    fn name(&self) -> &str {
        "CaptureFirst"
    }
}
