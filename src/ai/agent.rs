use crate::game::MatchState;

/// Universal interface for horse-picking policies.
///
/// A policy is consulted only while a roll is pending and at least one horse
/// of the color on turn is eligible; it picks from the state's published
/// movability verdicts. `None` means the policy found nothing to move, which
/// drivers treat as a fault rather than a pass (passing is the state
/// machine's job).
pub trait Agent {
    /// Select a horse index for the color on turn, or `None` when no horse
    /// is eligible.
    fn choose_horse(&mut self, state: &MatchState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Horses the pending roll lets the color on turn move, in index order.
pub(super) fn eligible_horses(state: &MatchState) -> Vec<usize> {
    state
        .movability()
        .iter()
        .enumerate()
        .filter(|(_, verdict)| verdict.is_eligible())
        .map(|(horse, _)| horse)
        .collect()
}
