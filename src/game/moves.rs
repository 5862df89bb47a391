use super::board::{start_cell, step, Board, Square, LANE_LEN};
use super::dice::{DiceRoll, Span};
use super::player::Color;

/// Verdict for one horse under the current roll. The eligible variants carry
/// the span that produced them, so a later `apply_move` advances by the same
/// distance the cache was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movability {
    Immovable,
    Movable(Span),
    Attackable(Span),
}

impl Movability {
    /// Anything other than `Immovable`.
    pub fn is_eligible(self) -> bool {
        !matches!(self, Movability::Immovable)
    }

    /// The move lands on an opposing horse.
    pub fn is_attack(self) -> bool {
        matches!(self, Movability::Attackable(_))
    }

    /// Span recorded for an eligible horse.
    pub fn span(self) -> Option<Span> {
        match self {
            Movability::Immovable => None,
            Movability::Movable(span) | Movability::Attackable(span) => Some(span),
        }
    }
}

/// Classify a single horse for one span of the roll.
pub fn classify(board: &Board, dice: DiceRoll, horse: usize, span: Span) -> Movability {
    let color = Color::of_horse(horse);
    match board.horse(horse) {
        Square::Home(_) => classify_release(board, dice, color, span),
        Square::Lane(_, slot) => classify_lane(board, dice, color, slot, span),
        from @ Square::Track(_) => classify_track(board, dice, color, from, span),
    }
}

/// Full-roll classification with the split-double fallback: when the
/// combined distance is immovable and the dice are doubles, a single die's
/// distance is tried instead, and a non-immovable half verdict wins.
pub fn resolve(board: &Board, dice: DiceRoll, horse: usize) -> Movability {
    let full = classify(board, dice, horse, Span::Full);
    if full == Movability::Immovable && dice.is_double() {
        let half = classify(board, dice, horse, Span::Half);
        if half.is_eligible() {
            return half;
        }
    }
    full
}

/// Leaving home needs a release roll; the start cell decides the rest.
/// Distance plays no part in a release.
fn classify_release(board: &Board, dice: DiceRoll, color: Color, span: Span) -> Movability {
    if !dice.unlocks_release() {
        return Movability::Immovable;
    }
    match board.occupant(Square::Track(start_cell(color))) {
        None => Movability::Movable(span),
        Some(h) if Color::of_horse(h) == color => Movability::Immovable,
        Some(_) => Movability::Attackable(span),
    }
}

/// Inside the lane only exact finishes are allowed, except that doubles may
/// advance short of the terminal slot. An own horse anywhere on the covered
/// slots blocks; nothing is ever captured in a lane.
fn classify_lane(board: &Board, dice: DiceRoll, color: Color, slot: u8, span: Span) -> Movability {
    if slot == LANE_LEN {
        return Movability::Immovable;
    }
    if board.occupant(Square::Lane(color, slot + 1)).is_some() {
        return Movability::Immovable;
    }
    let distance = dice.distance(span);
    let remaining = LANE_LEN - slot;
    if distance != remaining && !(dice.is_double() && distance < remaining) {
        return Movability::Immovable;
    }
    for s in slot + 1..=slot + distance {
        if board.occupant(Square::Lane(color, s)).is_some() {
            return Movability::Immovable;
        }
    }
    Movability::Movable(span)
}

/// On the track the move is simulated step by step: a blocked step or any
/// occupied intermediate cell stops it, the final cell decides between
/// moving, attacking, and an own-color block.
fn classify_track(
    board: &Board,
    dice: DiceRoll,
    color: Color,
    from: Square,
    span: Span,
) -> Movability {
    let distance = dice.distance(span);
    let mut square = from;
    for _ in 1..distance {
        square = match step(color, square) {
            Some(next) => next,
            None => return Movability::Immovable,
        };
        if board.occupant(square).is_some() {
            return Movability::Immovable;
        }
    }
    let Some(target) = step(color, square) else {
        return Movability::Immovable;
    };
    match board.occupant(target) {
        None => Movability::Movable(span),
        Some(h) if Color::of_horse(h) == color => Movability::Immovable,
        Some(_) => Movability::Attackable(span),
    }
}
