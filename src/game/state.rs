use super::board::{start_cell, target_after, Board, Square};
use super::dice::{DiceRoll, Span};
use super::moves::{resolve, Movability};
use super::player::{Color, PlayerKind, NUM_COLORS, NUM_HORSES};
use crate::error::RuleError;

/// What a registered roll led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollOutcome {
    /// At least one horse of the color on turn can move; a selection is due.
    AwaitingSelection,
    /// No horse could move; the roll was discarded and the turn advanced.
    Passed,
}

/// Outcome data for one applied move, for presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub horse: usize,
    pub from: Square,
    pub to: Square,
    /// Opposing horse sent back to its home slot by this move.
    pub captured: Option<usize>,
    /// Distance the move actually used (half after a split-double fallback).
    pub span: Span,
}

/// State of one match: the single source of truth between the dice supplier,
/// the players and the presentation layer.
///
/// All horses start on their home slots with Red to move. The state is
/// caller-owned; independent matches need independent instances.
#[derive(Debug, Clone)]
pub struct MatchState {
    board: Board,
    turn: Color,
    dice: Option<DiceRoll>,
    movable: [Movability; NUM_HORSES],
    seats: [PlayerKind; NUM_COLORS],
    winner: Option<Color>,
}

impl MatchState {
    /// Create a match in the initial layout
    pub fn new(seats: [PlayerKind; NUM_COLORS]) -> Self {
        MatchState {
            board: Board::new(),
            turn: Color::Red,
            dice: None,
            movable: [Movability::Immovable; NUM_HORSES],
            seats,
            winner: None,
        }
    }

    /// Restore the initial layout, keeping the seat assignment.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Color::Red;
        self.dice = None;
        self.movable = [Movability::Immovable; NUM_HORSES];
        self.winner = None;
    }

    /// Color on turn
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The registered roll, if a selection is pending.
    pub fn dice(&self) -> Option<DiceRoll> {
        self.dice
    }

    /// Winner, once a color has brought all four horses home.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Position of every horse, indexed by horse.
    pub fn positions(&self) -> &[Square; NUM_HORSES] {
        self.board.positions()
    }

    /// Per-horse verdicts for the pending roll. All `Immovable` while no
    /// roll is pending; horses of colors not on turn are always `Immovable`.
    pub fn movability(&self) -> &[Movability; NUM_HORSES] {
        &self.movable
    }

    /// Who drives the given color.
    pub fn seat(&self, color: Color) -> PlayerKind {
        self.seats[color.index()]
    }

    /// Register the two die faces supplied from outside and rebuild the
    /// movability cache for the color on turn.
    ///
    /// When the result leaves that color without a single eligible horse the
    /// turn passes on the spot: the roll is discarded and the next color is
    /// up. Registering again while a selection is pending overwrites the
    /// previous roll; the dice supplier is authoritative.
    pub fn register_roll(&mut self, first: u8, second: u8) -> Result<RollOutcome, RuleError> {
        if self.winner.is_some() {
            return Err(RuleError::MatchOver);
        }
        let dice = DiceRoll::from_faces(first, second)?;
        self.dice = Some(dice);
        for horse in 0..NUM_HORSES {
            self.movable[horse] = if Color::of_horse(horse) == self.turn {
                resolve(&self.board, dice, horse)
            } else {
                Movability::Immovable
            };
        }
        if self.movable.iter().any(|m| m.is_eligible()) {
            Ok(RollOutcome::AwaitingSelection)
        } else {
            self.dice = None;
            self.turn = self.turn.next();
            Ok(RollOutcome::Passed)
        }
    }

    /// Apply the selected horse's move for the pending roll.
    ///
    /// Callers pick the horse from the published movability cache; selecting
    /// one cached as `Immovable` is rejected. Calling without a pending roll
    /// is a no-op returning `Ok(None)`.
    ///
    /// A home horse is placed on its start cell, anything else advances by
    /// the cached span's distance. An opposing horse on the landing square
    /// goes back to its own home slot. The move ends with the win check and
    /// the turn advancing, except that doubles let the mover roll again.
    pub fn apply_move(&mut self, horse: usize) -> Result<Option<MoveRecord>, RuleError> {
        if horse >= NUM_HORSES {
            return Err(RuleError::InvalidHorse(horse));
        }
        if self.winner.is_some() {
            return Err(RuleError::MatchOver);
        }
        let Some(dice) = self.dice else {
            return Ok(None);
        };
        let span = match self.movable[horse] {
            Movability::Immovable => return Err(RuleError::HorseNotMovable(horse)),
            Movability::Movable(span) | Movability::Attackable(span) => span,
        };

        let color = Color::of_horse(horse);
        let from = self.board.horse(horse);
        let to = match from {
            Square::Home(_) => Square::Track(start_cell(color)),
            _ => target_after(color, from, dice.distance(span))
                .ok_or(RuleError::HorseNotMovable(horse))?,
        };

        let captured = self.board.occupant(to);
        if let Some(victim) = captured {
            debug_assert_ne!(Color::of_horse(victim), color);
            self.board.send_home(victim);
        }
        self.board.place(horse, to);

        if self.board.has_won(color) {
            self.winner = Some(color);
        }

        self.dice = None;
        self.movable = [Movability::Immovable; NUM_HORSES];
        if self.winner.is_none() && !dice.is_double() {
            self.turn = self.turn.next();
        }

        Ok(Some(MoveRecord {
            horse,
            from,
            to,
            captured,
            span,
        }))
    }
}
