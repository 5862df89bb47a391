use super::player::{Color, NUM_HORSES};

/// Cells on the shared circular track, `0..TRACK_LEN`.
pub const TRACK_LEN: u8 = 48;
/// Slots in each color's private lane, `1..=LANE_LEN`; slot 6 is terminal.
pub const LANE_LEN: u8 = 6;
/// Lane slots `WIN_SLOT..=LANE_LEN` count as finished for the win check.
pub const WIN_SLOT: u8 = 3;

/// One board location. Exactly one of three zones; the tags keep home slots,
/// track cells and lane slots from ever colliding in arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// Off-board holding slot, unique per horse index.
    Home(u8),
    /// Shared track cell.
    Track(u8),
    /// Private lane slot of the given color, `1..=LANE_LEN`.
    Lane(Color, u8),
}

/// Track cell a horse lands on when released from home.
pub fn start_cell(color: Color) -> u8 {
    match color {
        Color::Red => 0,
        Color::Blue => 12,
        Color::Green => 24,
        Color::Yellow => 36,
    }
}

/// Last shared cell before a color turns into its private lane. Each
/// entrance sits directly before the color's own start cell.
pub fn lane_entrance(color: Color) -> u8 {
    match color {
        Color::Red => 47,
        Color::Blue => 11,
        Color::Green => 23,
        Color::Yellow => 35,
    }
}

/// Advance one square for a horse of `color`, or `None` when no further
/// movement exists from `from`.
///
/// The track closes its loop at cell `TRACK_LEN - 1`, which is also Red's
/// lane entrance: Red turns in there, every other color wraps to cell 0.
/// A mover's own entrance always takes precedence over the wrap. Lane slots
/// advance until the terminal slot, which has no successor. Home squares
/// have no stepping rule either; leaving home is a release, not a step, so
/// this function never produces a home square.
pub fn step(color: Color, from: Square) -> Option<Square> {
    match from {
        Square::Track(cell) if cell == lane_entrance(color) => Some(Square::Lane(color, 1)),
        Square::Track(cell) if cell == TRACK_LEN - 1 => Some(Square::Track(0)),
        Square::Track(cell) => Some(Square::Track(cell + 1)),
        Square::Lane(owner, slot) if slot < LANE_LEN => Some(Square::Lane(owner, slot + 1)),
        Square::Lane(..) => None,
        Square::Home(_) => None,
    }
}

/// Square reached after `steps` single steps, or `None` as soon as any step
/// is blocked. Stops at the first blocked step; it never keeps iterating
/// past one.
pub fn target_after(color: Color, from: Square, steps: u8) -> Option<Square> {
    let mut square = from;
    for _ in 0..steps {
        square = step(color, square)?;
    }
    Some(square)
}

/// Occupancy of the whole board: where each of the 16 horses stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    horses: [Square; NUM_HORSES],
}

impl Board {
    /// Create a board with every horse on its own home slot
    pub fn new() -> Self {
        Board {
            horses: std::array::from_fn(|i| Square::Home(i as u8)),
        }
    }

    /// Where a horse currently stands
    pub fn horse(&self, horse: usize) -> Square {
        self.horses[horse]
    }

    /// The full position list, indexed by horse.
    pub fn positions(&self) -> &[Square; NUM_HORSES] {
        &self.horses
    }

    /// Horse standing on `square`, if any.
    pub fn occupant(&self, square: Square) -> Option<usize> {
        self.horses.iter().position(|&s| s == square)
    }

    pub(crate) fn place(&mut self, horse: usize, square: Square) {
        self.horses[horse] = square;
    }

    /// Send a captured horse back to its own home slot.
    pub(crate) fn send_home(&mut self, horse: usize) {
        self.horses[horse] = Square::Home(horse as u8);
    }

    /// A color has won once all four of its horses stand on lane slots
    /// `WIN_SLOT..=LANE_LEN`.
    pub fn has_won(&self, color: Color) -> bool {
        color
            .horse_range()
            .all(|h| matches!(self.horses[h], Square::Lane(c, slot) if c == color && slot >= WIN_SLOT))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
