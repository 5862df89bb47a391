pub const NUM_COLORS: usize = 4;
pub const HORSES_PER_COLOR: usize = 4;
pub const NUM_HORSES: usize = NUM_COLORS * HORSES_PER_COLOR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// All colors in turn order.
    pub const ALL: [Color; NUM_COLORS] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    /// Get the color whose turn follows this one
    pub fn next(self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Green,
            Color::Green => Color::Yellow,
            Color::Yellow => Color::Red,
        }
    }

    /// Position of this color in the fixed turn order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Owner of a horse: indices 0-3 are Red, 4-7 Blue, 8-11 Green, 12-15 Yellow.
    /// Callers validate horse indices at the API boundary.
    pub fn of_horse(horse: usize) -> Color {
        Color::ALL[horse / HORSES_PER_COLOR]
    }

    /// Indices of the four horses this color owns
    pub fn horse_range(self) -> std::ops::Range<usize> {
        let first = self.index() * HORSES_PER_COLOR;
        first..first + HORSES_PER_COLOR
    }

    /// Get color name for display
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
        }
    }
}

/// Who drives a seat: a person feeding selections in, or a bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Bot,
}
