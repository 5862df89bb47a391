use std::fmt;

use crate::error::RuleError;

/// Distance tag for a classification attempt: the combined roll, or a single
/// die's worth when the split-double fallback applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Full,
    Half,
}

/// A registered roll of the two dice.
///
/// Faces are stored 0-based internally and shown 1-based, matching the
/// engine's external contract: suppliers hand in faces in `[1, 6]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceRoll {
    first: u8,
    second: u8,
}

impl DiceRoll {
    /// Build a roll from 1-based die faces.
    pub fn from_faces(first: u8, second: u8) -> Result<Self, RuleError> {
        for face in [first, second] {
            if !(1..=6).contains(&face) {
                return Err(RuleError::InvalidDie(face));
            }
        }
        Ok(DiceRoll {
            first: first - 1,
            second: second - 1,
        })
    }

    /// The 1-based faces as rolled.
    pub fn faces(self) -> (u8, u8) {
        (self.first + 1, self.second + 1)
    }

    /// Both dice show the same face.
    pub fn is_double(self) -> bool {
        self.first == self.second
    }

    /// Whether this roll lets a horse leave its home slot: doubles, or the
    /// unordered pair {6, 1}.
    pub fn unlocks_release(self) -> bool {
        if self.is_double() {
            return true;
        }
        let (a, b) = self.faces();
        a.min(b) == 1 && a.max(b) == 6
    }

    /// Step count for the given span: both faces combined, or the first die
    /// alone. `Half` is only ever requested on doubles, where the dice agree.
    pub fn distance(self, span: Span) -> u8 {
        match span {
            Span::Full => self.first + self.second + 2,
            Span::Half => self.first + 1,
        }
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.faces();
        write!(f, "[{a} {b}]")
    }
}
