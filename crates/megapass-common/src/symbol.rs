use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One cell of a password grid.
///
/// The in-game glyph for code `10` differs between the two titles, so both
/// `B` and `T` are part of the alphabet; a given variant only ever uses one.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Symbol {
    R,
    E,
    B,
    T,
    Dash,
}

impl Symbol {
    pub const fn as_char(self) -> char {
        match self {
            Self::R => 'R',
            Self::E => 'E',
            Self::B => 'B',
            Self::T => 'T',
            Self::Dash => '-',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Self::R),
            'E' => Some(Self::E),
            'B' => Some(Self::B),
            'T' => Some(Self::T),
            '-' => Some(Self::Dash),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.as_char()
    }
}
