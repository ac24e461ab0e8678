//! Closed set of class labels a character can be recognized as

use crate::io::error::{ClassificationError, invalid_parameter};
use std::fmt;
use std::str::FromStr;

/// Class label of a reference character
///
/// Each standard is one Latin capital letter. The declaration order is the
/// catalog order: loaders walk [`Standard::ALL`] front to back, and ties
/// during selection resolve towards the earlier letter.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Standard {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Standard {
    /// Every standard in catalog order
    pub const ALL: [Self; 26] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    /// Letter naming this standard
    pub const fn letter(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Look up a standard by its letter, ignoring case
    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return None;
        }
        Self::ALL.get(usize::from(upper as u8 - b'A')).copied()
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Standard {
    type Err = ClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::from_letter(letter)
                .ok_or_else(|| invalid_parameter("standard", &s, &"expected a letter A-Z")),
            _ => Err(invalid_parameter(
                "standard",
                &s,
                &"expected a single letter",
            )),
        }
    }
}
