use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque team identifier.
///
/// Playoff placeholders ("winner of UEFA path A") are ordinary ids as far as
/// the engine is concerned; nothing here inspects the contents.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TeamId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Group letters of a 12-group tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GroupLetter {
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
}

impl GroupLetter {
    pub const ALL: [GroupLetter; 12] = [
        GroupLetter::A,
        GroupLetter::B,
        GroupLetter::C,
        GroupLetter::D,
        GroupLetter::E,
        GroupLetter::F,
        GroupLetter::G,
        GroupLetter::H,
        GroupLetter::I,
        GroupLetter::J,
        GroupLetter::K,
        GroupLetter::L,
    ];

    pub fn as_char(self) -> char {
        match self {
            GroupLetter::A => 'A',
            GroupLetter::B => 'B',
            GroupLetter::C => 'C',
            GroupLetter::D => 'D',
            GroupLetter::E => 'E',
            GroupLetter::F => 'F',
            GroupLetter::G => 'G',
            GroupLetter::H => 'H',
            GroupLetter::I => 'I',
            GroupLetter::J => 'J',
            GroupLetter::K => 'K',
            GroupLetter::L => 'L',
        }
    }
}

impl fmt::Display for GroupLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
