use serde::{Deserialize, Serialize};
use std::fmt;

/// A categorical identifier at one nesting level.
///
/// Serialized as a bare string for one level and as an array of two or three
/// strings for nested levels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Factor {
    L1(String),
    L2(String, String),
    L3(String, String, String),
}

/// Nesting depth of a factor range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Levels {
    One,
    Two,
    Three,
}

impl Levels {
    pub fn count(self) -> usize {
        match self {
            Levels::One => 1,
            Levels::Two => 2,
            Levels::Three => 3,
        }
    }
}

impl Factor {
    pub fn depth(&self) -> Levels {
        match self {
            Factor::L1(_) => Levels::One,
            Factor::L2(..) => Levels::Two,
            Factor::L3(..) => Levels::Three,
        }
    }

    /// Top-level group of this factor. A level-1 factor is its own group.
    pub fn top(&self) -> &str {
        match self {
            Factor::L1(a) | Factor::L2(a, _) | Factor::L3(a, _, _) => a,
        }
    }

    /// Innermost component: the label drawn for this factor.
    pub fn leaf(&self) -> &str {
        match self {
            Factor::L1(a) | Factor::L2(_, a) | Factor::L3(_, _, a) => a,
        }
    }

    /// Components from outermost to innermost.
    pub fn parts(&self) -> Vec<&str> {
        match self {
            Factor::L1(a) => vec![a],
            Factor::L2(a, b) => vec![a, b],
            Factor::L3(a, b, c) => vec![a, b, c],
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts().join(":"))
    }
}

impl From<&str> for Factor {
    fn from(a: &str) -> Self {
        Factor::L1(a.to_string())
    }
}

impl From<(&str, &str)> for Factor {
    fn from((a, b): (&str, &str)) -> Self {
        Factor::L2(a.to_string(), b.to_string())
    }
}

impl From<(&str, &str, &str)> for Factor {
    fn from((a, b, c): (&str, &str, &str)) -> Self {
        Factor::L3(a.to_string(), b.to_string(), c.to_string())
    }
}
