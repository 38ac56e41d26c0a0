use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of a question in the quiz (0-based).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionIndex(usize);

impl QuestionIndex {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }

    /// 1-based number shown to the user.
    #[must_use]
    pub fn number(&self) -> usize {
        self.0 + 1
    }
}

/// Position of a choice within a question's options (0-based).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OptionIndex(usize);

impl OptionIndex {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for QuestionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionIndex({})", self.0)
    }
}

impl fmt::Debug for OptionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionIndex({})", self.0)
    }
}

impl fmt::Display for QuestionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for OptionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing an index from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIndexError {
    kind: &'static str,
    raw: String,
}

impl ParseIndexError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ParseIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from {:?}", self.kind, self.raw)
    }
}

impl std::error::Error for ParseIndexError {}

impl FromStr for QuestionIndex {
    type Err = ParseIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .map(QuestionIndex::new)
            .map_err(|_| ParseIndexError {
                kind: "QuestionIndex",
                raw: s.to_string(),
            })
    }
}

impl FromStr for OptionIndex {
    type Err = ParseIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .map(OptionIndex::new)
            .map_err(|_| ParseIndexError {
                kind: "OptionIndex",
                raw: s.to_string(),
            })
    }
}
