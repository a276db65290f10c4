//! Splitting an input line into words.

/// How an input line is split into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tokenizer {
    /// Split on every single space. Consecutive spaces produce empty tokens,
    /// which then fail arity or name checks.
    #[default]
    Strict,
    /// Split on runs of whitespace, dropping empty tokens.
    Whitespace,
}

impl Tokenizer {
    /// Parse a tokenizer name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "whitespace" | "ws" => Some(Self::Whitespace),
            _ => None,
        }
    }

    /// Get the name of this tokenizer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Whitespace => "whitespace",
        }
    }

    /// Split a line into tokens.
    pub fn split(self, input: &str) -> Vec<&str> {
        match self {
            Self::Strict => input.split(' ').collect(),
            Self::Whitespace => input.split_whitespace().collect(),
        }
    }
}
