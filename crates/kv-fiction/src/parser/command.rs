//! Command parsing for player input.

use crate::error::{FictionError, FictionResult};

use super::tokenizer::Tokenizer;

/// An action keyword the interpreter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// Describe the current room.
    Look,
    /// Move to a neighbouring room.
    Go,
    /// Put on a wearable item.
    Wear,
    /// Pick up an item.
    Take,
    /// Use a carried item on a locked exit.
    Apply,
}

impl Verb {
    /// Parse a verb from its keyword. Keywords are matched exactly.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "осмотреться" => Some(Self::Look),
            "идти" => Some(Self::Go),
            "надеть" => Some(Self::Wear),
            "взять" => Some(Self::Take),
            "применить" => Some(Self::Apply),
            _ => None,
        }
    }

    /// Get the keyword for this verb.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Look => "осмотреться",
            Self::Go => "идти",
            Self::Wear => "надеть",
            Self::Take => "взять",
            Self::Apply => "применить",
        }
    }

    /// Required number of tokens, keyword included. `None` means any.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Self::Look => None,
            Self::Go | Self::Wear | Self::Take => Some(2),
            Self::Apply => Some(3),
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look around the current room.
    Look,
    /// Go to a neighbouring room, by name or area.
    Go {
        /// Room name or area tag.
        destination: String,
    },
    /// Put on a wearable item.
    Wear {
        /// The item name.
        item: String,
    },
    /// Take an item.
    Take {
        /// The item name.
        item: String,
    },
    /// Apply a carried item.
    Apply {
        /// The item name.
        item: String,
        /// What the player named as the target. Parsed but not used to pick
        /// the exit.
        target: String,
    },
    /// Unknown command.
    Unknown {
        /// The line as typed.
        input: String,
    },
}

/// Parse a player input line into a command.
///
/// A known keyword with the wrong number of operands is an error; an unknown
/// keyword is not, it parses to [`Command::Unknown`].
pub fn parse_command(input: &str, tokenizer: Tokenizer) -> FictionResult<Command> {
    let words = tokenizer.split(input);
    let Some(verb) = words.first().and_then(|w| Verb::parse(w)) else {
        return Ok(Command::Unknown {
            input: input.to_string(),
        });
    };

    if verb.arity().is_some_and(|n| n != words.len()) {
        return Err(FictionError::WrongArity(verb));
    }

    let operand = |i: usize| words.get(i).copied().unwrap_or_default().to_string();

    Ok(match verb {
        Verb::Look => Command::Look,
        Verb::Go => Command::Go {
            destination: operand(1),
        },
        Verb::Wear => Command::Wear { item: operand(1) },
        Verb::Take => Command::Take { item: operand(1) },
        Verb::Apply => Command::Apply {
            item: operand(1),
            target: operand(2),
        },
    })
}
