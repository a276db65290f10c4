//! Command parsing for player input.

mod command;
mod tokenizer;

pub use command::{Command, Verb, parse_command};
pub use tokenizer::Tokenizer;
