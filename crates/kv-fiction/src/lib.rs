//! Interactive fiction engine for Kvartira.
//!
//! Turns lines of player input into changes to a [`kv_core::World`] and
//! replies to show. The pieces are a whitespace command parser, a goal
//! evaluator that runs before every command, a narrator that builds room
//! descriptions, the per-command handlers in [`FictionSession`], and a
//! read-evaluate loop over any reader and writer.

/// Error types for the fiction engine.
pub mod error;
/// Goal evaluation.
pub mod goals;
/// Narrator system for descriptive text generation.
pub mod narrator;
/// Command parsing.
pub mod parser;
/// Player state management.
pub mod player;
/// The read-evaluate loop.
pub mod repl;
/// Interactive fiction session management.
pub mod session;

pub use error::{FictionError, FictionResult};
pub use goals::evaluate_goals;
pub use narrator::{Narrator, NarratorConfig, View};
pub use parser::{Command, Tokenizer, Verb, parse_command};
pub use player::{Inventory, PlayerState};
pub use repl::{ReplConfig, ReplSummary};
pub use session::FictionSession;
