//! Narrator system for generating descriptive text.

mod config;
mod describe;

pub use config::NarratorConfig;
pub use describe::{Narrator, View};
