//! Play the game on stdin/stdout.

use std::io;

use kv_fiction::{FictionSession, ReplConfig, Tokenizer, repl};
use tracing::info;

pub fn run(tokenizer: Tokenizer, echo: bool) -> Result<(), String> {
    let world = super::load_world()?;
    let mut session = FictionSession::new(world)
        .map_err(|e| e.to_string())?
        .with_tokenizer(tokenizer);
    let config = ReplConfig::default().with_echo(echo);

    info!(tokenizer = tokenizer.name(), echo, "starting session");
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut session, &config, stdin.lock(), stdout.lock())
        .map_err(|e| format!("session aborted: {e}"))?;
    Ok(())
}
