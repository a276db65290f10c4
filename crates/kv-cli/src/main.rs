//! CLI frontend for the Kvartira text adventure.

mod commands;
mod logging;

use std::process;

use clap::{Parser, Subcommand};
use kv_fiction::Tokenizer;

#[derive(Parser)]
#[command(
    name = "kv",
    about = "Kvartira: a tiny text adventure about getting out of the house",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log more to stderr (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game, reading commands from stdin (default)
    Play {
        /// How input lines are split: strict (every space) or whitespace
        #[arg(long, default_value = "strict", value_parser = parse_tokenizer)]
        tokenizer: Tokenizer,

        /// Do not repeat each input line before the reply
        #[arg(long)]
        no_echo: bool,
    },

    /// Print the initial world as JSON
    World,

    /// Print a summary of rooms, exits, contents, and goals
    Rooms,
}

fn parse_tokenizer(s: &str) -> Result<Tokenizer, String> {
    Tokenizer::parse(s)
        .ok_or_else(|| format!("unknown tokenizer \"{s}\". Use: strict, whitespace"))
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Play {
        tokenizer: Tokenizer::default(),
        no_echo: false,
    });

    let result = match command {
        Commands::Play { tokenizer, no_echo } => commands::play::run(tokenizer, !no_echo),
        Commands::World => commands::world::run(),
        Commands::Rooms => commands::rooms::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
