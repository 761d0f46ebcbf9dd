//! Fair Dice console game
//!
//! Plays the non-transitive dice game against the computer, with every
//! random choice negotiated through a verifiable commit-reveal round.

mod config;
mod console;
mod game;
mod input;

use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use console::{print_failure, ConsoleReporter, Palette};
use game::Game;
use input::LineInput;

#[derive(Parser)]
#[command(
    name = "fair-dice",
    about = "Provably fair non-transitive dice game",
    version
)]
struct Cli {
    /// Dice as comma-separated faces, e.g. 2,2,4,4,9,9 (at least three dice)
    #[arg(allow_hyphen_values = true)]
    dice: Vec<String>,

    /// Disable colored output (also set by NO_COLOR=1)
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    no_color: bool,

    /// Log filter used when RUST_LOG is not set, e.g. debug or fair_dice_core=trace
    #[arg(long, env = "FAIR_DICE_LOG", default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match Config::resolve(&cli.dice, cli.no_color) {
        Ok(config) => config,
        Err(err) => {
            print_failure(&Palette::new(!cli.no_color), &err, true);
            process::exit(1);
        }
    };
    tracing::info!("Loaded {} dice", config.dice.len());

    let palette = Palette::new(config.color);

    let input = LineInput::new(io::stdin().lock(), palette);
    let reporter = ConsoleReporter::new(palette);
    let mut game = Game::new(config.dice, input, reporter, palette);

    if let Err(err) = game.run() {
        tracing::error!("Game aborted: {}", err);
        print_failure(&palette, &err, false);
        process::exit(1);
    }
}
