//! Line-oriented prompt input.
//!
//! Every prompt accepts one of its numeric options, `?` for help or `x`
//! to exit. Invalid answers re-prompt in a loop; end of input exits.

use std::io::{self, BufRead, Write};

use fair_dice_core::{Contribution, ContributionRequest, ContributionSource, RoundKind};

use crate::console::Palette;

/// Answer to a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Option(u32),
    Help,
    Exit,
}

/// Reads answers line by line from `reader`
pub struct LineInput<R> {
    reader: R,
    palette: Palette,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R, palette: Palette) -> Self {
        Self { reader, palette }
    }

    /// Prompt until the answer is one of `options`, help or exit
    pub fn choose(&mut self, prompt: &str, options: &[u32]) -> Choice {
        loop {
            print!("{} > ", prompt);
            if let Err(err) = io::stdout().flush() {
                tracing::warn!("Failed to flush prompt: {}", err);
            }

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return Choice::Exit,
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!("Failed to read input: {}", err);
                    return Choice::Exit;
                }
            }

            match parse_answer(&line, options) {
                Ok(choice) => return choice,
                Err(problem) => {
                    println!("\n{}", self.palette.bad("Hold on a second:"));
                    println!("{}", problem);
                    println!("Need help? Type '?' for instructions\n");
                }
            }
        }
    }
}

impl<R: BufRead> ContributionSource for LineInput<R> {
    fn contribution(&mut self, request: &ContributionRequest) -> Contribution {
        let options: Vec<u32> = request.valid_values().collect();
        let prompt = match request.kind {
            RoundKind::CoinToss => "Your selection for guess".to_string(),
            RoundKind::FaceRoll(player) => format!(
                "Please add your number (0-{}) for {}",
                request.modulus.saturating_sub(1),
                player
            ),
        };

        match self.choose(&prompt, &options) {
            Choice::Option(value) => Contribution::Value(value),
            Choice::Help => Contribution::Help,
            Choice::Exit => Contribution::Exit,
        }
    }
}

fn parse_answer(line: &str, options: &[u32]) -> Result<Choice, String> {
    let answer = line.trim().to_lowercase();
    match answer.as_str() {
        "x" => return Ok(Choice::Exit),
        "?" => return Ok(Choice::Help),
        _ => {}
    }

    let value: u32 = answer
        .parse()
        .map_err(|_| "Please enter a valid number".to_string())?;
    if !options.contains(&value) {
        let listed: Vec<String> = options.iter().map(|o| o.to_string()).collect();
        return Err(format!(
            "Please choose from these options: {}",
            listed.join(", ")
        ));
    }
    Ok(Choice::Option(value))
}
