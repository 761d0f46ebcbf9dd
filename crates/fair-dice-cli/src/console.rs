//! Console rendering of round events, tables and messages.

use colored::{ColoredString, Colorize};
use comfy_table::{presets::UTF8_FULL, Table};

use fair_dice_core::{DiceSet, FairDiceError, Reporter, RoundEvent, RoundKind};

/// Colors applied to console text; a no-op when disabled
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, |s| s.dimmed())
    }

    pub fn highlight(&self, text: &str) -> String {
        self.paint(text, |s| s.yellow())
    }

    pub fn good(&self, text: &str) -> String {
        self.paint(text, |s| s.green())
    }

    pub fn bad(&self, text: &str) -> String {
        self.paint(text, |s| s.red())
    }

    pub fn info(&self, text: &str) -> String {
        self.paint(text, |s| s.blue())
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(text, |s| s.magenta())
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(text, |s| s.cyan().bold())
    }
}

/// Prints round events as they happen
pub struct ConsoleReporter {
    palette: Palette,
}

impl ConsoleReporter {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: &RoundEvent) {
        let p = &self.palette;
        match event {
            RoundEvent::Started { kind, .. } => match kind {
                RoundKind::CoinToss => {
                    println!("{}", p.muted("Let's decide who makes the first move!"));
                }
                RoundKind::FaceRoll(player) => {
                    println!("[{}'s roll]", player);
                    println!(
                        "{}",
                        p.muted("To ensure fair play, we'll both contribute to the final roll.")
                    );
                }
            },
            RoundEvent::CommitmentPublished { kind, tag, .. } => {
                println!(
                    "{}",
                    p.muted("Computer has made its choice and secured it with this code:")
                );
                println!("{}", p.highlight(&format!("HMAC: {}", tag)));
                match kind {
                    RoundKind::CoinToss => {
                        println!("\n{}", p.muted("Try to guess - heads or tails?"));
                        println!("{}", p.good("0 = Heads"));
                        println!("{}", p.good("1 = Tails"));
                    }
                    RoundKind::FaceRoll(_) => {
                        println!(
                            "{}",
                            p.muted(&format!(
                                "Add your own number (0-{}) to the computer's.",
                                kind.modulus() - 1
                            ))
                        );
                    }
                }
                println!("{}", p.bad("X = Exit game"));
                println!("{}", p.info("? = Need help?"));
            }
            RoundEvent::ContributionReceived { .. } | RoundEvent::Aborted { .. } => {}
            RoundEvent::Revealed { kind, reveal } => {
                println!("\n{}", p.muted("Let's verify:"));
                println!(
                    "{} {}",
                    p.muted("Computer's number was:"),
                    reveal.chosen_value
                );
                println!(
                    "{} {}",
                    p.muted("Verification Key:"),
                    p.highlight(&reveal.secret_key.to_hex())
                );
                if let RoundKind::FaceRoll(_) = kind {
                    println!(
                        "({} + {}) % {} = {}",
                        reveal.chosen_value, reveal.counterparty_value, reveal.modulus, reveal.result
                    );
                }
            }
        }
    }
}

/// Section banner, e.g. `===== PHASE 1 =====`
pub fn banner(palette: &Palette, title: &str) -> String {
    palette.heading(&format!("\n===== {} =====\n", title))
}

/// Win probabilities of every die against every other, as a table
pub fn probability_table(palette: &Palette, dice: &DiceSet) -> String {
    let matrix = dice.probabilities();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec!["Dice vs".to_string()];
    header.extend(dice.iter().map(|die| die.to_string()));
    table.set_header(header);

    for (die, row) in dice.iter().zip(matrix.to_percent_table()) {
        let mut cells = vec![die.to_string()];
        cells.extend(row);
        table.add_row(cells);
    }

    let mut out = String::new();
    out.push_str(&format!("\n{}\n", palette.highlight("Winning Probabilities Table:")));
    out.push_str("- Each row shows how likely that dice is to win against others\n");
    out.push_str("- Ties count as neither a win nor a loss\n");
    out.push_str("- '-' means same dice can't play against itself\n");
    match matrix.dominant() {
        Some(index) => out.push_str(&format!(
            "- Dice {} beats every other dice more often than not\n",
            index + 1
        )),
        None => out.push_str("- No dice beats all others: the set is non-transitive\n"),
    }
    out.push('\n');
    out.push_str(&table.to_string());
    out
}

/// Report an error on stderr, optionally with a usage example
pub fn print_failure(palette: &Palette, err: &FairDiceError, usage: bool) {
    eprintln!("\n{}", palette.bad("Oops! Something's not quite right:"));
    eprintln!("{}", err);
    if usage {
        eprintln!("\n{}", palette.highlight("Correct usage example:"));
        eprintln!(
            "{}\n",
            palette.good("fair-dice 2,2,4,4,9,9 6,8,1,1,8,6 7,5,3,7,5,3")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dice() -> DiceSet {
        DiceSet::parse(&["2,2,4,4,9,9", "1,1,6,6,8,8", "3,3,5,5,7,7"]).unwrap()
    }

    #[test]
    fn test_disabled_palette_is_plain() {
        let palette = Palette::new(false);
        assert_eq!(palette.highlight("HMAC"), "HMAC");
        assert_eq!(palette.heading("title"), "title");
    }

    #[test]
    fn test_probability_table_contents() {
        let table = probability_table(&Palette::new(false), &dice());

        assert!(table.contains("Dice vs"));
        assert!(table.contains("[2,2,4,4,9,9]"));
        assert!(table.contains("55.6%"));
        assert!(table.contains("44.4%"));
        assert!(table.contains("non-transitive"));
    }

    #[test]
    fn test_banner() {
        assert_eq!(
            banner(&Palette::new(false), "PHASE 1"),
            "\n===== PHASE 1 =====\n"
        );
    }
}
