//! Game phases: first-move toss, dice selection, rolls and result.

use std::io::BufRead;

use fair_dice_core::{
    games::{choose_computer_die, first_player, judge, roll_face},
    protocol::play_round,
    DiceSet, Die, DuelResult, FairDiceError, Player, RoundKind, RoundOutcome, SecureRandom,
};

use crate::console::{banner, probability_table, ConsoleReporter, Palette};
use crate::input::{Choice, LineInput};

/// Whether the session goes on
enum Flow {
    Continue,
    Exit,
}

/// One interactive session over a fixed set of dice
pub struct Game<R> {
    dice: DiceSet,
    rng: SecureRandom,
    input: LineInput<R>,
    reporter: ConsoleReporter,
    palette: Palette,
}

impl<R: BufRead> Game<R> {
    pub fn new(
        dice: DiceSet,
        input: LineInput<R>,
        reporter: ConsoleReporter,
        palette: Palette,
    ) -> Self {
        Self {
            dice,
            rng: SecureRandom::new(),
            input,
            reporter,
            palette,
        }
    }

    /// Play rounds until the user exits
    pub fn run(&mut self) -> Result<(), FairDiceError> {
        self.welcome();
        loop {
            if let Flow::Exit = self.play_round_of_game()? {
                break;
            }
            if let Flow::Exit = self.next_options() {
                break;
            }
        }
        println!("Exiting game...");
        Ok(())
    }

    fn welcome(&self) {
        let p = &self.palette;
        println!("{}", p.heading("\n===== NON-TRANSITIVE DICE GAME =====\n"));
        println!(
            "{}",
            p.muted("Welcome! This is a fair dice game where both player and computer can verify each other's moves.")
        );
        println!("\n{}", p.highlight("Game loaded with these dice combinations:"));
        self.list_dice(None);
    }

    fn list_dice(&self, taken: Option<usize>) {
        for index in self.dice.available(taken) {
            println!(
                "{} {}",
                self.palette.good(&format!("{} -", index + 1)),
                self.dice.as_slice()[index]
            );
        }
    }

    fn play_round_of_game(&mut self) -> Result<Flow, FairDiceError> {
        println!("{}", banner(&self.palette, "PHASE 1: WHO GOES FIRST?"));
        let toss = loop {
            match play_round(
                &mut self.rng,
                RoundKind::CoinToss,
                &mut self.input,
                &mut self.reporter,
            )? {
                RoundOutcome::Completed(reveal) => break reveal,
                RoundOutcome::HelpRequested => self.show_help(),
                RoundOutcome::ExitRequested => return Ok(Flow::Exit),
            }
        };

        let first = first_player(&toss);
        let message = match first {
            Player::Human => self.palette.good("\nYou won the toss, so you'll go first!"),
            Player::Computer => self
                .palette
                .bad("\nComputer won the toss, so Computer goes first!"),
        };
        println!("{}", message);

        println!("{}", banner(&self.palette, "PHASE 2: DICE SELECTION"));
        let (computer_index, human_index) = match first {
            Player::Computer => {
                let computer = choose_computer_die(&mut self.rng, &self.dice, None)?;
                println!(
                    "{}",
                    self.palette.muted(&format!(
                        "Computer is choosing its dice: It is {} dice.",
                        self.dice.as_slice()[computer]
                    ))
                );
                let Some(human) = self.select_human_die(Some(computer)) else {
                    return Ok(Flow::Exit);
                };
                (computer, human)
            }
            Player::Human => {
                let Some(human) = self.select_human_die(None) else {
                    return Ok(Flow::Exit);
                };
                let computer = choose_computer_die(&mut self.rng, &self.dice, Some(human))?;
                println!(
                    "{}",
                    self.palette.muted(&format!(
                        "\nComputer selected dice: {}",
                        self.dice.as_slice()[computer]
                    ))
                );
                (computer, human)
            }
        };

        let computer_die = self.dice.as_slice()[computer_index];
        let human_die = self.dice.as_slice()[human_index];
        println!(
            "{}",
            self.palette.highlight(&format!(
                "\nYour dice {} vs Computer's dice {}",
                human_die, computer_die
            ))
        );

        println!("{}", banner(&self.palette, "PHASE 3: ROLLING THE DICE"));
        let Some(computer_roll) = self.roll(Player::Computer, &computer_die)? else {
            return Ok(Flow::Exit);
        };
        let Some(human_roll) = self.roll(Player::Human, &human_die)? else {
            return Ok(Flow::Exit);
        };

        println!("{}", banner(&self.palette, "PHASE 4: ROUND RESULT"));
        match judge(computer_roll, human_roll) {
            DuelResult::HumanWins => {
                println!("{}", self.palette.good("Congratulations! You win!"));
                println!(
                    "Your roll of {} beats Computer's roll of {}",
                    human_roll, computer_roll
                );
            }
            DuelResult::ComputerWins => {
                println!("{}", self.palette.accent("Computer wins!"));
                println!(
                    "Computer's roll of {} beats your {}",
                    computer_roll, human_roll
                );
            }
            DuelResult::Tie => {
                println!(
                    "{} {} equals {}",
                    self.palette.highlight("It's a tie!"),
                    human_roll,
                    computer_roll
                );
            }
        }
        Ok(Flow::Continue)
    }

    /// Roll `die` for `player`; `None` if the user exits
    fn roll(&mut self, player: Player, die: &Die) -> Result<Option<u32>, FairDiceError> {
        loop {
            match play_round(
                &mut self.rng,
                RoundKind::FaceRoll(player),
                &mut self.input,
                &mut self.reporter,
            )? {
                RoundOutcome::Completed(reveal) => {
                    let value = roll_face(die, &reveal)?;
                    println!(
                        "Using dice face at position {}: {}'s dice shows {}\n",
                        reveal.result,
                        player,
                        self.palette.accent(&value.to_string())
                    );
                    return Ok(Some(value));
                }
                RoundOutcome::HelpRequested => self.show_roll_help(),
                RoundOutcome::ExitRequested => return Ok(None),
            }
        }
    }

    /// Index of the die the user picks; `None` if the user exits
    fn select_human_die(&mut self, taken: Option<usize>) -> Option<usize> {
        loop {
            println!("{}", self.palette.muted("Select your dice:"));
            self.list_dice(taken);
            println!("{}", self.palette.info("? - View winning chances"));

            let options: Vec<u32> = self
                .dice
                .available(taken)
                .into_iter()
                .map(|index| index as u32 + 1)
                .collect();
            match self.input.choose("Your choice", &options) {
                Choice::Option(number) => return Some(number as usize - 1),
                Choice::Help => println!("{}", probability_table(&self.palette, &self.dice)),
                Choice::Exit => return None,
            }
        }
    }

    fn next_options(&mut self) -> Flow {
        loop {
            println!("{}", self.palette.heading("\n=== WHAT'S NEXT ==="));
            println!("{}", self.palette.good("1 - Play another round"));
            println!("{}", self.palette.info("2 - View winning probabilities"));
            println!("{}", self.palette.highlight("3 - Exit game"));

            match self.input.choose("Your choice", &[1, 2, 3]) {
                Choice::Option(1) => return Flow::Continue,
                Choice::Option(2) | Choice::Help => {
                    println!("{}", probability_table(&self.palette, &self.dice))
                }
                Choice::Option(_) | Choice::Exit => return Flow::Exit,
            }
        }
    }

    fn show_help(&self) {
        let p = &self.palette;
        println!("{}", p.heading("\n===== GAME HELP START =====\n"));
        println!("Game Rules:");
        println!("1. First, we determine who goes first through a coin flip");
        println!("2. Players take turns selecting and rolling dice");
        println!("3. Highest roll wins the round");
        println!("4. All moves are cryptographically verified for fairness\n");

        println!("Current Dice Configurations:");
        for (index, die) in self.dice.iter().enumerate() {
            println!("Dice {}: {}", index + 1, die);
        }

        println!("{}", p.highlight("\n===== PROBABILITIES ====="));
        println!("{}", probability_table(p, &self.dice));
        println!("{}", p.heading("===== GAME HELP END =====\n"));
    }

    fn show_roll_help(&self) {
        println!("{}", self.palette.heading("\n===== ROLL HELP =====\n"));
        println!("How the roll works:");
        println!("1. Computer generates a secure random number (0-5)");
        println!("2. You provide your number (0-5)");
        println!("3. Numbers are added and divided by 6 to get final position");
        println!("4. The dice face at that position becomes the roll result");
        println!("\nA new commitment is made for the retried roll.");
        println!("Type 'X' to exit or select a number to continue\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn game(script: &str) -> Game<Cursor<Vec<u8>>> {
        let palette = Palette::new(false);
        let dice = DiceSet::parse(&["2,2,4,4,9,9", "1,1,6,6,8,8", "3,3,5,5,7,7"]).unwrap();
        let input = LineInput::new(Cursor::new(script.as_bytes().to_vec()), palette);
        Game::new(dice, input, ConsoleReporter::new(palette), palette)
    }

    #[test]
    fn test_exit_at_first_prompt() {
        assert!(game("x\n").run().is_ok());
    }

    #[test]
    fn test_help_then_exit() {
        assert!(game("?\nx\n").run().is_ok());
    }

    #[test]
    fn test_full_round_then_exit() {
        // Guess, pick a die (the second answer covers an already taken die),
        // two roll contributions, then leave from the menu
        assert!(game("0\n1\n2\n0\n0\n3\n").run().is_ok());
    }

    #[test]
    fn test_end_of_input_mid_game() {
        assert!(game("1\n").run().is_ok());
    }
}
