//! First-move coin toss.

use crate::protocol::{Player, Reveal};

/// Who moves first after the coin-toss round.
///
/// The human guesses the computer's committed bit; the combined value is 0
/// exactly when the guess matched, in which case the human moves first.
pub fn first_player(toss: &Reveal) -> Player {
    if toss.result == 0 {
        Player::Human
    } else {
        Player::Computer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::SecretKey;
    use crate::protocol::FairValueProtocol;

    fn toss(computer: u32, guess: u32) -> Reveal {
        let key = SecretKey::from_bytes([9u8; 32]);
        let (_, round) = FairValueProtocol::with_value(key, computer, 2)
            .unwrap()
            .publish();
        round.contribute(guess).unwrap().reveal()
    }

    #[test]
    fn test_correct_guess_moves_first() {
        assert_eq!(first_player(&toss(0, 0)), Player::Human);
        assert_eq!(first_player(&toss(1, 1)), Player::Human);
    }

    #[test]
    fn test_wrong_guess_lets_computer_move_first() {
        assert_eq!(first_player(&toss(0, 1)), Player::Computer);
        assert_eq!(first_player(&toss(1, 0)), Player::Computer);
    }
}
