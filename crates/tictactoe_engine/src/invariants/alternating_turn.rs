//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Mark;

/// Invariant: players alternate turns, X first.
///
/// While the game is in progress the mark to move matches the parity of
/// the move count.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        if let Some(first) = history.first()
            && first.mark != Mark::X
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        if engine.is_over() {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 { Mark::X } else { Mark::O };
        engine.turn() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_turn_parity_over_a_game() {
        let mut engine = GameEngine::new();
        for (k, index) in [4, 0, 8, 2, 1].into_iter().enumerate() {
            let expected = if k % 2 == 0 { Mark::X } else { Mark::O };
            assert_eq!(engine.turn(), expected);
            engine.place_mark(index);
            assert!(AlternatingTurnInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_holds_after_win() {
        let engine = GameEngine::replay(&[0, 3, 1, 4, 2]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&engine));
    }
}
