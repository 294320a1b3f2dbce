use crate::error::AgentError;
use crate::game::GameState;
use crate::model::Predictor;

use super::agent::Agent;
use super::encoding::encode_board;

/// An agent that plays the cell the predictive model scores highest.
///
/// The board is encoded once per move and the predictor invoked once; scores
/// of occupied cells are discarded, so the argmax can only land on a legal
/// index. Ties between equal scores resolve to the lowest index.
pub struct OracleAgent {
    predictor: Box<dyn Predictor>,
}

impl OracleAgent {
    pub fn new(predictor: Box<dyn Predictor>) -> Self {
        OracleAgent { predictor }
    }
}

impl Agent for OracleAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError> {
        let board = state.board();
        let scores = self.predictor.predict(&encode_board(board));

        let mut best: Option<(usize, f32)> = None;
        for index in board.empty_cells() {
            let score = scores[index];
            let better = match best {
                Some((_, top)) => score > top,
                None => true,
            };
            if better {
                best = Some((index, score));
            }
        }

        best.map(|(index, _)| index).ok_or(AgentError::NoLegalMove)
    }

    fn name(&self) -> &str {
        "MLP model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Player, CELLS};

    /// Predictor stub returning a fixed score vector.
    struct FixedScores([f32; CELLS]);

    impl Predictor for FixedScores {
        fn predict(&self, _features: &[f32; CELLS]) -> [f32; CELLS] {
            self.0
        }
    }

    #[test]
    fn test_picks_highest_scored_cell() {
        let scores = [5.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        let mut agent = OracleAgent::new(Box::new(FixedScores(scores)));
        let state = GameState::new(Player::O);

        assert_eq!(agent.select_action(&state).unwrap(), 0);
    }

    #[test]
    fn test_skips_occupied_top_choice() {
        let scores = [5.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
        let mut agent = OracleAgent::new(Box::new(FixedScores(scores)));
        // X already took the cell the model likes most.
        let state = GameState::new(Player::X).apply_move(0).unwrap();

        assert_eq!(agent.select_action(&state).unwrap(), 1);
    }

    #[test]
    fn test_equal_scores_pick_lowest_index() {
        let mut agent = OracleAgent::new(Box::new(FixedScores([2.0; CELLS])));
        let state = GameState::new(Player::X).apply_move(0).unwrap();

        assert_eq!(agent.select_action(&state).unwrap(), 1);
    }

    #[test]
    fn test_never_selects_occupied_cell() {
        let adversarial = [
            [f32::NEG_INFINITY; CELLS],
            [-1.0; CELLS],
            [0.0; CELLS],
            [9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
        ];

        for scores in adversarial {
            let mut agent = OracleAgent::new(Box::new(FixedScores(scores)));
            // Cells 0-4 filled, O to move.
            let mut state = GameState::new(Player::X);
            for index in [0, 1, 2, 3, 4] {
                state = state.apply_move(index).unwrap();
            }

            let action = agent.select_action(&state).unwrap();
            assert!(
                state.legal_actions().contains(&action),
                "action {} is not legal for scores {:?}",
                action,
                scores
            );
        }
    }

    #[test]
    fn test_full_board_is_no_legal_move() {
        let mut agent = OracleAgent::new(Box::new(FixedScores([1.0; CELLS])));

        // Fill all nine cells; the final move ends the round one way or
        // another, so build the board directly.
        let mut state = GameState::new(Player::X);
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state = state.apply_move(index).unwrap();
        }
        assert!(state.board().is_full());

        assert!(matches!(
            agent.select_action(&state),
            Err(AgentError::NoLegalMove)
        ));
    }
}
