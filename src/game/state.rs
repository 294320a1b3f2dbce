use super::board::{Cell, LINES};
use super::{Board, Player};

/// Result of evaluating a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Tie,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    OutOfRange,
    Occupied,
    GameOver,
}

/// Board plus the player whose turn it is. The outcome is never stored;
/// [`GameState::outcome`] recomputes it from the cells on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
}

impl GameState {
    /// Create a fresh round with the given starting player
    pub fn new(starting: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: starting,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Evaluate the board: the first winning line (rows, then columns, then
    /// diagonals) decides the winner; a full board with no winning line is a
    /// tie. Pure query, callable any number of times.
    pub fn outcome(&self) -> Outcome {
        for line in LINES {
            let cell = self.board.get(line[0]);
            if cell != Cell::Empty
                && cell == self.board.get(line[1])
                && cell == self.board.get(line[2])
            {
                let winner = match cell {
                    Cell::X => Player::X,
                    Cell::O => Player::O,
                    Cell::Empty => unreachable!("winning line checked non-empty"),
                };
                return Outcome::Win(winner);
            }
        }

        if self.board.is_full() {
            Outcome::Tie
        } else {
            Outcome::InProgress
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome() != Outcome::InProgress
    }

    /// Get list of legal cell indices
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        self.board.empty_cells().collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, index: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mut new_board = self.board;
        new_board
            .place(index, self.current_player.to_cell())
            .map_err(|e| match e {
                super::board::MoveError::OutOfRange => MoveError::OutOfRange,
                super::board::MoveError::Occupied => MoveError::Occupied,
            })?;

        Ok(GameState {
            board: new_board,
            current_player: self.current_player.other(),
        })
    }

    /// Apply move mutably (for UI efficiency)
    pub fn apply_move_mut(&mut self, index: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board
            .place(index, self.current_player.to_cell())
            .map_err(|e| match e {
                super::board::MoveError::OutOfRange => MoveError::OutOfRange,
                super::board::MoveError::Occupied => MoveError::Occupied,
            })?;

        self.current_player = self.current_player.other();

        Ok(())
    }
}
