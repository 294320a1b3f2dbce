use crate::error::AgentError;
use crate::game::GameState;

/// Interface between the game loop and a move policy.
pub trait Agent {
    /// Select a board index for the current player. Returns
    /// [`AgentError::NoLegalMove`] when the board has no empty cell; the game
    /// loop evaluates the outcome before every move, so hitting that error
    /// means the caller's invariant is broken.
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
