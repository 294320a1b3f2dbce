use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::AgentError;
use crate::game::GameState;

use super::agent::Agent;

/// An agent that selects uniformly at random from legal cells. Useful as a
/// baseline opponent when no model artifact is available.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError> {
        let actions = state.legal_actions();
        if actions.is_empty() {
            return Err(AgentError::NoLegalMove);
        }
        let idx = self.rng.random_range(0..actions.len());
        Ok(actions[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, Player};

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::new();
        let state = GameState::new(Player::X);
        let legal = state.legal_actions();

        for _ in 0..100 {
            let action = agent.select_action(&state).unwrap();
            assert!(legal.contains(&action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent = RandomAgent::new();
        let mut state = GameState::new(Player::X);

        while !state.is_terminal() {
            let action = agent.select_action(&state).unwrap();
            state = state.apply_move(action).unwrap();
        }

        assert!(state.is_terminal());
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
