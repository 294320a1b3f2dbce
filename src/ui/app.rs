use crate::ai::Agent;
use crate::game::{GameState, MoveError, Outcome, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Which screen the app is showing. The human always plays X; the agent
/// plays O. A round walks ChooseFirst -> Playing -> GameOver and either
/// loops back or quits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Asking whether the human wants the opening move.
    ChooseFirst,
    /// Round in progress, waiting for the human to pick a cell.
    Playing,
    /// Round finished; showing the result and the replay prompt.
    GameOver,
}

pub struct App {
    game_state: GameState,
    phase: Phase,
    agent: Box<dyn Agent>,
    message: Option<String>,
    should_quit: bool,
    fatal: Option<String>,
}

impl App {
    pub fn new(agent: Box<dyn Agent>) -> Self {
        App {
            game_state: GameState::new(Player::X),
            phase: Phase::ChooseFirst,
            agent,
            message: None,
            should_quit: false,
            fatal: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if let Some(fault) = self.fatal.take() {
                return Err(io::Error::new(io::ErrorKind::Other, fault));
            }
            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press. Unrecognized keys leave the current prompt on
    /// screen, which is the re-prompt loop of a line-based interface.
    fn handle_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }

        match self.phase {
            Phase::ChooseFirst => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.start_round(Player::X),
                KeyCode::Char('n') | KeyCode::Char('N') => self.start_round(Player::O),
                _ => {}
            },
            Phase::Playing => {
                if let KeyCode::Char(c @ '1'..='9') = key.code {
                    let index = c as usize - '1' as usize;
                    self.place_human(index);
                }
            }
            Phase::GameOver => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.phase = Phase::ChooseFirst;
                    self.message = None;
                }
                KeyCode::Char('n') | KeyCode::Char('N') => {
                    self.should_quit = true;
                }
                _ => {}
            },
        }
    }

    /// Begin a fresh round. When the model opens, it moves immediately.
    fn start_round(&mut self, starting: Player) {
        self.game_state = GameState::new(starting);
        self.phase = Phase::Playing;
        self.message = None;

        if starting == Player::O {
            self.model_turn();
        }
    }

    /// Place the human mark, then hand the turn to the model.
    fn place_human(&mut self, index: usize) {
        match self.game_state.apply_move_mut(index) {
            Ok(()) => {
                self.message = None;
                if self.check_round_over() {
                    return;
                }
                self.model_turn();
            }
            Err(MoveError::Occupied) => {
                self.message = Some("Position already taken, choose another!".to_string());
            }
            Err(MoveError::OutOfRange) => {
                self.message = Some("Choose a position from 1-9.".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("The round is over.".to_string());
            }
        }
    }

    /// Let the model play while the round is live and it is O's turn.
    fn model_turn(&mut self) {
        while self.game_state.outcome() == Outcome::InProgress
            && self.game_state.current_player() == Player::O
        {
            let index = match self.agent.select_action(&self.game_state) {
                Ok(index) => index,
                Err(err) => {
                    self.fatal = Some(err.to_string());
                    return;
                }
            };

            if let Err(err) = self.game_state.apply_move_mut(index) {
                self.fatal = Some(format!(
                    "{} played an illegal move at cell {}: {:?}",
                    self.agent.name(),
                    index,
                    err
                ));
                return;
            }
        }

        self.check_round_over();
    }

    /// If the round ended, announce the result and move to the replay prompt.
    fn check_round_over(&mut self) -> bool {
        let announcement = match self.game_state.outcome() {
            Outcome::InProgress => return false,
            Outcome::Win(Player::X) => "You win!".to_string(),
            Outcome::Win(Player::O) => format!("{} wins!", self.agent.name()),
            Outcome::Tie => "It's a tie!".to_string(),
        };

        self.message = Some(announcement);
        self.phase = Phase::GameOver;
        true
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.phase, &self.message);
    }
}
