use crate::game::{Board, Cell, GameState, Player, SIDE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::Phase;

pub fn render(frame: &mut Frame, game_state: &GameState, phase: Phase, message: &Option<String>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(7),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, phase, chunks[0]);
    render_board(frame, game_state.board(), chunks[1]);
    render_message(frame, phase, message, chunks[2]);
    render_controls(frame, phase, chunks[3]);
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    phase: Phase,
    area: ratatui::layout::Rect,
) {
    let (status, color) = match phase {
        Phase::ChooseFirst => ("New round".to_string(), Color::White),
        Phase::Playing => match game_state.current_player() {
            Player::X => ("Your turn (X)".to_string(), Color::Cyan),
            Player::O => ("Model is thinking (O)".to_string(), Color::Magenta),
        },
        Phase::GameOver => ("Round over".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic Tac Toe"));

    frame.render_widget(header, area);
}

/// Render the board as three `X | O | -` rows, each followed by its 1-9
/// positional legend.
fn render_board(frame: &mut Frame, board: &Board, area: ratatui::layout::Rect) {
    let mut lines = vec![Line::from("")];

    for row in 0..SIDE {
        let mut spans = Vec::new();
        for col in 0..SIDE {
            let index = row * SIDE + col;
            let (symbol, color) = match board.get(index) {
                Cell::Empty => ("-", Color::DarkGray),
                Cell::X => ("X", Color::Cyan),
                Cell::O => ("O", Color::Magenta),
            };
            spans.push(Span::styled(symbol, Style::default().fg(color)));
            if col + 1 < SIDE {
                spans.push(Span::raw(" | "));
            }
        }

        let legend = format!(
            "      {}|{}|{}",
            row * SIDE + 1,
            row * SIDE + 2,
            row * SIDE + 3
        );
        spans.push(Span::styled(legend, Style::default().fg(Color::DarkGray)));

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(
    frame: &mut Frame,
    phase: Phase,
    message: &Option<String>,
    area: ratatui::layout::Rect,
) {
    let text = match (message.as_deref(), phase) {
        (Some(msg), Phase::GameOver) => format!("{} Play again? (Y/N)", msg),
        (Some(msg), _) => msg.to_string(),
        (None, Phase::ChooseFirst) => "Do you want to go first? (Y/N)".to_string(),
        (None, Phase::Playing) => "Choose position from 1-9".to_string(),
        (None, Phase::GameOver) => "Play again? (Y/N)".to_string(),
    };

    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, phase: Phase, area: ratatui::layout::Rect) {
    let text = match phase {
        Phase::ChooseFirst => "Y: you start  |  N: model starts  |  Q: quit",
        Phase::Playing => "1-9: place your mark  |  Q: quit",
        Phase::GameOver => "Y: play again  |  N: quit",
    };

    let controls = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
