use crate::core::{ActionResult, Direction, MoveOutcome, UserAction};
use crate::levels::render_grid_to_string;
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn setup_terminal()
-> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(f.area());

        // Game area
        let game_text = render_grid_to_string(state.session.grid());
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title(title(state)))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let status_paragraph = Paragraph::new(status_line(state))
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(if state.won { Color::Green } else { Color::Yellow }))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);

        let instructions = if state.won {
            "Solved! N for next level, Z to undo, Q to quit"
        } else {
            "WASD/Arrows move, Z undo, Y redo, R restart, K save, L load, Q quit"
        };
        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

pub fn title(state: &GameRenderState) -> String {
    match state.level {
        Some(level) => format!("Sokoban - Level {}/{}", level, state.level_count),
        None => "Sokoban - Loaded history".to_string(),
    }
}

pub fn status_line(state: &GameRenderState) -> String {
    let session = state.session;
    let grid = session.grid();
    let mut status = format!(
        "Moves: {} | Boxes: {}/{}",
        session.move_count(),
        grid.count_boxes_on_target(),
        grid.count_boxes()
    );
    match (session.can_undo(), session.can_redo()) {
        (true, true) => status.push_str(" | Undo/Redo"),
        (true, false) => status.push_str(" | Undo"),
        (false, true) => status.push_str(" | Redo"),
        (false, false) => {}
    }
    if state.won {
        status.push_str(" | Level complete!");
    }
    if let Some(result) = state.last_result {
        let last = match result {
            ActionResult::Moved(MoveOutcome::Pushed) => "pushed",
            ActionResult::Moved(_) => "stepped",
            ActionResult::Undone => "undone",
            ActionResult::Redone => "redone",
            ActionResult::NoChange => "no change",
        };
        status.push_str(&format!(" | Last: {}", last));
    }
    if let Some(message) = &state.message {
        status.push_str(&format!(" | {}", message));
    }
    if let Some(err) = &state.error {
        status.push_str(&format!(" | Error: {}", err));
    }
    status
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Restart,
    Save,
    Load,
    NextLevel,
    Quit,
    Timeout,
    Unknown,
}

pub fn input_from_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Right))
        }
        KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char('u') | KeyCode::Char('U') => {
            ConsoleInput::UserAction(UserAction::Undo)
        }
        KeyCode::Char('y') | KeyCode::Char('Y') => ConsoleInput::UserAction(UserAction::Redo),
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
        KeyCode::Char('k') | KeyCode::Char('K') => ConsoleInput::Save,
        KeyCode::Char('l') | KeyCode::Char('L') => ConsoleInput::Load,
        KeyCode::Char('n') | KeyCode::Char('N') => ConsoleInput::NextLevel,
        _ => ConsoleInput::Unknown,
    }
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(input_from_key(code));
        }
    }
    Ok(ConsoleInput::Timeout)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::GameSession;
    use crate::levels::parse_level;

    #[test]
    fn keys_map_to_actions() {
        assert!(matches!(
            input_from_key(KeyCode::Left),
            ConsoleInput::UserAction(UserAction::Move(Direction::Left))
        ));
        assert!(matches!(
            input_from_key(KeyCode::Char('z')),
            ConsoleInput::UserAction(UserAction::Undo)
        ));
        assert!(matches!(
            input_from_key(KeyCode::Char('Y')),
            ConsoleInput::UserAction(UserAction::Redo)
        ));
        assert!(matches!(input_from_key(KeyCode::Esc), ConsoleInput::Quit));
        assert!(matches!(input_from_key(KeyCode::Char('x')), ConsoleInput::Unknown));
    }

    #[test]
    fn status_reports_moves_and_result() {
        let mut session = GameSession::new(parse_level("####\n#@$.#\n####").unwrap()).unwrap();
        let result = session.perform(UserAction::Move(Direction::Right)).unwrap();
        let state = GameRenderState {
            session: &session,
            level: Some(1),
            level_count: 1,
            won: session.is_solved(),
            last_result: Some(result),
            message: None,
            error: None,
        };
        assert_eq!(title(&state), "Sokoban - Level 1/1");
        assert_eq!(
            status_line(&state),
            "Moves: 1 | Boxes: 1/1 | Undo | Level complete! | Last: pushed"
        );
    }

    #[test]
    fn status_tracks_history_availability() {
        let level = parse_level("#####\n#@$ .#\n#####").unwrap();
        let mut session = GameSession::new(level).unwrap();
        session.attempt_move(Direction::Right).unwrap();
        session.attempt_move(Direction::Right).unwrap();
        session.undo().unwrap();
        let mut state = GameRenderState {
            session: &session,
            level: Some(2),
            level_count: 5,
            won: false,
            last_result: Some(ActionResult::Undone),
            message: None,
            error: None,
        };
        assert_eq!(status_line(&state), "Moves: 1 | Boxes: 0/1 | Undo/Redo | Last: undone");

        let mut rewound = session.clone();
        rewound.undo().unwrap();
        state.session = &rewound;
        assert_eq!(status_line(&state), "Moves: 0 | Boxes: 0/1 | Redo | Last: undone");
    }

    #[test]
    fn loaded_history_has_no_level_number() {
        let session = GameSession::new(parse_level("###\n#@#\n###").unwrap()).unwrap();
        let state = GameRenderState {
            session: &session,
            level: None,
            level_count: 5,
            won: false,
            last_result: None,
            message: None,
            error: None,
        };
        assert_eq!(title(&state), "Sokoban - Loaded history");
        assert_eq!(status_line(&state), "Moves: 0 | Boxes: 0/0");
    }
}
