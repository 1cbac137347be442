//! Application state and key handling.

use super::input::{digit_cell, move_cursor};
use crate::config::HotseatConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hotseat_tictactoe::{EngineError, GameEngine, Phase, Position, Slot};
use tracing::{debug, warn};

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Slot,
    rejection: Option<EngineError>,
    show_indices: bool,
}

impl App {
    /// Creates the app in the setup screen, prefilling configured names.
    pub fn new(config: &HotseatConfig) -> Self {
        let mut engine = GameEngine::new();
        if let Some(name) = config.player1() {
            engine.set_player_name(Slot::One, name.clone());
        }
        if let Some(name) = config.player2() {
            engine.set_player_name(Slot::Two, name.clone());
        }
        Self {
            engine,
            cursor: Position::Center,
            focus: Slot::One,
            rejection: None,
            show_indices: *config.show_indices(),
        }
    }

    /// The engine being rendered.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Name field receiving keystrokes on the setup screen.
    pub fn focus(&self) -> Slot {
        self.focus
    }

    /// Whether empty cells show their index.
    pub fn show_indices(&self) -> bool {
        self.show_indices
    }

    /// Status bar text: the last rejected intent, or the engine status.
    pub fn status_message(&self) -> String {
        match &self.rejection {
            Some(err) => err.to_string(),
            None => self.engine.status_line(),
        }
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Control::Quit;
        }
        if key.code == KeyCode::Esc {
            return Control::Quit;
        }

        match self.engine.phase() {
            Phase::Setup => self.handle_setup_key(key.code),
            Phase::InProgress | Phase::Finished => self.handle_game_key(key.code),
        }
    }

    fn handle_setup_key(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = match self.focus {
                    Slot::One => Slot::Two,
                    Slot::Two => Slot::One,
                };
            }
            KeyCode::Char(c) => self.edit_name(|name| name.push(c)),
            KeyCode::Backspace => self.edit_name(|name| {
                name.pop();
            }),
            KeyCode::Enter => {
                let result = self.engine.start_game();
                self.record(result);
                self.cursor = Position::Center;
            }
            _ => {}
        }
        Control::Continue
    }

    fn edit_name(&mut self, edit: impl FnOnce(&mut String)) {
        let mut name = self.engine.names().get(self.focus).to_string();
        edit(&mut name);
        self.engine.set_player_name(self.focus, name);
        self.rejection = None;
    }

    fn handle_game_key(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Char('q') => return Control::Quit,
            KeyCode::Char('r') => {
                self.engine.reset_game();
                self.rejection = None;
            }
            KeyCode::Char('n') => {
                self.engine.new_game();
                self.focus = Slot::One;
                self.rejection = None;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let result = self.engine.play(self.cursor);
                self.record(result);
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, code);
            }
            other => {
                if let Some(index) = digit_cell(other) {
                    if let Some(position) = Position::from_index(index) {
                        self.cursor = position;
                    }
                    let result = self.engine.play_cell(index);
                    self.record(result);
                }
            }
        }
        Control::Continue
    }

    fn record<T: std::fmt::Debug>(&mut self, result: Result<T, EngineError>) {
        match result {
            Ok(value) => {
                debug!(?value, "Intent applied");
                self.rejection = None;
            }
            Err(err) => {
                warn!(error = %err, "Intent rejected");
                self.rejection = Some(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotseat_tictactoe::{Outcome, Player};

    fn press(app: &mut App, code: KeyCode) -> Control {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn started_app() -> App {
        let config = HotseatConfig::default().with_names(Some("Ann".into()), Some("Bob".into()));
        let mut app = App::new(&config);
        press(&mut app, KeyCode::Enter);
        app
    }

    #[test]
    fn test_typing_names_and_starting() {
        let mut app = App::new(&HotseatConfig::default());
        type_text(&mut app, "Ann");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Bobb");
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.engine().names().get(Slot::One), "Ann");
        assert_eq!(app.engine().names().get(Slot::Two), "Bob");
        assert!(app.engine().can_start());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine().phase(), Phase::InProgress);
    }

    #[test]
    fn test_start_with_blank_name_shows_error() {
        let mut app = App::new(&HotseatConfig::default());
        type_text(&mut app, "Ann");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.engine().phase(), Phase::Setup);
        assert_eq!(
            app.status_message(),
            EngineError::InvalidStartCondition(Slot::Two).to_string()
        );
    }

    #[test]
    fn test_setup_letters_are_not_commands() {
        let mut app = App::new(&HotseatConfig::default());
        assert_eq!(press(&mut app, KeyCode::Char('q')), Control::Continue);
        assert_eq!(app.engine().names().get(Slot::One), "q");
    }

    #[test]
    fn test_cursor_play_and_win_by_digits() {
        let mut app = started_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine().board().get(Position::Center).player(), Some(Player::X));

        for digit in ['0', '6', '3'] {
            press(&mut app, KeyCode::Char(digit));
        }
        assert_eq!(app.cursor(), Position::MiddleLeft);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.engine().outcome(), Some(Outcome::Winner(Player::X)));
        assert_eq!(app.status_message(), "Ann Wins!");
    }

    #[test]
    fn test_occupied_cell_rejection_clears_on_next_move() {
        let mut app = started_app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(
            app.status_message(),
            EngineError::CellOccupied(Position::Center).to_string()
        );

        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.status_message(), "Current Player: Ann (X)");
    }

    #[test]
    fn test_reset_and_new_game_keys() {
        let mut app = started_app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.engine().move_count(), 0);
        assert_eq!(app.engine().names().get(Slot::One), "Ann");

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.engine().phase(), Phase::Setup);
        assert_eq!(app.engine().names().get(Slot::One), "");
        assert_eq!(app.focus(), Slot::One);
    }

    #[test]
    fn test_out_of_range_digit_rejected() {
        let mut app = started_app();
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(
            app.status_message(),
            EngineError::IndexOutOfRange(9).to_string()
        );
        assert_eq!(app.engine().move_count(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = started_app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), Control::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), Control::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Control::Quit
        );
    }
}
