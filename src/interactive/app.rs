//! TUI application state and logic

use crate::core::GuessOutcome;
use crate::game::{GameSession, RoundState};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait for input before redrawing the header clock
const TICK: Duration = Duration::from_millis(250);

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Instructions,
    Playing,
    Won,
    Lost,
}

/// Main menu entries, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    NewGame,
    Resume,
    Quit,
}

impl MenuItem {
    pub const ALL: [Self; 3] = [Self::NewGame, Self::Resume, Self::Quit];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewGame => "New Game",
            Self::Resume => "Resume Game",
            Self::Quit => "Quit",
        }
    }

    const fn position(self) -> usize {
        match self {
            Self::NewGame => 0,
            Self::Resume => 1,
            Self::Quit => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<R = StdRng> {
    pub session: GameSession<R>,
    pub screen: Screen,
    pub selected: MenuItem,
    pub message: Option<Message>,
    pub should_quit: bool,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(session: GameSession<R>) -> Self {
        Self {
            session,
            screen: Screen::Menu,
            selected: MenuItem::NewGame,
            message: None,
            should_quit: false,
        }
    }

    /// Whether a menu entry can be chosen right now
    #[must_use]
    pub fn is_enabled(&self, item: MenuItem) -> bool {
        item != MenuItem::Resume || self.session.can_resume()
    }

    /// Move the menu cursor, wrapping around and skipping disabled entries
    pub fn move_selection(&mut self, down: bool) {
        let len = MenuItem::ALL.len();
        let mut pos = self.selected.position();
        for _ in 0..len {
            pos = if down { (pos + 1) % len } else { (pos + len - 1) % len };
            if self.is_enabled(MenuItem::ALL[pos]) {
                break;
            }
        }
        self.selected = MenuItem::ALL[pos];
    }

    /// Start a round and switch to the screen matching its state
    ///
    /// # Errors
    ///
    /// Returns an error when no expression is left to play.
    pub fn start_round(&mut self, reset_score: bool) -> Result<()> {
        let state = self.session.start(reset_score)?;
        self.message = None;
        self.screen = Self::screen_for(state);
        Ok(())
    }

    const fn screen_for(state: RoundState) -> Screen {
        match state {
            RoundState::AwaitingGuess => Screen::Playing,
            RoundState::Won => Screen::Won,
            RoundState::Lost => Screen::Lost,
        }
    }

    /// Leave the round; it stays resumable if unfinished
    pub fn return_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.selected = if self.session.can_resume() {
            MenuItem::Resume
        } else {
            MenuItem::NewGame
        };
    }

    pub fn make_guess(&mut self, ch: char) {
        let Some(outcome) = self.session.guess(ch) else {
            return;
        };

        let upper = ch.to_uppercase();
        self.message = Some(match outcome {
            GuessOutcome::Hit => Message {
                text: format!("{upper} is in the expression!"),
                style: MessageStyle::Success,
            },
            GuessOutcome::Miss => Message {
                text: format!("No {upper} in the expression."),
                style: MessageStyle::Error,
            },
            GuessOutcome::Repeat => Message {
                text: format!("{upper} was already tried."),
                style: MessageStyle::Info,
            },
        });

        if let Some(state) = self.session.state() {
            self.screen = Self::screen_for(state);
        }
    }

    /// Apply one key press to the current screen
    ///
    /// # Errors
    ///
    /// Returns an error when a new round is requested but no expression is
    /// left to play.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.screen {
            Screen::Menu => match key.code {
                KeyCode::Up => self.move_selection(false),
                KeyCode::Down | KeyCode::Tab => self.move_selection(true),
                KeyCode::Char('i' | 'I') => self.screen = Screen::Instructions,
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                KeyCode::Enter => match self.selected {
                    MenuItem::NewGame => self.start_round(true)?,
                    MenuItem::Resume if self.session.can_resume() => {
                        self.screen = Screen::Playing;
                    }
                    MenuItem::Resume => {}
                    MenuItem::Quit => self.should_quit = true,
                },
                _ => {}
            },
            Screen::Instructions => {
                if matches!(key.code, KeyCode::Backspace | KeyCode::Esc) {
                    self.screen = Screen::Menu;
                }
            }
            Screen::Playing => match key.code {
                KeyCode::Backspace | KeyCode::Esc => self.return_to_menu(),
                KeyCode::Char(c) => self.make_guess(c),
                _ => {}
            },
            Screen::Won | Screen::Lost => match key.code {
                KeyCode::Char('n' | 'N') => {
                    // Winning keeps the score going; losing starts over
                    let reset = self.screen == Screen::Lost;
                    self.start_round(reset)?;
                }
                KeyCode::Char('q' | 'Q') => self.return_to_menu(),
                _ => {}
            },
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if the expression database runs out.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    info!("tui started");

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!(code = ?key.code, screen = ?app.screen, "key");
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    info!(score = app.session.score(), "tui closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HangmanError;
    use crate::puzzle::PuzzleStore;

    fn app(lines: &str) -> App {
        let mut store = PuzzleStore::new();
        store.load(lines.as_bytes(), "test").unwrap();
        App::new(GameSession::seeded(store, 5))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code)).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn menu_skips_resume_when_nothing_to_resume() {
        let mut app = app("cat\n");
        assert_eq!(app.selected, MenuItem::NewGame);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, MenuItem::Quit);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, MenuItem::NewGame);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, MenuItem::Quit);
    }

    #[test]
    fn new_game_then_backspace_is_resumable() {
        let mut app = app("horse\n");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Playing);

        type_str(&mut app, "z");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.screen, Screen::Menu);
        assert_eq!(app.selected, MenuItem::Resume);
        assert!(app.is_enabled(MenuItem::Resume));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.session.stage(), 1);
    }

    #[test]
    fn winning_moves_to_win_screen_and_continues_with_score() {
        let mut app = app("hi\nok\n");
        press(&mut app, KeyCode::Enter);
        let last = app.session.expression().unwrap().chars()[1];
        type_str(&mut app, &last.to_string());
        assert_eq!(app.screen, Screen::Won);
        let score = app.session.score();

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.session.score(), score);
    }

    #[test]
    fn losing_then_new_game_resets_score() {
        let mut app = app("cat\ndog\n");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "123456");
        assert_eq!(app.screen, Screen::Lost);
        assert!(app.session.score() < 0);

        press(&mut app, KeyCode::Char('N'));
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.session.score(), 0);
    }

    #[test]
    fn finished_round_is_not_resumable() {
        let mut app = app("cat\ndog\n");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "123456");
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.screen, Screen::Menu);
        assert_eq!(app.selected, MenuItem::NewGame);
        assert!(!app.is_enabled(MenuItem::Resume));
    }

    #[test]
    fn guess_messages_follow_outcome() {
        let mut app = app("horse\n");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "o");
        assert_eq!(app.message.as_ref().unwrap().style, MessageStyle::Success);
        type_str(&mut app, "o");
        assert_eq!(app.message.as_ref().unwrap().style, MessageStyle::Info);
        type_str(&mut app, "z");
        assert_eq!(
            app.message.as_ref().unwrap().text,
            "No Z in the expression."
        );
    }

    #[test]
    fn instructions_and_quit() {
        let mut app = app("cat\n");
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.screen, Screen::Instructions);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Menu);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_mid_round() {
        let mut app = app("cat\n");
        press(&mut app, KeyCode::Enter);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);
        assert_eq!(app.session.stage(), 0);
    }

    #[test]
    fn running_out_of_expressions_is_an_error() {
        let mut app = app("hi\n");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "i");
        let err = app.handle_key(KeyEvent::from(KeyCode::Char('n'))).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HangmanError>(),
            Some(HangmanError::PuzzlesExhausted { .. })
        ));
    }
}
