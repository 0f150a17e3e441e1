//! TUI application state and logic

use crate::game::{Dictionary, Game, SubmitOutcome, share_text};
use crate::stats::{Statistic, StatsStore};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Letters go to the active row
    Typing,
    /// Terminal state reached; awaiting new-game or quit
    GameOver,
}

/// Application state
pub struct App {
    pub game: Game,
    dictionary: Box<dyn Dictionary>,
    source: Box<dyn WordSource>,
    store: Box<dyn StatsStore>,
    pub stats: Statistic,
    pub toast: Option<String>,
    pub show_stats: bool,
    pub share: Option<String>,
    pub last_won_row: Option<usize>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    hard_mode: bool,
}

impl App {
    /// Build the app: load statistics and start the first game
    ///
    /// # Errors
    /// Fails when the word source has no words.
    pub fn new(
        mut source: Box<dyn WordSource>,
        dictionary: Box<dyn Dictionary>,
        store: Box<dyn StatsStore>,
        hard_mode: bool,
    ) -> Result<Self> {
        let stats = store.load();
        let target = source
            .pick_target()
            .ok_or_else(|| anyhow::anyhow!("Word list is empty"))?;

        Ok(Self {
            game: Game::new(target, hard_mode),
            dictionary,
            source,
            store,
            stats,
            toast: None,
            show_stats: false,
            share: None,
            last_won_row: None,
            input_mode: InputMode::Typing,
            should_quit: false,
            hard_mode,
        })
    }

    /// Reset everything except the statistics record and start over
    ///
    /// # Errors
    /// Fails when the word source has no words.
    pub fn new_game(&mut self) -> Result<()> {
        let target = self
            .source
            .pick_target()
            .ok_or_else(|| anyhow::anyhow!("Word list is empty"))?;
        self.game = Game::new(target, self.hard_mode);
        self.toast = None;
        self.show_stats = false;
        self.share = None;
        self.last_won_row = None;
        self.input_mode = InputMode::Typing;
        Ok(())
    }

    pub fn press_letter(&mut self, letter: char) {
        self.toast = None;
        self.game.add_letter(letter);
    }

    pub fn press_backspace(&mut self) {
        self.toast = None;
        self.game.remove_letter();
    }

    /// Submit the active row and fold the outcome into app state
    ///
    /// Statistics are saved before the next event is processed.
    ///
    /// # Errors
    /// Fails only when the statistics record cannot be written.
    pub fn press_enter(&mut self) -> Result<()> {
        match self.game.submit_guess(self.dictionary.as_ref()) {
            Ok(SubmitOutcome::Win { row, message }) => {
                self.stats.update(true, Some(row));
                self.store.save(&self.stats)?;
                self.finish_game(message.to_string(), Some(row));
            }
            Ok(SubmitOutcome::Loss { message }) => {
                self.stats.update(false, None);
                self.store.save(&self.stats)?;
                self.finish_game(message, None);
            }
            Ok(SubmitOutcome::Continue { .. }) => {}
            Err(err) => {
                self.toast = Some(err.to_string());
            }
        }
        Ok(())
    }

    fn finish_game(&mut self, toast: String, won_row: Option<usize>) {
        self.toast = Some(toast);
        self.share = Some(share_text(
            self.stats.games,
            self.game.scored_rows(),
            won_row.is_some(),
        ));
        self.last_won_row = won_row;
        self.show_stats = true;
        self.input_mode = InputMode::GameOver;
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game()?;
                    }
                    KeyCode::Char('s') => {
                        app.show_stats = !app.show_stats;
                    }
                    _ => {
                        // In game-over mode, ignore other keys
                    }
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.press_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.press_backspace();
                    }
                    KeyCode::Enter => {
                        app.press_enter()?;
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
