//! TUI application state and logic

use crate::commands::{ShopOffer, buy, shop_offers};
use crate::core::Word;
use crate::game::{
    Advance, Difficulty, GameError, GuessOutcome, Mode, Modifiers, Resolution, Session,
    SessionConfig, Summary, UpgradeKind,
};
use crate::profile::{Profile, StatsView};
use crate::wordlists::WordCorpus;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_secs(1);

/// Application state
pub struct App<'a> {
    corpus: &'a WordCorpus,
    pub profile: Profile,
    pub session: Option<Session<'a>>,
    pub overlay: Option<Overlay>,
    pub modifiers: Modifiers,
    pub difficulty: Difficulty,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    seed: Option<u64>,
}

/// Modal panels drawn over the board; while one is open only its own keys are handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    ExtraLife { lives_left: u32 },
    WordResult { won: bool, target: Word, guesses: u32 },
    Summary(Summary),
    Shop { selected: usize },
    Stats { view: StatsView, confirm_reset: bool },
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

/// Upgrade hotkeys during play, in sidebar order
pub const HOTKEYS: [(char, UpgradeKind); 5] = [
    ('1', UpgradeKind::SuperHint),
    ('2', UpgradeKind::PositiveHint),
    ('3', UpgradeKind::NegativeHint),
    ('4', UpgradeKind::BonusGuess),
    ('5', UpgradeKind::WordReroll),
];

impl<'a> App<'a> {
    #[must_use]
    pub fn new(corpus: &'a WordCorpus, profile: Profile) -> Self {
        Self {
            corpus,
            profile,
            session: None,
            overlay: None,
            modifiers: Modifiers::default(),
            difficulty: Difficulty::default(),
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Press R for a Run or E for Endless.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            seed: None,
        }
    }

    /// Deterministic word draws, one seed per session
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&mut self) -> StdRng {
        match self.seed {
            Some(seed) => {
                self.seed = Some(seed.wrapping_add(1));
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        SessionConfig::new(self.modifiers, self.difficulty)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn report(&mut self, error: &GameError) {
        if !error.is_silent() {
            self.add_message(&error.to_string(), MessageStyle::Error);
        }
    }

    /// Flip one of the four menu modifiers (1-4)
    pub const fn toggle_modifier(&mut self, index: usize) {
        let modifiers = &mut self.modifiers;
        match index {
            1 => modifiers.extra_word = !modifiers.extra_word,
            2 => modifiers.fewer_guesses = !modifiers.fewer_guesses,
            3 => modifiers.boss = !modifiers.boss,
            4 => modifiers.timer = !modifiers.timer,
            _ => {}
        }
    }

    pub const fn toggle_difficulty(&mut self) {
        self.difficulty = match self.difficulty {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        };
    }

    pub fn start(&mut self, mode: Mode) {
        let rng = self.rng();
        match Session::start(mode, self.config(), self.corpus, &mut self.profile, rng) {
            Ok(session) => {
                self.session = Some(session);
                self.input_buffer.clear();
                self.messages.clear();
                let text = match mode {
                    Mode::Run => "Run started. Good luck!",
                    Mode::Endless => "Endless started. How far can you go?",
                };
                self.add_message(text, MessageStyle::Info);
            }
            Err(e) => self.report(&e),
        }
    }

    /// Letters typed for the current guess, capped at the target length
    pub fn type_char(&mut self, c: char) {
        let Some(session) = &self.session else {
            return;
        };
        if c.is_ascii_alphabetic() && self.input_buffer.len() < session.round().target().len() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    pub fn submit_guess(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let result = session.submit_guess(&mut self.profile, &self.input_buffer);
        match result {
            Ok(GuessOutcome::Continue) => self.input_buffer.clear(),
            Ok(GuessOutcome::Resolved(resolution)) => {
                self.input_buffer.clear();
                self.on_resolution(resolution);
            }
            Err(e) => self.report(&e),
        }
    }

    fn on_resolution(&mut self, resolution: Resolution) {
        let Some(session) = &self.session else {
            return;
        };
        let round = session.round();
        let word_result = |won| Overlay::WordResult {
            won,
            target: round.target().clone(),
            guesses: round.guess_count(),
        };
        self.overlay = Some(match resolution {
            Resolution::Solved => word_result(true),
            Resolution::Failed => word_result(false),
            Resolution::ExtraLifeUsed { lives_left } => Overlay::ExtraLife { lives_left },
            Resolution::GameOver(summary) => Overlay::Summary(summary),
        });
    }

    pub fn use_upgrade(&mut self, kind: UpgradeKind) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let result = if kind == UpgradeKind::WordReroll {
            session
                .reroll(&mut self.profile)
                .map(|()| "New word! Guesses and timer reset.".to_string())
        } else {
            session
                .use_upgrade(&mut self.profile, kind)
                .map(|hint| hint.to_string())
        };
        match result {
            Ok(text) => {
                if kind == UpgradeKind::WordReroll {
                    self.input_buffer.clear();
                }
                self.add_message(&text, MessageStyle::Success);
            }
            Err(e) => self.report(&e),
        }
    }

    /// One second of wall time while a round is on screen
    pub fn on_tick(&mut self) {
        if self.overlay.is_some() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.tick(&mut self.profile) {
            Ok(Some(resolution)) => {
                self.input_buffer.clear();
                self.add_message("Time's up!", MessageStyle::Error);
                self.on_resolution(resolution);
            }
            Ok(None) => {}
            Err(e) => self.report(&e),
        }
    }

    /// Dismiss the word-result panel and move on
    pub fn continue_after_word(&mut self) {
        let Some(session) = self.session.as_mut() else {
            self.overlay = None;
            return;
        };
        match session.next_word(&mut self.profile) {
            Ok(Advance::NextWord) => self.overlay = None,
            Ok(Advance::Finished(summary)) => self.overlay = Some(Overlay::Summary(summary)),
            Err(e) => self.report(&e),
        }
    }

    /// Close the summary and return to the menu
    pub fn close_summary(&mut self) {
        self.overlay = None;
        self.session = None;
        self.messages.clear();
        self.add_message(
            &format!("You have {} gold. Press S for the shop.", self.profile.player().gold),
            MessageStyle::Info,
        );
    }

    /// Leave the session early; no gold is paid
    pub fn quit_session(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        self.overlay = None;
        self.input_buffer.clear();
        match session.quit(&mut self.profile) {
            Ok(()) => self.add_message("Session abandoned. No gold earned.", MessageStyle::Info),
            Err(e) => self.report(&e),
        }
    }

    #[must_use]
    pub fn offers(&self) -> Vec<ShopOffer> {
        shop_offers(&self.profile)
    }

    pub fn shop_move(&mut self, delta: isize) {
        if let Some(Overlay::Shop { selected }) = &mut self.overlay {
            *selected = selected
                .saturating_add_signed(delta)
                .min(UpgradeKind::COUNT - 1);
        }
    }

    pub fn shop_buy(&mut self) {
        let Some(Overlay::Shop { selected }) = self.overlay else {
            return;
        };
        let Some(kind) = UpgradeKind::from_index(selected) else {
            return;
        };
        match buy(&mut self.profile, kind) {
            Ok(offer) => self.add_message(
                &format!("Bought {kind} ({}/{})", offer.level, kind.max_level()),
                MessageStyle::Success,
            ),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn cycle_stats_view(&mut self) {
        if let Some(Overlay::Stats { view, confirm_reset }) = &mut self.overlay {
            *view = match *view {
                StatsView::Normal => StatsView::Endless,
                StatsView::Endless => StatsView::Total,
                StatsView::Total => StatsView::Normal,
            };
            *confirm_reset = false;
        }
    }

    pub fn reset_profile(&mut self) {
        match self.profile.reset() {
            Ok(()) => self.add_message("All progress reset.", MessageStyle::Info),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        if let Some(Overlay::Stats { confirm_reset, .. }) = &mut self.overlay {
            *confirm_reset = false;
        }
    }

    /// Route one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit_session();
            self.should_quit = true;
            return;
        }

        match self.overlay.clone() {
            Some(overlay) => self.handle_overlay_key(&overlay, key.code),
            None if self.session.is_some() => self.handle_play_key(key.code),
            None => self.handle_menu_key(key.code),
        }
    }

    fn handle_overlay_key(&mut self, overlay: &Overlay, code: KeyCode) {
        match overlay {
            Overlay::ExtraLife { .. } => {
                if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.overlay = None;
                }
            }
            Overlay::WordResult { .. } => {
                if matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.continue_after_word();
                }
            }
            Overlay::Summary(_) => {
                if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.close_summary();
                }
            }
            Overlay::Shop { .. } => match code {
                KeyCode::Up | KeyCode::Char('k') => self.shop_move(-1),
                KeyCode::Down | KeyCode::Char('j') => self.shop_move(1),
                KeyCode::Enter | KeyCode::Char('b') => self.shop_buy(),
                KeyCode::Esc | KeyCode::Char('q' | 's') => self.overlay = None,
                _ => {}
            },
            Overlay::Stats {
                confirm_reset: true,
                ..
            } => {
                if code == KeyCode::Char('y') {
                    self.reset_profile();
                } else if let Some(Overlay::Stats { confirm_reset, .. }) = &mut self.overlay {
                    *confirm_reset = false;
                }
            }
            Overlay::Stats { .. } => match code {
                KeyCode::Tab | KeyCode::Right | KeyCode::Left => self.cycle_stats_view(),
                KeyCode::Char('x') => {
                    if let Some(Overlay::Stats { confirm_reset, .. }) = &mut self.overlay {
                        *confirm_reset = true;
                    }
                }
                KeyCode::Esc | KeyCode::Char('q' | 't') => self.overlay = None,
                _ => {}
            },
        }
    }

    fn handle_play_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.quit_session(),
            KeyCode::Enter => self.submit_guess(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) => {
                if let Some(&(_, kind)) = HOTKEYS.iter().find(|(key, _)| *key == c) {
                    self.use_upgrade(kind);
                } else {
                    self.type_char(c);
                }
            }
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') | KeyCode::Enter => self.start(Mode::Run),
            KeyCode::Char('e') => self.start(Mode::Endless),
            KeyCode::Char('h') => self.toggle_difficulty(),
            KeyCode::Char('s') => self.overlay = Some(Overlay::Shop { selected: 0 }),
            KeyCode::Char('t') => {
                self.overlay = Some(Overlay::Stats {
                    view: StatsView::default(),
                    confirm_reset: false,
                });
            }
            KeyCode::Char(c @ '1'..='4') => {
                self.toggle_modifier(c as usize - '0' as usize);
            }
            _ => {}
        }
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if last_tick.elapsed() >= TICK {
            app.on_tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
