//! TUI rendering with ratatui
//!
//! Menu, word board, keyboard, upgrade sidebar and modal overlays.

use super::app::{App, HOTKEYS, MessageStyle, Overlay};
use crate::commands::build_report;
use crate::core::{KeyboardState, Tile};
use crate::game::{Difficulty, Mode, ROUND_SECONDS, Round, Session, Summary};
use crate::profile::StatsView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match &app.session {
        Some(session) => render_game(f, app, session, chunks[1]),
        None => render_menu(f, app, chunks[1]),
    }

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if let Some(overlay) = &app.overlay {
        render_overlay(f, app, overlay);
    }
}

fn rounded(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "🔤 WORDRUN",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Gold: {}", app.profile.player().gold),
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn toggle_line(key: char, label: &str, on: bool) -> Line<'static> {
    let (mark, style) = if on {
        ("[x]", Style::default().fg(Color::Green))
    } else {
        ("[ ]", Style::default().fg(Color::DarkGray))
    };
    Line::from(vec![
        Span::styled(format!("  {key}  "), Style::default().fg(Color::Cyan)),
        Span::styled(mark, style),
        Span::raw(format!(" {label}")),
    ])
}

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let modifiers = app.modifiers;
    let hard = app.difficulty == Difficulty::Hard;
    let config = app.config();
    let content = vec![
        Line::from(Span::styled(
            "Modifiers",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        toggle_line('1', "+1 word per run", modifiers.extra_word),
        toggle_line('2', "-1 guess per word", modifiers.fewer_guesses),
        toggle_line('3', "Boss words (7 letters, +10 gold)", modifiers.boss),
        toggle_line('4', "60 second timer", modifiers.timer),
        Line::from(""),
        toggle_line('h', "Hard words (+1 gold per word)", hard),
        Line::from(""),
        Line::from(format!(
            "Run: {} words, {} guesses each, {} gold per word",
            config.run_words(),
            config.base_guesses(),
            config.gold_per_word()
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  R  ", Style::default().fg(Color::Cyan)),
            Span::raw("Start Run      "),
            Span::styled("  E  ", Style::default().fg(Color::Cyan)),
            Span::raw("Start Endless"),
        ]),
        Line::from(vec![
            Span::styled("  S  ", Style::default().fg(Color::Cyan)),
            Span::raw("Shop           "),
            Span::styled("  T  ", Style::default().fg(Color::Cyan)),
            Span::raw("Statistics"),
        ]),
    ];

    let menu = Paragraph::new(content)
        .block(rounded(" New Session "))
        .wrap(Wrap { trim: false });
    f.render_widget(menu, chunks[0]);

    let owned: Vec<ListItem> = app
        .profile
        .inventory()
        .into_iter()
        .map(|(kind, level)| ListItem::new(format!("{kind}  {level}/{}", kind.max_level())))
        .collect();
    let inventory = if owned.is_empty() {
        List::new(vec![ListItem::new("No upgrades yet")])
    } else {
        List::new(owned)
    };
    f.render_widget(inventory.block(rounded(" Inventory ")), chunks[1]);
}

fn render_game(f: &mut Frame, app: &App, session: &Session, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board and keyboard
            Constraint::Percentage(40), // Sidebar
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(5)])
        .split(chunks[0]);
    render_board(f, app, session, left[0]);
    render_keyboard(f, &session.round().keyboard(), left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Timer
            Constraint::Length(7), // Upgrades
            Constraint::Min(4),    // Messages
        ])
        .split(chunks[1]);
    render_timer(f, session.round(), right[0]);
    render_upgrades(f, session, right[1]);
    render_messages(f, app, right[2]);
}

fn tile_style(tile: Option<Tile>) -> Style {
    match tile {
        Some(Tile::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Tile::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Tile::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn board_title(session: &Session) -> String {
    let position = session.word_count().map_or_else(
        || format!(" Word {} ", session.word_number()),
        |count| format!(" Word {}/{count} ", session.word_number()),
    );
    let mut title = position;
    if session.round().is_boss() {
        title.push_str("- BOSS ");
    }
    if session.mode() == Mode::Endless {
        title.push_str(&format!("| Lives {} ", session.extra_lives()));
    }
    title
}

fn render_board(f: &mut Frame, app: &App, session: &Session, area: Rect) {
    let round = session.round();
    let length = round.target().len();
    let mut lines: Vec<Line> = round
        .guesses()
        .iter()
        .zip(round.feedback())
        .map(|(guess, feedback)| {
            Line::from(
                guess
                    .chars()
                    .iter()
                    .zip(feedback.tiles())
                    .map(|(&letter, &tile)| {
                        Span::styled(
                            format!(" {} ", char::from(letter.to_ascii_uppercase())),
                            tile_style(Some(tile)),
                        )
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let mut empty_rows = round.guesses_left();
    if round.is_active() && empty_rows > 0 {
        let typed: Vec<Span> = (0..length)
            .map(|i| {
                let c = app.input_buffer.as_bytes().get(i).map_or('_', |&b| {
                    char::from(b.to_ascii_uppercase())
                });
                Span::styled(
                    format!(" {c} "),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        lines.push(Line::from(typed));
        empty_rows -= 1;
    }
    for _ in 0..empty_rows {
        lines.push(Line::from(Span::styled(
            " · ".repeat(length),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let title = board_title(session);
    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(rounded(&title));
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardState, area: Rect) {
    let lines: Vec<Line> = KeyboardState::ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.bytes()
                    .map(|letter| {
                        Span::styled(
                            format!("{} ", char::from(letter.to_ascii_uppercase())),
                            tile_style(keyboard.state(letter)),
                        )
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(rounded(" Keyboard "));
    f.render_widget(widget, area);
}

fn render_timer(f: &mut Frame, round: &Round, area: Rect) {
    let Some(remaining) = round.timer().remaining() else {
        let widget = Paragraph::new(format!("Guesses left: {}", round.guesses_left()))
            .alignment(Alignment::Center)
            .block(rounded(" Round "));
        f.render_widget(widget, area);
        return;
    };

    let color = if remaining <= 10 { Color::Red } else { Color::Green };
    let percent = u16::try_from(remaining * 100 / ROUND_SECONDS).unwrap_or(100);
    let gauge = Gauge::default()
        .block(rounded(" Time "))
        .gauge_style(Style::default().fg(color))
        .percent(percent.min(100))
        .label(format!(
            "{remaining}s | {} guesses left",
            round.guesses_left()
        ));
    f.render_widget(gauge, area);
}

fn render_upgrades(f: &mut Frame, session: &Session, area: Rect) {
    let items: Vec<ListItem> = HOTKEYS
        .iter()
        .map(|&(key, kind)| {
            let uses = session.uses().remaining(kind);
            let style = if session.can_use(kind) {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(format!("{key}  {kind}  ×{uses}")).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(rounded(" Upgrades ")), area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();
    if let Some(session) = &app.session {
        items.extend(
            session
                .round()
                .hints()
                .iter()
                .map(|hint| ListItem::new(hint.to_string()).style(Style::default().fg(Color::Cyan))),
        );
    }
    items.extend(app.messages.iter().rev().take(10).map(|msg| {
        let style = match msg.style {
            MessageStyle::Info => Style::default().fg(Color::White),
            MessageStyle::Success => Style::default().fg(Color::Green),
            MessageStyle::Error => Style::default().fg(Color::Red),
        };
        ListItem::new(msg.text.clone()).style(style)
    }));

    let messages_list = List::new(items).block(rounded(" Hints & Messages "));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match (&app.session, &app.overlay) {
        (_, Some(_)) => (" Paused ", String::new(), Color::DarkGray),
        (Some(session), None) => (
            " Type your guess | Enter to submit ",
            app.input_buffer.to_uppercase(),
            if session.round().is_boss() {
                Color::Red
            } else {
                Color::Yellow
            },
        ),
        (None, None) => (" Menu ", "Pick a mode to begin".to_string(), Color::Cyan),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match (&app.overlay, &app.session) {
        (Some(Overlay::Shop { .. }), _) => "↑/↓: Select | Enter: Buy | Esc: Close",
        (Some(Overlay::Stats { .. }), _) => "Tab: Switch view | x: Reset all | Esc: Close",
        (Some(_), _) => "Enter: Continue",
        (None, Some(_)) => "1-5: Upgrades | Enter: Guess | Esc: Abandon | Ctrl-C: Quit",
        (None, None) => "r: Run | e: Endless | 1-4: Modifiers | h: Hard | s: Shop | t: Stats | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// Rectangle of the given percentage size centered in `area`
fn centered(area: Rect, width_pct: u16, height_pct: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - height_pct) / 2),
            Constraint::Percentage(height_pct),
            Constraint::Percentage((100 - height_pct) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_pct) / 2),
            Constraint::Percentage(width_pct),
            Constraint::Percentage((100 - width_pct) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_overlay(f: &mut Frame, app: &App, overlay: &Overlay) {
    let (title, lines, color, size) = match overlay {
        Overlay::ExtraLife { lives_left } => (
            " Extra Life ",
            vec![
                Line::from("❤ Extra life used!"),
                Line::from(format!("{lives_left} left. Try the same word again.")),
            ],
            Color::Red,
            (50, 30),
        ),
        Overlay::WordResult {
            won,
            target,
            guesses,
        } => {
            let word = Span::styled(
                target.text().to_uppercase(),
                Style::default().add_modifier(Modifier::BOLD),
            );
            let lines = if *won {
                vec![
                    Line::from(vec![Span::raw("🎉 Solved "), word]),
                    Line::from(format!("in {guesses} guesses")),
                ]
            } else {
                vec![Line::from(vec![Span::raw("❌ The word was "), word])]
            };
            let color = if *won { Color::Green } else { Color::Red };
            (" Word Over ", lines, color, (50, 30))
        }
        Overlay::Summary(summary) => (" Session Over ", summary_lines(summary), Color::Cyan, (60, 70)),
        Overlay::Shop { selected } => (" Upgrade Shop ", shop_lines(app, *selected), Color::Yellow, (80, 80)),
        Overlay::Stats {
            view,
            confirm_reset,
        } => (
            " Statistics ",
            stats_lines(app, *view, *confirm_reset),
            Color::Magenta,
            (70, 85),
        ),
    };

    let area = centered(f.area(), size.0, size.1);
    let popup = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn summary_lines(summary: &Summary) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(word) = &summary.failed_word {
        lines.push(Line::from(format!(
            "The word was {}",
            word.text().to_uppercase()
        )));
        lines.push(Line::from(""));
    }
    for record in &summary.words {
        let (mark, color) = if record.solved {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };
        let boss = if record.boss { " (boss)" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!(" {mark} "), Style::default().fg(color)),
            Span::raw(format!("{}{boss}", record.target.text().to_uppercase())),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Words solved: {}/{}",
        summary.words_solved, summary.words_total
    )));
    if summary.bosses_killed > 0 {
        lines.push(Line::from(format!("Bosses beaten: {}", summary.bosses_killed)));
    }
    lines.push(Line::from(Span::styled(
        format!("Gold earned: +{}", summary.gold_earned),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    if summary.new_best {
        lines.push(Line::from(Span::styled(
            "🏆 New Best!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines
}

fn shop_lines(app: &App, selected: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(format!("Gold: {}", app.profile.player().gold)),
        Line::from(""),
    ];
    for (i, offer) in app.offers().into_iter().enumerate() {
        let info = offer.kind.info();
        let price = if offer.is_maxed() {
            "MAXED".to_string()
        } else {
            format!("{} gold", info.cost)
        };
        let style = match (i == selected, offer.is_available()) {
            (true, _) => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            (false, true) => Style::default().fg(Color::White),
            (false, false) => Style::default().fg(Color::DarkGray),
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{} [{}/{}] {price}",
                info.name, offer.level, info.max_level
            ),
            style,
        )));
        if i == selected {
            lines.push(Line::from(format!("   {}", info.long_description)));
        }
    }
    lines
}

fn stats_lines(app: &App, view: StatsView, confirm_reset: bool) -> Vec<Line<'static>> {
    let report = build_report(app.profile.stats(), view);
    let mut lines = vec![Line::from(Span::styled(
        format!("< {} >", view.title()),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for section in report.sections {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            section.heading,
            Style::default().fg(Color::Cyan),
        )));
        for (label, value) in section.rows {
            lines.push(Line::from(format!("  {label:<26}{value}")));
        }
    }
    if confirm_reset {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Reset ALL progress, upgrades and gold? (y/n)",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }
    lines
}
