//! TUI rendering with ratatui
//!
//! One function per screen: main menu, instructions, the game table and the
//! end-of-round banners.

use super::app::{App, MenuItem, MessageStyle, Screen};
use crate::game::MAX_STAGE;
use crate::output::formatters::{
    LOSE_BANNER, TITLE_BANNER, WIN_BANNER, clock_text, gallows, spaced,
};
use chrono::Local;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    match app.screen {
        Screen::Menu => render_menu(f, app),
        Screen::Instructions => render_instructions(f),
        Screen::Playing => render_game(f, app),
        Screen::Won => render_round_over(f, app, true),
        Screen::Lost => render_round_over(f, app, false),
    }
}

fn frame_block(color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(color))
}

fn banner(lines: &[&'static str], style: Style) -> Vec<Line<'static>> {
    lines
        .iter()
        .map(|&line| Line::from(Span::styled(line, style)))
        .collect()
}

/// Gallows lines with the figure drawn in red over the yellow frame
fn gallows_lines(stage: u8) -> Vec<Line<'static>> {
    let frame_style = Style::default().fg(Color::Yellow);
    let figure_style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
    let empty = gallows(0);

    gallows(stage)
        .into_iter()
        .zip(empty)
        .map(|(row, base)| {
            let base: Vec<char> = base.chars().collect();
            let mut spans = Vec::new();
            let mut run = String::new();
            let mut run_is_figure = false;

            for (i, ch) in row.chars().enumerate() {
                let is_figure = base.get(i) != Some(&ch);
                if is_figure != run_is_figure && !run.is_empty() {
                    let style = if run_is_figure { figure_style } else { frame_style };
                    spans.push(Span::styled(std::mem::take(&mut run), style));
                }
                run_is_figure = is_figure;
                run.push(ch);
            }
            if !run.is_empty() {
                let style = if run_is_figure { figure_style } else { frame_style };
                spans.push(Span::styled(run, style));
            }
            Line::from(spans)
        })
        .collect()
}

fn render_menu<R: Rng>(f: &mut Frame, app: &App<R>) {
    let title_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

    let mut content = vec![Line::from(""), Line::from("")];
    content.extend(banner(&TITLE_BANNER, title_style));
    content.push(Line::from(""));
    content.push(Line::from(""));

    for item in MenuItem::ALL {
        let style = if !app.is_enabled(item) {
            Style::default().fg(Color::Black).bg(Color::Red)
        } else if item == app.selected {
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Yellow)
        };
        content.push(Line::from(Span::styled(format!("  {}  ", item.label()), style)));
    }

    content.push(Line::from(""));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "PRESS I FOR INSTRUCTIONS.   ↑/↓ TO MOVE, ENTER TO SELECT, Q TO QUIT.",
        Style::default().fg(Color::DarkGray),
    )));

    let menu = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(frame_block(Color::Yellow).title(" Hangman "));
    f.render_widget(menu, f.area());
}

fn render_instructions(f: &mut Frame) {
    let block = frame_block(Color::Blue).title(" Instructions ");
    let inner = block.inner(f.area());
    f.render_widget(block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(42), Constraint::Min(20)])
        .split(inner);

    let mut art = gallows_lines(MAX_STAGE);
    art.push(Line::from(""));
    art.push(Line::from(Span::styled(
        "PRESS BACKSPACE TO RETURN",
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    )));
    f.render_widget(Paragraph::new(art), chunks[0]);

    let text_style = Style::default().fg(Color::Blue);
    let rules = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Hangman is a paper and pencil guessing game for two or more players.",
            text_style,
        )),
        Line::from(Span::styled(
            "One player thinks of a word, phrase or sentence and the other tries to guess it \
             by suggesting letters, within a certain number of guesses.",
            text_style,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "The first and last letter of every word are given away, along with every \
             other place those letters appear.",
            text_style,
        )),
        Line::from(Span::styled(
            "A correct letter adds its character code to your score; a wrong one takes it \
             away and adds a piece to the hangman. Six wrong letters and the game is lost.",
            text_style,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "You are a programmer, so you must play with your best friend, a computer.",
            text_style,
        )),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(rules, chunks[1]);
}

fn render_game<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Statistics
            Constraint::Min(20),    // Gallows and puzzle
            Constraint::Length(3),  // Help
        ])
        .split(f.area());

    render_stats(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(30)])
        .split(chunks[1]);

    let art = Paragraph::new(gallows_lines(app.session.stage()))
        .block(frame_block(Color::Yellow).title(" Gallows "));
    f.render_widget(art, main_chunks[0]);

    render_puzzle_panel(f, app, main_chunks[1]);

    let help = Paragraph::new(
        "Press a character to guess it  |  BACKSPACE: main menu  |  Ctrl-C: quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

fn render_stats<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let store = app.session.store();
    let stats = Line::from(vec![
        Span::raw("Score: "),
        Span::styled(
            app.session.score().to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Expressions: "),
        Span::styled(
            store.active_expressions().to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("   Characters: "),
        Span::styled(
            store.active_chars().to_string(),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let clock = clock_text(&Local::now());
    let block = frame_block(Color::Yellow);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(u16::try_from(clock.len()).unwrap_or(u16::MAX)),
        ])
        .split(inner);
    f.render_widget(Paragraph::new(stats), columns[0]);
    f.render_widget(
        Paragraph::new(clock).style(Style::default().fg(Color::DarkGray)),
        columns[1],
    );
}

fn render_puzzle_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Hidden string
            Constraint::Length(3), // Mistakes table
            Constraint::Length(3), // Stage gauge
            Constraint::Min(3),    // Message
        ])
        .split(area);

    let hidden = app
        .session
        .hidden()
        .map(|h| spaced(&h.to_string()))
        .unwrap_or_default();
    let puzzle = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            hidden,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: false })
    .block(frame_block(Color::Yellow).title(" Expression "));
    f.render_widget(puzzle, chunks[0]);

    let mistakes = app
        .session
        .mistakes()
        .map(ToString::to_string)
        .unwrap_or_default();
    let table = Paragraph::new(mistakes)
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .title(" Mistakes Table ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(table, chunks[1]);

    let stage = app.session.stage();
    let gauge = Gauge::default()
        .block(Block::default().title(" Hangman ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Red))
        .ratio(f64::from(stage.min(MAX_STAGE)) / f64::from(MAX_STAGE))
        .label(format!("{stage}/{MAX_STAGE} mistakes"));
    f.render_widget(gauge, chunks[2]);

    if let Some(message) = &app.message {
        let style = match message.style {
            MessageStyle::Info => Style::default().fg(Color::White),
            MessageStyle::Success => Style::default().fg(Color::Green),
            MessageStyle::Error => Style::default().fg(Color::Red),
        };
        let note = Paragraph::new(message.text.as_str())
            .style(style)
            .block(Block::default().title(" Messages ").borders(Borders::ALL));
        f.render_widget(note, chunks[3]);
    }
}

fn render_round_over<R: Rng>(f: &mut Frame, app: &App<R>, won: bool) {
    let (color, art, prompt) = if won {
        (
            Color::Green,
            &WIN_BANNER,
            "PRESS Q TO RETURN TO MENU.   PRESS N TO CONTINUE THE GAME.",
        )
    } else {
        (
            Color::Red,
            &LOSE_BANNER,
            "PRESS Q TO RETURN TO MENU.   PRESS N TO START A NEW GAME.",
        )
    };
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);

    let mut content = vec![Line::from(""), Line::from(""), Line::from("")];
    content.extend(banner(art, style));
    content.push(Line::from(""));

    if let Some(expression) = app.session.expression() {
        content.push(Line::from(vec![
            Span::raw(if won { "You guessed: " } else { "The answer was: " }),
            Span::styled(
                expression.revealed(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    content.push(Line::from(format!("Score: {}", app.session.score())));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(prompt, Style::default().fg(color))));

    let screen = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(frame_block(color));
    f.render_widget(screen, f.area());
}
