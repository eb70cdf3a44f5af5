// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal picker: feeds key and resize events into a session and draws the
//! visible window.
//!
//! Uses `crossterm` directly (raw mode, alternate screen). The best match sits
//! right above the prompt and worse matches stack upward, so Up walks toward
//! lower-ranked entries.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Color, SetAttribute, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use crate::logging;
use ngfind::Session;

/// Status line plus prompt line under the list.
const CHROME_ROWS: usize = 2;

/// How a picker run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Committed,
    Aborted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Continue,
    Finish(Outcome),
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    text: String,
    highlighted: bool,
}

/// Run the picker until the user commits or quits.
///
/// `max_rows` caps the list height; otherwise the list fills the terminal.
pub fn run(session: &mut Session, max_rows: Option<usize>) -> io::Result<Outcome> {
    let mut stdout = io::stdout();
    let _held_logs = logging::hold();

    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = run_inner(&mut stdout, session, max_rows);

    // Always restore terminal state.
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run_inner(
    stdout: &mut io::Stdout,
    session: &mut Session,
    max_rows: Option<usize>,
) -> io::Result<Outcome> {
    let (mut cols, mut rows) = terminal::size()?;
    handle_resize(session, rows, max_rows);
    draw(stdout, session, cols, rows)?;

    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Action::Finish(outcome) = handle_key(session, key) {
                    return Ok(outcome);
                }
            }
            Event::Resize(new_cols, new_rows) => {
                cols = new_cols;
                rows = new_rows;
                handle_resize(session, rows, max_rows);
            }
            _ => continue,
        }
        draw(stdout, session, cols, rows)?;
    }
}

fn list_rows(terminal_rows: u16) -> usize {
    usize::from(terminal_rows).saturating_sub(CHROME_ROWS)
}

fn handle_resize(session: &mut Session, terminal_rows: u16, max_rows: Option<usize>) {
    let available = list_rows(terminal_rows);
    session.on_resize(max_rows.map_or(available, |cap| available.min(cap)));
}

fn handle_key(session: &mut Session, key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => return Action::Finish(Outcome::Aborted),
        KeyCode::Char('c') if ctrl => return Action::Finish(Outcome::Aborted),
        KeyCode::Char('e') if ctrl => {
            let next = session.options().strategy.toggled();
            session.set_strategy(next);
        }
        KeyCode::Enter => {
            if session.on_commit_select().is_ready() {
                return Action::Finish(Outcome::Committed);
            }
        }
        KeyCode::Tab => session.on_toggle_select(),
        KeyCode::Up => session.on_scroll_up(),
        KeyCode::Down => session.on_scroll_down(),
        KeyCode::Backspace => {
            session.on_query_backspace();
        }
        KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            session.on_query_append(ch);
        }
        _ => {}
    }
    Action::Continue
}

/// Lay out the list (bottom-up), status line and prompt for a terminal of
/// `width` columns and `list_rows` list rows.
fn render_lines(session: &Session, width: usize, list_rows: usize) -> Vec<Line> {
    let cursor = session.viewport().cursor();
    let offset = session.viewport().offset();
    let window = session.current_window();

    let mut lines = vec![
        Line {
            text: String::new(),
            highlighted: false,
        };
        list_rows.saturating_sub(window.len())
    ];

    for (i, entry) in window.iter().enumerate().rev() {
        let rank = offset + i;
        let marker = if rank == cursor { '>' } else { ' ' };
        let queued = if session.selection().contains(&entry.candidate.display_path) {
            '*'
        } else {
            ' '
        };
        let text = format!(
            "{marker}{queued} {}  {:.3}",
            entry.candidate.display_path, entry.rank_score
        );
        lines.push(Line {
            text: truncate(&text, width),
            highlighted: rank == cursor,
        });
    }

    let slow = if session.is_strategy_slow() { " (slow)" } else { "" };
    let status = format!(
        "  {} candidates  [{}{slow}]  queued: {}  (tab queue, enter open, ctrl-e strategy, esc quit)",
        session.store().len(),
        session.options().strategy,
        session.selection().len()
    );
    lines.push(Line {
        text: truncate(&status, width),
        highlighted: false,
    });
    lines.push(Line {
        text: truncate(&format!("Query: {}|", session.query()), width),
        highlighted: true,
    });
    lines
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn draw(stdout: &mut io::Stdout, session: &Session, cols: u16, rows: u16) -> io::Result<()> {
    queue!(stdout, MoveTo(0, 0), Clear(ClearType::All))?;

    let lines = render_lines(session, usize::from(cols), list_rows(rows));
    let prompt_row = lines.len().saturating_sub(1);
    for (row, line) in lines.iter().enumerate() {
        let Ok(y) = u16::try_from(row) else { break };
        queue!(stdout, MoveTo(0, y))?;
        if line.highlighted {
            let color = if row == prompt_row { Color::Yellow } else { Color::Cyan };
            queue!(stdout, SetForegroundColor(color), SetAttribute(Attribute::Bold))?;
            write!(stdout, "{}", line.text)?;
            queue!(stdout, SetAttribute(Attribute::Reset))?;
        } else {
            write!(stdout, "{}", line.text)?;
        }
    }

    stdout.flush()
}
