//! Teletext-style terminal rendering of the scoreboard.
//!
//! Rendering only reads the session. The caller decides when to redraw; the
//! interactive loop does it on every refresh tick and after each command.

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{Clear, ClearType},
};
use std::io::Write;

use crate::clock::{ClockState, TimeSource};
use crate::constants::ui::{BOARD_WIDTH, CONTENT_MARGIN, MAX_SIDE_EVENTS};
use crate::error::AppError;
use crate::events::Side;
use crate::formatting::{format_clock, format_event_line, format_score, status_label, truncate};
use crate::session::MatchSession;

pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn header_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn score_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
}
pub fn home_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn away_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow

fn status_fg(state: ClockState) -> Color {
    match state {
        ClockState::Running => Color::AnsiValue(46),
        ClockState::Paused => Color::AnsiValue(208),
        ClockState::Idle => Color::AnsiValue(250),
    }
}

fn side_fg(side: Side) -> Color {
    match side {
        Side::Home => home_fg(),
        Side::Away => away_fg(),
    }
}

/// Everything the scoreboard shows, captured at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreboardView {
    pub home_name: String,
    pub away_name: String,
    pub home_logo: String,
    pub away_logo: String,
    pub score: String,
    pub home_cards: usize,
    pub away_cards: usize,
    pub clock: String,
    pub minute: u32,
    pub state: ClockState,
    pub home_events: Vec<String>,
    pub away_events: Vec<String>,
    pub timeline: Vec<(Side, String)>,
}

impl ScoreboardView {
    pub fn from_session<T: TimeSource + Clone>(session: &MatchSession<T>) -> Self {
        let line_for = |side: Side| -> Vec<String> {
            session
                .events()
                .entries_for(side)
                .into_iter()
                .take(MAX_SIDE_EVENTS)
                .map(|e| format_event_line(e, session.team(side).display_name(side)))
                .collect()
        };

        Self {
            home_name: session.home.display_name(Side::Home).to_string(),
            away_name: session.away.display_name(Side::Away).to_string(),
            home_logo: session.home.logo_label(Side::Home),
            away_logo: session.away.logo_label(Side::Away),
            score: format_score(session.score()),
            home_cards: session.events().cards_for(Side::Home),
            away_cards: session.events().cards_for(Side::Away),
            clock: format_clock(session.elapsed()),
            minute: session.display_minute(),
            state: session.state(),
            home_events: line_for(Side::Home),
            away_events: line_for(Side::Away),
            timeline: session
                .events()
                .timeline()
                .into_iter()
                .map(|e| {
                    (
                        e.side,
                        format_event_line(e, session.team(e.side).display_name(e.side)),
                    )
                })
                .collect(),
        }
    }

    /// Plain lines without colors, as printed by `--once`.
    pub fn plain_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{}  {}  {}", self.home_name, self.score, self.away_name),
            format!("{}  {}", self.clock, status_label(self.state)),
            format!("Logos: {} | {}", self.home_logo, self.away_logo),
            format!("Cards: {} - {}", self.home_cards, self.away_cards),
        ];
        for (label, events) in [
            (&self.home_name, &self.home_events),
            (&self.away_name, &self.away_events),
        ] {
            if !events.is_empty() {
                lines.push(String::new());
                lines.push(format!("{label}:"));
                lines.extend(events.iter().map(|e| format!("  {e}")));
            }
        }
        if self.timeline.is_empty() {
            lines.push(String::new());
            lines.push("No events yet".to_string());
        }
        lines
    }
}

/// Draws the full-screen scoreboard.
pub fn render<W: Write>(
    out: &mut W,
    view: &ScoreboardView,
    message: Option<&str>,
) -> Result<(), AppError> {
    let margin = CONTENT_MARGIN as u16;
    let mut row: u16 = 0;

    queue!(out, Clear(ClearType::All), MoveTo(0, row))?;

    let title = format!("{:^width$}", "LIVE SCORE", width = BOARD_WIDTH);
    queue!(
        out,
        SetBackgroundColor(header_bg()),
        SetForegroundColor(header_fg()),
        SetAttribute(Attribute::Bold),
        Print(title),
        SetAttribute(Attribute::Reset),
        ResetColor
    )?;
    row += 2;

    let name_width = (BOARD_WIDTH - 9) / 2;
    queue!(
        out,
        MoveTo(margin, row),
        SetForegroundColor(home_fg()),
        Print(format!("{:<name_width$}", truncate(&view.home_name, name_width))),
        SetForegroundColor(score_fg()),
        SetAttribute(Attribute::Bold),
        Print(format!("{:^7}", view.score)),
        SetAttribute(Attribute::Reset),
        SetForegroundColor(away_fg()),
        Print(format!("{:>name_width$}", truncate(&view.away_name, name_width))),
        ResetColor
    )?;
    row += 1;

    queue!(
        out,
        MoveTo(margin, row),
        SetForegroundColor(text_fg()),
        Print(format!("{:^width$}", view.clock, width = BOARD_WIDTH - CONTENT_MARGIN)),
        MoveTo(margin, row + 1),
        SetForegroundColor(status_fg(view.state)),
        Print(format!(
            "{:^width$}",
            status_label(view.state),
            width = BOARD_WIDTH - CONTENT_MARGIN
        )),
        ResetColor
    )?;

    // Rows 3 and 4 belong to render_clock
    row += 2;
    for (side, logo, cards) in [
        (Side::Home, &view.home_logo, view.home_cards),
        (Side::Away, &view.away_logo, view.away_cards),
    ] {
        queue!(
            out,
            MoveTo(margin, row),
            SetForegroundColor(side_fg(side)),
            Print(format!("{logo}  cards: {cards}")),
            ResetColor
        )?;
        row += 1;
    }
    row += 1;

    for (side, events) in [(Side::Home, &view.home_events), (Side::Away, &view.away_events)] {
        let name = match side {
            Side::Home => &view.home_name,
            Side::Away => &view.away_name,
        };
        queue!(
            out,
            MoveTo(margin, row),
            SetForegroundColor(side_fg(side)),
            SetAttribute(Attribute::Underlined),
            Print(name),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
        row += 1;
        for event in events {
            queue!(out, MoveTo(margin + 2, row), Print(event))?;
            row += 1;
        }
        row += 1;
    }

    queue!(
        out,
        MoveTo(margin, row),
        SetAttribute(Attribute::Bold),
        Print("Timeline"),
        SetAttribute(Attribute::Reset)
    )?;
    row += 1;
    if view.timeline.is_empty() {
        queue!(out, MoveTo(margin + 2, row), Print("No events yet"))?;
        row += 1;
    }
    for (side, line) in &view.timeline {
        queue!(
            out,
            MoveTo(margin + 2, row),
            SetForegroundColor(side_fg(*side)),
            Print(line),
            ResetColor
        )?;
        row += 1;
    }

    row += 1;
    if let Some(message) = message {
        queue!(out, MoveTo(margin, row), Print(message))?;
        row += 1;
    }
    queue!(out, MoveTo(margin, row), Print("> "))?;
    out.flush()?;
    Ok(())
}

/// Redraws only the clock and status lines, used on refresh ticks.
pub fn render_clock<W: Write>(out: &mut W, view: &ScoreboardView) -> Result<(), AppError> {
    let margin = CONTENT_MARGIN as u16;
    queue!(
        out,
        crossterm::cursor::SavePosition,
        MoveTo(margin, 3),
        SetForegroundColor(text_fg()),
        Print(format!("{:^width$}", view.clock, width = BOARD_WIDTH - CONTENT_MARGIN)),
        MoveTo(margin, 4),
        SetForegroundColor(status_fg(view.state)),
        Print(format!(
            "{:^width$}",
            status_label(view.state),
            width = BOARD_WIDTH - CONTENT_MARGIN
        )),
        ResetColor,
        crossterm::cursor::RestorePosition
    )?;
    out.flush()?;
    Ok(())
}
