use crate::commands::persist_session;
use crate::config::Config;
use crate::constants::export::DEFAULT_FILE_NAME;
use crate::display::{ScoreboardView, render, render_clock};
use crate::error::AppError;
use crate::export::ShareCard;
use crate::formatting::{event_name, format_clock};
use crate::input::{Command, HELP_TEXT};
use crate::session::MatchSession;
use crate::team::LogoSource;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use std::future::Future;
use std::io::{Write, stdout};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::time::{MissedTickBehavior, interval};

const TITLE: &str = "LIVE SCORE";

/// Outcome of one typed command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

/// Applies one command to the session and describes what happened.
pub async fn apply_command(
    session: &mut MatchSession,
    command: Command,
) -> Result<Outcome, AppError> {
    let message = match command {
        Command::Start => {
            session.start();
            format!("Clock running from {}", format_clock(session.elapsed()))
        }
        Command::Pause => {
            session.pause();
            format!("Clock stopped at {}", format_clock(session.elapsed()))
        }
        Command::Reset => {
            session.reset();
            "Clock reset".to_string()
        }
        Command::Record { side, kind, detail } => {
            let name = session.team(side).display_name(side).to_string();
            let event = session.record(side, kind, detail)?;
            format!("{}' {} recorded for {name}", event.match_minute, event_name(kind))
        }
        Command::RenameTeam { side, name } => {
            session.team_mut(side).name = name;
            format!("{side} team renamed")
        }
        Command::SetLogo { side, source } => {
            session.team_mut(side).logo = Some(LogoSource::parse(&source)?);
            format!("{side} logo updated")
        }
        Command::Clear { confirmed: false } => format!(
            "Type 'clear!' to remove all {} events",
            session.events().len()
        ),
        Command::Clear { confirmed: true } => {
            session.clear_events();
            "Timeline cleared".to_string()
        }
        Command::Export(path) => {
            let path = PathBuf::from(path.unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()));
            ShareCard::from_session(session).write_to(&path).await?;
            format!("Share card written to {}", path.display())
        }
        Command::Help => HELP_TEXT.to_string(),
        Command::Quit => return Ok(Outcome::Quit),
    };
    Ok(Outcome::Continue(message))
}

/// Run the interactive application flow.
///
/// - Enters the alternate screen and draws the scoreboard
/// - Reads commands line by line from stdin
/// - Redraws the clock on every refresh tick, but only while it runs
/// - Saves the session after every change and on exit, including Ctrl-C
pub async fn run_interactive(
    config: &Config,
    mut session: MatchSession,
    state_path: &Path,
) -> Result<(), AppError> {
    let mut out = stdout();
    execute!(out, SetTitle(TITLE), EnterAlternateScreen)?;

    let input = BufReader::new(tokio::io::stdin());
    let result = command_loop(
        config,
        &mut session,
        state_path,
        input,
        &mut out,
        tokio::signal::ctrl_c(),
    )
    .await;

    persist_session(&session, state_path).await;
    execute!(out, LeaveAlternateScreen)?;

    result
}

/// Reads commands from `input` until quit, end of input or `shutdown` resolves.
async fn command_loop<R, W, S>(
    config: &Config,
    session: &mut MatchSession,
    state_path: &Path,
    input: R,
    out: &mut W,
    shutdown: S,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    S: Future,
{
    let mut lines = input.lines();
    let mut ticker = interval(config.refresh_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::pin!(shutdown);

    render(out, &ScoreboardView::from_session(session), Some("Type 'help' for commands"))?;

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("Interrupted, leaving interactive mode");
                return Ok(());
            }
            // The refresh tick only exists while the clock runs
            _ = ticker.tick(), if session.clock().is_running() => {
                render_clock(out, &ScoreboardView::from_session(session))?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("Input closed, leaving interactive mode");
                    return Ok(());
                };
                if line.trim().is_empty() {
                    render(out, &ScoreboardView::from_session(session), None)?;
                    continue;
                }

                let was_running = session.clock().is_running();
                let message = match line.parse::<Command>() {
                    Ok(command) => {
                        let mutates = command.mutates_session();
                        match apply_command(session, command).await {
                            Ok(Outcome::Quit) => return Ok(()),
                            Ok(Outcome::Continue(message)) => {
                                if mutates {
                                    persist_session(session, state_path).await;
                                }
                                message
                            }
                            Err(e) => {
                                if !e.is_user_input() {
                                    tracing::warn!("Command '{line}' failed: {e}");
                                }
                                format!("Error: {e}")
                            }
                        }
                    }
                    Err(e) => format!("Error: {e}"),
                };

                if !was_running && session.clock().is_running() {
                    ticker.reset();
                }
                let view = ScoreboardView::from_session(session);
                render(out, &view, Some(message.as_str()))?;
            }
        }
    }
}
