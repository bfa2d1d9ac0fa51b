use crate::cli::Args;
use crate::clock::SystemTimeSource;
use crate::config::Config;
use crate::constants::export::DEFAULT_FILE_NAME;
use crate::display::ScoreboardView;
use crate::error::AppError;
use crate::events::Side;
use crate::export::ShareCard;
use crate::persistence::{load_snapshot, save_snapshot};
use crate::session::MatchSession;
use crate::team::{LogoSource, TeamIdentity};
use std::path::{Path, PathBuf};

/// Resolves where the session is saved: `--state-file` first, then config.
pub fn state_file_path(args: &Args, config: &Config) -> PathBuf {
    args.state_file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.state_file())
}

/// Builds the session for this run.
///
/// The saved session is restored unless `--fresh` is given or nothing was
/// saved. A saved file that cannot be read is logged and replaced by a new
/// session. Team names and logos from the command line override both.
pub async fn prepare_session(
    args: &Args,
    config: &Config,
    state_path: &Path,
) -> Result<MatchSession, AppError> {
    let saved = if args.fresh {
        None
    } else {
        match load_snapshot(state_path).await {
            Ok(saved) => saved,
            Err(e) => {
                tracing::warn!("Starting a new session, saved one is unusable: {e}");
                None
            }
        }
    };

    let mut session = match saved {
        Some(snapshot) => {
            MatchSession::restore(SystemTimeSource, snapshot, config.restore_policy())
        }
        None => MatchSession::new(
            TeamIdentity::named(config.home_team.clone()),
            TeamIdentity::named(config.away_team.clone()),
        ),
    }
    .with_policies(config.minute_policies());

    if let Some(home) = &args.home {
        session.home.name = home.clone();
    }
    if let Some(away) = &args.away {
        session.away.name = away.clone();
    }
    if let Some(logo) = &args.home_logo {
        session.team_mut(Side::Home).logo = Some(LogoSource::parse(logo)?);
    }
    if let Some(logo) = &args.away_logo {
        session.team_mut(Side::Away).logo = Some(LogoSource::parse(logo)?);
    }

    Ok(session)
}

/// Saves the session, logging instead of failing. Local caching is best-effort.
pub async fn persist_session(session: &MatchSession, state_path: &Path) {
    if let Err(e) = save_snapshot(state_path, &session.snapshot()).await {
        tracing::warn!("Could not save session to {}: {e}", state_path.display());
    }
}

/// Handles the --once command.
///
/// Prints the scoreboard of the saved (or configured) session and exits.
pub async fn handle_once_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let state_path = state_file_path(args, config);
    let session = prepare_session(args, config, &state_path).await?;
    for line in ScoreboardView::from_session(&session).plain_lines() {
        println!("{line}");
    }
    Ok(())
}

/// Handles the --export command.
///
/// Writes the share card for the saved session to the given path.
pub async fn handle_export_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let state_path = state_file_path(args, config);
    let session = prepare_session(args, config, &state_path).await?;
    let target = args
        .export
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or(DEFAULT_FILE_NAME);
    ShareCard::from_session(&session)
        .write_to(Path::new(target))
        .await?;
    println!("Share card written to {target}");
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}
