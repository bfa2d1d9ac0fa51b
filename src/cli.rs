use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (print the scoreboard and exit)
/// - --export is requested
/// - config operations are requested
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once
        || args.export.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Returns true when the arguments only touch configuration.
pub fn is_config_update(args: &Args) -> bool {
    args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Live football match scoreboard
///
/// Keeps the match clock, score and event timeline for one match in your terminal.
/// The score is always computed from the recorded goals.
///
/// In interactive mode (default) type commands and press Enter:
/// - start / pause / reset        control the match clock
/// - goal home [player]           record a goal (also: yellow, red)
/// - sub away <out> <in>          record a substitution
/// - clear!                       empty the timeline
/// - export [path]                write a shareable summary
/// - quit                         save and exit
///
/// The session is saved after every change and restored on the next launch.
/// A clock that was running when the session was saved comes back paused.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Print the scoreboard once and exit.
    #[arg(short, long)]
    pub once: bool,

    /// Home team name. Overrides the saved and configured name.
    #[arg(long = "home", help_heading = "Match")]
    pub home: Option<String>,

    /// Away team name. Overrides the saved and configured name.
    #[arg(long = "away", help_heading = "Match")]
    pub away: Option<String>,

    /// Home team logo, either an image file (max 5 MB) or an http(s) URL.
    #[arg(long = "home-logo", help_heading = "Match")]
    pub home_logo: Option<String>,

    /// Away team logo, either an image file (max 5 MB) or an http(s) URL.
    #[arg(long = "away-logo", help_heading = "Match")]
    pub away_logo: Option<String>,

    /// Start a fresh match instead of restoring the saved session.
    #[arg(long = "fresh", help_heading = "Match")]
    pub fresh: bool,

    /// Session file to read and write instead of the configured one.
    #[arg(long = "state-file", help_heading = "Match")]
    pub state_file: Option<String>,

    /// Write a shareable text summary of the saved session to PATH and exit.
    #[arg(long = "export", value_name = "PATH", help_heading = "Match")]
    pub export: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode. Logs are mirrored to stdout in non-interactive modes.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
