//! Commands typed into the interactive scoreboard.

use std::str::FromStr;

use crate::error::AppError;
use crate::events::{EventDetail, EventKind, Side};

pub const HELP_TEXT: &str = "\
Commands:
  start | pause | reset               control the match clock
  goal <home|away> [player]           record a goal
  yellow <home|away> [player]         record a yellow card
  red <home|away> [player]            record a red card
  sub <home|away> <out> / <in>        record a substitution
  team <home|away> <name>             rename a team
  logo <home|away> <file|url>         set a team logo
  clear                               ask to empty the timeline
  clear!                              empty the timeline
  export [path]                       write a shareable summary
  help                                show this help
  quit                                save and exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Reset,
    Record {
        side: Side,
        kind: EventKind,
        detail: EventDetail,
    },
    RenameTeam {
        side: Side,
        name: String,
    },
    SetLogo {
        side: Side,
        source: String,
    },
    /// Empties the timeline only when `confirmed`.
    Clear {
        confirmed: bool,
    },
    Export(Option<String>),
    Help,
    Quit,
}

impl Command {
    /// Whether running the command changes the saved session.
    pub fn mutates_session(&self) -> bool {
        match self {
            Command::Clear { confirmed } => *confirmed,
            Command::Export(_) | Command::Help | Command::Quit => false,
            _ => true,
        }
    }
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(AppError::invalid_command("empty command"));
        };
        let verb = verb.to_ascii_lowercase();
        let rest: Vec<&str> = words.collect();

        match verb.as_str() {
            "start" | "resume" => Ok(Command::Start),
            "pause" | "stop" => Ok(Command::Pause),
            "reset" => Ok(Command::Reset),
            "clear" => Ok(Command::Clear {
                confirmed: matches!(rest.first().copied(), Some("yes" | "y")),
            }),
            "clear!" => Ok(Command::Clear { confirmed: true }),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "export" => Ok(Command::Export(
                (!rest.is_empty()).then(|| rest.join(" ")),
            )),
            "team" => {
                let (side, name) = side_and_text(&verb, &rest)?;
                if name.is_empty() {
                    return Err(AppError::invalid_command("team needs a name"));
                }
                Ok(Command::RenameTeam { side, name })
            }
            "logo" => {
                let (side, source) = side_and_text(&verb, &rest)?;
                if source.is_empty() {
                    return Err(AppError::invalid_command("logo needs a file or URL"));
                }
                Ok(Command::SetLogo { side, source })
            }
            _ => parse_event(&verb, &rest),
        }
    }
}

fn side_and_text(verb: &str, rest: &[&str]) -> Result<(Side, String), AppError> {
    let side = rest
        .first()
        .ok_or_else(|| AppError::invalid_command(format!("{verb} needs a side (home or away)")))?
        .parse::<Side>()?;
    Ok((side, rest[1..].join(" ")))
}

fn parse_event(verb: &str, rest: &[&str]) -> Result<Command, AppError> {
    let kind = verb.parse::<EventKind>().map_err(|_| {
        AppError::invalid_command(format!("unknown command '{verb}' (type 'help')"))
    })?;
    let (side, text) = side_and_text(verb, rest)?;

    let detail = if kind == EventKind::Substitution {
        let (player_out, player_in) = split_substitution(&text).ok_or_else(|| {
            AppError::invalid_command("sub needs both players: sub <side> <out> / <in>")
        })?;
        EventDetail::substitution(player_out, player_in)
    } else if text.is_empty() {
        EventDetail::none()
    } else {
        EventDetail::player(text)
    };

    Ok(Command::Record { side, kind, detail })
}

/// Splits `"out / in"`, or `"out in"` for single-word names. Both names must be present.
fn split_substitution(text: &str) -> Option<(String, String)> {
    let (player_out, player_in) = match text.split_once('/') {
        Some((out, inn)) => (out.trim(), inn.trim()),
        None => {
            let mut parts = text.splitn(2, char::is_whitespace);
            (parts.next()?.trim(), parts.next()?.trim())
        }
    };
    if player_out.is_empty() || player_in.is_empty() {
        return None;
    }
    Some((player_out.to_string(), player_in.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, AppError> {
        line.parse()
    }

    #[test]
    fn test_clock_commands() {
        assert_eq!(parse("start").unwrap(), Command::Start);
        assert_eq!(parse("  PAUSE ").unwrap(), Command::Pause);
        assert_eq!(parse("reset").unwrap(), Command::Reset);
        assert_eq!(parse("q").unwrap(), Command::Quit);
    }

    #[test]
    fn test_goal_with_player_name() {
        assert_eq!(
            parse("goal home Kylian Mbappé").unwrap(),
            Command::Record {
                side: Side::Home,
                kind: EventKind::Goal,
                detail: EventDetail::player("Kylian Mbappé"),
            }
        );
        assert_eq!(
            parse("yellow a").unwrap(),
            Command::Record {
                side: Side::Away,
                kind: EventKind::YellowCard,
                detail: EventDetail::none(),
            }
        );
    }

    #[test]
    fn test_substitution_forms() {
        let expected = Command::Record {
            side: Side::Away,
            kind: EventKind::Substitution,
            detail: EventDetail::substitution("Jean Dupont", "Luc Martin"),
        };
        assert_eq!(parse("sub away Jean Dupont / Luc Martin").unwrap(), expected);

        assert_eq!(
            parse("sub home A B").unwrap(),
            Command::Record {
                side: Side::Home,
                kind: EventKind::Substitution,
                detail: EventDetail::substitution("A", "B"),
            }
        );
    }

    #[test]
    fn test_substitution_requires_both_players() {
        assert!(matches!(
            parse("sub home Dupont"),
            Err(AppError::InvalidCommand(_))
        ));
        assert!(parse("sub home Dupont /").is_err());
        assert!(parse("sub home").is_err());
    }

    #[test]
    fn test_invalid_commands() {
        assert!(matches!(parse(""), Err(AppError::InvalidCommand(_))));
        assert!(matches!(parse("corner home"), Err(AppError::InvalidCommand(_))));
        assert!(matches!(parse("goal"), Err(AppError::InvalidCommand(_))));
        assert!(matches!(parse("goal left"), Err(AppError::UnknownSide(_))));
    }

    #[test]
    fn test_team_logo_and_export() {
        assert_eq!(
            parse("team away Paris FC").unwrap(),
            Command::RenameTeam {
                side: Side::Away,
                name: "Paris FC".to_string(),
            }
        );
        assert_eq!(
            parse("logo home https://example.com/a.png").unwrap(),
            Command::SetLogo {
                side: Side::Home,
                source: "https://example.com/a.png".to_string(),
            }
        );
        assert!(parse("team home").is_err());
        assert_eq!(parse("export").unwrap(), Command::Export(None));
        assert_eq!(
            parse("export /tmp/score.txt").unwrap(),
            Command::Export(Some("/tmp/score.txt".to_string()))
        );
    }

    #[test]
    fn test_clear_needs_confirmation() {
        assert_eq!(parse("clear").unwrap(), Command::Clear { confirmed: false });
        assert_eq!(parse("clear!").unwrap(), Command::Clear { confirmed: true });
        assert_eq!(parse("clear yes").unwrap(), Command::Clear { confirmed: true });
    }

    #[test]
    fn test_mutates_session() {
        assert!(Command::Start.mutates_session());
        assert!(Command::Clear { confirmed: true }.mutates_session());
        assert!(!Command::Clear { confirmed: false }.mutates_session());
        assert!(!Command::Help.mutates_session());
        assert!(!Command::Export(None).mutates_session());
    }
}
