//! Shareable match summary.
//!
//! A share card is a read-only view of the session: it is built from the
//! derived score and card counts, the clock, the team logos and the most
//! recent timeline events, and never writes back into the session.

use std::path::Path;
use tokio::fs;

use crate::clock::TimeSource;
use crate::constants::export::{RECENT_EVENTS, TITLE};
use crate::error::AppError;
use crate::events::Side;
use crate::formatting::{format_clock, format_event_line, format_score, status_label};
use crate::session::MatchSession;

const CARD_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCard {
    pub home_name: String,
    pub away_name: String,
    /// Logo path or URL, or the side's placeholder.
    pub home_logo: String,
    pub away_logo: String,
    pub score: String,
    pub home_cards: usize,
    pub away_cards: usize,
    pub clock: String,
    pub status: String,
    /// Most recent events, newest first.
    pub recent_events: Vec<String>,
}

impl ShareCard {
    pub fn from_session<T: TimeSource + Clone>(session: &MatchSession<T>) -> Self {
        let recent_events = session
            .events()
            .recent(RECENT_EVENTS)
            .into_iter()
            .map(|event| {
                format_event_line(event, session.team(event.side).display_name(event.side))
            })
            .collect();

        Self {
            home_name: session.home.display_name(Side::Home).to_string(),
            away_name: session.away.display_name(Side::Away).to_string(),
            home_logo: session.home.logo_label(Side::Home),
            away_logo: session.away.logo_label(Side::Away),
            score: format_score(session.score()),
            home_cards: session.events().cards_for(Side::Home),
            away_cards: session.events().cards_for(Side::Away),
            clock: format_clock(session.elapsed()),
            status: status_label(session.state()).to_string(),
            recent_events,
        }
    }

    /// Renders the card as centered plain text.
    pub fn render_plain(&self) -> String {
        let mut lines = vec![
            center(TITLE),
            String::new(),
            teams_line(&self.home_logo, &self.away_logo),
            teams_line(&self.home_name, &self.away_name),
            center(&self.score),
            center(&format!("Cards: {} - {}", self.home_cards, self.away_cards)),
            center(&self.clock),
            center(&self.status),
        ];

        if !self.recent_events.is_empty() {
            lines.push(String::new());
            lines.push(center("Latest events:"));
            lines.extend(self.recent_events.iter().map(|e| center(e)));
        }

        let mut out = lines
            .into_iter()
            .map(|l| l.trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        out.push('\n');
        out
    }

    /// Writes the rendered card to `path`.
    pub async fn write_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, self.render_plain()).await?;
        tracing::info!("Exported share card to {}", path.display());
        Ok(())
    }
}

fn center(text: &str) -> String {
    let len = text.chars().count();
    let pad = CARD_WIDTH.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

fn teams_line(home: &str, away: &str) -> String {
    let used = home.chars().count() + away.chars().count();
    let gap = CARD_WIDTH.saturating_sub(used).max(3);
    format!("{home}{}{away}", " ".repeat(gap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualTimeSource;
    use crate::events::{EventDetail, EventKind};
    use crate::team::{LogoSource, TeamIdentity};
    use std::time::Duration;
    use tempfile::tempdir;

    fn played_session() -> MatchSession<ManualTimeSource> {
        let time = ManualTimeSource::default();
        let mut session = MatchSession::with_time_source(
            time.clone(),
            TeamIdentity::named("Monaco"),
            TeamIdentity::default(),
        );
        session.start();
        for (secs, side, kind) in [
            (120, Side::Home, EventKind::Goal),
            (600, Side::Away, EventKind::YellowCard),
            (1200, Side::Away, EventKind::Goal),
            (1800, Side::Home, EventKind::Goal),
        ] {
            time.advance(Duration::from_secs(secs));
            session.record(side, kind, EventDetail::none()).unwrap();
        }
        session.pause();
        session
    }

    #[test]
    fn test_share_card_contents() {
        let card = ShareCard::from_session(&played_session());
        assert_eq!(card.home_name, "Monaco");
        assert_eq!(card.away_name, "Away");
        assert_eq!(card.score, "2 - 1");
        assert_eq!(card.clock, "62:00");
        assert_eq!(card.status, "Paused");
        assert_eq!(
            card.recent_events,
            vec![
                "62' ⚽ Goal - Monaco".to_string(),
                "32' ⚽ Goal - Away".to_string(),
                "12' 🟨 Yellow card - Away".to_string(),
            ]
        );
    }

    #[test]
    fn test_share_card_shows_logos_and_cards() {
        let mut session = played_session();
        session.home.logo = Some(LogoSource::Url("https://example.com/ol.png".to_string()));

        let card = ShareCard::from_session(&session);
        assert_eq!(card.home_logo, "https://example.com/ol.png");
        assert_eq!(card.away_logo, "✈️");
        assert_eq!((card.home_cards, card.away_cards), (0, 1));

        let text = card.render_plain();
        assert!(text.contains("ol.png"));
        assert!(text.contains("✈️"));
        assert!(text.contains("Cards: 0 - 1"));
    }

    #[test]
    fn test_render_plain_omits_empty_event_section() {
        let session = MatchSession::with_time_source(
            ManualTimeSource::default(),
            TeamIdentity::default(),
            TeamIdentity::default(),
        );
        let text = ShareCard::from_session(&session).render_plain();
        assert!(text.contains(TITLE));
        assert!(text.contains("0 - 0"));
        assert!(text.contains("00:00"));
        assert!(text.contains("Waiting"));
        assert!(!text.contains("Latest events"));
    }

    #[tokio::test]
    async fn test_write_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("match-score.txt");
        let card = ShareCard::from_session(&played_session());
        card.write_to(&path).await.unwrap();
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, card.render_plain());
        assert!(written.contains("Latest events:"));
    }
}
