use live_scoreboard::{
    ClockState, EventDetail, EventKind, MatchSession, RestorePolicy, SessionSnapshot, ShareCard,
    Side, TeamIdentity,
    clock::ManualTimeSource,
    formatting::format_event_line,
    persistence::{load_snapshot, save_snapshot},
};
use std::time::Duration;
use tempfile::tempdir;

fn session() -> (ManualTimeSource, MatchSession<ManualTimeSource>) {
    let time = ManualTimeSource::default();
    let session = MatchSession::with_time_source(
        time.clone(),
        TeamIdentity::named("Olympique Lyonnais"),
        TeamIdentity::named("Stade Rennais"),
    );
    (time, session)
}

/// Goals recorded at 65s and 125s land on minutes 1 and 2
#[test]
fn test_goal_scenario_against_running_clock() {
    let (time, mut session) = session();
    session.start();

    time.advance(Duration::from_secs(65));
    let home_goal = session
        .record(Side::Home, EventKind::Goal, EventDetail::none())
        .unwrap();
    assert_eq!(home_goal.match_minute, 1);

    time.advance(Duration::from_secs(60));
    let away_goal = session
        .record(Side::Away, EventKind::Goal, EventDetail::none())
        .unwrap();
    assert_eq!(away_goal.match_minute, 2);

    let timeline: Vec<(Side, u32)> = session
        .events()
        .timeline()
        .iter()
        .map(|e| (e.side, e.match_minute))
        .collect();
    assert_eq!(timeline, vec![(Side::Home, 1), (Side::Away, 2)]);
    assert_eq!(session.events().goals_for(Side::Home), 1);
    assert_eq!(session.events().goals_for(Side::Away), 1);
}

/// Pausing at 10s and resuming for 5s more reads 15s
#[test]
fn test_pause_resume_scenario() {
    let (time, mut session) = session();
    session.start();
    time.advance(Duration::from_secs(10));
    session.pause();
    time.advance(Duration::from_secs(45));
    session.start();
    time.advance(Duration::from_secs(5));
    assert_eq!(session.elapsed(), Duration::from_secs(15));
}

/// A process suspended for a long stretch still reports true elapsed time
#[test]
fn test_clock_survives_suspension() {
    let (time, mut session) = session();
    session.start();
    time.advance(Duration::from_secs(47 * 60 + 12));
    assert_eq!(session.display_minute(), 47);
    assert_eq!(session.elapsed(), Duration::from_secs(47 * 60 + 12));
}

/// Score never diverges from the number of recorded goals
#[test]
fn test_score_matches_goal_appends() {
    let (time, mut session) = session();
    session.start();
    let script = [
        (Side::Home, EventKind::Goal),
        (Side::Away, EventKind::YellowCard),
        (Side::Home, EventKind::Goal),
        (Side::Away, EventKind::Goal),
        (Side::Home, EventKind::RedCard),
        (Side::Home, EventKind::Goal),
    ];
    let mut expected = (0, 0);
    for (side, kind) in script {
        time.advance(Duration::from_secs(400));
        session.record(side, kind, EventDetail::none()).unwrap();
        if kind == EventKind::Goal {
            match side {
                Side::Home => expected.0 += 1,
                Side::Away => expected.1 += 1,
            }
        }
        assert_eq!(session.score(), expected);
        assert_eq!(
            session.score().0 + session.score().1,
            session.events().count_by_kind(EventKind::Goal)
        );
    }
}

/// Substitutions survive a save/load cycle and render as one description
#[tokio::test]
async fn test_substitution_roundtrip_through_saved_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("match.json");
    let (time, mut session) = session();
    session.start();
    time.advance(Duration::from_secs(70 * 60));
    session
        .record(
            Side::Away,
            EventKind::Substitution,
            EventDetail::substitution("A", "B"),
        )
        .unwrap();

    save_snapshot(&path, &session.snapshot()).await.unwrap();
    let loaded = load_snapshot(&path).await.unwrap().unwrap();

    let restored = MatchSession::restore(time.clone(), loaded, RestorePolicy::default());
    let event = &restored.events().entries()[0];
    let sub = event.substitution.as_ref().unwrap();
    assert_eq!(sub.player_out, "A");
    assert_eq!(sub.player_in, "B");
    assert_eq!(
        format_event_line(event, restored.away.display_name(Side::Away)),
        "70' 🔄 Substitution - Stade Rennais (A ⇄ B)"
    );
}

/// Restored sessions come back paused at the saved time unless resuming is requested
#[tokio::test]
async fn test_restore_policies() {
    let (time, mut session) = session();
    session.start();
    time.advance(Duration::from_secs(90));
    let snapshot: SessionSnapshot = session.snapshot();

    let paused = MatchSession::restore(time.clone(), snapshot.clone(), RestorePolicy::PauseRunning);
    time.advance(Duration::from_secs(30));
    assert_eq!(paused.state(), ClockState::Paused);
    assert_eq!(paused.elapsed(), Duration::from_secs(90));

    let resumed = MatchSession::restore(time.clone(), snapshot, RestorePolicy::ResumeRunning);
    time.advance(Duration::from_secs(30));
    assert_eq!(resumed.state(), ClockState::Running);
    assert_eq!(resumed.elapsed(), Duration::from_secs(120));
}

/// The share card is read-only and reflects the derived state
#[test]
fn test_share_card_does_not_change_session() {
    let (time, mut session) = session();
    session.start();
    time.advance(Duration::from_secs(30 * 60));
    session
        .record(Side::Home, EventKind::Goal, EventDetail::player("Cherki"))
        .unwrap();
    let before = session.snapshot();

    let card = ShareCard::from_session(&session);
    assert_eq!(card.score, "1 - 0");
    assert_eq!(card.recent_events.len(), 1);
    assert_eq!(session.snapshot(), before);
}

/// Resetting the clock leaves recorded minutes untouched
#[test]
fn test_reset_keeps_event_minutes() {
    let (time, mut session) = session();
    session.start();
    time.advance(Duration::from_secs(12 * 60));
    session
        .record(Side::Away, EventKind::YellowCard, EventDetail::none())
        .unwrap();
    session.reset();
    session.start();
    time.advance(Duration::from_secs(60));
    session
        .record(Side::Away, EventKind::YellowCard, EventDetail::none())
        .unwrap();

    let minutes: Vec<u32> = session
        .events()
        .entries_for(Side::Away)
        .iter()
        .map(|e| e.match_minute)
        .collect();
    assert_eq!(minutes, vec![12, 1]);
}
