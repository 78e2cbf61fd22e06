use super::*;
use crate::config::model::PlayerSheet;

fn config(sheets: &[&[&str]]) -> RaceConfig {
    RaceConfig {
        players: sheets
            .iter()
            .map(|tokens| PlayerSheet::from_tokens(tokens.iter().copied()).unwrap())
            .collect(),
    }
}

fn session(sheets: &[&[&str]]) -> RaceSession {
    RaceSession::new(
        &config(sheets),
        Course::default_maze(),
        SessionOpts::default(),
    )
    .unwrap()
}

#[test]
fn invalid_config_creates_no_session() {
    let empty = RaceConfig { players: vec![] };
    assert!(RaceSession::new(&empty, Course::default_maze(), SessionOpts::default()).is_err());

    let opts = SessionOpts {
        round_interval_secs: 0.0,
        ..SessionOpts::default()
    };
    assert!(RaceSession::new(&config(&[&["C"]]), Course::default_maze(), opts).is_err());

    let opts = SessionOpts {
        step_px_per_tick: -1.0,
        ..SessionOpts::default()
    };
    assert!(RaceSession::new(&config(&[&["C"]]), Course::default_maze(), opts).is_err());
}

#[test]
fn rounds_advance_only_after_boundaries() {
    let mut s = session(&[&["C", "C"], &["W", "C"]]);
    let f = s.tick(0.0).unwrap();
    assert_eq!(f.round, RoundIndex(0));
    assert!(f.actors.iter().all(|a| a.answered == 0));

    // Exactly on the boundary: not yet crossed.
    let f = s.tick(2.0).unwrap();
    assert_eq!(f.round, RoundIndex(0));

    let f = s.tick(2.1).unwrap();
    assert_eq!(f.round, RoundIndex(1));
    assert!(f.actors.iter().all(|a| a.answered == 1));
    assert_eq!(f.actors[0].correct, 1);
    assert_eq!(f.actors[1].correct, 0);
}

#[test]
fn sparse_ticks_catch_up_all_due_rounds() {
    let mut s = session(&[&["C", "C", "W", "C", "C"], &["C", "W", "W", "C", "W"]]);
    assert_eq!(s.rounds_total(), 5);

    let f = s.tick(100.0).unwrap();
    assert_eq!(f.round, RoundIndex(5));
    assert!(f.actors.iter().all(|a| a.terminal));
    assert!(f.finished);
}

#[test]
fn final_correct_counts_match_sequences() {
    let mut s = session(&[&["C", "C", "W", "C", "C"], &["C", "W", "W", "C", "W"]]);
    let mut last = None;
    for i in 0..400 {
        last = Some(s.tick(i as f64 * 0.05).unwrap());
    }
    let f = last.unwrap();
    assert_eq!(f.actors[0].correct, 4);
    assert_eq!(f.actors[1].correct, 2);

    let st = f.standings.unwrap();
    assert_eq!(st.top_correct, 4);
    assert_eq!(st.winners, vec![PlayerId(0)]);
    assert_eq!(st.loser, Some(PlayerId(1)));
}

#[test]
fn equal_counts_tie_and_leave_no_loser() {
    let mut s = session(&[&["C", "W"], &["W", "C"]]);
    let f = s.tick(50.0).unwrap();
    let st = f.standings.unwrap();
    assert_eq!(st.top_correct, 1);
    assert_eq!(st.winners, vec![PlayerId(0), PlayerId(1)]);
    assert_eq!(st.loser, None);
}

#[test]
fn shorter_sequences_turn_terminal_earlier() {
    let mut s = session(&[&["C", "W"], &["C", "C", "W", "C", "C"]]);
    assert_eq!(s.rounds_total(), 5);

    let f = s.tick(4.1).unwrap();
    assert_eq!(f.round, RoundIndex(2));
    assert!(f.actors[0].terminal);
    assert!(!f.actors[1].terminal);
    assert!(!f.finished);

    let f = s.tick(10.1).unwrap();
    assert!(f.actors[1].terminal);
    assert!(f.finished);
}

#[test]
fn resolution_happens_once_and_is_idempotent() {
    let mut s = session(&[&["C"], &["W"]]);
    let first = s.tick(2.1).unwrap().standings.unwrap();
    let again = s.tick(3.0).unwrap().standings.unwrap();
    let later = s.tick(30.0).unwrap().standings.unwrap();
    assert_eq!(first, again);
    assert_eq!(first, later);
    assert!(s.resolved());
}

#[test]
fn elapsed_must_be_finite_and_non_negative() {
    let mut s = session(&[&["C"]]);
    assert!(s.tick(f64::NAN).is_err());
    assert!(s.tick(-0.1).is_err());
    assert!(s.tick(0.0).is_ok());
}

#[test]
fn elapsed_must_not_decrease() {
    let mut s = session(&[&["C"]]);
    s.tick(5.0).unwrap();
    assert!(s.tick(4.9).is_err());
    // Equal elapsed is permitted.
    assert!(s.tick(5.0).is_ok());
}

#[test]
fn wrong_answer_shakes_then_recovers() {
    let mut s = session(&[&["W", "C"]]);
    let f = s.tick(2.1).unwrap();
    assert_eq!(f.actors[0].fx, AvatarFx::Shake);
    assert!(f.ghosts[0].chasing);

    // Shake lasts 1.5s from the boundary; after that the avatar snaps back.
    let f = s.tick(3.7).unwrap();
    assert_eq!(f.actors[0].fx, AvatarFx::None);
    let held = s.course.waypoint(0);
    assert_eq!(f.actors[0].pos, held);
}

#[test]
fn winner_celebrates_and_loser_flees() {
    let mut s = session(&[&["C"], &["W"]]);
    let f = s.tick(2.1).unwrap();
    assert!(f.finished);
    assert!(matches!(f.actors[0].fx, AvatarFx::Celebrate { .. }));
    assert_eq!(f.actors[1].fx, AvatarFx::Flee);
    assert!(f.ghosts.iter().all(|g| g.chasing));
}

#[test]
fn positions_converge_and_the_run_completes() {
    let mut s = session(&[&["C", "C", "C"]]);
    let course = Course::default_maze();
    let dt = 1.0 / 30.0;
    let mut frames = 0u32;
    let mut last_x = f64::NEG_INFINITY;

    while !Animate::finished(&s) {
        let f = s.tick(f64::from(frames) * dt).unwrap();
        frames += 1;
        assert!(frames < 30 * 60, "run never completed");
        // The sole (all-correct) avatar never moves backwards.
        assert!(f.actors[0].pos.x >= last_x - 1e-9);
        last_x = f.actors[0].pos.x;
    }

    assert!(last_x > course.exit().x);
    let st = s.standings().unwrap();
    assert_eq!(st.winners, vec![PlayerId(0)]);
    assert_eq!(st.top_correct, 3);
}

#[test]
fn frame_exposes_identities_and_decorations() {
    let mut s = session(&[&["C"], &["W"]]);
    let f = s.tick(0.0).unwrap();

    assert_eq!(f.actors.len(), 2);
    assert_eq!(f.actors[0].name, "Team Yellow");
    assert_eq!(f.actors[1].name, "Team Blue");
    assert_eq!(f.ghosts.len(), 2);
    assert!(!f.pellets.is_empty());
    assert!(f.pellets.iter().all(|p| !p.eaten));
    assert_eq!(f.power_pellets.len(), 3);
    assert_eq!(f.rounds_total, 1);
    assert!(f.standings.is_none());
}
