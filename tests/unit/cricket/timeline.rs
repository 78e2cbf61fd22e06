use super::*;

#[test]
fn phase_boundaries() {
    assert_eq!(CricketTimeline::phase_at(0.0), CricketPhase::RunUp);
    assert_eq!(CricketTimeline::phase_at(1.99), CricketPhase::RunUp);
    assert_eq!(CricketTimeline::phase_at(2.0), CricketPhase::Delivery);
    assert_eq!(CricketTimeline::phase_at(3.0), CricketPhase::Flight);
    assert_eq!(CricketTimeline::phase_at(4.0), CricketPhase::Strike);
    assert_eq!(CricketTimeline::phase_at(5.0), CricketPhase::Banner);
    assert_eq!(CricketTimeline::phase_at(7.0), CricketPhase::Done);
}

#[test]
fn runup_moves_the_bowler_in() {
    let start = CricketTimeline::sample(0.0);
    assert_eq!(start.bowler_x, -15.0);
    assert!(start.ball.is_none());

    let mid = CricketTimeline::sample(1.0);
    assert!((mid.bowler_x - (-11.5)).abs() < 1e-9);

    let end = CricketTimeline::sample(2.0);
    assert_eq!(end.bowler_x, -8.0);
}

#[test]
fn ball_appears_at_the_release_point() {
    assert!(CricketTimeline::sample(2.4).ball.is_none());
    let f = CricketTimeline::sample(2.6);
    let ball = f.ball.unwrap();
    assert_eq!(ball, Point::new(-7.0, 2.5));
}

#[test]
fn flight_carries_the_ball_to_the_batsman() {
    let f = CricketTimeline::sample(3.5);
    let ball = f.ball.unwrap();
    assert!((ball.x - 0.5).abs() < 1e-9);
    assert!((ball.y - 1.5).abs() < 1e-9);

    let f = CricketTimeline::sample(4.0);
    let ball = f.ball.unwrap();
    assert!((ball.x - 8.0).abs() < 1e-9);
    assert!((ball.y - 0.5).abs() < 1e-9);
}

#[test]
fn bails_stay_put_until_the_strike_lands() {
    let before = CricketTimeline::sample(4.4);
    assert_eq!(before.bails[0].lift, 0.0);
    assert_eq!(before.bails[1].lift, 0.0);

    let after = CricketTimeline::sample(4.6);
    assert!(after.bails[0].lift > 0.0);
    assert!(after.bails[1].lift > 0.0);
    assert!(after.bails[0].tilt_rad > 0.0);
    assert!(after.bails[1].tilt_rad < 0.0);
}

#[test]
fn banner_fades_in_and_saturates() {
    assert_eq!(CricketTimeline::sample(4.9).banner_alpha, 0.0);
    let rising = CricketTimeline::sample(5.2).banner_alpha;
    assert!(rising > 0.0 && rising < 1.0);
    assert_eq!(CricketTimeline::sample(5.5).banner_alpha, 1.0);
    assert_eq!(CricketTimeline::sample(6.9).banner_alpha, 1.0);
}

#[test]
fn banner_alpha_is_monotone_while_fading() {
    let mut last = 0.0;
    let mut t = 5.0;
    while t <= 5.5 {
        let a = CricketTimeline::sample(t).banner_alpha;
        assert!(a >= last);
        last = a;
        t += 0.01;
    }
}

#[test]
fn timeline_finishes_through_the_animate_trait() {
    let mut timeline = CricketTimeline::new();
    assert!(!Animate::finished(&timeline));
    timeline.tick(6.9).unwrap();
    assert!(!Animate::finished(&timeline));
    let f = timeline.tick(7.0).unwrap();
    assert!(f.done);
    assert!(Animate::finished(&timeline));
}

#[test]
fn tick_rejects_bad_elapsed() {
    let mut timeline = CricketTimeline::new();
    assert!(timeline.tick(f64::NAN).is_err());
    assert!(timeline.tick(-1.0).is_err());
}
