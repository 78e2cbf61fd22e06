use std::f64::consts::{FRAC_PI_3, FRAC_PI_4, PI};

use kurbo::Point;

use crate::animation::ease::Ease;
use crate::foundation::error::{QuizdashError, QuizdashResult};
use crate::schedule::driver::Animate;

const BOWLER_START_X: f64 = -15.0;
const RUNUP_DIST_X: f64 = 7.0;
const ARM_BASE_RAD: f64 = -FRAC_PI_3;
const ARM_SWING_RAD: f64 = 0.3;
const ARM_SWING_RATE: f64 = 10.0;
const ARM_DELIVERY_RAD: f64 = -(PI / 1.5);

const BALL_RELEASE_SECS: f64 = 2.5;
const BALL_RELEASE: (f64, f64) = (-7.0, 2.5);
const FLIGHT_DIST_X: f64 = 15.0;
const FLIGHT_DROP_Y: f64 = 2.0;

const BAT_BASE_RAD: f64 = -FRAC_PI_4;
const BAT_SWING_RAD: f64 = 0.2;
const BAT_SWING_RATE: f64 = 5.0;

const STRIKE_START_X: f64 = 8.0;
const STRIKE_DIST_X: f64 = 5.0;
const STRIKE_BALL_Y: f64 = 0.5;
const BAIL_POP_SECS: f64 = 4.5;
const BAIL_LIFTS: [f64; 2] = [2.0, 1.5];

const BANNER_START_SECS: f64 = 5.0;
const BANNER_FADE_SECS: f64 = 0.5;
const END_SECS: f64 = 7.0;

/// Phase of the cricket delivery demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum CricketPhase {
    /// Bowler runs in (0–2 s).
    RunUp,
    /// Bowler delivers; the ball appears at the release point (2–3 s).
    Delivery,
    /// Ball travels toward the batsman (3–4 s).
    Flight,
    /// Ball passes the batsman and hits the stumps (4–5 s).
    Strike,
    /// Wicket banner fades in (5–7 s).
    Banner,
    /// Timeline exhausted (≥7 s).
    Done,
}

#[derive(Clone, Copy, Debug)]
struct PhaseWindow {
    start: f64,
    end: f64,
    ease: Ease,
}

impl PhaseWindow {
    const fn new(start: f64, end: f64, ease: Ease) -> Self {
        Self { start, end, ease }
    }

    fn progress(self, elapsed: f64) -> f64 {
        self.ease
            .apply((elapsed - self.start) / (self.end - self.start))
    }
}

const RUNUP: PhaseWindow = PhaseWindow::new(0.0, 2.0, Ease::Linear);
const FLIGHT: PhaseWindow = PhaseWindow::new(3.0, 4.0, Ease::Linear);
const STRIKE: PhaseWindow = PhaseWindow::new(4.0, 5.0, Ease::Linear);
const BANNER_FADE: PhaseWindow = PhaseWindow::new(
    BANNER_START_SECS,
    BANNER_START_SECS + BANNER_FADE_SECS,
    Ease::OutQuad,
);

/// Bail displacement after the stumps are hit.
#[derive(Clone, Copy, Debug, Default, serde::Serialize)]
pub struct BailNode {
    /// Vertical lift from the resting position.
    pub lift: f64,
    /// Tilt in radians.
    pub tilt_rad: f64,
}

/// Drawable state for one cricket demo frame.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct CricketFrame {
    /// Elapsed time in seconds.
    pub elapsed_secs: f64,
    /// Active phase.
    pub phase: CricketPhase,
    /// Bowler position along the pitch axis.
    pub bowler_x: f64,
    /// Bowling-arm angle in radians.
    pub bowler_arm_rad: f64,
    /// Bat angle in radians.
    pub bat_swing_rad: f64,
    /// Ball position `(x, height)`, once released.
    pub ball: Option<Point>,
    /// Bail displacement, zero until the stumps are hit.
    pub bails: [BailNode; 2],
    /// Wicket banner opacity in `[0, 1]`.
    pub banner_alpha: f64,
    /// True once the timeline is exhausted.
    pub done: bool,
}

/// Fixed six-phase delivery timeline, sampled statelessly by elapsed time.
#[derive(Clone, Copy, Debug, Default)]
pub struct CricketTimeline {
    done: bool,
}

impl CricketTimeline {
    /// Create a fresh timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase active at `elapsed` seconds.
    pub fn phase_at(elapsed: f64) -> CricketPhase {
        match elapsed {
            e if e < RUNUP.end => CricketPhase::RunUp,
            e if e < FLIGHT.start => CricketPhase::Delivery,
            e if e < STRIKE.start => CricketPhase::Flight,
            e if e < BANNER_START_SECS => CricketPhase::Strike,
            e if e < END_SECS => CricketPhase::Banner,
            _ => CricketPhase::Done,
        }
    }

    /// Sample the full drawable state at `elapsed` seconds.
    pub fn sample(elapsed: f64) -> CricketFrame {
        let elapsed = elapsed.max(0.0);
        let phase = Self::phase_at(elapsed);

        let mut frame = CricketFrame {
            elapsed_secs: elapsed,
            phase,
            bowler_x: BOWLER_START_X,
            bowler_arm_rad: ARM_BASE_RAD,
            bat_swing_rad: BAT_BASE_RAD,
            ball: None,
            bails: [BailNode::default(); 2],
            banner_alpha: 0.0,
            done: phase == CricketPhase::Done,
        };

        match phase {
            CricketPhase::RunUp => {
                let p = RUNUP.progress(elapsed);
                frame.bowler_x = BOWLER_START_X + RUNUP_DIST_X * p;
                frame.bowler_arm_rad = ARM_BASE_RAD + (p * ARM_SWING_RATE).sin() * ARM_SWING_RAD;
            }
            CricketPhase::Delivery => {
                frame.bowler_x = BOWLER_START_X + RUNUP_DIST_X;
                frame.bowler_arm_rad = ARM_DELIVERY_RAD;
                if elapsed > BALL_RELEASE_SECS {
                    frame.ball = Some(Point::new(BALL_RELEASE.0, BALL_RELEASE.1));
                }
            }
            CricketPhase::Flight => {
                let p = FLIGHT.progress(elapsed);
                frame.bowler_x = BOWLER_START_X + RUNUP_DIST_X;
                frame.bowler_arm_rad = ARM_DELIVERY_RAD;
                frame.ball = Some(Point::new(
                    BALL_RELEASE.0 + FLIGHT_DIST_X * p,
                    BALL_RELEASE.1 - FLIGHT_DROP_Y * p,
                ));
                frame.bat_swing_rad = BAT_BASE_RAD + (p * BAT_SWING_RATE).sin() * BAT_SWING_RAD;
            }
            CricketPhase::Strike | CricketPhase::Banner | CricketPhase::Done => {
                let p = STRIKE.progress(elapsed);
                frame.bowler_x = BOWLER_START_X + RUNUP_DIST_X;
                frame.bowler_arm_rad = ARM_DELIVERY_RAD;
                frame.bat_swing_rad = BAT_BASE_RAD + BAT_SWING_RATE.sin() * BAT_SWING_RAD;
                frame.ball = Some(Point::new(
                    STRIKE_START_X + STRIKE_DIST_X * p,
                    STRIKE_BALL_Y,
                ));
                if elapsed > BAIL_POP_SECS {
                    frame.bails = [
                        BailNode {
                            lift: BAIL_LIFTS[0] * p,
                            tilt_rad: BAIL_LIFTS[0] * p,
                        },
                        BailNode {
                            lift: BAIL_LIFTS[1] * p,
                            tilt_rad: -BAIL_LIFTS[1] * p,
                        },
                    ];
                }
                frame.banner_alpha = if elapsed >= BANNER_START_SECS {
                    BANNER_FADE.progress(elapsed)
                } else {
                    0.0
                };
            }
        }

        frame
    }
}

impl Animate for CricketTimeline {
    type Frame = CricketFrame;

    fn tick(&mut self, elapsed_secs: f64) -> QuizdashResult<CricketFrame> {
        if !elapsed_secs.is_finite() || elapsed_secs < 0.0 {
            return Err(QuizdashError::session(
                "tick elapsed_secs must be finite and >= 0",
            ));
        }
        let frame = Self::sample(elapsed_secs);
        self.done = frame.done;
        Ok(frame)
    }

    fn finished(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cricket/timeline.rs"]
mod tests;
