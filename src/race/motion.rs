//! Per-tick presentation kinematics.
//!
//! Everything in this module is decorative interpolation toward targets set by
//! round advancement; it carries no game-logic invariants beyond monotonic
//! convergence (fixed step toward the target, exact snap within epsilon).

use std::f64::consts::{PI, TAU};

use kurbo::{Point, Vec2};

use crate::course::path::Course;
use crate::race::actor::{ActorState, Role};

pub(crate) const BASE_SIZE_PX: f64 = 18.0;
pub(crate) const BASE_SPEED_PX: f64 = 2.0;
pub(crate) const SNAP_EPSILON_PX: f64 = 5.0;

const MOUTH_RATE: f64 = 0.2;
const MOUTH_RATE_WINNER: f64 = 0.4;

pub(crate) const SHAKE_SECS: f64 = 1.5;
const SHAKE_AMP_PX: f64 = 5.0;
const SHAKE_RATE: f64 = 100.0; // rad per second

const EAT_RADIUS_PX: f64 = 20.0;
const WINNER_EAT_RADIUS_PX: f64 = 25.0;
const WINNER_SIZE_MAX_PX: f64 = 28.0;
const WINNER_GROW_PER_TICK: f64 = 0.3;
pub(crate) const WINNER_SPEED_PX: f64 = 3.0;
pub(crate) const HUE_RATE_DEG_PER_SEC: f64 = 50.0;

const FLEE_SPEED_PX: f64 = 2.0;
const FLEE_WOBBLE_PX: f64 = 3.0;
const FLEE_WOBBLE_RATE: f64 = 10.0;
pub(crate) const FLEE_STOP_X: f64 = 80.0;

const GHOST_SPEED_PX: f64 = 1.5;
const WANDER_RATE: f64 = 0.05;
const WANDER_LERP: f64 = 0.05;
const WANDER_RADIUS_PX: f64 = 30.0;
const PURSUE_LERP: f64 = 0.15;
const PURSUE_OFFSET_PX: f64 = 40.0;

pub(crate) const GHOST_COLORS: [[u8; 3]; 4] = [
    [0xFF, 0x00, 0x00],
    [0xFF, 0xB8, 0xFF],
    [0x00, 0xFF, 0xFF],
    [0xFF, 0xB8, 0x52],
];

/// Decorative pellet along the course.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Pellet {
    pub(crate) pos: Point,
    pub(crate) eaten: bool,
}

/// One fixed-size step from `pos` toward `target`.
///
/// Within [`SNAP_EPSILON_PX`] the position snaps to the target exactly.
/// Returns the new position, the motion heading when a step was taken, and
/// whether the target was reached.
pub(crate) fn step_toward(pos: Point, target: Point, step: f64) -> (Point, Option<f64>, bool) {
    let d = target - pos;
    let dist = d.hypot();
    if dist <= SNAP_EPSILON_PX {
        return (target, None, true);
    }
    (pos + d * (step / dist), Some(d.y.atan2(d.x)), false)
}

pub(crate) fn eat_pellets(pellets: &mut [Pellet], pos: Point, radius: f64) {
    for p in pellets.iter_mut() {
        if !p.eaten && (pos.x - p.pos.x).abs() < radius && (pos.y - p.pos.y).abs() < radius {
            p.eaten = true;
        }
    }
}

impl ActorState {
    /// Advance presentation state by one tick at `now_secs`.
    pub(crate) fn step_motion(&mut self, now_secs: f64, course: &Course, pellets: &mut [Pellet]) {
        match self.role {
            Role::Racing => self.step_racing(now_secs, course, pellets),
            Role::Winner => self.step_winner(course, pellets),
            Role::Loser => self.step_fleeing(now_secs),
            Role::Bystander => {
                self.mouth_phase += MOUTH_RATE;
            }
        }
    }

    fn step_racing(&mut self, now_secs: f64, course: &Course, pellets: &mut [Pellet]) {
        self.mouth_phase += MOUTH_RATE;

        if let Some(started) = self.shake_started {
            let held = course.waypoint(self.waypoint) + Vec2::new(0.0, self.lane_offset);
            let t = now_secs - started;
            if t < SHAKE_SECS {
                let phase = t * SHAKE_RATE;
                self.pos = held + Vec2::new(phase.sin(), phase.cos()) * SHAKE_AMP_PX;
            } else {
                self.pos = held;
                self.shake_started = None;
            }
            return;
        }

        if self.waypoint < self.target_waypoint {
            let target = course.waypoint(self.waypoint + 1) + Vec2::new(0.0, self.lane_offset);
            let (pos, heading, reached) = step_toward(self.pos, target, self.speed_px);
            self.pos = pos;
            if let Some(h) = heading {
                self.heading_rad = h;
            }
            if reached {
                self.waypoint += 1;
            }
            eat_pellets(pellets, self.pos, EAT_RADIUS_PX);
        }
    }

    fn step_winner(&mut self, course: &Course, pellets: &mut [Pellet]) {
        self.mouth_phase += MOUTH_RATE_WINNER;
        if self.size_px < WINNER_SIZE_MAX_PX {
            self.size_px = (self.size_px + WINNER_GROW_PER_TICK).min(WINNER_SIZE_MAX_PX);
        }

        let last = course.waypoint_count() - 1;
        if self.waypoint < last {
            let target = course.waypoint(self.waypoint + 1) + Vec2::new(0.0, self.lane_offset);
            let (pos, heading, reached) = step_toward(self.pos, target, self.speed_px);
            self.pos = pos;
            if let Some(h) = heading {
                self.heading_rad = h;
            }
            if reached {
                self.waypoint += 1;
            }
            eat_pellets(pellets, self.pos, WINNER_EAT_RADIUS_PX);
        } else {
            // Through the exit: keep eating off along the current heading.
            self.pos += Vec2::new(self.heading_rad.cos(), self.heading_rad.sin()) * self.speed_px;
        }
    }

    fn step_fleeing(&mut self, now_secs: f64) {
        self.mouth_phase += MOUTH_RATE;
        if self.pos.x > FLEE_STOP_X {
            self.heading_rad = PI;
            self.pos.x -= FLEE_SPEED_PX;
            self.pos.y += (now_secs * FLEE_WOBBLE_RATE).sin() * FLEE_WOBBLE_PX;
        }
    }
}

/// Decorative ghost behavior mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GhostMode {
    /// Drift on a small circle around the home point.
    Wander,
    /// Run at a hit avatar, then return to wandering.
    Chase,
    /// Post-game pursuit of the loser.
    Pursue,
}

/// Per-player decorative ghost. No feedback into core race state.
#[derive(Clone, Debug)]
pub(crate) struct GhostState {
    pub(crate) pos: Point,
    pub(crate) color: [u8; 3],
    pub(crate) mode: GhostMode,
    home: Point,
    wander_angle: f64,
    chase_target: Point,
}

impl GhostState {
    pub(crate) fn new(index: usize, player_count: usize, home: Point) -> Self {
        let angle = index as f64 / player_count as f64 * TAU;
        Self {
            pos: home + Vec2::new(angle.cos(), angle.sin()) * WANDER_RADIUS_PX,
            color: GHOST_COLORS[index % GHOST_COLORS.len()],
            mode: GhostMode::Wander,
            home,
            wander_angle: angle,
            chase_target: home,
        }
    }

    pub(crate) fn begin_chase(&mut self, target: Point) {
        self.mode = GhostMode::Chase;
        self.chase_target = target;
    }

    pub(crate) fn begin_pursuit(&mut self) {
        self.mode = GhostMode::Pursue;
    }

    /// Advance one tick. `pursue_target` is the loser position during the
    /// post-game chase.
    pub(crate) fn step(&mut self, pursue_target: Option<Point>) {
        match self.mode {
            GhostMode::Wander => {
                self.wander_angle += WANDER_RATE;
                let target = self.home
                    + Vec2::new(self.wander_angle.cos(), self.wander_angle.sin())
                        * WANDER_RADIUS_PX;
                self.pos += (target - self.pos) * WANDER_LERP;
            }
            GhostMode::Chase => {
                let d = self.chase_target - self.pos;
                let dist = d.hypot();
                if dist > SNAP_EPSILON_PX {
                    self.pos += d * (GHOST_SPEED_PX / dist);
                } else {
                    self.mode = GhostMode::Wander;
                }
            }
            GhostMode::Pursue => {
                if let Some(target) = pursue_target {
                    let goal = target + Vec2::new(-PURSUE_OFFSET_PX, 0.0);
                    self.pos += (goal - self.pos) * PURSUE_LERP;
                }
            }
        }
    }
}
