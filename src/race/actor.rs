use kurbo::Point;

use crate::config::model::{Outcome, PlayerSheet};
use crate::course::path::Course;
use crate::foundation::core::PlayerId;
use crate::race::motion;

/// Post-resolution role driving the end-of-game animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Role {
    /// Race still in progress.
    Racing,
    /// Member of the winner set; celebrates through the exit.
    Winner,
    /// Minimum-correct player; flees from the ghosts.
    Loser,
    /// Finished without distinction; stands still.
    Bystander,
}

/// Full per-player state: the outcome cursor that drives game logic plus the
/// presentation-motion fields consumed by frame building.
///
/// Mutated once per round boundary by [`ActorState::advance_round`] and once
/// per tick by the motion step; the sequence side becomes immutable once the
/// terminal flag is set.
#[derive(Clone, Debug)]
pub(crate) struct ActorState {
    pub(crate) player: PlayerId,
    pub(crate) name: String,
    pub(crate) color: [u8; 3],
    outcomes: Vec<Outcome>,
    pub(crate) cursor: usize,
    pub(crate) correct: u32,
    pub(crate) target_progress: f64,
    pub(crate) target_waypoint: usize,
    pub(crate) terminal: bool,
    pub(crate) role: Role,

    pub(crate) pos: Point,
    pub(crate) heading_rad: f64,
    pub(crate) waypoint: usize,
    pub(crate) lane_offset: f64,
    pub(crate) mouth_phase: f64,
    pub(crate) size_px: f64,
    pub(crate) speed_px: f64,
    pub(crate) shake_started: Option<f64>,
}

impl ActorState {
    pub(crate) fn new(
        index: usize,
        player_count: usize,
        sheet: &PlayerSheet,
        name: String,
        color: [u8; 3],
        course: &Course,
    ) -> Self {
        let lane_offset = Course::lane_offset(index, player_count);
        let start = course.waypoint(0);
        Self {
            player: PlayerId(index),
            name,
            color,
            outcomes: sheet.outcomes.clone(),
            cursor: 0,
            correct: 0,
            target_progress: 0.0,
            target_waypoint: 0,
            terminal: false,
            role: Role::Racing,
            pos: Point::new(start.x - Course::start_stagger(index), start.y + lane_offset),
            heading_rad: 0.0,
            waypoint: 0,
            lane_offset,
            mouth_phase: 0.0,
            size_px: motion::BASE_SIZE_PX,
            speed_px: motion::BASE_SPEED_PX,
            shake_started: None,
        }
    }

    /// Consume one outcome at a round boundary.
    ///
    /// A Correct outcome raises the correct count and recomputes the target
    /// path position as `correct / max_len` (clamped); a Wrong outcome starts
    /// the ghost-hit shake. The cursor always advances, and the actor turns
    /// terminal once the whole sequence is consumed. No-op when already
    /// terminal.
    pub(crate) fn advance_round(
        &mut self,
        course: &Course,
        max_len: usize,
        now_secs: f64,
    ) -> Option<Outcome> {
        if self.terminal {
            return None;
        }
        let outcome = self.outcomes[self.cursor];
        match outcome {
            Outcome::Correct => {
                self.correct += 1;
                let progress = (f64::from(self.correct) / max_len as f64).clamp(0.0, 1.0);
                debug_assert!(progress >= self.target_progress);
                self.target_progress = progress;
                self.target_waypoint = course.target_waypoint(progress);
            }
            Outcome::Wrong => {
                self.shake_started = Some(now_secs);
            }
        }
        self.cursor += 1;
        if self.cursor == self.outcomes.len() {
            self.terminal = true;
        }
        Some(outcome)
    }

    /// Outcomes consumed so far.
    pub(crate) fn answered(&self) -> u32 {
        self.cursor as u32
    }

    /// Total sequence length.
    pub(crate) fn total(&self) -> u32 {
        self.outcomes.len() as u32
    }
}
