use kurbo::Point;

use crate::config::model::{Outcome, RaceConfig};
use crate::course::path::Course;
use crate::foundation::core::{PlayerId, RoundIndex};
use crate::foundation::error::{QuizdashError, QuizdashResult};
use crate::race::actor::{ActorState, Role};
use crate::race::clock::RoundClock;
use crate::race::motion::{self, GhostMode, GhostState, Pellet};
use crate::race::standings::Standings;
use crate::schedule::driver::Animate;

const POWER_PULSE_RATE: f64 = 6.0; // rad per second
const EXIT_MARGIN_PX: f64 = 100.0;
const CELEBRATION_MAX_SECS: f64 = 20.0;

/// Tunable session parameters.
#[derive(Clone, Copy, Debug)]
pub struct SessionOpts {
    /// Seconds between round boundaries.
    pub round_interval_secs: f64,
    /// Avatar step size per tick in pixels.
    pub step_px_per_tick: f64,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            round_interval_secs: RoundClock::DEFAULT_INTERVAL_SECS,
            step_px_per_tick: motion::BASE_SPEED_PX,
        }
    }
}

/// A running race: the explicit game-session object.
///
/// Owned exclusively by the caller; all state lives here (no process-scope
/// globals). Construction validates the configuration atomically, `tick`
/// advances the timeline, and the session can simply be dropped and rebuilt to
/// restart.
pub struct RaceSession {
    course: Course,
    clock: RoundClock,
    max_len: usize,
    actors: Vec<ActorState>,
    ghosts: Vec<GhostState>,
    pellets: Vec<Pellet>,
    rounds_total: u32,
    rounds_advanced: u32,
    last_elapsed: Option<f64>,
    standings: Option<Standings>,
    resolved_at: Option<f64>,
}

impl RaceSession {
    /// Build a session from a validated configuration.
    ///
    /// An invalid configuration is rejected here with no partial state
    /// created.
    pub fn new(config: &RaceConfig, course: Course, opts: SessionOpts) -> QuizdashResult<Self> {
        config.validate()?;
        let clock = RoundClock::new(opts.round_interval_secs)?;
        if !opts.step_px_per_tick.is_finite() || opts.step_px_per_tick <= 0.0 {
            return Err(QuizdashError::config(
                "step_px_per_tick must be finite and > 0",
            ));
        }

        let player_count = config.players.len();
        let mut actors = Vec::with_capacity(player_count);
        let mut ghosts = Vec::with_capacity(player_count);
        for (i, sheet) in config.players.iter().enumerate() {
            let mut actor = ActorState::new(
                i,
                player_count,
                sheet,
                config.player_name(i).to_string(),
                config.player_color(i),
                &course,
            );
            actor.speed_px = opts.step_px_per_tick;
            actors.push(actor);
            ghosts.push(GhostState::new(i, player_count, course.ghost_home()));
        }

        let pellets = course
            .pellet_points()
            .into_iter()
            .map(|pos| Pellet { pos, eaten: false })
            .collect();

        Ok(Self {
            clock,
            max_len: config.max_sequence_len(),
            rounds_total: config.max_sequence_len() as u32,
            actors,
            ghosts,
            pellets,
            course,
            rounds_advanced: 0,
            last_elapsed: None,
            standings: None,
            resolved_at: None,
        })
    }

    /// Cached standings, present once every actor is terminal.
    pub fn standings(&self) -> Option<&Standings> {
        self.standings.as_ref()
    }

    /// True once standings have been resolved.
    pub fn resolved(&self) -> bool {
        self.standings.is_some()
    }

    /// Total number of round boundaries this race will cross.
    pub fn rounds_total(&self) -> u32 {
        self.rounds_total
    }

    /// Round boundaries crossed so far.
    pub fn round(&self) -> RoundIndex {
        RoundIndex(self.rounds_advanced)
    }

    /// Advance the session to `elapsed_secs` and return drawable state.
    ///
    /// All round boundaries due at `elapsed_secs` are applied before the
    /// motion step, so sparse ticking still consumes every outcome.
    /// `elapsed_secs` must be finite, non-negative, and non-decreasing across
    /// calls.
    #[tracing::instrument(skip(self))]
    pub fn tick(&mut self, elapsed_secs: f64) -> QuizdashResult<RaceFrame> {
        if !elapsed_secs.is_finite() || elapsed_secs < 0.0 {
            return Err(QuizdashError::session(
                "tick elapsed_secs must be finite and >= 0",
            ));
        }
        if let Some(last) = self.last_elapsed
            && elapsed_secs < last
        {
            return Err(QuizdashError::session(
                "tick elapsed_secs must not decrease",
            ));
        }
        self.last_elapsed = Some(elapsed_secs);

        self.advance_due_rounds(elapsed_secs);
        self.resolve_if_complete(elapsed_secs);

        for actor in &mut self.actors {
            actor.step_motion(elapsed_secs, &self.course, &mut self.pellets);
        }

        let pursue_target = self.loser_position();
        for ghost in &mut self.ghosts {
            ghost.step(pursue_target);
        }

        Ok(self.frame(elapsed_secs))
    }

    fn advance_due_rounds(&mut self, elapsed_secs: f64) {
        let due = self.clock.rounds_due(elapsed_secs).min(self.rounds_total);
        while self.rounds_advanced < due {
            for (actor, ghost) in self.actors.iter_mut().zip(self.ghosts.iter_mut()) {
                if let Some(Outcome::Wrong) =
                    actor.advance_round(&self.course, self.max_len, elapsed_secs)
                {
                    ghost.begin_chase(actor.pos);
                }
            }
            self.rounds_advanced += 1;
            tracing::debug!(round = self.rounds_advanced, "round boundary applied");
        }
    }

    fn resolve_if_complete(&mut self, elapsed_secs: f64) {
        if self.standings.is_some() || !self.actors.iter().all(|a| a.terminal) {
            return;
        }

        let counts: Vec<(PlayerId, u32)> =
            self.actors.iter().map(|a| (a.player, a.correct)).collect();
        let standings = Standings::resolve(&counts);

        for actor in &mut self.actors {
            actor.role = if standings.is_winner(actor.player) {
                actor.speed_px = motion::WINNER_SPEED_PX;
                Role::Winner
            } else if standings.loser == Some(actor.player) {
                Role::Loser
            } else {
                Role::Bystander
            };
            // Winners eat their way through the rest of the course.
            if actor.role == Role::Winner {
                actor.target_waypoint = self.course.waypoint_count() - 1;
            }
        }
        if standings.loser.is_some() {
            for ghost in &mut self.ghosts {
                ghost.begin_pursuit();
            }
        }

        tracing::info!(
            winners = ?standings.winners,
            top_correct = standings.top_correct,
            loser = ?standings.loser,
            "race resolved"
        );
        self.resolved_at = Some(elapsed_secs);
        self.standings = Some(standings);
    }

    fn loser_position(&self) -> Option<Point> {
        let loser = self.standings.as_ref()?.loser?;
        self.actors
            .iter()
            .find(|a| a.player == loser)
            .map(|a| a.pos)
    }

    fn run_complete(&self) -> bool {
        let Some(resolved_at) = self.resolved_at else {
            return false;
        };
        let now = self.last_elapsed.unwrap_or(resolved_at);
        if now >= resolved_at + CELEBRATION_MAX_SECS {
            return true;
        }

        let exit_x = self.course.exit().x + EXIT_MARGIN_PX;
        let winners_out = self
            .actors
            .iter()
            .filter(|a| a.role == Role::Winner)
            .all(|a| a.pos.x > exit_x);
        let loser_settled = self
            .actors
            .iter()
            .filter(|a| a.role == Role::Loser)
            .all(|a| a.pos.x <= motion::FLEE_STOP_X);
        winners_out && loser_settled
    }

    fn frame(&self, elapsed_secs: f64) -> RaceFrame {
        let actors = self
            .actors
            .iter()
            .map(|a| AvatarNode {
                player: a.player,
                name: a.name.clone(),
                color: a.color,
                pos: a.pos,
                heading_rad: a.heading_rad,
                mouth_phase: a.mouth_phase,
                size_px: a.size_px,
                answered: a.answered(),
                total: a.total(),
                correct: a.correct,
                terminal: a.terminal,
                fx: match a.role {
                    Role::Winner => AvatarFx::Celebrate {
                        hue_deg: (elapsed_secs * motion::HUE_RATE_DEG_PER_SEC).rem_euclid(360.0),
                    },
                    Role::Loser => AvatarFx::Flee,
                    _ if a.shake_started.is_some() => AvatarFx::Shake,
                    _ => AvatarFx::None,
                },
            })
            .collect();

        let ghosts = self
            .ghosts
            .iter()
            .map(|g| GhostNode {
                pos: g.pos,
                color: g.color,
                chasing: g.mode != GhostMode::Wander,
            })
            .collect();

        let pellets = self
            .pellets
            .iter()
            .map(|p| PelletNode {
                pos: p.pos,
                eaten: p.eaten,
            })
            .collect();

        let pulse = (elapsed_secs * POWER_PULSE_RATE).sin();
        let power_pellets = self
            .course
            .power_pellet_points()
            .into_iter()
            .map(|pos| PowerPelletNode { pos, pulse })
            .collect();

        RaceFrame {
            elapsed_secs,
            round: self.round(),
            rounds_total: self.rounds_total,
            finished: self.resolved(),
            actors,
            ghosts,
            pellets,
            power_pellets,
            standings: self.standings.clone(),
        }
    }
}

impl Animate for RaceSession {
    type Frame = RaceFrame;

    fn tick(&mut self, elapsed_secs: f64) -> QuizdashResult<RaceFrame> {
        RaceSession::tick(self, elapsed_secs)
    }

    /// The run is complete once standings are resolved and the end-of-game
    /// animation has settled (or timed out).
    fn finished(&self) -> bool {
        self.run_complete()
    }
}

/// Complete drawable state for one race frame.
#[derive(Clone, Debug, serde::Serialize)]
pub struct RaceFrame {
    /// Elapsed session time in seconds.
    pub elapsed_secs: f64,
    /// Round boundaries crossed so far.
    pub round: RoundIndex,
    /// Total round boundaries in this race.
    pub rounds_total: u32,
    /// True once standings have been resolved.
    pub finished: bool,
    /// Per-player avatars in player order.
    pub actors: Vec<AvatarNode>,
    /// Decorative ghosts in player order.
    pub ghosts: Vec<GhostNode>,
    /// Decorative pellets along the course.
    pub pellets: Vec<PelletNode>,
    /// Pulsing power pellets at course anchors.
    pub power_pellets: Vec<PowerPelletNode>,
    /// Final ranking, present from the resolving frame onward.
    pub standings: Option<Standings>,
}

/// One player's avatar as drawn this frame.
#[derive(Clone, Debug, serde::Serialize)]
pub struct AvatarNode {
    /// Player identity.
    pub player: PlayerId,
    /// Display name.
    pub name: String,
    /// Base color (straight RGB8).
    pub color: [u8; 3],
    /// Position in course space.
    pub pos: Point,
    /// Facing direction in radians.
    pub heading_rad: f64,
    /// Mouth animation phase.
    pub mouth_phase: f64,
    /// Avatar radius in pixels.
    pub size_px: f64,
    /// Outcomes consumed so far.
    pub answered: u32,
    /// Total outcomes in this player's sequence.
    pub total: u32,
    /// Correct count so far.
    pub correct: u32,
    /// True once the whole sequence is consumed.
    pub terminal: bool,
    /// Active visual effect.
    pub fx: AvatarFx,
}

/// Visual effect active on an avatar.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum AvatarFx {
    /// No effect.
    None,
    /// Ghost-hit shake.
    Shake,
    /// Winner celebration with cycling hue.
    Celebrate {
        /// Current hue in degrees, `[0, 360)`.
        hue_deg: f64,
    },
    /// Loser flight from the ghosts.
    Flee,
}

/// A decorative ghost as drawn this frame.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct GhostNode {
    /// Position in course space.
    pub pos: Point,
    /// Ghost color (straight RGB8).
    pub color: [u8; 3],
    /// True while chasing or pursuing.
    pub chasing: bool,
}

/// A pellet as drawn this frame.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct PelletNode {
    /// Position in course space.
    pub pos: Point,
    /// True once eaten.
    pub eaten: bool,
}

/// A power pellet as drawn this frame.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct PowerPelletNode {
    /// Position in course space.
    pub pos: Point,
    /// Pulse value in `[-1, 1]`.
    pub pulse: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/race/session.rs"]
mod tests;
