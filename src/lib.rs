//! Quizdash is a deterministic, headless animation engine for answer-driven
//! quiz mini-games.
//!
//! Given a configuration of 1–4 players, each with an ordered sequence of
//! Correct/Wrong outcomes, the engine advances each player's avatar along a
//! waypoint course over elapsed time and classifies the final ranking once
//! every sequence is exhausted. A second, fixed timeline drives the cricket
//! delivery demo. Rendering is an external collaborator: every tick produces
//! plain serializable frame state and nothing here touches a display API.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: build or parse a [`RaceConfig`] (JSON, query string, or
//!    the shared-count [`SharedRaceConfig`] shape); validation is atomic.
//! 2. **Session**: [`RaceSession`] owns all game state — round boundaries
//!    consume outcomes, continuous motion converges on waypoint targets.
//! 3. **Tick**: `session.tick(elapsed_secs)` returns a [`RaceFrame`] of
//!    drawable state; once every actor is terminal, [`Standings`] are resolved
//!    exactly once and attached to subsequent frames.
//! 4. **Drive** (optional): [`Driver`] derives elapsed time from a fixed
//!    [`Fps`] and streams frames into a [`FrameSink`], with cooperative
//!    cancellation via [`StopHandle`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: ticking is a pure function of elapsed time
//!   and the configuration; no wall clock is read anywhere.
//! - **No IO in the core**: sinks and the CLI own all output.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod course;
mod cricket;
mod foundation;
mod race;
mod schedule;

pub use animation::ease::Ease;
pub use config::model::{
    DEFAULT_PLAYER_COLORS, DEFAULT_PLAYER_NAMES, MAX_PLAYERS, MAX_QUESTIONS, Outcome, PlayerSheet,
    RaceConfig, SharedRaceConfig,
};
pub use config::params::{parse_query, parse_query_or_fallback};
pub use course::path::{
    Course, DEFAULT_MAZE_WAYPOINTS, LANE_SPACING_PX, PELLET_SPACING_PX, START_STAGGER_PX,
};
pub use cricket::timeline::{BailNode, CricketFrame, CricketPhase, CricketTimeline};
pub use foundation::core::{Fps, FrameIndex, PlayerId, Point, RoundIndex, Vec2};
pub use foundation::error::{QuizdashError, QuizdashResult};
pub use race::clock::RoundClock;
pub use race::session::{
    AvatarFx, AvatarNode, GhostNode, PelletNode, PowerPelletNode, RaceFrame, RaceSession,
    SessionOpts,
};
pub use race::standings::Standings;
pub use schedule::driver::{
    Animate, DriveStats, Driver, FrameSink, JsonLinesSink, StopHandle, VecSink,
};
