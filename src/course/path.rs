use kurbo::Point;

use crate::foundation::error::{QuizdashError, QuizdashResult};

/// Default maze polyline from start to exit, left to right.
pub const DEFAULT_MAZE_WAYPOINTS: [(f64, f64); 10] = [
    (150.0, 300.0),
    (250.0, 300.0),
    (250.0, 200.0),
    (400.0, 200.0),
    (400.0, 350.0),
    (550.0, 350.0),
    (550.0, 250.0),
    (700.0, 250.0),
    (700.0, 350.0),
    (850.0, 350.0),
];

const DEFAULT_GHOST_HOME: (f64, f64) = (600.0, 180.0);

/// Spacing of decorative pellets along course segments.
pub const PELLET_SPACING_PX: f64 = 20.0;
/// Vertical spacing between player lanes.
pub const LANE_SPACING_PX: f64 = 25.0;
/// Horizontal stagger applied to start positions.
pub const START_STAGGER_PX: f64 = 35.0;

/// A waypoint course avatars race along.
///
/// The course is a polyline of at least two waypoints with finite coordinates,
/// plus a home point the decorative ghosts wander around. Path positions are
/// expressed as a progress fraction in `[0, 1]` over the polyline arc length.
#[derive(Clone, Debug)]
pub struct Course {
    waypoints: Vec<Point>,
    ghost_home: Point,
    segment_lens: Vec<f64>,
}

impl Course {
    /// Build a validated course.
    pub fn new(waypoints: Vec<Point>, ghost_home: Point) -> QuizdashResult<Self> {
        if waypoints.len() < 2 {
            return Err(QuizdashError::config(
                "course must have at least two waypoints",
            ));
        }
        for (i, p) in waypoints.iter().enumerate() {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(QuizdashError::config(format!(
                    "course waypoint {i} must have finite coordinates"
                )));
            }
        }
        if !ghost_home.x.is_finite() || !ghost_home.y.is_finite() {
            return Err(QuizdashError::config(
                "course ghost home must have finite coordinates",
            ));
        }
        let segment_lens = waypoints
            .windows(2)
            .map(|w| (w[1] - w[0]).hypot())
            .collect::<Vec<_>>();
        if segment_lens.iter().any(|&l| l == 0.0) {
            return Err(QuizdashError::config(
                "course must not contain zero-length segments",
            ));
        }
        Ok(Self {
            waypoints,
            ghost_home,
            segment_lens,
        })
    }

    /// The classic maze course used by the original visualizer.
    pub fn default_maze() -> Self {
        let waypoints = DEFAULT_MAZE_WAYPOINTS
            .iter()
            .map(|&(x, y)| Point::new(x, y))
            .collect();
        let home = Point::new(DEFAULT_GHOST_HOME.0, DEFAULT_GHOST_HOME.1);
        Self::new(waypoints, home).expect("default maze course is valid")
    }

    /// Waypoints in course order.
    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    /// Number of waypoints.
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Waypoint at `index`.
    pub fn waypoint(&self, index: usize) -> Point {
        self.waypoints[index]
    }

    /// Final waypoint (course exit).
    pub fn exit(&self) -> Point {
        *self.waypoints.last().expect("course has waypoints")
    }

    /// Ghost home point.
    pub fn ghost_home(&self) -> Point {
        self.ghost_home
    }

    /// Total polyline arc length in pixels.
    pub fn total_len(&self) -> f64 {
        self.segment_lens.iter().sum()
    }

    /// Arc-length parameterized point at `progress`, clamped to `[0, 1]`.
    pub fn point_at(&self, progress: f64) -> Point {
        let progress = progress.clamp(0.0, 1.0);
        let mut remaining = progress * self.total_len();
        for (i, &len) in self.segment_lens.iter().enumerate() {
            if remaining <= len {
                let t = remaining / len;
                let a = self.waypoints[i];
                let b = self.waypoints[i + 1];
                return a + (b - a) * t;
            }
            remaining -= len;
        }
        self.exit()
    }

    /// Waypoint index an avatar should have reached at `progress`.
    ///
    /// Discrete mapping used by round advancement: `floor(progress * (n - 1))`,
    /// clamped to the final waypoint.
    pub fn target_waypoint(&self, progress: f64) -> usize {
        let n = self.waypoints.len();
        let raw = (progress.clamp(0.0, 1.0) * (n - 1) as f64).floor() as usize;
        raw.min(n - 1)
    }

    /// Vertical lane offset for `player_index` of `player_count` players.
    pub fn lane_offset(player_index: usize, player_count: usize) -> f64 {
        (player_index as f64 - (player_count.saturating_sub(1)) as f64 / 2.0) * LANE_SPACING_PX
    }

    /// Horizontal start stagger for `player_index`.
    pub fn start_stagger(player_index: usize) -> f64 {
        player_index as f64 * START_STAGGER_PX
    }

    /// Decorative pellet positions along every segment.
    ///
    /// Each segment contributes `floor(len / spacing)` pellets including the
    /// segment start and excluding its end.
    pub fn pellet_points(&self) -> Vec<Point> {
        let mut out = Vec::new();
        for (i, &len) in self.segment_lens.iter().enumerate() {
            let a = self.waypoints[i];
            let b = self.waypoints[i + 1];
            let count = (len / PELLET_SPACING_PX).floor() as usize;
            for j in 0..count {
                let t = j as f64 / count as f64;
                out.push(a + (b - a) * t);
            }
        }
        out
    }

    /// Power-pellet anchor points: start, middle, and second-to-last waypoint.
    pub fn power_pellet_points(&self) -> [Point; 3] {
        let n = self.waypoints.len();
        [
            self.waypoints[0],
            self.waypoints[n / 2],
            self.waypoints[n - 2],
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/course/path.rs"]
mod tests;
