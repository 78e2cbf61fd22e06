use crate::foundation::error::{QuizdashError, QuizdashResult};

pub use kurbo::{Point, Vec2};

/// Zero-based index of a driver frame.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Zero-based index of a completed round boundary.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RoundIndex(pub u32);

/// Stable identity of a configured player (index into the configuration).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PlayerId(pub usize);

/// Frame cadence as a rational frames-per-second value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds); must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a validated cadence.
    pub fn new(num: u32, den: u32) -> QuizdashResult<Self> {
        if den == 0 {
            return Err(QuizdashError::config("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(QuizdashError::config("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Cadence as a floating-point frames-per-second value.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert a frame count to elapsed seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }
}
