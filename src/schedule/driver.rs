use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{QuizdashError, QuizdashResult};

/// Per-frame animation state source driven by [`Driver`].
///
/// Implementations are pure state machines over elapsed time; the driver owns
/// all timing, which keeps every run reproducible.
pub trait Animate {
    /// Frame payload produced by each tick.
    type Frame: serde::Serialize;

    /// Advance to `elapsed_secs` and return drawable state.
    fn tick(&mut self, elapsed_secs: f64) -> QuizdashResult<Self::Frame>;

    /// True once the animation has nothing further to play.
    fn finished(&self) -> bool;
}

/// Consumer of driver-emitted frames.
pub trait FrameSink<F> {
    /// Called once before the first frame.
    fn begin(&mut self, fps: Fps) -> QuizdashResult<()>;

    /// Receive one frame. Indices are strictly increasing from zero.
    fn push_frame(&mut self, index: FrameIndex, frame: &F) -> QuizdashResult<()>;

    /// Called once after the last frame.
    fn end(&mut self) -> QuizdashResult<()>;
}

/// In-memory sink collecting `(index, frame)` pairs.
#[derive(Clone, Debug, Default)]
pub struct VecSink<F> {
    /// Collected frames in emission order.
    pub frames: Vec<(FrameIndex, F)>,
}

impl<F> VecSink<F> {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }
}

impl<F: Clone> FrameSink<F> for VecSink<F> {
    fn begin(&mut self, _fps: Fps) -> QuizdashResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, index: FrameIndex, frame: &F) -> QuizdashResult<()> {
        self.frames.push((index, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> QuizdashResult<()> {
        Ok(())
    }
}

/// Sink serializing each frame as one JSON line.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write, F: serde::Serialize> FrameSink<F> for JsonLinesSink<W> {
    fn begin(&mut self, _fps: Fps) -> QuizdashResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, _index: FrameIndex, frame: &F) -> QuizdashResult<()> {
        let line = serde_json::to_string(frame)
            .map_err(|e| QuizdashError::serde(format!("frame serialization failed: {e}")))?;
        self.out
            .write_all(line.as_bytes())
            .and_then(|()| self.out.write_all(b"\n"))
            .map_err(|e| QuizdashError::Other(anyhow::Error::new(e).context("write frame line")))
    }

    fn end(&mut self) -> QuizdashResult<()> {
        self.out
            .flush()
            .map_err(|e| QuizdashError::Other(anyhow::Error::new(e).context("flush frame sink")))
    }
}

/// Cooperative cancellation flag, observed at the top of each driver frame.
///
/// Stopping is a single flag flip; no in-flight work needs unwinding.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    fn new() -> Self {
        Self::default()
    }

    /// Request the driving loop to stop before its next frame.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// True once a stop has been requested.
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Run statistics returned by [`Driver::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriveStats {
    /// Frames pushed into the sink.
    pub frames_emitted: u64,
    /// True when the run ended via the stop flag.
    pub stopped: bool,
    /// True when the run ended because the animation finished.
    pub finished: bool,
}

/// The single driving loop.
///
/// Derives elapsed time deterministically from the frame cadence, calls
/// [`Animate::tick`] once per frame, and delivers frames to the sink in
/// strictly increasing index order. Replaces self-scheduling frame callbacks:
/// timing lives here, state lives in the animation, drawing lives in the sink.
#[derive(Clone, Debug)]
pub struct Driver {
    fps: Fps,
    max_frames: u64,
    stop: StopHandle,
}

impl Driver {
    /// Default cap on emitted frames (20 minutes at 30 fps).
    pub const DEFAULT_MAX_FRAMES: u64 = 36_000;

    /// Create a driver at the given cadence.
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            max_frames: Self::DEFAULT_MAX_FRAMES,
            stop: StopHandle::new(),
        }
    }

    /// Override the emitted-frame cap.
    pub fn max_frames(mut self, max_frames: u64) -> QuizdashResult<Self> {
        if max_frames == 0 {
            return Err(QuizdashError::config("max_frames must be > 0"));
        }
        self.max_frames = max_frames;
        Ok(self)
    }

    /// Handle for cooperative cancellation of [`Driver::run`].
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Drive `anim` to completion (or stop/cap) through `sink`.
    #[tracing::instrument(skip(self, anim, sink))]
    pub fn run<A, S>(&self, anim: &mut A, sink: &mut S) -> QuizdashResult<DriveStats>
    where
        A: Animate,
        S: FrameSink<A::Frame>,
    {
        sink.begin(self.fps)?;

        let mut stats = DriveStats::default();
        let mut index = 0u64;
        while index < self.max_frames {
            if self.stop.is_stopped() {
                stats.stopped = true;
                break;
            }

            let elapsed = self.fps.frames_to_secs(index);
            let frame = anim.tick(elapsed)?;
            sink.push_frame(FrameIndex(index), &frame)?;
            stats.frames_emitted += 1;
            index += 1;

            if anim.finished() {
                stats.finished = true;
                break;
            }
        }

        sink.end()?;
        Ok(stats)
    }
}
