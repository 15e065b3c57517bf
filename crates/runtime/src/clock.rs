//! Fixed-timestep clock.
//!
//! Rendering happens as fast as the host allows; simulation only ever
//! advances in `fixed_dt` slices. [`Clock::frame`] takes the elapsed wall
//! time, accumulates it, runs zero or more fixed steps, and renders once
//! with the leftover fraction as the interpolation alpha. [`Clock::run`]
//! wraps that in a real-time loop; `frame` itself takes elapsed seconds as a
//! plain number, so every stepping property is testable without sleeping.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

/// A simulation host driven by the clock.
///
/// Per frame the clock calls `simulate` zero or more times, each with
/// exactly `fixed_dt`, then `render` exactly once.
pub trait Step {
    fn simulate(&mut self, dt: f32);

    /// `alpha` in `[0, 1)` is how far the accumulator sits between the last
    /// step and the next, for interpolated drawing.
    fn render(&mut self, alpha: f32);
}

/// Clock tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockConfig {
    /// Simulation step size in seconds.
    pub fixed_dt: f32,
    /// Cap applied to one frame's elapsed time before it enters the
    /// accumulator. A long stall (debugger, laptop lid) contributes at most
    /// this much, which bounds the catch-up burst; at the defaults that is
    /// 15 steps.
    pub max_frame_time: f32,
}

impl ClockConfig {
    pub const DEFAULT_FIXED_DT: f32 = 1.0 / 60.0;
    pub const DEFAULT_MAX_FRAME_TIME: f32 = 0.25;
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            fixed_dt: Self::DEFAULT_FIXED_DT,
            max_frame_time: Self::DEFAULT_MAX_FRAME_TIME,
        }
    }
}

/// What one call to [`Clock::frame`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    /// Fixed steps executed this frame. Zero is normal on fast frames.
    pub steps: u32,
    /// The alpha passed to `render`.
    pub alpha: f32,
}

/// Cloneable handle that asks a running clock to stop.
///
/// `stop` is idempotent and safe from other threads or signal handlers; the
/// loop notices at the top of its next iteration and never calls `simulate`
/// again after that.
#[derive(Clone, Debug)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// The fixed-timestep loop driver.
pub struct Clock {
    config: ClockConfig,
    accumulator: f32,
    fps: FpsWindow,
    stop: Arc<AtomicBool>,
}

impl Clock {
    pub fn new(config: ClockConfig) -> Self {
        Self {
            config,
            accumulator: 0.0,
            fps: FpsWindow::default(),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn config(&self) -> ClockConfig {
        self.config
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            flag: Arc::clone(&self.stop),
        }
    }

    /// Frames per second over the last full second, from unclamped frame
    /// times. Zero until the first second completes.
    pub fn fps(&self) -> u32 {
        self.fps.current()
    }

    /// One frame of the loop, fed `elapsed` wall seconds since the previous
    /// frame.
    ///
    /// The unclamped elapsed time goes to the FPS window first, so the
    /// counter reports real frame rate even through a stall. The clamped
    /// time feeds the accumulator, which then drains in `fixed_dt` steps.
    pub fn frame(&mut self, elapsed: f32, host: &mut impl Step) -> FrameReport {
        self.fps.record(elapsed);
        self.accumulator += elapsed.min(self.config.max_frame_time);

        let mut steps = 0;
        while self.accumulator >= self.config.fixed_dt {
            host.simulate(self.config.fixed_dt);
            self.accumulator -= self.config.fixed_dt;
            steps += 1;
        }

        let alpha = self.accumulator / self.config.fixed_dt;
        host.render(alpha);
        FrameReport { steps, alpha }
    }

    /// Drives `frame` from wall time until the stop handle fires.
    ///
    /// Entry clears any previous stop request and takes a fresh time sample,
    /// so a restart does not replay the stopped period as one giant frame.
    /// Panics from the host propagate.
    pub fn run(&mut self, host: &mut impl Step) {
        self.stop.store(false, Ordering::Relaxed);
        let mut last = Instant::now();
        debug!(fixed_dt = self.config.fixed_dt, "clock started");

        while !self.stop.load(Ordering::Relaxed) {
            let now = Instant::now();
            let elapsed = now.duration_since(last).as_secs_f32();
            last = now;

            self.frame(elapsed, host);
            thread::sleep(Duration::from_millis(1));
        }
        debug!("clock stopped");
    }
}

/// Rolling one-second FPS counter.
///
/// Counts frames and sums frame times; each time the sum crosses one second
/// the frame count becomes the published value and the window restarts.
#[derive(Clone, Debug, Default)]
struct FpsWindow {
    elapsed: f32,
    frames: u32,
    published: u32,
}

impl FpsWindow {
    fn record(&mut self, frame_time: f32) {
        self.elapsed += frame_time;
        self.frames += 1;
        if self.elapsed >= 1.0 {
            self.published = self.frames;
            self.frames = 0;
            self.elapsed = 0.0;
        }
    }

    fn current(&self) -> u32 {
        self.published
    }
}
