//! Fixed-rate playback of an epicycle chain.
//!
//! One period of the Fourier series (`t` from 0 to 1) is stretched over a requested duration.
//! Every frame advances `t` by the same `delta_t = frame_interval / duration`, rotates each
//! epicycle incrementally and appends one trace segment for the chain's endpoint.
//!
//! Playback is single-threaded and cooperative: a frame runs to completion, then the caller
//! (or [`Playback::run`]) waits out the rest of the frame budget.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::chain::builder::EpicycleChain;
use crate::config::PlaybackConfig;
use crate::foundation::core::{FrameIndex, Point, Vec2};
use crate::foundation::error::{EpicycleError, EpicycleResult};
use crate::playback::clock::{Clock, frame_wait};
use crate::surface::{DrawingSurface, LineRole};

/// Why playback stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Normalized time reached 1.
    Completed,
    /// Stopped through [`Playback::stop`] or a [`CancelHandle`].
    Cancelled,
}

/// Scheduler state machine. `Finished` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Frames are still being produced.
    Running,
    /// No further frames will be produced.
    Finished(FinishReason),
}

/// Result of one [`Playback::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The given frame was computed and presented.
    Advanced(FrameIndex),
    /// Playback is finished; nothing was touched.
    Finished(FinishReason),
}

/// Result of one paced [`Playback::run_frame`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A frame was produced; the next one is due after `wait`.
    Rendered {
        /// Index of the frame just produced.
        frame: FrameIndex,
        /// Time spent computing it.
        compute: Duration,
        /// Remaining frame budget to wait before the next frame.
        wait: Duration,
    },
    /// Playback is finished.
    Finished(FinishReason),
}

/// Mutable per-run state, owned by the scheduler.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackState {
    t: f64,
    frame: FrameIndex,
    last_frame_at: Option<Instant>,
    last_trace_point: Option<Point>,
    trace_segments: u64,
}

impl PlaybackState {
    /// Accumulated normalized time.
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Index of the next frame to produce; equals the number of frames produced.
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    /// Start instant of the last paced frame.
    pub fn last_frame_at(&self) -> Option<Instant> {
        self.last_frame_at
    }

    /// Endpoint the next trace segment starts from.
    pub fn last_trace_point(&self) -> Option<Point> {
        self.last_trace_point
    }

    /// Number of trace segments appended.
    pub fn trace_segments(&self) -> u64 {
        self.trace_segments
    }
}

/// Cloneable cancellation flag for a running [`Playback`].
///
/// Safe to trigger from another thread; playback observes it at the next frame boundary.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    /// Request that playback stop before its next frame.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// `true` once [`CancelHandle::cancel`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Totals reported when playback finishes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PlaybackSummary {
    /// Frames produced.
    pub frames: u64,
    /// Final normalized time.
    pub t: f64,
    /// Trace segments appended.
    pub trace_segments: u64,
    /// Why playback stopped.
    pub reason: FinishReason,
}

/// A single one-shot playback of an epicycle chain on a drawing surface.
#[derive(Debug)]
pub struct Playback<S: DrawingSurface> {
    chain: EpicycleChain,
    surface: S,
    state: PlaybackState,
    status: PlaybackStatus,
    delta_t: f64,
    interval: Duration,
    lead_in: Duration,
    cancel: CancelHandle,
}

impl<S: DrawingSurface> Playback<S> {
    /// Mount `chain` on `surface` and prepare to play one period over `total_duration_ms`.
    ///
    /// The surface origin is taken from `config`. `delta_t` is fixed here for the whole run.
    #[tracing::instrument(skip(chain, surface, config), fields(epicycles = chain.len()))]
    pub fn start(
        mut chain: EpicycleChain,
        mut surface: S,
        total_duration_ms: f64,
        config: &PlaybackConfig,
    ) -> EpicycleResult<Self> {
        config.validate()?;
        if !(total_duration_ms.is_finite() && total_duration_ms > 0.0) {
            return Err(EpicycleError::validation(
                "total duration must be a positive number of milliseconds",
            ));
        }

        let delta_t = config.fps.frame_interval_ms() / total_duration_ms;
        surface.set_origin(config.origin());
        chain.mount(&mut surface);

        let state = PlaybackState {
            last_trace_point: (!chain.is_empty()).then(|| chain.tip()),
            ..PlaybackState::default()
        };
        tracing::debug!(delta_t, fps = config.fps.as_f64(), "playback started");

        Ok(Self {
            chain,
            surface,
            state,
            status: PlaybackStatus::Running,
            delta_t,
            interval: config.fps.frame_interval(),
            lead_in: Duration::from_millis(config.lead_in_ms),
            cancel: CancelHandle::default(),
        })
    }

    /// [`Playback::start`] with the default configuration (60 fps, canvas-centered origin).
    pub fn with_defaults(
        chain: EpicycleChain,
        surface: S,
        total_duration_ms: f64,
    ) -> EpicycleResult<Self> {
        Self::start(chain, surface, total_duration_ms, &PlaybackConfig::default())
    }

    /// Fraction of a period advanced per frame.
    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Target frame interval.
    pub fn frame_interval(&self) -> Duration {
        self.interval
    }

    /// Current state.
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// `true` once playback reached a terminal state.
    pub fn is_finished(&self) -> bool {
        matches!(self.status, PlaybackStatus::Finished(_))
    }

    /// Per-run state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// The chain being played.
    pub fn chain(&self) -> &EpicycleChain {
        &self.chain
    }

    /// The drawing surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// A handle that cancels this playback.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Stop immediately. No further frames are produced.
    pub fn stop(&mut self) {
        self.cancel.cancel();
        if !self.is_finished() {
            self.finish(FinishReason::Cancelled);
        }
    }

    /// Release the chain and the surface.
    pub fn into_parts(self) -> (EpicycleChain, S) {
        (self.chain, self.surface)
    }

    /// Compute one frame without pacing.
    ///
    /// Once `t ≥ 1`, on cancellation, or for an empty chain, playback moves to
    /// [`PlaybackStatus::Finished`] and every later call returns the same outcome without
    /// touching the surface.
    pub fn tick(&mut self) -> EpicycleResult<TickOutcome> {
        if let PlaybackStatus::Finished(reason) = self.status {
            return Ok(TickOutcome::Finished(reason));
        }
        if self.cancel.is_cancelled() {
            return Ok(TickOutcome::Finished(self.finish(FinishReason::Cancelled)));
        }
        if self.state.t >= 1.0 || self.chain.is_empty() {
            return Ok(TickOutcome::Finished(self.finish(FinishReason::Completed)));
        }

        let mut shift = Vec2::ZERO;
        for e in self.chain.epicycles_mut() {
            shift = e.update_position(shift, self.delta_t, &mut self.surface)?;
        }

        let tip = self.chain.tip();
        if let Some(prev) = self.state.last_trace_point {
            self.surface.line(prev, tip, LineRole::Trace);
            self.state.trace_segments += 1;
        }
        self.state.last_trace_point = Some(tip);

        let frame = self.state.frame;
        self.surface.present(frame)?;
        self.state.t += self.delta_t;
        self.state.frame = frame.next();
        Ok(TickOutcome::Advanced(frame))
    }

    /// Compute one frame and measure it against the frame budget.
    pub fn run_frame<C: Clock + ?Sized>(
        &mut self,
        clock: &mut C,
    ) -> EpicycleResult<FrameOutcome> {
        let started = clock.now();
        match self.tick()? {
            TickOutcome::Finished(reason) => Ok(FrameOutcome::Finished(reason)),
            TickOutcome::Advanced(frame) => {
                self.state.last_frame_at = Some(started);
                let compute = clock.now().saturating_duration_since(started);
                let wait = frame_wait(self.interval, compute);
                Ok(FrameOutcome::Rendered {
                    frame,
                    compute,
                    wait,
                })
            }
        }
    }

    /// Drive frames until playback finishes, sleeping on `clock` between frames.
    ///
    /// The configured lead-in delay is waited once, before the first frame.
    pub fn run<C: Clock + ?Sized>(&mut self, clock: &mut C) -> EpicycleResult<PlaybackSummary> {
        let lead_in = std::mem::take(&mut self.lead_in);
        if !lead_in.is_zero() && !self.is_finished() {
            clock.sleep(lead_in);
        }

        loop {
            match self.run_frame(clock)? {
                FrameOutcome::Rendered { wait, .. } => {
                    if !wait.is_zero() {
                        clock.sleep(wait);
                    }
                }
                FrameOutcome::Finished(reason) => return Ok(self.summary(reason)),
            }
        }
    }

    fn summary(&self, reason: FinishReason) -> PlaybackSummary {
        PlaybackSummary {
            frames: self.state.frame.0,
            t: self.state.t,
            trace_segments: self.state.trace_segments,
            reason,
        }
    }

    fn finish(&mut self, reason: FinishReason) -> FinishReason {
        self.status = PlaybackStatus::Finished(reason);
        tracing::info!(
            frames = self.state.frame.0,
            t = self.state.t,
            ?reason,
            "playback finished"
        );
        reason
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/scheduler.rs"]
mod tests;
