//! Epicycles plays back a closed 2D path as a chain of rotating circles.
//!
//! The input is a flat string of precomputed Fourier coefficients. Each coefficient becomes
//! one circle whose radius-vector spins at a whole-number frequency; chaining the vectors tip
//! to tail sums the partial Fourier series, and the final tip traces the path.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: `&str -> Vec<Coefficient>` ([`parse_coefficients`])
//! 2. **Build**: `coefficients -> EpicycleChain` (zigzag frequencies, cumulative placement)
//! 3. **Play**: [`Playback`] advances normalized time `t` from 0 to 1 at a fixed frame rate,
//!    rotating every epicycle and appending a trace segment per frame on a [`DrawingSurface`]
//! 4. **Export** (optional): the in-memory [`Scene`] renders to SVG or to RGBA pixels
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded playback**: frames run to completion; waiting happens only between
//!   frames, through a [`Clock`].
//! - **Explicit failure**: malformed input and truncation are reported, not silently absorbed.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod chain;
mod coeffs;
mod foundation;
mod motion;
mod playback;
mod surface;

/// Playback configuration.
pub mod config;

pub use chain::builder::{Epicycle, EpicycleChain, EpicycleShapes, MAX_EPICYCLES, angular_speed};
pub use coeffs::parse::{Coefficient, ParseMode, ParsedCoefficients, parse_coefficients};
pub use config::{DEFAULT_DURATION_MS, PlaybackConfig};
pub use foundation::core::{BezPath, Canvas, Fps, FrameIndex, Point, Rgba8Premul, Vec2};
pub use foundation::error::{EpicycleError, EpicycleResult};
pub use motion::rotate::{rotate_offset, rotation_displacement};
pub use playback::clock::{Clock, ManualClock, SystemClock, frame_wait};
pub use playback::scheduler::{
    CancelHandle, FinishReason, FrameOutcome, Playback, PlaybackState, PlaybackStatus,
    PlaybackSummary, TickOutcome,
};
pub use surface::raster::{FrameRGBA, rasterize_scene};
pub use surface::scene::{Scene, SceneCircle, SceneLine, SceneShape, SceneStyle};
pub use surface::{DrawingSurface, LineRole, ShapeId};
