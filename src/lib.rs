//! Shortform lays out vertical short videos from a narration track.
//!
//! The crate turns a narration length and a handful of content points into a fixed set of
//! scene windows (intro, one per content point, outro) and evaluates per-frame draw
//! parameters for each window. A rendering collaborator paints frames from those
//! parameters; everything else in the production pipeline (script, narration, visuals,
//! muxing, publishing) sits behind the traits in [`pipeline`].
//!
//! # Pipeline overview
//!
//! 1. **Request**: [`TimelineRequest`] (narration seconds, fps, title, content points, theme)
//! 2. **Partition**: [`partition`] splits `[0, total_frames)` into [`SceneWindow`]s
//! 3. **Build**: [`Timeline::build`] resolves the [`ColorPalette`] and pre-validates curves
//! 4. **Sample**: [`Timeline::draw_params`] returns [`FrameParams`] for any frame
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure core**: partitioning, interpolation and theme resolution do no IO and keep no
//!   mutable global state, so they can be called from any number of render workers.
//! - **All-or-nothing**: a failed build never yields a partial window sequence.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod theme;
mod timeline;

/// External collaborators and the job orchestrator.
pub mod pipeline;

pub use animation::ease::Ease;
pub use animation::interpolate::{Extrapolate, InterpolateOptions, InterpolationCurve, interpolate};
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Rgba8};
pub use foundation::error::{ShortformError, ShortformResult};
pub use theme::palette::{ColorPalette, FactCategory, NewsTheme, Theme, resolve_theme};
pub use timeline::compose::{FrameParams, Timeline};
pub use timeline::partition::{
    RemainderPolicy, SceneKind, SceneWindow, TimingConfig, partition, partition_with,
};
pub use timeline::request::{JobConfig, TimelineRequest};
