//! External collaborators and the job orchestrator.
//!
//! Every stage outside the compositor is an opaque collaborator with a fixed contract.
//! Network-backed stages (script generation, speech synthesis, video generation,
//! publishing) are traits implemented by the embedding application; media muxing ships a
//! concrete [`FfmpegMuxer`] that shells out to the system `ffmpeg`.
//!
//! [`Pipeline::run`] chains the stages for one job. A failing stage aborts the job and its
//! error is returned to the caller; nothing is retried here.

use std::path::{Path, PathBuf};

use crate::{ShortformResult, Theme, Timeline};

mod job;
mod mux;
mod narration;
mod publish;
mod script;

pub use job::{JobOutcome, JobPaths, Pipeline};
pub use mux::{FfmpegMuxer, ensure_parent_dir, is_ffmpeg_on_path};
pub use narration::{DEFAULT_MP3_BITRATE_BPS, Narration, estimate_mp3_duration_secs};
pub use publish::{PublishRequest, Published, describe, tags};
pub use script::{Script, parse_script_response};

/// Produces the script (title, subtitle, content points, narration text) for a theme.
pub trait ScriptGenerator {
    /// Generate a script. Malformed upstream payloads are errors.
    fn generate(&self, theme: Theme) -> ShortformResult<Script>;
}

/// Turns narration text into an audio file.
pub trait NarrationSynthesizer {
    /// Synthesize `text` into `out`, returning the file and its duration.
    fn synthesize(&self, text: &str, out: &Path) -> ShortformResult<Narration>;
}

/// Produces the video track (templated renderer or generative video API).
pub trait VisualGenerator {
    /// Render visuals for `script` laid out by `timeline` into `out`.
    fn generate(&self, script: &Script, timeline: &Timeline, out: &Path)
    -> ShortformResult<PathBuf>;
}

/// Combines a video track and an audio track into one media file.
pub trait MediaMuxer {
    /// Mux `video` and `audio` into `out`.
    fn mux(&self, video: &Path, audio: &Path, out: &Path) -> ShortformResult<PathBuf>;
}

/// Uploads finished media to a hosting service.
pub trait Publisher {
    /// Publish and return the remote id and URL.
    fn publish(&self, request: &PublishRequest) -> ShortformResult<Published>;
}
