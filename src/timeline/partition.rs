use crate::foundation::{
    core::{Fps, FrameIndex, FrameRange},
    error::{ShortformError, ShortformResult},
};

/// Role of a scene window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    /// Title/subtitle card.
    Intro,
    /// One content point.
    Content,
    /// Brand/outro card.
    Outro,
}

/// Contiguous half-open frame window assigned to one scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneWindow {
    /// First frame of the window.
    pub start_frame: u64,
    /// Window length in frames (always `> 0`).
    pub duration_frames: u64,
    /// Scene role.
    pub kind: SceneKind,
    /// Content point index for [`SceneKind::Content`], `0` otherwise.
    pub index: usize,
}

impl SceneWindow {
    /// One past the last frame.
    pub fn end_frame(&self) -> u64 {
        self.start_frame + self.duration_frames
    }

    /// Window as a [`FrameRange`].
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(self.start_frame),
            end: FrameIndex(self.end_frame()),
        }
    }

    /// `true` when `frame` falls inside the window.
    pub fn contains(&self, frame: FrameIndex) -> bool {
        self.range().contains(frame)
    }

    /// Frame offset from the window start, if the frame is inside.
    pub fn local_frame(&self, frame: FrameIndex) -> Option<u64> {
        self.contains(frame).then(|| frame.0 - self.start_frame)
    }
}

/// What to do with frames left over after dividing content time evenly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderPolicy {
    /// Give the remainder to the last content window; windows tile `[0, total_frames)`.
    #[default]
    Redistribute,
    /// Drop the remainder: the outro starts right after the last content window and the
    /// final `remainder` frames belong to no window.
    Truncate,
}

/// Fixed scene timings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Intro length in whole seconds.
    pub intro_secs: u32,
    /// Outro length in whole seconds.
    pub outro_secs: u32,
    /// Leftover-frame handling.
    pub remainder: RemainderPolicy,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            intro_secs: 2,
            outro_secs: 2,
            remainder: RemainderPolicy::Redistribute,
        }
    }
}

/// Split `[0, total_frames)` into intro, `content_count` content windows and outro using
/// the default [`TimingConfig`] (2 s intro, 2 s outro, remainder redistributed).
pub fn partition(
    total_frames: u64,
    fps: Fps,
    content_count: usize,
) -> ShortformResult<Vec<SceneWindow>> {
    partition_with(total_frames, fps, content_count, &TimingConfig::default())
}

/// [`partition`] with explicit timings.
#[tracing::instrument(level = "debug", skip(timing), fields(policy = ?timing.remainder))]
pub fn partition_with(
    total_frames: u64,
    fps: Fps,
    content_count: usize,
    timing: &TimingConfig,
) -> ShortformResult<Vec<SceneWindow>> {
    if content_count == 0 {
        return Err(ShortformError::configuration(
            "at least one content point is required",
        ));
    }
    if timing.intro_secs == 0 || timing.outro_secs == 0 {
        return Err(ShortformError::configuration(
            "intro and outro must last at least one second",
        ));
    }

    let intro = fps.frames_for_whole_secs(timing.intro_secs);
    let outro = fps.frames_for_whole_secs(timing.outro_secs);
    if total_frames <= intro + outro {
        return Err(ShortformError::configuration(format!(
            "{total_frames} frames leave no room for content after a {intro}-frame intro and {outro}-frame outro"
        )));
    }

    let content_frames = total_frames - intro - outro;
    let count = content_count as u64;
    let per_item = content_frames / count;
    if per_item == 0 {
        return Err(ShortformError::configuration(format!(
            "{content_count} content points do not fit in {content_frames} frames"
        )));
    }
    let remainder = content_frames % count;

    let mut windows = Vec::with_capacity(content_count + 2);
    windows.push(SceneWindow {
        start_frame: 0,
        duration_frames: intro,
        kind: SceneKind::Intro,
        index: 0,
    });

    for i in 0..content_count {
        let last = i + 1 == content_count;
        let extra = match timing.remainder {
            RemainderPolicy::Redistribute if last => remainder,
            _ => 0,
        };
        windows.push(SceneWindow {
            start_frame: intro + (i as u64) * per_item,
            duration_frames: per_item + extra,
            kind: SceneKind::Content,
            index: i,
        });
    }

    let outro_start = match timing.remainder {
        RemainderPolicy::Redistribute => total_frames - outro,
        RemainderPolicy::Truncate => intro + count * per_item,
    };
    windows.push(SceneWindow {
        start_frame: outro_start,
        duration_frames: outro,
        kind: SceneKind::Outro,
        index: 0,
    });

    tracing::debug!(per_item, remainder, windows = windows.len(), "partitioned timeline");
    Ok(windows)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/partition.rs"]
mod tests;
