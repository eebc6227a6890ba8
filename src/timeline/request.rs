use crate::{
    foundation::{
        core::{Canvas, Fps},
        error::{ShortformError, ShortformResult},
    },
    theme::palette::Theme,
    timeline::partition::TimingConfig,
};

/// Inputs for laying out one video. Built once per job from script and narration metadata.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineRequest {
    /// Narration length in seconds.
    pub total_duration_secs: f64,
    /// Output frame rate.
    #[serde(default)]
    pub fps: Fps,
    /// Intro headline.
    pub title: String,
    /// Intro sub-headline.
    #[serde(default)]
    pub subtitle: String,
    /// Ordered content points, one scene each.
    pub content_points: Vec<String>,
    /// Palette selector.
    pub theme: Theme,
}

impl TimelineRequest {
    /// Check the request is laid out-able before partitioning.
    pub fn validate(&self) -> ShortformResult<()> {
        if !self.total_duration_secs.is_finite() || self.total_duration_secs <= 0.0 {
            return Err(ShortformError::configuration(format!(
                "total_duration_secs must be a positive number, got {}",
                self.total_duration_secs
            )));
        }
        if self.content_points.is_empty() {
            return Err(ShortformError::configuration(
                "at least one content point is required",
            ));
        }
        Ok(())
    }

    /// `ceil(total_duration_secs * fps)`.
    pub fn total_frames(&self) -> u64 {
        self.fps.frames_for_secs_ceil(self.total_duration_secs)
    }
}

/// On-disk job description: a request plus layout knobs, all but the request defaulted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JobConfig {
    /// What to lay out.
    pub request: TimelineRequest,
    /// Scene timings.
    #[serde(default)]
    pub timing: TimingConfig,
    /// Output canvas.
    #[serde(default)]
    pub canvas: Canvas,
}

impl JobConfig {
    /// Parse a job from JSON text.
    pub fn from_json_str(s: &str) -> ShortformResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.request.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/request.rs"]
mod tests;
