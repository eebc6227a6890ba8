use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::{core::Fps, error::ShortformResult},
    pipeline::{
        MediaMuxer, NarrationSynthesizer, Publisher, ScriptGenerator, VisualGenerator,
        mux::ensure_parent_dir,
        publish::{PublishRequest, Published, describe, tags},
        script::Script,
    },
    theme::palette::Theme,
    timeline::{compose::Timeline, partition::TimingConfig},
};

/// File layout for one job under a base directory.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct JobPaths {
    /// Script JSON.
    pub script: PathBuf,
    /// Narration audio.
    pub audio: PathBuf,
    /// Visual track from the visual generator.
    pub video: PathBuf,
    /// Muxed output, used when a muxer is configured.
    pub final_video: PathBuf,
}

impl JobPaths {
    /// `data/script-<theme>-<stamp>.json`, `data/audio/...`, `data/videos/...` under `base`.
    pub fn new(base: &Path, theme: Theme, stamp: &str) -> Self {
        let data = base.join("data");
        Self {
            script: data.join(format!("script-{theme}-{stamp}.json")),
            audio: data.join("audio").join(format!("audio-{theme}-{stamp}.mp3")),
            video: data.join("videos").join(format!("video-{theme}-{stamp}.mp4")),
            final_video: data.join("videos").join(format!("final-{theme}-{stamp}.mp4")),
        }
    }

    /// Create every parent directory.
    pub fn ensure_dirs(&self) -> ShortformResult<()> {
        for p in [&self.script, &self.audio, &self.video, &self.final_video] {
            ensure_parent_dir(p)?;
        }
        Ok(())
    }
}

/// What a successful job produced.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct JobOutcome {
    /// Generated script.
    pub script: Script,
    /// Narration length in seconds.
    pub narration_secs: f64,
    /// Frames laid out by the compositor.
    pub total_frames: u64,
    /// Uploaded media file.
    pub media: PathBuf,
    /// Remote id and URL.
    pub published: Published,
}

/// Sequential video job: script, narration, layout, visuals, optional mux, publish.
pub struct Pipeline {
    scripts: Box<dyn ScriptGenerator + Send + Sync>,
    narrator: Box<dyn NarrationSynthesizer + Send + Sync>,
    visuals: Box<dyn VisualGenerator + Send + Sync>,
    muxer: Option<Box<dyn MediaMuxer + Send + Sync>>,
    publisher: Box<dyn Publisher + Send + Sync>,
    fps: Fps,
    timing: TimingConfig,
    channel: String,
}

impl Pipeline {
    /// Pipeline without a muxer (the visual generator already embeds narration audio).
    pub fn new(
        scripts: impl ScriptGenerator + Send + Sync + 'static,
        narrator: impl NarrationSynthesizer + Send + Sync + 'static,
        visuals: impl VisualGenerator + Send + Sync + 'static,
        publisher: impl Publisher + Send + Sync + 'static,
    ) -> Self {
        Self {
            scripts: Box::new(scripts),
            narrator: Box::new(narrator),
            visuals: Box::new(visuals),
            muxer: None,
            publisher: Box::new(publisher),
            fps: Fps::DEFAULT,
            timing: TimingConfig::default(),
            channel: "Shortform".to_owned(),
        }
    }

    /// Mux the visual track with narration before publishing.
    pub fn with_muxer(mut self, muxer: impl MediaMuxer + Send + Sync + 'static) -> Self {
        self.muxer = Some(Box::new(muxer));
        self
    }

    /// Override frame rate and scene timings.
    pub fn with_timing(mut self, fps: Fps, timing: TimingConfig) -> Self {
        self.fps = fps;
        self.timing = timing;
        self
    }

    /// Channel name used in descriptions and tags.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Run one job. The first failing stage aborts the job; its error is logged and returned.
    #[tracing::instrument(skip_all, fields(theme = %theme))]
    pub fn run(&self, theme: Theme, paths: &JobPaths) -> ShortformResult<JobOutcome> {
        let res = self.run_inner(theme, paths);
        if let Err(e) = &res {
            tracing::error!(error = %e, "video job failed");
        }
        res
    }

    fn run_inner(&self, theme: Theme, paths: &JobPaths) -> ShortformResult<JobOutcome> {
        let steps = if self.muxer.is_some() { 5 } else { 4 };
        paths.ensure_dirs()?;

        tracing::info!(step = 1, of = steps, "generating script");
        let script = self.scripts.generate(theme)?;
        script.validate()?;
        let json = serde_json::to_vec_pretty(&script)?;
        std::fs::write(&paths.script, json)
            .with_context(|| format!("write script '{}'", paths.script.display()))?;

        tracing::info!(step = 2, of = steps, "synthesizing narration");
        let narration = self.narrator.synthesize(&script.narration_text, &paths.audio)?;
        tracing::info!(duration_secs = narration.duration_secs, "narration ready");

        tracing::info!(step = 3, of = steps, "rendering visuals");
        let request = script.to_request(narration.duration_secs, self.fps);
        let timeline = Timeline::build(&request, &self.timing)?;
        let video = self.visuals.generate(&script, &timeline, &paths.video)?;

        let media = match &self.muxer {
            Some(muxer) => {
                tracing::info!(step = 4, of = steps, "muxing narration into video");
                muxer.mux(&video, &narration.path, &paths.final_video)?
            }
            None => video,
        };

        tracing::info!(step = steps, of = steps, "publishing");
        let published = self.publisher.publish(&PublishRequest {
            media_path: media.clone(),
            title: script.title.clone(),
            description: describe(&script, &self.channel),
            tags: tags(theme, &self.channel),
        })?;
        tracing::info!(url = %published.url, "video job complete");

        Ok(JobOutcome {
            script,
            narration_secs: narration.duration_secs,
            total_frames: timeline.total_frames(),
            media,
            published,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/job.rs"]
mod tests;
