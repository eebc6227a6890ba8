use rayon::prelude::*;

use crate::{
    animation::interpolate::{InterpolateOptions, InterpolationCurve},
    foundation::{
        core::{Canvas, Fps, FrameIndex, FrameRange},
        error::{ShortformError, ShortformResult},
    },
    theme::palette::{ColorPalette, Theme},
    timeline::{
        partition::{SceneKind, SceneWindow, TimingConfig, partition_with},
        request::TimelineRequest,
    },
};

const TITLE_FADE_FRAMES: f64 = 20.0;
const TITLE_START_SCALE: f64 = 0.8;
const ITEM_FADE_FRAMES: f64 = 15.0;
const ITEM_SLIDE_FRAMES: f64 = 20.0;
const ITEM_SLIDE_PX: f64 = 50.0;

/// Draw parameters for one frame, consumed by the rendering collaborator.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameParams {
    /// Absolute frame.
    pub frame: FrameIndex,
    /// Scene the frame belongs to.
    pub kind: SceneKind,
    /// Window index (content point index for content scenes).
    pub index: usize,
    /// Frame offset inside the window.
    pub local_frame: u64,
    /// Layer opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale about the canvas centre.
    pub scale: f64,
    /// Vertical offset in pixels (positive is down).
    pub translate_y: f64,
    /// Active progress indicator, content scenes only.
    pub active_indicator: Option<usize>,
    /// Number of progress indicators (one per content point).
    pub indicator_count: usize,
}

impl FrameParams {
    /// Layer transform: scale about the canvas centre, then shift vertically.
    pub fn transform(&self, canvas: Canvas) -> kurbo::Affine {
        let c = canvas.center().to_vec2();
        kurbo::Affine::translate((0.0, self.translate_y))
            * kurbo::Affine::translate(c)
            * kurbo::Affine::scale(self.scale)
            * kurbo::Affine::translate(-c)
    }

    /// Active/inactive flag for each progress indicator, in content order.
    pub fn indicator_states(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.indicator_count).map(|i| self.active_indicator == Some(i))
    }
}

#[derive(Clone, Debug)]
struct IntroCurves {
    opacity: InterpolationCurve,
    scale: InterpolationCurve,
}

#[derive(Clone, Debug)]
struct ContentCurves {
    opacity: InterpolationCurve,
    translate_y: InterpolationCurve,
}

/// Immutable scene layout for one video plus the curves that animate it.
///
/// Built once per job; [`Timeline::draw_params`] is pure and may be called from any
/// number of threads.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Timeline {
    fps: Fps,
    total_frames: u64,
    title: String,
    subtitle: String,
    content_points: Vec<String>,
    theme: Theme,
    palette: ColorPalette,
    windows: Vec<SceneWindow>,
    #[serde(skip)]
    intro: IntroCurves,
    #[serde(skip)]
    content: Vec<ContentCurves>,
}

impl Timeline {
    /// Partition the request and pre-build every window's curves. Fails without a partial
    /// result if any step is invalid.
    #[tracing::instrument(
        skip(request, timing),
        fields(theme = %request.theme, points = request.content_points.len())
    )]
    pub fn build(request: &TimelineRequest, timing: &TimingConfig) -> ShortformResult<Self> {
        request.validate()?;
        let total_frames = request.total_frames();
        let windows = partition_with(
            total_frames,
            request.fps,
            request.content_points.len(),
            timing,
        )?;

        let intro_window = windows
            .first()
            .ok_or_else(|| ShortformError::configuration("partition produced no intro"))?;
        let intro = intro_curves(intro_window.duration_frames)?;
        let content = windows
            .iter()
            .filter(|w| w.kind == SceneKind::Content)
            .map(|w| content_curves(w.duration_frames))
            .collect::<ShortformResult<Vec<_>>>()?;

        tracing::info!(total_frames, windows = windows.len(), "timeline built");
        Ok(Self {
            fps: request.fps,
            total_frames,
            title: request.title.clone(),
            subtitle: request.subtitle.clone(),
            content_points: request.content_points.clone(),
            theme: request.theme,
            palette: request.theme.palette(),
            windows,
            intro,
            content,
        })
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Frames covered by the narration, `ceil(secs * fps)`.
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Intro headline.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Intro sub-headline.
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    /// Content points in scene order.
    pub fn content_points(&self) -> &[String] {
        &self.content_points
    }

    /// Selected theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Resolved palette.
    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Scene windows in document order: intro, content..., outro.
    pub fn windows(&self) -> &[SceneWindow] {
        &self.windows
    }

    /// Window containing `frame`, if any.
    pub fn window_at(&self, frame: FrameIndex) -> Option<&SceneWindow> {
        let idx = self.windows.partition_point(|w| w.start_frame <= frame.0);
        let w = self.windows.get(idx.checked_sub(1)?)?;
        w.contains(frame).then_some(w)
    }

    /// Draw parameters for `frame`.
    pub fn draw_params(&self, frame: FrameIndex) -> ShortformResult<FrameParams> {
        if frame.0 >= self.total_frames {
            return Err(ShortformError::configuration(format!(
                "frame {} is outside the {}-frame timeline",
                frame.0, self.total_frames
            )));
        }
        let w = self.window_at(frame).ok_or_else(|| {
            ShortformError::configuration(format!("frame {} falls in no scene window", frame.0))
        })?;
        let local = frame.0 - w.start_frame;
        let t = local as f64;

        let (opacity, scale, translate_y, active_indicator) = match w.kind {
            SceneKind::Intro => (
                self.intro.opacity.sample(t),
                self.intro.scale.sample(t),
                0.0,
                None,
            ),
            SceneKind::Content => {
                let curves = self.content.get(w.index).ok_or_else(|| {
                    ShortformError::configuration(format!("no curves for content {}", w.index))
                })?;
                (
                    curves.opacity.sample(t),
                    1.0,
                    curves.translate_y.sample(t),
                    Some(w.index),
                )
            }
            SceneKind::Outro => (1.0, 1.0, 0.0, None),
        };

        Ok(FrameParams {
            frame,
            kind: w.kind,
            index: w.index,
            local_frame: local,
            opacity: opacity.clamp(0.0, 1.0),
            scale,
            translate_y,
            active_indicator,
            indicator_count: self.content_points.len(),
        })
    }

    /// Evaluate every frame in `range` on a dedicated rayon pool. Results are in frame order.
    #[tracing::instrument(skip(self))]
    pub fn draw_params_range(
        &self,
        range: FrameRange,
        threads: Option<usize>,
    ) -> ShortformResult<Vec<FrameParams>> {
        let pool = build_thread_pool(threads)?;
        pool.install(|| {
            (range.start.0..range.end.0)
                .into_par_iter()
                .map(|f| self.draw_params(FrameIndex(f)))
                .collect::<ShortformResult<Vec<_>>>()
        })
    }
}

fn intro_curves(duration: u64) -> ShortformResult<IntroCurves> {
    let d = duration as f64;
    Ok(IntroCurves {
        opacity: InterpolationCurve::new(
            [0.0, TITLE_FADE_FRAMES, d - TITLE_FADE_FRAMES, d],
            [0.0, 1.0, 1.0, 0.0],
            InterpolateOptions::clamp_right(),
        )?,
        scale: InterpolationCurve::new(
            [0.0, TITLE_FADE_FRAMES],
            [TITLE_START_SCALE, 1.0],
            InterpolateOptions::clamp_right(),
        )?,
    })
}

fn content_curves(duration: u64) -> ShortformResult<ContentCurves> {
    let d = duration as f64;
    Ok(ContentCurves {
        opacity: InterpolationCurve::new(
            [0.0, ITEM_FADE_FRAMES, d - ITEM_FADE_FRAMES, d],
            [0.0, 1.0, 1.0, 0.0],
            InterpolateOptions::clamped(),
        )?,
        translate_y: InterpolationCurve::new(
            [0.0, ITEM_SLIDE_FRAMES],
            [ITEM_SLIDE_PX, 0.0],
            InterpolateOptions::clamped(),
        )?,
    })
}

fn build_thread_pool(threads: Option<usize>) -> ShortformResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ShortformError::configuration(
            "sampling 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ShortformError::configuration(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/compose.rs"]
mod tests;
