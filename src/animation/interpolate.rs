use crate::{
    animation::ease::Ease,
    foundation::error::{ShortformError, ShortformResult},
};

/// Behavior of a curve outside its first/last control point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the boundary value.
    Clamp,
    /// Continue the slope of the boundary segment.
    #[default]
    Extend,
}

/// Per-end extrapolation and easing for a curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOptions {
    /// Behavior before the first control point.
    #[serde(default)]
    pub extrapolate_left: Extrapolate,
    /// Behavior after the last control point.
    #[serde(default)]
    pub extrapolate_right: Extrapolate,
    /// Easing applied inside each segment.
    #[serde(default)]
    pub ease: Ease,
}

impl InterpolateOptions {
    /// Clamp on both ends.
    pub fn clamped() -> Self {
        Self {
            extrapolate_left: Extrapolate::Clamp,
            extrapolate_right: Extrapolate::Clamp,
            ease: Ease::Linear,
        }
    }

    /// Extend on the left, clamp on the right.
    pub fn clamp_right() -> Self {
        Self {
            extrapolate_right: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    /// Same options with a different easing.
    pub fn with_ease(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }
}

/// Validated piecewise-linear curve over a window's frames.
///
/// Control points are strictly increasing frame positions paired one-to-one with output
/// values. Sampling is pure: the curve holds no state besides its points.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InterpolationCurve {
    points: Vec<f64>,
    values: Vec<f64>,
    options: InterpolateOptions,
}

impl InterpolationCurve {
    /// Validate and build a curve.
    pub fn new(
        control_points: impl Into<Vec<f64>>,
        output_range: impl Into<Vec<f64>>,
        options: InterpolateOptions,
    ) -> ShortformResult<Self> {
        let points = control_points.into();
        let values = output_range.into();

        if points.len() != values.len() {
            return Err(ShortformError::invalid_curve(format!(
                "control points ({}) and output range ({}) must have the same length",
                points.len(),
                values.len()
            )));
        }
        if points.len() < 2 {
            return Err(ShortformError::invalid_curve(
                "curve needs at least two control points",
            ));
        }
        if let Some(bad) = points.iter().chain(values.iter()).find(|v| !v.is_finite()) {
            return Err(ShortformError::invalid_curve(format!(
                "curve values must be finite, got {bad}"
            )));
        }
        if let Some(w) = points.windows(2).find(|w| w[0] >= w[1]) {
            return Err(ShortformError::invalid_curve(format!(
                "control points must be strictly increasing ({} >= {})",
                w[0], w[1]
            )));
        }

        Ok(Self {
            points,
            values,
            options,
        })
    }

    /// Frame positions of the control points.
    pub fn control_points(&self) -> &[f64] {
        &self.points
    }

    /// Output values paired with [`Self::control_points`].
    pub fn output_range(&self) -> &[f64] {
        &self.values
    }

    /// Extrapolation and easing options.
    pub fn options(&self) -> InterpolateOptions {
        self.options
    }

    /// Evaluate the curve at `frame`.
    ///
    /// Control points are hit exactly. A NaN `frame` yields NaN.
    pub fn sample(&self, frame: f64) -> f64 {
        if frame.is_nan() {
            return f64::NAN;
        }
        let n = self.points.len();
        let first = self.points[0];
        let last = self.points[n - 1];

        if frame < first {
            return match self.options.extrapolate_left {
                Extrapolate::Clamp => self.values[0],
                Extrapolate::Extend => self.extend_segment(0, frame),
            };
        }
        if frame > last {
            return match self.options.extrapolate_right {
                Extrapolate::Clamp => self.values[n - 1],
                Extrapolate::Extend => self.extend_segment(n - 2, frame),
            };
        }
        if frame == last {
            return self.values[n - 1];
        }

        // first <= frame < last, so idx is in 1..n.
        let idx = self.points.partition_point(|p| *p <= frame);
        let (i, j) = (idx - 1, idx);
        let t = (frame - self.points[i]) / (self.points[j] - self.points[i]);
        let te = self.options.ease.apply(t);
        self.values[i] + (self.values[j] - self.values[i]) * te
    }

    // Linear continuation of segment `i`, ignoring easing.
    fn extend_segment(&self, i: usize, frame: f64) -> f64 {
        let (p0, p1) = (self.points[i], self.points[i + 1]);
        let (v0, v1) = (self.values[i], self.values[i + 1]);
        let anchor = if frame < p0 { (p0, v0) } else { (p1, v1) };
        anchor.1 + (frame - anchor.0) * (v1 - v0) / (p1 - p0)
    }
}

/// One-shot curve evaluation: validate `control_points`/`output_range` and sample at `frame`.
pub fn interpolate(
    frame: f64,
    control_points: &[f64],
    output_range: &[f64],
    options: InterpolateOptions,
) -> ShortformResult<f64> {
    let curve = InterpolationCurve::new(control_points, output_range, options)?;
    Ok(curve.sample(frame))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
