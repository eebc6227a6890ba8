use crate::{
    foundation::{
        core::Fps,
        error::{ShortformError, ShortformResult},
    },
    theme::palette::Theme,
    timeline::request::TimelineRequest,
};

/// Script produced by the text-generation collaborator.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Script {
    /// Headline, shown on the intro card and used as the upload title.
    pub title: String,
    /// Sub-headline.
    #[serde(default)]
    pub subtitle: String,
    /// Ordered content points.
    pub content: Vec<String>,
    /// Text read by the narrator.
    #[serde(alias = "voiceover_script")]
    pub narration_text: String,
    /// Prompt for a generative video collaborator, when one is used.
    #[serde(default, alias = "veo_prompt", skip_serializing_if = "Option::is_none")]
    pub visual_prompt: Option<String>,
    /// One-paragraph summary used in fact-video descriptions.
    #[serde(default, alias = "content_summary", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Theme the script was generated for.
    #[serde(rename = "type")]
    pub theme: Theme,
}

impl Script {
    /// Reject scripts that cannot be laid out or narrated.
    pub fn validate(&self) -> ShortformResult<()> {
        if self.title.trim().is_empty() {
            return Err(ShortformError::validation("script title must be non-empty"));
        }
        if self.content.is_empty() {
            return Err(ShortformError::validation(
                "script must contain at least one content point",
            ));
        }
        if self.narration_text.trim().is_empty() {
            return Err(ShortformError::validation(
                "script narration text must be non-empty",
            ));
        }
        Ok(())
    }

    /// Timeline request for this script once the narration length is known.
    pub fn to_request(&self, total_duration_secs: f64, fps: Fps) -> TimelineRequest {
        TimelineRequest {
            total_duration_secs,
            fps,
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            content_points: self.content.clone(),
            theme: self.theme,
        }
    }
}

#[derive(serde::Deserialize)]
struct RawScript {
    title: String,
    #[serde(default)]
    subtitle: String,
    content: Vec<String>,
    #[serde(alias = "voiceover_script")]
    narration_text: String,
    #[serde(default, alias = "veo_prompt")]
    visual_prompt: Option<String>,
    #[serde(default, alias = "content_summary")]
    summary: Option<String>,
}

/// Extract the script JSON object from free-form model output.
///
/// Models often wrap the object in prose or markdown fences, so this takes everything from
/// the first `{` to the last `}`. The `theme` is stamped onto the result.
pub fn parse_script_response(text: &str, theme: Theme) -> ShortformResult<Script> {
    let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) else {
        return Err(ShortformError::validation(
            "no JSON object found in model response",
        ));
    };
    if end < start {
        return Err(ShortformError::validation(
            "no JSON object found in model response",
        ));
    }

    let raw: RawScript = serde_json::from_str(&text[start..=end])
        .map_err(|e| ShortformError::validation(format!("malformed script JSON: {e}")))?;
    let script = Script {
        title: raw.title,
        subtitle: raw.subtitle,
        content: raw.content,
        narration_text: raw.narration_text,
        visual_prompt: raw.visual_prompt,
        summary: raw.summary,
        theme,
    };
    script.validate()?;
    Ok(script)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/script.rs"]
mod tests;
