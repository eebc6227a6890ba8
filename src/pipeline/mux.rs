use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::{
    foundation::error::{ShortformError, ShortformResult},
    pipeline::MediaMuxer,
};

const STAGE: &str = "media muxer";

/// [`MediaMuxer`] that spawns the system `ffmpeg`.
///
/// Video is re-encoded to H.264, audio to AAC, and the output is cut to the shorter input.
#[derive(Clone, Debug)]
pub struct FfmpegMuxer {
    /// Overwrite an existing output file.
    pub overwrite: bool,
    /// x264 preset.
    pub preset: String,
    /// x264 constant rate factor.
    pub crf: u8,
    /// AAC bitrate, ffmpeg syntax (`192k`).
    pub audio_bitrate: String,
}

impl Default for FfmpegMuxer {
    fn default() -> Self {
        Self {
            overwrite: true,
            preset: "fast".to_owned(),
            crf: 23,
            audio_bitrate: "192k".to_owned(),
        }
    }
}

impl FfmpegMuxer {
    /// Full `ffmpeg` argument list for one mux.
    pub fn args(&self, video: &Path, audio: &Path, out: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(24);
        let overwrite_flag = if self.overwrite { "-y" } else { "-n" };
        args.push(overwrite_flag.into());
        args.extend(["-loglevel", "error"].map(OsString::from));
        args.push("-i".into());
        args.push(video.into());
        args.push("-i".into());
        args.push(audio.into());
        args.extend(
            [
                "-map", "0:v:0", "-map", "1:a:0", "-c:v", "libx264", "-preset",
            ]
            .map(OsString::from),
        );
        args.push(self.preset.clone().into());
        args.push("-crf".into());
        args.push(self.crf.to_string().into());
        args.extend(["-c:a", "aac", "-b:a"].map(OsString::from));
        args.push(self.audio_bitrate.clone().into());
        args.push("-shortest".into());
        args.push(out.into());
        args
    }
}

impl MediaMuxer for FfmpegMuxer {
    #[tracing::instrument(skip(self))]
    fn mux(&self, video: &Path, audio: &Path, out: &Path) -> ShortformResult<PathBuf> {
        for (what, p) in [("video", video), ("audio", audio)] {
            if !p.is_file() {
                return Err(ShortformError::collaborator(
                    STAGE,
                    format!("{what} file not found: '{}'", p.display()),
                ));
            }
        }
        if !self.overwrite && out.exists() {
            return Err(ShortformError::validation(format!(
                "output file '{}' already exists",
                out.display()
            )));
        }
        ensure_parent_dir(out)?;

        if !is_ffmpeg_on_path() {
            return Err(ShortformError::collaborator(
                STAGE,
                "ffmpeg is required for muxing, but was not found on PATH",
            ));
        }

        let output = Command::new("ffmpeg")
            .args(self.args(video, audio, out))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                ShortformError::collaborator(
                    STAGE,
                    format!("failed to spawn ffmpeg (is it installed and on PATH?): {e}"),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ShortformError::collaborator(
                STAGE,
                format!("ffmpeg exited with {}: {}", output.status, stderr.trim()),
            ));
        }
        if !out.is_file() {
            return Err(ShortformError::collaborator(
                STAGE,
                format!("ffmpeg reported success but '{}' was not created", out.display()),
            ));
        }

        tracing::info!(out = %out.display(), "muxed video and audio");
        Ok(out.to_path_buf())
    }
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> ShortformResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/mux.rs"]
mod tests;
