use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{ShortformError, ShortformResult};

/// Bitrate assumed for synthesized MP3 narration.
pub const DEFAULT_MP3_BITRATE_BPS: u32 = 128_000;

/// Narration audio produced by the speech collaborator.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Narration {
    /// Audio file.
    pub path: PathBuf,
    /// Length in seconds.
    pub duration_secs: f64,
}

impl Narration {
    /// Describe an MP3 already on disk, estimating its length from the file size.
    pub fn from_mp3_file(path: &Path, bitrate_bps: u32) -> ShortformResult<Self> {
        let meta = std::fs::metadata(path)
            .with_context(|| format!("stat narration audio '{}'", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            duration_secs: estimate_mp3_duration_secs(meta.len(), bitrate_bps)?,
        })
    }
}

/// Constant-bitrate length estimate, rounded up to whole seconds.
pub fn estimate_mp3_duration_secs(byte_len: u64, bitrate_bps: u32) -> ShortformResult<f64> {
    if bitrate_bps == 0 {
        return Err(ShortformError::validation("bitrate must be > 0"));
    }
    if byte_len == 0 {
        return Err(ShortformError::validation("narration audio is empty"));
    }
    let secs = (byte_len as f64 * 8.0) / f64::from(bitrate_bps);
    Ok(secs.ceil())
}
