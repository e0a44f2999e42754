use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_FPS: f32 = 60.0;
pub const DEFAULT_FRAMES: u64 = 120;

/// Playback settings, read from a JSON file and/or the command line.
///
/// Every field is optional so a file can set only what it cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackConfig {
    pub fps: Option<f32>,
    pub frames: Option<u64>,
    pub seed: Option<u64>,
}

impl PlaybackConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::debug!("loaded playback config from {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Fields set in `overrides` win over the ones in `self`.
    pub fn merged(self, overrides: PlaybackConfig) -> Self {
        Self {
            fps: overrides.fps.or(self.fps),
            frames: overrides.frames.or(self.frames),
            seed: overrides.seed.or(self.seed),
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps.unwrap_or(DEFAULT_FPS)
    }

    pub fn frames(&self) -> u64 {
        self.frames.unwrap_or(DEFAULT_FRAMES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = PlaybackConfig::from_json(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.fps(), DEFAULT_FPS);
        assert_eq!(config.frames(), DEFAULT_FRAMES);
    }

    #[test]
    fn cli_values_override_file() {
        let file = PlaybackConfig { fps: Some(30.0), frames: Some(10), seed: Some(1) };
        let cli = PlaybackConfig { fps: None, frames: Some(99), seed: None };
        let merged = file.merged(cli);
        assert_eq!(merged, PlaybackConfig { fps: Some(30.0), frames: Some(99), seed: Some(1) });
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = PlaybackConfig::from_json(r#"{ "fsp": 30 }"#).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PlaybackConfig::load("/nonexistent/playback.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
