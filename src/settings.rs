use crate::foundation::error::{ChaseError, ChaseResult};
use crate::foundation::math::Rng64;
use std::path::Path;

/// Host-side knobs for a viewing or capture session.
///
/// Clip length, capture rate and the logical scene size are fixed and deliberately absent.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerSettings {
    /// Width of the container the canvas is laid out in.
    pub container_width: f64,
    /// Device pixel ratio of the display.
    pub device_pixel_ratio: f64,
    /// Seed for entity factories. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Optional clear color applied before each frame (RGBA8, straight alpha).
    pub clear_rgba: Option<[u8; 4]>,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            container_width: 1280.0,
            device_pixel_ratio: 1.0,
            seed: None,
            clear_rgba: None,
        }
    }
}

impl ViewerSettings {
    /// Parse and validate settings JSON.
    pub fn from_json_str(s: &str) -> ChaseResult<Self> {
        let settings: Self = serde_json::from_str(s).map_err(|e| ChaseError::serde(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file.
    pub fn from_path(path: &Path) -> ChaseResult<Self> {
        use anyhow::Context as _;

        let s = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Reject values no display could have.
    pub fn validate(&self) -> ChaseResult<()> {
        if !self.container_width.is_finite() || self.container_width <= 0.0 {
            return Err(ChaseError::validation(
                "container_width must be a positive number",
            ));
        }
        if !self.device_pixel_ratio.is_finite() || self.device_pixel_ratio <= 0.0 {
            return Err(ChaseError::validation(
                "device_pixel_ratio must be a positive number",
            ));
        }
        if self.device_pixel_ratio > 8.0 {
            return Err(ChaseError::validation("device_pixel_ratio must be <= 8"));
        }
        Ok(())
    }

    /// Random source for the entity factories.
    pub fn rng(&self) -> Rng64 {
        match self.seed {
            Some(seed) => Rng64::new(seed),
            None => Rng64::from_entropy(),
        }
    }
}
