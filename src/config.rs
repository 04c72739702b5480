use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};

use crate::rates::RateConvention;

/// Holding periods compared in every investment analysis, in months.
pub const DEFAULT_TIMELINE_HORIZONS: [u32; 6] = [6, 12, 24, 36, 60, 120];

/// Engine-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// How annual rates become monthly rates.
    pub rate_convention: RateConvention,
    /// Candidate resale months for the ROI timeline.
    pub timeline_horizons: Vec<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rate_convention: RateConvention::default(),
            timeline_horizons: DEFAULT_TIMELINE_HORIZONS.to_vec(),
        }
    }
}

impl EngineConfig {
    /// Loads settings from JSON. Missing fields fall back to the defaults.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: EngineConfig = serde_json::from_str(json).context("Invalid engine configuration")?;

        ensure!(
            config.timeline_horizons.iter().all(|months| *months > 0),
            "Timeline horizons must be positive month counts, got {:?}",
            config.timeline_horizons
        );

        Ok(config)
    }
}
