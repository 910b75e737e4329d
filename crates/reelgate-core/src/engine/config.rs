use serde::{Deserialize, Serialize};

use crate::classifier::DEFAULT_BIT_DEPTH_BONUS;
use crate::error::Result;
use crate::tables::RankTables;

/// Configuration for a [`QualityEngine`](super::QualityEngine).
///
/// The default reproduces the reference scoring exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Rank tables used by the classifier.
    pub tables: RankTables,
    /// Score bonus for 10-bit encodes.
    pub bit_depth_bonus: u32,
    /// Whether to assume audio quality from the source tier when none is named.
    pub infer_audio: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tables: RankTables::default(),
            bit_depth_bonus: DEFAULT_BIT_DEPTH_BONUS,
            infer_audio: true,
        }
    }
}

impl EngineConfig {
    /// Create a new engine configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from JSON. Omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ReelgateError::ConfigParse` if the document is not valid JSON
    /// for this structure.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the rank tables.
    pub fn with_tables(mut self, tables: RankTables) -> Self {
        self.tables = tables;
        self
    }

    /// Set the 10-bit bonus.
    pub fn with_bit_depth_bonus(mut self, bonus: u32) -> Self {
        self.bit_depth_bonus = bonus;
        self
    }

    /// Enable or disable audio inference.
    pub fn with_audio_inference(mut self, enabled: bool) -> Self {
        self.infer_audio = enabled;
        self
    }
}
