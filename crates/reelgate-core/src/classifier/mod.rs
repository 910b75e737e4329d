//! # Attribute Classifier
//!
//! Turns a free-form release name into a [`QualityProfile`] by scanning the
//! five rank tables against the lower-cased name.

use tracing::debug;

use crate::tables::RankTables;
use crate::types::{AudioFormat, Detection, QualityProfile, SourceTier};

/// Bonus added to the total score for 10-bit encodes.
pub const DEFAULT_BIT_DEPTH_BONUS: u32 = 5;

/// Rank assumed for disc rips that do not name their audio (standard DD5.1).
pub const ASSUMED_DISC_AUDIO_RANK: u32 = 80;
/// Rank assumed for web downloads that do not name their audio (DD+).
pub const ASSUMED_WEB_DL_AUDIO_RANK: u32 = 85;
/// Rank assumed for WEBRips that do not name their audio (stereo).
pub const ASSUMED_WEBRIP_AUDIO_RANK: u32 = 45;

/// Returns `true` if the lower-cased name signals 10-bit encoding.
#[must_use]
pub fn is_10bit(name_lower: &str) -> bool {
    name_lower.contains("10bit") || name_lower.contains("10-bit")
}

/// Audio assumed for a source tier when the release name states none.
///
/// Release names often omit unremarkable audio; without this a disc rip
/// with unstated audio would lose to a cam rip that names its AAC track.
#[must_use]
pub fn assumed_audio(source: SourceTier) -> Option<Detection<AudioFormat>> {
    match source {
        s if s.is_disc() => Some(Detection::assumed(
            AudioFormat::DolbyDigital,
            "assumed-dd5.1",
            ASSUMED_DISC_AUDIO_RANK,
        )),
        s if s.is_web_download() => Some(Detection::assumed(
            AudioFormat::EnhancedAc3,
            "assumed-ddp",
            ASSUMED_WEB_DL_AUDIO_RANK,
        )),
        SourceTier::WebRip => Some(Detection::assumed(
            AudioFormat::Stereo,
            "assumed-stereo",
            ASSUMED_WEBRIP_AUDIO_RANK,
        )),
        _ => None,
    }
}

/// Substring-scan classifier over a set of rank tables.
#[derive(Debug, Clone)]
pub struct Classifier {
    tables: RankTables,
    bit_depth_bonus: u32,
    infer_audio: bool,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(RankTables::default(), DEFAULT_BIT_DEPTH_BONUS, true)
    }
}

impl Classifier {
    /// Creates a classifier. `tables` must already be validated and lower-cased.
    #[must_use]
    pub fn new(tables: RankTables, bit_depth_bonus: u32, infer_audio: bool) -> Self {
        Self {
            tables,
            bit_depth_bonus,
            infer_audio,
        }
    }

    #[must_use]
    pub fn tables(&self) -> &RankTables {
        &self.tables
    }

    /// Classifies a release name. Never fails: unrecognised input yields an
    /// empty profile.
    #[must_use]
    pub fn classify(&self, name: &str) -> QualityProfile {
        let lower = name.to_lowercase();
        let is_10bit = is_10bit(&lower);

        let mut profile = QualityProfile {
            source: self.tables.source.best_match(&lower),
            video_codec: self.tables.video_codec.best_match(&lower),
            audio: self.tables.audio.best_match(&lower),
            resolution: self.tables.resolution.best_match(&lower),
            dynamic_range: self.tables.dynamic_range.best_match(&lower),
            is_10bit,
            bit_depth_bonus: if is_10bit { self.bit_depth_bonus } else { 0 },
        };

        if self.infer_audio && profile.audio_rank() == 0 {
            if let Some(source) = &profile.source {
                profile.audio = assumed_audio(source.kind);
            }
        }

        debug!(
            name,
            summary = %profile.summary(),
            score = profile.total_score(),
            "classified release name"
        );

        profile
    }
}
