use std::fmt;

use serde::{Deserialize, Serialize};

use super::tier::{AudioFormat, DynamicRange, Resolution, SourceTier, VideoCodec};

/// How a dimension value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// A rank-table token was found in the release name.
    Matched,
    /// No token was found; the value was inferred from another dimension.
    Assumed,
}

/// The winning rank-table entry for one quality dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection<T> {
    /// Tier the token belongs to.
    pub kind: T,
    /// Lower-cased token that matched, or an `assumed-*` label.
    pub token: String,
    /// Rank contributed to the total score.
    pub rank: u32,
    pub origin: Origin,
}

impl<T> Detection<T> {
    #[must_use]
    pub fn matched(kind: T, token: impl Into<String>, rank: u32) -> Self {
        Self {
            kind,
            token: token.into(),
            rank,
            origin: Origin::Matched,
        }
    }

    #[must_use]
    pub fn assumed(kind: T, token: impl Into<String>, rank: u32) -> Self {
        Self {
            kind,
            token: token.into(),
            rank,
            origin: Origin::Assumed,
        }
    }
}

fn rank_of<T>(detection: &Option<Detection<T>>) -> u32 {
    detection.as_ref().map_or(0, |d| d.rank)
}

fn token_of<T>(detection: &Option<Detection<T>>) -> Option<&str> {
    detection.as_ref().map(|d| d.token.as_str())
}

/// Structured quality attributes classified from one release name.
///
/// Absent dimensions contribute a rank of zero to [`QualityProfile::total_score`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityProfile {
    pub source: Option<Detection<SourceTier>>,
    pub video_codec: Option<Detection<VideoCodec>>,
    pub audio: Option<Detection<AudioFormat>>,
    pub resolution: Option<Detection<Resolution>>,
    pub dynamic_range: Option<Detection<DynamicRange>>,
    /// The name signals 10-bit encoding.
    pub is_10bit: bool,
    /// Bonus awarded for 10-bit encoding, zero when `is_10bit` is false.
    pub bit_depth_bonus: u32,
}

impl QualityProfile {
    #[must_use]
    pub fn source_rank(&self) -> u32 {
        rank_of(&self.source)
    }

    #[must_use]
    pub fn video_codec_rank(&self) -> u32 {
        rank_of(&self.video_codec)
    }

    #[must_use]
    pub fn audio_rank(&self) -> u32 {
        rank_of(&self.audio)
    }

    #[must_use]
    pub fn resolution_rank(&self) -> u32 {
        rank_of(&self.resolution)
    }

    #[must_use]
    pub fn dynamic_range_rank(&self) -> u32 {
        rank_of(&self.dynamic_range)
    }

    /// Sum of the five dimension ranks plus the bit-depth bonus.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.source_rank()
            + self.video_codec_rank()
            + self.audio_rank()
            + self.resolution_rank()
            + self.dynamic_range_rank()
            + self.bit_depth_bonus
    }

    /// Returns `true` if no dimension was detected or assumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_none()
            && self.video_codec.is_none()
            && self.audio.is_none()
            && self.resolution.is_none()
            && self.dynamic_range.is_none()
            && !self.is_10bit
    }

    /// Operator-facing summary: source (or `unknown`), resolution, codec and audio tokens.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = vec![token_of(&self.source).unwrap_or("unknown")];
        parts.extend(token_of(&self.resolution));
        parts.extend(token_of(&self.video_codec));
        parts.extend(token_of(&self.audio));
        parts.join(" ")
    }
}

impl fmt::Display for QualityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "score {} (source:{}, codec:{}, audio:{}, res:{}, hdr:{}",
            self.total_score(),
            self.source_rank(),
            self.video_codec_rank(),
            self.audio_rank(),
            self.resolution_rank(),
            self.dynamic_range_rank(),
        )?;
        if self.is_10bit {
            write!(f, ", 10bit:+{}", self.bit_depth_bonus)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QualityProfile {
        QualityProfile {
            source: Some(Detection::matched(SourceTier::BluRay, "bluray", 100)),
            video_codec: Some(Detection::matched(VideoCodec::Avc, "x264", 15)),
            audio: Some(Detection::assumed(AudioFormat::DolbyDigital, "assumed-dd5.1", 80)),
            resolution: Some(Detection::matched(Resolution::Fhd1080, "1080p", 70)),
            dynamic_range: None,
            is_10bit: true,
            bit_depth_bonus: 5,
        }
    }

    #[test]
    fn empty_profile_scores_zero() {
        let profile = QualityProfile::default();
        assert!(profile.is_empty());
        assert_eq!(profile.total_score(), 0);
        assert_eq!(profile.summary(), "unknown");
    }

    #[test]
    fn total_score_sums_dimensions_and_bonus() {
        assert_eq!(sample().total_score(), 100 + 15 + 80 + 70 + 5);
    }

    #[test]
    fn summary_lists_detected_tokens() {
        assert_eq!(sample().summary(), "bluray 1080p x264 assumed-dd5.1");
    }

    #[test]
    fn assumed_detection_is_flagged() {
        let profile = sample();
        assert_eq!(profile.audio.as_ref().unwrap().origin, Origin::Assumed);
        assert_eq!(profile.source.as_ref().unwrap().origin, Origin::Matched);
    }

    #[test]
    fn display_includes_breakdown() {
        let text = sample().to_string();
        assert!(text.starts_with("score 270"));
        assert!(text.contains("audio:80"));
        assert!(text.contains("10bit:+5"));
    }
}
