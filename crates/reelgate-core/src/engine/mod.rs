//! # Decision Engine
//!
//! Compares two classified releases and decides whether the new one should
//! replace the existing one.
//!
//! Policy, in order:
//! 1. A strictly higher total score replaces.
//! 2. On equal scores with both sizes known, only a strictly smaller file
//!    replaces.
//! 3. On equal scores with either size unknown, the new file replaces.
//! 4. A strictly lower score keeps the existing file and is logged as a warning.

pub mod config;

pub use config::EngineConfig;

use std::cmp::Ordering;
use std::sync::LazyLock;

use tracing::{info, warn};

use crate::classifier::{ASSUMED_WEB_DL_AUDIO_RANK, Classifier};
use crate::error::Result;
use crate::size::{SizeParser, SizeValue};
use crate::types::{QualityProfile, Reason, Verdict};

static DEFAULT_ENGINE: LazyLock<QualityEngine> = LazyLock::new(|| {
    QualityEngine::new(EngineConfig::default()).expect("reference rank tables are valid")
});

/// Stateless comparison engine. Safe to share across threads.
#[derive(Debug, Clone)]
pub struct QualityEngine {
    classifier: Classifier,
    sizes: SizeParser,
}

impl QualityEngine {
    /// Builds an engine from `config`, lower-casing and validating its tables.
    ///
    /// # Errors
    ///
    /// Returns `ReelgateError::EmptyToken` or `ReelgateError::InvalidConfig`
    /// if a rank table contains an empty or duplicate token, or if the
    /// highest possible total score would overflow.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let EngineConfig {
            mut tables,
            bit_depth_bonus,
            infer_audio,
        } = config;
        tables.normalize();
        tables.validate()?;
        let audio_floor = if infer_audio {
            ASSUMED_WEB_DL_AUDIO_RANK
        } else {
            0
        };
        tables.validate_score_ceiling(audio_floor, bit_depth_bonus)?;

        Ok(Self {
            classifier: Classifier::new(tables, bit_depth_bonus, infer_audio),
            sizes: SizeParser::new()?,
        })
    }

    #[must_use]
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Classifies a release name into a [`QualityProfile`].
    #[must_use]
    pub fn classify(&self, name: &str) -> QualityProfile {
        self.classifier.classify(name)
    }

    /// Parses a size string into megabytes; unparsable input is zero.
    #[must_use]
    pub fn parse_size(&self, input: &str) -> SizeValue {
        self.sizes.parse(input)
    }

    /// Compares an existing release against a new candidate.
    #[must_use]
    pub fn compare_quality(
        &self,
        existing_name: &str,
        existing_size: &str,
        new_name: &str,
        new_size: &str,
    ) -> Verdict {
        let existing = self.classify(existing_name);
        let new = self.classify(new_name);
        let existing_mb = self.parse_size(existing_size);
        let new_mb = self.parse_size(new_size);

        info!(
            name = existing_name,
            quality = %existing,
            size = existing_size,
            megabytes = existing_mb.megabytes(),
            "existing release"
        );
        info!(
            name = new_name,
            quality = %new,
            size = new_size,
            megabytes = new_mb.megabytes(),
            "candidate release"
        );

        let verdict = decide(&existing, existing_mb, &new, new_mb);
        if verdict.is_warning() {
            warn!(replace = verdict.replace, "decision: {}", verdict.reason);
        } else {
            info!(replace = verdict.replace, "decision: {}", verdict.reason);
        }
        verdict
    }

    /// Label-gated entry point.
    ///
    /// Differing resolution labels are treated as an intentional variant and
    /// always replace; matching labels defer to [`Self::compare_quality`].
    #[must_use]
    pub fn should_replace_quality(
        &self,
        existing_label: &str,
        existing_name: &str,
        existing_size: &str,
        new_label: &str,
        new_name: &str,
        new_size: &str,
    ) -> Verdict {
        if existing_label != new_label {
            let verdict = Verdict::replace(Reason::DifferentLabel {
                existing_label: existing_label.to_string(),
                new_label: new_label.to_string(),
            });
            info!(existing_label, new_label, "decision: {}", verdict.reason);
            return verdict;
        }

        self.compare_quality(existing_name, existing_size, new_name, new_size)
    }
}

/// Applies the replace/keep policy to two classified releases.
#[must_use]
pub fn decide(
    existing: &QualityProfile,
    existing_size: SizeValue,
    new: &QualityProfile,
    new_size: SizeValue,
) -> Verdict {
    let existing_score = existing.total_score();
    let new_score = new.total_score();

    match new_score.cmp(&existing_score) {
        Ordering::Greater => Verdict::replace(Reason::BetterQuality {
            new_score,
            existing_score,
        }),
        Ordering::Equal if new_size.is_known() && existing_size.is_known() => {
            let new_mb = new_size.megabytes();
            let existing_mb = existing_size.megabytes();
            if new_mb < existing_mb {
                Verdict::replace(Reason::SmallerFile {
                    new_mb,
                    existing_mb,
                })
            } else {
                Verdict::keep(Reason::LargerFile {
                    new_mb,
                    existing_mb,
                })
            }
        }
        Ordering::Equal => Verdict::replace(Reason::SizeUnknown { score: new_score }),
        Ordering::Less => Verdict::keep(Reason::LowerQuality {
            new_score,
            existing_score,
            existing_summary: existing.summary(),
            new_summary: new.summary(),
        }),
    }
}

/// Returns the process-wide engine built from the reference configuration.
#[must_use]
pub fn default_engine() -> &'static QualityEngine {
    &DEFAULT_ENGINE
}

/// Classifies a release name with the reference tables.
#[must_use]
pub fn classify(name: &str) -> QualityProfile {
    default_engine().classify(name)
}

/// Parses a size string into megabytes; unparsable input is zero.
#[must_use]
pub fn parse_size(input: &str) -> SizeValue {
    default_engine().parse_size(input)
}

/// Compares two releases with the reference configuration.
///
/// # Examples
///
/// ```
/// use reelgate_core::compare_quality;
///
/// let verdict = compare_quality(
///     "Movie.2023.1080p.BluRay.DD5.1.mkv",
///     "3.2GB",
///     "Movie.2023.1080p.HDCam.AAC.2.0.mkv",
///     "1.5GB",
/// );
/// assert!(!verdict.replace);
/// ```
#[must_use]
pub fn compare_quality(
    existing_name: &str,
    existing_size: &str,
    new_name: &str,
    new_size: &str,
) -> Verdict {
    default_engine().compare_quality(existing_name, existing_size, new_name, new_size)
}

/// Label-gated comparison with the reference configuration.
#[must_use]
pub fn should_replace_quality(
    existing_label: &str,
    existing_name: &str,
    existing_size: &str,
    new_label: &str,
    new_name: &str,
    new_size: &str,
) -> Verdict {
    default_engine().should_replace_quality(
        existing_label,
        existing_name,
        existing_size,
        new_label,
        new_name,
        new_size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReelgateError;
    use crate::tables::{RankTable, RankTables};
    use crate::types::VideoCodec;

    fn engine() -> QualityEngine {
        QualityEngine::new(EngineConfig::default()).unwrap()
    }

    fn mb(value: f64) -> SizeValue {
        SizeValue::from_megabytes(value)
    }

    #[test]
    fn higher_score_replaces_regardless_of_size() {
        let low = engine().classify("Movie.720p.HDTV");
        let high = engine().classify("Movie.1080p.HDTV");
        let verdict = decide(&low, mb(100.0), &high, mb(9000.0));
        assert!(verdict.replace);
        assert!(matches!(verdict.reason, Reason::BetterQuality { .. }));
    }

    #[test]
    fn equal_scores_prefer_strictly_smaller_file() {
        let p = engine().classify("Movie.1080p.HDTV");
        assert!(matches!(
            decide(&p, mb(2000.0), &p, mb(1500.0)).reason,
            Reason::SmallerFile { .. }
        ));

        let same = decide(&p, mb(2000.0), &p, mb(2000.0));
        assert!(!same.replace);
        assert!(matches!(same.reason, Reason::LargerFile { .. }));
    }

    #[test]
    fn equal_scores_with_unknown_size_replace() {
        let p = engine().classify("Movie.1080p.HDTV");
        for (existing, new) in [(mb(0.0), mb(1500.0)), (mb(2000.0), mb(0.0)), (mb(0.0), mb(0.0))] {
            let verdict = decide(&p, existing, &p, new);
            assert!(verdict.replace);
            assert!(matches!(verdict.reason, Reason::SizeUnknown { .. }));
        }
    }

    #[test]
    fn unrecognised_names_fall_back_to_size() {
        let e = engine();
        let verdict = e.compare_quality("home video.mkv", "2GB", "holiday clip.mkv", "1GB");
        assert!(verdict.replace);
        assert!(matches!(verdict.reason, Reason::SmallerFile { .. }));
    }

    #[test]
    fn lower_score_keeps_and_names_both_sides() {
        let verdict = engine().compare_quality(
            "Movie.2023.1080p.BluRay.DD5.1.mkv",
            "3.2GB",
            "Movie.2023.1080p.HDCam.AAC.2.0.mkv",
            "1.5GB",
        );
        assert!(!verdict.replace);
        assert!(verdict.is_warning());
        match verdict.reason {
            Reason::LowerQuality {
                existing_summary,
                new_summary,
                ..
            } => {
                assert_eq!(existing_summary, "bluray 1080p dd5.1");
                assert_eq!(new_summary, "hdcam 1080p aac");
            }
            other => panic!("unexpected reason: {other:?}"),
        }
    }

    #[test]
    fn label_gate_short_circuits() {
        let verdict = engine().should_replace_quality(
            "720p",
            "Movie.2023.720p.BluRay.mkv",
            "2GB",
            "1080p",
            "Movie.2023.1080p.HDCam.mkv",
            "1.5GB",
        );
        assert!(verdict.replace);
        assert!(matches!(verdict.reason, Reason::DifferentLabel { .. }));
    }

    #[test]
    fn matching_labels_delegate_to_comparison() {
        let e = engine();
        let gated = e.should_replace_quality(
            "1080p",
            "Movie.2023.1080p.BluRay.DD5.1.mkv",
            "3.2GB",
            "1080p",
            "Movie.2023.1080p.HDCam.AAC.2.0.mkv",
            "1.5GB",
        );
        let direct = e.compare_quality(
            "Movie.2023.1080p.BluRay.DD5.1.mkv",
            "3.2GB",
            "Movie.2023.1080p.HDCam.AAC.2.0.mkv",
            "1.5GB",
        );
        assert_eq!(gated, direct);
    }

    #[test]
    fn custom_tables_change_scoring() {
        let mut tables = RankTables::default();
        tables.video_codec = RankTable::from_entries(&[
            ("x264", VideoCodec::Avc, 30),
            ("x265", VideoCodec::Hevc, 10),
        ]);
        let e = QualityEngine::new(EngineConfig::default().with_tables(tables)).unwrap();

        let verdict = e.compare_quality(
            "Movie.1080p.BluRay.x264.DD5.1",
            "3.5GB",
            "Movie.1080p.BluRay.x265.DD5.1",
            "2.1GB",
        );
        assert!(!verdict.replace);
    }

    #[test]
    fn config_tokens_are_lower_cased() {
        let config = EngineConfig::from_json(
            r#"{ "tables": { "video_codec": [ { "token": "AV1", "kind": "Av1", "rank": 30 } ] } }"#,
        )
        .unwrap();
        let e = QualityEngine::new(config).unwrap();
        assert_eq!(e.classify("Movie.AV1").video_codec_rank(), 30);
    }

    #[test]
    fn invalid_tables_are_rejected() {
        let mut tables = RankTables::default();
        tables.audio = RankTable::from_entries(&[("", crate::types::AudioFormat::Aac, 50)]);
        let err = QualityEngine::new(EngineConfig::default().with_tables(tables)).unwrap_err();
        assert!(matches!(err, ReelgateError::EmptyToken { table: "audio" }));
    }

    #[test]
    fn overflowing_ranks_are_rejected() {
        let config = EngineConfig::from_json(
            r#"{ "tables": { "video_codec": [
                { "token": "x265", "kind": "Hevc", "rank": 4294967295 }
            ] } }"#,
        )
        .unwrap();
        let err = QualityEngine::new(config).unwrap_err();
        assert!(matches!(err, ReelgateError::InvalidConfig(_)));

        let err = QualityEngine::new(EngineConfig::default().with_bit_depth_bonus(u32::MAX))
            .unwrap_err();
        assert!(matches!(err, ReelgateError::InvalidConfig(_)));
    }

    #[test]
    fn largest_accepted_ranks_compare_without_overflow() {
        let mut tables = RankTables::default();
        let headroom = u32::MAX - 100 - 100 - 100 - 18 - 5;
        tables.video_codec = RankTable::from_entries(&[("x265", VideoCodec::Hevc, headroom)]);
        let e = QualityEngine::new(EngineConfig::default().with_tables(tables)).unwrap();

        let verdict = e.compare_quality(
            "Movie.1080p.x264",
            "1GB",
            "Movie.2160p.BluRay.x265.Atmos.DV.10bit",
            "1GB",
        );
        assert!(verdict.replace);
        assert!(matches!(
            verdict.reason,
            Reason::BetterQuality {
                new_score: u32::MAX,
                ..
            }
        ));
    }

    #[test]
    fn free_functions_use_reference_engine() {
        assert_eq!(classify("Movie.1080p.BluRay"), engine().classify("Movie.1080p.BluRay"));
        assert_eq!(parse_size("2.5GB").megabytes(), 2560.0);
    }

    #[test]
    fn engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QualityEngine>();
    }
}
