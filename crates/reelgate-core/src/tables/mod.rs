pub mod defaults;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ReelgateError, Result};
use crate::types::{AudioFormat, Detection, DynamicRange, Resolution, SourceTier, VideoCodec};

/// One token of a rank table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry<T> {
    pub token: String,
    pub kind: T,
    pub rank: u32,
}

/// Ordered token table for a single quality dimension.
///
/// Matching is plain substring containment against an already lower-cased
/// release name. Release names have no fixed delimiter grammar, so this
/// accepts false positives such as a title word that happens to contain a
/// short token (`"tc"`, `"nf"`, `"hd"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankTable<T> {
    entries: Vec<RankEntry<T>>,
}

impl<T: Copy> RankTable<T> {
    /// Builds a table from `(token, kind, rank)` triples, lower-casing every token.
    #[must_use]
    pub fn from_entries(entries: &[(&str, T, u32)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|&(token, kind, rank)| RankEntry {
                    token: token.to_lowercase(),
                    kind,
                    rank,
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[RankEntry<T>] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest rank in the table, zero when empty.
    #[must_use]
    pub fn max_rank(&self) -> u32 {
        self.entries.iter().map(|e| e.rank).max().unwrap_or(0)
    }

    /// Finds the highest-ranked entry contained in `haystack`.
    ///
    /// `haystack` must already be lower-cased. An entry only replaces the
    /// current best when its rank is strictly greater, so the earliest of
    /// several equal-rank matches wins and zero-rank entries never match.
    #[must_use]
    pub fn best_match(&self, haystack: &str) -> Option<Detection<T>> {
        let mut best: Option<&RankEntry<T>> = None;
        for entry in &self.entries {
            let current = best.map_or(0, |b| b.rank);
            if entry.rank > current && haystack.contains(entry.token.as_str()) {
                best = Some(entry);
            }
        }
        best.map(|e| Detection::matched(e.kind, e.token.clone(), e.rank))
    }

    /// Lower-cases tokens loaded from an external document.
    pub(crate) fn normalize(&mut self) {
        for entry in &mut self.entries {
            entry.token = entry.token.to_lowercase();
        }
    }

    /// Rejects empty and duplicate tokens.
    pub(crate) fn validate(&self, table: &'static str) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if entry.token.trim().is_empty() {
                return Err(ReelgateError::EmptyToken { table });
            }
            if !seen.insert(entry.token.as_str()) {
                return Err(ReelgateError::InvalidConfig(format!(
                    "duplicate token {:?} in {table} table",
                    entry.token
                )));
            }
        }
        Ok(())
    }
}

/// The five rank tables, one per quality dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankTables {
    pub source: RankTable<SourceTier>,
    pub video_codec: RankTable<VideoCodec>,
    pub audio: RankTable<AudioFormat>,
    pub resolution: RankTable<Resolution>,
    pub dynamic_range: RankTable<DynamicRange>,
}

impl Default for RankTables {
    fn default() -> Self {
        Self {
            source: RankTable::from_entries(defaults::SOURCE_RANKS),
            video_codec: RankTable::from_entries(defaults::VIDEO_CODEC_RANKS),
            audio: RankTable::from_entries(defaults::AUDIO_RANKS),
            resolution: RankTable::from_entries(defaults::RESOLUTION_RANKS),
            dynamic_range: RankTable::from_entries(defaults::DYNAMIC_RANGE_RANKS),
        }
    }
}

impl RankTables {
    /// Total number of tokens across all tables.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.source.len()
            + self.video_codec.len()
            + self.audio.len()
            + self.resolution.len()
            + self.dynamic_range.len()
    }

    pub(crate) fn normalize(&mut self) {
        self.source.normalize();
        self.video_codec.normalize();
        self.audio.normalize();
        self.resolution.normalize();
        self.dynamic_range.normalize();
    }

    pub(crate) fn validate(&self) -> Result<()> {
        self.source.validate("source")?;
        self.video_codec.validate("video_codec")?;
        self.audio.validate("audio")?;
        self.resolution.validate("resolution")?;
        self.dynamic_range.validate("dynamic_range")
    }

    /// Rejects tables whose best-case total score does not fit in a `u32`.
    ///
    /// `audio_floor` is the highest rank audio inference can assign and
    /// `bonus` the 10-bit bonus.
    pub(crate) fn validate_score_ceiling(&self, audio_floor: u32, bonus: u32) -> Result<()> {
        let ceiling = u64::from(self.source.max_rank())
            + u64::from(self.video_codec.max_rank())
            + u64::from(self.audio.max_rank().max(audio_floor))
            + u64::from(self.resolution.max_rank())
            + u64::from(self.dynamic_range.max_rank())
            + u64::from(bonus);
        if ceiling > u64::from(u32::MAX) {
            return Err(ReelgateError::InvalidConfig(format!(
                "highest possible score {ceiling} exceeds {}",
                u32::MAX
            )));
        }
        Ok(())
    }
}
