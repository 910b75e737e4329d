//! # Reelgate Core
//!
//! Decides whether a newly discovered media file should replace an
//! already-indexed one. Release names are classified into quality profiles
//! (source, video codec, audio, resolution, dynamic range, bit depth), scored,
//! and compared with a deterministic tie-break on file size.
//!
//! ## Quick Start
//!
//! ```rust
//! use reelgate_core::{should_replace_quality, Reason};
//!
//! let verdict = should_replace_quality(
//!     "1080p",
//!     "Movie.2023.1080p.HDCam.AAC.2.0.mkv",
//!     "1.5GB",
//!     "1080p",
//!     "Movie.2023.1080p.BluRay.DD5.1.mkv",
//!     "3.2GB",
//! );
//!
//! assert!(verdict.replace);
//! assert!(matches!(verdict.reason, Reason::BetterQuality { .. }));
//! ```
pub mod classifier;
pub mod engine;
pub mod error;
pub mod size;
pub mod tables;
pub mod types;

// Re-export primary API
pub use classifier::Classifier;
pub use engine::{
    EngineConfig, QualityEngine, classify, compare_quality, decide, default_engine, parse_size,
    should_replace_quality,
};
pub use error::{ReelgateError, Result};
pub use size::{SizeParser, SizeValue};
pub use tables::{RankEntry, RankTable, RankTables};
pub use types::{
    AudioFormat, Detection, DynamicRange, Origin, QualityProfile, Reason, Resolution, SourceTier,
    Verdict, VideoCodec,
};
