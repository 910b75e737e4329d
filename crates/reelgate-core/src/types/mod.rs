pub mod profile;
pub mod tier;
pub mod verdict;

pub use profile::{Detection, Origin, QualityProfile};
pub use tier::{AudioFormat, DynamicRange, Resolution, SourceTier, VideoCodec};
pub use verdict::{Reason, Verdict};
