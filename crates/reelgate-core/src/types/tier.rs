use std::fmt;

use serde::{Deserialize, Serialize};

/// Acquisition method of a release, the dominant quality signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceTier {
    /// Physical or UHD disc rip.
    BluRay,
    /// Generic untouched web download.
    WebDl,
    /// Web download tagged with the streaming platform (DSNP, NF, AMZN, ...).
    StreamingWebDl,
    /// Re-encoded web capture.
    WebRip,
    DvdRip,
    HdRip,
    Hdtv,
    Screener,
    R5,
    HdCam,
    /// Camera, telesync or telecine recording.
    Cam,
    /// Workprints, pre-DVD and pay-per-view captures.
    PreRelease,
    Vhs,
}

impl SourceTier {
    /// Returns `true` for disc rips.
    #[must_use]
    pub fn is_disc(self) -> bool {
        matches!(self, Self::BluRay)
    }

    /// Returns `true` for untouched web downloads, platform-tagged or not.
    #[must_use]
    pub fn is_web_download(self) -> bool {
        matches!(self, Self::WebDl | Self::StreamingWebDl)
    }
}

impl fmt::Display for SourceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BluRay => write!(f, "Blu-ray"),
            Self::WebDl => write!(f, "WEB-DL"),
            Self::StreamingWebDl => write!(f, "WEB-DL (platform)"),
            Self::WebRip => write!(f, "WEBRip"),
            Self::DvdRip => write!(f, "DVDRip"),
            Self::HdRip => write!(f, "HDRip"),
            Self::Hdtv => write!(f, "HDTV"),
            Self::Screener => write!(f, "Screener"),
            Self::R5 => write!(f, "R5"),
            Self::HdCam => write!(f, "HDCam"),
            Self::Cam => write!(f, "CAM"),
            Self::PreRelease => write!(f, "Pre-release"),
            Self::Vhs => write!(f, "VHSRip"),
        }
    }
}

/// Video codec family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoCodec {
    Hevc,
    Av1,
    Avc,
    Vp9,
    Xvid,
    Divx,
    Mpeg,
}

impl fmt::Display for VideoCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hevc => write!(f, "HEVC"),
            Self::Av1 => write!(f, "AV1"),
            Self::Avc => write!(f, "H.264"),
            Self::Vp9 => write!(f, "VP9"),
            Self::Xvid => write!(f, "XviD"),
            Self::Divx => write!(f, "DivX"),
            Self::Mpeg => write!(f, "MPEG"),
        }
    }
}

/// Audio format, including channel layout where release names state it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioFormat {
    Atmos,
    /// TrueHD and DTS-HD MA.
    Lossless,
    DtsX,
    /// Dolby Digital Plus (E-AC-3).
    EnhancedAc3,
    Dts,
    /// Dolby Digital 5.1 (AC-3).
    DolbyDigital,
    AacSurround,
    Opus,
    Aac,
    Mp3,
    Stereo,
    Mono,
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atmos => write!(f, "Atmos"),
            Self::Lossless => write!(f, "Lossless"),
            Self::DtsX => write!(f, "DTS:X"),
            Self::EnhancedAc3 => write!(f, "DD+"),
            Self::Dts => write!(f, "DTS"),
            Self::DolbyDigital => write!(f, "DD5.1"),
            Self::AacSurround => write!(f, "AAC 5.1"),
            Self::Opus => write!(f, "Opus"),
            Self::Aac => write!(f, "AAC"),
            Self::Mp3 => write!(f, "MP3"),
            Self::Stereo => write!(f, "Stereo"),
            Self::Mono => write!(f, "Mono"),
        }
    }
}

/// Frame resolution class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    Uhd2160,
    Qhd1440,
    Fhd1080,
    Hd720,
    Sd576,
    Sd480,
    Ld360,
    Ld240,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uhd2160 => write!(f, "2160p"),
            Self::Qhd1440 => write!(f, "1440p"),
            Self::Fhd1080 => write!(f, "1080p"),
            Self::Hd720 => write!(f, "720p"),
            Self::Sd576 => write!(f, "576p"),
            Self::Sd480 => write!(f, "480p"),
            Self::Ld360 => write!(f, "360p"),
            Self::Ld240 => write!(f, "240p"),
        }
    }
}

/// Dynamic-range / colour format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DynamicRange {
    DolbyVision,
    Hdr10Plus,
    Hdr10,
    Hlg,
    Sdr,
}

impl fmt::Display for DynamicRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DolbyVision => write!(f, "Dolby Vision"),
            Self::Hdr10Plus => write!(f, "HDR10+"),
            Self::Hdr10 => write!(f, "HDR10"),
            Self::Hlg => write!(f, "HLG"),
            Self::Sdr => write!(f, "SDR"),
        }
    }
}
