//! Reference rank tables.
//!
//! Entry order matters: among equal-rank matches the earliest entry's token
//! is the one reported.

use crate::types::{AudioFormat, DynamicRange, Resolution, SourceTier, VideoCodec};

pub const SOURCE_RANKS: &[(&str, SourceTier, u32)] = &[
    ("bluray", SourceTier::BluRay, 100),
    ("blu-ray", SourceTier::BluRay, 100),
    ("brrip", SourceTier::BluRay, 100),
    ("bdrip", SourceTier::BluRay, 100),
    ("uhd", SourceTier::BluRay, 100),
    ("4k", SourceTier::BluRay, 100),
    ("web-dl", SourceTier::WebDl, 85),
    ("webdl", SourceTier::WebDl, 85),
    ("web dl", SourceTier::WebDl, 85),
    ("web.dl", SourceTier::WebDl, 85),
    ("webrip", SourceTier::WebRip, 75),
    ("web-rip", SourceTier::WebRip, 75),
    ("web.rip", SourceTier::WebRip, 75),
    // Platform tags are WEB-DL grade.
    ("dsnp", SourceTier::StreamingWebDl, 85),
    ("nf", SourceTier::StreamingWebDl, 85),
    ("amzn", SourceTier::StreamingWebDl, 85),
    ("atvp", SourceTier::StreamingWebDl, 85),
    ("aptv", SourceTier::StreamingWebDl, 85),
    ("hmax", SourceTier::StreamingWebDl, 85),
    ("hbo", SourceTier::StreamingWebDl, 85),
    ("dvdrip", SourceTier::DvdRip, 60),
    ("dvd-rip", SourceTier::DvdRip, 60),
    ("hdrip", SourceTier::HdRip, 55),
    ("hd-rip", SourceTier::HdRip, 55),
    ("hdtv", SourceTier::Hdtv, 50),
    ("hdtvrip", SourceTier::Hdtv, 50),
    ("dvdscr", SourceTier::Screener, 40),
    ("screener", SourceTier::Screener, 40),
    ("r5", SourceTier::R5, 35),
    ("hdcam", SourceTier::HdCam, 25),
    ("hd-cam", SourceTier::HdCam, 25),
    ("hdts", SourceTier::HdCam, 25),
    ("hd-ts", SourceTier::HdCam, 25),
    ("cam", SourceTier::Cam, 15),
    ("camrip", SourceTier::Cam, 15),
    ("cam-rip", SourceTier::Cam, 15),
    ("ts", SourceTier::Cam, 15),
    ("telesync", SourceTier::Cam, 15),
    ("tc", SourceTier::Cam, 15),
    ("telecine", SourceTier::Cam, 15),
    ("predvd", SourceTier::PreRelease, 10),
    ("workprint", SourceTier::PreRelease, 10),
    ("ppv", SourceTier::PreRelease, 10),
    ("vhsrip", SourceTier::Vhs, 5),
];

pub const VIDEO_CODEC_RANKS: &[(&str, VideoCodec, u32)] = &[
    ("h265", VideoCodec::Hevc, 20),
    ("hevc", VideoCodec::Hevc, 20),
    ("x265", VideoCodec::Hevc, 20),
    ("h.265", VideoCodec::Hevc, 20),
    ("av1", VideoCodec::Av1, 18),
    ("h264", VideoCodec::Avc, 15),
    ("x264", VideoCodec::Avc, 15),
    ("h.264", VideoCodec::Avc, 15),
    ("avc", VideoCodec::Avc, 15),
    ("vp9", VideoCodec::Vp9, 12),
    ("xvid", VideoCodec::Xvid, 8),
    ("divx", VideoCodec::Divx, 5),
    ("mpeg", VideoCodec::Mpeg, 3),
];

pub const AUDIO_RANKS: &[(&str, AudioFormat, u32)] = &[
    ("atmos", AudioFormat::Atmos, 100),
    ("dolby atmos", AudioFormat::Atmos, 100),
    ("truehd", AudioFormat::Lossless, 95),
    ("dts-hd", AudioFormat::Lossless, 95),
    ("dts-hd ma", AudioFormat::Lossless, 95),
    ("ddp", AudioFormat::EnhancedAc3, 90),
    ("dd+", AudioFormat::EnhancedAc3, 90),
    ("eac3", AudioFormat::EnhancedAc3, 90),
    ("dts", AudioFormat::Dts, 85),
    ("dts-x", AudioFormat::DtsX, 88),
    ("dd5.1", AudioFormat::DolbyDigital, 80),
    ("dd 5.1", AudioFormat::DolbyDigital, 80),
    ("ac3", AudioFormat::DolbyDigital, 80),
    ("dolby digital", AudioFormat::DolbyDigital, 80),
    ("ddp5.1", AudioFormat::EnhancedAc3, 85),
    ("dd+5.1", AudioFormat::EnhancedAc3, 85),
    ("aac5.1", AudioFormat::AacSurround, 65),
    ("aac 5.1", AudioFormat::AacSurround, 65),
    ("opus", AudioFormat::Opus, 60),
    ("aac2.0", AudioFormat::Aac, 50),
    ("aac 2.0", AudioFormat::Aac, 50),
    ("aac", AudioFormat::Aac, 50),
    ("mp3", AudioFormat::Mp3, 40),
    ("stereo", AudioFormat::Stereo, 35),
    ("2.0", AudioFormat::Stereo, 35),
    ("mono", AudioFormat::Mono, 20),
];

pub const RESOLUTION_RANKS: &[(&str, Resolution, u32)] = &[
    ("2160p", Resolution::Uhd2160, 100),
    ("4k", Resolution::Uhd2160, 100),
    ("uhd", Resolution::Uhd2160, 100),
    ("1440p", Resolution::Qhd1440, 80),
    ("2k", Resolution::Qhd1440, 80),
    ("1080p", Resolution::Fhd1080, 70),
    ("fhd", Resolution::Fhd1080, 70),
    ("720p", Resolution::Hd720, 50),
    ("hd", Resolution::Hd720, 50),
    ("576p", Resolution::Sd576, 35),
    ("480p", Resolution::Sd480, 30),
    ("sd", Resolution::Sd480, 30),
    ("360p", Resolution::Ld360, 20),
    ("240p", Resolution::Ld240, 10),
];

pub const DYNAMIC_RANGE_RANKS: &[(&str, DynamicRange, u32)] = &[
    ("hdr10+", DynamicRange::Hdr10Plus, 15),
    ("hdr10plus", DynamicRange::Hdr10Plus, 15),
    ("hdr10", DynamicRange::Hdr10, 12),
    ("hdr", DynamicRange::Hdr10, 12),
    ("dolby vision", DynamicRange::DolbyVision, 18),
    ("dv", DynamicRange::DolbyVision, 18),
    ("hlg", DynamicRange::Hlg, 10),
    // Never reported: a zero rank cannot beat the empty baseline.
    ("sdr", DynamicRange::Sdr, 0),
];
