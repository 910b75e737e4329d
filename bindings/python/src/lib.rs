//! Python bindings for Reelgate.
//!
//! Mirrors the call shapes the indexing service already uses: comparisons
//! return `(should_replace, reason)` tuples and `parse_filename` returns a
//! dict keyed like the scanner's quality records.

use pyo3::prelude::*;
use pyo3::types::PyDict;
use reelgate_core::{Detection, QualityProfile};

fn token<T>(detection: &Option<Detection<T>>) -> Option<&str> {
    detection.as_ref().map(|d| d.token.as_str())
}

/// Label-gated comparison. Differing labels always replace.
#[pyfunction]
#[pyo3(signature = (
    existing_quality_label,
    existing_quality_name,
    existing_quality_size,
    new_quality_label,
    new_quality_name,
    new_quality_size,
))]
fn should_replace_quality(
    existing_quality_label: &str,
    existing_quality_name: &str,
    existing_quality_size: Option<&str>,
    new_quality_label: &str,
    new_quality_name: &str,
    new_quality_size: Option<&str>,
) -> (bool, String) {
    reelgate_core::should_replace_quality(
        existing_quality_label,
        existing_quality_name,
        existing_quality_size.unwrap_or_default(),
        new_quality_label,
        new_quality_name,
        new_quality_size.unwrap_or_default(),
    )
    .into_parts()
}

/// Compares two release names and their sizes.
#[pyfunction]
#[pyo3(signature = (existing_filename, existing_size, new_filename, new_size))]
fn compare_quality(
    existing_filename: &str,
    existing_size: Option<&str>,
    new_filename: &str,
    new_size: Option<&str>,
) -> (bool, String) {
    reelgate_core::compare_quality(
        existing_filename,
        existing_size.unwrap_or_default(),
        new_filename,
        new_size.unwrap_or_default(),
    )
    .into_parts()
}

/// Parses a size string such as `"2.5GB"` into megabytes.
#[pyfunction]
#[pyo3(signature = (size_str=None))]
fn parse_file_size(size_str: Option<&str>) -> f64 {
    reelgate_core::parse_size(size_str.unwrap_or_default()).megabytes()
}

fn profile_dict<'py>(py: Python<'py>, profile: &QualityProfile) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("source", token(&profile.source))?;
    dict.set_item("source_score", profile.source_rank())?;
    dict.set_item("codec", token(&profile.video_codec))?;
    dict.set_item("codec_score", profile.video_codec_rank())?;
    dict.set_item("audio", token(&profile.audio))?;
    dict.set_item("audio_score", profile.audio_rank())?;
    dict.set_item("resolution", token(&profile.resolution))?;
    dict.set_item("resolution_score", profile.resolution_rank())?;
    dict.set_item("hdr", token(&profile.dynamic_range))?;
    dict.set_item("hdr_score", profile.dynamic_range_rank())?;
    dict.set_item("is_10bit", profile.is_10bit)?;
    dict.set_item("bitrate_bonus", profile.bit_depth_bonus)?;
    dict.set_item("total_score", profile.total_score())?;
    Ok(dict)
}

/// Classifies a release name into a quality dict.
#[pyfunction]
fn parse_filename<'py>(py: Python<'py>, filename: &str) -> PyResult<Bound<'py, PyDict>> {
    profile_dict(py, &reelgate_core::classify(filename))
}

#[pymodule]
fn _reelgate(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(should_replace_quality, m)?)?;
    m.add_function(wrap_pyfunction!(compare_quality, m)?)?;
    m.add_function(wrap_pyfunction!(parse_file_size, m)?)?;
    m.add_function(wrap_pyfunction!(parse_filename, m)?)?;
    Ok(())
}
