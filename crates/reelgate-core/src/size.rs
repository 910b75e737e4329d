//! Human-readable file size strings.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;

const KIB: f64 = 1024.0;
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// A non-negative file size in megabytes (1 MB = 1024 KB).
///
/// Zero means "unknown": unparsable or empty size strings parse to zero
/// rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct SizeValue {
    megabytes: f64,
}

impl SizeValue {
    /// The unknown size.
    pub const UNKNOWN: Self = Self { megabytes: 0.0 };

    /// Wraps a megabyte quantity. Negative and non-finite values become zero.
    #[must_use]
    pub fn from_megabytes(megabytes: f64) -> Self {
        if megabytes.is_finite() && megabytes > 0.0 {
            Self { megabytes }
        } else {
            Self::UNKNOWN
        }
    }

    #[must_use]
    pub fn from_bytes(bytes: u64) -> Self {
        Self::from_megabytes(bytes as f64 / KIB / KIB)
    }

    #[must_use]
    pub fn megabytes(self) -> f64 {
        self.megabytes
    }

    /// Returns `true` if the size is positive and can take part in a comparison.
    #[must_use]
    pub fn is_known(self) -> bool {
        self.megabytes > 0.0
    }

    /// Formats the size with the largest unit that keeps the value at or
    /// above one, e.g. `"1.50 GB"`.
    ///
    /// Byte-scale output (`"512.00 B"`) carries no unit the parser
    /// recognises and reads back as megabytes.
    #[must_use]
    pub fn readable(self) -> String {
        let mut value = self.megabytes * KIB * KIB;
        let mut unit = 0;
        while value >= KIB && unit < UNITS.len() - 1 {
            value /= KIB;
            unit += 1;
        }
        format!("{value:.2} {}", UNITS[unit])
    }
}

impl From<f64> for SizeValue {
    fn from(megabytes: f64) -> Self {
        Self::from_megabytes(megabytes)
    }
}

impl From<SizeValue> for f64 {
    fn from(size: SizeValue) -> Self {
        size.megabytes
    }
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} MB", self.megabytes)
    }
}

/// Parses size strings such as `"2.5GB"`, `"1500MB"`, `"3.2 GB"` or `"500KB"`.
#[derive(Debug, Clone)]
pub struct SizeParser {
    re_number: Regex,
}

impl SizeParser {
    /// Constructs a new `SizeParser` with its pre-compiled pattern.
    ///
    /// # Errors
    ///
    /// Returns `ReelgateError::RegexError` if the pattern fails to compile
    /// (should never happen with the static pattern defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_number: Regex::new(r"\d+(?:\.\d+)?|\.\d+")?,
        })
    }

    /// Parses `input` into megabytes.
    ///
    /// Only the first numeric run is read and only one unit multiplier is
    /// applied, checked in the order GB, TB, KB. A missing unit or `MB`
    /// leaves the number as megabytes.
    #[must_use]
    pub fn parse(&self, input: &str) -> SizeValue {
        let normalized: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        let Some(number) = self.re_number.find(&normalized) else {
            return SizeValue::UNKNOWN;
        };
        let Ok(value) = number.as_str().parse::<f64>() else {
            return SizeValue::UNKNOWN;
        };

        let megabytes = if normalized.contains("GB") {
            value * KIB
        } else if normalized.contains("TB") {
            value * KIB * KIB
        } else if normalized.contains("KB") {
            value / KIB
        } else {
            value
        };

        SizeValue::from_megabytes(megabytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> SizeParser {
        SizeParser::new().unwrap()
    }

    fn approx(actual: SizeValue, expected: f64) {
        assert!(
            (actual.megabytes() - expected).abs() < 1e-3,
            "got {}, expected {expected}",
            actual.megabytes()
        );
    }

    #[test]
    fn unit_conversions() {
        let p = parser();
        approx(p.parse("2.5GB"), 2560.0);
        approx(p.parse("1500MB"), 1500.0);
        approx(p.parse("3.2 GB"), 3276.8);
        approx(p.parse("500KB"), 0.48828125);
        approx(p.parse("1TB"), 1_048_576.0);
        approx(p.parse("700"), 700.0);
    }

    #[test]
    fn lowercase_and_spaced_input() {
        let p = parser();
        approx(p.parse(" 1.5 gb "), 1536.0);
        approx(p.parse("750 mb"), 750.0);
    }

    #[test]
    fn unparsable_input_is_unknown() {
        let p = parser();
        assert_eq!(p.parse(""), SizeValue::UNKNOWN);
        assert_eq!(p.parse("   "), SizeValue::UNKNOWN);
        assert_eq!(p.parse("unknown"), SizeValue::UNKNOWN);
        assert_eq!(p.parse("GB"), SizeValue::UNKNOWN);
        assert!(!p.parse("0GB").is_known());
    }

    #[test]
    fn only_first_number_and_one_decimal_point() {
        let p = parser();
        approx(p.parse("1.2.3GB"), 1.2 * 1024.0);
        approx(p.parse("2 x 700MB"), 2.0);
        approx(p.parse(".5GB"), 512.0);
    }

    #[test]
    fn gigabytes_checked_before_other_units() {
        approx(parser().parse("1GB (1024MB)"), 1024.0);
    }

    #[test]
    fn negative_and_non_finite_values_clamp_to_unknown() {
        assert_eq!(SizeValue::from_megabytes(-3.0), SizeValue::UNKNOWN);
        assert_eq!(SizeValue::from_megabytes(f64::NAN), SizeValue::UNKNOWN);
        assert_eq!(SizeValue::from_megabytes(f64::INFINITY), SizeValue::UNKNOWN);
    }

    #[test]
    fn deserialization_applies_clamp() {
        let size: SizeValue = serde_json::from_str("-5.0").unwrap();
        assert_eq!(size, SizeValue::UNKNOWN);

        let size: SizeValue = serde_json::from_str("1536.0").unwrap();
        assert_eq!(size.megabytes(), 1536.0);
        assert_eq!(serde_json::to_string(&size).unwrap(), "1536.0");
    }

    #[test]
    fn readable_formatting() {
        assert_eq!(SizeValue::from_bytes(1_610_612_736).readable(), "1.50 GB");
        assert_eq!(SizeValue::from_bytes(734_003_200).readable(), "700.00 MB");
        assert_eq!(SizeValue::from_bytes(512_000).readable(), "500.00 KB");
    }

    #[test]
    fn readable_output_parses_back() {
        let p = parser();
        for bytes in [2_684_354_560_u64, 3_435_973_837, 1_572_864_000] {
            let size = SizeValue::from_bytes(bytes);
            let back = p.parse(&size.readable());
            assert!((back.megabytes() - size.megabytes()).abs() < 0.01 * size.megabytes());
        }
    }
}
