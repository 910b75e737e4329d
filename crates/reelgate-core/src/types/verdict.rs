use std::fmt;

use serde::{Deserialize, Serialize};

/// The deciding factor behind a [`Verdict`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Reason {
    /// The new candidate scored strictly higher.
    BetterQuality { new_score: u32, existing_score: u32 },

    /// Equal scores and the new candidate is strictly smaller.
    SmallerFile { new_mb: f64, existing_mb: f64 },

    /// Equal scores and the new candidate is not smaller.
    LargerFile { new_mb: f64, existing_mb: f64 },

    /// Equal scores and at least one size is unknown.
    SizeUnknown { score: u32 },

    /// The new candidate scored strictly lower and is blocked.
    LowerQuality {
        new_score: u32,
        existing_score: u32,
        existing_summary: String,
        new_summary: String,
    },

    /// The caller-supplied resolution labels differ.
    DifferentLabel {
        existing_label: String,
        new_label: String,
    },
}

impl Reason {
    /// Megabytes saved by a [`Reason::SmallerFile`] replacement.
    #[must_use]
    pub fn saved_mb(&self) -> Option<f64> {
        match self {
            Self::SmallerFile {
                new_mb,
                existing_mb,
            } => Some(existing_mb - new_mb),
            _ => None,
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BetterQuality {
                new_score,
                existing_score,
            } => write!(
                f,
                "REPLACE - Better quality (score: {new_score} > {existing_score})"
            ),
            Self::SmallerFile {
                new_mb,
                existing_mb,
            } => write!(
                f,
                "REPLACE - Same quality, smaller file \
                 ({new_mb:.2}MB < {existing_mb:.2}MB, saves {:.2}MB)",
                existing_mb - new_mb
            ),
            Self::LargerFile {
                new_mb,
                existing_mb,
            } => write!(
                f,
                "SKIP - Same quality, but larger file ({new_mb:.2}MB >= {existing_mb:.2}MB)"
            ),
            Self::SizeUnknown { score } => {
                write!(f, "REPLACE - Same quality (score: {score}), size unknown")
            }
            Self::LowerQuality {
                new_score,
                existing_score,
                existing_summary,
                new_summary,
            } => write!(
                f,
                "SKIP - Lower quality detected! (score: {new_score} < {existing_score})\n\
                 Existing: {existing_summary}\n\
                 New: {new_summary}"
            ),
            Self::DifferentLabel {
                existing_label,
                new_label,
            } => write!(
                f,
                "REPLACE - Different resolution ({existing_label} vs {new_label})"
            ),
        }
    }
}

/// A replace/keep decision and the reason behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// `true` if the new candidate should replace the existing one.
    pub replace: bool,
    pub reason: Reason,
}

impl Verdict {
    #[must_use]
    pub fn replace(reason: Reason) -> Self {
        Self {
            replace: true,
            reason,
        }
    }

    #[must_use]
    pub fn keep(reason: Reason) -> Self {
        Self {
            replace: false,
            reason,
        }
    }

    /// Returns `true` for outcomes that block a potential downgrade.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self.reason, Reason::LowerQuality { .. })
    }

    /// Splits the verdict into the `(replace, reason text)` pair callers log.
    #[must_use]
    pub fn into_parts(self) -> (bool, String) {
        let text = self.reason.to_string();
        (self.replace, text)
    }
}

impl From<Verdict> for (bool, String) {
    fn from(verdict: Verdict) -> Self {
        verdict.into_parts()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}
