//! Score normalization and the weighted final score.
//!
//! Each raw sub-score is brought to the common 0–100 scale with an UPPER
//! clamp only:
//! - ALES and exam scores already live on 0–100; `min(x, 100)`.
//! - GPA maps affinely: 2.0 → 50, 4.0 → 100, capped at 100. Values below
//!   2.0 map below 50 with no floor and can go negative.
//! - The two juror marks (each out of 5) are summed out of 10 and rescaled
//!   to 0–100, capped at 100.
//!
//! final = (ales*w_ales + gpa*w_gpa + exam*w_exam + interview*w_interview)
//!         / (w_ales + w_gpa + w_exam + w_interview)
//!
//! There is deliberately no lower clamp anywhere: out-of-range inputs pass
//! through and can push the final score below zero. Upstream form parsing
//! owns validation; this function is pure and infallible.

use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};

use crate::applicant::Applicant;

/// Default location of the weights file, relative to the runtime working dir.
pub const DEFAULT_WEIGHTS_PATH: &str = "config/weights.json";

/// Component weights for the final score.
///
/// The defaults sum to 1.0, so the divide-by-sum in [`final_score`] is an
/// identity there; it is what keeps a user-edited weights file sane.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Weights {
    pub w_ales: f64,
    pub w_gpa: f64,
    pub w_exam: f64,
    pub w_interview: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            w_ales: 0.35,
            w_gpa: 0.20,
            w_exam: 0.30,
            w_interview: 0.15,
        }
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.w_ales + self.w_gpa + self.w_exam + self.w_interview
    }

    /// Load weights from a JSON file.
    /// Falls back to the fixed defaults on any read/parse error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        load_weights_file(path.as_ref()).unwrap_or_default()
    }
}

/// Load weights directly, surfacing why a file was rejected. The admin
/// reload path uses this so a bad file keeps the current weights instead
/// of silently resetting to defaults.
pub fn load_weights_file(path: &Path) -> io::Result<Weights> {
    let bytes = fs::read(path)?;
    let w: Weights = serde_json::from_slice(&bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(w)
}

/// Sub-scores after normalization to the common 0–100 scale.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessedScores {
    pub ales: f64,
    pub gpa: f64,
    pub exam: f64,
    pub interview: f64,
}

/// Normalize the raw sub-scores. Upper clamp only, see module docs.
pub fn process(a: &Applicant) -> ProcessedScores {
    ProcessedScores {
        ales: a.ales_score.min(100.0),
        gpa: ((a.gpa - 2.0) * 25.0 + 50.0).min(100.0),
        exam: a.exam_score.min(100.0),
        interview: (((a.interview_scores[0] + a.interview_scores[1]) / 10.0) * 100.0).min(100.0),
    }
}

/// Weighted composite of the normalized sub-scores.
///
/// Pure and deterministic: same record and weights always yield the same
/// score. The `1e-6` floor on the denominator only matters for a degenerate
/// all-zero weights file.
pub fn final_score(a: &Applicant, w: &Weights) -> f64 {
    let p = process(a);
    let raw =
        p.ales * w.w_ales + p.gpa * w.w_gpa + p.exam * w.w_exam + p.interview * w.w_interview;
    raw / w.sum().max(1e-6)
}
