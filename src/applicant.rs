//! Applicant record types.
//!
//! An [`Applicant`] is immutable once stored: the roster assigns the id on
//! append and nothing mutates a record afterwards. Names are plain
//! composition (a [`FullName`] value), no trait hierarchy needed for a
//! single concrete record kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A first/last name pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FullName {
    pub first: String,
    pub last: String,
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

/// One applicant: identity plus the raw sub-scores exactly as submitted.
///
/// Expected ranges (not enforced here; the form layer owns parsing and the
/// scoring layer documents how out-of-range values behave):
/// - `ales_score`, `exam_score`: 0–100
/// - `gpa`: 2.0–4.0
/// - `interview_scores`: two juror marks, each 0–5
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    /// 1-based insertion order within the session.
    pub id: u32,
    pub name: FullName,
    pub ales_score: f64,
    pub gpa: f64,
    pub exam_score: f64,
    pub interview_scores: [f64; 2],
}

/// Applicant data before the roster assigns an id.
#[derive(Clone, Debug, PartialEq)]
pub struct ApplicantDraft {
    pub name: FullName,
    pub ales_score: f64,
    pub gpa: f64,
    pub exam_score: f64,
    pub interview_scores: [f64; 2],
}
