//! roster.rs — in-memory, insertion-ordered applicant collection for one
//! session. Appended on form submission; reordered only by evaluation.

use std::sync::Mutex;

use crate::applicant::{Applicant, ApplicantDraft};
use crate::scoring::{final_score, Weights};

#[derive(Debug, Default)]
pub struct Roster {
    inner: Mutex<Vec<Applicant>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a draft, assigning the next 1-based id.
    /// Ids follow insertion order; deletion is unsupported, so they never
    /// collide within a session.
    pub fn push(&self, draft: ApplicantDraft) -> Applicant {
        let mut v = self.inner.lock().expect("roster mutex poisoned");
        let applicant = Applicant {
            id: v.len() as u32 + 1,
            name: draft.name,
            ales_score: draft.ales_score,
            gpa: draft.gpa,
            exam_score: draft.exam_score,
            interview_scores: draft.interview_scores,
        };
        v.push(applicant.clone());
        applicant
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("roster mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current stored order. Insertion order until the first evaluation,
    /// ranked order afterwards.
    pub fn snapshot(&self) -> Vec<Applicant> {
        self.inner.lock().expect("roster mutex poisoned").clone()
    }

    /// Rank the roster by final score, descending, and return the ranked
    /// records paired with their scores. Returns `None` on an empty roster
    /// (caller shows a notice; no state change).
    ///
    /// The sort mutates the STORED order: an applicant added after an
    /// evaluation appends after the ranked order, not the original
    /// insertion order. The sort is stable, so equal scores keep their
    /// relative input order.
    pub fn evaluate_in_place(&self, weights: &Weights) -> Option<Vec<(Applicant, f64)>> {
        let mut v = self.inner.lock().expect("roster mutex poisoned");
        if v.is_empty() {
            return None;
        }
        v.sort_by(|a, b| final_score(b, weights).total_cmp(&final_score(a, weights)));
        Some(
            v.iter()
                .map(|a| (a.clone(), final_score(a, weights)))
                .collect(),
        )
    }
}
