//! transcript.rs — append-only text log of session output, mirroring what
//! the form page shows in its output pane: one block per added applicant,
//! one block per evaluation.

use std::sync::Mutex;

use crate::applicant::Applicant;

/// Render one ranking line: `"<first> <last> - Final Score: <score>"`.
pub fn ranking_line(a: &Applicant, score: f64) -> String {
    format!("{} - Final Score: {}", a.name, score)
}

#[derive(Debug, Default)]
pub struct Transcript {
    inner: Mutex<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a newly stored applicant: id, name and all raw sub-scores.
    pub fn append_applicant(&self, a: &Applicant) {
        let block = format!(
            "Applicant {} - {}\nALES Score: {}\nGPA: {}\nExam Score: {}\nInterview Scores: {}, {}\n\n",
            a.id,
            a.name,
            a.ales_score,
            a.gpa,
            a.exam_score,
            a.interview_scores[0],
            a.interview_scores[1],
        );
        self.push(&block);
    }

    /// Log an evaluation result: header plus one line per ranked applicant.
    pub fn append_ranking(&self, ranked: &[(Applicant, f64)]) {
        let mut block =
            String::from("Sorted Applicants (in descending order of final score):\n");
        for (a, score) in ranked {
            block.push_str(&ranking_line(a, *score));
            block.push('\n');
        }
        block.push('\n');
        self.push(&block);
    }

    pub fn render(&self) -> String {
        self.inner.lock().expect("transcript mutex poisoned").clone()
    }

    fn push(&self, block: &str) {
        let mut s = self.inner.lock().expect("transcript mutex poisoned");
        s.push_str(block);
    }
}
