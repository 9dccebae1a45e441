// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod applicant;
pub mod metrics;
pub mod roster;
pub mod scoring;
pub mod transcript;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::applicant::{Applicant, ApplicantDraft, FullName};
pub use crate::roster::Roster;
pub use crate::scoring::{final_score, process, ProcessedScores, Weights};
pub use crate::transcript::Transcript;
