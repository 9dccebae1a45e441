use std::sync::{Arc, RwLock};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{info, warn};

use crate::applicant::{Applicant, ApplicantDraft, FullName};
use crate::roster::Roster;
use crate::scoring::{load_weights_file, Weights, DEFAULT_WEIGHTS_PATH};
use crate::transcript::{ranking_line, Transcript};

#[derive(Clone)]
pub struct AppState {
    roster: Arc<Roster>,
    transcript: Arc<Transcript>,
    weights: Arc<RwLock<Weights>>,
}

impl AppState {
    /// Weights come from `config/weights.json` when present, otherwise the
    /// fixed defaults.
    pub fn new() -> Self {
        Self::with_weights(Weights::load_from_file(DEFAULT_WEIGHTS_PATH))
    }

    /// Pin the weights explicitly (tests use this to stay independent of
    /// any weights file in the working directory).
    pub fn with_weights(weights: Weights) -> Self {
        Self {
            roster: Arc::new(Roster::new()),
            transcript: Arc::new(Transcript::new()),
            weights: Arc::new(RwLock::new(weights)),
        }
    }

    pub fn weight_sum(&self) -> f64 {
        self.weights.read().expect("rwlock poisoned").sum()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/applicants", post(add_applicant).get(list_applicants))
        .route("/evaluate", post(evaluate_applicants))
        .route("/transcript", get(get_transcript))
        .route("/debug/weights", get(debug_weights))
        .route("/admin/reload-weights", get(admin_reload_weights))
        .fallback_service(ServeDir::new("static"))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// The seven form fields, all as submitted text. The five numeric ones are
/// parsed server-side so a bad entry becomes a 422, not a dead session.
#[derive(serde::Deserialize)]
struct AddApplicantReq {
    name: String,
    last_name: String,
    ales_score: String,
    gpa: String,
    exam_score: String,
    interview_score_1: String,
    interview_score_2: String,
}

#[derive(serde::Serialize)]
struct InputError {
    field: &'static str,
    message: String,
}

type Rejection = (StatusCode, Json<InputError>);

fn parse_score(field: &'static str, raw: &str) -> Result<f64, Rejection> {
    raw.trim().parse::<f64>().map_err(|_| {
        metrics::counter!("input_parse_errors_total").increment(1);
        warn!(field, raw, "rejected non-numeric form input");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(InputError {
                field,
                message: format!("expected a number, got '{}'", raw.trim()),
            }),
        )
    })
}

async fn add_applicant(
    State(state): State<AppState>,
    Json(body): Json<AddApplicantReq>,
) -> Result<(StatusCode, Json<Applicant>), Rejection> {
    let ales_score = parse_score("ales_score", &body.ales_score)?;
    let gpa = parse_score("gpa", &body.gpa)?;
    let exam_score = parse_score("exam_score", &body.exam_score)?;
    let interview_1 = parse_score("interview_score_1", &body.interview_score_1)?;
    let interview_2 = parse_score("interview_score_2", &body.interview_score_2)?;

    let stored = state.roster.push(ApplicantDraft {
        name: FullName {
            first: body.name,
            last: body.last_name,
        },
        ales_score,
        gpa,
        exam_score,
        interview_scores: [interview_1, interview_2],
    });
    state.transcript.append_applicant(&stored);
    metrics::counter!("applicants_added_total").increment(1);
    info!(id = stored.id, "applicant added");

    Ok((StatusCode::CREATED, Json(stored)))
}

async fn list_applicants(State(state): State<AppState>) -> Json<Vec<Applicant>> {
    Json(state.roster.snapshot())
}

#[derive(serde::Serialize)]
struct RankedEntry {
    rank: usize,
    id: u32,
    name: String,
    last_name: String,
    final_score: f64,
    /// Display line, `"<first> <last> - Final Score: <score>"`.
    line: String,
}

#[derive(serde::Serialize)]
struct EvaluateResp {
    /// Set when there was nothing to evaluate; the UI shows it verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<String>,
    ranking: Vec<RankedEntry>,
}

async fn evaluate_applicants(State(state): State<AppState>) -> Json<EvaluateResp> {
    let weights = *state.weights.read().expect("rwlock poisoned");

    let Some(ranked) = state.roster.evaluate_in_place(&weights) else {
        metrics::counter!("evaluations_empty_total").increment(1);
        return Json(EvaluateResp {
            notice: Some("No applicants to evaluate. Please add applicants first.".to_string()),
            ranking: Vec::new(),
        });
    };

    state.transcript.append_ranking(&ranked);
    metrics::counter!("evaluations_total").increment(1);
    info!(count = ranked.len(), "applicants evaluated");

    let ranking = ranked
        .into_iter()
        .enumerate()
        .map(|(i, (a, score))| RankedEntry {
            rank: i + 1,
            line: ranking_line(&a, score),
            id: a.id,
            name: a.name.first,
            last_name: a.name.last,
            final_score: score,
        })
        .collect();

    Json(EvaluateResp {
        notice: None,
        ranking,
    })
}

async fn get_transcript(State(state): State<AppState>) -> String {
    state.transcript.render()
}

#[derive(serde::Serialize)]
struct WeightsInfo {
    weights: Weights,
    sum: f64,
}

async fn debug_weights(State(state): State<AppState>) -> Json<WeightsInfo> {
    let weights = *state.weights.read().expect("rwlock poisoned");
    Json(WeightsInfo {
        weights,
        sum: weights.sum(),
    })
}

async fn admin_reload_weights(State(state): State<AppState>) -> String {
    // A rejected file keeps the current weights; the caller sees why.
    let fresh = match load_weights_file(std::path::Path::new(DEFAULT_WEIGHTS_PATH)) {
        Ok(w) => w,
        Err(e) => {
            warn!(error = %e, path = DEFAULT_WEIGHTS_PATH, "weights reload rejected");
            return format!("failed: {e}");
        }
    };
    match state.weights.write() {
        Ok(mut w) => {
            *w = fresh;
            metrics::gauge!("scoring_weight_sum").set(fresh.sum());
            "reloaded".to_string()
        }
        Err(_) => "failed: lock poisoned".to_string(),
    }
}
