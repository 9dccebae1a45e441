// tests/metrics.rs
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use applicant_evaluator::api::{self, AppState};
use applicant_evaluator::metrics::Metrics;
use applicant_evaluator::scoring::Weights;

// Build the full in-process app the binary serves: API router plus the
// Prometheus exporter. The recorder is global per process; repeated builds
// reuse the same handle.
fn build_app() -> Router {
    let state = AppState::with_weights(Weights::default());
    let metrics = Metrics::init(state.weight_sum());
    api::create_router(state).merge(metrics.router())
}

async fn scrape(app: &Router) -> String {
    let resp = app
        .clone()
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    // axum::body::to_bytes requires an explicit limit
    let bytes = body::to_bytes(resp.into_body(), 1_048_576).await.unwrap(); // 1 MiB
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn metrics_endpoint_exposes_weight_sum_gauge() {
    let app = build_app();
    let text = scrape(&app).await;
    assert!(
        text.contains("scoring_weight_sum"),
        "metrics exposition missing 'scoring_weight_sum'\n{text}"
    );
}

#[tokio::test]
async fn session_counters_appear_after_traffic() {
    let app = build_app();

    // One add and one evaluate so the counters exist in the exposition.
    let payload = r#"{
        "name": "Metric", "last_name": "Probe",
        "ales_score": "80", "gpa": "3.0", "exam_score": "80",
        "interview_score_1": "4", "interview_score_2": "4"
    }"#;
    let r1 = app
        .clone()
        .oneshot(
            Request::post("/applicants")
                .header("content-type", "application/json")
                .body(Body::from(payload))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(r1.status(), StatusCode::CREATED);

    let r2 = app
        .clone()
        .oneshot(Request::post("/evaluate").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(r2.status(), StatusCode::OK);

    // Same process, so the recorder has seen both increments.
    let text = scrape(&app).await;
    for needle in ["applicants_added_total", "evaluations_total"] {
        assert!(
            text.contains(needle),
            "metrics exposition missing '{needle}'\n{text}"
        );
    }
}
