//! strokeflow-api
//!
//! HTTP surface over the visit workflow. The binary in `main.rs` wires
//! configuration, logging and the listener around [`router`].

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // NIHSS reference data and stateless calculation
        .route("/nihss/items", get(routes::nihss::list_items))
        .route("/nihss/calculate", post(routes::nihss::calculate))
        // Visits
        .route("/visits", post(routes::visits::create_visit))
        .route("/visits/{id}", get(routes::visits::get_visit))
        .route("/visits/{id}/vitals", put(routes::visits::update_vitals))
        .route("/visits/{id}/onset", put(routes::visits::update_onset))
        .route("/visits/{id}/summary", get(routes::visits::get_summary))
        .route("/visits/{id}/notes", put(routes::visits::update_notes))
        .route("/visits/{id}/assign", post(routes::visits::assign_doctor))
        .route("/visits/{id}/finalize", post(routes::visits::finalize))
        .route(
            "/patients/{code}/visits",
            get(routes::visits::list_patient_visits),
        )
        .route(
            "/visits/{id}/nihss",
            get(routes::nihss::get_visit_scores).put(routes::nihss::save_visit_scores),
        )
        .route("/visits/{id}/scan", put(routes::scan::record_scan))
        .route(
            "/visits/{id}/tpa",
            get(routes::tpa::evaluate).post(routes::tpa::evaluate_and_record),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
