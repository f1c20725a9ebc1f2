use crate::{
    application::ApplicationState, dto::output, error::Error, service::scan_service::ScanService,
};
use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new().route("/api/v1/scans", post(run_scan))
}

///
/// Manual trigger used by the scheduler and for testing.
/// Runs a single scan and returns its summary.
///
async fn run_scan(
    State(scan_service): State<Arc<dyn ScanService>>,
) -> Result<Json<output::ScanSummary>, Error> {
    let summary = scan_service.scan().await?;

    Ok(Json(summary))
}
