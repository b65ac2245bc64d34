//! HTTP server for the gasless relay API.
//!
//! Exposes the submission endpoint and the domain descriptor. Every
//! rejection maps to a distinct status code so clients can distinguish a
//! stale request from a forged one from a replayed one.

use axum::{
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Json},
	routing::{get, post},
	Router,
};
use relay_config::ApiConfig;
use relay_core::{Relay, SubmitError};
use relay_types::{without_0x_prefix, DomainResponse, SubmitRequest, SubmitResponse};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

/// Shared application state for the API server.
#[derive(Clone)]
pub struct AppState {
	/// Reference to the relay for processing submissions.
	pub relay: Arc<Relay>,
}

/// Starts the HTTP server for the API.
pub async fn start_server(
	api_config: ApiConfig,
	relay: Arc<Relay>,
) -> Result<(), Box<dyn std::error::Error>> {
	let app_state = AppState { relay };

	let app = Router::new()
		.nest(
			"/api",
			Router::new()
				.route("/submit", post(handle_submit))
				.route("/domain", get(handle_domain)),
		)
		.layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
		.with_state(app_state);

	let bind_address = format!("{}:{}", api_config.host, api_config.port);
	let listener = TcpListener::bind(&bind_address).await?;

	tracing::info!("Relay API server starting on {}", bind_address);

	axum::serve(listener, app).await?;

	Ok(())
}

/// Handles POST /api/submit requests.
///
/// Decodes the hex signature and runs the full authorization pipeline. A
/// signature that is not even valid hex fails the same way a forged one
/// does.
async fn handle_submit(
	State(state): State<AppState>,
	Json(body): Json<SubmitRequest>,
) -> impl IntoResponse {
	let signature = match hex::decode(without_0x_prefix(&body.signature)) {
		Ok(bytes) => bytes,
		Err(e) => {
			tracing::debug!("Signature is not valid hex: {}", e);
			return rejection(&SubmitError::InvalidSignature);
		},
	};

	match state.relay.submit(&body.request, &signature).await {
		Ok(receipt) => (StatusCode::OK, Json(SubmitResponse { receipt })).into_response(),
		Err(e) => rejection(&e),
	}
}

/// Handles GET /api/domain requests.
///
/// Returns the EIP-712 domain parameters an off-line signer needs.
async fn handle_domain(State(state): State<AppState>) -> Json<DomainResponse> {
	Json(DomainResponse::from(state.relay.domain()))
}

fn rejection(error: &SubmitError) -> axum::response::Response {
	(
		status_for(error),
		Json(serde_json::json!({ "error": error.to_string() })),
	)
		.into_response()
}

/// Maps a submission error to its HTTP status code.
fn status_for(error: &SubmitError) -> StatusCode {
	match error {
		SubmitError::ExpiredDeadline => StatusCode::BAD_REQUEST,
		SubmitError::InvalidSignature => StatusCode::UNAUTHORIZED,
		SubmitError::ReplayedRequest => StatusCode::CONFLICT,
		SubmitError::ExecutionFailed(_) => StatusCode::BAD_GATEWAY,
		SubmitError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use relay_storage::StorageError;

	#[test]
	fn test_each_rejection_has_a_distinct_status() {
		assert_eq!(
			status_for(&SubmitError::ExpiredDeadline),
			StatusCode::BAD_REQUEST
		);
		assert_eq!(
			status_for(&SubmitError::InvalidSignature),
			StatusCode::UNAUTHORIZED
		);
		assert_eq!(
			status_for(&SubmitError::ReplayedRequest),
			StatusCode::CONFLICT
		);
		assert_eq!(
			status_for(&SubmitError::ExecutionFailed("x".into())),
			StatusCode::BAD_GATEWAY
		);
		assert_eq!(
			status_for(&SubmitError::Storage(StorageError::NotFound)),
			StatusCode::INTERNAL_SERVER_ERROR
		);
	}
}
