use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use vivox_token::Issuer;

use crate::{ApiError, Config, TokenRequest, TokenResponse};

/// Shared, read-only state; cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
	pub issuer: Arc<Issuer>,
	pub require_authorization: bool,
}

impl AppState {
	pub fn new(config: &Config) -> Self {
		Self {
			issuer: Arc::new(config.issuer()),
			require_authorization: config.require_authorization,
		}
	}
}

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/v1/token", post(token))
		.route("/health", get(health))
		.layer(
			CorsLayer::new()
				.allow_origin(Any)
				.allow_methods([Method::GET, Method::POST])
				.allow_headers(Any),
		)
		.with_state(state)
}

/// Serve the router until the process is stopped.
pub async fn run_web(bind: SocketAddr, state: AppState) -> anyhow::Result<()> {
	let app = router(state);
	axum_server::bind(bind).serve(app.into_make_service()).await?;

	Ok(())
}

async fn health() -> impl IntoResponse {
	"OK"
}

/// `POST /v1/token`: validate the request and mint a signed token.
///
/// The body is parsed by hand rather than through the `Json` extractor so a
/// missing `Content-Type` is not a rejection and the parse error text lands in
/// the response message.
async fn token(
	State(state): State<AppState>,
	headers: HeaderMap,
	body: Bytes,
) -> Result<Json<TokenResponse>, ApiError> {
	if state.require_authorization && !headers.contains_key(header::AUTHORIZATION) {
		return Err(ApiError::MissingAuthorization);
	}

	let request: TokenRequest = serde_json::from_slice(&body).map_err(|err| ApiError::InvalidBody(err.to_string()))?;
	tracing::debug!(?request, "received");

	let (user_id, grant) = request.validate()?;
	let issued = state.issuer.issue(&user_id, &grant)?;

	tracing::debug!(user = %user_id, action = %grant.action(), "issued token");

	Ok(Json(TokenResponse {
		access_token: issued.token,
		uri: issued.uri,
	}))
}
