use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// A rejected token request.
///
/// Every variant except [`Sign`](Self::Sign) is client-caused and terminal:
/// reported synchronously, never retried, never defaulted. The `Display`
/// strings are the wire messages clients match on, so they stay exactly as the
/// original deployment shipped them.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	#[error("missing required Authorization header")]
	MissingAuthorization,

	// The body failed to parse; the parse error text is the message.
	#[error("{0}")]
	InvalidBody(String),

	#[error("type not found")]
	MissingAction,

	#[error("invalid type: {0}")]
	InvalidAction(String),

	#[error("username not found")]
	MissingUser,

	#[error("targetUsername not found")]
	MissingTargetUser,

	#[error("channelId not found")]
	MissingChannel,

	#[error("channelType not found")]
	MissingChannelType,

	#[error("invalid channelType: {0}")]
	InvalidChannelType(String),

	#[error("token signing failed: {0}")]
	Sign(#[from] anyhow::Error),
}

impl ApiError {
	fn status(&self) -> StatusCode {
		match self {
			Self::Sign(_) => StatusCode::INTERNAL_SERVER_ERROR,
			_ => StatusCode::BAD_REQUEST,
		}
	}
}

#[derive(Serialize)]
struct ErrorBody {
	code: u16,
	message: String,
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let status = self.status();
		if status.is_server_error() {
			tracing::error!(error = %self, "request failed");
		}

		let body = ErrorBody {
			code: status.as_u16(),
			message: self.to_string(),
		};

		(status, Json(body)).into_response()
	}
}
