//! Error taxonomy shared by the engine, the adapters, and the HTTP layer.
//!
//! Storage-layer failures are logged where they happen and collapsed into
//! `DbError` before they cross the adapter boundary, so no driver detail
//! ever reaches a client.

use axum::{Json, http::StatusCode, response::IntoResponse};

pub type CnResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	PermissionDenied,
	ValidationError(String),
	DbError,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl Error {
	/// Machine-readable code used in the JSON error envelope
	pub fn code(&self) -> &'static str {
		match self {
			Error::NotFound => "NOT_FOUND",
			Error::PermissionDenied => "FORBIDDEN",
			Error::ValidationError(_) => "BAD_REQUEST",
			Error::DbError => "DB_ERROR",
			Error::Internal(_) => "INTERNAL",
			Error::Io(_) => "INTERNAL",
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::PermissionDenied => write!(f, "permission denied"),
			Error::ValidationError(msg) => write!(f, "{}", msg),
			Error::DbError => write!(f, "database error"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let status = match &self {
			Error::NotFound => StatusCode::NOT_FOUND,
			Error::PermissionDenied => StatusCode::FORBIDDEN,
			Error::ValidationError(_) => StatusCode::BAD_REQUEST,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		};
		let body = serde_json::json!({
			"error": {
				"code": self.code(),
				"message": self.to_string(),
			}
		});
		(status, Json(body)).into_response()
	}
}


// vim: ts=4
