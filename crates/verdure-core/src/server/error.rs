//! HTTP rendering of relay errors.

use crate::error::RelayError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Validation { .. } => StatusCode::BAD_REQUEST,
            RelayError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            RelayError::Validation { message } => {
                tracing::debug!("Client error: {}", self);
                json!({ "error": message })
            }
            RelayError::Upstream {
                message,
                details,
                status_code,
            } => {
                tracing::error!(upstream_status = ?status_code, "Upstream error: {}", self);
                json!({ "error": message, "details": details })
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RelayError::validation("No image file provided").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RelayError::upstream("Error calling PlantNet API", "boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = RelayError::upstream("Error calling OpenAI API", "quota").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
