use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Alert headers the backend attaches to rejected requests.
pub const ERROR_HEADER: &str = "x-employeeapp-error";
pub const PARAMS_HEADER: &str = "x-employeeapp-params";

/// Failure of a call made by an entity service.
/// Surfaced unchanged to callers; no attempt is made to classify it further.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API returned an empty body")]
    EmptyBody,
}

/// Failure to move values between an entity and its edit form.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Unknown form field '{0}'")]
    UnknownField(String),

    #[error("Form value does not bind: {0}")]
    Bind(#[from] serde_json::Error),
}

/// Anything that can go wrong while an update workflow loads or saves.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Error type of the development backend.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Rejected request carrying an entity name and a machine-readable key
    /// (`idexists`, `idnull`, `idinvalid`, `idnotfound`).
    #[error("{message}")]
    BadRequestAlert {
        entity_name: &'static str,
        error_key: &'static str,
        message: &'static str,
    },
}

impl AppError {
    pub fn alert(
        entity_name: &'static str,
        error_key: &'static str,
        message: &'static str,
    ) -> Self {
        AppError::BadRequestAlert {
            entity_name,
            error_key,
            message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::BadRequestAlert { error_key, message, .. } => {
                tracing::warn!("Rejected request ({error_key}): {message}");
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message.to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        let mut response = (status, body).into_response();

        if let AppError::BadRequestAlert {
            entity_name,
            error_key,
            ..
        } = &self
        {
            let headers = response.headers_mut();
            if let Ok(value) = HeaderValue::from_str(&format!("error.{error_key}")) {
                headers.insert(HeaderName::from_static(ERROR_HEADER), value);
            }
            headers.insert(
                HeaderName::from_static(PARAMS_HEADER),
                HeaderValue::from_static(*entity_name),
            );
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_sets_error_headers() {
        let response = AppError::alert(
            "candidate",
            "idexists",
            "A new candidate cannot already have an ID",
        )
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[ERROR_HEADER], "error.idexists");
        assert_eq!(response.headers()[PARAMS_HEADER], "candidate");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("Candidate ABC".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(ERROR_HEADER).is_none());
    }
}
