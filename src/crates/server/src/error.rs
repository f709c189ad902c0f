use actix_web::{http::StatusCode, HttpResponse};
use domain::payload::PayloadError;
use serde_json::{json, Value};
use thiserror::Error;

/// Wire-level error. `Display` yields the error code that goes into the
/// `{"error": ..., "details": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{code}")]
    BadRequest {
        code: &'static str,
        details: Option<Value>,
    },
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("unsupported_media_type")]
    UnsupportedMediaType,
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(resource: &str) -> Self {
        ApiError::NotFound(format!("{}_not_found", resource))
    }

    pub fn already_exists(resource: &str) -> Self {
        ApiError::Conflict(format!("{}_already_exists", resource))
    }

    pub fn create_failed(resource: &str) -> Self {
        ApiError::Internal(format!("unknown_error_creating_{}", resource))
    }

    pub fn delete_failed(resource: &str) -> Self {
        ApiError::Internal(format!("unknown_error_deleting_{}", resource))
    }

    /// A payload field that passed shape validation but references
    /// something that does not exist.
    pub fn unknown_reference(field: &str) -> Self {
        ApiError::BadRequest {
            code: "invalid_payload",
            details: Some(json!({ field: "unknown" })),
        }
    }
}

impl From<PayloadError> for ApiError {
    fn from(err: PayloadError) -> Self {
        match err {
            PayloadError::Malformed => ApiError::BadRequest {
                code: "invalid_json",
                details: None,
            },
            PayloadError::Invalid(fields) => ApiError::BadRequest {
                code: "invalid_payload",
                details: Some(serde_json::to_value(&fields).unwrap_or_default()),
            },
        }
    }
}

impl actix_web::error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let mut body = json!({ "error": self.to_string() });
        if let ApiError::BadRequest {
            details: Some(details),
            ..
        } = self
        {
            body["details"] = details.clone();
        }
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::error::ResponseError;

    #[actix_web::test]
    async fn test_error_body_carries_code() {
        let rsp = ApiError::not_found("genre").error_response();
        assert_eq!(rsp.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(rsp.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "genre_not_found");
        assert!(body.get("details").is_none());
    }

    #[actix_web::test]
    async fn test_payload_violations_become_details() {
        let err: ApiError = PayloadError::Invalid(
            [("name", "required")].into_iter().collect(),
        )
        .into();
        let rsp = err.error_response();
        assert_eq!(rsp.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(rsp.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "invalid_payload");
        assert_eq!(body["details"]["name"], "required");
    }

    #[test]
    fn test_codes_per_operation() {
        assert_eq!(
            ApiError::already_exists("label").to_string(),
            "label_already_exists"
        );
        assert_eq!(
            ApiError::create_failed("song").to_string(),
            "unknown_error_creating_song"
        );
        assert_eq!(
            ApiError::delete_failed("album").to_string(),
            "unknown_error_deleting_album"
        );
    }
}
