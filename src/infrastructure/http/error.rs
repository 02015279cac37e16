//! HTTP Error Handling
//!
//! 统一失败信封：`{ success: false, error, message }`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

const INTERNAL_ERROR: &str = "Internal server error";

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求形状校验失败（422）
    Validation(String),
    /// 领域校验失败（400）
    BadRequest(String),
    /// 资源不存在（404），携带资源名
    NotFound(String),
    /// 未预期的错误（500），细节只进日志
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let response = match self {
            ApiError::Validation(detail) => {
                tracing::warn!(status = status.as_u16(), error = %detail, "Validation failed");
                ErrorResponse::new("Validation failed", detail)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Bad request");
                ErrorResponse::new(msg, "Request could not be processed")
            }
            ApiError::NotFound(resource) => {
                tracing::warn!(status = status.as_u16(), resource = %resource, "Resource not found");
                ErrorResponse::new(
                    format!("{resource} not found"),
                    format!("The requested {} does not exist", resource.to_lowercase()),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Internal server error");
                ErrorResponse::new(INTERNAL_ERROR, "An unexpected error occurred")
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { resource_type, id } => {
                tracing::debug!(resource = resource_type, id = %id, "Lookup missed");
                ApiError::NotFound(resource_type.to_string())
            }
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::BusinessRuleViolation(msg) => ApiError::BadRequest(msg),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let (status, body) = body_json(ApiError::Internal("disk on fire".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Internal server error");
        assert!(!body.to_string().contains("disk on fire"));
    }

    #[tokio::test]
    async fn test_application_error_mapping() {
        let (status, body) = body_json(ApplicationError::not_found("Novel", "x").into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Novel not found");
        assert_eq!(body["message"], "The requested novel does not exist");

        let (status, body) = body_json(
            ApplicationError::business_rule("User with this email already exists").into(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "User with this email already exists");

        let (status, _) = body_json(ApiError::Validation("title: too short".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
