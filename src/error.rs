use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// 非校验类错误统一返回给用户的提示
pub const ANALYSIS_FAILED_MESSAGE: &str = "เกิดข้อผิดพลาดในการวิเคราะห์ข้อมูล";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("Model API error: {0:#}")]
    Api(anyhow::Error),

    #[error("Database error: {0:#}")]
    Database(anyhow::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>, field: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Api(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 所有非 200 响应的响应体
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::Validation { message, field } => ErrorBody { message, field },
            other => {
                tracing::error!("❌ 分析失败: {}", other);
                ErrorBody {
                    message: ANALYSIS_FAILED_MESSAGE.to_string(),
                    field: None,
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::validation("empty", "word").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Api(anyhow::anyhow!("timeout")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Database(anyhow::anyhow!("locked")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_omits_missing_field() {
        let body = ErrorBody {
            message: ANALYSIS_FAILED_MESSAGE.to_string(),
            field: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "message": ANALYSIS_FAILED_MESSAGE }));
    }

    #[test]
    fn test_display_keeps_cause_chain() {
        let err = AppError::Api(anyhow::anyhow!("connection refused").context("调用模型失败"));
        let text = err.to_string();
        assert!(text.contains("调用模型失败"));
        assert!(text.contains("connection refused"));
    }
}
