//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 `{ "error": { "message": "..." } }` HTTP 응답으로 자동 변환

use axum::{
    http::StatusCode,                   // HTTP 상태 코드 (400, 404, 500 등)
    response::{IntoResponse, Response}, // Axum의 응답 변환 트레이트
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
/// 어떤 에러도 이 계층에서 재시도하지 않습니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 ID의 행이 없음 (HTTP 404)
    /// 메시지는 리소스마다 다릅니다. 예: "Folder doesn't exist"
    #[error("{0}")]
    NotFound(&'static str),

    /// 필수 필드 누락 등 입력 검증 실패 (HTTP 400)
    #[error("{0}")]
    BadRequest(String),

    /// 요청 본문이 허용 크기를 넘음 (HTTP 413)
    /// Axum의 기본 본문 크기 제한(2MB)에 걸린 경우입니다.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// 서버 내부 오류 (HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),

    /// 저장소(DB) 오류 (HTTP 500)
    /// #[from]: `?` 연산자로 sqlx::Error가 자동으로 AppError::Database로 변환됩니다.
    /// 검증하지 않은 외래키 위반(존재하지 않는 folder_reference)도 여기로 옵니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 내부 에러(Database, Internal)는 실제 내용을 로그에만 남기고,
    /// 클라이언트에는 일반적인 메시지만 반환합니다.
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()),
            AppError::BadRequest(ref msg) => {
                tracing::debug!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::PayloadTooLarge(ref msg) => {
                tracing::debug!("Rejected oversized body: {}", msg);
                (StatusCode::PAYLOAD_TOO_LARGE, msg.clone())
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        // 결과: { "error": { "message": "Note doesn't exist" } }
        let body = Json(json!({
            "error": {
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
