//! # 관대한 JSON 본문 추출기
//!
//! Axum 기본 `Json<T>` 추출기는 본문이 비어 있거나 `Content-Type`이 없으면
//! 자체 형식의 에러로 거절합니다. 이 API는 빈 본문을 `{}`와 같게 보고,
//! 필수 필드 누락은 핸들러가 `{ "error": { "message": "Missing ..." } }`로 응답해야 하므로
//! 본문을 직접 읽어 파싱하는 추출기를 둡니다.
//!
//! 요청 본문은 항상 JSON 객체로 취급합니다.
//! 배열이나 문자열 같은 다른 JSON 값은 필드가 하나도 없는 `{}`로 봅니다.

use crate::error::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// 요청 본문을 `T`로 파싱합니다. 빈 본문(공백만 있는 경우 포함)은 `T::default()`입니다.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

// FromRequest: 요청 본문(body)을 소비하는 추출기 트레이트입니다.
// 본문은 한 번만 읽을 수 있으므로, 이 추출기는 핸들러의 마지막 인자여야 합니다.
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Bytes 추출기로 본문 전체를 메모리에 읽습니다.
        // 크기 제한(기본 2MB)을 넘으면 413 상태를 그대로 유지하고,
        // 그 밖의 읽기 실패는 400으로 응답합니다.
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge(rejection.body_text())
            } else {
                AppError::BadRequest(rejection.body_text())
            }
        })?;

        // 비어 있거나 공백뿐인 본문은 `{}`와 같습니다.
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }

        // 먼저 형식 없는 `Value`로 파싱합니다.
        // 곧바로 `T`로 파싱하면 serde가 `["x"]` 같은 배열을 구조체 필드 순서대로
        // 받아들이므로, `name` 키가 없는 본문이 검증을 통과해 버립니다.
        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?;

        // 객체가 아니면 필드가 없는 것으로 보고 빈 객체로 바꿉니다.
        // 그러면 필수 필드 검증이 "Missing '<field>'" 메시지로 응답합니다.
        let object = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        // 필드 타입이 맞지 않으면(예: folder_reference가 문자열) 여기서 400입니다.
        serde_json::from_value(Value::Object(object))
            .map(JsonBody)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))
    }
}
