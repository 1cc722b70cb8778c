//! # 요청 본문 검증
//!
//! "누락(missing)"의 정의를 필드마다 명시적으로 둡니다.
//! - 텍스트 필드: 없음(absent), `null`, 빈 문자열 `""` 중 하나면 누락
//! - 정수 필드: 없음 또는 `null`이면 누락
//!
//! 빈 `content`처럼 비어 있어도 정상인 값은 이 함수들을 거치지 않습니다.

use crate::error::AppError;

/// 비어 있지 않은 텍스트만 `Some`으로 남깁니다.
pub fn present_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// 필수 텍스트 필드를 꺼냅니다. 누락이면 `Missing '<field>' in request body` 400 에러입니다.
pub fn require_text(field: &str, value: Option<String>) -> Result<String, AppError> {
    present_text(value).ok_or_else(|| missing_field(field))
}

/// 필수 값 필드(정수 등)를 꺼냅니다.
pub fn require_value<T>(field: &str, value: Option<T>) -> Result<T, AppError> {
    value.ok_or_else(|| missing_field(field))
}

fn missing_field(field: &str) -> AppError {
    AppError::BadRequest(format!("Missing '{field}' in request body"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_null_text_count_as_missing() {
        assert_eq!(present_text(None), None);
        assert_eq!(present_text(Some(String::new())), None);
        assert_eq!(present_text(Some("Eggs".into())), Some("Eggs".into()));
    }

    #[test]
    fn missing_text_reports_the_field_name() {
        let err = require_text("name", Some(String::new())).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Missing 'name' in request body"));
    }

    #[test]
    fn zero_is_a_present_value() {
        assert_eq!(require_value("folder_reference", Some(0_i64)).unwrap(), 0);
        let err = require_value::<i64>("folder_reference", None).unwrap_err();
        assert!(
            matches!(err, AppError::BadRequest(msg) if msg == "Missing 'folder_reference' in request body")
        );
    }
}
