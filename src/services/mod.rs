//! # 서비스 계층
//!
//! HTTP와 DB 어느 쪽에도 묶이지 않는 순수 로직을 모아둡니다.
//! - `sanitize`: 응답 텍스트 이스케이프
//! - `validation`: 요청 본문의 필수 필드 검증

pub mod sanitize;
pub mod validation;
