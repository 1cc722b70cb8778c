//! # 요청 추출기(Extractor) 모듈
//!
//! - `json_body`: 빈 본문을 허용하는 JSON 본문 추출기

pub mod json_body;

pub use json_body::JsonBody;
