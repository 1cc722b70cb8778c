//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `folder`: 폴더(Folder) 관련 구조체
//! - `note`: 노트(Note) 관련 구조체
//!
//! `pub use X::*;`로 재공개하여 `crate::models::Folder`처럼 짧게 접근할 수 있습니다.

pub mod folder;
pub mod note;

pub use folder::*;
pub use note::*;
