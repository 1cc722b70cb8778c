//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우터 구성을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `folders`: 폴더 조회/생성/삭제 핸들러
//! - `notes`: 노트 CRUD 핸들러
//! - `health`: 서버 상태 확인 (헬스체크)

pub mod folders;
pub mod health;
pub mod notes;

pub use folders::*;
pub use health::*;
pub use notes::*;

use axum::{routing::get, Router};
use sqlx::SqlitePool;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// 풀 핸들 자체는 읽기 전용으로 공유되고, 변경되는 데이터는 저장소 안에만 있습니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀 (내부적으로 Arc로 공유)
    pub pool: SqlitePool,
}

/// API 라우터를 구성합니다.
///
/// 미들웨어(CORS, 트레이스)는 `main`에서 덧씌웁니다.
/// Axum 0.8부터 경로 파라미터는 `{id}` 문법을 사용합니다.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/folders", get(list_folders).post(create_folder))
        .route("/folders/{id}", get(get_folder).delete(delete_folder))
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/{id}",
            get(get_note).delete(delete_note).patch(update_note),
        )
        .route("/health", get(health_check))
        .with_state(state)
}

/// 경로의 `{id}`를 정수로 해석합니다.
///
/// 정수가 아닌 ID는 어떤 행도 가리킬 수 없으므로 `None`을 돌려주고,
/// 호출한 쪽에서 "존재하지 않음"(404)으로 처리합니다.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}
