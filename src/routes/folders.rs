//! # 폴더(Folder) 라우트 핸들러
//!
//! ## 엔드포인트
//! - `GET    /folders`      → 전체 폴더 목록 조회
//! - `POST   /folders`      → 새 폴더 생성
//! - `GET    /folders/{id}` → 단일 폴더 조회
//! - `DELETE /folders/{id}` → 폴더 삭제
//!
//! 폴더를 삭제하면 DB 스키마의 `ON DELETE CASCADE`에 의해
//! 해당 폴더에 속한 노트들도 함께 삭제됩니다.
//! 응답의 `name`은 항상 이스케이프됩니다 (`FolderResponse` 참고).

use crate::{
    db,
    error::AppError,
    middleware::JsonBody,
    models::*,
    routes::{parse_id, AppState},
    services::validation::require_text,
};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use sqlx::SqlitePool;

const FOLDER_NOT_FOUND: &str = "Folder doesn't exist";

/// 경로의 ID로 폴더를 찾습니다. 없으면 `NotFound`(404)입니다.
///
/// `/folders/{id}`의 모든 핸들러가 먼저 이 함수를 거치고,
/// 찾은 행을 다음 단계에 그대로 넘겨받아 사용합니다.
pub async fn find_folder(pool: &SqlitePool, raw_id: &str) -> Result<Folder, AppError> {
    let Some(id) = parse_id(raw_id) else {
        return Err(AppError::NotFound(FOLDER_NOT_FOUND));
    };

    db::get_folder(pool, id)
        .await?
        .ok_or(AppError::NotFound(FOLDER_NOT_FOUND))
}

/// `GET /folders` — 전체 폴더 목록을 ID 순서로 조회합니다.
///
/// 응답: `[{ "id": 1, "name": "To-do" }, ...]` (폴더가 없으면 `[]`)
pub async fn list_folders(
    State(state): State<AppState>,
) -> Result<Json<Vec<FolderResponse>>, AppError> {
    let folders = db::list_folders(&state.pool).await?;
    // .map(FolderResponse::from): 각 폴더의 이름을 이스케이프한 응답 형태로 변환
    Ok(Json(folders.into_iter().map(FolderResponse::from).collect()))
}

/// `GET /folders/{id}` — 단일 폴더를 조회합니다.
pub async fn get_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FolderResponse>, AppError> {
    let folder = find_folder(&state.pool, &id).await?;
    // .into(): From<Folder> for FolderResponse 구현을 통해 이름을 이스케이프합니다.
    Ok(Json(folder.into()))
}

/// `POST /folders` — 새 폴더를 생성합니다.
///
/// 요청 본문: `{ "name": "폴더 이름" }`
/// 성공 시 201 Created와 함께 `Location: /folders/{id}` 헤더를 돌려줍니다.
pub async fn create_folder(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateFolderRequest>,
) -> Result<impl IntoResponse, AppError> {
    // name이 없거나 null이거나 빈 문자열이면 400
    let name = require_text("name", req.name)?;

    let folder = db::create_folder(&state.pool, &name).await?;
    tracing::info!(folder_id = folder.id, "Created folder");

    // 201 Created + Location 헤더: 새 리소스의 정식 경로를 알려줍니다.
    let location = format!("/folders/{}", folder.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(FolderResponse::from(folder)),
    ))
}

/// `DELETE /folders/{id}` — 폴더를 삭제합니다.
///
/// 성공 시 HTTP 204 No Content를 반환합니다.
/// 소속 노트의 삭제는 저장소의 외래키 CASCADE가 처리합니다.
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let folder = find_folder(&state.pool, &id).await?;

    if !db::delete_folder(&state.pool, folder.id).await? {
        // 조회와 삭제 사이에 다른 요청이 먼저 지운 경우
        return Err(AppError::NotFound(FOLDER_NOT_FOUND));
    }
    tracing::info!(folder_id = folder.id, "Deleted folder");

    Ok(StatusCode::NO_CONTENT)
}
