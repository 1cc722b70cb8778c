//! # 폴더 데이터베이스 쿼리 모듈
//!
//! `folders` 테이블에 대한 조회/생성/삭제 쿼리 함수들입니다.
//! 폴더를 삭제하면 스키마의 `ON DELETE CASCADE`에 의해
//! 그 폴더를 참조하는 노트들도 저장소가 함께 삭제합니다.

use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

/// 모든 폴더를 ID 순서대로 조회합니다.
pub async fn list_folders(pool: &SqlitePool) -> Result<Vec<Folder>, AppError> {
    // ORDER BY id: ID는 저장소가 증가하는 순서로 발급하므로 생성 순서와 같습니다.
    let folders = sqlx::query_as::<_, Folder>("SELECT id, name FROM folders ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(folders)
}

/// ID로 단일 폴더를 조회합니다.
///
/// # 반환값
/// - `Ok(Some(Folder))`: 폴더를 찾은 경우
/// - `Ok(None)`: 해당 ID의 폴더가 없는 경우 (라우트 핸들러에서 404로 변환)
pub async fn get_folder(pool: &SqlitePool, id: i64) -> Result<Option<Folder>, AppError> {
    // SQL의 `?`는 바인딩 자리표시자입니다. .bind(id)가 값을 안전하게 대입합니다.
    let folder = sqlx::query_as::<_, Folder>("SELECT id, name FROM folders WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(folder)
}

/// 새 폴더를 생성하고, 저장소가 발급한 ID가 담긴 행을 반환합니다.
pub async fn create_folder(pool: &SqlitePool, name: &str) -> Result<Folder, AppError> {
    // 이름은 이스케이프하지 않고 원본 그대로 저장합니다.
    // 이스케이프는 응답을 만들 때(FolderResponse) 적용됩니다.
    let result = sqlx::query("INSERT INTO folders (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await?;

    // AUTOINCREMENT 컬럼이므로 rowid가 곧 폴더 ID입니다.
    let id = result.last_insert_rowid();

    get_folder(pool, id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created folder".to_string()))
}

/// 폴더를 삭제합니다.
///
/// # 반환값
/// - `Ok(true)`: 삭제 성공
/// - `Ok(false)`: 해당 ID의 폴더가 없음
pub async fn delete_folder(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    // 외래키 CASCADE 덕분에 이 한 문장으로 소속 노트까지 삭제됩니다.
    // (db::connect에서 foreign_keys(true)를 켜 두어야 동작합니다)
    let result = sqlx::query("DELETE FROM folders WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
