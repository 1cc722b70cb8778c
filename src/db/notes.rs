//! # 노트 데이터베이스 쿼리 모듈
//!
//! `notes` 테이블에 대한 CRUD 쿼리 함수들입니다.
//! `folder_reference`가 실제 폴더를 가리키는지는 저장소의 외래키 제약이 보장합니다.

use crate::error::AppError;
use crate::models::*;
use chrono::Utc;
use sqlx::SqlitePool;

/// 모든 노트를 ID 순서대로 조회합니다.
pub async fn list_notes(pool: &SqlitePool) -> Result<Vec<Note>, AppError> {
    // query_as::<_, Note>: 결과 행을 Note 구조체로 자동 변환합니다.
    // Note에 #[derive(sqlx::FromRow)]가 있어서 가능합니다.
    let notes = sqlx::query_as::<_, Note>(
        r#"
        SELECT id, name, modified, folder_reference, content
        FROM notes
        ORDER BY id
        "#,
        // ↑ ORDER BY id: 생성된 순서대로 (ID는 재사용되지 않으므로 안정적)
    )
    .fetch_all(pool)
    .await?;

    Ok(notes)
}

/// ID로 단일 노트를 조회합니다. 없으면 `Ok(None)`입니다.
pub async fn get_note(pool: &SqlitePool, id: i64) -> Result<Option<Note>, AppError> {
    let note = sqlx::query_as::<_, Note>(
        r#"
        SELECT id, name, modified, folder_reference, content
        FROM notes
        WHERE id = ?
        "#,
    )
    .bind(id)
    // fetch_optional: 0행이면 None, 1행이면 Some(Note)
    .fetch_optional(pool)
    .await?;

    Ok(note)
}

/// 새 노트를 생성합니다. `modified`는 현재 시각으로 설정됩니다.
///
/// 존재하지 않는 폴더를 가리키면 외래키 위반으로 `AppError::Database`가 반환됩니다.
pub async fn create_note(pool: &SqlitePool, note: &NewNote) -> Result<Note, AppError> {
    let result = sqlx::query(
        r#"
        INSERT INTO notes (name, modified, folder_reference, content)
        VALUES (?, ?, ?, ?)
        "#,
    )
    // 각 ?에 순서대로 값을 바인딩합니다.
    .bind(&note.name)
    // Utc::now(): 생성 시각을 modified에 기록합니다.
    // sqlx가 DateTime<Utc>를 RFC 3339 문자열로 저장합니다.
    .bind(Utc::now())
    .bind(note.folder_reference)
    .bind(&note.content)
    .execute(pool)
    .await?;

    // last_insert_rowid(): 방금 INSERT한 행의 ID (AUTOINCREMENT 값)
    // 생성된 노트를 다시 조회하여 반환합니다.
    get_note(pool, result.last_insert_rowid())
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created note".to_string()))
}

/// 노트를 삭제합니다. 삭제된 행이 있으면 `true`입니다.
pub async fn delete_note(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM notes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    // rows_affected(): 영향받은 행 수. 0이면 해당 ID의 노트가 없었던 것입니다.
    Ok(result.rows_affected() > 0)
}

/// 노트를 부분 수정합니다 (PATCH).
///
/// `changes`에서 `None`인 필드는 `COALESCE`로 기존 값을 유지하고,
/// `modified`는 항상 현재 시각으로 갱신합니다. `id`와 `folder_reference`는 건드리지 않습니다.
///
/// # 반환값
/// - `Ok(true)`: 수정 성공
/// - `Ok(false)`: 해당 ID의 노트가 없음
pub async fn update_note(
    pool: &SqlitePool,
    id: i64,
    changes: &NoteChanges,
) -> Result<bool, AppError> {
    // ── 부분 업데이트 ──
    // 동적으로 SQL을 조립하는 대신 COALESCE 하나로 처리합니다.
    // COALESCE(?, name): 바인딩된 값이 NULL이면 기존 name을 그대로 씁니다.
    // Option<String>을 바인딩하면 None은 SQL NULL이 되므로,
    // 클라이언트가 보내지 않은 필드는 변경되지 않습니다.
    let result = sqlx::query(
        r#"
        UPDATE notes
        SET name = COALESCE(?, name),
            content = COALESCE(?, content),
            modified = ?
        WHERE id = ?
        "#,
        // ↑ folder_reference는 SET 절에 없으므로 수정할 수 없습니다.
    )
    .bind(&changes.name) // Some → 새 이름, None → NULL (기존 값 유지)
    .bind(&changes.content)
    // modified는 어떤 필드를 바꾸든 항상 현재 시각으로 갱신합니다.
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
