//! # 노트 모델 정의
//!
//! - `Note`: DB의 `notes` 테이블 한 행
//! - `NoteResponse`: 이스케이프된 응답 형태
//! - `CreateNoteRequest` / `UpdateNoteRequest`: 요청 본문
//! - `NewNote` / `NoteChanges`: 검증을 통과한 뒤 DB 계층으로 넘기는 값

use crate::services::sanitize::escape_html;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 노트 엔티티 — `notes` 테이블의 한 행에 대응합니다.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Note {
    pub id: i64,
    pub name: String,
    /// 마지막 수정 시각. 생성 시 설정되고, 수정할 때마다 현재 시각으로 갱신됩니다.
    /// sqlx의 "chrono" feature가 TEXT 컬럼 ↔ DateTime<Utc> 변환을 처리합니다.
    pub modified: DateTime<Utc>,
    /// 소속 폴더 ID (생성 후 변경 불가)
    pub folder_reference: i64,
    pub content: String,
}

/// 응답용 노트. `name`과 `content`는 이스케이프되고,
/// `modified`는 문자열이 아닌 RFC 3339 타임스탬프로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteResponse {
    pub id: i64,
    pub name: String,
    pub modified: DateTime<Utc>,
    pub folder_reference: i64,
    pub content: String,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            name: escape_html(&note.name),
            modified: note.modified,
            folder_reference: note.folder_reference,
            content: escape_html(&note.content),
        }
    }
}

/// 노트 생성 요청 — `POST /notes`
///
/// 모든 필드가 `Option`입니다. 필수 여부는 핸들러의 검증 단계에서
/// 정해진 순서(name → folder_reference)로 확인합니다.
#[derive(Debug, Default, Deserialize)]
pub struct CreateNoteRequest {
    pub name: Option<String>,
    pub folder_reference: Option<i64>,
    pub content: Option<String>,
}

/// 노트 수정 요청 — `PATCH /notes/{id}`
///
/// `folder_reference`는 의도적으로 없습니다. 본문에 들어 있어도 serde가 무시합니다.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateNoteRequest {
    pub name: Option<String>,
    pub content: Option<String>,
}

/// 검증을 통과한 새 노트
#[derive(Debug, Clone)]
pub struct NewNote {
    pub name: String,
    pub folder_reference: i64,
    pub content: String,
}

/// 검증을 통과한 노트 변경 사항. `None`인 필드는 저장소에서 그대로 유지됩니다.
#[derive(Debug, Clone, Default)]
pub struct NoteChanges {
    pub name: Option<String>,
    pub content: Option<String>,
}
