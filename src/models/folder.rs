//! # 폴더 모델 정의
//!
//! - `Folder`: DB의 `folders` 테이블 한 행(row). 이름은 입력된 그대로 저장됩니다.
//! - `FolderResponse`: 클라이언트에게 내보내는 형태. 이름이 이스케이프되어 있습니다.
//! - `CreateFolderRequest`: `POST /folders` 요청 본문

use crate::services::sanitize::escape_html;
use serde::{Deserialize, Serialize};

/// 폴더 엔티티 — `folders` 테이블의 한 행에 대응합니다.
///
/// `name`은 원본 그대로(raw) 담겨 있으므로 절대 그대로 응답하면 안 됩니다.
/// 응답 전에 반드시 `FolderResponse`로 변환하세요.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Folder {
    /// 저장소가 발급한 정수 ID (재사용/변경되지 않음)
    pub id: i64,
    pub name: String,
}

/// 응답용 폴더 — `{ "id": 1, "name": "&lt;b&gt;..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderResponse {
    pub id: i64,
    pub name: String,
}

// From 트레이트: `folder.into()` 또는 `FolderResponse::from(folder)`로 변환할 수 있게 합니다.
// 저장된 데이터든 방금 생성된 데이터든 같은 경로로 이스케이프됩니다.
impl From<Folder> for FolderResponse {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id,
            name: escape_html(&folder.name),
        }
    }
}

/// 폴더 생성 요청 — `POST /folders`의 요청 본문입니다.
///
/// `name`이 `Option`인 이유: 누락된 경우 serde 파싱 에러 대신
/// 우리가 정한 메시지(`Missing 'name' in request body`)로 400을 응답하기 위해서입니다.
#[derive(Debug, Default, Deserialize)]
pub struct CreateFolderRequest {
    pub name: Option<String>,
}
