//! # 노트(Note) 라우트 핸들러
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /notes | `list_notes` | 전체 노트 목록 |
//! | POST | /notes | `create_note` | 새 노트 생성 (201 + Location) |
//! | GET | /notes/{id} | `get_note` | 단일 노트 조회 |
//! | DELETE | /notes/{id} | `delete_note` | 노트 삭제 (204) |
//! | PATCH | /notes/{id} | `update_note` | 이름/내용 부분 수정 (204) |
//!
//! `/notes/{id}`의 핸들러는 모두 `find_note`로 먼저 행을 찾고(없으면 404),
//! 찾은 노트를 다음 단계에 직접 넘깁니다.

use crate::{
    db,
    error::AppError,
    middleware::JsonBody,
    models::*,
    routes::{parse_id, AppState},
    services::validation::{present_text, require_text, require_value},
};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use sqlx::SqlitePool;

const NOTE_NOT_FOUND: &str = "Note doesn't exist";

/// 경로의 ID로 노트를 찾습니다. 없으면 `NotFound`(404)입니다.
pub async fn find_note(pool: &SqlitePool, raw_id: &str) -> Result<Note, AppError> {
    let Some(id) = parse_id(raw_id) else {
        return Err(AppError::NotFound(NOTE_NOT_FOUND));
    };

    db::get_note(pool, id)
        .await?
        .ok_or(AppError::NotFound(NOTE_NOT_FOUND))
}

/// 생성 요청을 검증합니다.
///
/// 필수 필드는 `name` → `folder_reference` 순서로 확인하므로,
/// 처음 누락된 필드가 에러 메시지를 결정합니다.
/// `content`는 검증 뒤에 붙이며 없으면 빈 문자열입니다.
fn validate_new_note(req: CreateNoteRequest) -> Result<NewNote, AppError> {
    // `?` 연산자: 누락이면 즉시 BadRequest를 반환합니다.
    // name을 먼저 검사하므로 둘 다 없으면 name이 에러 메시지에 나옵니다.
    let name = require_text("name", req.name)?;
    let folder_reference = require_value("folder_reference", req.folder_reference)?;

    Ok(NewNote {
        name,
        folder_reference,
        // unwrap_or_default(): None이면 String의 기본값(빈 문자열)
        content: req.content.unwrap_or_default(),
    })
}

/// 수정 요청을 검증합니다. `name`이나 `content` 중 하나는 비어 있지 않아야 합니다.
fn validate_changes(req: UpdateNoteRequest) -> Result<NoteChanges, AppError> {
    // present_text(): 빈 문자열은 "보내지 않음"으로 취급합니다.
    let changes = NoteChanges {
        name: present_text(req.name),
        content: present_text(req.content),
    };

    if changes.name.is_none() && changes.content.is_none() {
        return Err(AppError::BadRequest(
            "Request must contain one of 'name' or 'content'.".to_string(),
        ));
    }
    Ok(changes)
}

/// `GET /notes` — 전체 노트 목록을 ID 순서로 조회합니다.
pub async fn list_notes(
    State(state): State<AppState>,
) -> Result<Json<Vec<NoteResponse>>, AppError> {
    let notes = db::list_notes(&state.pool).await?;
    // 각 노트를 NoteResponse로 변환하면서 name/content가 이스케이프됩니다.
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// `GET /notes/{id}` — 단일 노트를 조회합니다.
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NoteResponse>, AppError> {
    let note = find_note(&state.pool, &id).await?;
    Ok(Json(note.into()))
}

/// `POST /notes` — 새 노트를 생성합니다.
///
/// 요청 본문: `{ "name": "...", "folder_reference": 1, "content": "..." }`
///
/// 존재하지 않는 폴더를 가리키면 저장소의 외래키 위반이 그대로 500으로 전달됩니다.
pub async fn create_note(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateNoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_note = validate_new_note(req)?;

    let note = db::create_note(&state.pool, &new_note).await?;
    tracing::info!(
        note_id = note.id,
        folder_id = note.folder_reference,
        "Created note"
    );

    // (상태코드, 헤더 배열, 본문) 튜플은 Axum이 하나의 응답으로 합쳐 줍니다.
    let location = format!("/notes/{}", note.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(NoteResponse::from(note)),
    ))
}

/// `DELETE /notes/{id}` — 노트를 삭제합니다. 성공 시 204 No Content입니다.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let note = find_note(&state.pool, &id).await?;

    if !db::delete_note(&state.pool, note.id).await? {
        return Err(AppError::NotFound(NOTE_NOT_FOUND));
    }
    tracing::info!(note_id = note.id, "Deleted note");

    Ok(StatusCode::NO_CONTENT)
}

/// `PATCH /notes/{id}` — 노트의 이름/내용을 부분 수정합니다.
///
/// 존재 확인(404)이 본문 검증(400)보다 먼저입니다.
/// 보내지 않은 필드는 그대로 두고, `modified`는 항상 현재 시각으로 갱신합니다.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateNoteRequest>,
) -> Result<StatusCode, AppError> {
    // 순서가 중요합니다: 먼저 존재 확인(404), 그 다음 본문 검증(400)
    let note = find_note(&state.pool, &id).await?;
    let changes = validate_changes(req)?;

    if !db::update_note(&state.pool, note.id, &changes).await? {
        return Err(AppError::NotFound(NOTE_NOT_FOUND));
    }
    tracing::info!(note_id = note.id, "Updated note");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{app, send};
    use axum::{http::Method, Router};
    use chrono::{DateTime, Utc};
    use serde_json::{json, Value};

    /// 폴더 4개와 폴더마다 노트 하나씩을 만듭니다.
    async fn seed(app: &Router) -> Vec<Value> {
        let fixtures = [
            ("To-do", "Walk the dog", "Walk for at least 20 minutes."),
            ("Shopping List", "Eggs", "Two dozen."),
            ("Bills to pay", "Phone Bill", "$100.00 due on the 15th."),
            ("Upcoming Appointments", "Doctor appointment", "Annual check-up. Sept 7th at 11:00am"),
        ];

        let mut notes = Vec::new();
        for (folder_name, name, content) in fixtures {
            let (_, _, folder) =
                send(app, Method::POST, "/folders", Some(json!({ "name": folder_name }))).await;
            let (status, _, note) = send(
                app,
                Method::POST,
                "/notes",
                Some(json!({ "name": name, "folder_reference": folder["id"], "content": content })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
            notes.push(note);
        }
        notes
    }

    fn modified_of(note: &Value) -> DateTime<Utc> {
        note["modified"].as_str().unwrap().parse().unwrap()
    }

    #[test]
    fn first_missing_required_field_wins() {
        let err = validate_new_note(CreateNoteRequest::default()).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Missing 'name' in request body"));

        let err = validate_new_note(CreateNoteRequest {
            name: Some("Eggs".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert!(
            matches!(err, AppError::BadRequest(msg) if msg == "Missing 'folder_reference' in request body")
        );
    }

    #[test]
    fn empty_strings_do_not_count_as_changes() {
        let err = validate_changes(UpdateNoteRequest {
            name: Some(String::new()),
            content: Some(String::new()),
        })
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let changes = validate_changes(UpdateNoteRequest {
            name: Some(String::new()),
            content: Some("new".into()),
        })
        .unwrap();
        assert_eq!(changes.name, None);
        assert_eq!(changes.content.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn list_is_empty_without_notes() {
        let (app, _pool) = app().await;
        let (status, _, body) = send(&app, Method::GET, "/notes", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn list_returns_all_notes() {
        let (app, _pool) = app().await;
        let seeded = seed(&app).await;

        let (status, _, body) = send(&app, Method::GET, "/notes", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Array(seeded));
    }

    #[tokio::test]
    async fn missing_note_is_404_for_every_method() {
        let (app, _pool) = app().await;
        let expected = json!({ "error": { "message": "Note doesn't exist" } });

        for method in [Method::GET, Method::DELETE, Method::PATCH] {
            let (status, _, body) = send(&app, method, "/notes/123456", None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, expected);
        }
    }

    #[tokio::test]
    async fn get_returns_the_serialized_note() {
        let (app, _pool) = app().await;
        let seeded = seed(&app).await;

        let (status, _, body) = send(&app, Method::GET, "/notes/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 2);
        assert_eq!(body["name"], "Eggs");
        assert_eq!(body["content"], "Two dozen.");
        assert_eq!(body["folder_reference"], 2);
        assert_eq!(body, seeded[1]);
    }

    #[tokio::test]
    async fn create_responds_with_location_and_timestamp() {
        let (app, _pool) = app().await;
        seed(&app).await;

        let (status, headers, created) = send(
            &app,
            Method::POST,
            "/notes",
            Some(json!({ "name": "Test Note", "folder_reference": 1, "content": "Test Note Content" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["name"], "Test Note");
        assert_eq!(created["content"], "Test Note Content");
        assert_eq!(created["folder_reference"], 1);
        assert!(created["id"].is_i64());
        modified_of(&created);

        let location = headers[header::LOCATION].to_str().unwrap();
        assert_eq!(location, format!("/notes/{}", created["id"]));

        let (_, _, fetched) = send(&app, Method::GET, location, None).await;
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_reports_first_missing_field() {
        let (app, _pool) = app().await;
        seed(&app).await;

        let cases = [
            (json!({ "folder_reference": 2 }), "name"),
            (json!({ "name": null, "folder_reference": 2 }), "name"),
            (json!({ "name": "Test new note" }), "folder_reference"),
            (json!({ "name": "Test new note", "folder_reference": null }), "folder_reference"),
            (json!({}), "name"),
        ];
        for (body, field) in cases {
            let (status, _, response) = send(&app, Method::POST, "/notes", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(
                response,
                json!({ "error": { "message": format!("Missing '{field}' in request body") } })
            );
        }
    }

    #[tokio::test]
    async fn create_allows_missing_content() {
        let (app, _pool) = app().await;
        seed(&app).await;

        let (status, _, created) = send(
            &app,
            Method::POST,
            "/notes",
            Some(json!({ "name": "No body", "folder_reference": 3 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["content"], "");
    }

    #[tokio::test]
    async fn create_in_unknown_folder_is_opaque_500() {
        let (app, _pool) = app().await;
        let (status, _, body) = send(
            &app,
            Method::POST,
            "/notes",
            Some(json!({ "name": "Orphan", "folder_reference": 99, "content": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": { "message": "An internal error occurred" } }));
    }

    #[tokio::test]
    async fn name_and_content_are_escaped() {
        let (app, _pool) = app().await;
        seed(&app).await;

        let (_, _, created) = send(
            &app,
            Method::POST,
            "/notes",
            Some(json!({
                "name": r#"<script>alert("xss");</script>"#,
                "folder_reference": 1,
                "content": "<img src=x onerror=alert(1)>",
            })),
        )
        .await;
        let escaped_name = r#"&lt;script&gt;alert("xss");&lt;/script&gt;"#;
        let escaped_content = "&lt;img src=x onerror=alert(1)&gt;";
        assert_eq!(created["name"], escaped_name);
        assert_eq!(created["content"], escaped_content);

        let (_, _, fetched) =
            send(&app, Method::GET, &format!("/notes/{}", created["id"]), None).await;
        assert_eq!(fetched["name"], escaped_name);
        assert_eq!(fetched["content"], escaped_content);

        // 목록 조회에서도 같은 이스케이프가 적용되어야 합니다.
        let (_, _, listed) = send(&app, Method::GET, "/notes", None).await;
        let listed = listed
            .as_array()
            .unwrap()
            .iter()
            .find(|n| n["id"] == created["id"])
            .unwrap();
        assert_eq!(listed["name"], escaped_name);
        assert_eq!(listed["content"], escaped_content);
    }

    #[tokio::test]
    async fn non_object_bodies_are_missing_the_name() {
        let (app, _pool) = app().await;
        seed(&app).await;
        let expected = json!({ "error": { "message": "Missing 'name' in request body" } });

        for body in [json!(["n", 1, "c"]), json!([]), json!(null)] {
            let (status, _, response) = send(&app, Method::POST, "/notes", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response, expected);
        }

        let (_, _, listed) = send(&app, Method::GET, "/notes", None).await;
        assert_eq!(listed.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn array_patch_body_has_no_fields() {
        let (app, _pool) = app().await;
        seed(&app).await;

        let (status, _, body) =
            send(&app, Method::PATCH, "/notes/2", Some(json!(["renamed", "rewritten"]))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": { "message": "Request must contain one of 'name' or 'content'." } })
        );
    }

    #[tokio::test]
    async fn delete_removes_the_note() {
        let (app, _pool) = app().await;
        seed(&app).await;

        let (status, _, body) = send(&app, Method::DELETE, "/notes/2", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (_, _, listed) = send(&app, Method::GET, "/notes", None).await;
        let ids: Vec<i64> = listed
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[tokio::test]
    async fn update_changes_both_fields() {
        let (app, _pool) = app().await;
        let seeded = seed(&app).await;

        let (status, _, body) = send(
            &app,
            Method::PATCH,
            "/notes/2",
            Some(json!({ "name": "Updated Note Name", "content": "Updated Note Content" })),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (_, _, fetched) = send(&app, Method::GET, "/notes/2", None).await;
        assert_eq!(fetched["name"], "Updated Note Name");
        assert_eq!(fetched["content"], "Updated Note Content");
        assert_eq!(fetched["folder_reference"], seeded[1]["folder_reference"]);
        assert!(modified_of(&fetched) >= modified_of(&seeded[1]));
    }

    #[tokio::test]
    async fn content_only_update_keeps_the_name() {
        let (app, _pool) = app().await;
        let seeded = seed(&app).await;

        let (status, _, body) = send(
            &app,
            Method::PATCH,
            "/notes/3",
            Some(json!({ "content": "<b>Paid</b>" })),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (_, _, fetched) = send(&app, Method::GET, "/notes/3", None).await;
        assert_eq!(fetched["name"], seeded[2]["name"]);
        assert_eq!(fetched["content"], "&lt;b&gt;Paid&lt;/b&gt;");
        assert!(modified_of(&fetched) >= modified_of(&seeded[2]));
    }

    #[tokio::test]
    async fn update_without_fields_is_400() {
        let (app, _pool) = app().await;
        seed(&app).await;

        let (status, _, body) = send(
            &app,
            Method::PATCH,
            "/notes/2",
            Some(json!({ "notName": "this is not name and should be ignored" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": { "message": "Request must contain one of 'name' or 'content'." } })
        );
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let (app, _pool) = app().await;
        let seeded = seed(&app).await;

        let (status, _, _) = send(
            &app,
            Method::PATCH,
            "/notes/2",
            Some(json!({
                "name": "updated note name",
                "folder_reference": 4,
                "fieldToIgnore": "should not be in GET response",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, _, fetched) = send(&app, Method::GET, "/notes/2", None).await;
        assert_eq!(fetched["name"], "updated note name");
        assert_eq!(fetched["content"], seeded[1]["content"]);
        assert_eq!(fetched["folder_reference"], seeded[1]["folder_reference"]);
        assert_eq!(
            fetched.as_object().unwrap().len(),
            seeded[1].as_object().unwrap().len()
        );
        assert!(modified_of(&fetched) >= modified_of(&seeded[1]));
    }
}
