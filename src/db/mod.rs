//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 저장소(SQLite)와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//!
//! 각 하위 모듈:
//! - `folders`: 폴더 조회/생성/삭제 쿼리
//! - `notes`: 노트 CRUD 쿼리

pub mod folders;
pub mod notes;

pub use folders::*;
pub use notes::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// SQLite 연결 풀을 생성합니다.
///
/// 프로세스 시작 시 한 번 만들고, `AppState`를 통해 모든 요청이 공유합니다.
/// `foreign_keys(true)`가 꺼져 있으면 노트의 외래키와 CASCADE 삭제가 동작하지 않습니다.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// `./migrations`의 스키마를 적용합니다. 이미 적용된 마이그레이션은 건너뜁니다.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// 테스트용 인메모리 풀. 연결이 닫히면 메모리 DB도 사라지므로 연결 하나를 계속 유지합니다.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();
    migrate(&pool).await.unwrap();
    pool
}
