//! # TaskRepository
//!
//! タスクの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **リクエスト単位の接続**: 各メソッドが接続を 1 本開き、1 文を実行し、
//!   閉じる。接続の再利用はしない
//! - **単文トランザクション**: 各 SQL は autocommit の単文として実行し、
//!   原子性はデータベースに委ねる。アプリケーション層でのロックや順序付けは
//!   行わない
//! - **採番はデータベース**: `id` と `created_at` は `RETURNING` で挿入と
//!   同じ文から取得する

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tasktracker_domain::task::{Task, TaskId};

use crate::{
   db::{self, DbConfig},
   error::InfraError,
};

/// タスクリポジトリトレイト
///
/// タスクの永続化操作を定義する。
/// インフラ層で具体的な実装を提供し、ハンドラから利用する。
#[async_trait]
pub trait TaskRepository: Send + Sync {
   /// 全タスクを `id` の昇順で取得する
   async fn list_all(&self) -> Result<Vec<Task>, InfraError>;

   /// タスクを 1 件挿入する
   ///
   /// `title` 以外のカラム（`id`, `created_at`）はデータベースが生成し、
   /// 挿入された行をそのまま返す。
   async fn insert(&self, title: &str) -> Result<Task, InfraError>;
}

/// PostgreSQL 実装の TaskRepository
///
/// プールではなく接続パラメータを保持し、メソッド呼び出しごとに
/// 接続を開閉する。
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
   config: DbConfig,
}

impl PostgresTaskRepository {
   /// 新しいリポジトリインスタンスを作成する
   pub fn new(config: DbConfig) -> Self {
      Self { config }
   }
}

/// tasks テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
   id:         i32,
   title:      String,
   created_at: Option<DateTime<Utc>>,
}

impl From<TaskRow> for Task {
   fn from(row: TaskRow) -> Self {
      Task::from_db(TaskId::from_i32(row.id), row.title, row.created_at)
   }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
   async fn list_all(&self) -> Result<Vec<Task>, InfraError> {
      let mut conn = db::connect(&self.config).await?;

      let result = sqlx::query_as::<_, TaskRow>(
         r#"
            SELECT id, title, created_at
            FROM tasks
            ORDER BY id
            "#,
      )
      .fetch_all(&mut conn)
      .await;

      // クエリの成否に関わらず接続を解放する
      db::close(conn).await;

      Ok(result?.into_iter().map(Task::from).collect())
   }

   async fn insert(&self, title: &str) -> Result<Task, InfraError> {
      let mut conn = db::connect(&self.config).await?;

      let result = sqlx::query_as::<_, TaskRow>(
         r#"
            INSERT INTO tasks (title)
            VALUES ($1)
            RETURNING id, title, created_at
            "#,
      )
      .bind(title)
      .fetch_one(&mut conn)
      .await;

      db::close(conn).await;

      Ok(result?.into())
   }
}
