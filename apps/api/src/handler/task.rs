//! # タスク API ハンドラ
//!
//! タスクの一覧取得と作成のエンドポイントを実装する。
//!
//! どちらのハンドラも リクエスト単位の線形フロー
//! （parse → validate → connect → execute → serialize → release）で完結し、
//! リクエストをまたぐ状態を持たない。

use std::sync::Arc;

use axum::{
   Json,
   body::Bytes,
   extract::State,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tasktracker_domain::task::Task;
use tasktracker_infra::repository::TaskRepository;

use crate::error::ApiError;

/// タスクハンドラーの State
pub struct TaskState<R> {
   pub repository: R,
}

/// タスク作成リクエスト
///
/// `title` の欠落を 400 として自前で検出するため、フィールドは
/// `Option` で受ける。存在確認以外の検証（型・長さ・内容）は行わない。
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
   pub title: Option<String>,
}

/// タスク DTO
#[derive(Debug, Serialize)]
pub struct TaskDto {
   pub id:         i32,
   pub title:      String,
   pub created_at: Option<String>,
}

impl TaskDto {
   fn from_task(task: &Task) -> Self {
      Self {
         id:         task.id().as_i32(),
         title:      task.title().to_string(),
         // タイムスタンプ欠落時は null のまま返す
         created_at: task.created_at().map(|t| t.to_rfc3339()),
      }
   }
}

/// タスク一覧を取得する
///
/// ## エンドポイント
/// GET /api/tasks
///
/// `id` の昇順で全タスクを JSON 配列として返す。
pub async fn list_tasks<R>(State(state): State<Arc<TaskState<R>>>) -> Result<Response, ApiError>
where
   R: TaskRepository,
{
   let tasks = state.repository.list_all().await?;

   let body: Vec<TaskDto> = tasks.iter().map(TaskDto::from_task).collect();

   Ok((StatusCode::OK, Json(body)).into_response())
}

/// タスクを作成する
///
/// ## エンドポイント
/// POST /api/tasks
///
/// ボディ `{"title": ...}` から 1 行を挿入し、データベースが採番した
/// `id` と `created_at` を含むタスクを 201 で返す。
pub async fn create_task<R>(
   State(state): State<Arc<TaskState<R>>>,
   body: Bytes,
) -> Result<Response, ApiError>
where
   R: TaskRepository,
{
   // ボディ不在・JSON 不正・title 欠落はすべて同じ 400 として扱う
   let request: CreateTaskRequest =
      serde_json::from_slice(&body).map_err(|_| ApiError::MissingTitle)?;
   let title = request.title.ok_or(ApiError::MissingTitle)?;

   let task = state.repository.insert(&title).await?;

   Ok((StatusCode::CREATED, Json(TaskDto::from_task(&task))).into_response())
}

#[cfg(test)]
mod tests {
   use chrono::{TimeZone, Utc};
   use pretty_assertions::assert_eq;
   use tasktracker_domain::task::TaskId;

   use super::*;

   #[test]
   fn test_task_dtoはrfc3339の文字列に変換する() {
      let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
      let task = Task::from_db(TaskId::from_i32(1), "Buy milk", Some(created_at));

      let dto = TaskDto::from_task(&task);

      assert_eq!(dto.id, 1);
      assert_eq!(dto.title, "Buy milk");
      assert_eq!(dto.created_at.as_deref(), Some("2024-05-01T12:30:00+00:00"));
   }

   #[test]
   fn test_task_dtoはタイムスタンプ欠落をnullにする() {
      let task = Task::from_db(TaskId::from_i32(2), "Write report", None);

      let json = serde_json::to_value(TaskDto::from_task(&task)).unwrap();

      assert_eq!(json["created_at"], serde_json::Value::Null);
   }
}
