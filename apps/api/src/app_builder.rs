//! # アプリケーション構築
//!
//! State の注入とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use tasktracker_infra::repository::TaskRepository;
use tower_http::trace::TraceLayer;

use crate::handler::{TaskState, create_task, health_check, list_tasks};

/// ルーターを構築する
///
/// リポジトリ実装に対してジェネリックなため、テストからはモック／スタブを
/// 注入した同じルーターを組み立てられる。
pub fn build_app<R>(state: Arc<TaskState<R>>) -> Router
where
   R: TaskRepository + 'static,
{
   Router::new()
      .route("/health", get(health_check))
      .route("/api/tasks", get(list_tasks::<R>).post(create_task::<R>))
      .with_state(state)
      .layer(TraceLayer::new_for_http())
}
