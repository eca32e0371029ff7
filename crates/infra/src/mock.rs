//! # テスト用モックリポジトリ
//!
//! ハンドラテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! tasktracker-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! データベースと同じ不変条件（`id` の一意・単調増加、`id` 昇順の一覧）を
//! インメモリで再現する。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use tasktracker_domain::task::{Task, TaskId};

use crate::{error::InfraError, repository::TaskRepository};

/// インメモリ実装の TaskRepository
#[derive(Clone, Default)]
pub struct MockTaskRepository {
   tasks: Arc<Mutex<Vec<Task>>>,
}

impl MockTaskRepository {
   pub fn new() -> Self {
      Self {
         tasks: Arc::new(Mutex::new(Vec::new())),
      }
   }

   /// 保持しているタスク数を返す（挿入有無の検証用）
   pub fn len(&self) -> usize {
      self.tasks.lock().unwrap().len()
   }

   /// タスクを保持していない場合に true を返す
   pub fn is_empty(&self) -> bool {
      self.len() == 0
   }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
   async fn list_all(&self) -> Result<Vec<Task>, InfraError> {
      let mut tasks = self.tasks.lock().unwrap().clone();
      tasks.sort_by_key(Task::id);
      Ok(tasks)
   }

   async fn insert(&self, title: &str) -> Result<Task, InfraError> {
      let mut tasks = self.tasks.lock().unwrap();

      // SERIAL と同じく、直近の id より大きい値を採番する
      let next_id = tasks.last().map_or(1, |t| t.id().as_i32() + 1);
      let task = Task::from_db(TaskId::from_i32(next_id), title, Some(Utc::now()));
      tasks.push(task.clone());

      Ok(task)
   }
}
