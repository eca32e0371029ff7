//! # タスク
//!
//! タスクトラッカーが永続化する唯一のエンティティ。
//!
//! ## 設計判断
//!
//! ### Newtype パターンの採用
//!
//! `TaskId` は `i32` をラップした Newtype である。これにより:
//!
//! - 型安全性: 生の `i32` とタスク ID をコンパイラが区別できる
//! - ゼロコスト: 実行時のオーバーヘッドなし
//!
//! ### ID はデータベースが採番する
//!
//! `TaskId` はデータベースの `SERIAL` カラムが生成した値からのみ作られる。
//! アプリケーション側に ID の生成手段はなく、`new()` は存在しない。
//! 採番された ID は一意かつ単調増加で、以後変更されない。
//!
//! ## 使用例
//!
//! ```rust
//! use tasktracker_domain::task::{Task, TaskId};
//!
//! // データベースから取得した行を復元する
//! let task = Task::from_db(TaskId::from_i32(1), "Buy milk", None);
//! assert_eq!(task.title(), "Buy milk");
//! ```

use chrono::{DateTime, Utc};
use derive_more::Display;

/// タスクの一意識別子
///
/// データベースの `SERIAL` 主キーに対応する。値の採番はデータベースのみが
/// 行い、アプリケーション側では既存の値の復元しかできない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{_0}")]
pub struct TaskId(i32);

impl TaskId {
   /// データベースから取得した値からタスク ID を復元する
   pub fn from_i32(value: i32) -> Self {
      Self(value)
   }

   /// 内部の整数値を取得する
   ///
   /// sqlx のバインドパラメータや DTO への変換時に使用する。
   pub fn as_i32(self) -> i32 {
      self.0
   }
}

// =========================================================================
// Task（タスクエンティティ）
// =========================================================================

/// タスクエンティティ
///
/// 作成と参照のみのライフサイクルを持つ。更新・削除は定義されず、
/// 一度作成されたタスクは不変である。
///
/// # 不変条件
///
/// - `id` はデータベースが採番した一意の値
/// - `title` は非 null（内容の検証は行わない。空文字列も許容する）
/// - `created_at` は挿入時にデータベースが一度だけ設定する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
   id:         TaskId,
   title:      String,
   created_at: Option<DateTime<Utc>>,
}

impl Task {
   /// データベースの行からタスクを復元する
   ///
   /// エンティティを生成する唯一の経路。`created_at` はカラム定義上
   /// nullable のため `Option` で受ける。
   pub fn from_db(
      id: TaskId,
      title: impl Into<String>,
      created_at: Option<DateTime<Utc>>,
   ) -> Self {
      Self {
         id,
         title: title.into(),
         created_at,
      }
   }

   /// タスク ID を取得する
   pub fn id(&self) -> TaskId {
      self.id
   }

   /// タイトルを取得する
   pub fn title(&self) -> &str {
      &self.title
   }

   /// 作成日時を取得する
   pub fn created_at(&self) -> Option<DateTime<Utc>> {
      self.created_at
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   // TaskId のテスト

   #[test]
   fn test_タスクidは整数値を保持する() {
      let id = TaskId::from_i32(42);
      assert_eq!(id.as_i32(), 42);
   }

   #[test]
   fn test_タスクidは数値順に比較できる() {
      assert!(TaskId::from_i32(1) < TaskId::from_i32(2));
      assert!(TaskId::from_i32(10) > TaskId::from_i32(9));
   }

   #[test]
   fn test_タスクidのdisplayは整数表記になる() {
      assert_eq!(TaskId::from_i32(7).to_string(), "7");
   }

   // Task のテスト

   #[test]
   fn test_from_dbでタスクを復元できる() {
      let created_at = Utc::now();
      let task = Task::from_db(TaskId::from_i32(1), "Buy milk", Some(created_at));

      assert_eq!(task.id(), TaskId::from_i32(1));
      assert_eq!(task.title(), "Buy milk");
      assert_eq!(task.created_at(), Some(created_at));
   }

   #[test]
   fn test_タイトルは空文字列も許容する() {
      // タイトルの検証は存在確認のみ（API 層の責務）。内容は検証しない
      let task = Task::from_db(TaskId::from_i32(1), "", None);
      assert_eq!(task.title(), "");
   }

   #[test]
   fn test_created_atは欠落を表現できる() {
      let task = Task::from_db(TaskId::from_i32(1), "Write report", None);
      assert_eq!(task.created_at(), None);
   }
}
