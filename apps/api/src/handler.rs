//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、永続化はリポジトリトレイトに委譲
//! - リクエスト間で共有する状態は持たない（唯一の共有資源はデータベース）

pub mod health;
pub mod task;

pub use health::health_check;
pub use task::{TaskState, create_task, list_tasks};
