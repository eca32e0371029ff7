//! # TaskTracker インフラ層
//!
//! PostgreSQL との接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: リクエスト単位の PostgreSQL 接続管理（プールなし）
//! - **スキーマ初期化**: 起動時の冪等な `CREATE TABLE IF NOT EXISTS`
//! - **リポジトリ実装**: タスクの永続化操作
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! インフラ層は `domain` に依存する。
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL 接続管理とスキーマ初期化
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装

pub mod db;
pub mod error;
pub mod repository;

// テストユーティリティ（test-utils feature でのみ公開）
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::InfraError;
