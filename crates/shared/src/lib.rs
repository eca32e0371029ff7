//! # TaskTracker 共有ユーティリティ
//!
//! API サーバーのワイヤ形式（レスポンス型）とログ初期化を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - レスポンス型は純粋なデータ構造（`Serialize` のみ）とし、
//!   axum への変換は API 層の責務とする
//! - 外部クレートへの依存は最小限に抑える（ログ初期化は
//!   `observability` feature でオプトイン）

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
