//! # ヘルスチェックハンドラ
//!
//! API サーバーの稼働状態を確認するためのエンドポイント。
//!
//! ## 用途
//!
//! - **コンテナオーケストレーター**: Kubernetes の liveness probe
//! - **外部スーパーバイザ**: トラフィック継続・再起動の判定
//!
//! データベースには一切アクセスしないため、データベースが落ちていても
//! 200 を返し続ける（プロセス自体の生存のみを示す）。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health
//! ```

use axum::Json;
use tasktracker_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// 常に `200 {"status":"ok"}` を返す。失敗する経路は存在しない。
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::ok())
}
