//! # ヘルスチェック共通型
//!
//! ヘルスチェックエンドポイントが返すレスポンス型を提供する。
//!
//! ## 用途
//!
//! - **コンテナオーケストレーター**: Kubernetes の liveness probe
//! - **ロードバランサー**: ターゲットへのトラフィック継続判定
//!
//! ハンドラはデータベースへアクセスしないため、レスポンスは常に
//! `{"status":"ok"}` の一形状のみ。

use serde::{Deserialize, Serialize};

/// ヘルスチェックレスポンス
///
/// ワイヤ形式は `{"status":"ok"}` に固定されている。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
   /// 稼働状態（常に `"ok"`）
   pub status: String,
}

impl HealthResponse {
   /// 稼働中を表すレスポンスを作成する
   pub fn ok() -> Self {
      Self {
         status: "ok".to_string(),
      }
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_okのserializeで固定のjson形状にする() {
      let json = serde_json::to_value(HealthResponse::ok()).unwrap();

      assert_eq!(json, serde_json::json!({ "status": "ok" }));
   }

   #[test]
   fn test_jsonデシリアライズが正しく動作する() {
      let response: HealthResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();

      assert_eq!(response, HealthResponse::ok());
   }
}
