//! # エラーレスポンス
//!
//! クライアントに返すエラーのワイヤ形式 `{ "error": ..., "hint": ... }` を
//! 提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は API 層の責務（shared に axum 依存を入れない）
//! - データベースエラーは原因（接続・認証・SQL）を区別せず、固定の
//!   文言と運用ヒントだけを返す。内部の詳細はログにのみ出力される

use serde::{Deserialize, Serialize};

/// データベースエラー時にクライアントへ返す運用ヒント
///
/// コンテナオーケストレーション演習用のため、ヒントは kubectl での
/// ログ確認手順を指す。
const DATABASE_HINT: &str = "Check logs with: kubectl logs -n capstone deploy/api";

/// エラーレスポンス
///
/// すべてのエラー系エンドポイントで統一されたワイヤ形式。
/// `hint` は運用上の対処方法がある場合のみ含まれる（`None` なら
/// JSON にフィールド自体が現れない）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   pub error: String,
   #[serde(skip_serializing_if = "Option::is_none")]
   pub hint:  Option<String>,
}

impl ErrorResponse {
   /// 汎用コンストラクタ（ヒントなし）
   pub fn new(error: impl Into<String>) -> Self {
      Self {
         error: error.into(),
         hint:  None,
      }
   }

   /// 必須フィールドの欠落を表す 400 用レスポンス
   ///
   /// 文言はワイヤ契約の一部（例: `Missing 'title' field`）。
   pub fn missing_field(field: &str) -> Self {
      Self::new(format!("Missing '{field}' field"))
   }

   /// データベースエラーを表す 500 用レスポンス
   ///
   /// 文言とヒントは固定値（内部情報を漏らさないため）。
   pub fn database_error() -> Self {
      Self {
         error: "Database error".to_string(),
         hint:  Some(DATABASE_HINT.to_string()),
      }
   }
}
