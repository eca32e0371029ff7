//! # API エラー定義
//!
//! API サーバーのエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラー分類
//!
//! | 種別 | HTTP ステータス | クライアントへの露出 |
//! |------|----------------|----------------------|
//! | [`ApiError::MissingTitle`] | 400 Bad Request | 具体的な文言（欠落フィールド名） |
//! | [`ApiError::Database`] | 500 Internal Server Error | 固定文言 + 運用ヒントのみ。詳細はログに出力 |
//!
//! データベース側の失敗原因（接続・認証・SQL）は区別せず、どれも同じ
//! 汎用レスポンスに変換される。ハンドラレベルの失敗でプロセスは停止しない。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use tasktracker_infra::InfraError;
use tasktracker_shared::ErrorResponse;
use thiserror::Error;

/// API サーバーで発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// リクエストボディが不在・不正、または `title` フィールドが欠落している
   #[error("'title' フィールドがありません")]
   MissingTitle,

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, body) = match &self {
         ApiError::MissingTitle => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::missing_field("title"),
         ),
         ApiError::Database(e) => {
            // 詳細（発生源と SpanTrace）はサーバー側ログのみに残す
            tracing::error!(span_trace = %e.span_trace(), "データベースエラー: {e}");
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::database_error(),
            )
         }
      };

      (status, Json(body)).into_response()
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   async fn body_json(response: Response) -> serde_json::Value {
      let body = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      serde_json::from_slice(&body).unwrap()
   }

   #[tokio::test]
   async fn test_missing_titleは400と具体的な文言を返す() {
      let response = ApiError::MissingTitle.into_response();

      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
      let json = body_json(response).await;
      assert_eq!(json, serde_json::json!({ "error": "Missing 'title' field" }));
   }

   #[tokio::test]
   async fn test_databaseは500と汎用レスポンスを返す() {
      let err = ApiError::Database(InfraError::unexpected("接続失敗"));
      let response = err.into_response();

      assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
      let json = body_json(response).await;
      // 内部の詳細（"接続失敗"）はレスポンスに現れない
      assert_eq!(json["error"], "Database error");
      assert_eq!(
         json["hint"],
         "Check logs with: kubectl logs -n capstone deploy/api"
      );
   }
}
