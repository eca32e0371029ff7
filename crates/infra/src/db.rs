//! # PostgreSQL データベース接続管理
//!
//! リクエスト単位の接続確立と、起動時のスキーマ初期化を行う。
//!
//! ## 設計方針
//!
//! - **接続プールを持たない**: 1 つの作業単位（1 リクエスト / 1 起動時初期化）
//!   につき 1 接続を開き、使い終わったら閉じる。同時接続数はインフライトの
//!   リクエスト数で頭打ちになる
//! - **リトライ・タイムアウトなし**: 接続パラメータは PostgreSQL ドライバの
//!   デフォルトに従う。復旧は外部スーパーバイザ（Kubernetes 等）の再起動に
//!   委ねる
//! - **明示的なクローズ**: すべての経路で接続を解放する。クローズ自体の失敗は
//!   warn ログに留める（所有権により、経路を逃れた接続もドロップ時に解放される）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use tasktracker_infra::db::{self, DbConfig};
//!
//! async fn example(config: &DbConfig) -> Result<(), tasktracker_infra::InfraError> {
//!     let mut conn = db::connect(config).await?;
//!     let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
//!         .fetch_one(&mut conn)
//!         .await
//!         .map_err(tasktracker_infra::InfraError::from)?;
//!     db::close(conn).await;
//!     Ok(())
//! }
//! ```

use sqlx::{Connection, PgConnection, postgres::PgConnectOptions};

use crate::error::InfraError;

/// タスクテーブルの冪等な DDL
///
/// 毎起動時に実行しても安全（既存スキーマには何も起こらない）。
const CREATE_TASKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    created_at TIMESTAMPTZ DEFAULT CURRENT_TIMESTAMP
)
"#;

/// データベース接続パラメータ
///
/// 環境変数からの読み込みは API 層の config が行い、このクレートは
/// 純粋なデータとして受け取る。
///
/// `password` が `None` でもプロセスは起動できる（接続試行時に認証エラーに
/// なるだけで、起動自体は妨げない）。
#[derive(Debug, Clone)]
pub struct DbConfig {
   /// データベースホスト
   pub host:     String,
   /// データベースポート
   pub port:     u16,
   /// データベース名
   pub database: String,
   /// データベースユーザー
   pub user:     String,
   /// データベースパスワード（未設定の場合は認証なしで接続を試みる）
   pub password: Option<String>,
}

impl DbConfig {
   /// sqlx の接続オプションに変換する
   pub fn connect_options(&self) -> PgConnectOptions {
      let options = PgConnectOptions::new()
         .host(&self.host)
         .port(self.port)
         .database(&self.database)
         .username(&self.user);

      match &self.password {
         Some(password) => options.password(password),
         None => options,
      }
   }
}

/// データベース接続を 1 本開く
///
/// 呼び出し元は使用後、成功・失敗いずれの経路でも [`close`] で接続を
/// 解放すること。
///
/// # エラー
///
/// 接続先に到達できない、認証に失敗した、データベース名が存在しない場合に
/// [`InfraError`]（種別 `Database`）を返す。
pub async fn connect(config: &DbConfig) -> Result<PgConnection, InfraError> {
   Ok(PgConnection::connect_with(&config.connect_options()).await?)
}

/// データベース接続を明示的に閉じる
///
/// クローズの失敗は warn ログに記録し、呼び出し元には伝播しない
/// （本来の処理結果を上書きしないため）。
pub async fn close(conn: PgConnection) {
   if let Err(e) = conn.close().await {
      tracing::warn!("データベース接続のクローズに失敗しました: {e}");
   }
}

/// タスクテーブルを初期化する
///
/// 起動時に一度だけ、リスナーのバインド前に呼び出す。DDL は冪等なため
/// 再実行しても安全。
///
/// 失敗はそのまま呼び出し元へ返す。「ログに残して起動を続行する」という
/// fail-open の判断はエントリーポイント側の責務。
pub async fn init_schema(config: &DbConfig) -> Result<(), InfraError> {
   let mut conn = connect(config).await?;
   let result = sqlx::query(CREATE_TASKS_TABLE).execute(&mut conn).await;
   close(conn).await;
   result?;
   Ok(())
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;
   use crate::error::InfraErrorKind;

   fn test_config() -> DbConfig {
      DbConfig {
         host:     "127.0.0.1".to_string(),
         // 到達不能なポート（リスナーが存在しない前提）
         port:     59999,
         database: "tasktracker".to_string(),
         user:     "taskuser".to_string(),
         password: Some("secret".to_string()),
      }
   }

   // ===== connect_options のテスト =====

   #[test]
   fn test_connect_optionsに接続パラメータが反映される() {
      let options = test_config().connect_options();

      assert_eq!(options.get_host(), "127.0.0.1");
      assert_eq!(options.get_port(), 59999);
      assert_eq!(options.get_database(), Some("tasktracker"));
      assert_eq!(options.get_username(), "taskuser");
   }

   #[test]
   fn test_パスワード未設定でもconnect_optionsを構築できる() {
      let config = DbConfig {
         password: None,
         ..test_config()
      };
      let options = config.connect_options();

      assert_eq!(options.get_username(), "taskuser");
   }

   // ===== 到達不能時のテスト =====

   #[tokio::test]
   async fn test_到達不能なホストへのconnectはデータベースエラーを返す() {
      let err = connect(&test_config()).await.expect_err("接続は失敗すること");

      assert!(matches!(err.kind(), InfraErrorKind::Database(_)));
   }

   #[tokio::test]
   async fn test_到達不能なホストへのinit_schemaはerrを返す() {
      // fail-open の判断は呼び出し元が行うため、ここでは Err が返ることのみ確認
      let result = init_schema(&test_config()).await;

      assert!(result.is_err());
   }
}
