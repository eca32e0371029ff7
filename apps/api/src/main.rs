//! # Task Tracker API サーバー
//!
//! コンテナオーケストレーション演習用の最小タスク管理 API。
//!
//! ## 役割
//!
//! - **タスク管理**: タスクの作成と一覧取得（更新・削除はスコープ外）
//! - **データ永続化**: PostgreSQL への単文クエリ（プール・リトライなし）
//! - **死活監視**: 外部スーパーバイザ向けの liveness エンドポイント
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |----------|------|------|
//! | GET | `/health` | ヘルスチェック（DB 非依存） |
//! | GET | `/api/tasks` | タスク一覧（id 昇順） |
//! | POST | `/api/tasks` | タスク作成 |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `DB_HOST` | No | データベースホスト（デフォルト: `postgres-service`） |
//! | `DB_PORT` | No | データベースポート（デフォルト: `5432`） |
//! | `POSTGRES_DB` | No | データベース名（デフォルト: `tasktracker`） |
//! | `POSTGRES_USER` | No | データベースユーザー（デフォルト: `taskuser`） |
//! | `POSTGRES_PASSWORD` | **Yes** | データベースパスワード（デフォルトなし。未設定でも起動はするが、接続は失敗する） |
//!
//! ## 起動時の失敗ポリシー
//!
//! スキーマ初期化の失敗はログに記録して握りつぶし、起動を続行する
//! （起動時は fail-open、リクエスト処理時は fail-closed）。
//! 依存先が一時的に落ちていた場合の再試行は、外部スーパーバイザによる
//! プロセス再起動に委ねる。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p tasktracker-api
//!
//! # 本番環境
//! POSTGRES_PASSWORD=... DB_HOST=... cargo run -p tasktracker-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use tasktracker_api::{app_builder, config::ApiConfig, handler::TaskState};
use tasktracker_infra::{db, repository::PostgresTaskRepository};
use tasktracker_shared::observability::{LogFormat, init_tracing};
use tokio::net::TcpListener;

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   init_tracing(LogFormat::from_env());

   // 設定読み込み
   let config = ApiConfig::from_env();

   tracing::info!(
      "Task Tracker API サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // スキーマ初期化（fail-open）: 失敗してもプロセスは起動を続行する
   match db::init_schema(&config.db).await {
      Ok(()) => tracing::info!("データベーススキーマを初期化しました"),
      Err(e) => tracing::error!("データベースの初期化に失敗しました: {e}"),
   }

   // 依存コンポーネントを初期化
   let repository = PostgresTaskRepository::new(config.db.clone());
   let state = Arc::new(TaskState { repository });

   // ルーター構築
   let app = app_builder::build_app(state);

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Task Tracker API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
