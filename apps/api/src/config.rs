//! # API サーバー設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//!
//! すべての変数にデフォルト値があり、唯一デフォルトを持たない
//! `POSTGRES_PASSWORD` も `Option` として受けるため、設定の読み込みが
//! 起動を妨げることはない（パスワード未設定の影響は接続試行時に現れる）。

use std::env;

use tasktracker_infra::db::DbConfig;

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
   /// バインドアドレス
   pub host: String,
   /// ポート番号
   pub port: u16,
   /// データベース接続パラメータ
   pub db:   DbConfig,
}

impl ApiConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Self {
      Self {
         host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
         port: env::var("API_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .expect("API_PORT は有効なポート番号である必要があります"),
         db:   DbConfig {
            host:     env::var("DB_HOST").unwrap_or_else(|_| "postgres-service".to_string()),
            port:     env::var("DB_PORT")
               .unwrap_or_else(|_| "5432".to_string())
               .parse()
               .expect("DB_PORT は有効なポート番号である必要があります"),
            database: env::var("POSTGRES_DB").unwrap_or_else(|_| "tasktracker".to_string()),
            user:     env::var("POSTGRES_USER").unwrap_or_else(|_| "taskuser".to_string()),
            password: env::var("POSTGRES_PASSWORD").ok(),
         },
      }
   }
}
