//! # Task Tracker API ライブラリ
//!
//! API サーバーの構成要素（設定・エラー・ハンドラ・ルーター構築）を公開する。
//! `main.rs` はインフラ初期化とサーバー起動に集中し、`tests/` は
//! [`app_builder::build_app`] で実際のルーターを組み立てて検証する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
