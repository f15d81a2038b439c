//! Job Search Assistant
//!
//! 履歴書アップロード・解析・求人検索のCLIクライアント。
//! 画面状態とデータ型は jobsearch-common を使う。

pub mod assistant;
pub mod cli;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod interactive;
pub mod session_store;
