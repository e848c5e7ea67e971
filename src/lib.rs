//! 製品履歴カタログ CLI
//!
//! カタログの検索・詳細表示・対話閲覧と、台帳からのカタログ生成

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod source;
pub mod asset_check;
pub mod browse;
