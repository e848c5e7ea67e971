//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Empty product id at index {index}")]
    EmptyId { index: usize },

    #[error("Duplicate product id: {0}")]
    DuplicateId(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
