use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("製品が見つかりません: {0}")]
    ProductNotFound(String),

    #[error("未対応の台帳形式です: {0}（csv / xlsx / xls / ods を指定してください）")]
    UnsupportedFormat(String),

    #[error("台帳の読み込みに失敗: {0}")]
    Spreadsheet(String),

    #[error("素材チェックに失敗: {0}")]
    Assets(String),

    #[error("対話入力エラー: {0}")]
    Interaction(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] product_ledger_common::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
