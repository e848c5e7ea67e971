//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use product_ledger::error::LedgerError;
use product_ledger::source;
use std::path::Path;
use tempfile::tempdir;

/// 存在しない台帳ファイル
#[test]
fn test_read_nonexistent_ledger() {
    let result = source::read_ledger(Path::new("/nonexistent/path/台帳.csv"), None);
    assert!(matches!(result, Err(LedgerError::FileNotFound(_))));
}

/// 未対応の拡張子
#[test]
fn test_read_unsupported_ledger() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("ledger.txt");
    std::fs::write(&path, "品番,品名\n").unwrap();

    let result = source::read_ledger(&path, None);
    assert!(matches!(result, Err(LedgerError::UnsupportedFormat(_))));
}

/// 閉じていないクォートは共通ライブラリのパースエラーになる
#[test]
fn test_read_broken_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("ledger.csv");
    std::fs::write(&path, "品番,品名\nP1,\"閉じていない\n").unwrap();

    let result = source::read_ledger(&path, None);
    assert!(matches!(
        result,
        Err(LedgerError::Common(product_ledger_common::Error::Parse(_)))
    ));
}

/// 壊れたExcelファイル
#[test]
fn test_read_broken_spreadsheet() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("ledger.xlsx");
    std::fs::write(&path, b"not a zip archive").unwrap();

    let result = source::read_ledger(&path, None);
    assert!(matches!(result, Err(LedgerError::Spreadsheet(_))));
}

/// LedgerErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        LedgerError::Config("テスト設定エラー".to_string()),
        LedgerError::FileNotFound("products.json".to_string()),
        LedgerError::ProductNotFound("G92D1-VU010".to_string()),
        LedgerError::UnsupportedFormat("a.txt".to_string()),
        LedgerError::Spreadsheet("壊れたファイル".to_string()),
        LedgerError::Assets("scan images".to_string()),
        LedgerError::Interaction("入力中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 製品が見つからない場合のメッセージ
#[test]
fn test_product_not_found_message() {
    let err = LedgerError::ProductNotFound("X-999".to_string());
    let display = format!("{}", err);

    assert!(display.contains("製品が見つかりません"));
    assert!(display.contains("X-999"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: LedgerError = io_err.into();

    assert!(matches!(err, LedgerError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: LedgerError = json_err.into();

    assert!(matches!(err, LedgerError::JsonParse(_)));
}

/// common::Errorは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let common_err = product_ledger_common::Error::DuplicateId("P1".to_string());
    let err: LedgerError = common_err.into();

    assert!(matches!(err, LedgerError::Common(_)));
    assert_eq!(format!("{}", err), "Duplicate product id: P1");
}
