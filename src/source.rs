//! 台帳ファイルの読み込みとカタログJSONの書き出し
//!
//! CSVは共通ライブラリのパーサ、Excel/ODSはcalamineで読む。

use crate::error::{LedgerError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use product_ledger_common::{parse_csv_rows, rows_from_records, LedgerRow, Product};
use std::path::Path;

/// 台帳の形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerFormat {
    Csv,
    Spreadsheet,
}

impl LedgerFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(LedgerFormat::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(LedgerFormat::Spreadsheet),
            _ => Err(LedgerError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// 台帳ファイルを行に読み込む
pub fn read_ledger(path: &Path, sheet: Option<&str>) -> Result<Vec<LedgerRow>> {
    if !path.exists() {
        return Err(LedgerError::FileNotFound(path.display().to_string()));
    }

    match LedgerFormat::from_path(path)? {
        LedgerFormat::Csv => {
            if sheet.is_some() {
                tracing::warn!("CSVではシート指定を無視します");
            }
            let content = std::fs::read_to_string(path)?;
            Ok(parse_csv_rows(&content)?)
        }
        LedgerFormat::Spreadsheet => read_spreadsheet(path, sheet),
    }
}

fn read_spreadsheet(path: &Path, sheet: Option<&str>) -> Result<Vec<LedgerRow>> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| LedgerError::Spreadsheet(e.to_string()))?;

    let range = match sheet {
        Some(name) => workbook.worksheet_range(name),
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| LedgerError::Spreadsheet("シートがありません".into()))?,
    }
    .map_err(|e| LedgerError::Spreadsheet(e.to_string()))?;

    tracing::debug!(rows = range.height(), cols = range.width(), "シート読み込み");

    Ok(rows_from_records(sheet_records(&range)))
}

/// シートをレコード（シート上の行番号, セル列）に変換
///
/// calamineの範囲は最初の非空セルから始まるため、先頭の空行分をずらす。
fn sheet_records(range: &Range<Data>) -> Vec<(usize, Vec<String>)> {
    let offset = range.start().map(|(r, _)| r as usize).unwrap_or(0);
    range
        .rows()
        .enumerate()
        .map(|(i, row)| (offset + i + 1, row.iter().map(cell_to_string).collect()))
        .collect()
}

/// セル値を文字列化（整数値の浮動小数は小数点なしにする）
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// カタログJSONを書き出す
pub fn write_catalog(path: &Path, products: &[Product]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(products)?;
    std::fs::write(path, json)?;
    Ok(())
}
