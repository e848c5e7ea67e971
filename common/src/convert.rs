//! 製品履歴台帳 → カタログ変換
//!
//! 台帳（CSV / スプレッドシート）の1行をヘッダー名で引き、`Product` に写す。
//! 品番が空の行と、品番が重複する行は読み飛ばして報告する。

use crate::error::{Error, Result};
use crate::types::{Document, Product, ProductSpecs};
use std::collections::{HashMap, HashSet};

/// 台帳の列名
pub mod columns {
    pub const ID: &str = "品番";
    pub const NAME: &str = "品名";
    pub const CATEGORY: &str = "車型";
    pub const IMAGE: &str = "產品圖片";
    pub const WEIGHT: &str = "標準重量(g)";
    pub const MATERIAL: &str = "原料編號";
    pub const MACHINE: &str = "生產機台";
    pub const CT_TIME: &str = "CT時間(秒)";
    pub const MOLD_MAKER: &str = "模具廠商";
    pub const POST_PROCESS: &str = "後加工組立";
    pub const ASSEMBLY_TIME: &str = "組立時間";
    pub const CONTAINER: &str = "出貨容器";
    pub const CAPACITY: &str = "收容數";
    pub const MONTHLY_DEMAND: &str = "月需求量";
    pub const QC_POINTS: &[&str] = &["重點管制1", "重點管制2", "重點管制3"];
    pub const HISTORY: &str = "歷史異常回溯";
    pub const SOP: &str = "作業標準書";
    pub const QC: &str = "檢查手順書";
    pub const CONDITIONS: &str = "成形條件表";
}

const DEFAULT_STATUS: &str = "Production";

/// 台帳の1行（列名 → 値）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerRow {
    /// 元データでの行番号（ヘッダーを1行目とする）
    pub line: usize,
    cells: HashMap<String, String>,
}

impl LedgerRow {
    /// ヘッダー行と値の列から組み立てる（値が足りない列は空扱い）
    pub fn from_record(line: usize, header: &[String], values: Vec<String>) -> Self {
        let cells = header
            .iter()
            .cloned()
            .zip(values.into_iter().chain(std::iter::repeat(String::new())))
            .collect();
        Self { line, cells }
    }

    /// 値を取得（列が無ければ空文字、前後の空白は除く）
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map(|v| v.trim()).unwrap_or("")
    }

    pub fn is_blank(&self) -> bool {
        self.cells.values().all(|v| v.trim().is_empty())
    }
}

/// 読み飛ばした理由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingId,
    DuplicateId(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: SkipReason,
}

/// 変換結果
#[derive(Debug, Clone, Default)]
pub struct ConvertReport {
    pub products: Vec<Product>,
    pub skipped: Vec<SkippedRow>,
}

/// 台帳の行列を製品列に変換
pub fn convert_rows(rows: &[LedgerRow]) -> ConvertReport {
    let mut report = ConvertReport::default();
    let mut seen = HashSet::new();

    for row in rows.iter().filter(|r| !r.is_blank()) {
        let Some(product) = product_from_row(row) else {
            report.skipped.push(SkippedRow {
                line: row.line,
                reason: SkipReason::MissingId,
            });
            continue;
        };

        if !seen.insert(product.id.clone()) {
            report.skipped.push(SkippedRow {
                line: row.line,
                reason: SkipReason::DuplicateId(product.id),
            });
            continue;
        }

        report.products.push(product);
    }

    report
}

/// 1行を製品に変換（品番が空ならNone）
pub fn product_from_row(row: &LedgerRow) -> Option<Product> {
    use columns::*;

    let id = row.get(ID);
    if id.is_empty() {
        return None;
    }

    let name = row.get(NAME);
    let category = row.get(CATEGORY);
    let material = row.get(MATERIAL);

    let specs = ProductSpecs {
        weight: present(row.get(WEIGHT)),
        material: present(material),
        machine: present(row.get(MACHINE)),
        ct_time: present(row.get(CT_TIME)),
        mold_maker: present(row.get(MOLD_MAKER)),
        post_process: present(row.get(POST_PROCESS)),
        assembly_time: present(row.get(ASSEMBLY_TIME)),
        container: present(row.get(CONTAINER)),
        capacity: present(row.get(CAPACITY)),
        monthly_demand: present(row.get(MONTHLY_DEMAND)),
        ..Default::default()
    };

    let qc_points = QC_POINTS
        .iter()
        .map(|column| row.get(column))
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect();

    let documents = [("SOP", SOP), ("QC", QC), ("Conditions", CONDITIONS)]
        .iter()
        .filter(|(_, column)| !row.get(column).is_empty())
        .map(|(doc_type, column)| Document {
            doc_type: doc_type.to_string(),
            url: row.get(column).to_string(),
        })
        .collect();

    let tags = [category, material]
        .iter()
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect();

    Some(Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: format!("{} for {}", name, category),
        image: row.get(IMAGE).to_string(),
        status: DEFAULT_STATUS.to_string(),
        specs,
        qc_points,
        history: row.get(HISTORY).to_string(),
        documents,
        tags,
    })
}

fn present(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// ヘッダー付きCSVを行に分解
///
/// 先頭のBOMを除き、ダブルクォート内のカンマ・改行と `""` エスケープに対応する。
pub fn parse_csv_rows(content: &str) -> Result<Vec<LedgerRow>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let records = parse_csv_records(content)?;
    Ok(rows_from_records(records))
}

/// 先頭レコードをヘッダーとして、残りを行に組み立てる
///
/// レコードは（元データでの行番号, フィールド列）。
pub fn rows_from_records<I>(records: I) -> Vec<LedgerRow>
where
    I: IntoIterator<Item = (usize, Vec<String>)>,
{
    let mut records = records.into_iter();
    let Some((_, header)) = records.next() else {
        return Vec::new();
    };
    let header: Vec<String> = header.into_iter().map(|h| h.trim().to_string()).collect();

    records
        .map(|(line, values)| LedgerRow::from_record(line, &header, values))
        .collect()
}

/// CSVをレコード（開始行番号, フィールド列）に分解
fn parse_csv_records(content: &str) -> Result<Vec<(usize, Vec<String>)>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\r' if chars.peek() == Some(&'\n') => {}
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            // 引用符はフィールド先頭でのみ特別扱い（途中の " はインチ記号など）
            '"' if field.is_empty() => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                records.push((record_line, std::mem::take(&mut fields)));
                line += 1;
                record_line = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(Error::Parse(format!(
            "unterminated quoted field starting at line {}",
            record_line
        )));
    }

    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        records.push((record_line, fields));
    }

    Ok(records)
}
