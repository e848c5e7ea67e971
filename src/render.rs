//! 端末向けの表示整形
//!
//! 一覧（カード）・詳細（モーダル相当）・カテゴリ一覧を文字列にする。

use product_ledger_common::{AssetBase, Product};
use std::fmt::Write;

pub const NO_IMAGE: &str = "No Image";
pub const NO_MATCHES: &str = "該当する製品が見つかりません";
pub const NO_MATCHES_HINT: &str = "他のキーワードを試すか、絞り込みを解除してください";
pub const NO_DOCUMENTS: &str = "関連文書なし";

/// カード1枚分の1行表示
pub fn card_line(product: &Product) -> String {
    let mut line = format!("{}  {}", product.id, product.name);
    if !product.category.is_empty() {
        let _ = write!(line, "  [{}]", product.category);
    }
    for tag in product.tag_preview() {
        let _ = write!(line, "  #{}", tag);
    }
    line
}

/// 一覧表示（番号付き）。空なら該当なしメッセージ
pub fn render_list(products: &[&Product]) -> String {
    if products.is_empty() {
        return format!("{}\n{}\n", NO_MATCHES, NO_MATCHES_HINT);
    }

    let width = products.len().to_string().len();
    let mut out = String::new();
    for (i, product) in products.iter().enumerate() {
        let _ = writeln!(out, "{:>width$}) {}", i + 1, card_line(product), width = width);
    }
    out
}

/// 詳細表示
pub fn render_detail(product: &Product, assets: &AssetBase) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", product.name);
    let _ = writeln!(out, "{}", product.id);
    if !product.category.is_empty() {
        let _ = writeln!(out, "車型: {}", product.category);
    }
    if !product.status.is_empty() {
        let _ = writeln!(out, "状態: {}", product.status);
    }
    if !product.description.is_empty() {
        let _ = writeln!(out, "{}", product.description);
    }

    let image = assets.image_url(product).unwrap_or_else(|| NO_IMAGE.to_string());
    let _ = writeln!(out, "画像: {}", image);

    out.push_str("\n[仕様]\n");
    let rows = product.specs.rows();
    let label_width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    for (label, value) in rows {
        let pad = label_width - label.chars().count();
        let _ = writeln!(out, "  {}{}  {}", label, " ".repeat(pad), value);
    }

    if !product.qc_points.is_empty() {
        out.push_str("\n[重点管制]\n");
        for point in &product.qc_points {
            let _ = writeln!(out, "  - {}", point);
        }
    }

    if let Some(history) = product.history() {
        out.push_str("\n[歴史異常回溯]\n");
        for line in history.lines() {
            let _ = writeln!(out, "  {}", line);
        }
    }

    out.push_str("\n[関連文書]\n");
    if product.documents.is_empty() {
        let _ = writeln!(out, "  {}", NO_DOCUMENTS);
    } else {
        for doc in &product.documents {
            let _ = writeln!(out, "  {}: {}", doc.doc_type, assets.document_url(doc));
        }
    }

    if !product.tags.is_empty() {
        let _ = writeln!(out, "\nタグ: {}", product.tags.join(", "));
    }

    out
}

/// カテゴリ一覧（製品数付き）
pub fn render_categories(counts: &[(&str, usize)], total: usize) -> String {
    let mut out = format!("全て ({})\n", total);
    for (category, count) in counts {
        let _ = writeln!(out, "{} ({})", category, count);
    }
    out
}
