//! 製品の絞り込み
//!
//! - 文字列検索: 品名・品番・カテゴリのいずれかに部分一致（大文字小文字を区別しない）
//! - カテゴリ: 完全一致（大文字小文字を区別する）
//!
//! 両方を満たす製品だけを元の並び順のまま返す。

use crate::types::Product;
use serde::{Deserialize, Serialize};

/// カテゴリ絞り込み条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// 全て表示
    #[default]
    All,
    /// 指定カテゴリのみ
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn as_option(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(selected) => Some(selected),
        }
    }
}

impl From<Option<String>> for CategoryFilter {
    fn from(category: Option<String>) -> Self {
        match category {
            Some(c) => CategoryFilter::Only(c),
            None => CategoryFilter::All,
        }
    }
}

/// 検索文字列が品名・品番・カテゴリのいずれかに含まれるか
///
/// 空文字列は常に一致する。
pub fn matches_query(product: &Product, query: &str) -> bool {
    matches_needle(product, &query.to_lowercase())
}

fn matches_needle(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    [&product.name, &product.id, &product.category]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// 検索文字列とカテゴリで製品を絞り込む（並び順は維持）
pub fn filter_products<'a>(
    products: &'a [Product],
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a Product> {
    let needle = query.to_lowercase();

    products
        .iter()
        .filter(|p| matches_needle(p, &needle) && category.matches(&p.category))
        .collect()
}
