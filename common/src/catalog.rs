//! 製品カタログ
//!
//! 起動時に一度だけ読み込み、以後は読み取り専用で共有する。
//! カテゴリ一覧は読み込み時に一度だけ算出する。

use crate::error::{Error, Result};
use crate::filter::{filter_products, CategoryFilter};
use crate::types::Product;
use std::collections::HashSet;
use std::path::Path;

/// 読み取り専用の製品カタログ
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
}

impl Catalog {
    /// 製品列からカタログを構築
    ///
    /// idが空、またはidが重複する製品があればエラー。
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::new();
        for (index, product) in products.iter().enumerate() {
            if product.id.is_empty() {
                return Err(Error::EmptyId { index });
            }
            if !seen.insert(product.id.as_str()) {
                return Err(Error::DuplicateId(product.id.clone()));
            }
        }

        let categories = derive_categories(&products);
        Ok(Self { products, categories })
    }

    /// JSON文字列（製品の配列）から読み込み
    pub fn from_json_str(content: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(content)?;
        Self::new(products)
    }

    /// JSONファイルから読み込み
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 全製品（元の並び順）
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// カテゴリ一覧（初出順・空を除く・重複なし）
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// idで製品を検索
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// 検索文字列とカテゴリで絞り込み
    pub fn filter(&self, query: &str, category: &CategoryFilter) -> Vec<&Product> {
        filter_products(&self.products, query, category)
    }

    /// カテゴリごとの製品数（カテゴリ一覧の順）
    pub fn category_counts(&self) -> Vec<(&str, usize)> {
        self.categories
            .iter()
            .map(|c| {
                let count = self.products.iter().filter(|p| &p.category == c).count();
                (c.as_str(), count)
            })
            .collect()
    }
}

/// 製品列から空でないカテゴリを初出順・重複なしで取り出す
pub fn derive_categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| !p.category.is_empty())
        .filter_map(|p| {
            if seen.insert(p.category.as_str()) {
                Some(p.category.clone())
            } else {
                None
            }
        })
        .collect()
}
