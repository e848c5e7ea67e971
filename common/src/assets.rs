//! 画像・文書の参照先
//!
//! 製品データ中の `image` と `documents[].url` は相対パスのまま保持し、
//! 表示側がベースパスと結合して使う。

use crate::types::{Document, Product};
use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE_BASE: &str = "images";
pub const DEFAULT_DOCUMENT_BASE: &str = "sop";

/// 画像・文書のベースパス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBase {
    pub image_base: String,
    pub document_base: String,
}

impl Default for AssetBase {
    fn default() -> Self {
        Self {
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            document_base: DEFAULT_DOCUMENT_BASE.to_string(),
        }
    }
}

impl AssetBase {
    pub fn new(image_base: impl Into<String>, document_base: impl Into<String>) -> Self {
        Self {
            image_base: image_base.into(),
            document_base: document_base.into(),
        }
    }

    /// 製品画像の参照先（画像なしはNone）
    pub fn image_url(&self, product: &Product) -> Option<String> {
        product.image().map(|image| join(&self.image_base, image))
    }

    pub fn document_url(&self, document: &Document) -> String {
        join(&self.document_base, &document.url)
    }
}

fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}
