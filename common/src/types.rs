//! 製品カタログの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Product: カタログの1製品（静的データから読み込み、以後変更しない）
//! - ProductSpecs: 重量・原料・機台などの仕様値
//! - Document: 作業標準書などの関連文書

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 値が無い項目の表示用プレースホルダ
pub const PLACEHOLDER: &str = "-";

/// カード表示するタグの最大数
const TAG_PREVIEW_LIMIT: usize = 3;

/// 製品
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// 絞り込み用のカテゴリ（車型）。空の場合はカテゴリ一覧に出ない
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub description: String,

    /// 画像ファイル名（相対パス）。空なら画像なし
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub specs: ProductSpecs,

    /// 重点管制項目
    #[serde(default)]
    pub qc_points: Vec<String>,

    /// 歴史異常回溯
    #[serde(default)]
    pub history: String,

    #[serde(default)]
    pub documents: Vec<Document>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// 画像ファイル名（空の場合はNone）
    pub fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    /// 履歴テキスト（空の場合はNone）
    pub fn history(&self) -> Option<&str> {
        non_empty(&self.history)
    }

    /// カードに表示する先頭のタグ
    pub fn tag_preview(&self) -> &[String] {
        let end = self.tags.len().min(TAG_PREVIEW_LIMIT);
        &self.tags[..end]
    }
}

/// 関連文書
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// 文書種別（SOP, QC, Conditions など）
    #[serde(rename = "type", default)]
    pub doc_type: String,

    /// 文書ファイル名（相対パス）
    #[serde(default)]
    pub url: String,
}

/// 製品仕様
///
/// 既知のキーは個別フィールド、それ以外は `extra` に保持する。
/// 値が無い・空のフィールドは表示時にプレースホルダになる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductSpecs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,         // 標準重量(g)

    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,       // 原料編號

    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine: Option<String>,        // 生產機台

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ct_time: Option<String>,        // CT時間(秒)

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mold_maker: Option<String>,     // 模具廠商

    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_process: Option<String>,   // 後加工組立

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly_time: Option<String>,  // 組立時間

    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,      // 出貨容器

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,       // 收容數

    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_demand: Option<String>, // 月需求量

    /// 既知キー以外の仕様
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// 仕様キーと表示ラベル（詳細表示の並び順）
pub const SPEC_LABELS: &[(&str, &str)] = &[
    ("weight", "重量"),
    ("material", "原料"),
    ("machine", "機台"),
    ("mold_maker", "模具廠商"),
    ("ct_time", "CT時間"),
    ("post_process", "後加工"),
    ("customer", "客戶"),
    ("assembly_time", "組立時間"),
    ("container", "出貨容器"),
    ("capacity", "收容數"),
    ("monthly_demand", "月需求量"),
];

impl ProductSpecs {
    /// キー名で仕様値を取得（空文字はNone）
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "weight" => self.weight.as_deref(),
            "material" => self.material.as_deref(),
            "machine" => self.machine.as_deref(),
            "ct_time" => self.ct_time.as_deref(),
            "mold_maker" => self.mold_maker.as_deref(),
            "post_process" => self.post_process.as_deref(),
            "customer" => self.customer.as_deref(),
            "assembly_time" => self.assembly_time.as_deref(),
            "container" => self.container.as_deref(),
            "capacity" => self.capacity.as_deref(),
            "monthly_demand" => self.monthly_demand.as_deref(),
            other => self.extra.get(other).map(String::as_str),
        };
        value.and_then(non_empty)
    }

    /// 表示用の値（無ければプレースホルダ）
    pub fn display(&self, key: &str) -> &str {
        self.get(key).unwrap_or(PLACEHOLDER)
    }

    /// 既知キーを (ラベル, 表示値) で列挙し、続けて extra を列挙
    pub fn rows(&self) -> Vec<(&str, &str)> {
        let mut rows: Vec<(&str, &str)> = SPEC_LABELS
            .iter()
            .map(|&(key, label)| (label, self.display(key)))
            .collect();
        rows.extend(
            self.extra
                .iter()
                .map(|(key, value)| (key.as_str(), non_empty(value).unwrap_or(PLACEHOLDER))),
        );
        rows
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"{
        "id": "G92D1-VU010",
        "name": "飾板",
        "category": "G92D1",
        "description": "飾板 for G92D1",
        "image": "G92D1-VU010.jpg",
        "status": "Production",
        "specs": {
            "weight": "35.2",
            "material": "PP-T20",
            "machine": "350T",
            "ct_time": "45",
            "mold_maker": "",
            "color_code": "NH-731P"
        },
        "qc_points": ["毛邊", "縮水"],
        "history": "",
        "documents": [{"type": "SOP", "url": "G92D1-VU010_qc1.pdf"}],
        "tags": ["G92D1", "PP-T20"]
    }"#;

    #[test]
    fn test_product_deserialize() {
        let product: Product = serde_json::from_str(SAMPLE_JSON).expect("デシリアライズ失敗");
        assert_eq!(product.id, "G92D1-VU010");
        assert_eq!(product.category, "G92D1");
        assert_eq!(product.specs.weight.as_deref(), Some("35.2"));
        assert_eq!(product.documents[0].doc_type, "SOP");
        assert_eq!(product.qc_points.len(), 2);
        assert_eq!(product.specs.extra.get("color_code").map(String::as_str), Some("NH-731P"));
    }

    #[test]
    fn test_product_missing_fields_default() {
        let product: Product = serde_json::from_str(r#"{"id": "P1"}"#).expect("デシリアライズ失敗");
        assert_eq!(product.name, "");
        assert!(product.image().is_none());
        assert!(product.history().is_none());
        assert!(product.documents.is_empty());
        assert_eq!(product.specs, ProductSpecs::default());
    }

    #[test]
    fn test_document_serializes_type_key() {
        let doc = Document {
            doc_type: "QC".to_string(),
            url: "qc.pdf".to_string(),
        };
        let json = serde_json::to_string(&doc).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"type":"QC","url":"qc.pdf"}"#);
    }

    #[test]
    fn test_specs_placeholder_for_missing_and_empty() {
        let product: Product = serde_json::from_str(SAMPLE_JSON).unwrap();
        assert_eq!(product.specs.display("weight"), "35.2");
        // 空文字
        assert_eq!(product.specs.display("mold_maker"), PLACEHOLDER);
        // キー自体が無い
        assert_eq!(product.specs.display("container"), PLACEHOLDER);
        assert_eq!(product.specs.display("unknown"), PLACEHOLDER);
    }

    #[test]
    fn test_specs_rows_include_extra() {
        let product: Product = serde_json::from_str(SAMPLE_JSON).unwrap();
        let rows = product.specs.rows();
        assert_eq!(rows[0], ("重量", "35.2"));
        assert!(rows.contains(&("color_code", "NH-731P")));
        assert_eq!(rows.len(), SPEC_LABELS.len() + 1);
    }

    #[test]
    fn test_specs_skip_none_on_serialize() {
        let specs = ProductSpecs {
            weight: Some("10".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&specs).unwrap();
        assert_eq!(json, r#"{"weight":"10"}"#);
    }

    #[test]
    fn test_tag_preview_limits_to_three() {
        let product = Product {
            id: "P1".to_string(),
            tags: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            ..Default::default()
        };
        assert_eq!(product.tag_preview(), &["a", "b", "c"]);

        let short = Product {
            id: "P2".to_string(),
            tags: vec!["x".into()],
            ..Default::default()
        };
        assert_eq!(short.tag_preview().len(), 1);
    }
}
