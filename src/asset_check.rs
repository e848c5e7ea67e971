//! 画像・文書ファイルの参照チェック
//!
//! カタログが参照しているのに存在しないファイルと、
//! フォルダにあるのにどの製品からも参照されていないファイルを洗い出す。

use anyhow::{Context, Result};
use product_ledger_common::Catalog;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 参照切れ（品番と解決後のパス）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingAsset {
    pub product_id: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct AssetReport {
    pub missing_images: Vec<MissingAsset>,
    pub missing_documents: Vec<MissingAsset>,
    pub unreferenced: Vec<PathBuf>,
    pub checked: usize,
}

impl AssetReport {
    pub fn is_clean(&self) -> bool {
        self.missing_images.is_empty()
            && self.missing_documents.is_empty()
            && self.unreferenced.is_empty()
    }
}

/// カタログの参照先を画像フォルダ・文書フォルダに対して確認
pub fn check_assets(catalog: &Catalog, image_dir: &Path, doc_dir: &Path) -> Result<AssetReport> {
    let mut report = AssetReport::default();
    let mut referenced = HashSet::new();

    for product in catalog.products() {
        if let Some(image) = product.image() {
            let path = image_dir.join(image);
            report.checked += 1;
            if !path.is_file() {
                report.missing_images.push(MissingAsset {
                    product_id: product.id.clone(),
                    path: path.clone(),
                });
            }
            referenced.insert(path);
        }

        for doc in product.documents.iter().filter(|d| !d.url.is_empty()) {
            let path = doc_dir.join(&doc.url);
            report.checked += 1;
            if !path.is_file() {
                report.missing_documents.push(MissingAsset {
                    product_id: product.id.clone(),
                    path: path.clone(),
                });
            }
            referenced.insert(path);
        }
    }

    let mut dirs = vec![image_dir];
    if doc_dir != image_dir {
        dirs.push(doc_dir);
    }
    for dir in dirs {
        for file in list_files(dir)? {
            if !referenced.contains(&file) {
                report.unreferenced.push(file);
            }
        }
    }
    report.unreferenced.sort();

    Ok(report)
}

/// フォルダ配下のファイル一覧（フォルダが無ければ空）
fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "フォルダがありません");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.with_context(|| format!("scan {}", dir.display()))?;
        if entry.file_type().is_file() && !is_hidden(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
