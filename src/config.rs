use crate::error::{LedgerError, Result};
use product_ledger_common::assets::{AssetBase, DEFAULT_DOCUMENT_BASE, DEFAULT_IMAGE_BASE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// カタログパスを上書きする環境変数
pub const CATALOG_ENV: &str = "LEDGER_CATALOG";

/// 何も指定されていない場合のカタログ
pub const DEFAULT_CATALOG_PATH: &str = "data/products.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub image_base: String,
    pub document_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 設定を読み込む（読めなければ既定値で続行）
    ///
    /// 設定ファイルを書き換えない閲覧系コマンド用。
    pub fn load_or_default() -> Self {
        Self::or_default(Self::load())
    }

    fn or_default(loaded: Result<Self>) -> Self {
        loaded.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "設定ファイルを読めないため既定値を使います");
            Self::default_config()
        })
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LedgerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("product-ledger").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            catalog_path: None,
            image_base: DEFAULT_IMAGE_BASE.into(),
            document_base: DEFAULT_DOCUMENT_BASE.into(),
        }
    }

    /// カタログファイルの決定
    ///
    /// 優先順: コマンドライン > 環境変数 > 設定ファイル > 既定パス
    pub fn resolve_catalog_path(&self, cli_override: Option<&Path>) -> PathBuf {
        let from_env = std::env::var_os(CATALOG_ENV).map(PathBuf::from);
        self.resolve_catalog_path_with(cli_override, from_env)
    }

    fn resolve_catalog_path_with(&self, cli_override: Option<&Path>, from_env: Option<PathBuf>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or(from_env.filter(|p| !p.as_os_str().is_empty()))
            .or_else(|| self.catalog_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH))
    }

    pub fn asset_base(&self) -> AssetBase {
        AssetBase::new(self.image_base.clone(), self.document_base.clone())
    }

    pub fn set_catalog_path(&mut self, path: PathBuf) -> Result<()> {
        self.catalog_path = Some(path);
        self.save()
    }
}
