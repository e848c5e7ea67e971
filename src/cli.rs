use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ledger")]
#[command(about = "製品履歴カタログの閲覧・検索・台帳変換ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// カタログJSONファイル（省略時: LEDGER_CATALOG / 設定ファイル / data/products.json）
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 製品を検索して一覧表示
    List {
        /// 検索文字列（品名・品番・車型に部分一致）
        #[arg(short, long, default_value = "")]
        query: String,

        /// カテゴリ（車型）で絞り込み
        #[arg(short, long)]
        category: Option<String>,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// カテゴリ一覧を表示
    Categories {
        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// 製品の詳細を表示
    Show {
        /// 品番
        #[arg(required = true)]
        id: String,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// 対話的にカタログを閲覧
    Browse,

    /// 製品履歴台帳（CSV/Excel）からカタログJSONを生成
    Convert {
        /// 台帳ファイル (.csv / .xlsx / .xls / .ods)
        #[arg(required = true)]
        input: PathBuf,

        /// 出力JSONファイル（デフォルト: data/products.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 読み込むシート名（Excelのみ、省略時は先頭シート）
        #[arg(long)]
        sheet: Option<String>,
    },

    /// 画像・文書ファイルの参照切れと未使用ファイルを確認
    Assets {
        /// 画像フォルダ（省略時は設定の image_base）
        #[arg(long)]
        images: Option<PathBuf>,

        /// 文書フォルダ（省略時は設定の document_base）
        #[arg(long)]
        docs: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のカタログファイルを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
