use clap::Parser;
use product_ledger::{asset_check, browse, cli, config, error, logging, render, source};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::{LedgerError, Result};
use product_ledger_common::{convert_rows, Catalog, CategoryFilter, SkipReason};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    // 設定を書き換える config コマンドだけは読み込み失敗をエラーにする
    let config = match cli.command {
        Commands::Config { .. } => Config::load()?,
        _ => Config::load_or_default(),
    };

    match cli.command {
        Commands::List { query, category, format } => {
            let catalog = load_catalog(&config, cli.catalog.as_deref())?;

            if let Some(c) = category.as_deref() {
                if !catalog.has_category(c) {
                    tracing::warn!(category = c, "カタログに存在しないカテゴリです");
                }
            }

            let filter = CategoryFilter::from(category);
            let products = catalog.filter(&query, &filter);
            tracing::debug!(query = %query, matched = products.len(), "絞り込み");

            match format {
                OutputFormat::Text => print!("{}", render::render_list(&products)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&products)?),
            }
        }

        Commands::Categories { format } => {
            let catalog = load_catalog(&config, cli.catalog.as_deref())?;

            match format {
                OutputFormat::Text => print!(
                    "{}",
                    render::render_categories(&catalog.category_counts(), catalog.len())
                ),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(catalog.categories())?)
                }
            }
        }

        Commands::Show { id, format } => {
            let catalog = load_catalog(&config, cli.catalog.as_deref())?;
            let product = catalog
                .get(&id)
                .ok_or_else(|| LedgerError::ProductNotFound(id.clone()))?;

            match format {
                OutputFormat::Text => print!("{}", render::render_detail(product, &config.asset_base())),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(product)?),
            }
        }

        Commands::Browse => {
            let catalog = load_catalog(&config, cli.catalog.as_deref())?;
            browse::run_browse(&catalog, &config.asset_base())?;
        }

        Commands::Convert { input, output, sheet } => {
            println!("📄 product-ledger - 台帳変換\n");

            println!("[1/2] 台帳を読み込み中...");
            let rows = source::read_ledger(&input, sheet.as_deref())?;
            println!("✔ {}行を検出\n", rows.len());

            let report = convert_rows(&rows);
            for skipped in &report.skipped {
                match &skipped.reason {
                    SkipReason::MissingId => {
                        println!("⚠ {}行目: 品番が空のためスキップ", skipped.line)
                    }
                    SkipReason::DuplicateId(id) => {
                        println!("⚠ {}行目: 品番 {} が重複しているためスキップ", skipped.line, id)
                    }
                }
            }

            // 書き出す前にカタログとして読めることを確認
            let catalog = Catalog::new(report.products)?;

            println!("[2/2] カタログを保存中...");
            let output = output.unwrap_or_else(|| PathBuf::from(config::DEFAULT_CATALOG_PATH));
            source::write_catalog(&output, catalog.products())?;
            println!(
                "✔ {}件の製品（{}カテゴリ）を保存: {}",
                catalog.len(),
                catalog.categories().len(),
                output.display()
            );

            println!("\n✅ 変換完了");
        }

        Commands::Assets { images, docs } => {
            let catalog = load_catalog(&config, cli.catalog.as_deref())?;
            let image_dir = images.unwrap_or_else(|| PathBuf::from(&config.image_base));
            let doc_dir = docs.unwrap_or_else(|| PathBuf::from(&config.document_base));

            let report = asset_check::check_assets(&catalog, &image_dir, &doc_dir)
                .map_err(|e| LedgerError::Assets(format!("{:#}", e)))?;

            println!("確認したファイル参照: {}件", report.checked);
            for missing in report.missing_images.iter().chain(&report.missing_documents) {
                println!("⚠ {}: {} が見つかりません", missing.product_id, missing.path.display());
            }
            for path in &report.unreferenced {
                println!("- 未使用: {}", path.display());
            }
            if report.is_clean() {
                println!("✔ 参照切れ・未使用ファイルはありません");
            }
        }

        Commands::Config { set_catalog, show } => {
            let mut config = config;

            if let Some(path) = set_catalog {
                config.set_catalog_path(path)?;
                println!("✔ カタログファイルを設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!(
                    "  カタログ: {}",
                    config.resolve_catalog_path(cli.catalog.as_deref()).display()
                );
                println!("  画像フォルダ: {}", config.image_base);
                println!("  文書フォルダ: {}", config.document_base);
            }
        }
    }

    Ok(())
}

fn load_catalog(config: &Config, cli_override: Option<&Path>) -> Result<Catalog> {
    let path = config.resolve_catalog_path(cli_override);
    if !path.exists() {
        return Err(LedgerError::FileNotFound(path.display().to_string()));
    }

    let catalog = Catalog::from_path(&path)?;
    tracing::debug!(
        path = %path.display(),
        products = catalog.len(),
        categories = catalog.categories().len(),
        "カタログ読み込み"
    );
    Ok(catalog)
}
