//! 対話式カタログ閲覧
//!
//! 入力のたびに表示状態を更新し、絞り込み結果を出し直す。
//! 製品を開くと詳細を表示し、Enterで閉じて一覧に戻る。

use crate::error::{LedgerError, Result};
use crate::render;
use dialoguer::{Input, Select};
use product_ledger_common::{Action, AssetBase, Catalog, CatalogBrowser, CategoryFilter};

const ALL_LABEL: &str = "全て";
const HELP: &str = "操作: [文字列]検索 [:番号]詳細 [:c]カテゴリ [:x]検索解除 [?]ヘルプ [:q]終了";

/// 閲覧中の入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// 検索文字列を置き換える
    Query(String),
    /// 検索文字列を消す
    ClearQuery,
    /// カテゴリを選び直す
    PickCategory,
    /// 一覧の番号（1始まり）で詳細を開く
    Open(usize),
    Help,
    Quit,
}

/// 入力行をコマンドに解釈
pub fn parse_command(input: &str) -> BrowseCommand {
    match input.trim() {
        ":q" | ":quit" => BrowseCommand::Quit,
        ":c" => BrowseCommand::PickCategory,
        ":x" => BrowseCommand::ClearQuery,
        "?" | ":h" => BrowseCommand::Help,
        trimmed => match trimmed.strip_prefix(':').map(str::parse::<usize>) {
            Some(Ok(n)) => BrowseCommand::Open(n),
            _ => BrowseCommand::Query(input.to_string()),
        },
    }
}

/// 現在の状態の見出し
pub fn status_line(browser: &CatalogBrowser<'_>, shown: usize) -> String {
    let category = match browser.state().category() {
        CategoryFilter::All => ALL_LABEL,
        CategoryFilter::Only(c) => c.as_str(),
    };
    let query = browser.state().query();
    if query.is_empty() {
        format!("[{}] {}/{}件", category, shown, browser.catalog().len())
    } else {
        format!("[{}] \"{}\" {}/{}件", category, query, shown, browser.catalog().len())
    }
}

/// 対話閲覧を開始
pub fn run_browse(catalog: &Catalog, assets: &AssetBase) -> Result<()> {
    let mut browser = CatalogBrowser::new(catalog);

    println!("📦 製品履歴カタログ ({}件)", catalog.len());
    println!("{}\n", HELP);

    loop {
        let filtered = browser.filtered();
        println!("{}", status_line(&browser, filtered.len()));
        print!("{}", render::render_list(&filtered));

        let input: String = Input::new()
            .with_prompt("検索")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| LedgerError::Interaction(e.to_string()))?;

        match parse_command(&input) {
            BrowseCommand::Query(query) => browser.apply(Action::SetQuery(query)),
            BrowseCommand::ClearQuery => browser.apply(Action::SetQuery(String::new())),
            BrowseCommand::PickCategory => {
                let category = pick_category(&browser)?;
                browser.apply(Action::SetCategory(category));
            }
            BrowseCommand::Open(n) => {
                let Some(product) = n.checked_sub(1).and_then(|i| filtered.get(i)) else {
                    println!("⚠ 番号は 1〜{} で指定してください\n", filtered.len());
                    continue;
                };
                browser.apply(Action::OpenProduct(product.id.clone()));
                show_selected(&mut browser, assets)?;
            }
            BrowseCommand::Help => println!("{}", HELP),
            BrowseCommand::Quit => break,
        }
        println!();
    }

    Ok(())
}

fn pick_category(browser: &CatalogBrowser<'_>) -> Result<Option<String>> {
    let categories = browser.categories();
    let mut items = Vec::with_capacity(categories.len() + 1);
    items.push(ALL_LABEL.to_string());
    items.extend(categories.iter().cloned());

    let current = browser
        .state()
        .category()
        .as_option()
        .and_then(|c| categories.iter().position(|x| x == c))
        .map(|i| i + 1)
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("カテゴリ")
        .items(&items)
        .default(current)
        .interact()
        .map_err(|e| LedgerError::Interaction(e.to_string()))?;

    tracing::debug!(choice, "カテゴリ選択");
    // 0番は「全て」
    if choice == 0 {
        Ok(None)
    } else {
        Ok(categories.get(choice - 1).cloned())
    }
}

fn show_selected(browser: &mut CatalogBrowser<'_>, assets: &AssetBase) -> Result<()> {
    if let Some(product) = browser.selected() {
        println!("\n{}", render::render_detail(product, assets));
        let _: String = Input::new()
            .with_prompt("Enterで閉じる")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| LedgerError::Interaction(e.to_string()))?;
    }
    browser.apply(Action::Close);
    Ok(())
}
