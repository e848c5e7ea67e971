//! 同梱カタログの統合テスト
//!
//! data/products.json を読み込み、絞り込みと選択状態を検証

use product_ledger::render;
use product_ledger_common::{
    Action, AssetBase, Catalog, CatalogBrowser, CategoryFilter, ModalState, Product,
};
use std::path::Path;

fn bundled() -> Catalog {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/products.json");
    Catalog::from_path(&path).expect("同梱カタログの読み込み失敗")
}

fn ids(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.id.clone()).collect()
}

#[test]
fn test_bundled_catalog_loads() {
    let catalog = bundled();
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.categories(), &["G92D1", "T20A", "3HA"]);
}

#[test]
fn test_product_without_category_is_searchable() {
    let catalog = bundled();
    let found = catalog.filter("線束", &CategoryFilter::All);
    assert_eq!(ids(&found), vec!["CL-0007"]);

    // カテゴリ指定中は出てこない
    let found = catalog.filter("線束", &CategoryFilter::Only("G92D1".into()));
    assert!(found.is_empty());
}

#[test]
fn test_category_counts_cover_categorised_products() {
    let catalog = bundled();
    let counts = catalog.category_counts();
    assert_eq!(counts, vec![("G92D1", 2), ("T20A", 2), ("3HA", 1)]);
    let categorised: usize = counts.iter().map(|(_, n)| n).sum();
    assert_eq!(categorised, catalog.len() - 1);
}

#[test]
fn test_search_by_id_prefix_case_insensitive() {
    let catalog = bundled();
    let upper = catalog.filter("T20A-AB", &CategoryFilter::All);
    let lower = catalog.filter("t20a-ab", &CategoryFilter::All);
    assert_eq!(upper, lower);
    assert_eq!(ids(&upper), vec!["T20A-AB100", "T20A-AB110"]);
}

#[test]
fn test_tags_are_not_searched() {
    let catalog = bundled();
    // PP-T20 は原料（タグ）にしか出てこない
    assert!(catalog.filter("PP-T20", &CategoryFilter::All).is_empty());
}

#[test]
fn test_browse_session() {
    let catalog = bundled();
    let mut browser = CatalogBrowser::new(&catalog);

    browser.apply(Action::SetCategory(Some("T20A".into())));
    browser.apply(Action::SetQuery("左".into()));
    let filtered = browser.filtered();
    assert_eq!(ids(&filtered), vec!["T20A-AB110"]);

    browser.apply(Action::OpenProduct(filtered[0].id.clone()));
    let ModalState::Open(product) = browser.modal() else {
        panic!("モーダルが開いていない");
    };
    let detail = render::render_detail(product, &AssetBase::default());
    assert!(detail.contains(render::NO_IMAGE));
    assert!(detail.contains(render::NO_DOCUMENTS));

    browser.apply(Action::BackdropClick);
    assert_eq!(browser.modal(), ModalState::Closed);
    // 閉じても絞り込み条件は残る
    assert_eq!(ids(&browser.filtered()), vec!["T20A-AB110"]);
}

#[test]
fn test_list_rendering_for_no_matches() {
    let catalog = bundled();
    let products = catalog.filter("zzz", &CategoryFilter::All);
    assert!(render::render_list(&products).contains(render::NO_MATCHES));
}
