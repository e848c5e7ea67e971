//! 台帳変換の統合テスト
//!
//! CSV台帳 → カタログJSON → 再読み込みまでを検証

use product_ledger::source;
use product_ledger_common::{convert_rows, Catalog, CategoryFilter, SkipReason};
use tempfile::tempdir;

const LEDGER: &str = "\u{feff}品番,品名,車型,產品圖片,標準重量(g),原料編號,生產機台,CT時間(秒),模具廠商,重點管制1,重點管制2,重點管制3,歷史異常回溯,成形條件表,作業標準書,檢查手順書
G92D1-VU010,前飾板,G92D1,G92D1-VU010.jpg,35.2,PP-T20,350T,45,大同模具,毛邊,縮水,,\"2023/05 毛邊異常, 已修模\",G92D1-VU010_qc1.pdf,G92D1-VU010_qc2.pdf,G92D1-VU010_qc3.pdf
T20A-AB100,側飾板(右),T20A,,62.0,ABS-HI121,450T,52,,色差,,,,,,
,欠番,T20A,,,,,,,,,,,,,
G92D1-VU010,前飾板(重複),G92D1,,,,,,,,,,,,,
";

#[test]
fn test_csv_to_catalog_roundtrip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("台帳.csv");
    let output = dir.path().join("out").join("products.json");
    std::fs::write(&input, LEDGER).unwrap();

    let rows = source::read_ledger(&input, None).unwrap();
    assert_eq!(rows.len(), 4);

    let report = convert_rows(&rows);
    assert_eq!(report.products.len(), 2);
    assert_eq!(report.skipped.len(), 2);
    assert_eq!(report.skipped[0].reason, SkipReason::MissingId);
    assert_eq!(report.skipped[0].line, 4);
    assert_eq!(
        report.skipped[1].reason,
        SkipReason::DuplicateId("G92D1-VU010".into())
    );

    source::write_catalog(&output, &report.products).unwrap();
    let catalog = Catalog::from_path(&output).unwrap();

    assert_eq!(catalog.categories(), &["G92D1", "T20A"]);
    let product = catalog.get("G92D1-VU010").unwrap();
    assert_eq!(product.name, "前飾板");
    assert_eq!(product.history, "2023/05 毛邊異常, 已修模");
    assert_eq!(product.documents.len(), 3);
    assert_eq!(product.specs.display("mold_maker"), "大同模具");

    let other = catalog.get("T20A-AB100").unwrap();
    assert!(other.image().is_none());
    assert_eq!(other.specs.display("mold_maker"), "-");
    assert!(other.documents.is_empty());
}

#[test]
fn test_converted_catalog_is_filterable() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("ledger.csv");
    std::fs::write(&input, LEDGER).unwrap();

    let rows = source::read_ledger(&input, None).unwrap();
    let catalog = Catalog::new(convert_rows(&rows).products).unwrap();

    let found = catalog.filter("飾板", &CategoryFilter::Only("T20A".into()));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "T20A-AB100");
}
