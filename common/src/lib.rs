//! Product Ledger Common Library
//!
//! CLIとWeb(WASM)で共有されるカタログ型・絞り込み・表示状態

pub mod types;
pub mod error;
pub mod catalog;
pub mod filter;
pub mod view_state;
pub mod assets;
pub mod convert;

pub use types::{Document, Product, ProductSpecs, PLACEHOLDER};
pub use error::{Error, Result};
pub use catalog::{derive_categories, Catalog};
pub use filter::{filter_products, matches_query, CategoryFilter};
pub use view_state::{Action, CatalogBrowser, ModalState, ViewState};
pub use assets::AssetBase;
pub use convert::{convert_rows, parse_csv_rows, rows_from_records, ConvertReport, LedgerRow, SkipReason, SkippedRow};
