//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::components::{
    category_bar::CategoryBar,
    header::Header,
    product_grid::{EmptyState, ProductGrid},
    product_modal::ProductModal,
};
use product_ledger_common::{Action, Catalog, ViewState};
use std::sync::OnceLock;

/// ビルド時に同梱するカタログ
const PRODUCTS_JSON: &str = include_str!("../../data/products.json");

/// 同梱カタログ（初回アクセス時に一度だけ読み込む）
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| match Catalog::from_json_str(PRODUCTS_JSON) {
        Ok(catalog) => catalog,
        Err(e) => {
            web_sys::console::error_1(&format!("カタログ読み込みエラー: {}", e).into());
            Catalog::default()
        }
    })
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let catalog = catalog();

    // 表示状態（検索文字列・カテゴリ・選択中の製品）
    let state = RwSignal::new(ViewState::new());
    let dispatch = move |action: Action| state.update(|s| s.apply(action));

    let query = Signal::derive(move || state.with(|s| s.query().to_string()));
    let category = Signal::derive(move || state.with(|s| s.category().clone()));
    let filtered = Memo::new(move |_| state.with(|s| s.filtered(catalog)));
    let selected = Memo::new(move |_| state.with(|s| s.modal(catalog).product()));

    view! {
        <div class="app">
            <Header
                query=query
                on_query=move |q| dispatch(Action::SetQuery(q))
            />

            <CategoryBar
                categories=catalog.categories()
                selected=category
                on_select=move |c| dispatch(Action::SetCategory(c))
            />

            <main class="container">
                <Show
                    when=move || filtered.with(|products| !products.is_empty())
                    fallback=|| view! { <EmptyState /> }
                >
                    <ProductGrid
                        products=filtered
                        on_open=move |id| dispatch(Action::OpenProduct(id))
                    />
                </Show>
            </main>

            {move || selected.get().map(|product| view! {
                <ProductModal product=product on_dismiss=dispatch />
            })}
        </div>
    }
}
