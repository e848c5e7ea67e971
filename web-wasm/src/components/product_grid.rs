//! 製品カード一覧

use leptos::prelude::*;
use crate::components::product_image::ProductImage;
use product_ledger_common::Product;

#[component]
pub fn ProductGrid<F>(products: Memo<Vec<&'static Product>>, on_open: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    view! {
        <div class="product-grid">
            <For
                each=move || products.get()
                key=|product| product.id.clone()
                children=move |product| {
                    let on_open = on_open.clone();
                    view! { <ProductCard product=product on_open=on_open /> }
                }
            />
        </div>
    }
}

#[component]
fn ProductCard<F>(product: &'static Product, on_open: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    let id = product.id.clone();
    let has_category = !product.category.is_empty();

    view! {
        <div class="product-card" on:click=move |_| on_open(id.clone())>
            <div class="product-image">
                <ProductImage product=product />
                <Show when=move || has_category>
                    <span class="category-badge">{product.category.clone()}</span>
                </Show>
            </div>
            <div class="product-body">
                <h3 class="product-name">{product.name.clone()}</h3>
                <p class="product-id">{product.id.clone()}</p>
                <div class="tags">
                    {product
                        .tag_preview()
                        .iter()
                        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// 該当なし表示
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>"該当する製品が見つかりません"</h3>
            <p class="text-muted">"他のキーワードを試すか、絞り込みを解除してください"</p>
        </div>
    }
}
