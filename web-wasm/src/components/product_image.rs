//! 製品画像（画像なしは代替表示）

use leptos::prelude::*;
use product_ledger_common::{AssetBase, Product};

#[component]
pub fn ProductImage(product: &'static Product) -> impl IntoView {
    match AssetBase::default().image_url(product) {
        Some(src) => view! {
            <img class="product-img" src=src alt=product.name.clone() loading="lazy" />
        }
        .into_any(),
        None => view! { <div class="no-image">"No Image"</div> }.into_any(),
    }
}
