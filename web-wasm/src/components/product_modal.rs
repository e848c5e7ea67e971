//! 製品詳細モーダル
//!
//! 閉じるボタンと背景クリックで閉じる。パネル内のクリックは背景に届かない。

use leptos::prelude::*;
use crate::components::product_image::ProductImage;
use product_ledger_common::{Action, AssetBase, Product};

/// モーダルに出す仕様（キー, ラベル）
const MODAL_SPECS: &[(&str, &str)] = &[
    ("weight", "重量"),
    ("material", "原料"),
    ("machine", "機台"),
    ("mold_maker", "模具廠商"),
];

#[component]
pub fn ProductModal<F>(product: &'static Product, on_dismiss: F) -> impl IntoView
where
    F: Fn(Action) + 'static + Clone + Send,
{
    let assets = AssetBase::default();
    let on_backdrop = on_dismiss.clone();

    let documents = if product.documents.is_empty() {
        view! { <p class="text-muted">"関連文書なし"</p> }.into_any()
    } else {
        product
            .documents
            .iter()
            .map(|doc| {
                view! {
                    <a
                        class="document-link"
                        href=assets.document_url(doc)
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {doc.doc_type.clone()}
                    </a>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="modal">
            <div class="modal-backdrop" on:click=move |_| on_backdrop(Action::BackdropClick)></div>
            <div class="modal-panel">
                <button class="modal-close" on:click=move |_| on_dismiss(Action::Close)>
                    "×"
                </button>

                <div class="modal-image">
                    <ProductImage product=product />
                </div>

                <div class="modal-content">
                    <h2>{product.name.clone()}</h2>
                    <p class="product-id">{product.id.clone()}</p>

                    <div class="spec-grid">
                        {MODAL_SPECS
                            .iter()
                            .map(|&(key, label)| {
                                view! {
                                    <div class="spec">
                                        <span class="spec-label">{label}</span>
                                        <p class="spec-value">{product.specs.display(key).to_string()}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <Show when=move || !product.qc_points.is_empty()>
                        <h3>"重點管制"</h3>
                        <ul class="qc-points">
                            {product
                                .qc_points
                                .iter()
                                .map(|point| view! { <li>{point.clone()}</li> })
                                .collect_view()}
                        </ul>
                    </Show>

                    {product.history().map(|history| view! {
                        <h3>"歷史異常回溯"</h3>
                        <p class="history">{history.to_string()}</p>
                    })}

                    <h3>"関連文書"</h3>
                    <div class="documents">{documents}</div>
                </div>
            </div>
        </div>
    }
}
