//! カテゴリ絞り込みバー

use leptos::prelude::*;
use product_ledger_common::CategoryFilter;

#[component]
pub fn CategoryBar<F>(
    categories: &'static [String],
    selected: Signal<CategoryFilter>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(Option<String>) + 'static + Clone + Send,
{
    let on_select_all = on_select.clone();

    view! {
        <nav class="category-bar">
            <button
                class="category"
                class:active=move || selected.with(|c| c.is_all())
                on:click=move |_| on_select_all(None)
            >
                "全て"
            </button>
            {categories
                .iter()
                .map(|category| {
                    let on_select = on_select.clone();
                    let is_active = {
                        let name = category.clone();
                        move || selected.with(|c| c.as_option() == Some(name.as_str()))
                    };
                    let name = category.clone();
                    view! {
                        <button
                            class="category"
                            class:active=is_active
                            on:click=move |_| on_select(Some(name.clone()))
                        >
                            {category.clone()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
