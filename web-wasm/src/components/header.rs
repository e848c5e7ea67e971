//! ヘッダーコンポーネント（タイトルと検索欄）

use leptos::prelude::*;

#[component]
pub fn Header<F>(query: Signal<String>, on_query: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    view! {
        <header class="header">
            <div class="header-inner">
                <h1 class="title">"製品履歴カタログ"</h1>
                <input
                    type="text"
                    class="search"
                    placeholder="品名・品番で検索..."
                    prop:value=move || query.get()
                    on:input=move |ev| on_query(event_target_value(&ev))
                />
            </div>
        </header>
    }
}
