//! 表示状態
//!
//! 検索文字列・選択カテゴリ・選択中の製品の3つを保持する。
//! 絞り込み結果とカテゴリ一覧は状態から都度算出し、自身では保持しない。

use crate::catalog::Catalog;
use crate::filter::CategoryFilter;
use crate::types::Product;

/// ユーザー操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 検索欄の入力
    SetQuery(String),
    /// カテゴリボタン（Noneは「全て」）
    SetCategory(Option<String>),
    /// カードのクリック
    OpenProduct(String),
    /// 閉じるボタン
    Close,
    /// モーダル背景のクリック
    BackdropClick,
}

/// 詳細モーダルの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState<'a> {
    Closed,
    Open(&'a Product),
}

impl<'a> ModalState<'a> {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn product(&self) -> Option<&'a Product> {
        match *self {
            ModalState::Open(product) => Some(product),
            ModalState::Closed => None,
        }
    }
}

/// 表示状態（初期値: 検索なし・全カテゴリ・未選択）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    query: String,
    category: CategoryFilter,
    selected: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// 選択中の製品id
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Noneで全カテゴリに戻す
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = CategoryFilter::from(category);
    }

    /// Noneでモーダルを閉じる
    pub fn select_product(&mut self, id: Option<String>) {
        self.selected = id;
    }

    pub fn close(&mut self) {
        self.select_product(None);
    }

    /// 操作を状態に反映
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetQuery(query) => self.set_query(query),
            Action::SetCategory(category) => self.set_category(category),
            Action::OpenProduct(id) => self.select_product(Some(id)),
            Action::Close | Action::BackdropClick => self.close(),
        }
    }

    /// 現在の条件での絞り込み結果
    pub fn filtered<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.filter(&self.query, &self.category)
    }

    /// 選択中のidがカタログに無ければClosed
    pub fn modal<'a>(&self, catalog: &'a Catalog) -> ModalState<'a> {
        match self.selected.as_deref().and_then(|id| catalog.get(id)) {
            Some(product) => ModalState::Open(product),
            None => ModalState::Closed,
        }
    }
}

/// カタログと表示状態の組
///
/// カタログは借用のみで、変更は表示状態に対してだけ行う。
#[derive(Debug, Clone)]
pub struct CatalogBrowser<'a> {
    catalog: &'a Catalog,
    state: ViewState,
}

impl<'a> CatalogBrowser<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            state: ViewState::default(),
        }
    }

    pub fn with_state(catalog: &'a Catalog, state: ViewState) -> Self {
        Self { catalog, state }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn categories(&self) -> &'a [String] {
        self.catalog.categories()
    }

    pub fn filtered(&self) -> Vec<&'a Product> {
        self.state.filtered(self.catalog)
    }

    pub fn selected(&self) -> Option<&'a Product> {
        self.modal().product()
    }

    pub fn modal(&self) -> ModalState<'a> {
        self.state.modal(self.catalog)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.set_query(query);
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.state.set_category(category);
    }

    pub fn select_product(&mut self, id: Option<String>) {
        self.state.select_product(id);
    }

    pub fn close(&mut self) {
        self.state.close();
    }

    pub fn apply(&mut self, action: Action) {
        self.state.apply(action);
    }
}
