//! Typed filter sets for the products and actions list views.

use std::fmt::Debug;

use super::encode::{FilterValue, QueryParams, SEARCH_FIELDS, SEARCH_KEY};
use super::pagination::PAGE_SIZE;
use crate::model::{ActionType, AmountType};

/// Filter set owned by a list view.
///
/// Replacing any field yields a new filter set; the list state machine
/// refetches on every replacement.
pub trait ListFilters: QueryParams + Clone + PartialEq + Default + Debug + Send + 'static {
    /// One replaceable field together with its new value.
    type Field: Clone + Debug + Send + 'static;

    /// Replaces one field and keeps all others, including the page.
    fn apply(&mut self, field: Self::Field);

    fn page(&self) -> u32;

    fn set_page(&mut self, page: u32);

    fn size(&self) -> u32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSearchField {
    Name,
    Desc,
}

impl ProductSearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilters {
    pub page: u32,
    pub size: u32,
    pub search_key: String,
    pub search_fields: Vec<ProductSearchField>,
}

impl Default for ProductFilters {
    fn default() -> Self {
        Self {
            page: 1,
            size: PAGE_SIZE,
            search_key: String::new(),
            search_fields: vec![ProductSearchField::Name, ProductSearchField::Desc],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductFilter {
    Page(u32),
    Size(u32),
    SearchKey(String),
    SearchFields(Vec<ProductSearchField>),
}

impl QueryParams for ProductFilters {
    fn entries(&self) -> Vec<(&'static str, FilterValue)> {
        vec![
            ("page", FilterValue::Number(f64::from(self.page))),
            ("size", FilterValue::Number(f64::from(self.size))),
            (SEARCH_KEY, FilterValue::text(&self.search_key)),
            (
                SEARCH_FIELDS,
                FilterValue::List(
                    self.search_fields
                        .iter()
                        .map(|f| f.as_str().to_string())
                        .collect(),
                ),
            ),
        ]
    }
}

impl ListFilters for ProductFilters {
    type Field = ProductFilter;

    fn apply(&mut self, field: ProductFilter) {
        match field {
            ProductFilter::Page(page) => self.page = page,
            ProductFilter::Size(size) => self.size = size,
            ProductFilter::SearchKey(key) => self.search_key = key,
            ProductFilter::SearchFields(fields) => self.search_fields = fields,
        }
    }

    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn size(&self) -> u32 {
        self.size
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSearchField {
    TypeDesc,
}

impl ActionSearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeDesc => "typeDesc",
        }
    }
}

/// Wire key of the income filter.
pub const INCOME_KEY: &str = "وارد";
/// Wire key of the outcome filter.
pub const OUTCOME_KEY: &str = "منصرف";

#[derive(Debug, Clone, PartialEq)]
pub struct ActionFilters {
    pub page: u32,
    pub size: u32,
    pub action_type: Option<ActionType>,
    pub search_key: String,
    pub search_fields: Vec<ActionSearchField>,
    pub amount_type: Option<AmountType>,
    /// Product `_id`.
    pub product: Option<String>,
    /// `YYYY-MM-DD`.
    pub date: Option<String>,
    pub income: Option<f64>,
    pub outcome: Option<f64>,
}

impl Default for ActionFilters {
    fn default() -> Self {
        Self {
            page: 1,
            size: PAGE_SIZE,
            action_type: None,
            search_key: String::new(),
            search_fields: vec![ActionSearchField::TypeDesc],
            amount_type: None,
            product: None,
            date: None,
            income: None,
            outcome: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionFilter {
    Page(u32),
    Size(u32),
    Type(Option<ActionType>),
    SearchKey(String),
    SearchFields(Vec<ActionSearchField>),
    AmountType(Option<AmountType>),
    Product(Option<String>),
    Date(Option<String>),
    Income(Option<f64>),
    Outcome(Option<f64>),
}

impl QueryParams for ActionFilters {
    fn entries(&self) -> Vec<(&'static str, FilterValue)> {
        vec![
            ("page", FilterValue::Number(f64::from(self.page))),
            ("size", FilterValue::Number(f64::from(self.size))),
            (
                "type",
                FilterValue::opt_text(self.action_type.map(|t| t.as_str())),
            ),
            (SEARCH_KEY, FilterValue::text(&self.search_key)),
            (
                SEARCH_FIELDS,
                FilterValue::List(
                    self.search_fields
                        .iter()
                        .map(|f| f.as_str().to_string())
                        .collect(),
                ),
            ),
            (
                "amountType",
                FilterValue::opt_text(self.amount_type.map(|t| t.as_str())),
            ),
            ("product", FilterValue::opt_text(self.product.as_deref())),
            ("date", FilterValue::opt_text(self.date.as_deref())),
            (INCOME_KEY, FilterValue::opt_number(self.income)),
            (OUTCOME_KEY, FilterValue::opt_number(self.outcome)),
        ]
    }
}

impl ListFilters for ActionFilters {
    type Field = ActionFilter;

    fn apply(&mut self, field: ActionFilter) {
        match field {
            ActionFilter::Page(page) => self.page = page,
            ActionFilter::Size(size) => self.size = size,
            ActionFilter::Type(t) => self.action_type = t,
            ActionFilter::SearchKey(key) => self.search_key = key,
            ActionFilter::SearchFields(fields) => self.search_fields = fields,
            ActionFilter::AmountType(t) => self.amount_type = t,
            ActionFilter::Product(id) => self.product = id,
            ActionFilter::Date(date) => self.date = date,
            ActionFilter::Income(v) => self.income = v,
            ActionFilter::Outcome(v) => self.outcome = v,
        }
    }

    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn size(&self) -> u32 {
        self.size
    }
}
