//! Query-string serialization for filter sets.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const SEARCH_KEY: &str = "searchKey";
pub const SEARCH_FIELDS: &str = "searchFields";

/// Characters left as-is by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Value of one query parameter before encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Empty,
    Text(String),
    Number(f64),
    /// Sent as repeated same-key parameters.
    List(Vec<String>),
}

impl FilterValue {
    pub fn text(value: impl Into<String>) -> Self {
        FilterValue::Text(value.into())
    }

    /// `Empty` for `None`, otherwise the formatted value.
    pub fn opt_text<S: AsRef<str>>(value: Option<S>) -> Self {
        match value {
            Some(v) => FilterValue::Text(v.as_ref().to_string()),
            None => FilterValue::Empty,
        }
    }

    pub fn opt_number(value: Option<f64>) -> Self {
        value.map_or(FilterValue::Empty, FilterValue::Number)
    }

    /// Values that are never transmitted.
    pub fn is_blank(&self) -> bool {
        match self {
            FilterValue::Empty => true,
            FilterValue::Text(s) => s.is_empty(),
            FilterValue::Number(_) => false,
            FilterValue::List(items) => items.is_empty(),
        }
    }
}

/// A set of named query parameters in a stable order.
pub trait QueryParams {
    /// Entries in declaration order; that order is the wire order.
    fn entries(&self) -> Vec<(&'static str, FilterValue)>;
}

/// Percent-encodes one key or value component.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Serializes `params` into `key=value&...`.
///
/// Blank values are dropped, and `searchFields` is dropped unless
/// `searchKey` has non-whitespace content.
pub fn build_query<Q: QueryParams + ?Sized>(params: &Q) -> String {
    let entries = params.entries();
    let has_search = entries.iter().any(|(key, value)| {
        *key == SEARCH_KEY && matches!(value, FilterValue::Text(s) if !s.trim().is_empty())
    });

    let mut pairs: Vec<String> = Vec::new();
    for (key, value) in entries {
        if key == SEARCH_FIELDS && !has_search {
            continue;
        }
        if value.is_blank() {
            continue;
        }

        let key = encode_component(key);
        match value {
            FilterValue::List(items) => {
                for item in items {
                    pairs.push(format!("{}={}", key, encode_component(&item)));
                }
            }
            FilterValue::Text(s) => pairs.push(format!("{}={}", key, encode_component(&s))),
            FilterValue::Number(n) => pairs.push(format!("{}={}", key, n)),
            FilterValue::Empty => {}
        }
    }

    pairs.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Raw(Vec<(&'static str, FilterValue)>);

    impl QueryParams for Raw {
        fn entries(&self) -> Vec<(&'static str, FilterValue)> {
            self.0.clone()
        }
    }

    #[test]
    fn blank_values_are_omitted() {
        let params = Raw(vec![
            ("page", FilterValue::Number(1.0)),
            ("type", FilterValue::text("")),
            ("product", FilterValue::Empty),
            ("tags", FilterValue::List(vec![])),
            ("size", FilterValue::Number(10.0)),
        ]);
        assert_eq!(build_query(&params), "page=1&size=10");
    }

    #[test]
    fn search_fields_need_a_search_key() {
        let params = Raw(vec![
            (SEARCH_KEY, FilterValue::text("   ")),
            (
                SEARCH_FIELDS,
                FilterValue::List(vec!["name".into(), "desc".into()]),
            ),
        ]);
        // whitespace-only key is still sent, its fields are not
        assert_eq!(build_query(&params), "searchKey=%20%20%20");
    }

    #[test]
    fn list_values_repeat_the_key() {
        let params = Raw(vec![
            (SEARCH_KEY, FilterValue::text("wheat")),
            (
                SEARCH_FIELDS,
                FilterValue::List(vec!["name".into(), "desc".into()]),
            ),
        ]);
        assert_eq!(
            build_query(&params),
            "searchKey=wheat&searchFields=name&searchFields=desc"
        );
    }

    #[test]
    fn keys_and_values_are_percent_encoded() {
        let params = Raw(vec![
            ("وارد", FilterValue::Number(250.0)),
            (SEARCH_KEY, FilterValue::text("قمح & شعير")),
        ]);
        assert_eq!(
            build_query(&params),
            "%D9%88%D8%A7%D8%B1%D8%AF=250&searchKey=%D9%82%D9%85%D8%AD%20%26%20%D8%B4%D8%B9%D9%8A%D8%B1"
        );
    }

    #[test]
    fn unreserved_marks_are_kept() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
        assert_eq!(encode_component("2024/01/05"), "2024%2F01%2F05");
    }

    #[test]
    fn fractional_numbers_keep_their_decimals() {
        let params = Raw(vec![("amount", FilterValue::Number(2.5))]);
        assert_eq!(build_query(&params), "amount=2.5");
    }
}
