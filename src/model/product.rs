use serde::{Deserialize, Serialize};

pub const NO_PRODUCT: &str = "-";
pub const DELETED_PRODUCT: &str = "المنتج محذوف";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub record_id: String,
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Body of `POST /products/add`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    pub amount: f64,
}

/// Body of `PUT /products/update/:id`; only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.desc.is_none() && self.amount.is_none()
    }
}

/// Result of `GET /products/all`.
///
/// Older servers answer with a bare array; that shape is accepted too.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "ProductsPayload")]
pub struct ProductsPage {
    pub products: Vec<Product>,
    pub products_count: u64,
    /// Full product list for selectors, independent of paging.
    pub products_options: Option<Vec<Product>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProductsPayload {
    Bare(Vec<Product>),
    Page {
        #[serde(default)]
        products: Option<Vec<Product>>,
        #[serde(rename = "productsCount", default)]
        products_count: u64,
        #[serde(rename = "productsOptions", default)]
        products_options: Option<Vec<Product>>,
    },
}

impl From<ProductsPayload> for ProductsPage {
    fn from(payload: ProductsPayload) -> Self {
        match payload {
            ProductsPayload::Page {
                products,
                products_count,
                products_options,
            } => Self {
                products: products.unwrap_or_default(),
                products_count,
                products_options,
            },
            ProductsPayload::Bare(products) => Self {
                products,
                products_count: 0,
                products_options: None,
            },
        }
    }
}

/// Result of product writes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductResponse {
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Name shown for an action's product reference.
pub fn product_name<'a>(products: &'a [Product], product_id: Option<&str>) -> &'a str {
    let Some(id) = product_id.filter(|id| !id.is_empty()) else {
        return NO_PRODUCT;
    };
    products
        .iter()
        .find(|p| p.record_id == id)
        .map(|p| p.name.as_str())
        .unwrap_or(DELETED_PRODUCT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wheat() -> Product {
        Product {
            record_id: "p1".to_string(),
            id: "p1".to_string(),
            name: "قمح".to_string(),
            desc: None,
            amount: 12.0,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn products_page_accepts_object_shape() {
        let page: ProductsPage = serde_json::from_value(json!({
            "products": [{"_id": "p1", "name": "wheat", "amount": 3}],
            "productsCount": 21
        }))
        .unwrap();
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.products_count, 21);
        assert!(page.products_options.is_none());
    }

    #[test]
    fn products_page_accepts_bare_array() {
        let page: ProductsPage =
            serde_json::from_value(json!([{"_id": "p1", "name": "wheat"}])).unwrap();
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.products_count, 0);
    }

    #[test]
    fn products_page_accepts_null_products() {
        let page: ProductsPage =
            serde_json::from_value(json!({"products": null, "productsCount": 0})).unwrap();
        assert!(page.products.is_empty());
        assert_eq!(page.products_count, 0);
    }

    #[test]
    fn product_name_lookup() {
        let products = vec![wheat()];
        assert_eq!(product_name(&products, Some("p1")), "قمح");
        assert_eq!(product_name(&products, Some("gone")), DELETED_PRODUCT);
        assert_eq!(product_name(&products, None), NO_PRODUCT);
        assert_eq!(product_name(&products, Some("")), NO_PRODUCT);
    }

    #[test]
    fn patch_skips_unset_fields() {
        let patch = ProductPatch {
            amount: Some(4.0),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"amount": 4.0}));
    }
}
