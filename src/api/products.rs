use crate::api::{ApiClient, RequestError};
use crate::list::{ListPage, ListSource};
use crate::model::{Product, ProductPatch, ProductRequest, ProductResponse, ProductsPage};
use crate::query::{build_query, encode_component, ProductFilters};

/// `/products/*` endpoints.
#[derive(Clone)]
pub struct ProductsApi {
    client: ApiClient,
}

impl ProductsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, filters: &ProductFilters) -> Result<ProductsPage, RequestError> {
        let query = build_query(filters);
        self.client.get("/products/all", Some(query.as_str())).await
    }

    /// Unfiltered listing, used to resolve product names and fill selectors.
    pub async fn options(&self) -> Result<Vec<Product>, RequestError> {
        let page: ProductsPage = self.client.get("/products/all", None).await?;
        Ok(page.products_options.unwrap_or(page.products))
    }

    pub async fn add(&self, product: &ProductRequest) -> Result<ProductResponse, RequestError> {
        self.client.post("/products/add", product).await
    }

    pub async fn update(
        &self,
        id: &str,
        patch: &ProductPatch,
    ) -> Result<ProductResponse, RequestError> {
        let path = format!("/products/update/{}", encode_component(id));
        self.client.put(&path, patch).await
    }

    pub async fn delete(&self, id: &str) -> Result<ProductResponse, RequestError> {
        let path = format!("/products/delete/{}", encode_component(id));
        self.client.delete(&path).await
    }
}

impl ListSource for ProductsApi {
    type Filters = ProductFilters;
    type Item = Product;

    async fn fetch(&self, filters: &ProductFilters) -> Result<ListPage<Product>, RequestError> {
        let page = self.get_all(filters).await?;
        Ok(ListPage {
            items: page.products,
            total_items: page.products_count,
        })
    }
}
