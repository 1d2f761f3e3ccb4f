use crate::api::{ApiClient, RequestError};
use crate::list::{ListPage, ListSource};
use crate::model::{
    Action, ActionRequest, ActionResponse, ActionsPage, Balance, StatisticsQuery,
    StatisticsReport,
};
use crate::query::{build_query, encode_component, ActionFilters};

/// `/actions/*` and `/balance` endpoints.
#[derive(Clone)]
pub struct ActionsApi {
    client: ApiClient,
}

impl ActionsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_all(&self, filters: &ActionFilters) -> Result<ActionsPage, RequestError> {
        let query = build_query(filters);
        self.client.get("/actions/all", Some(query.as_str())).await
    }

    pub async fn add(&self, action: &ActionRequest) -> Result<ActionResponse, RequestError> {
        self.client.post("/actions/add", action).await
    }

    pub async fn update(
        &self,
        id: &str,
        action: &ActionRequest,
    ) -> Result<ActionResponse, RequestError> {
        let path = format!("/actions/update/{}", encode_component(id));
        self.client.put(&path, action).await
    }

    pub async fn delete(&self, id: &str) -> Result<ActionResponse, RequestError> {
        let path = format!("/actions/delete/{}", encode_component(id));
        self.client.delete(&path).await
    }

    pub async fn balance(&self) -> Result<Balance, RequestError> {
        self.client.get("/balance", None).await
    }

    pub async fn statistics(
        &self,
        query: &StatisticsQuery,
    ) -> Result<StatisticsReport, RequestError> {
        let query = build_query(query);
        self.client.get("/actions/statistics", Some(query.as_str())).await
    }
}

impl ListSource for ActionsApi {
    type Filters = ActionFilters;
    type Item = Action;

    async fn fetch(&self, filters: &ActionFilters) -> Result<ListPage<Action>, RequestError> {
        let page = self.get_all(filters).await?;
        Ok(ListPage {
            items: page.actions,
            total_items: page.actions_count,
        })
    }
}
