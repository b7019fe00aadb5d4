use reqwest::Client;
use serde_json::Value;
use tracing::instrument;

use crate::domain::{
    common::{SearchConfig, entities::app_errors::CoreError},
    recipe::{
        entities::{RecipeQuery, RecipeRecord},
        normalizer::normalize_search_response,
        ports::RecipeSearch,
        query_builder::build_search_query,
    },
};
use crate::infrastructure::API_KEY_HEADER;

/// The service never returns more than ten items per page.
const MAX_RESULTS_PER_PAGE: u32 = 10;

/// Recipe search through the Google Custom Search JSON API.
#[derive(Debug, Clone)]
pub struct GoogleCustomSearch {
    api_key: String,
    engine_id: String,
    endpoint: String,
    result_count: u32,
    client: Client,
}

impl GoogleCustomSearch {
    pub fn new(config: SearchConfig, client: Client) -> Self {
        Self {
            api_key: config.api_key,
            engine_id: config.engine_id,
            endpoint: config.endpoint,
            result_count: config.result_count.clamp(1, MAX_RESULTS_PER_PAGE),
            client,
        }
    }

    fn query_params(&self, query: &RecipeQuery) -> Vec<(&'static str, String)> {
        vec![
            ("cx", self.engine_id.clone()),
            ("q", build_search_query(query)),
            ("num", self.result_count.to_string()),
        ]
    }

    async fn call_search_api(&self, query: &RecipeQuery) -> Result<Value, CoreError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&self.query_params(query))
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Search API request failed: {}", e);
                CoreError::SearchFailure(format!("Search API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Search API error: {} - {}", status, error_text);
            return Err(CoreError::SearchFailure(format!(
                "Search API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse Search response: {}", e);
            CoreError::SearchFailure(format!("Failed to parse Search response: {}", e))
        })
    }
}

impl RecipeSearch for GoogleCustomSearch {
    #[instrument(skip(self, query))]
    async fn search(&self, query: RecipeQuery) -> Result<Vec<RecipeRecord>, CoreError> {
        let response = self.call_search_api(&query).await?;
        Ok(normalize_search_response(&response))
    }
}
