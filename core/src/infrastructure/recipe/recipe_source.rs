use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{
            entities::{RecipeQuery, RecipeRecord},
            ports::RecipeSearch,
        },
    },
    infrastructure::{recipe::PostgresCatalogSearch, search::GoogleCustomSearch},
};

/// The recipe backend selected at startup.
#[derive(Debug, Clone)]
pub enum RecipeSource {
    WebSearch(GoogleCustomSearch),
    Catalog(PostgresCatalogSearch),
}

impl RecipeSearch for RecipeSource {
    async fn search(&self, query: RecipeQuery) -> Result<Vec<RecipeRecord>, CoreError> {
        match self {
            RecipeSource::WebSearch(search) => search.search(query).await,
            RecipeSource::Catalog(catalog) => catalog.search(query).await,
        }
    }
}
