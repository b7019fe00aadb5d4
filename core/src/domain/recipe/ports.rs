use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{RecipeQuery, RecipeRecord},
        value_objects::SearchRecipesInput,
    },
};

/// A source of recipes: the web search service or the local catalog
#[cfg_attr(test, mockall::automock)]
pub trait RecipeSearch: Send + Sync {
    /// An empty result is `Ok(vec![])`. Transport and service errors
    /// surface as `CoreError::SearchFailure`.
    fn search(
        &self,
        query: RecipeQuery,
    ) -> impl Future<Output = Result<Vec<RecipeRecord>, CoreError>> + Send;
}

/// Service trait for recipe lookup
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn search_recipes(
        &self,
        input: SearchRecipesInput,
    ) -> impl Future<Output = Result<Vec<RecipeRecord>, CoreError>> + Send;
}
