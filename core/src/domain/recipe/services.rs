use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::ports::{LabelDetector, RelevanceFilter},
    recipe::{
        entities::{RecipeQuery, RecipeRecord},
        ports::{RecipeSearch, RecipeService},
        value_objects::SearchRecipesInput,
    },
    storage::ports::ImageStorage,
};

impl<LD, RF, RS, IS> RecipeService for Service<LD, RF, RS, IS>
where
    LD: LabelDetector,
    RF: RelevanceFilter,
    RS: RecipeSearch,
    IS: ImageStorage,
{
    #[instrument(skip(self, input), fields(food_type = ?input.food_type))]
    async fn search_recipes(
        &self,
        input: SearchRecipesInput,
    ) -> Result<Vec<RecipeRecord>, CoreError> {
        let query = RecipeQuery::new(&input.ingredients, input.food_type)?;

        info!(ingredients = ?query.ingredients(), "Ingredients received");

        let recipes = self
            .recipe_search
            .search(query)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Recipe search failed"))?;

        info!(count = recipes.len(), "Recipes found");

        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::PipelineConfig,
        ingredient::{
            ports::{MockEntityAnalyzer, MockLabelDetector},
            relevance::{AllowListFilter, IngredientFilter},
        },
        recipe::ports::MockRecipeSearch,
        storage::ports::MockImageStorage,
    };

    fn service(
        search: MockRecipeSearch,
    ) -> Service<MockLabelDetector, IngredientFilter<MockEntityAnalyzer>, MockRecipeSearch, MockImageStorage>
    {
        Service::new(
            MockLabelDetector::new(),
            IngredientFilter::AllowList(AllowListFilter),
            search,
            MockImageStorage::new(),
            PipelineConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_empty_ingredients_never_reach_search() {
        let mut search = MockRecipeSearch::new();
        search.expect_search().never();
        let service = service(search);

        let result = service
            .search_recipes(SearchRecipesInput {
                ingredients: vec![],
                food_type: Some("Dessert".to_string()),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidQuery));
    }

    #[tokio::test]
    async fn test_query_is_passed_to_search() {
        let mut search = MockRecipeSearch::new();
        search
            .expect_search()
            .withf(|query: &RecipeQuery| {
                query.ingredients() == ["tomato".to_string(), "basil".to_string()]
                    && query.food_type() == Some("Italian")
            })
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    Ok(vec![RecipeRecord::new(
                        Some("Bruschetta".to_string()),
                        Some("https://recipes.example/bruschetta".to_string()),
                        None,
                        None,
                    )])
                })
            });
        let service = service(search);

        let recipes = service
            .search_recipes(SearchRecipesInput {
                ingredients: vec!["tomato".to_string(), " basil ".to_string()],
                food_type: Some("Italian".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Bruschetta");
    }

    #[tokio::test]
    async fn test_search_failure_is_propagated() {
        let mut search = MockRecipeSearch::new();
        search.expect_search().returning(|_| {
            Box::pin(async { Err(CoreError::SearchFailure("403 Forbidden".to_string())) })
        });
        let service = service(search);

        let result = service
            .search_recipes(SearchRecipesInput {
                ingredients: vec!["egg".to_string()],
                food_type: None,
            })
            .await;

        assert!(matches!(result, Err(CoreError::SearchFailure(_))));
    }
}
