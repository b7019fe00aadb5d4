use std::sync::Arc;

use crate::domain::{
    common::PipelineConfig,
    ingredient::ports::{LabelDetector, RelevanceFilter},
    recipe::ports::RecipeSearch,
    storage::ports::ImageStorage,
};

/// Holds every collaborator the domain services need. Each service trait
/// (`IngredientService`, `RecipeService`, `ImageService`) is implemented on it.
pub struct Service<LD, RF, RS, IS>
where
    LD: LabelDetector,
    RF: RelevanceFilter,
    RS: RecipeSearch,
    IS: ImageStorage,
{
    pub(crate) label_detector: Arc<LD>,
    pub(crate) relevance_filter: Arc<RF>,
    pub(crate) recipe_search: Arc<RS>,
    pub(crate) image_storage: Arc<IS>,
    pub(crate) pipeline: Arc<PipelineConfig>,
}

impl<LD, RF, RS, IS> Service<LD, RF, RS, IS>
where
    LD: LabelDetector,
    RF: RelevanceFilter,
    RS: RecipeSearch,
    IS: ImageStorage,
{
    pub fn new(
        label_detector: LD,
        relevance_filter: RF,
        recipe_search: RS,
        image_storage: IS,
        pipeline: PipelineConfig,
    ) -> Self {
        Self {
            label_detector: Arc::new(label_detector),
            relevance_filter: Arc::new(relevance_filter),
            recipe_search: Arc::new(recipe_search),
            image_storage: Arc::new(image_storage),
            pipeline: Arc::new(pipeline),
        }
    }
}

impl<LD, RF, RS, IS> Clone for Service<LD, RF, RS, IS>
where
    LD: LabelDetector,
    RF: RelevanceFilter,
    RS: RecipeSearch,
    IS: ImageStorage,
{
    fn clone(&self) -> Self {
        Self {
            label_detector: Arc::clone(&self.label_detector),
            relevance_filter: Arc::clone(&self.relevance_filter),
            recipe_search: Arc::clone(&self.recipe_search),
            image_storage: Arc::clone(&self.image_storage),
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}
