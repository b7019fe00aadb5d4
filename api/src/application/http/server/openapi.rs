use utoipa::OpenApi;

use crate::application::http::{
    file::router::FileApiDoc, health::HealthApiDoc, ingredient::router::IngredientApiDoc,
    recipe::router::RecipeApiDoc,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Lunchatron API",
    description = "Ingredient extraction from food photos and recipe search"
))]
pub struct ApiDoc;

impl ApiDoc {
    /// The document with every route group merged in.
    pub fn merged() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(HealthApiDoc::openapi());
        openapi.merge(FileApiDoc::openapi());
        openapi.merge(IngredientApiDoc::openapi());
        openapi.merge(RecipeApiDoc::openapi());
        openapi
    }
}
