use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SearchRecipesValidator {
    #[validate(length(min = 1, message = "No ingredients provided."))]
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Optional dish type, e.g. `soup` or `salad`.
    #[serde(default, rename = "foodType", alias = "food_type")]
    pub food_type: Option<String>,
}
