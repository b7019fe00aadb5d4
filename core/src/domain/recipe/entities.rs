use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, ingredient::entities::IngredientSet};

pub const NO_TITLE: &str = "No title available";
pub const NO_DESCRIPTION: &str = "No description available";

/// A recipe in the uniform shape returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeRecord {
    pub title: String,
    pub link: Option<String>,
    pub description: String,
    #[serde(rename = "image", alias = "imageUrl")]
    pub image_url: Option<String>,
}

impl RecipeRecord {
    /// Builds a record, substituting placeholders for a missing title or description.
    pub fn new(
        title: Option<String>,
        link: Option<String>,
        description: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            title: title.unwrap_or_else(|| NO_TITLE.to_string()),
            link,
            description: description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            image_url,
        }
    }
}

/// Validated input of a recipe search: at least one non-blank ingredient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeQuery {
    ingredients: Vec<String>,
    food_type: Option<String>,
}

impl RecipeQuery {
    pub fn new<I, S>(ingredients: I, food_type: Option<String>) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ingredients: Vec<String> = ingredients
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if ingredients.is_empty() {
            return Err(CoreError::InvalidQuery);
        }

        let food_type = food_type
            .map(|food_type| food_type.trim().to_string())
            .filter(|food_type| !food_type.is_empty());

        Ok(Self {
            ingredients,
            food_type,
        })
    }

    pub fn from_ingredient_set(
        ingredients: &IngredientSet,
        food_type: Option<String>,
    ) -> Result<Self, CoreError> {
        Self::new(ingredients.iter(), food_type)
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn food_type(&self) -> Option<&str> {
        self.food_type.as_deref()
    }
}
