#[derive(Debug, Clone)]
pub struct SearchRecipesInput {
    pub ingredients: Vec<String>,
    pub food_type: Option<String>,
}
