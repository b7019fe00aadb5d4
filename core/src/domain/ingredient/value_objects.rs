use std::{collections::HashSet, sync::LazyLock};

use bytes::Bytes;

/// Common foods accepted by the allow-list strategy.
pub const INGREDIENT_VOCABULARY: [&str; 59] = [
    "tomato",
    "carrot",
    "onion",
    "potato",
    "apple",
    "cheese",
    "chicken",
    "beef",
    "fish",
    "rice",
    "lettuce",
    "pepper",
    "garlic",
    "broccoli",
    "spinach",
    "eggplant",
    "mushroom",
    "zucchini",
    "corn",
    "banana",
    "orange",
    "strawberry",
    "lemon",
    "blueberry",
    "cucumber",
    "chili",
    "asparagus",
    "sweet potato",
    "watermelon",
    "pear",
    "mango",
    "peach",
    "coconut",
    "milk",
    "butter",
    "flour",
    "sugar",
    "chocolate",
    "yogurt",
    "bread",
    "pasta",
    "shrimp",
    "pork",
    "turkey",
    "beans",
    "peas",
    "nuts",
    "almonds",
    "walnuts",
    "cashews",
    "pineapple",
    "papaya",
    "grapes",
    "kiwi",
    "avocado",
    "pumpkin",
    "cabbage",
    "cauliflower",
    "egg",
];

static VOCABULARY: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| INGREDIENT_VOCABULARY.into_iter().collect());

/// Case-insensitive membership in [`INGREDIENT_VOCABULARY`].
pub fn is_known_ingredient(name: &str) -> bool {
    VOCABULARY.contains(name.trim().to_lowercase().as_str())
}

#[derive(Debug, Clone)]
pub struct ExtractIngredientsInput {
    pub image_data: Bytes,
    pub mime_type: Option<String>,
}
