use crate::domain::recipe::entities::RecipeQuery;

/// Natural-language search query, e.g. `"Italian recipes with tomato, basil"`.
pub fn build_search_query(query: &RecipeQuery) -> String {
    let ingredients = query.ingredients().join(", ");

    match query.food_type() {
        Some(food_type) => format!("{food_type} recipes with {ingredients}"),
        None => format!("recipes with {ingredients}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_without_food_type() {
        let query = RecipeQuery::new(["tomato", "cheese", "basil"], None).unwrap();
        assert_eq!(build_search_query(&query), "recipes with tomato, cheese, basil");
    }

    #[test]
    fn test_query_with_food_type() {
        let query = RecipeQuery::new(["tofu"], Some("Vegan".to_string())).unwrap();
        assert_eq!(build_search_query(&query), "Vegan recipes with tofu");
    }

    #[test]
    fn test_query_embeds_every_ingredient() {
        let sets: [&[&str]; 3] = [
            &["egg"],
            &["sweet potato", "black beans"],
            &["flour", "sugar", "butter", "milk", "egg"],
        ];
        for ingredients in sets {
            let query = RecipeQuery::new(ingredients.iter().copied(), None).unwrap();
            let text = build_search_query(&query);
            for ingredient in ingredients {
                assert!(text.contains(ingredient), "{text} is missing {ingredient}");
            }
        }
    }
}
