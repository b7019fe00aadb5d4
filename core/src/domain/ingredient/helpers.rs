use std::collections::HashSet;

use crate::domain::ingredient::entities::{DetectedLabel, IngredientSet, RelevanceVerdict};

/// Keeps labels whose confidence is at least `threshold`, preserving order.
pub fn confidence_gate(labels: Vec<DetectedLabel>, threshold: f32) -> Vec<DetectedLabel> {
    labels
        .into_iter()
        .filter(|label| label.confidence >= threshold)
        .collect()
}

/// Names of the candidates the relevance filter accepted.
pub fn accepted_names(verdicts: Vec<RelevanceVerdict>) -> Vec<String> {
    verdicts
        .into_iter()
        .filter(|verdict| verdict.is_ingredient)
        .map(|verdict| verdict.candidate.name)
        .collect()
}

/// Case-folds, drops generic terms and duplicates. The first occurrence of
/// each name decides its position.
pub fn deduplicate_ingredients<I, S>(names: I, generic_terms: &[String]) -> IngredientSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let generic: HashSet<String> = generic_terms
        .iter()
        .map(|term| term.trim().to_lowercase())
        .collect();

    let mut seen = HashSet::new();
    let mut ingredients = Vec::new();

    for name in names {
        let folded = name.as_ref().trim().to_lowercase();
        if folded.is_empty() || generic.contains(&folded) {
            continue;
        }
        if seen.insert(folded.clone()) {
            ingredients.push(folded);
        }
    }

    IngredientSet::from_normalized(ingredients)
}
