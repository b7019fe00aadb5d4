use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::DEFAULT_GENERIC_TERMS, ingredient::helpers::deduplicate_ingredients};

/// A label returned by the visual detector, in the detector's own ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectedLabel {
    pub name: String,
    pub confidence: f32,
}

impl DetectedLabel {
    pub fn new(name: impl Into<String>, confidence: f32) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

/// A label that passed the confidence gate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct IngredientCandidate {
    pub name: String,
}

impl From<DetectedLabel> for IngredientCandidate {
    fn from(label: DetectedLabel) -> Self {
        Self { name: label.name }
    }
}

/// A named entity found by the entity-analysis service in a label's text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzedEntity {
    pub name: String,
    pub salience: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceVerdict {
    pub candidate: IngredientCandidate,
    pub is_ingredient: bool,
    /// Salience of the entity that decided the verdict, when the semantic
    /// strategy produced one.
    pub salience: Option<f32>,
}

impl RelevanceVerdict {
    pub fn accepted(candidate: IngredientCandidate, salience: Option<f32>) -> Self {
        Self {
            candidate,
            is_ingredient: true,
            salience,
        }
    }

    pub fn rejected(candidate: IngredientCandidate) -> Self {
        Self {
            candidate,
            is_ingredient: false,
            salience: None,
        }
    }
}

/// Lower-cased, deduplicated ingredient names with generic terms removed.
///
/// Only built through [`crate::domain::ingredient::helpers::deduplicate_ingredients`],
/// which upholds both invariants. Deserializing goes through it as well, with
/// the default generic terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct IngredientSet {
    names: Vec<String>,
}

impl IngredientSet {
    pub(crate) fn from_normalized(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        let folded = name.trim().to_lowercase();
        self.names.iter().any(|n| *n == folded)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

impl<'de> Deserialize<'de> for IngredientSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        let generic_terms: Vec<String> =
            DEFAULT_GENERIC_TERMS.iter().map(|term| term.to_string()).collect();
        Ok(deduplicate_ingredients(names, &generic_terms))
    }
}

impl IntoIterator for IngredientSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_upholds_ingredient_invariants() {
        let set: IngredientSet =
            serde_json::from_str(r#"["Tomato", " tomato ", "Food", "Basil", ""]"#).unwrap();
        assert_eq!(set.as_slice(), ["tomato", "basil"]);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let set: IngredientSet = serde_json::from_str(r#"["Egg"]"#).unwrap();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["egg"]"#);
    }
}
