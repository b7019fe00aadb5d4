use std::future::Future;

use bytes::Bytes;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::{
            AnalyzedEntity, DetectedLabel, IngredientCandidate, IngredientSet, RelevanceVerdict,
        },
        value_objects::ExtractIngredientsInput,
    },
};

/// Visual label detector (e.g. Google Cloud Vision)
#[cfg_attr(test, mockall::automock)]
pub trait LabelDetector: Send + Sync {
    /// Labels come back in the detector's own ranking. Transport and service
    /// errors surface as `CoreError::DetectionFailure`.
    fn detect_labels(
        &self,
        image_data: Bytes,
    ) -> impl Future<Output = Result<Vec<DetectedLabel>, CoreError>> + Send;
}

/// Natural-language entity analysis (e.g. Google Natural Language)
#[cfg_attr(test, mockall::automock)]
pub trait EntityAnalyzer: Send + Sync {
    fn analyze_entities(
        &self,
        text: String,
    ) -> impl Future<Output = Result<Vec<AnalyzedEntity>, CoreError>> + Send;
}

/// Decides which candidates name a food ingredient. Never fails: a
/// strategy that cannot reach its backend rejects the affected candidates.
pub trait RelevanceFilter: Send + Sync {
    fn classify(
        &self,
        candidates: Vec<IngredientCandidate>,
    ) -> impl Future<Output = Vec<RelevanceVerdict>> + Send;
}

/// Service trait for the ingredient-extraction pipeline
#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    fn extract_ingredients(
        &self,
        input: ExtractIngredientsInput,
    ) -> impl Future<Output = Result<IngredientSet, CoreError>> + Send;
}
