use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    ingredient::{
        entities::{IngredientCandidate, IngredientSet},
        helpers::{accepted_names, confidence_gate, deduplicate_ingredients},
        ports::{IngredientService, LabelDetector, RelevanceFilter},
        value_objects::ExtractIngredientsInput,
    },
    recipe::ports::RecipeSearch,
    storage::{ports::ImageStorage, value_objects::ensure_image_payload},
};

impl<LD, RF, RS, IS> IngredientService for Service<LD, RF, RS, IS>
where
    LD: LabelDetector,
    RF: RelevanceFilter,
    RS: RecipeSearch,
    IS: ImageStorage,
{
    #[instrument(skip(self, input), fields(image_bytes = input.image_data.len()))]
    async fn extract_ingredients(
        &self,
        input: ExtractIngredientsInput,
    ) -> Result<IngredientSet, CoreError> {
        ensure_image_payload(&input.image_data, input.mime_type.as_deref())?;

        // 1. Detect labels
        let labels = self
            .label_detector
            .detect_labels(input.image_data)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Label detection failed"))?;

        let detected: Vec<&str> = labels.iter().map(|l| l.name.as_str()).collect();
        info!(labels = ?detected, "Detected labels");

        // 2. Confidence gate
        let candidates: Vec<IngredientCandidate> =
            confidence_gate(labels, self.pipeline.confidence_threshold)
                .into_iter()
                .map(IngredientCandidate::from)
                .collect();

        // 3. Relevance filter
        let verdicts = self.relevance_filter.classify(candidates).await;

        // 4. Deduplicate
        let ingredients =
            deduplicate_ingredients(accepted_names(verdicts), &self.pipeline.generic_terms);

        info!(ingredients = ?ingredients.as_slice(), "Filtered ingredients");

        Ok(ingredients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{PipelineConfig, RelevanceStrategy},
        ingredient::{
            entities::{AnalyzedEntity, DetectedLabel},
            ports::{MockEntityAnalyzer, MockLabelDetector},
            relevance::{AllowListFilter, IngredientFilter, SalienceFilter},
        },
        recipe::ports::MockRecipeSearch,
        storage::ports::MockImageStorage,
    };
    use bytes::Bytes;

    type TestService =
        Service<MockLabelDetector, IngredientFilter<MockEntityAnalyzer>, MockRecipeSearch, MockImageStorage>;

    fn detector_returning(labels: Vec<DetectedLabel>) -> MockLabelDetector {
        let mut detector = MockLabelDetector::new();
        detector.expect_detect_labels().times(1).returning(move |_| {
            let labels = labels.clone();
            Box::pin(async move { Ok(labels) })
        });
        detector
    }

    fn service(detector: MockLabelDetector, filter: IngredientFilter<MockEntityAnalyzer>) -> TestService {
        Service::new(
            detector,
            filter,
            MockRecipeSearch::new(),
            MockImageStorage::new(),
            PipelineConfig::default(),
        )
    }

    fn input() -> ExtractIngredientsInput {
        ExtractIngredientsInput {
            image_data: Bytes::from_static(b"\xFF\xD8\xFF\xE0fake-jpeg"),
            mime_type: Some("image/jpeg".to_string()),
        }
    }

    #[tokio::test]
    async fn test_allow_list_pipeline() {
        let detector = detector_returning(vec![
            DetectedLabel::new("Tomato", 0.9),
            DetectedLabel::new("Plate", 0.4),
            DetectedLabel::new("Cheese", 0.75),
        ]);
        let service = service(detector, IngredientFilter::AllowList(AllowListFilter));

        let ingredients = service.extract_ingredients(input()).await.unwrap();

        assert_eq!(ingredients.len(), 2);
        assert!(ingredients.contains("tomato"));
        assert!(ingredients.contains("cheese"));
    }

    #[tokio::test]
    async fn test_pipeline_drops_generic_terms_and_duplicates() {
        let detector = detector_returning(vec![
            DetectedLabel::new("Food", 0.99),
            DetectedLabel::new("Apple", 0.95),
            DetectedLabel::new("apple", 0.9),
            DetectedLabel::new("Ingredient", 0.9),
        ]);
        let mut analyzer = MockEntityAnalyzer::new();
        analyzer.expect_analyze_entities().returning(|text: String| {
            Box::pin(async move {
                Ok(vec![AnalyzedEntity {
                    name: text,
                    salience: 1.0,
                }])
            })
        });
        let filter = IngredientFilter::Salience(SalienceFilter::new(analyzer, 0.3, 4));
        let service = service(detector, filter);

        let ingredients = service.extract_ingredients(input()).await.unwrap();

        assert_eq!(ingredients.as_slice(), &["apple".to_string()]);
    }

    #[tokio::test]
    async fn test_salience_pipeline_survives_one_failed_lookup() {
        let detector = detector_returning(vec![
            DetectedLabel::new("Tomato", 0.9),
            DetectedLabel::new("Burrata", 0.85),
            DetectedLabel::new("Basil", 0.8),
        ]);
        let mut analyzer = MockEntityAnalyzer::new();
        analyzer
            .expect_analyze_entities()
            .times(3)
            .returning(|text: String| {
                Box::pin(async move {
                    if text == "Burrata" {
                        return Err(CoreError::AnalysisFailure("timed out".to_string()));
                    }
                    let name = if text == "Basil" {
                        "Herb food".to_string()
                    } else {
                        text
                    };
                    Ok(vec![AnalyzedEntity {
                        name,
                        salience: 0.9,
                    }])
                })
            });
        let filter = IngredientFilter::Salience(SalienceFilter::new(analyzer, 0.3, 2));
        let service = service(detector, filter);

        let ingredients = service.extract_ingredients(input()).await.unwrap();

        assert_eq!(ingredients.len(), 2);
        assert!(ingredients.contains("tomato"));
        assert!(ingredients.contains("basil"));
        assert!(!ingredients.contains("burrata"));
    }

    #[tokio::test]
    async fn test_detection_failure_is_propagated() {
        let mut detector = MockLabelDetector::new();
        detector.expect_detect_labels().times(1).returning(|_| {
            Box::pin(async {
                Err(CoreError::DetectionFailure("connection refused".to_string()))
            })
        });
        let service = service(detector, IngredientFilter::AllowList(AllowListFilter));

        let result = service.extract_ingredients(input()).await;

        assert_eq!(
            result,
            Err(CoreError::DetectionFailure("connection refused".to_string()))
        );
    }

    #[tokio::test]
    async fn test_empty_image_is_rejected_before_detection() {
        let mut detector = MockLabelDetector::new();
        detector.expect_detect_labels().never();
        let service = service(detector, IngredientFilter::AllowList(AllowListFilter));

        let result = service
            .extract_ingredients(ExtractIngredientsInput {
                image_data: Bytes::new(),
                mime_type: None,
            })
            .await;

        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_non_image_upload_is_rejected() {
        let mut detector = MockLabelDetector::new();
        detector.expect_detect_labels().never();
        let service = service(detector, IngredientFilter::AllowList(AllowListFilter));

        let result = service
            .extract_ingredients(ExtractIngredientsInput {
                image_data: Bytes::from_static(b"name,qty\ntomato,2"),
                mime_type: Some("text/csv".to_string()),
            })
            .await;

        assert!(matches!(result, Err(CoreError::UnsupportedMedia(_))));
    }

    #[tokio::test]
    async fn test_threshold_comes_from_pipeline_config() {
        let detector = detector_returning(vec![
            DetectedLabel::new("Tomato", 0.72),
            DetectedLabel::new("Onion", 0.69),
        ]);
        let service: TestService = Service::new(
            detector,
            IngredientFilter::AllowList(AllowListFilter),
            MockRecipeSearch::new(),
            MockImageStorage::new(),
            PipelineConfig {
                confidence_threshold: 0.7,
                relevance_strategy: RelevanceStrategy::AllowList,
                ..PipelineConfig::default()
            },
        );

        let ingredients = service.extract_ingredients(input()).await.unwrap();

        assert_eq!(ingredients.as_slice(), &["tomato".to_string()]);
    }
}
