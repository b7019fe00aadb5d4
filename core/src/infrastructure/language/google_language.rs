use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LanguageConfig, entities::app_errors::CoreError},
    ingredient::{entities::AnalyzedEntity, ports::EntityAnalyzer},
};
use crate::infrastructure::API_KEY_HEADER;

#[derive(Debug, Clone)]
pub struct GoogleLanguageEntityAnalyzer {
    api_key: String,
    endpoint: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeEntitiesRequest {
    document: Document,
    encoding_type: String,
}

#[derive(Debug, Serialize)]
struct Document {
    #[serde(rename = "type")]
    kind: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnalyzeEntitiesResponse {
    #[serde(default)]
    entities: Vec<Entity>,
}

#[derive(Debug, Deserialize)]
struct Entity {
    name: String,
    #[serde(default)]
    salience: f32,
}

impl From<AnalyzeEntitiesResponse> for Vec<AnalyzedEntity> {
    fn from(response: AnalyzeEntitiesResponse) -> Self {
        response
            .entities
            .into_iter()
            .map(|entity| AnalyzedEntity {
                name: entity.name,
                salience: entity.salience,
            })
            .collect()
    }
}

impl GoogleLanguageEntityAnalyzer {
    pub fn new(config: LanguageConfig, client: Client) -> Self {
        Self {
            api_key: config.api_key,
            endpoint: config.endpoint,
            client,
        }
    }

    fn build_request(text: String) -> AnalyzeEntitiesRequest {
        AnalyzeEntitiesRequest {
            document: Document {
                kind: "PLAIN_TEXT".to_string(),
                content: text,
            },
            encoding_type: "UTF8".to_string(),
        }
    }
}

impl EntityAnalyzer for GoogleLanguageEntityAnalyzer {
    async fn analyze_entities(&self, text: String) -> Result<Vec<AnalyzedEntity>, CoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&Self::build_request(text))
            .send()
            .await
            .map_err(|e| {
                CoreError::AnalysisFailure(format!("Language API error: {}", e.without_url()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CoreError::AnalysisFailure(format!(
                "Language API returned error: {} - {}",
                status, error_text
            )));
        }

        let parsed: AnalyzeEntitiesResponse = response.json().await.map_err(|e| {
            CoreError::AnalysisFailure(format!(
                "Failed to parse Language response: {}",
                e.without_url()
            ))
        })?;

        Ok(parsed.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let value =
            serde_json::to_value(GoogleLanguageEntityAnalyzer::build_request("Tomato".into()))
                .unwrap();

        assert_eq!(
            value,
            json!({
                "document": { "type": "PLAIN_TEXT", "content": "Tomato" },
                "encodingType": "UTF8"
            })
        );
    }

    #[test]
    fn test_entities_from_response() {
        let response: AnalyzeEntitiesResponse = serde_json::from_value(json!({
            "entities": [
                { "name": "Tomato", "type": "CONSUMER_GOOD", "salience": 1.0, "mentions": [] },
                { "name": "sauce", "type": "OTHER" }
            ],
            "language": "en"
        }))
        .unwrap();

        let entities: Vec<AnalyzedEntity> = response.into();
        assert_eq!(
            entities,
            vec![
                AnalyzedEntity { name: "Tomato".to_string(), salience: 1.0 },
                AnalyzedEntity { name: "sauce".to_string(), salience: 0.0 },
            ]
        );
    }

    #[test]
    fn test_missing_entities_is_empty() {
        let response: AnalyzeEntitiesResponse =
            serde_json::from_value(json!({ "language": "en" })).unwrap();
        let entities: Vec<AnalyzedEntity> = response.into();
        assert!(entities.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_analysis_failure() {
        let analyzer = GoogleLanguageEntityAnalyzer::new(
            LanguageConfig {
                api_key: "test-key".to_string(),
                endpoint: "http://127.0.0.1:9/v1/documents:analyzeEntities".to_string(),
            },
            Client::new(),
        );

        let result = analyzer.analyze_entities("Tomato".to_string()).await;
        assert!(matches!(result, Err(CoreError::AnalysisFailure(_))));
    }

    #[tokio::test]
    async fn test_transport_error_hides_api_key() {
        let analyzer = GoogleLanguageEntityAnalyzer::new(
            LanguageConfig {
                api_key: "SUPER-SECRET-KEY".to_string(),
                endpoint: "http://127.0.0.1:9/v1/documents:analyzeEntities".to_string(),
            },
            Client::new(),
        );

        let err = analyzer
            .analyze_entities("Tomato".to_string())
            .await
            .unwrap_err();
        assert!(!err.to_string().contains("SUPER-SECRET-KEY"));
    }
}
