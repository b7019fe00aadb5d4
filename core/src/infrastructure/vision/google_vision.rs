use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{VisionConfig, entities::app_errors::CoreError},
    ingredient::{entities::DetectedLabel, ports::LabelDetector},
};
use crate::infrastructure::API_KEY_HEADER;

#[derive(Debug, Clone)]
pub struct GoogleVisionLabelDetector {
    api_key: String,
    endpoint: String,
    max_results: u32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct AnnotateRequest {
    requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Serialize)]
struct AnnotateImageRequest {
    image: Image,
    features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
struct Image {
    content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Feature {
    #[serde(rename = "type")]
    kind: String,
    max_results: u32,
}

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    #[serde(default)]
    label_annotations: Vec<LabelAnnotation>,
    error: Option<Status>,
}

#[derive(Debug, Deserialize)]
struct LabelAnnotation {
    description: String,
    #[serde(default)]
    score: f32,
}

#[derive(Debug, Deserialize)]
struct Status {
    #[serde(default)]
    code: i32,
    #[serde(default)]
    message: String,
}

impl GoogleVisionLabelDetector {
    pub fn new(config: VisionConfig, client: Client) -> Self {
        Self {
            api_key: config.api_key,
            endpoint: config.endpoint,
            max_results: config.max_results,
            client,
        }
    }

    fn build_request(&self, image_data: &[u8]) -> AnnotateRequest {
        AnnotateRequest {
            requests: vec![AnnotateImageRequest {
                image: Image {
                    content: general_purpose::STANDARD.encode(image_data),
                },
                features: vec![Feature {
                    kind: "LABEL_DETECTION".to_string(),
                    max_results: self.max_results,
                }],
            }],
        }
    }

    async fn call_vision_api(&self, request: AnnotateRequest) -> Result<AnnotateResponse, CoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Vision API request failed: {}", e);
                CoreError::DetectionFailure(format!("Vision API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Vision API error: {} - {}", status, error_text);
            return Err(CoreError::DetectionFailure(format!(
                "Vision API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse Vision response: {}", e);
            CoreError::DetectionFailure(format!("Failed to parse Vision response: {}", e))
        })
    }
}

/// Labels of the first (and only) image response, in the service's order.
fn labels_from_response(response: AnnotateResponse) -> Result<Vec<DetectedLabel>, CoreError> {
    let Some(first) = response.responses.into_iter().next() else {
        return Ok(Vec::new());
    };

    if let Some(status) = first.error {
        tracing::error!(code = status.code, "Vision API rejected the image: {}", status.message);
        return Err(CoreError::DetectionFailure(format!(
            "Vision API rejected the image: {} ({})",
            status.message, status.code
        )));
    }

    Ok(first
        .label_annotations
        .into_iter()
        .map(|annotation| DetectedLabel::new(annotation.description, annotation.score))
        .collect())
}

impl LabelDetector for GoogleVisionLabelDetector {
    async fn detect_labels(&self, image_data: Bytes) -> Result<Vec<DetectedLabel>, CoreError> {
        let request = self.build_request(&image_data);
        let response = self.call_vision_api(request).await?;
        labels_from_response(response)
    }
}
