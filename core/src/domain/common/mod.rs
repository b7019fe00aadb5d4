use std::{path::PathBuf, time::Duration};

use chrono::{DateTime, Utc};
use rand::{Rng, distributions::Alphanumeric};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.75;
pub const DEFAULT_SALIENCE_THRESHOLD: f32 = 0.3;
pub const DEFAULT_ANALYSIS_CONCURRENCY: usize = 4;
pub const DEFAULT_GENERIC_TERMS: [&str; 5] =
    ["food", "ingredient", "produce", "natural foods", "food group"];

#[derive(Clone, Debug)]
pub struct LunchatronConfig {
    pub http: HttpClientConfig,
    pub vision: VisionConfig,
    pub language: LanguageConfig,
    pub search: SearchConfig,
    pub pipeline: PipelineConfig,
    pub recipe_backend: RecipeBackend,
    pub catalog: Option<CatalogConfig>,
    pub storage: StorageConfig,
}

#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Clone, Debug)]
pub struct VisionConfig {
    pub api_key: String,
    pub endpoint: String,
    pub max_results: u32,
}

#[derive(Clone, Debug)]
pub struct LanguageConfig {
    pub api_key: String,
    pub endpoint: String,
}

#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub api_key: String,
    pub engine_id: String,
    pub endpoint: String,
    pub result_count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RelevanceStrategy {
    #[default]
    AllowList,
    Salience,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RecipeBackend {
    #[default]
    WebSearch,
    Catalog,
}

/// Tunables of the ingredient-extraction pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    pub confidence_threshold: f32,
    pub relevance_strategy: RelevanceStrategy,
    pub salience_threshold: f32,
    pub analysis_concurrency: usize,
    pub generic_terms: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            relevance_strategy: RelevanceStrategy::default(),
            salience_threshold: DEFAULT_SALIENCE_THRESHOLD,
            analysis_concurrency: DEFAULT_ANALYSIS_CONCURRENCY,
            generic_terms: DEFAULT_GENERIC_TERMS
                .iter()
                .map(|term| term.to_string())
                .collect(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub database: DatabaseConfig,
    pub limit: u64,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
