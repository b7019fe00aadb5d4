use std::{path::PathBuf, time::Duration};

use clap::{Args as ClapArgs, Parser, ValueEnum};
use lunchatron_core::domain::common::{
    CatalogConfig, DEFAULT_ANALYSIS_CONCURRENCY, DEFAULT_CONFIDENCE_THRESHOLD,
    DEFAULT_SALIENCE_THRESHOLD, DatabaseConfig, HttpClientConfig, LanguageConfig,
    LunchatronConfig, PipelineConfig, RecipeBackend, RelevanceStrategy, SearchConfig,
    StorageConfig, VisionConfig,
};

pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Parser)]
#[command(name = "lunchatron-api", version, about = "Lunchatron ingredient and recipe API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub vision: VisionArgs,

    #[command(flatten)]
    pub language: LanguageArgs,

    #[command(flatten)]
    pub search: SearchArgs,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", name = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", name = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", name = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        name = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "server-metrics", env = "SERVER_METRICS", name = "SERVER_METRICS")]
    pub metrics: bool,

    #[arg(long = "http-timeout-secs", env = "HTTP_TIMEOUT_SECS", name = "HTTP_TIMEOUT_SECS", default_value_t = 10)]
    pub http_timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct VisionArgs {
    #[arg(
        long = "vision-api-key",
        env = "VISION_API_KEY",
        name = "VISION_API_KEY",
        required_unless_present = "GOOGLE_CLOUD_API_KEY"
    )]
    pub api_key: Option<String>,

    /// Shared Google Cloud key used by every adapter without its own key.
    #[arg(long = "google-cloud-api-key", env = "GOOGLE_CLOUD_API_KEY", name = "GOOGLE_CLOUD_API_KEY")]
    pub google_cloud_api_key: Option<String>,

    #[arg(
        long = "vision-endpoint",
        env = "VISION_ENDPOINT",
        name = "VISION_ENDPOINT",
        default_value = "https://vision.googleapis.com/v1/images:annotate"
    )]
    pub endpoint: String,

    #[arg(long = "vision-max-results", env = "VISION_MAX_RESULTS", name = "VISION_MAX_RESULTS", default_value_t = 20)]
    pub max_results: u32,
}

impl VisionArgs {
    /// The Vision key, or the shared Google Cloud key.
    pub fn resolved_api_key(&self) -> String {
        self.api_key
            .clone()
            .or_else(|| self.google_cloud_api_key.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LanguageArgs {
    #[arg(long = "language-api-key", env = "LANGUAGE_API_KEY", name = "LANGUAGE_API_KEY")]
    pub api_key: Option<String>,

    #[arg(
        long = "language-endpoint",
        env = "LANGUAGE_ENDPOINT",
        name = "LANGUAGE_ENDPOINT",
        default_value = "https://language.googleapis.com/v1/documents:analyzeEntities"
    )]
    pub endpoint: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SearchArgs {
    #[arg(long = "search-api-key", env = "SEARCH_API_KEY", name = "SEARCH_API_KEY")]
    pub api_key: Option<String>,

    #[arg(long = "search-engine-id", env = "SEARCH_ENGINE_ID", name = "SEARCH_ENGINE_ID", default_value = "")]
    pub engine_id: String,

    #[arg(
        long = "search-endpoint",
        env = "SEARCH_ENDPOINT",
        name = "SEARCH_ENDPOINT",
        default_value = "https://www.googleapis.com/customsearch/v1"
    )]
    pub endpoint: String,

    #[arg(long = "search-result-count", env = "SEARCH_RESULT_COUNT", name = "SEARCH_RESULT_COUNT", default_value_t = 10)]
    pub result_count: u32,

    #[arg(
        long = "recipe-backend",
        env = "RECIPE_BACKEND",
        name = "RECIPE_BACKEND",
        value_enum,
        default_value_t = RecipeBackendArg::WebSearch
    )]
    pub backend: RecipeBackendArg,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct PipelineArgs {
    #[arg(
        long = "confidence-threshold",
        env = "CONFIDENCE_THRESHOLD",
        name = "CONFIDENCE_THRESHOLD",
        default_value_t = DEFAULT_CONFIDENCE_THRESHOLD
    )]
    pub confidence_threshold: f32,

    #[arg(
        long = "relevance-strategy",
        env = "RELEVANCE_STRATEGY",
        name = "RELEVANCE_STRATEGY",
        value_enum,
        default_value_t = RelevanceStrategyArg::AllowList
    )]
    pub relevance_strategy: RelevanceStrategyArg,

    #[arg(
        long = "salience-threshold",
        env = "SALIENCE_THRESHOLD",
        name = "SALIENCE_THRESHOLD",
        default_value_t = DEFAULT_SALIENCE_THRESHOLD
    )]
    pub salience_threshold: f32,

    #[arg(
        long = "analysis-concurrency",
        env = "ANALYSIS_CONCURRENCY",
        name = "ANALYSIS_CONCURRENCY",
        default_value_t = DEFAULT_ANALYSIS_CONCURRENCY
    )]
    pub analysis_concurrency: usize,

    #[arg(
        long = "generic-terms",
        env = "GENERIC_TERMS",
        name = "GENERIC_TERMS",
        value_delimiter = ',',
        default_value = "food,ingredient,produce,natural foods,food group"
    )]
    pub generic_terms: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct CatalogArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", name = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", name = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", name = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", name = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", name = "DATABASE_NAME", default_value = "lunchatron")]
    pub name: String,

    #[arg(long = "catalog-limit", env = "CATALOG_LIMIT", name = "CATALOG_LIMIT", default_value_t = 10)]
    pub limit: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StorageArgs {
    #[arg(long = "upload-dir", env = "UPLOAD_DIR", name = "UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,

    #[arg(long = "max-image-bytes", env = "MAX_IMAGE_BYTES", name = "MAX_IMAGE_BYTES", default_value_t = DEFAULT_MAX_IMAGE_BYTES)]
    pub max_image_bytes: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-json", env = "LOG_JSON", name = "LOG_JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RelevanceStrategyArg {
    AllowList,
    Salience,
}

impl From<RelevanceStrategyArg> for RelevanceStrategy {
    fn from(value: RelevanceStrategyArg) -> Self {
        match value {
            RelevanceStrategyArg::AllowList => RelevanceStrategy::AllowList,
            RelevanceStrategyArg::Salience => RelevanceStrategy::Salience,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecipeBackendArg {
    WebSearch,
    Catalog,
}

impl From<RecipeBackendArg> for RecipeBackend {
    fn from(value: RecipeBackendArg) -> Self {
        match value {
            RecipeBackendArg::WebSearch => RecipeBackend::WebSearch,
            RecipeBackendArg::Catalog => RecipeBackend::Catalog,
        }
    }
}

impl From<Args> for LunchatronConfig {
    fn from(args: Args) -> Self {
        let shared_key = args.vision.resolved_api_key();

        let catalog = match args.search.backend {
            RecipeBackendArg::Catalog => Some(CatalogConfig {
                database: DatabaseConfig {
                    host: args.catalog.host,
                    port: args.catalog.port,
                    username: args.catalog.user,
                    password: args.catalog.password,
                    name: args.catalog.name,
                },
                limit: args.catalog.limit,
            }),
            RecipeBackendArg::WebSearch => None,
        };

        let generic_terms = args
            .pipeline
            .generic_terms
            .iter()
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();

        LunchatronConfig {
            http: HttpClientConfig {
                timeout: Duration::from_secs(args.server.http_timeout_secs),
            },
            vision: VisionConfig {
                api_key: shared_key.clone(),
                endpoint: args.vision.endpoint,
                max_results: args.vision.max_results,
            },
            language: LanguageConfig {
                api_key: args.language.api_key.unwrap_or_else(|| shared_key.clone()),
                endpoint: args.language.endpoint,
            },
            search: SearchConfig {
                api_key: args.search.api_key.unwrap_or(shared_key),
                engine_id: args.search.engine_id,
                endpoint: args.search.endpoint,
                result_count: args.search.result_count,
            },
            pipeline: PipelineConfig {
                confidence_threshold: args.pipeline.confidence_threshold,
                relevance_strategy: args.pipeline.relevance_strategy.into(),
                salience_threshold: args.pipeline.salience_threshold,
                analysis_concurrency: args.pipeline.analysis_concurrency,
                generic_terms,
            },
            recipe_backend: args.search.backend.into(),
            catalog,
            storage: StorageConfig {
                upload_dir: args.storage.upload_dir,
            },
        }
    }
}
