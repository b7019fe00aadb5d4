use tracing::info;

use crate::{
    domain::{
        common::{
            LunchatronConfig, RecipeBackend, RelevanceStrategy, entities::app_errors::CoreError,
            services::Service,
        },
        ingredient::relevance::{AllowListFilter, IngredientFilter, SalienceFilter},
    },
    infrastructure::{
        build_http_client,
        db::postgres::{Postgres, PostgresConfig},
        language::GoogleLanguageEntityAnalyzer,
        recipe::{PostgresCatalogSearch, RecipeSource},
        search::GoogleCustomSearch,
        storage::LocalImageStorage,
        vision::GoogleVisionLabelDetector,
    },
};

pub type LunchatronService = Service<
    GoogleVisionLabelDetector,
    IngredientFilter<GoogleLanguageEntityAnalyzer>,
    RecipeSource,
    LocalImageStorage,
>;

/// Wires the concrete adapters selected by `config`.
pub async fn create_service(config: LunchatronConfig) -> Result<LunchatronService, CoreError> {
    let client = build_http_client(config.http.timeout)?;

    let label_detector = GoogleVisionLabelDetector::new(config.vision, client.clone());

    let relevance_filter = match config.pipeline.relevance_strategy {
        RelevanceStrategy::AllowList => IngredientFilter::AllowList(AllowListFilter),
        RelevanceStrategy::Salience => IngredientFilter::Salience(SalienceFilter::new(
            GoogleLanguageEntityAnalyzer::new(config.language, client.clone()),
            config.pipeline.salience_threshold,
            config.pipeline.analysis_concurrency,
        )),
    };

    let recipe_search = match config.recipe_backend {
        RecipeBackend::WebSearch => {
            if config.search.engine_id.trim().is_empty() {
                return Err(CoreError::Validation(
                    "a search engine id is required for the web-search backend".to_string(),
                ));
            }
            RecipeSource::WebSearch(GoogleCustomSearch::new(config.search, client))
        }
        RecipeBackend::Catalog => {
            let catalog = config.catalog.ok_or_else(|| {
                CoreError::Validation(
                    "database settings are required for the catalog backend".to_string(),
                )
            })?;
            let postgres = Postgres::new(PostgresConfig {
                database_url: catalog.database.url(),
            })
            .await?;
            RecipeSource::Catalog(PostgresCatalogSearch::new(postgres.get_db(), catalog.limit))
        }
    };

    let image_storage = LocalImageStorage::new(config.storage.upload_dir).await?;

    info!(
        relevance_strategy = ?config.pipeline.relevance_strategy,
        recipe_backend = ?config.recipe_backend,
        confidence_threshold = config.pipeline.confidence_threshold,
        "Service created"
    );

    Ok(Service::new(
        label_detector,
        relevance_filter,
        recipe_search,
        image_storage,
        config.pipeline,
    ))
}
