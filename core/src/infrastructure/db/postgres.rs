use sea_orm::{Database, DatabaseConnection};

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    /// Connects and applies the embedded migrations.
    pub async fn new(config: PostgresConfig) -> Result<Self, CoreError> {
        let db = Database::connect(&config.database_url).await.map_err(|e| {
            tracing::error!("Failed to connect to the recipe catalog: {}", e);
            CoreError::InternalServerError
        })?;

        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await
            .map_err(|e| {
                tracing::error!("Failed to run recipe catalog migrations: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
