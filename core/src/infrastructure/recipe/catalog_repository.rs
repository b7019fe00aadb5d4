use sea_orm::{
    Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select,
    sea_query::{Expr, Func, LikeExpr},
};
use tracing::{error, instrument};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{
            entities::{RecipeQuery, RecipeRecord},
            ports::RecipeSearch,
        },
    },
    entity::recipe_catalog::{Column as CatalogColumn, Entity as CatalogEntity, Model as CatalogModel},
};

/// Recipe lookup against the local `recipe_catalog` table. A recipe matches
/// when any requested ingredient occurs in its ingredient list, ignoring case.
#[derive(Debug, Clone)]
pub struct PostgresCatalogSearch {
    pub db: DatabaseConnection,
    limit: u64,
}

impl PostgresCatalogSearch {
    pub fn new(db: DatabaseConnection, limit: u64) -> Self {
        Self { db, limit }
    }
}

/// `%name%`, lower-cased, with LIKE wildcards in the name escaped.
fn like_pattern(ingredient: &str) -> LikeExpr {
    let escaped = ingredient
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    LikeExpr::new(format!("%{escaped}%")).escape('\\')
}

fn catalog_query(query: &RecipeQuery, limit: u64) -> Select<CatalogEntity> {
    let any_ingredient = query
        .ingredients()
        .iter()
        .fold(Condition::any(), |condition, ingredient| {
            condition.add(
                Expr::expr(Func::lower(Expr::col(CatalogColumn::Ingredients)))
                    .like(like_pattern(ingredient)),
            )
        });

    let mut select = CatalogEntity::find().filter(any_ingredient);

    if let Some(food_type) = query.food_type() {
        select = select.filter(
            Expr::expr(Func::lower(Expr::col(CatalogColumn::FoodType)))
                .eq(food_type.to_lowercase()),
        );
    }

    select
        .order_by_asc(CatalogColumn::Title)
        .order_by_asc(CatalogColumn::Id)
        .limit(limit)
}

impl From<CatalogModel> for RecipeRecord {
    fn from(model: CatalogModel) -> Self {
        RecipeRecord::new(
            Some(model.title).filter(|title| !title.trim().is_empty()),
            model.link,
            model.description,
            model.image_url,
        )
    }
}

impl RecipeSearch for PostgresCatalogSearch {
    #[instrument(skip(self, query))]
    async fn search(&self, query: RecipeQuery) -> Result<Vec<RecipeRecord>, CoreError> {
        let rows = catalog_query(&query, self.limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to query recipe catalog: {}", e);
                CoreError::SearchFailure(format!("Recipe catalog error: {}", e))
            })?;

        Ok(rows.into_iter().map(RecipeRecord::from).collect())
    }
}
