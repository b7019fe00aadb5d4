pub mod catalog_repository;
pub mod recipe_source;

pub use catalog_repository::PostgresCatalogSearch;
pub use recipe_source::RecipeSource;
