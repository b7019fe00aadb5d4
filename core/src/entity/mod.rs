pub mod recipe_catalog;
