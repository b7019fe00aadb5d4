pub mod common;
pub mod ingredient;
pub mod recipe;
pub mod storage;
