pub mod google_custom_search;

pub use google_custom_search::GoogleCustomSearch;
