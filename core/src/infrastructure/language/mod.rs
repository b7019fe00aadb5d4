pub mod google_language;

pub use google_language::GoogleLanguageEntityAnalyzer;
