pub mod google_vision;

pub use google_vision::GoogleVisionLabelDetector;
