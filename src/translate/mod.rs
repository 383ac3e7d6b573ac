// Language detection and translation: trait-based so the HTTP backend can
// be swapped for an offline passthrough (or a different service) without
// touching the analysis pipeline.

pub mod google;
pub mod traits;
