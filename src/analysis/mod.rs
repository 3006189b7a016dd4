pub mod scoring;
pub mod summary;
pub mod weighting;
