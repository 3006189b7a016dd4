pub mod forecaster;
pub mod pipeline;
pub mod timeline;
