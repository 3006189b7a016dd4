pub mod models;
pub mod indicators;
pub mod analysis;
pub mod core;
