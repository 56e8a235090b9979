// src/scrape/mod.rs
pub mod debt;

pub use debt::{dataset_from_document, fetch};
