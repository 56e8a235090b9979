// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod scrape;

pub mod compare;
pub mod csv;
pub mod data;
pub mod extract;
pub mod file;
pub mod narrative;
pub mod numbers;
pub mod rank;
pub mod report;
