pub mod catalog;
pub mod config;
pub mod errors;
pub mod passage;
pub mod resolution;
pub mod types;
