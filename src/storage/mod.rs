// Storage module - catalog caching for the engine
pub mod catalog_cache;

pub use catalog_cache::*;
