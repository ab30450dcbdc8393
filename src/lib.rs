// Arc Raiders stash advisor library
// Decides whether each stash item is best sold, recycled or held for quests

pub mod models;
pub mod client;
pub mod operations;
pub mod advisor;
pub mod storage;
pub mod config;
pub mod formatter;
pub mod verbosity;

// Re-export commonly used types
pub use models::{
    item::{Item, ItemQuantity},
    quest::Quest,
    stash::StashItem,
    recommendation::*,
};

pub use client::{ArcClient, CatalogSource};
pub use advisor::Advisor;
pub use config::ArcConfig;
pub use storage::{CatalogCache, CatalogSnapshot};

// Constants
pub const API_BASE_URL: &str = "https://arctracker.io";
pub const DEFAULT_CONFIG_PATH: &str = "config/arc_stash.toml";
pub const APP_KEY_FILE: &str = "ARC_APP_KEY";
pub const USER_KEY_FILE: &str = "ARC_USER_KEY";
pub const APP_KEY_ENV: &str = "ARC_API_KEY";
pub const USER_KEY_ENV: &str = "ARC_USER_KEY";
