// Client module - ArcTracker API client and the catalog source seam
pub mod api;
pub mod error;

pub use api::{ArcClient, StashQuery};
pub use error::{ArcApiError, ClientError};

use crate::models::{Item, Quest};
use async_trait::async_trait;
use std::collections::HashMap;

/// Where the static catalogs come from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_items(&self) -> Result<HashMap<String, Item>, ClientError>;
    async fn fetch_quests(&self) -> Result<HashMap<String, Quest>, ClientError>;
}
