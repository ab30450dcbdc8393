use serde::{Deserialize, Serialize};

/// One stack in the player's stash
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StashItem {
    #[serde(rename = "itemId")]
    pub item_id: String,
    /// Name as reported by the stash endpoint; the catalog name wins when known
    #[serde(default)]
    pub name: String,
    pub quantity: u32,
    #[serde(rename = "slotIndex", default)]
    pub slot_index: u32,
}

impl StashItem {
    pub fn new(item_id: &str, quantity: u32) -> Self {
        Self {
            item_id: item_id.to_string(),
            name: String::new(),
            quantity,
            slot_index: 0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StashCurrencies {
    pub credits: u64,
    pub cred: u64,
    #[serde(rename = "raiderTokens")]
    pub raider_tokens: u64,
    pub xp: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StashSlots {
    pub used: u32,
    pub max: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Pagination {
    pub page: u32,
    #[serde(rename = "perPage")]
    pub per_page: u32,
    pub total: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StashData {
    pub items: Vec<StashItem>,
    #[serde(default)]
    pub currencies: StashCurrencies,
    #[serde(default)]
    pub slots: StashSlots,
    pub pagination: Pagination,
    #[serde(rename = "syncedAt", default)]
    pub synced_at: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UserProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub username: String,
    #[serde(rename = "playerLevel")]
    pub player_level: u32,
    #[serde(rename = "memberSince")]
    pub member_since: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Meta {
    #[serde(rename = "requestId", default)]
    pub request_id: String,
}

// Authenticated response envelopes
#[derive(Debug, Deserialize)]
pub struct UserStashResponse {
    pub data: StashData,
    #[serde(default)]
    pub meta: Meta,
}

#[derive(Debug, Deserialize)]
pub struct UserProfileResponse {
    pub data: UserProfile,
    #[serde(default)]
    pub meta: Meta,
}

/// Body of a 4xx/5xx response: {"error": {"code": ..., "message": ...}}
#[derive(Debug, Deserialize, Default)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize, Default)]
pub struct ErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
}
