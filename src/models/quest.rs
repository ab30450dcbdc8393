use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::item::{ItemQuantity, LocalizedString};

/// A quest from GET /api/quests
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Quest {
    pub id: String,
    #[serde(default)]
    pub name: LocalizedString,
    #[serde(default)]
    pub description: LocalizedString,
    #[serde(default)]
    pub trader: String,
    /// Free text, one localized string per objective
    #[serde(default)]
    pub objectives: Vec<LocalizedString>,
    #[serde(rename = "rewardItemIds", default)]
    pub reward_item_ids: Vec<ItemQuantity>,
    #[serde(default)]
    pub xp: u64,
    #[serde(rename = "previousQuestIds", default)]
    pub previous_quest_ids: Vec<String>,
    #[serde(rename = "nextQuestIds", default)]
    pub next_quest_ids: Vec<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub map: Vec<String>,
    #[serde(rename = "objectivesOneRound", default)]
    pub objectives_one_round: bool,
    #[serde(rename = "videoUrl", default)]
    pub video_url: Option<String>,
    #[serde(rename = "otherRequirements", default)]
    pub other_requirements: Vec<String>,
    #[serde(rename = "grantedItemIds", default)]
    pub granted_item_ids: Vec<ItemQuantity>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QuestsResponse {
    #[serde(default)]
    pub version: String,
    #[serde(rename = "generatedAt", default)]
    pub generated_at: String,
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: String,
    pub quests: HashMap<String, Quest>,
    #[serde(rename = "totalQuests", default)]
    pub total_quests: usize,
}
