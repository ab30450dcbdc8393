use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use tokio::task::JoinSet;

use crate::client::error::{ArcApiError, ClientError};
use crate::client::CatalogSource;
use crate::models::*;
use crate::{v_debug, v_info};

const APP_KEY_HEADER: &str = "X-App-Key";
const API_LOG_FILE: &str = "arc_api_debug.log";

/// Stash listing options sent with every page request
#[derive(Debug, Clone)]
pub struct StashQuery {
    pub locale: String,
    pub per_page: u32,
    pub sort: String,
}

impl Default for StashQuery {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            per_page: 50,
            sort: "slot".to_string(),
        }
    }
}

/// Async client for the ArcTracker API.
///
/// Public endpoints (items, quests) go out bare; user endpoints (stash,
/// profile) carry the app key and the user's bearer token.
#[derive(Clone)]
pub struct ArcClient {
    client: reqwest::Client,
    base_url: String,
    auth_headers: HeaderMap,
    api_logging: bool,
}

impl ArcClient {
    pub fn new(base_url: &str, app_key: &str, user_key: &str) -> Result<Self, ClientError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut auth_headers = HeaderMap::new();
        auth_headers.insert(
            APP_KEY_HEADER,
            HeaderValue::from_str(app_key).map_err(|e| ClientError::Config(format!("app key: {}", e)))?,
        );
        auth_headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", user_key))
                .map_err(|e| ClientError::Config(format!("user key: {}", e)))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(default_headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_headers,
            api_logging: false,
        })
    }

    pub fn set_api_logging(&mut self, logging: bool) {
        self.api_logging = logging;
    }

    fn log_api_call(&self, url: &str, status: u16, body: &str) {
        if !self.api_logging {
            return;
        }

        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let entry = format!(
            "\n=== API CALL [{timestamp}] ===\n\
             GET {url}\n\
             Response Status: {status}\n\
             Response Body: {body}\n\
             ========================================\n"
        );

        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(API_LOG_FILE) {
            let _ = file.write_all(entry.as_bytes());
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        authenticated: bool,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        v_debug!("🌐 GET {}", url);

        let mut request = self.client.get(&url).query(query);
        if authenticated {
            request = request.headers(self.auth_headers.clone());
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        self.log_api_call(&url, status, &body);

        if status != 200 {
            return Err(parse_error_body(status, &body).into());
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// GET /api/items, keyed by item id
    pub async fn get_items(&self) -> Result<HashMap<String, Item>, ClientError> {
        let response: ItemsResponse = self.get_json("/api/items", false, &[]).await?;
        let items = index_items(response);
        v_info!("📦 Fetched {} catalog items", items.len());
        Ok(items)
    }

    /// GET /api/quests, keyed by quest id
    pub async fn get_quests(&self) -> Result<HashMap<String, Quest>, ClientError> {
        let response: QuestsResponse = self.get_json("/api/quests", false, &[]).await?;
        let quests = index_quests(response);
        v_info!("📜 Fetched {} quests", quests.len());
        Ok(quests)
    }

    async fn get_stash_page(&self, query: &StashQuery, page: u32) -> Result<StashData, ClientError> {
        let params = [
            ("locale", query.locale.clone()),
            ("page", page.to_string()),
            ("per_page", query.per_page.to_string()),
            ("sort", query.sort.clone()),
        ];
        let response: UserStashResponse = self.get_json("/api/v2/user/stash", true, &params).await?;
        Ok(response.data)
    }

    /// Every stash stack across all pages, always fetched fresh.
    ///
    /// Page 1 reports the page count; the remaining pages are fetched
    /// concurrently and appended in page order.
    pub async fn get_stash(&self, query: &StashQuery) -> Result<Vec<StashItem>, ClientError> {
        let first = self.get_stash_page(query, 1).await?;
        let total_pages = first.pagination.total_pages;
        let mut stash = first.items;

        if total_pages > 1 {
            let mut tasks = JoinSet::new();
            for page in 2..=total_pages {
                let client = self.clone();
                let query = query.clone();
                tasks.spawn(async move { (page, client.get_stash_page(&query, page).await) });
            }

            let mut pages = Vec::with_capacity(total_pages as usize - 1);
            while let Some(joined) = tasks.join_next().await {
                let (page, data) = joined?;
                pages.push((page, data?.items));
            }
            pages.sort_by_key(|(page, _)| *page);
            stash.extend(pages.into_iter().flat_map(|(_, items)| items));
        }

        v_info!("🎒 Fetched {} stash stacks over {} page(s)", stash.len(), total_pages.max(1));
        Ok(stash)
    }

    /// GET /api/v2/user/profile
    pub async fn get_profile(&self) -> Result<UserProfile, ClientError> {
        let response: UserProfileResponse = self.get_json("/api/v2/user/profile", true, &[]).await?;
        Ok(response.data)
    }
}

#[async_trait::async_trait]
impl CatalogSource for ArcClient {
    async fn fetch_items(&self) -> Result<HashMap<String, Item>, ClientError> {
        self.get_items().await
    }

    async fn fetch_quests(&self) -> Result<HashMap<String, Quest>, ClientError> {
        self.get_quests().await
    }
}

pub fn index_items(response: ItemsResponse) -> HashMap<String, Item> {
    response.items.into_iter().map(|item| (item.id.clone(), item)).collect()
}

// Quests arrive keyed already; re-key by the quest's own id
pub fn index_quests(response: QuestsResponse) -> HashMap<String, Quest> {
    response.quests.into_values().map(|quest| (quest.id.clone(), quest)).collect()
}

pub fn parse_items(body: &str) -> Result<HashMap<String, Item>, ClientError> {
    Ok(index_items(serde_json::from_str(body)?))
}

pub fn parse_quests(body: &str) -> Result<HashMap<String, Quest>, ClientError> {
    Ok(index_quests(serde_json::from_str(body)?))
}

pub fn parse_stash_page(body: &str) -> Result<StashData, ClientError> {
    let response: UserStashResponse = serde_json::from_str(body)?;
    Ok(response.data)
}

/// Build an [`ArcApiError`] from an error body, defaulting missing fields
pub fn parse_error_body(status: u16, body: &str) -> ArcApiError {
    let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap_or_default();
    ArcApiError {
        status,
        code: envelope.error.code.unwrap_or_else(|| "UNKNOWN".to_string()),
        message: envelope.error.message.unwrap_or_else(|| "Unknown error".to_string()),
    }
}
