use serde::{Deserialize, Serialize};
use crate::models::OptimizeParams;
use crate::v_info;
use std::fs;
use std::path::Path;

const STASH_SORTS: [&str; 3] = ["slot", "name", "quantity"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcConfig {
    pub api: ApiConfig,
    pub optimizer: OptimizeParams,
    pub caching: CachingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// ArcTracker base URL, without trailing slash
    pub base_url: String,
    /// Locale requested for stash item names
    pub locale: String,
    /// Stash page size (1-100)
    pub per_page: u32,
    /// Stash sort order: slot, name or quantity
    pub sort: String,
    /// File holding the application key (overridden by ARC_API_KEY)
    pub app_key_file: String,
    /// File holding the user's personal key (overridden by ARC_USER_KEY)
    pub user_key_file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CachingConfig {
    /// Hours before the item/quest catalogs are fetched again
    pub catalog_refresh_hours: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Table rows per printed page
    pub max_rows: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: crate::API_BASE_URL.to_string(),
            locale: "en".to_string(),
            per_page: 50,
            sort: "slot".to_string(),
            app_key_file: crate::APP_KEY_FILE.to_string(),
            user_key_file: crate::USER_KEY_FILE.to_string(),
        }
    }
}

impl Default for CachingConfig {
    fn default() -> Self {
        Self { catalog_refresh_hours: 12 }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { max_rows: 28 }
    }
}

impl ArcConfig {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_or_create(config_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if Path::new(config_path).exists() {
            v_info!("📋 Loading configuration from {}", config_path);
            let config_str = fs::read_to_string(config_path)?;
            let config: ArcConfig = toml::from_str(&config_str)?;
            Ok(config)
        } else {
            v_info!("📋 Creating default configuration at {}", config_path);
            let config = ArcConfig::default();
            config.save(config_path)?;
            v_info!("💡 Edit {} to customize the advisor", config_path);
            Ok(config)
        }
    }

    pub fn save(&self, config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = Path::new(config_path).parent() {
            fs::create_dir_all(parent)?;
        }

        let config_str = toml::to_string_pretty(self)?;
        fs::write(config_path, config_str)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if !(1..=100).contains(&self.api.per_page) {
            return Err("per_page must be between 1 and 100".to_string());
        }
        if !STASH_SORTS.contains(&self.api.sort.as_str()) {
            return Err(format!("sort must be one of {:?}", STASH_SORTS));
        }
        if self.caching.catalog_refresh_hours <= 0 {
            return Err("catalog_refresh_hours must be greater than 0".to_string());
        }
        if self.output.max_rows == 0 {
            return Err("max_rows must be greater than 0".to_string());
        }

        v_info!("✅ Configuration validation passed");
        Ok(())
    }

    pub fn print_summary(&self) {
        v_info!("📋 Configuration Summary:");
        v_info!("   🌐 API: {} (locale {}, {} per page)", self.api.base_url, self.api.locale, self.api.per_page);
        v_info!("   📜 Quest-aware: {}", self.optimizer.quest_aware);
        v_info!("   💵 Min profit: {} credits", self.optimizer.min_profit_threshold);
        v_info!("   🔄 Catalog refresh: {}h", self.caching.catalog_refresh_hours);
    }
}

/// Application and user keys for authenticated endpoints
#[derive(Debug, Clone)]
pub struct ApiKeys {
    pub app_key: String,
    pub user_key: String,
}

/// Read keys from the environment, falling back to the configured key files
pub fn load_api_keys(api: &ApiConfig) -> Result<ApiKeys, Box<dyn std::error::Error>> {
    Ok(ApiKeys {
        app_key: read_key(crate::APP_KEY_ENV, &api.app_key_file)?,
        user_key: read_key(crate::USER_KEY_ENV, &api.user_key_file)?,
    })
}

fn read_key(env_var: &str, key_file: &str) -> Result<String, Box<dyn std::error::Error>> {
    if let Ok(key) = std::env::var(env_var) {
        let key = key.trim().to_string();
        if !key.is_empty() {
            return Ok(key);
        }
    }

    let key = fs::read_to_string(key_file)
        .map_err(|e| format!("Failed to read {} (or set {}): {}", key_file, env_var, e))?
        .trim()
        .to_string();
    if key.is_empty() {
        return Err(format!("{} is empty", key_file).into());
    }
    Ok(key)
}
