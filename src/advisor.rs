// Advisor - wires config, client, catalog cache and engine for one player
use crate::client::{ArcClient, StashQuery};
use crate::config::{load_api_keys, ArcConfig};
use crate::formatter::{self, PageOptions};
use crate::models::{OptimizeParams, UserProfile};
use crate::operations::*;
use crate::storage::CatalogCache;
use crate::{v_info, v_summary};

/// A rendered command result: titled pages of text
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub sections: Vec<ReportSection>,
}

#[derive(Debug, Clone)]
pub struct ReportSection {
    pub title: String,
    pub pages: Vec<String>,
}

impl Report {
    fn push(&mut self, title: &str, pages: Vec<String>) {
        self.sections.push(ReportSection { title: title.to_string(), pages });
    }

    pub fn print(&self) {
        for section in &self.sections {
            let total = section.pages.len();
            for (i, page) in section.pages.iter().enumerate() {
                if total > 1 {
                    v_summary!("\n═══ {} ({}/{}) ═══", section.title, i + 1, total);
                } else {
                    v_summary!("\n═══ {} ═══", section.title);
                }
                v_summary!("{}", page);
            }
        }
    }
}

pub struct Advisor {
    pub client: ArcClient,
    pub config: ArcConfig,
    cache: CatalogCache,
    stash_query: StashQuery,
}

impl Advisor {
    pub fn new(config: ArcConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let keys = load_api_keys(&config.api)?;
        let client = ArcClient::new(&config.api.base_url, &keys.app_key, &keys.user_key)?;
        let cache = CatalogCache::new(config.caching.catalog_refresh_hours);
        let stash_query = StashQuery {
            locale: config.api.locale.clone(),
            per_page: config.api.per_page,
            sort: config.api.sort.clone(),
        };

        Ok(Self {
            client,
            config,
            cache,
            stash_query,
        })
    }

    fn page_options(&self, show_all: bool, command_hint: &str) -> PageOptions {
        PageOptions {
            max_rows: self.config.output.max_rows,
            show_all,
            command_hint: command_hint.to_string(),
        }
    }

    pub async fn sell_report(&mut self, show_all: bool) -> Result<Report, Box<dyn std::error::Error>> {
        let catalogs = self.cache.ensure(&self.client).await?;
        let stash = self.client.get_stash(&self.stash_query).await?;

        let recommendations = analyze_sell(&stash, &catalogs.items, &catalogs.recycle_table);
        v_info!("💰 {} stacks are worth more sold", recommendations.len());

        let mut report = Report::default();
        report.push(
            "💰 Items to Sell",
            formatter::format_recommendations(&recommendations, &self.page_options(show_all, "arc_stash sell --all"), false),
        );
        Ok(report)
    }

    pub async fn recycle_report(&mut self, show_all: bool) -> Result<Report, Box<dyn std::error::Error>> {
        let catalogs = self.cache.ensure(&self.client).await?;
        let stash = self.client.get_stash(&self.stash_query).await?;

        let recommendations = analyze_recycle(&stash, &catalogs.items, &catalogs.recycle_table);
        v_info!("♻️ {} stacks are worth more recycled", recommendations.len());

        let mut report = Report::default();
        report.push(
            "♻ Items to Recycle",
            formatter::format_recommendations(&recommendations, &self.page_options(show_all, "arc_stash recycle --all"), false),
        );
        Ok(report)
    }

    pub async fn optimize_report(&mut self, params: &OptimizeParams, show_all: bool) -> Result<Report, Box<dyn std::error::Error>> {
        let catalogs = self.cache.ensure(&self.client).await?;
        let stash = self.client.get_stash(&self.stash_query).await?;

        let result = analyze_optimize(&stash, &catalogs.items, &catalogs.recycle_table, &catalogs.quests, params);
        let options = self.page_options(show_all, "arc_stash optimize --all");

        let mut report = Report::default();
        if !result.sell.is_empty() {
            report.push("💰 SELL", formatter::format_recommendations(&result.sell, &options, true));
        }
        if !result.recycle.is_empty() {
            report.push("♻ RECYCLE", formatter::format_recommendations(&result.recycle, &options, true));
        }
        if !result.hold.is_empty() {
            report.push("📦 HOLD", formatter::format_recommendations(&result.hold, &options, true));
        }
        report.push("Optimization Summary", vec![formatter::format_optimize_summary(&result, params)]);
        Ok(report)
    }

    pub async fn find_report(&mut self, query: &str, show_all: bool) -> Result<Report, Box<dyn std::error::Error>> {
        let catalogs = self.cache.ensure(&self.client).await?;
        let stash = self.client.get_stash(&self.stash_query).await?;

        let mut report = Report::default();
        match find_recycle_sources(query, &stash, &catalogs.items) {
            Some(search) => {
                let hint = format!("arc_stash find --all {}", query);
                let title = format!("🔍 Stash → {}", search.target.display_name());
                report.push(&title, formatter::format_recycle_sources(&search.sources, &self.page_options(show_all, &hint)));
            }
            None => report.push("🔍 Search", vec![format!("No item found matching \"{}\".", query)]),
        }
        Ok(report)
    }

    pub async fn profile(&self) -> Result<UserProfile, Box<dyn std::error::Error>> {
        Ok(self.client.get_profile().await?)
    }
}
