#[cfg(test)]
#[path = "web_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use super::coinmarketcap;
use super::google;
use super::mempool;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::BlockchainStats;
use crate::domain::models::MarketPage;
use crate::domain::models::MarketSource;
use crate::domain::models::PriceRange;
use crate::domain::models::Reading;

pub fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;

    return Ok(client);
}

/// Scrapes the four market pages. Every failure is logged and swallowed so a
/// broken page only costs its own field.
pub struct WebScrapers {
    client: reqwest::Client,
    mempool_url: String,
    google_url: String,
    volume_url: String,
    rsi_url: String,
}

impl WebScrapers {
    pub fn new(client: reqwest::Client) -> WebScrapers {
        return WebScrapers {
            client,
            mempool_url: mempool::URL.to_string(),
            google_url: google::URL.to_string(),
            volume_url: coinmarketcap::VOLUME_URL.to_string(),
            rsi_url: coinmarketcap::RSI_URL.to_string(),
        };
    }

    pub fn from_config() -> Result<WebScrapers> {
        let timeout = Duration::from_millis(Config::get_number(ConfigKey::RequestTimeout));
        return Ok(WebScrapers::new(http_client(timeout)?));
    }

    async fn fetch(&self, url: &str) -> Option<String> {
        let res = match self.client.get(url).send().await {
            Ok(res) => res,
            Err(err) => {
                tracing::warn!(url = url, error = ?err, "Scrape request failed");
                return None;
            }
        };

        let status = res.status().as_u16();
        if !res.status().is_success() {
            tracing::warn!(url = url, status = status, "Scrape returned a non success status");
            return None;
        }

        match res.text().await {
            Ok(body) => {
                tracing::debug!(url = url, bytes = body.len(), "Scraped page");
                return Some(body);
            }
            Err(err) => {
                tracing::warn!(url = url, error = ?err, "Failed to read scraped page");
                return None;
            }
        }
    }
}

#[async_trait]
impl MarketSource for WebScrapers {
    async fn blockchain_stats(&self) -> BlockchainStats {
        if let Some(body) = self.fetch(&self.mempool_url).await {
            return mempool::extract_blockchain_stats(&body);
        }

        return BlockchainStats::default();
    }

    async fn price_range(&self) -> PriceRange {
        if let Some(body) = self.fetch(&self.google_url).await {
            return google::extract_price_range(&body);
        }

        return PriceRange::default();
    }

    async fn volume(&self) -> Reading {
        if let Some(body) = self.fetch(&self.volume_url).await {
            return coinmarketcap::extract_volume(&body);
        }

        return Reading::Unavailable;
    }

    async fn rsi(&self) -> Reading {
        if let Some(body) = self.fetch(&self.rsi_url).await {
            return coinmarketcap::extract_rsi(&body);
        }

        return Reading::Unavailable;
    }

    fn page_url(&self, page: MarketPage) -> String {
        let url = match page {
            MarketPage::BlockchainStats => &self.mempool_url,
            MarketPage::PriceRange => &self.google_url,
            MarketPage::Volume => &self.volume_url,
            MarketPage::Rsi => &self.rsi_url,
        };

        return url.to_string();
    }
}
