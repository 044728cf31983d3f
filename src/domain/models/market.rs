#[cfg(test)]
#[path = "market_test.rs"]
mod tests;

use std::fmt;

use async_trait::async_trait;

pub const UNAVAILABLE: &str = "N/A";

/// A single value scraped from a page. Scrapes never fail loudly, they come
/// back `Unavailable` and render as `N/A`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Reading {
    Available(String),
    #[default]
    Unavailable,
}

impl Reading {
    pub fn from_text(text: &str) -> Reading {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Reading::Unavailable;
        }

        return Reading::Available(trimmed.to_string());
    }

    pub fn is_available(&self) -> bool {
        return matches!(self, Reading::Available(_));
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Available(text) => return write!(f, "{text}"),
            Reading::Unavailable => return write!(f, "{UNAVAILABLE}"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockchainStats {
    pub price: Reading,
    pub block_height: Reading,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Reading,
    pub max: Reading,
}

impl PriceRange {
    /// Parses text shaped like `MIN - MAX`. Anything other than exactly one
    /// dash leaves both bounds unavailable.
    pub fn parse(text: &str) -> PriceRange {
        let parts = text.split('-').collect::<Vec<&str>>();
        if parts.len() != 2 {
            return PriceRange::default();
        }

        return PriceRange {
            min: Reading::from_text(parts[0]),
            max: Reading::from_text(parts[1]),
        };
    }
}

/// The pages a `MarketSource` reads from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarketPage {
    BlockchainStats,
    PriceRange,
    Volume,
    Rsi,
}

/// Everything scraped for one question. Collected once and shared by every
/// consumer of the question so each page is only fetched a single time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarketSnapshot {
    pub price: Reading,
    pub block_height: Reading,
    pub volume: Reading,
    pub rsi: Reading,
    pub min_price: Reading,
    pub max_price: Reading,
    /// Pages cited for this snapshot. The blockchain stats page is always
    /// cited, the others only when they yielded a reading.
    pub sources: Vec<String>,
}

impl MarketSnapshot {
    #[cfg(test)]
    pub fn unavailable() -> MarketSnapshot {
        return MarketSnapshot::default();
    }

    pub async fn collect(source: &MarketSourceBox) -> MarketSnapshot {
        let (stats, range, volume, rsi) = tokio::join!(
            source.blockchain_stats(),
            source.price_range(),
            source.volume(),
            source.rsi()
        );

        let mut sources = vec![source.page_url(MarketPage::BlockchainStats)];
        if range.min.is_available() || range.max.is_available() {
            sources.push(source.page_url(MarketPage::PriceRange));
        }
        if volume.is_available() {
            sources.push(source.page_url(MarketPage::Volume));
        }
        if rsi.is_available() {
            sources.push(source.page_url(MarketPage::Rsi));
        }

        let snapshot = MarketSnapshot {
            price: stats.price,
            block_height: stats.block_height,
            volume,
            rsi,
            min_price: range.min,
            max_price: range.max,
            sources,
        };

        tracing::debug!(snapshot = ?snapshot, "Collected market snapshot");

        return snapshot;
    }

    pub fn available_count(&self) -> usize {
        return [
            &self.price,
            &self.block_height,
            &self.volume,
            &self.rsi,
            &self.min_price,
            &self.max_price,
        ]
        .iter()
        .filter(|reading| return reading.is_available())
        .count();
    }
}

#[async_trait]
pub trait MarketSource {
    /// Current price and latest block height from the mempool explorer.
    async fn blockchain_stats(&self) -> BlockchainStats;

    /// Price range shown on the search engine's result card.
    async fn price_range(&self) -> PriceRange;

    /// 24 hour trading volume.
    async fn volume(&self) -> Reading;

    /// Relative strength index from the technical indicators page.
    async fn rsi(&self) -> Reading;

    fn page_url(&self, page: MarketPage) -> String;
}

pub type MarketSourceBox = Box<dyn MarketSource + Send + Sync>;
