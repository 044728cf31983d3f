#[cfg(test)]
#[path = "tavily_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::RetrievedPassage;
use crate::domain::models::SearchEngine;

// The search endpoint refuses to return more than this many results.
const MAX_RESULTS_CAP: usize = 20;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SearchRequest {
    query: String,
    max_results: usize,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SearchResult {
    #[serde(default)]
    title: Option<String>,
    url: String,
    content: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

pub struct Tavily {
    url: String,
    token: String,
    timeout: Duration,
}

impl Default for Tavily {
    fn default() -> Tavily {
        return Tavily {
            url: Config::get(ConfigKey::TavilyURL),
            token: Config::get(ConfigKey::TavilyToken),
            timeout: Duration::from_millis(Config::get_number(ConfigKey::RequestTimeout)),
        };
    }
}

#[async_trait]
impl SearchEngine for Tavily {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("Tavily URL is not defined");
        }
        if self.token.is_empty() {
            bail!("Tavily token is not defined. Set TAVILY_API_KEY or --tavily-token");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RetrievedPassage>> {
        let req = SearchRequest {
            query: query.to_string(),
            max_results: limit.min(MAX_RESULTS_CAP),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/search", url = self.url))
            .header("Authorization", format!("Bearer {}", self.token))
            .timeout(self.timeout)
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make search request to Tavily"
            );
            bail!("Failed to make search request to Tavily");
        }

        let body = res.json::<SearchResponse>().await?;
        tracing::debug!(results = body.results.len(), "Search response");

        let passages = body
            .results
            .into_iter()
            .take(limit)
            .map(|result| {
                return RetrievedPassage {
                    text: result.content,
                    source_url: result.url,
                    title: result.title,
                };
            })
            .collect::<Vec<RetrievedPassage>>();

        return Ok(passages);
    }
}
