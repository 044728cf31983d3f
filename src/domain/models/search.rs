use anyhow::Result;
use async_trait::async_trait;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetrievedPassage {
    pub text: String,
    pub source_url: String,
    pub title: Option<String>,
}

#[cfg(test)]
impl RetrievedPassage {
    pub fn new(text: &str, source_url: &str) -> RetrievedPassage {
        return RetrievedPassage {
            text: text.to_string(),
            source_url: source_url.to_string(),
            title: None,
        };
    }
}

#[async_trait]
pub trait SearchEngine {
    /// Verifies the engine is configured before the first question is asked.
    async fn health_check(&self) -> Result<()>;

    /// Runs a keyword search, returning at most `limit` passages in the order
    /// the engine ranked them.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RetrievedPassage>>;
}

pub type SearchBox = Box<dyn SearchEngine + Send + Sync>;
