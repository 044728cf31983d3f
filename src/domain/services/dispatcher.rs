#[cfg(test)]
#[path = "dispatcher_test.rs"]
mod tests;

use anyhow::Context;
use anyhow::Result;

use super::ChatSession;
use super::PromptComposer;
use crate::domain::models::Answer;
use crate::domain::models::BackendBox;
use crate::domain::models::MarketSnapshot;
use crate::domain::models::MarketSourceBox;
use crate::domain::models::RetrievedPassage;
use crate::domain::models::SearchBox;

/// The composed prompt for a question along with the URLs it cites. Search
/// results come first, then the scraped market pages.
pub struct PreparedQuestion {
    pub prompt: String,
    pub sources: Vec<String>,
    pub snapshot: MarketSnapshot,
}

/// Runs one question through retrieval, prompt composition and completion.
pub struct QueryDispatcher {
    search: SearchBox,
    market: MarketSourceBox,
    backend: BackendBox,
    search_limit: usize,
}

impl QueryDispatcher {
    pub fn new(
        search: SearchBox,
        market: MarketSourceBox,
        backend: BackendBox,
        search_limit: usize,
    ) -> QueryDispatcher {
        return QueryDispatcher {
            search,
            market,
            backend,
            search_limit,
        };
    }

    pub async fn health_check(&self) -> Result<()> {
        self.search.health_check().await?;
        self.backend.health_check().await?;

        return Ok(());
    }

    /// Searches and scrapes concurrently. The snapshot is taken once here and
    /// reused for everything the question needs.
    pub async fn prepare(&self, session: &ChatSession, question: &str) -> Result<PreparedQuestion> {
        let (passages, snapshot) = tokio::join!(
            self.search.search(question, self.search_limit),
            MarketSnapshot::collect(&self.market)
        );
        let passages: Vec<RetrievedPassage> = passages.context("Web search failed")?;

        for passage in &passages {
            tracing::debug!(url = %passage.source_url, title = ?passage.title, "Passage");
        }
        tracing::info!(
            passages = passages.len(),
            snapshot_fields = snapshot.available_count(),
            "Retrieved context"
        );

        let prompt = PromptComposer::compose(session.history(), question, &passages, &snapshot);
        let sources = passages
            .into_iter()
            .map(|passage| return passage.source_url)
            .chain(snapshot.sources.iter().cloned())
            .collect::<Vec<String>>();

        return Ok(PreparedQuestion {
            prompt,
            sources,
            snapshot,
        });
    }

    /// Answers the question and records the turn. A failed search or
    /// completion leaves the session untouched.
    pub async fn ask(&self, session: &mut ChatSession, question: &str) -> Result<Answer> {
        let prepared = self.prepare(session, question).await?;
        tracing::debug!(
            prompt_len = prepared.prompt.len(),
            snapshot = ?prepared.snapshot,
            "Composed prompt"
        );

        let text = self
            .backend
            .get_completion(&prepared.prompt)
            .await
            .with_context(|| return format!("{} completion failed", self.backend.name()))?;

        session
            .record_turn(question, &text)
            .await
            .context("Failed to save conversation history")?;

        return Ok(Answer {
            text,
            sources: prepared.sources,
        });
    }
}
