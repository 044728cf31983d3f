#[cfg(test)]
#[path = "chat_session_test.rs"]
mod tests;

use anyhow::Result;

use super::HistoryStore;
use crate::domain::models::ConversationHistory;

/// The running conversation. Owns the in-memory history and mirrors it to the
/// store after every completed question.
pub struct ChatSession {
    history: ConversationHistory,
    store: HistoryStore,
}

impl ChatSession {
    #[cfg(test)]
    pub fn new(store: HistoryStore) -> ChatSession {
        return ChatSession {
            history: ConversationHistory::new(),
            store,
        };
    }

    /// Resumes from whatever the store already holds.
    pub async fn open(store: HistoryStore) -> Result<ChatSession> {
        let history = store.load().await?;
        return Ok(ChatSession { history, store });
    }

    pub fn history(&self) -> &ConversationHistory {
        return &self.history;
    }

    pub fn store(&self) -> &HistoryStore {
        return &self.store;
    }

    /// Saves the history with the new turn before adopting it, so memory
    /// never holds a turn the file doesn't.
    pub async fn record_turn(&mut self, question: &str, answer: &str) -> Result<()> {
        let mut candidate = self.history.clone();
        candidate.record(question, answer);
        self.store.save(&candidate).await?;
        self.history = candidate;

        return Ok(());
    }
}
