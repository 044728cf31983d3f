#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ConversationHistory;

/// Flat JSON file holding the whole conversation. Every save rewrites the
/// file from scratch.
pub struct HistoryStore {
    pub file_path: path::PathBuf,
}

impl Default for HistoryStore {
    fn default() -> HistoryStore {
        return HistoryStore::new(path::PathBuf::from(Config::get(ConfigKey::HistoryFile)));
    }
}

impl HistoryStore {
    pub fn new(file_path: path::PathBuf) -> HistoryStore {
        return HistoryStore { file_path };
    }

    pub async fn load(&self) -> Result<ConversationHistory> {
        if !self.file_path.exists() {
            return Ok(ConversationHistory::new());
        }

        let payload = fs::read_to_string(&self.file_path).await?;
        if payload.trim().is_empty() {
            return Ok(ConversationHistory::new());
        }

        let history: ConversationHistory = serde_json::from_str(&payload)?;
        tracing::debug!(turns = history.len(), path = ?self.file_path, "Loaded history");

        return Ok(history);
    }

    pub async fn save(&self, history: &ConversationHistory) -> Result<()> {
        let payload = serde_json::to_string_pretty(history)?;

        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = fs::File::create(&self.file_path).await?;
        file.write_all(payload.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!(turns = history.len(), path = ?self.file_path, "Saved history");

        return Ok(());
    }

    pub async fn delete(&self) -> Result<()> {
        if !self.file_path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.file_path).await?;
        return Ok(());
    }
}
