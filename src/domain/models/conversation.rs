#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[strum(serialize = "User")]
    User,
    // Older history files call the model "bot".
    #[serde(alias = "bot")]
    #[strum(serialize = "Assistant")]
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    role: Role,
    message: String,
}

impl ConversationTurn {
    pub fn new(role: Role, message: &str) -> ConversationTurn {
        return ConversationTurn {
            role,
            message: message.to_string(),
        };
    }

    pub fn role(&self) -> Role {
        return self.role;
    }

    pub fn message(&self) -> &str {
        return &self.message;
    }
}

/// Chronological log of every turn in the session. Turns can only be added in
/// user/assistant pairs and are never edited or removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationHistory {
    turns: Vec<ConversationTurn>,
}

impl ConversationHistory {
    pub fn new() -> ConversationHistory {
        return ConversationHistory::default();
    }

    pub fn record(&mut self, question: &str, answer: &str) {
        self.turns.push(ConversationTurn::new(Role::User, question));
        self.turns.push(ConversationTurn::new(Role::Assistant, answer));
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        return &self.turns;
    }

    pub fn len(&self) -> usize {
        return self.turns.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.turns.is_empty();
    }

    /// Renders the history as plain `Role: message` lines for the prompt.
    pub fn transcript(&self) -> String {
        return self
            .turns
            .iter()
            .map(|turn| {
                return format!("{}: {}", turn.role, turn.message);
            })
            .collect::<Vec<String>>()
            .join("\n");
    }
}
