use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub user: String,
    pub bot: String,
}

/// Question/answer history of one chat session, oldest first.
///
/// The log only grows. It is owned by the page that shows the chat and handed
/// to the panels that render or extend it, so it can be exercised without any
/// UI runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationLog {
    entries: Vec<ConversationEntry>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, user: impl Into<String>, bot: impl Into<String>) {
        self.entries.push(ConversationEntry {
            user: user.into(),
            bot: bot.into(),
        });
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ConversationEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
