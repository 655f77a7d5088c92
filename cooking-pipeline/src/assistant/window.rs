//! Bounded conversation memory.
//!
//! The window retains the most recent *exchanges* (one user question
//! paired with its assistant answer). Appending beyond capacity evicts
//! the oldest whole exchange, so the window can never hold a question
//! without its answer.

use std::collections::VecDeque;

use serde::Serialize;

/// Default window capacity: the last 2 exchanges (up to 4 turns).
pub const DEFAULT_WINDOW_EXCHANGES: usize = 2;

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationRole {
    User,
    Assistant,
}

/// One turn of the recorded conversation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationTurn {
    pub role: ConversationRole,
    pub text: String,
}

/// One question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Exchange {
    user: ConversationTurn,
    assistant: ConversationTurn,
}

/// Fixed-capacity FIFO of recent exchanges.
#[derive(Debug, Clone)]
pub struct ConversationWindow {
    exchanges: VecDeque<Exchange>,
    capacity: usize,
}

impl ConversationWindow {
    /// A window retaining at most `capacity` exchanges.
    pub fn new(capacity: usize) -> Self {
        Self {
            exchanges: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Appends one exchange, evicting the oldest while over capacity.
    pub fn push(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.exchanges.push_back(Exchange {
            user: ConversationTurn {
                role: ConversationRole::User,
                text: question.into(),
            },
            assistant: ConversationTurn {
                role: ConversationRole::Assistant,
                text: answer.into(),
            },
        });
        while self.exchanges.len() > self.capacity {
            self.exchanges.pop_front();
        }
    }

    /// All retained turns in chronological order.
    pub fn turns(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.exchanges
            .iter()
            .flat_map(|e| [&e.user, &e.assistant])
    }

    /// Number of retained exchanges.
    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    /// True when nothing is retained yet.
    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    /// Drops all retained exchanges.
    pub fn clear(&mut self) {
        self.exchanges.clear();
    }
}

impl Default for ConversationWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_EXCHANGES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(w: &ConversationWindow) -> Vec<String> {
        w.turns().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn holds_whole_exchanges_in_order() {
        let mut w = ConversationWindow::default();
        w.push("Q1", "A1");
        assert_eq!(texts(&w), ["Q1", "A1"]);
        assert_eq!(w.turns().next().unwrap().role, ConversationRole::User);
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut w = ConversationWindow::default();
        for i in 0..10 {
            w.push(format!("Q{i}"), format!("A{i}"));
            assert!(w.len() <= DEFAULT_WINDOW_EXCHANGES);
            assert!(w.turns().count() <= 2 * DEFAULT_WINDOW_EXCHANGES);
        }
    }

    #[test]
    fn evicts_oldest_exchange_first() {
        let mut w = ConversationWindow::default();
        w.push("Q1", "A1");
        w.push("Q2", "A2");
        w.push("Q3", "A3");
        // Q1's exchange is gone, Q2 is now the oldest present.
        assert_eq!(texts(&w), ["Q2", "A2", "Q3", "A3"]);
    }

    #[test]
    fn clear_empties_the_window() {
        let mut w = ConversationWindow::default();
        w.push("Q1", "A1");
        w.clear();
        assert!(w.is_empty());
        assert_eq!(w.turns().count(), 0);
    }
}
