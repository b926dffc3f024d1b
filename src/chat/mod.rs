//! Rolling question/answer history for the interactive session.

/// One question/answer exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
}

/// Append-only history of exchanges within a run.
///
/// Lives only in process memory; prompts include at most the most recent
/// window of entries, in chronological order.
#[derive(Debug, Default)]
pub struct ChatHistory {
    entries: Vec<Exchange>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an exchange. Called after the answer is produced, even when
    /// the backend returned an empty one.
    pub fn push(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.entries.push(Exchange {
            question: question.into(),
            answer: answer.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent `n` exchanges, oldest first.
    pub fn recent(&self, n: usize) -> &[Exchange] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(n: usize) -> ChatHistory {
        let mut history = ChatHistory::new();
        for i in 1..=n {
            history.push(format!("q{i}"), format!("a{i}"));
        }
        history
    }

    #[test]
    fn test_recent_caps_at_window() {
        let history = history_of(14);
        let window = history.recent(10);

        assert_eq!(window.len(), 10);
        // Chronological: oldest surviving entry first, newest last.
        assert_eq!(window[0].question, "q5");
        assert_eq!(window[9].question, "q14");
    }

    #[test]
    fn test_recent_returns_all_when_short() {
        let history = history_of(3);
        let window = history.recent(10);

        assert_eq!(window.len(), 3);
        assert_eq!(window[0].question, "q1");
        assert_eq!(window[2].question, "q3");
    }

    #[test]
    fn test_recent_on_empty_history() {
        let history = ChatHistory::new();
        assert!(history.recent(10).is_empty());
        assert!(history.is_empty());
    }

    #[test]
    fn test_push_keeps_empty_answers() {
        let mut history = ChatHistory::new();
        history.push("q", "");
        assert_eq!(history.len(), 1);
        assert_eq!(history.recent(10)[0].answer, "");
    }
}
