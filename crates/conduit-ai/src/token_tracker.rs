//! Token usage for one session.

use crate::TokenUsage;

/// Sums the usage reported by every completion call in a session.
///
/// A session talks to a single model, so there is one running total.
#[derive(Debug, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    calls: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self.total.output_tokens.saturating_add(usage.output_tokens);
        self.calls += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.calls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_accumulates_across_calls() {
        let mut tracker = TokenTracker::new();
        tracker.record(&TokenUsage {
            input_tokens: 100,
            output_tokens: 20,
        });
        tracker.record(&TokenUsage {
            input_tokens: 150,
            output_tokens: 30,
        });

        assert_eq!(tracker.call_count(), 2);
        assert_eq!(tracker.total().input_tokens, 250);
        assert_eq!(tracker.total().output_tokens, 50);
        assert_eq!(tracker.total_tokens(), 300);
    }

    #[test]
    fn calls_without_usage_are_still_counted() {
        let mut tracker = TokenTracker::default();
        tracker.record(&TokenUsage::default());
        assert_eq!(tracker.call_count(), 1);
        assert_eq!(tracker.total_tokens(), 0);
    }
}
