//! Token usage reported by the model service

use std::ops::{Add, AddAssign};

/// Token counts for a single model call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageStats {
    /// Tokens in the prompt (system policy plus document)
    pub prompt_tokens: u64,

    /// Tokens generated by the model
    pub completion_tokens: u64,

    /// Total as reported by the service
    pub total_tokens: u64,
}

impl UsageStats {
    /// Create usage stats from raw counts
    pub fn new(prompt_tokens: u64, completion_tokens: u64, total_tokens: u64) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens,
        }
    }
}

impl Add for UsageStats {
    type Output = UsageStats;

    fn add(self, rhs: UsageStats) -> UsageStats {
        UsageStats {
            prompt_tokens: self.prompt_tokens + rhs.prompt_tokens,
            completion_tokens: self.completion_tokens + rhs.completion_tokens,
            total_tokens: self.total_tokens + rhs.total_tokens,
        }
    }
}

impl AddAssign for UsageStats {
    fn add_assign(&mut self, rhs: UsageStats) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate() {
        let mut total = UsageStats::default();
        total += UsageStats::new(10, 5, 15);
        total += UsageStats::new(1, 2, 3);
        assert_eq!(total, UsageStats::new(11, 7, 18));
    }
}
