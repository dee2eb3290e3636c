use chrono::Duration;

use super::claims::TokenClass;

/// Lifetime policy per token class.
///
/// Access tokens are short-lived; refresh tokens live longer and are only
/// good for minting new tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPolicy {
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

impl TokenPolicy {
    pub const DEFAULT_ACCESS_MINUTES: i64 = 30;
    pub const DEFAULT_REFRESH_DAYS: i64 = 7;

    pub fn new(access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            access_ttl,
            refresh_ttl,
        }
    }

    /// Lifetime for tokens of `class`.
    pub fn ttl_for(&self, class: TokenClass) -> Duration {
        match class {
            TokenClass::Access => self.access_ttl,
            TokenClass::Refresh => self.refresh_ttl,
        }
    }
}

impl Default for TokenPolicy {
    fn default() -> Self {
        Self::new(
            Duration::minutes(Self::DEFAULT_ACCESS_MINUTES),
            Duration::days(Self::DEFAULT_REFRESH_DAYS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = TokenPolicy::default();
        assert_eq!(policy.ttl_for(TokenClass::Access), Duration::minutes(30));
        assert_eq!(policy.ttl_for(TokenClass::Refresh), Duration::days(7));
    }
}
