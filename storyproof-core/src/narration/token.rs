//! Access-token cache for the narration service.
//!
//! The cache is an explicit value callers own and pass around: stored
//! token, expiry instant, and an injected refresh function. The clock is
//! a plain parameter, so freshness logic is testable without sleeping.

use crate::foundation::error::StoryproofResult;

/// A token issued by the credential service.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// Opaque token value.
    pub value: String,
    /// Expiry instant in seconds since the Unix epoch.
    pub expires_at: u64,
}

/// Cached access token with early refresh.
///
/// A cached value is served while it stays fresh; once `now` reaches the
/// refresh margin before expiry, the next access invokes the refresh
/// function and replaces the entry.
#[derive(Clone, Debug)]
pub struct TokenCache {
    cached: Option<IssuedToken>,
    refresh_margin_s: u64,
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenCache {
    /// Tokens are refreshed this many seconds before they expire.
    pub const DEFAULT_REFRESH_MARGIN_S: u64 = 300;

    /// Empty cache with the default refresh margin.
    pub fn new() -> Self {
        Self {
            cached: None,
            refresh_margin_s: Self::DEFAULT_REFRESH_MARGIN_S,
        }
    }

    /// Empty cache with a custom refresh margin.
    pub fn with_margin(refresh_margin_s: u64) -> Self {
        Self {
            cached: None,
            refresh_margin_s,
        }
    }

    /// True iff a cached token exists and will stay valid past the refresh
    /// margin at time `now_s`.
    pub fn is_fresh(&self, now_s: u64) -> bool {
        self.cached
            .as_ref()
            .is_some_and(|t| now_s < t.expires_at.saturating_sub(self.refresh_margin_s))
    }

    /// Expiry instant of the cached token, if any.
    pub fn expires_at(&self) -> Option<u64> {
        self.cached.as_ref().map(|t| t.expires_at)
    }

    /// Return the cached token, refreshing it first when stale or absent.
    ///
    /// `refresh` is only invoked when needed; its error is propagated
    /// unchanged and leaves any previous entry in place.
    pub fn get_or_refresh<F>(&mut self, now_s: u64, refresh: F) -> StoryproofResult<&str>
    where
        F: FnOnce() -> StoryproofResult<IssuedToken>,
    {
        if !self.is_fresh(now_s) {
            let token = refresh()?;
            self.cached = Some(token);
        }
        match &self.cached {
            Some(token) => Ok(&token.value),
            // Not reachable: a stale or empty cache was just replaced.
            None => Err(crate::foundation::error::StoryproofError::validation(
                "token refresh yielded no value",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::error::StoryproofError;

    fn issued(value: &str, expires_at: u64) -> IssuedToken {
        IssuedToken {
            value: value.to_string(),
            expires_at,
        }
    }

    #[test]
    fn first_access_refreshes() {
        let mut cache = TokenCache::new();
        let token = cache.get_or_refresh(1_000, || Ok(issued("t1", 5_000))).unwrap();
        assert_eq!(token, "t1");
        assert_eq!(cache.expires_at(), Some(5_000));
    }

    #[test]
    fn fresh_token_is_reused_without_refreshing() {
        let mut cache = TokenCache::new();
        cache.get_or_refresh(1_000, || Ok(issued("t1", 5_000))).unwrap();
        let token = cache
            .get_or_refresh(2_000, || -> StoryproofResult<IssuedToken> {
                panic!("refresh must not run while the token is fresh")
            })
            .unwrap();
        assert_eq!(token, "t1");
    }

    #[test]
    fn refreshes_within_margin_of_expiry() {
        let mut cache = TokenCache::new();
        cache.get_or_refresh(1_000, || Ok(issued("t1", 5_000))).unwrap();
        // 4_800 is within 300s of the 5_000 expiry.
        let token = cache.get_or_refresh(4_800, || Ok(issued("t2", 9_000))).unwrap();
        assert_eq!(token, "t2");
    }

    #[test]
    fn failed_refresh_keeps_previous_entry() {
        let mut cache = TokenCache::new();
        cache.get_or_refresh(1_000, || Ok(issued("t1", 5_000))).unwrap();
        let err = cache
            .get_or_refresh(4_900, || Err(StoryproofError::load("credential service down")))
            .unwrap_err();
        assert!(matches!(err, StoryproofError::Load(_)));
        assert_eq!(cache.expires_at(), Some(5_000));
    }

    #[test]
    fn custom_margin_is_respected() {
        let mut cache = TokenCache::with_margin(0);
        cache.get_or_refresh(1_000, || Ok(issued("t1", 2_000))).unwrap();
        assert!(cache.is_fresh(1_999));
        assert!(!cache.is_fresh(2_000));
    }
}
