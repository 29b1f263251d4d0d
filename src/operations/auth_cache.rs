// Login memoization with an explicit TTL and invalidation
use crate::client::{GameApi, IdentityProvider};
use crate::error::Result;
use std::time::Duration;
use tokio::time::Instant;
use tracing::info;

pub struct AuthCache {
    ttl: Duration,
    token: Option<String>,
    expires_at: Option<Instant>,
}

impl AuthCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            token: None,
            expires_at: None,
        }
    }

    pub fn is_fresh_at(&self, now: Instant) -> bool {
        match (&self.token, self.expires_at) {
            (Some(_), Some(expires_at)) => now < expires_at,
            _ => false,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Return the cached token, logging in again when it is missing or stale.
    ///
    /// A failed login propagates and leaves the cache empty.
    pub async fn get_or_refresh(
        &mut self,
        api: &dyn GameApi,
        identity: &dyn IdentityProvider,
        proxy: Option<&str>,
    ) -> Result<String> {
        let now = Instant::now();
        if self.is_fresh_at(now) {
            if let Some(token) = &self.token {
                return Ok(token.clone());
            }
        }

        self.invalidate();
        let init_data = identity.init_data(proxy).await?;
        let token = api.login(&init_data).await?;
        api.set_token(Some(token.clone()));

        self.token = Some(token.clone());
        self.expires_at = Some(now + self.ttl);
        info!("Logged in, token cached for {}s", self.ttl.as_secs());
        Ok(token)
    }

    /// True once a valid token is attached to the client.
    pub async fn ensure_authenticated(
        &mut self,
        api: &dyn GameApi,
        identity: &dyn IdentityProvider,
        proxy: Option<&str>,
    ) -> Result<bool> {
        self.get_or_refresh(api, identity, proxy).await?;
        Ok(true)
    }

    pub fn invalidate(&mut self) {
        self.token = None;
        self.expires_at = None;
    }
}
