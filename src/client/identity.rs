use crate::client::IdentityProvider;
use crate::error::{BotError, Result};
use async_trait::async_trait;

/// Identity backed by a web-app payload captured ahead of time.
pub struct StaticIdentity {
    init_data: String,
}

impl StaticIdentity {
    pub fn new(init_data: impl Into<String>) -> Self {
        Self { init_data: init_data.into() }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn init_data(&self, _proxy: Option<&str>) -> Result<String> {
        if self.init_data.trim().is_empty() {
            return Err(BotError::Identity("session has no init data".to_string()));
        }
        Ok(self.init_data.clone())
    }
}
