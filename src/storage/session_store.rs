// Account profiles loaded from disk
use crate::error::{BotError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionProfile {
    /// Label used in logs
    pub name: String,
    /// Web-app payload exchanged for a bearer token at login
    pub init_data: String,
    #[serde(default)]
    pub proxy: Option<String>,
}

pub struct SessionStore {
    storage_path: String,
    sessions: Vec<SessionProfile>,
}

impl SessionStore {
    pub fn load(storage_path: &str) -> Result<Self> {
        if !Path::new(storage_path).exists() {
            return Err(BotError::Config(format!("session file {} not found", storage_path)));
        }

        let content = fs::read_to_string(storage_path)?;
        let sessions: Vec<SessionProfile> = serde_json::from_str(&content)?;
        info!("Loaded {} session(s) from {}", sessions.len(), storage_path);

        let store = Self {
            storage_path: storage_path.to_string(),
            sessions,
        };
        store.validate()?;
        Ok(store)
    }

    fn validate(&self) -> Result<()> {
        for (i, session) in self.sessions.iter().enumerate() {
            if session.name.trim().is_empty() {
                return Err(BotError::Config(format!(
                    "session #{} in {} has no name",
                    i + 1,
                    self.storage_path
                )));
            }
            if self.sessions.iter().filter(|s| s.name == session.name).count() > 1 {
                return Err(BotError::Config(format!("duplicate session name {}", session.name)));
            }
        }
        Ok(())
    }

    pub fn sessions(&self) -> &[SessionProfile] {
        &self.sessions
    }

    pub fn into_sessions(self) -> Vec<SessionProfile> {
        self.sessions
    }
}
