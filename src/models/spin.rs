use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SpinRecord {
    #[serde(rename = "createdAt", alias = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub prize: Option<String>,
}

/// Most recent spin in a history page, regardless of page ordering.
pub fn latest_spin(history: &[SpinRecord]) -> Option<&SpinRecord> {
    history.iter().max_by_key(|record| record.created_at)
}
