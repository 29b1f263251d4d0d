use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Expedition {
    pub id: i64,
    pub name: String,
    pub status: ExpeditionStatus,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpeditionStatus {
    Idle,
    InProcess,
    #[serde(other)]
    Other,
}
