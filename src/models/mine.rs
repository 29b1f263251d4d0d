use serde::{Deserialize, Serialize};

// Mines and the sub-resources of an owned mine
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Mine {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(rename = "userMine", default)]
    pub user_mine: Option<UserMine>,
}

impl Mine {
    pub fn is_owned(&self) -> bool {
        self.user_mine.is_some()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UserMine {
    pub id: i64,
    #[serde(rename = "extractedAmount", alias = "extracted_amount", default)]
    pub extracted_amount: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MineUpgrade {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub disabled: bool,
}

/// A miner slot. `available` means the slot is already bought.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Miner {
    pub id: i64,
    pub price: f64,
    #[serde(default)]
    pub available: bool,
    #[serde(rename = "minerLevel", default)]
    pub miner_level: Vec<MinerLevel>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MinerLevel {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub available: bool,
    #[serde(rename = "inventoryLevel", default)]
    pub inventory_level: Option<InventoryRequirement>,
}

/// Inventory item that must reach `level` before a miner level unlocks.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct InventoryRequirement {
    pub name: String,
    pub level: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CartLevel {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub available: bool,
}
