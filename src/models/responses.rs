use serde::Deserialize;

// GraphQL envelope
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

// Operation payloads
#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub login: LoginPayload,
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct WorldsData {
    pub worlds: Vec<crate::models::World>,
}

#[derive(Debug, Deserialize)]
pub struct MinesData {
    pub mines: Vec<crate::models::Mine>,
}

#[derive(Debug, Deserialize)]
pub struct InventoryData {
    #[serde(rename = "updateInventory")]
    pub update_inventory: Vec<crate::models::InventoryItem>,
}

#[derive(Debug, Deserialize)]
pub struct MineUpgradesData {
    #[serde(rename = "updateMine")]
    pub update_mine: Vec<crate::models::MineUpgrade>,
}

#[derive(Debug, Deserialize)]
pub struct MinersData {
    #[serde(rename = "updateMiners")]
    pub update_miners: Vec<crate::models::Miner>,
}

#[derive(Debug, Deserialize)]
pub struct CartLevelsData {
    #[serde(rename = "updateCart")]
    pub update_cart: Vec<crate::models::CartLevel>,
}

#[derive(Debug, Deserialize)]
pub struct ExpeditionsData {
    pub expeditions: Vec<crate::models::Expedition>,
}

#[derive(Debug, Deserialize)]
pub struct SpinHistoryData {
    #[serde(rename = "spinHistory")]
    pub spin_history: SpinHistoryPage,
}

#[derive(Debug, Deserialize)]
pub struct SpinHistoryPage {
    #[serde(default)]
    pub data: Vec<crate::models::SpinRecord>,
}

#[derive(Debug, Deserialize)]
pub struct RotateSpinData {
    #[serde(rename = "rotateSpin")]
    pub rotate_spin: serde_json::Value,
}
