use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct World {
    pub id: i64,
    pub active: bool,
    pub currency: Currency,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Currency {
    pub amount: f64,
}
