// GraphQL documents sent by GameClient

pub const LOGIN: &str = "mutation Login($input: LoginInput!) { login(input: $input) { token } }";

pub const WORLDS: &str = "query Worlds { worlds { id active currency { amount } } }";

pub const MINES: &str = "query Mines($worldId: Int!) { \
    mines(worldId: $worldId) { id name price userMine { id extractedAmount } } }";

pub const CLAIM_MINING: &str = "mutation ClaimMining($input: ClaimMiningInput!) { claimMining(input: $input) }";

pub const BUY_MINE: &str = "mutation BuyMine($input: BuyMineInput!) { buyMine(input: $input) }";

pub const UPDATE_INVENTORY: &str = "query UpdateInventory($mineId: Int!) { \
    updateInventory(mineId: $mineId) { id name price level disabled } }";

pub const BUY_INVENTORY: &str = "mutation BuyUpdateInventory($id: Int!) { buyUpdateInventory(id: $id) }";

pub const UPDATE_MINE: &str = "query UpdateMine($mineId: Int!) { \
    updateMine(mineId: $mineId) { id name price level disabled } }";

pub const BUY_MINE_UPGRADE: &str = "mutation BuyUpdateMine($id: Int!) { buyUpdateMine(id: $id) }";

pub const UPDATE_MINERS: &str = "query UpdateMiners($mineId: Int!) { \
    updateMiners(mineId: $mineId) { id price available \
    minerLevel { id name price available inventoryLevel { name level } } } }";

pub const BUY_MINER: &str = "mutation BuyMiner($input: BuyMinerInput!) { buyMiner(input: $input) }";

pub const BUY_MINER_LEVEL: &str = "mutation BuyMinerLevel($input: BuyMinerLevelInput!) { buyMinerLevel(input: $input) }";

pub const UPDATE_CART: &str = "query UpdateCart($mineId: Int!, $userMineId: Int!) { \
    updateCart(mineId: $mineId, userMineId: $userMineId) { id name price available } }";

pub const BUY_CART: &str = "mutation BuyCart($input: BuyCartInput!) { buyCart(input: $input) }";

pub const EXPEDITIONS: &str = "query Expeditions($worldId: Int!) { \
    expeditions(worldId: $worldId) { id name status } }";

pub const SEND_EXPEDITION: &str = "mutation SendExpedition($id: Int!) { sendExpedition(id: $id) }";

pub const BUY_EXPEDITION: &str = "mutation BuyExpedition($id: Int!, $amount: Float!) { buyExpedition(id: $id, amount: $amount) }";

pub const SPIN_HISTORY: &str = "query SpinHistory($first: Int!, $page: Int!) { \
    spinHistory(first: $first, page: $page) { data { createdAt prize } } }";

pub const ROTATE_SPIN: &str = "mutation RotateSpin { rotateSpin }";
