// Operations module - the per-cycle decision passes

pub mod auth_cache;
pub mod world_state;
pub mod upgrade_planner;
pub mod expeditions;
pub mod spin_rotator;
pub mod retry;
pub mod night_mode;

pub use auth_cache::*;
pub use world_state::*;
pub use upgrade_planner::*;
pub use expeditions::*;
pub use spin_rotator::*;
pub use retry::*;
pub use night_mode::*;
