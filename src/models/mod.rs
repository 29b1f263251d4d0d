// Models module - backend records and response envelopes

pub mod world;
pub mod mine;
pub mod expedition;
pub mod spin;
pub mod responses;

// Re-export all models for easier imports
pub use world::*;
pub use mine::*;
pub use expedition::*;
pub use spin::*;
pub use responses::*;
