// Storage module - on-disk inputs
pub mod session_store;

pub use session_store::{SessionProfile, SessionStore};
