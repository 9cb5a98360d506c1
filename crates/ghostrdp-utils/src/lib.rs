pub mod config;
pub mod logging;

pub use config::{PeerDeletePolicy, Settings};
pub use logging::GhostLogger;
