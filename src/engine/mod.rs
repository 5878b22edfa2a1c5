pub mod config;
pub mod session;

pub use config::{ConfigError, EngineConfig};
pub use session::Engine;
