//! Command implementations.

pub mod config;
pub mod discover;
pub mod features;
pub mod harvest;

pub use self::config::execute_config;
pub use self::discover::execute_discover;
pub use self::features::execute_features;
pub use self::harvest::execute_harvest;
