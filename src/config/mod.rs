pub mod configs;
pub mod defaults;
pub mod envconfig;
pub mod validate;

pub use configs::{DiscoveryConfig, JoinerSettings, LoggingConfig};
pub use envconfig::EnvConfig;
