//! Joiner configurations for modular applications.
//!
//! A module's entities are named, pluralized, aliased and keyed so that a
//! generic join engine can link them across modules. Entities are either
//! listed explicitly or discovered from the `pub struct`/`pub enum` items of
//! the module's `models` directory.

pub mod config;
pub mod error;
pub mod joiner;
pub mod logging;
pub mod models;
pub mod naming;

pub use error::{JoinerError, JoinerResult};
pub use joiner::{
    EntityDescriptor, JoinerConfig, JoinerConfigOptions, LinkableKeys, MapToConfig,
    build_entities_name_to_linkable_keys_map, define_joiner_config,
};
