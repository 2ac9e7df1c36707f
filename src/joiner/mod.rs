pub mod builder;
pub mod linkable;
pub mod types;

pub use builder::{JoinerConfigOptions, define_joiner_config};
pub use linkable::build_entities_name_to_linkable_keys_map;
pub use types::{
    AliasArgs, AliasEntry, EntityDescriptor, JoinerConfig, LinkableKeys, MapTo, MapToConfig,
};
