use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Foreign-key field name -> entity name, in insertion order.
pub type LinkableKeys = IndexMap<String, String>;

/// Entity name -> the foreign keys that resolve to it.
pub type MapToConfig = IndexMap<String, Vec<MapTo>>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityDescriptor {
    pub name: String,
}

impl EntityDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for EntityDescriptor {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for EntityDescriptor {
    fn from(name: String) -> Self {
        Self { name }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinerConfig {
    pub service_name: String,
    pub primary_keys: Vec<String>,
    pub linkable_keys: LinkableKeys,
    pub alias: Vec<AliasEntry>,
}

impl JoinerConfig {
    /// The entity served through the unsuffixed accessors, if any.
    pub fn default_entity(&self) -> Option<&str> {
        self.alias
            .iter()
            .find(|entry| entry.args.method_suffix.is_none())
            .map(|entry| entry.args.entity.as_str())
    }

    pub fn entity_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.alias.iter().map(|entry| entry.args.entity.as_str())
    }
}

/// `name` holds the singular and plural keys, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub name: [String; 2],
    pub args: AliasArgs,
}

impl AliasEntry {
    pub fn singular(&self) -> &str {
        &self.name[0]
    }

    pub fn plural(&self) -> &str {
        &self.name[1]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasArgs {
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_suffix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapTo {
    pub map_to: String,
    pub value_from: String,
}
