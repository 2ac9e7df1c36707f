use std::path::PathBuf;

use super::types::{AliasArgs, AliasEntry, EntityDescriptor, JoinerConfig, LinkableKeys};
use crate::{
    config::{
        DiscoveryConfig,
        defaults::{DEFAULT_PRIMARY_KEY, LINKABLE_KEY_SUFFIX},
    },
    error::{JoinerError, JoinerResult},
    models::{load_models, models_dir_for},
    naming::{camel_to_snake_case, deduplicate, pluralize, upper_case_first},
};

#[derive(Debug, Clone, Default)]
pub struct JoinerConfigOptions {
    /// Appended after the public entities, so it only becomes the default
    /// (unsuffixed) entity when no public entity precedes it.
    pub main_entity: Option<EntityDescriptor>,
    /// Explicit entity list. When absent the models directory is scanned.
    pub public_entity_objects: Option<Vec<EntityDescriptor>>,
    pub linkable_keys: Option<LinkableKeys>,
    pub primary_keys: Option<Vec<String>>,
    pub models_dir: Option<PathBuf>,
    /// Source file of the defining module; the models directory is derived
    /// from it when `models_dir` is not set.
    pub source_file: Option<PathBuf>,
    /// Fail with [`JoinerError::NoEntities`] instead of returning an empty alias list.
    pub require_entities: bool,
    pub discovery: DiscoveryConfig,
}

impl JoinerConfigOptions {
    pub fn with_entities<I, E>(entities: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<EntityDescriptor>,
    {
        Self {
            public_entity_objects: Some(entities.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn with_models_dir(models_dir: impl Into<PathBuf>) -> Self {
        Self {
            models_dir: Some(models_dir.into()),
            ..Self::default()
        }
    }

    fn resolve_models_dir(&self, service: &str) -> JoinerResult<PathBuf> {
        if let Some(dir) = &self.models_dir {
            return Ok(dir.clone());
        }
        self.source_file
            .as_deref()
            .map(|file| models_dir_for(file, &self.discovery))
            .ok_or_else(|| JoinerError::MissingModelsLocation {
                service: service.to_string(),
            })
    }
}

/// Builds the joiner config of `module_name`.
///
/// The first entity (public entities first, then `main_entity`) is exposed
/// through unsuffixed accessors; every other entity gets a pluralized,
/// capitalized method suffix.
pub fn define_joiner_config(
    module_name: &str,
    mut options: JoinerConfigOptions,
) -> JoinerResult<JoinerConfig> {
    if module_name.trim().is_empty() {
        return Err(JoinerError::EmptyModuleName);
    }

    let public_entities = match options.public_entity_objects.take() {
        Some(entities) => entities,
        None => {
            let models_dir = options.resolve_models_dir(module_name)?;
            load_models(&models_dir, &options.discovery)?
        }
    };

    let JoinerConfigOptions {
        main_entity,
        linkable_keys,
        primary_keys,
        require_entities,
        ..
    } = options;

    let models: Vec<EntityDescriptor> = deduplicate(
        public_entities
            .into_iter()
            .chain(main_entity)
            .map(|entity| entity.name),
    )
    .into_iter()
    .map(EntityDescriptor::from)
    .collect();

    if models.is_empty() {
        if require_entities {
            return Err(JoinerError::NoEntities {
                service: module_name.to_string(),
            });
        }
        tracing::warn!(service = module_name, "joiner config has no entities");
    }

    let linkable_keys = linkable_keys.unwrap_or_else(|| default_linkable_keys(&models));
    let alias = models
        .iter()
        .enumerate()
        .map(|(index, entity)| alias_entry(index, entity))
        .collect();

    tracing::debug!(
        service = module_name,
        entities = models.len(),
        "built joiner config"
    );

    Ok(JoinerConfig {
        service_name: module_name.to_string(),
        primary_keys: primary_keys.unwrap_or_else(|| vec![DEFAULT_PRIMARY_KEY.to_string()]),
        linkable_keys,
        alias,
    })
}

fn snake_name(entity: &EntityDescriptor) -> String {
    camel_to_snake_case(&entity.name).to_lowercase()
}

fn default_linkable_keys(models: &[EntityDescriptor]) -> LinkableKeys {
    models
        .iter()
        .map(|entity| {
            (
                format!("{}{LINKABLE_KEY_SUFFIX}", snake_name(entity)),
                entity.name.clone(),
            )
        })
        .collect()
}

fn alias_entry(index: usize, entity: &EntityDescriptor) -> AliasEntry {
    let singular = snake_name(entity);
    let plural = pluralize(&singular);
    let method_suffix = (index != 0).then(|| pluralize(&upper_case_first(&entity.name)));

    AliasEntry {
        name: [singular, plural],
        args: AliasArgs {
            entity: entity.name.clone(),
            method_suffix,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(config: &JoinerConfig) -> Vec<&str> {
        config.entity_names().collect()
    }

    #[test]
    fn first_public_entity_has_no_method_suffix() {
        let config = define_joiner_config(
            "order",
            JoinerConfigOptions::with_entities(["Order", "OrderItem"]),
        )
        .expect("config should build");

        assert_eq!(config.service_name, "order");
        assert_eq!(config.alias.len(), 2);
        assert_eq!(config.alias[0].args.method_suffix, None);
        assert_eq!(
            config.alias[1].args.method_suffix.as_deref(),
            Some("OrderItems")
        );
        assert_eq!(config.alias[1].name, ["order_item", "order_items"]);
    }

    #[test]
    fn derives_linkable_keys_and_default_primary_key() {
        let config = define_joiner_config(
            "order",
            JoinerConfigOptions::with_entities(["Order", "OrderItem"]),
        )
        .expect("config should build");

        let keys: Vec<(&str, &str)> = config
            .linkable_keys
            .iter()
            .map(|(key, entity)| (key.as_str(), entity.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![("order_id", "Order"), ("order_item_id", "OrderItem")]
        );
        assert_eq!(config.primary_keys, vec!["id"]);
    }

    #[test]
    fn explicit_overrides_are_used_verbatim() {
        let mut linkable_keys = LinkableKeys::new();
        linkable_keys.insert("order_handle".to_string(), "Order".to_string());

        let config = define_joiner_config(
            "order",
            JoinerConfigOptions {
                primary_keys: Some(vec!["uuid".to_string()]),
                linkable_keys: Some(linkable_keys.clone()),
                ..JoinerConfigOptions::with_entities(["Order"])
            },
        )
        .expect("config should build");

        assert_eq!(config.primary_keys, vec!["uuid"]);
        assert_eq!(config.linkable_keys, linkable_keys);
    }

    #[test]
    fn duplicate_entities_collapse_to_first_occurrence() {
        let config = define_joiner_config(
            "order",
            JoinerConfigOptions {
                main_entity: Some(EntityDescriptor::new("Order")),
                ..JoinerConfigOptions::with_entities(["Order", "Cart", "Order"])
            },
        )
        .expect("config should build");

        assert_eq!(names(&config), vec!["Order", "Cart"]);
        assert_eq!(config.linkable_keys.len(), 2);
    }

    #[test]
    fn main_entity_is_appended_after_public_entities() {
        let config = define_joiner_config(
            "payment",
            JoinerConfigOptions {
                main_entity: Some(EntityDescriptor::new("PaymentCollection")),
                ..JoinerConfigOptions::with_entities(["Payment"])
            },
        )
        .expect("config should build");

        assert_eq!(names(&config), vec!["Payment", "PaymentCollection"]);
        assert_eq!(config.default_entity(), Some("Payment"));
        assert_eq!(
            config.alias[1].args.method_suffix.as_deref(),
            Some("PaymentCollections")
        );
    }

    #[test]
    fn main_entity_is_default_when_public_list_is_empty() {
        let config = define_joiner_config(
            "payment",
            JoinerConfigOptions {
                main_entity: Some(EntityDescriptor::new("PaymentCollection")),
                ..JoinerConfigOptions::with_entities(Vec::<EntityDescriptor>::new())
            },
        )
        .expect("config should build");

        assert_eq!(config.default_entity(), Some("PaymentCollection"));
        assert_eq!(
            config.alias[0].name,
            ["payment_collection", "payment_collections"]
        );
    }

    #[test]
    fn empty_entity_list_is_permitted_by_default() {
        let config = define_joiner_config(
            "empty",
            JoinerConfigOptions::with_entities(Vec::<EntityDescriptor>::new()),
        )
        .expect("empty config should build");

        assert!(config.alias.is_empty());
        assert!(config.linkable_keys.is_empty());
        assert_eq!(config.default_entity(), None);
    }

    #[test]
    fn empty_entity_list_fails_when_entities_are_required() {
        let err = define_joiner_config(
            "empty",
            JoinerConfigOptions {
                require_entities: true,
                ..JoinerConfigOptions::with_entities(Vec::<EntityDescriptor>::new())
            },
        )
        .expect_err("empty config should be rejected");

        assert!(matches!(err, JoinerError::NoEntities { service } if service == "empty"));
    }

    #[test]
    fn blank_module_name_is_rejected() {
        let err = define_joiner_config("  ", JoinerConfigOptions::with_entities(["Order"]))
            .expect_err("blank module name should be rejected");

        assert!(matches!(err, JoinerError::EmptyModuleName));
    }

    #[test]
    fn discovery_needs_a_location() {
        let err = define_joiner_config("order", JoinerConfigOptions::default())
            .expect_err("missing location should be rejected");

        assert!(matches!(err, JoinerError::MissingModelsLocation { service } if service == "order"));
    }

    #[test]
    fn colliding_snake_keys_keep_first_position_and_last_entity() {
        let config = define_joiner_config(
            "order",
            JoinerConfigOptions::with_entities(["OrderItem", "Cart", "orderItem"]),
        )
        .expect("config should build");

        let keys: Vec<(&str, &str)> = config
            .linkable_keys
            .iter()
            .map(|(key, entity)| (key.as_str(), entity.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![("order_item_id", "orderItem"), ("cart_id", "Cart")]
        );
        assert_eq!(names(&config), vec!["OrderItem", "Cart", "orderItem"]);
        assert_eq!(config.alias[2].name, ["order_item", "order_items"]);
        assert_eq!(
            config.alias[2].args.method_suffix.as_deref(),
            Some("OrderItems")
        );
    }

    #[test]
    fn pluralizes_irregular_entity_names() {
        let config = define_joiner_config(
            "directory",
            JoinerConfigOptions::with_entities(["Category", "SalesPerson"]),
        )
        .expect("config should build");

        assert_eq!(config.alias[0].name, ["category", "categories"]);
        assert_eq!(config.alias[1].name, ["sales_person", "sales_people"]);
        assert_eq!(
            config.alias[1].args.method_suffix.as_deref(),
            Some("SalesPeople")
        );
    }
}
