use super::types::{LinkableKeys, MapTo, MapToConfig};
use crate::naming::last_segment;

/// Inverts `foreign key -> entity` into `entity -> [{ mapTo, valueFrom }]`.
///
/// Entities keep the order of their first appearance and every key is kept,
/// including several keys pointing at the same entity. `valueFrom` is the last
/// underscore-delimited segment of the key (`order_item_id` -> `id`).
pub fn build_entities_name_to_linkable_keys_map(linkable_keys: &LinkableKeys) -> MapToConfig {
    let mut entity_linkable_keys = MapToConfig::new();

    for (key, entity) in linkable_keys {
        entity_linkable_keys
            .entry(entity.clone())
            .or_default()
            .push(MapTo {
                map_to: key.clone(),
                value_from: last_segment(key, '_').to_string(),
            });
    }

    entity_linkable_keys
}
