//! Static entity manifests for build scripts.
//!
//! A build script calls [`write_manifest`] on the crate's models directory and
//! `include!`s the result, so the entity list is fixed at compile time and no
//! scan happens when the joiner config is defined:
//!
//! ```ignore
//! use joiner_config::models::EntityDescriptorRef;
//!
//! include!(concat!(env!("OUT_DIR"), "/entities_manifest.rs"));
//!
//! let entities = ENTITIES.iter().copied().map(Into::into).collect();
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::DiscoveryConfig,
    error::{JoinerError, JoinerResult},
    joiner::EntityDescriptor,
    naming::deduplicate,
};

use super::discovery::{entities_in_files, model_files};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityDescriptorRef {
    pub name: &'static str,
}

impl From<EntityDescriptorRef> for EntityDescriptor {
    fn from(entity: EntityDescriptorRef) -> Self {
        Self::new(entity.name)
    }
}

/// Renders `pub static ENTITIES: &[EntityDescriptorRef]`, one line per distinct name.
pub fn render_manifest(entities: &[EntityDescriptor]) -> String {
    let names = deduplicate(entities.iter().map(|entity| entity.name.as_str()));

    let mut output = String::from("pub static ENTITIES: &[EntityDescriptorRef] = &[\n");
    for name in names {
        output.push_str(&format!(
            "    EntityDescriptorRef {{ name: \"{}\" }},\n",
            escape_rust_string(name)
        ));
    }
    output.push_str("];\n");
    output
}

/// Discovers the entities of `models_dir` and writes their manifest to `out_path`.
///
/// Returns the scanned files so the caller can emit `cargo:rerun-if-changed`.
pub fn write_manifest(
    models_dir: &Path,
    out_path: &Path,
    cfg: &DiscoveryConfig,
) -> JoinerResult<Vec<PathBuf>> {
    let files = model_files(models_dir, cfg)?;
    let entities = entities_in_files(&files)?;

    fs::write(out_path, render_manifest(&entities)).map_err(|source| {
        JoinerError::WriteManifest {
            path: out_path.to_path_buf(),
            source,
        }
    })?;

    tracing::debug!(
        out = %out_path.display(),
        entities = entities.len(),
        "wrote entity manifest"
    );
    Ok(files)
}

fn escape_rust_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_entry_per_distinct_entity() {
        let entities = vec![
            EntityDescriptor::new("Order"),
            EntityDescriptor::new("OrderItem"),
            EntityDescriptor::new("Order"),
        ];

        assert_eq!(
            render_manifest(&entities),
            "pub static ENTITIES: &[EntityDescriptorRef] = &[\n    \
             EntityDescriptorRef { name: \"Order\" },\n    \
             EntityDescriptorRef { name: \"OrderItem\" },\n];\n"
        );
    }

    #[test]
    fn empty_manifest_is_still_valid_source() {
        assert_eq!(
            render_manifest(&[]),
            "pub static ENTITIES: &[EntityDescriptorRef] = &[\n];\n"
        );
    }

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(escape_rust_string(r#"a"b\c"#), r#"a\"b\\c"#);
    }

    #[test]
    fn descriptor_ref_converts_to_owned_descriptor() {
        let owned: EntityDescriptor = EntityDescriptorRef { name: "Cart" }.into();
        assert_eq!(owned, EntityDescriptor::new("Cart"));
    }
}
