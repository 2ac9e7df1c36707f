use std::{
    fs,
    path::{Path, PathBuf},
};

use syn::{File, Item, Visibility};

use crate::{
    config::DiscoveryConfig,
    error::{JoinerError, JoinerResult},
    joiner::EntityDescriptor,
};

/// Scans `models_dir` (non-recursively) for entity definitions.
///
/// Every regular file that is not excluded by `cfg` must be valid Rust; each
/// `pub struct` and `pub enum` it declares becomes an entity, in file order.
/// Files are visited in directory-listing order, which is platform dependent.
pub fn load_models(models_dir: &Path, cfg: &DiscoveryConfig) -> JoinerResult<Vec<EntityDescriptor>> {
    let files = model_files(models_dir, cfg)?;
    let models = entities_in_files(&files)?;

    tracing::info!(
        dir = %models_dir.display(),
        count = models.len(),
        "discovered model entities"
    );
    Ok(models)
}

/// Parses already-listed model files and collects their entities in order.
pub fn entities_in_files(files: &[PathBuf]) -> JoinerResult<Vec<EntityDescriptor>> {
    let mut models = Vec::new();
    for path in files {
        let parsed = parse_model_file(path)?;
        let names = exported_entity_names(&parsed);
        tracing::debug!(
            file = %path.display(),
            entities = ?names,
            "scanned model file"
        );
        models.extend(names.into_iter().map(EntityDescriptor::from));
    }
    Ok(models)
}

/// Regular files of `models_dir` that take part in discovery, in listing order.
pub fn model_files(models_dir: &Path, cfg: &DiscoveryConfig) -> JoinerResult<Vec<PathBuf>> {
    let entries = fs::read_dir(models_dir).map_err(|source| JoinerError::ReadDir {
        path: models_dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| JoinerError::ReadDir {
            path: models_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if cfg.is_excluded(&entry.file_name().to_string_lossy()) {
            tracing::debug!(file = %path.display(), "skipping excluded model file");
            continue;
        }

        let file_type = entry.file_type().map_err(|source| JoinerError::ReadFile {
            path: path.clone(),
            source,
        })?;
        // Symlinks are followed; a dangling one is an error like any unreadable file.
        let is_file = if file_type.is_symlink() {
            fs::metadata(&path)
                .map_err(|source| JoinerError::ReadFile {
                    path: path.clone(),
                    source,
                })?
                .is_file()
        } else {
            file_type.is_file()
        };
        if is_file {
            files.push(path);
        }
    }

    Ok(files)
}

/// Names of the public, type-shaped items declared at the top level of `file`.
pub fn exported_entity_names(file: &File) -> Vec<String> {
    file.items
        .iter()
        .filter_map(|item| match item {
            Item::Struct(item) if is_public(&item.vis) => Some(item.ident.to_string()),
            Item::Enum(item) if is_public(&item.vis) => Some(item.ident.to_string()),
            _ => None,
        })
        .filter(|name| !name.is_empty())
        .collect()
}

fn is_public(vis: &Visibility) -> bool {
    matches!(vis, Visibility::Public(_))
}

fn parse_model_file(path: &Path) -> JoinerResult<File> {
    let content = fs::read_to_string(path).map_err(|source| JoinerError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    syn::parse_file(&content).map_err(|source| JoinerError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(source: &str) -> Vec<String> {
        let file = syn::parse_file(source).expect("fixture should parse");
        exported_entity_names(&file)
    }

    #[test]
    fn collects_public_structs_and_enums_in_order() {
        let source = r#"
            pub struct Order {
                pub id: String,
            }

            pub enum OrderStatus {
                Pending,
                Completed,
            }

            pub struct OrderItem(pub String);
        "#;

        assert_eq!(names(source), vec!["Order", "OrderStatus", "OrderItem"]);
    }

    #[test]
    fn ignores_private_restricted_and_non_type_items() {
        let source = r#"
            struct Hidden;
            pub(crate) struct CrateOnly;
            pub(super) enum ParentOnly { A }
            pub fn helper() {}
            pub const LIMIT: usize = 3;
            pub mod nested {
                pub struct Inner;
            }
            pub struct Visible;
        "#;

        assert_eq!(names(source), vec!["Visible"]);
    }

    #[test]
    fn empty_file_has_no_entities() {
        assert!(names("").is_empty());
    }
}
