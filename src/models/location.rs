use std::{
    ffi::OsStr,
    path::{Component, Path, PathBuf},
};

use crate::config::DiscoveryConfig;

/// Resolves the models directory that sits next to a module's source root.
///
/// `<crate>/dist/...` maps to `<crate>/dist/models`, otherwise
/// `<crate>/src/...` maps to `<crate>/src/models`. Paths carrying neither
/// marker fall back to the file's own directory.
pub fn models_dir_for(source_file: &Path, cfg: &DiscoveryConfig) -> PathBuf {
    let root = truncate_after(source_file, &cfg.build_output_marker)
        .or_else(|| truncate_after(source_file, &cfg.source_marker))
        .unwrap_or_else(|| {
            source_file
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default()
        });

    root.join(&cfg.models_dir_name)
}

// Keeps every component up to and including the first one named `marker`.
fn truncate_after(path: &Path, marker: &str) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for component in path.components() {
        out.push(component.as_os_str());
        if matches!(component, Component::Normal(name) if name == OsStr::new(marker)) {
            return Some(out);
        }
    }
    None
}
