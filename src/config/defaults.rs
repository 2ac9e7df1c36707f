pub const DEFAULT_RUST_LOG: &str = "info";
pub const DEFAULT_MODELS_DIR_NAME: &str = "models";
pub const DEFAULT_BUILD_OUTPUT_MARKER: &str = "dist";
pub const DEFAULT_SOURCE_MARKER: &str = "src";
pub const DEFAULT_EXCLUDED_PREFIXES: &[&str] = &["index.", "mod."];
pub const DEFAULT_EXCLUDED_SUFFIXES: &[&str] = &[".ts.map", ".js.map", ".d.ts", ".rs.bk"];
pub const DEFAULT_PRIMARY_KEY: &str = "id";
pub const LINKABLE_KEY_SUFFIX: &str = "_id";
