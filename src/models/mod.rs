pub mod discovery;
pub mod location;
pub mod manifest;

pub use discovery::{entities_in_files, exported_entity_names, load_models, model_files};
pub use location::models_dir_for;
pub use manifest::{EntityDescriptorRef, render_manifest, write_manifest};
