use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JoinerError {
    #[error("module name must not be empty")]
    EmptyModuleName,

    #[error("no models directory or source file given for module '{service}'")]
    MissingModelsLocation { service: String },

    #[error("module '{service}' does not define any entity")]
    NoEntities { service: String },

    #[error("failed to read models directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },

    #[error("failed to write manifest {}: {source}", .path.display())]
    WriteManifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type JoinerResult<T> = Result<T, JoinerError>;
