//! Error type shared by every interface.
//!
//! Engine-side failures all surface as [`DssError::Engine`], carrying the
//! number and description the native library reported for the last call.
//! The other variants cover problems on this side of the boundary.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DssError {
    #[error("(#{number}) {description}")]
    Engine { number: i32, description: String },

    #[error("Could not load DSS C-API library from {path}: {source}")]
    LibraryLoad {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("Symbol not found in DSS C-API library: {name}")]
    MissingSymbol {
        name: String,
        #[source]
        source: libloading::Error,
    },

    #[error("Could not create a new DSS context")]
    ContextCreation,

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("String contains an interior NUL byte")]
    InteriorNul(#[from] std::ffi::NulError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DssError {
    /// The engine error number, when this error came from the engine.
    pub fn engine_number(&self) -> Option<i32> {
        match self {
            DssError::Engine { number, .. } => Some(*number),
            _ => None,
        }
    }

    pub fn is_engine(&self) -> bool {
        matches!(self, DssError::Engine { .. })
    }
}

pub type Result<T> = std::result::Result<T, DssError>;
