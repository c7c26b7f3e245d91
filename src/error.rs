//! Error handling for scene inspection operations

use thiserror::Error;

/// Result type alias for scene inspection operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or inspecting a scene asset
#[derive(Error, Debug)]
pub enum Error {
    /// Import operation failed
    #[error("Import failed: {message}")]
    ImportFailed {
        /// What went wrong during the import
        message: String,
    },

    /// Invalid file path or file not found
    #[error("File error: {message}")]
    FileError {
        /// What went wrong while resolving the input file
        message: String,
    },

    /// Unsupported file format
    #[error("Unsupported format: {format}")]
    UnsupportedFormat {
        /// The offending file extension
        format: String,
    },

    /// The loaded scene violates a structural guarantee of the asset format
    #[error("Malformed scene: {message}")]
    MalformedScene {
        /// Which guarantee was violated
        message: String,
    },

    /// Invalid parameters or configuration
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Which parameter was rejected and why
        message: String,
    },

    /// Error reported by the underlying glTF parser
    #[error("glTF error: {0}")]
    Gltf(#[from] gltf::Error),
}

impl Error {
    /// Create a new import error
    pub fn import_failed<S: Into<String>>(message: S) -> Self {
        Self::ImportFailed {
            message: message.into(),
        }
    }

    /// Create a new file error
    pub fn file_error<S: Into<String>>(message: S) -> Self {
        Self::FileError {
            message: message.into(),
        }
    }

    /// Create a new unsupported format error
    pub fn unsupported_format<S: Into<String>>(format: S) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Create a new malformed scene error
    pub fn malformed_scene<S: Into<String>>(message: S) -> Self {
        Self::MalformedScene {
            message: message.into(),
        }
    }

    /// Create a new invalid parameter error
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}
