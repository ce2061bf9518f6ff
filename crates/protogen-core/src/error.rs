//! Error types for the protogen-core library.
//!
//! Every error here is batch-fatal: the generator never recovers locally and
//! silently continues, because a partially written artifact set is worse than
//! none at all.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error type for all generator operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A requested template group is not in the group table
    #[error("unknown template group '{name}'")]
    UnknownGroup {
        /// The unrecognized group name
        name: String,
    },

    /// The file descriptor carries no originating header filepath and no
    /// basename override was supplied
    #[error("no basename for '{file}': descriptor has no header filepath")]
    MissingBaseName {
        /// Name of the offending file descriptor
        file: String,
    },

    /// A fixed array capacity was requested for a field whose extension
    /// options carry neither `capacity` nor `capname`
    #[error("missing capacity option for field '{field}'")]
    MissingCapacity {
        /// Name of the offending field
        field: String,
    },

    /// The renderer has no template registered under the requested identifier
    #[error("no template registered for '{name}'")]
    MissingTemplate {
        /// The requested template identifier
        name: String,
    },

    /// The renderer failed while producing output
    #[error("failed to render '{template}': {message}")]
    Render {
        /// The template identifier being rendered
        template: String,
        /// Renderer-supplied failure description
        message: String,
    },

    /// Unsupported schema syntax version
    #[error("unsupported schema syntax: '{syntax}'")]
    UnsupportedSyntax {
        /// The unsupported syntax string
        syntax: String,
    },

    /// Failed to read input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        /// Path to the file that failed to write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to create output directory
    #[error("failed to create directory '{path}': {source}")]
    DirectoryCreate {
        /// Path to the directory that failed to create
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to decode the input descriptor bytes
    #[error("failed to parse descriptor: {0}")]
    DescriptorParse(#[from] prost::DecodeError),
}

impl Error {
    /// Creates a new unknown-group error
    pub fn unknown_group(name: impl Into<String>) -> Self {
        Self::UnknownGroup { name: name.into() }
    }

    /// Creates a new missing-basename error
    pub fn missing_base_name(file: impl Into<String>) -> Self {
        Self::MissingBaseName { file: file.into() }
    }

    /// Creates a new missing-capacity error
    pub fn missing_capacity(field: impl Into<String>) -> Self {
        Self::MissingCapacity {
            field: field.into(),
        }
    }

    /// Creates a new missing-template error
    pub fn missing_template(name: impl Into<String>) -> Self {
        Self::MissingTemplate { name: name.into() }
    }

    /// Creates a new render error
    pub fn render(template: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            template: template.into(),
            message: message.into(),
        }
    }

    /// Creates a new file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new file write error
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Creates a new directory creation error
    pub fn directory_create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreate {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the error reflects a misconfiguration rather than
    /// malformed input or an environment failure
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownGroup { .. } | Self::MissingTemplate { .. }
        )
    }
}
