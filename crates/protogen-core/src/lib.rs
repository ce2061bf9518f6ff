//! # protogen-core
//!
//! A library for translating compiled schema descriptors into rendered text
//! artifacts: the canonical `.proto` schema plus C/C++ structural and wire
//! bindings.
//!
//! This crate provides the core functionality for:
//! - Decoding annotated file descriptors and their extension options
//! - Canonicalizing type names per output style
//! - Computing wire tags and encoding metadata
//! - Column-aligned declaration formatting
//! - Planning and writing the artifact set for a batch of files
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`descriptor`]: The annotated descriptor model
//! - [`options`]: Extension options resolution
//! - [`naming`]: Type-name canonicalization and per-style spelling
//! - [`wire`]: Wire tags and encoding predicates
//! - [`columns`]: Column-aligned declaration formatting
//! - [`render`]: The template rendering seam and the built-in schema renderer
//! - [`dispatch`]: Template groups, output paths, and batch generation
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use protogen_core::{Dispatcher, FileDescriptor, SchemaRenderer};
//! use prost::Message;
//! use std::fs;
//!
//! let data = fs::read("./messages.pb")?;
//! let file = FileDescriptor::decode(data.as_slice())?;
//!
//! let dispatcher = Dispatcher::new(&["proto"])?
//!     .schema_root("./proto")
//!     .code_root("./src");
//! dispatcher.run(&[file], &mut SchemaRenderer::new())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Extensibility
//!
//! The [`Renderer`] trait is the seam for plugging in an external template
//! engine for the structural binding templates.

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod columns;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod naming;
pub mod options;
pub mod render;
pub mod wire;

// Re-export primary types for convenience
pub use columns::{EnumColumns, FieldColumns};
pub use descriptor::{FileDescriptor, FileDescriptorSet};
pub use dispatch::{Artifact, Dispatcher, TemplateGroup, TEMPLATE_GROUPS};
pub use error::{Error, Result};
pub use naming::Style;
pub use options::{ArraySize, Descriptor, ExtOptions};
pub use render::{ProtoSyntax, RenderContext, Renderer, SchemaRenderer};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum valid field number (2^29 - 1)
/// Used for `reserved X to max` ranges
pub const MAX_FIELD_NUMBER: u32 = 536_870_911;
