//! protogen - Translate compiled schema descriptors into text artifacts
//!
//! This tool consumes an encoded, annotated file descriptor (or a descriptor
//! set) and generates the canonical `.proto` schema along with C/C++
//! structural and wire binding sources.

use anyhow::{Context, Result};
use clap::Parser;
use prost::Message;
use protogen_core::{Dispatcher, FileDescriptor, FileDescriptorSet, SchemaRenderer};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

/// Translate compiled schema descriptors into text artifacts
#[derive(Parser, Debug)]
#[command(name = "protogen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the encoded file descriptor or descriptor set
    infile: PathBuf,

    /// Override the artifact basename derived from the descriptor
    #[arg(long)]
    basename: Option<String>,

    /// Root directory for generated schema files
    #[arg(long, default_value = ".")]
    proto_root: PathBuf,

    /// Root directory for generated code files
    #[arg(long, default_value = ".")]
    cpp_root: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Template groups to generate (proto, cereal, pbwire, pb2c, cpp-simple,
    /// recon)
    #[arg(required = true)]
    groups: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .init();

    let data = fs::read(&cli.infile)
        .with_context(|| format!("Failed to read input file: {}", cli.infile.display()))?;
    let files = decode_files(&data)
        .with_context(|| format!("Failed to decode descriptor: {}", cli.infile.display()))?;
    debug!("Decoded {} file descriptor(s)", files.len());

    let mut dispatcher = Dispatcher::new(&cli.groups)?
        .schema_root(cli.proto_root)
        .code_root(cli.cpp_root);
    if let Some(basename) = cli.basename {
        dispatcher = dispatcher.basename(basename);
    }

    let written = dispatcher.run(&files, &mut SchemaRenderer::new())?;
    info!("Wrote {} artifact(s)", written);

    Ok(())
}

/// Decode the input as a descriptor set if it plausibly is one, otherwise as
/// a single file descriptor.
fn decode_files(data: &[u8]) -> Result<Vec<FileDescriptor>> {
    if let Ok(set) = FileDescriptorSet::decode(data) {
        // A lone file descriptor can also decode as a set of garbage
        // entries; require every entry to carry a filename.
        if !set.file.is_empty() && set.file.iter().all(|f| f.name.is_some()) {
            return Ok(set.file);
        }
    }

    let file = FileDescriptor::decode(data)
        .context("input is neither a file descriptor nor a descriptor set")?;
    Ok(vec![file])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named_file(name: &str) -> FileDescriptor {
        FileDescriptor {
            name: Some(name.into()),
            package: Some("foo".into()),
            ..Default::default()
        }
    }

    #[test]
    fn decodes_a_descriptor_set() {
        let set = FileDescriptorSet {
            file: vec![named_file("a.proto"), named_file("b.proto")],
        };
        let files = decode_files(&set.encode_to_vec()).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[1].name(), "b.proto");
    }

    #[test]
    fn decodes_a_single_file_descriptor() {
        let file = named_file("test_messages.proto");
        let files = decode_files(&file.encode_to_vec()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name(), "test_messages.proto");
        assert_eq!(files[0].package(), "foo");
    }

    #[test]
    fn rejects_garbage_input() {
        assert!(decode_files(&[0xff, 0xff, 0xff]).is_err());
    }

    #[test]
    fn end_to_end_generates_schema() {
        use protogen_core::descriptor::{FileExt, FileOptions};

        let tmp = tempfile::tempdir().unwrap();
        let file = FileDescriptor {
            options: Some(FileOptions {
                ext: Some(FileExt {
                    header_filepath: Some("tangent/test/messages.h".into()),
                    ..Default::default()
                }),
            }),
            ..named_file("test_messages.proto")
        };

        let files = decode_files(&file.encode_to_vec()).unwrap();
        let dispatcher = Dispatcher::new(&["proto"])
            .unwrap()
            .schema_root(tmp.path());
        let written = dispatcher.run(&files, &mut SchemaRenderer::new()).unwrap();
        assert_eq!(written, 1);

        let out = tmp.path().join("tangent/test/messages.proto");
        let content = fs::read_to_string(out).unwrap();
        assert!(content.starts_with("syntax = \"proto2\";\n"));
        assert!(content.contains("package foo;"));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
