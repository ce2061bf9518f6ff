//! Artifact planning and batch generation.
//!
//! Maps named template groups to suffix lists, derives output paths from the
//! originating header filepath recorded on each file descriptor, and drives
//! a [`Renderer`] over the resulting plan. Any failure aborts the batch; a
//! partially written artifact set is never reported as success.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::descriptor::FileDescriptor;
use crate::error::{Error, Result};
use crate::options::header_filepath;
use crate::render::{RenderContext, Renderer};

/// A named group of functionality and the artifact suffixes implementing it.
#[derive(Debug, Clone, Copy)]
pub struct TemplateGroup {
    /// The group name accepted on the command line
    pub name: &'static str,
    /// Artifact suffixes generated for the group, in output order
    pub suffixes: &'static [&'static str],
}

/// Every template group known to the generator.
pub const TEMPLATE_GROUPS: &[TemplateGroup] = &[
    TemplateGroup {
        name: "proto",
        suffixes: &[".proto"],
    },
    TemplateGroup {
        name: "cereal",
        suffixes: &[".cereal.h"],
    },
    TemplateGroup {
        name: "pbwire",
        suffixes: &[".pbwire.h", ".pbwire.c"],
    },
    TemplateGroup {
        name: "pb2c",
        suffixes: &[".pb2c.h", ".pb2c.cc"],
    },
    TemplateGroup {
        name: "cpp-simple",
        suffixes: &["-simple.h", "-simple.cc"],
    },
    TemplateGroup {
        name: "recon",
        suffixes: &["-recon.h"],
    },
];

/// Flattens the named groups into an ordered suffix list.
///
/// Group order is preserved and duplicates are not collapsed; an unknown
/// name fails the whole resolution.
pub fn resolve_groups<S: AsRef<str>>(groups: &[S]) -> Result<Vec<&'static str>> {
    let mut suffixes = Vec::new();
    for group in groups {
        let group = group.as_ref();
        let found = TEMPLATE_GROUPS
            .iter()
            .find(|candidate| candidate.name == group)
            .ok_or_else(|| Error::unknown_group(group))?;
        suffixes.extend_from_slice(found.suffixes);
    }
    Ok(suffixes)
}

/// The template identifier for an artifact suffix.
pub fn template_name(suffix: &str) -> String {
    format!("XXX{}.jinja2", suffix)
}

/// One planned output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Absolute or root-relative output path
    pub path: PathBuf,
    /// Template identifier to render
    pub template: String,
}

/// Plans and writes the artifact set for a batch of file descriptors.
///
/// Schema artifacts land under the schema root, everything else under the
/// code root, both mirroring the directory of the originating header.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    schema_root: PathBuf,
    code_root: PathBuf,
    suffixes: Vec<&'static str>,
    basename: Option<String>,
}

impl Dispatcher {
    /// Creates a dispatcher for the named template groups, with both output
    /// roots defaulting to the current directory.
    pub fn new<S: AsRef<str>>(groups: &[S]) -> Result<Self> {
        Ok(Self {
            schema_root: PathBuf::from("."),
            code_root: PathBuf::from("."),
            suffixes: resolve_groups(groups)?,
            basename: None,
        })
    }

    /// Sets the root directory for schema artifacts.
    pub fn schema_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.schema_root = root.into();
        self
    }

    /// Sets the root directory for code artifacts.
    pub fn code_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.code_root = root.into();
        self
    }

    /// Overrides the artifact basename derived from the header filepath.
    pub fn basename(mut self, basename: impl Into<String>) -> Self {
        self.basename = Some(basename.into());
        self
    }

    /// The directory of the originating header, relative to the output root.
    fn relative_dir(file: &FileDescriptor) -> &str {
        let source = header_filepath(file).unwrap_or("");
        match source.rsplit_once('/') {
            Some((dir, _)) => dir,
            None => "",
        }
    }

    /// The artifact basename for a file: the override if set, otherwise the
    /// header filename up to its first dot.
    fn file_basename<'a>(&'a self, file: &'a FileDescriptor) -> Result<&'a str> {
        if let Some(basename) = self.basename.as_deref() {
            return Ok(basename);
        }
        let source =
            header_filepath(file).ok_or_else(|| Error::missing_base_name(file.name()))?;
        let filename = source.rsplit_once('/').map(|(_, name)| name).unwrap_or(source);
        let basename = filename.split('.').next().unwrap_or("");
        if basename.is_empty() {
            return Err(Error::missing_base_name(file.name()));
        }
        Ok(basename)
    }

    /// The root-relative artifact path without suffix, as used in generated
    /// `#include` directives.
    pub fn include_base(&self, file: &FileDescriptor) -> Result<String> {
        let basename = self.file_basename(file)?;
        let dir = Self::relative_dir(file);
        if dir.is_empty() {
            Ok(basename.to_string())
        } else {
            Ok(format!("{}/{}", dir, basename))
        }
    }

    /// The ordered artifact plan for one file descriptor.
    pub fn plan(&self, file: &FileDescriptor) -> Result<Vec<Artifact>> {
        let basename = self.file_basename(file)?;
        let dir = Self::relative_dir(file);

        let mut artifacts = Vec::with_capacity(self.suffixes.len());
        for suffix in &self.suffixes {
            let root = if *suffix == ".proto" {
                &self.schema_root
            } else {
                &self.code_root
            };
            let mut path = root.join(dir);
            path.push(format!("{}{}", basename, suffix));
            artifacts.push(Artifact {
                path,
                template: template_name(suffix),
            });
        }
        Ok(artifacts)
    }

    /// Renders and writes every planned artifact for every file, creating
    /// output directories as needed. Returns the number of files written.
    pub fn run(&self, files: &[FileDescriptor], renderer: &mut dyn Renderer) -> Result<usize> {
        let mut written = 0;
        for file in files {
            let include_base = self.include_base(file)?;
            let ctx = RenderContext::new(file, &include_base);
            debug!(file = file.name(), %include_base, "dispatching");

            for artifact in self.plan(file)? {
                let content = renderer.render(&artifact.template, &ctx)?;
                write_artifact(&artifact.path, &content)?;
                info!(
                    path = %artifact.path.display(),
                    template = %artifact.template,
                    "wrote artifact"
                );
                written += 1;
            }
        }
        Ok(written)
    }
}

fn write_artifact(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::directory_create(parent, source))?;
        }
    }
    fs::write(path, content).map_err(|source| Error::file_write(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FileExt, FileOptions};
    use pretty_assertions::assert_eq;

    struct StubRenderer;

    impl Renderer for StubRenderer {
        fn render(&mut self, template: &str, ctx: &RenderContext<'_>) -> Result<String> {
            Ok(format!("{} for {}\n", template, ctx.include_base()))
        }
    }

    fn file_with_header(name: &str, header: &str) -> FileDescriptor {
        FileDescriptor {
            name: Some(name.into()),
            options: Some(FileOptions {
                ext: Some(FileExt {
                    header_filepath: Some(header.into()),
                    ..Default::default()
                }),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn groups_resolve_in_order() {
        let suffixes = resolve_groups(&["pbwire", "proto"]).unwrap();
        assert_eq!(suffixes, vec![".pbwire.h", ".pbwire.c", ".proto"]);
    }

    #[test]
    fn unknown_group_is_rejected() {
        let err = resolve_groups(&["pbwire", "bogus"]).unwrap_err();
        assert!(matches!(err, Error::UnknownGroup { .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn plan_splits_schema_and_code_roots() {
        let file = file_with_header("test_messages.proto", "tangent/test/messages.h");
        let dispatcher = Dispatcher::new(&["proto", "pbwire"])
            .unwrap()
            .schema_root("/out/proto")
            .code_root("/out/cpp");

        let plan = dispatcher.plan(&file).unwrap();
        assert_eq!(
            plan,
            vec![
                Artifact {
                    path: PathBuf::from("/out/proto/tangent/test/messages.proto"),
                    template: "XXX.proto.jinja2".into(),
                },
                Artifact {
                    path: PathBuf::from("/out/cpp/tangent/test/messages.pbwire.h"),
                    template: "XXX.pbwire.h.jinja2".into(),
                },
                Artifact {
                    path: PathBuf::from("/out/cpp/tangent/test/messages.pbwire.c"),
                    template: "XXX.pbwire.c.jinja2".into(),
                },
            ]
        );
    }

    #[test]
    fn include_base_mirrors_header_directory() {
        let dispatcher = Dispatcher::new(&["proto"]).unwrap();

        let nested = file_with_header("a.proto", "tangent/test/messages.h");
        assert_eq!(
            dispatcher.include_base(&nested).unwrap(),
            "tangent/test/messages"
        );

        let flat = file_with_header("b.proto", "messages.h");
        assert_eq!(dispatcher.include_base(&flat).unwrap(), "messages");
    }

    #[test]
    fn basename_override_wins() {
        let file = file_with_header("a.proto", "tangent/test/messages.h");
        let dispatcher = Dispatcher::new(&["proto"]).unwrap().basename("renamed");
        let plan = dispatcher.plan(&file).unwrap();
        assert_eq!(
            plan[0].path,
            PathBuf::from("./tangent/test/renamed.proto")
        );
    }

    #[test]
    fn missing_header_filepath_is_fatal_without_override() {
        let file = FileDescriptor {
            name: Some("orphan.proto".into()),
            ..Default::default()
        };
        let dispatcher = Dispatcher::new(&["proto"]).unwrap();
        let err = dispatcher.plan(&file).unwrap_err();
        assert!(matches!(err, Error::MissingBaseName { .. }));

        // An explicit basename recovers; the file lands at the root.
        let dispatcher = dispatcher.basename("orphan");
        assert_eq!(
            dispatcher.plan(&file).unwrap()[0].path,
            PathBuf::from("./orphan.proto")
        );
    }

    #[test]
    fn run_writes_every_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        let file = file_with_header("test_messages.proto", "tangent/test/messages.h");
        let dispatcher = Dispatcher::new(&["proto", "pb2c"])
            .unwrap()
            .schema_root(tmp.path().join("proto"))
            .code_root(tmp.path().join("cpp"));

        let written = dispatcher.run(&[file], &mut StubRenderer).unwrap();
        assert_eq!(written, 3);

        let schema = tmp.path().join("proto/tangent/test/messages.proto");
        assert_eq!(
            fs::read_to_string(schema).unwrap(),
            "XXX.proto.jinja2 for tangent/test/messages\n"
        );
        assert!(tmp.path().join("cpp/tangent/test/messages.pb2c.h").exists());
        assert!(tmp.path().join("cpp/tangent/test/messages.pb2c.cc").exists());
    }

    #[test]
    fn run_is_deterministic() {
        let tmp = tempfile::tempdir().unwrap();
        let file = file_with_header("test_messages.proto", "tangent/test/messages.h");
        let dispatcher = Dispatcher::new(&["pbwire"])
            .unwrap()
            .code_root(tmp.path());

        dispatcher.run(&[file.clone()], &mut StubRenderer).unwrap();
        let first = fs::read(tmp.path().join("tangent/test/messages.pbwire.h")).unwrap();

        dispatcher.run(&[file], &mut StubRenderer).unwrap();
        let second = fs::read(tmp.path().join("tangent/test/messages.pbwire.h")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn render_failure_aborts_the_batch() {
        struct FailingRenderer;
        impl Renderer for FailingRenderer {
            fn render(&mut self, template: &str, _ctx: &RenderContext<'_>) -> Result<String> {
                Err(Error::missing_template(template))
            }
        }

        let tmp = tempfile::tempdir().unwrap();
        let file = file_with_header("test_messages.proto", "tangent/test/messages.h");
        let dispatcher = Dispatcher::new(&["proto"])
            .unwrap()
            .schema_root(tmp.path());

        let err = dispatcher.run(&[file], &mut FailingRenderer).unwrap_err();
        assert!(matches!(err, Error::MissingTemplate { .. }));
        assert!(!tmp.path().join("tangent").exists());
    }
}
