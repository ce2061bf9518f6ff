//! Template rendering layer.
//!
//! A [`Renderer`] turns a template identifier plus a [`RenderContext`] into
//! artifact text. The context bundles the active file descriptor with every
//! naming, wire, and formatting helper a template body needs, so renderer
//! implementations never reach into the descriptor model directly.
//!
//! ## Extensibility
//!
//! The [`Renderer`] trait is the seam for alternative template engines. The
//! built-in [`SchemaRenderer`] handles the canonical schema template; an
//! external engine can be dropped in for the structural binding templates
//! without touching the dispatch layer.

mod schema;

use crate::columns::{self, EnumColumns, FieldColumns};
use crate::descriptor::{
    EnumValueDescriptor, FieldDescriptor, FileDescriptor, Location, MessageDescriptor,
    ReservedRange,
};
use crate::error::{Error, Result};
use crate::naming::{self, Style};
use crate::options::{self, Descriptor};
use crate::wire;

pub use schema::{SchemaRenderer, SCHEMA_TEMPLATE};

/// Schema syntax version declared by the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtoSyntax {
    /// Proto2 syntax
    Proto2,
    /// Proto3 syntax
    Proto3,
}

impl ProtoSyntax {
    /// Returns the syntax declaration string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtoSyntax::Proto2 => "proto2",
            ProtoSyntax::Proto3 => "proto3",
        }
    }
}

impl TryFrom<&str> for ProtoSyntax {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "" | "proto2" => Ok(ProtoSyntax::Proto2),
            "proto3" => Ok(ProtoSyntax::Proto3),
            _ => Err(Error::UnsupportedSyntax {
                syntax: value.to_string(),
            }),
        }
    }
}

/// Everything a template body can ask about the file being rendered.
///
/// The context is cheap to construct per file. All lookups borrow from the
/// descriptor; nothing is precomputed beyond what the caller requests.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    file: &'a FileDescriptor,
    include_base: &'a str,
}

impl<'a> RenderContext<'a> {
    /// Creates a context for the given file. `include_base` is the
    /// root-relative artifact path without suffix, used by templates that
    /// emit `#include` directives referencing sibling artifacts.
    pub fn new(file: &'a FileDescriptor, include_base: &'a str) -> Self {
        Self { file, include_base }
    }

    /// The file descriptor being rendered.
    pub fn file(&self) -> &'a FileDescriptor {
        self.file
    }

    /// The root-relative artifact path without suffix.
    pub fn include_base(&self) -> &'a str {
        self.include_base
    }

    /// The declared package of the file.
    pub fn package(&self) -> &'a str {
        self.file.package()
    }

    /// The declared syntax of the file, validated.
    pub fn syntax(&self) -> Result<ProtoSyntax> {
        ProtoSyntax::try_from(self.file.syntax())
    }

    /// The package rendered as a structural namespace.
    pub fn namespace(&self) -> String {
        naming::namespace(self.package())
    }

    /// A top-level entity name qualified with the package, in structural
    /// spelling.
    pub fn fully_qualified(&self, entity_name: &str) -> String {
        naming::fully_qualified(self.package(), entity_name)
    }

    /// Strips redundant package qualification from a reference and rejoins
    /// with the style separator.
    pub fn canonicalize(&self, qualified_name: &str, style: Style) -> String {
        naming::canonicalize(self.package(), qualified_name, style)
    }

    /// The rendered type of a field in the given style.
    pub fn typename(&self, field: &FieldDescriptor, style: Style) -> String {
        naming::typename(field, self.package(), style)
    }

    /// The extension comment attached to a descriptor, if any.
    pub fn comment<'b>(&self, descr: Descriptor<'b>) -> Option<&'b str> {
        options::comment(descr)
    }

    /// The source location recorded for the given descriptor path, if any.
    pub fn location(&self, path: &[i32]) -> Option<&'a Location> {
        self.file
            .source_code_info
            .as_ref()?
            .location
            .iter()
            .find(|location| location.path == path)
    }

    /// The ordered display cells of a field declaration.
    pub fn field_tuple(&self, field: &FieldDescriptor, style: Style) -> Vec<String> {
        columns::field_tuple(field, self.package(), style)
    }

    /// A column-aligned format over a message's fields.
    pub fn field_columns(&self, message: &MessageDescriptor, style: Style) -> FieldColumns {
        FieldColumns::new(&message.field, self.package(), style)
    }

    /// A column-aligned format over an enum's values.
    pub fn enum_columns(&self, values: &[EnumValueDescriptor]) -> EnumColumns {
        EnumColumns::new(values)
    }

    /// Renders a `reserved` declaration body.
    pub fn format_reserved(&self, ranges: &[ReservedRange]) -> String {
        columns::format_reserved(ranges)
    }

    /// The name of the companion length field generated for a repeated
    /// field, if one was recorded.
    pub fn lenfield(&self, field: &'a FieldDescriptor) -> Option<&'a str> {
        options::lenfield(field)
    }

    /// The declared backing-array capacity for a repeated field.
    pub fn array_size(&self, field: &'a FieldDescriptor) -> Result<options::ArraySize<'a>> {
        options::array_size(field)
    }

    /// The wire tag preceding this field's payload.
    pub fn tag(&self, field: &FieldDescriptor) -> u32 {
        wire::tag(field)
    }

    /// The wire tag for the packed encoding of this field.
    pub fn packed_tag(&self, field: &FieldDescriptor) -> u32 {
        wire::packed_tag(field)
    }

    /// The name of the wire-emit helper for one value of this field's type.
    ///
    /// Primitive fields use a fixed helper per schema type. Message fields
    /// use a per-pass helper, since message emission runs one sizing pass
    /// before the write pass.
    pub fn emit_fn(&self, field: &FieldDescriptor, passno: u32) -> String {
        if wire::is_primitive(field) {
            format!("pbemit_{}", self.typename(field, Style::Schema))
        } else {
            format!("_pbemit{}_{}", passno, self.typename(field, Style::Schema))
        }
    }

    /// The name of the wire-parse helper for this field.
    ///
    /// A `fieldtype` storage override changes which parse helper applies; the
    /// conventional `_t` suffix is dropped from the helper name.
    pub fn parse_fn(&self, field: &FieldDescriptor) -> String {
        if let Some(fieldtype) = options::field_ext(field).and_then(|e| e.fieldtype.as_deref()) {
            let stem = fieldtype.strip_suffix("_t").unwrap_or(fieldtype);
            return format!("pbparse_{}", stem);
        }
        format!("pbparse_{}", self.typename(field, Style::Schema))
    }
}

/// Turns template identifiers into artifact text.
///
/// Implementations report an unregistered identifier as
/// [`Error::MissingTemplate`] rather than producing empty output.
pub trait Renderer {
    /// Renders the named template against the given context.
    fn render(&mut self, template: &str, ctx: &RenderContext<'_>) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{
        FieldExt, FieldOptions, FieldType, SourceCodeInfo,
    };
    use pretty_assertions::assert_eq;

    fn field(name: &str, number: i32, kind: FieldType) -> FieldDescriptor {
        FieldDescriptor {
            name: Some(name.into()),
            number: Some(number),
            r#type: Some(kind as i32),
            ..Default::default()
        }
    }

    fn file_in_package(package: &str) -> FileDescriptor {
        FileDescriptor {
            name: Some("test_messages.proto".into()),
            package: Some(package.into()),
            ..Default::default()
        }
    }

    #[test]
    fn syntax_validation() {
        let file = file_in_package("foo");
        let ctx = RenderContext::new(&file, "foo/test_messages");
        assert_eq!(ctx.syntax().unwrap(), ProtoSyntax::Proto2);

        let mut file = file_in_package("foo");
        file.syntax = Some("proto4".into());
        let ctx = RenderContext::new(&file, "foo/test_messages");
        assert!(matches!(
            ctx.syntax(),
            Err(Error::UnsupportedSyntax { .. })
        ));
    }

    #[test]
    fn emit_fn_for_primitive_and_message() {
        let file = file_in_package("foo.bar");
        let ctx = RenderContext::new(&file, "foo/test_messages");

        let primitive = field("fieldA", 1, FieldType::Sint32);
        assert_eq!(ctx.emit_fn(&primitive, 0), "pbemit_sint32");
        // Passno is irrelevant for primitives.
        assert_eq!(ctx.emit_fn(&primitive, 1), "pbemit_sint32");

        let message = FieldDescriptor {
            type_name: Some(".foo.bar.MyMessageA".into()),
            ..field("fieldF", 6, FieldType::Message)
        };
        assert_eq!(ctx.emit_fn(&message, 0), "_pbemit0_MyMessageA");
        assert_eq!(ctx.emit_fn(&message, 1), "_pbemit1_MyMessageA");
    }

    #[test]
    fn parse_fn_honors_fieldtype_override() {
        let file = file_in_package("foo.bar");
        let ctx = RenderContext::new(&file, "foo/test_messages");

        let plain = field("fieldA", 1, FieldType::Uint64);
        assert_eq!(ctx.parse_fn(&plain), "pbparse_uint64");

        let overridden = FieldDescriptor {
            options: Some(FieldOptions {
                packed: None,
                ext: Some(FieldExt {
                    fieldtype: Some("uint8_t".into()),
                    ..Default::default()
                }),
            }),
            ..field("fieldB", 2, FieldType::Uint32)
        };
        assert_eq!(ctx.parse_fn(&overridden), "pbparse_uint8");

        let enum_field = FieldDescriptor {
            type_name: Some(".foo.bar.MyEnumA".into()),
            ..field("fieldD", 4, FieldType::Enum)
        };
        assert_eq!(ctx.parse_fn(&enum_field), "pbparse_MyEnumA");
    }

    #[test]
    fn array_metadata_lookups() {
        let file = file_in_package("foo");
        let ctx = RenderContext::new(&file, "test_messages");

        let values = FieldDescriptor {
            options: Some(FieldOptions {
                packed: None,
                ext: Some(FieldExt {
                    lenfield: Some("numValues".into()),
                    capacity: Some(4),
                    ..Default::default()
                }),
            }),
            ..field("values", 1, FieldType::Int32)
        };
        assert_eq!(ctx.lenfield(&values), Some("numValues"));
        assert_eq!(ctx.array_size(&values).unwrap().to_string(), "4");

        let plain = field("fieldA", 2, FieldType::Int32);
        assert_eq!(ctx.lenfield(&plain), None);
        assert!(ctx.array_size(&plain).is_err());
    }

    #[test]
    fn location_lookup_matches_exact_path() {
        let mut file = file_in_package("foo");
        file.source_code_info = Some(SourceCodeInfo {
            location: vec![
                Location {
                    path: vec![4, 0],
                    leading_comments: Some("first message".into()),
                    trailing_comments: None,
                },
                Location {
                    path: vec![5, 0],
                    leading_comments: Some("first enum".into()),
                    trailing_comments: None,
                },
            ],
        });
        let ctx = RenderContext::new(&file, "test_messages");

        let location = ctx.location(&[5, 0]).unwrap();
        assert_eq!(location.leading_comments.as_deref(), Some("first enum"));
        assert!(ctx.location(&[4, 1]).is_none());

        let bare = file_in_package("foo");
        let ctx = RenderContext::new(&bare, "test_messages");
        assert!(ctx.location(&[4, 0]).is_none());
    }
}
