//! Type-name canonicalization and per-style spelling.
//!
//! Every formatting function here is total over [`Style`]: there is no
//! "unknown style" failure path because the style set is closed at the type
//! level.

use crate::descriptor::{FieldDescriptor, FieldType};
use crate::options::field_ext;

/// The output flavor a name is being rendered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    /// Canonical schema output (`.proto`): dot-separated references and
    /// schema type keywords.
    Schema,
    /// Structural bindings (C/C++ sources): scope-resolved references and
    /// storage types.
    Structural,
}

impl Style {
    /// The separator joining qualified name components in this style.
    pub fn separator(&self) -> &'static str {
        match self {
            Style::Schema => ".",
            Style::Structural => "::",
        }
    }
}

fn components(name: &str) -> impl Iterator<Item = &str> {
    name.trim_matches('.').split('.').filter(|s| !s.is_empty())
}

/// Strips the package qualification that is redundant given the active
/// file's own package, then rejoins with the style separator.
///
/// The shared prefix is stripped jointly, one component at a time, so a
/// package that only partially matches the reference loses only the truly
/// shared components:
///
/// ```
/// use protogen_core::naming::{canonicalize, Style};
///
/// assert_eq!(canonicalize("foo.bar", "foo.bar.Baz", Style::Schema), "Baz");
/// assert_eq!(canonicalize("foo.bar", "foo.qux.Baz", Style::Schema), "qux.Baz");
/// ```
pub fn canonicalize(package: &str, qualified_name: &str, style: Style) -> String {
    let package: Vec<&str> = components(package).collect();
    let name: Vec<&str> = components(qualified_name).collect();

    let mut shared = 0;
    while shared < package.len() && shared < name.len() && package[shared] == name[shared] {
        shared += 1;
    }

    name[shared..].join(style.separator())
}

/// Joins the package components and an entity's own name with the structural
/// separator, for referencing an entity defined in the current file.
pub fn fully_qualified(package: &str, entity_name: &str) -> String {
    let mut parts: Vec<&str> = components(package).collect();
    parts.push(entity_name);
    parts.join(Style::Structural.separator())
}

/// The package rendered as a structural namespace, e.g. `foo.bar` becomes
/// `foo::bar`.
pub fn namespace(package: &str) -> String {
    components(package)
        .collect::<Vec<_>>()
        .join(Style::Structural.separator())
}

/// The schema keyword for a primitive type.
pub fn schema_typename(kind: FieldType) -> &'static str {
    match kind {
        FieldType::Bool => "bool",
        FieldType::Bytes => "bytes",
        FieldType::Double => "double",
        FieldType::Fixed32 => "fixed32",
        FieldType::Fixed64 => "fixed64",
        FieldType::Float => "float",
        FieldType::Int32 => "int32",
        FieldType::Int64 => "int64",
        FieldType::Sfixed32 => "sfixed32",
        FieldType::Sfixed64 => "sfixed64",
        FieldType::Sint32 => "sint32",
        FieldType::Sint64 => "sint64",
        FieldType::String => "string",
        FieldType::Uint32 => "uint32",
        FieldType::Uint64 => "uint64",
        // Callers route enum/message types through `canonicalize` before
        // reaching the keyword table.
        FieldType::Enum | FieldType::Message => "",
    }
}

/// The structural storage type for a primitive type.
pub fn structural_typename(kind: FieldType) -> &'static str {
    match kind {
        FieldType::Bool => "bool",
        FieldType::Bytes => "std::vector<uint8_t>",
        FieldType::Double => "double",
        FieldType::Fixed32 => "int32_t",
        FieldType::Fixed64 => "int64_t",
        FieldType::Float => "float",
        FieldType::Int32 => "int32_t",
        FieldType::Int64 => "int64_t",
        FieldType::Sfixed32 => "int32_t",
        FieldType::Sfixed64 => "int32_t",
        FieldType::Sint32 => "int32_t",
        FieldType::Sint64 => "int64_t",
        FieldType::String => "std::string",
        FieldType::Uint32 => "uint32_t",
        FieldType::Uint64 => "uint64_t",
        FieldType::Enum | FieldType::Message => "",
    }
}

/// The rendered type of a field in the given style.
///
/// Enum- and message-typed fields (and fields with no declared type at all)
/// canonicalize their qualified `type_name` against the active package. For
/// structural output an explicit `fieldtype` extension override is returned
/// verbatim, bypassing the storage-type table.
pub fn typename(field: &FieldDescriptor, package: &str, style: Style) -> String {
    let declared = field
        .r#type
        .and_then(|raw| FieldType::try_from(raw).ok());

    match declared {
        None | Some(FieldType::Message) | Some(FieldType::Enum) => {
            canonicalize(package, field.type_name(), style)
        }
        Some(kind) => match style {
            Style::Schema => schema_typename(kind).to_string(),
            Style::Structural => {
                if let Some(fieldtype) = field_ext(field).and_then(|e| e.fieldtype.as_deref()) {
                    fieldtype.to_string()
                } else {
                    structural_typename(kind).to_string()
                }
            }
        },
    }
}

/// Formats a comment block preceding a declaration, one prefixed line per
/// source line.
pub fn leading_comment_block(comment: &str, style: Style) -> String {
    let prefix = match style {
        Style::Schema => "// ",
        Style::Structural => "/// ",
    };
    comment
        .trim()
        .split('\n')
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats a comment trailing a declaration on the same line.
pub fn trailing_comment(comment: &str, style: Style) -> String {
    let prefix = match style {
        Style::Schema => "// ",
        Style::Structural => "//!< ",
    };
    format!("{}{}", prefix, comment.trim().replace('\n', " "))
}
