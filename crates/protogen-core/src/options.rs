//! Extension options resolution.
//!
//! Each descriptor kind carries exactly one extension slot in its options
//! message. [`resolve`] dispatches on the kind of descriptor, never on object
//! identity, and returns the borrowed payload when both the options block and
//! the extension are present. Absence is an answer, not an error: callers
//! test presence of individual sub-fields afterwards.

use std::fmt;

use crate::descriptor::{
    EnumDescriptor, EnumExt, EnumValueDescriptor, EnumValueExt, FieldDescriptor, FieldExt,
    FileDescriptor, FileExt, MessageDescriptor, MessageExt,
};
use crate::error::{Error, Result};

/// A borrowed descriptor of any kind.
#[derive(Clone, Copy, Debug)]
pub enum Descriptor<'a> {
    /// A file descriptor
    File(&'a FileDescriptor),
    /// A message descriptor
    Message(&'a MessageDescriptor),
    /// A field descriptor
    Field(&'a FieldDescriptor),
    /// An enum descriptor
    Enum(&'a EnumDescriptor),
    /// An enumerator descriptor
    EnumValue(&'a EnumValueDescriptor),
}

/// The resolved extension payload for a descriptor, borrowed from its
/// options message.
#[derive(Clone, Copy, Debug)]
pub enum ExtOptions<'a> {
    /// File extension payload
    File(&'a FileExt),
    /// Message extension payload
    Message(&'a MessageExt),
    /// Field extension payload
    Field(&'a FieldExt),
    /// Enum extension payload
    Enum(&'a EnumExt),
    /// Enumerator extension payload
    EnumValue(&'a EnumValueExt),
}

impl<'a> ExtOptions<'a> {
    /// The free-text comment, present on every descriptor kind.
    pub fn comment(&self) -> Option<&'a str> {
        match self {
            Self::File(ext) => ext.comment.as_deref(),
            Self::Message(ext) => ext.comment.as_deref(),
            Self::Field(ext) => ext.comment.as_deref(),
            Self::Enum(ext) => ext.comment.as_deref(),
            Self::EnumValue(ext) => ext.comment.as_deref(),
        }
    }
}

/// Returns the extension payload attached to the given descriptor, or `None`
/// when the descriptor declares no options block, or declares one without
/// the extension.
pub fn resolve(descr: Descriptor<'_>) -> Option<ExtOptions<'_>> {
    match descr {
        Descriptor::File(d) => d.options.as_ref()?.ext.as_ref().map(ExtOptions::File),
        Descriptor::Message(d) => d.options.as_ref()?.ext.as_ref().map(ExtOptions::Message),
        Descriptor::Field(d) => d.options.as_ref()?.ext.as_ref().map(ExtOptions::Field),
        Descriptor::Enum(d) => d.options.as_ref()?.ext.as_ref().map(ExtOptions::Enum),
        Descriptor::EnumValue(d) => d.options.as_ref()?.ext.as_ref().map(ExtOptions::EnumValue),
    }
}

/// The free-text comment attached to a descriptor, if any.
pub fn comment(descr: Descriptor<'_>) -> Option<&str> {
    resolve(descr).and_then(|ext| ext.comment())
}

/// The extension payload of a field descriptor, if any.
pub fn field_ext(field: &FieldDescriptor) -> Option<&FieldExt> {
    field.options.as_ref()?.ext.as_ref()
}

/// The name of the companion length field generated for a repeated field,
/// if one was recorded.
pub fn lenfield(field: &FieldDescriptor) -> Option<&str> {
    field_ext(field)?.lenfield.as_deref()
}

/// The source header filepath recorded on a file descriptor, if any.
pub fn header_filepath(file: &FileDescriptor) -> Option<&str> {
    file.options.as_ref()?.ext.as_ref()?.header_filepath.as_deref()
}

/// The capacity of a fixed-size backing array: either a symbolic name or a
/// numeric value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArraySize<'a> {
    /// A macro or enumerator name standing in for the capacity
    Symbol(&'a str),
    /// A literal element count
    Capacity(u32),
}

impl fmt::Display for ArraySize<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(name) => f.write_str(name),
            Self::Capacity(n) => write!(f, "{}", n),
        }
    }
}

/// The declared backing-array capacity for a repeated field.
///
/// A symbolic `capname` takes precedence over the numeric `capacity`. A field
/// with neither is malformed input and fails the batch.
pub fn array_size(field: &FieldDescriptor) -> Result<ArraySize<'_>> {
    let ext = field_ext(field).ok_or_else(|| Error::missing_capacity(field.name()))?;

    if let Some(capname) = ext.capname.as_deref() {
        if !capname.is_empty() {
            return Ok(ArraySize::Symbol(capname));
        }
    }

    ext.capacity
        .map(ArraySize::Capacity)
        .ok_or_else(|| Error::missing_capacity(field.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FieldOptions, FileOptions};
    use pretty_assertions::assert_eq;

    fn field_with_ext(ext: FieldExt) -> FieldDescriptor {
        FieldDescriptor {
            name: Some("fieldA".into()),
            options: Some(FieldOptions {
                packed: None,
                ext: Some(ext),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn resolve_absent_options() {
        let field = FieldDescriptor::default();
        assert!(resolve(Descriptor::Field(&field)).is_none());
    }

    #[test]
    fn resolve_options_without_extension() {
        let field = FieldDescriptor {
            options: Some(FieldOptions {
                packed: Some(true),
                ext: None,
            }),
            ..Default::default()
        };
        assert!(resolve(Descriptor::Field(&field)).is_none());
    }

    #[test]
    fn comment_round_trip() {
        let field = field_with_ext(FieldExt {
            comment: Some("field A".into()),
            ..Default::default()
        });
        assert_eq!(comment(Descriptor::Field(&field)), Some("field A"));
    }

    #[test]
    fn header_filepath_lookup() {
        let file = FileDescriptor {
            options: Some(FileOptions {
                ext: Some(FileExt {
                    header_filepath: Some("tangent/test/messages.h".into()),
                    ..Default::default()
                }),
            }),
            ..Default::default()
        };
        assert_eq!(header_filepath(&file), Some("tangent/test/messages.h"));
        assert_eq!(header_filepath(&FileDescriptor::default()), None);
    }

    #[test]
    fn capname_takes_precedence_over_capacity() {
        let field = field_with_ext(FieldExt {
            capacity: Some(10),
            capname: Some("MY_ARRAY_MAX".into()),
            ..Default::default()
        });
        assert_eq!(
            array_size(&field).unwrap(),
            ArraySize::Symbol("MY_ARRAY_MAX")
        );
    }

    #[test]
    fn numeric_capacity_when_no_capname() {
        let field = field_with_ext(FieldExt {
            capacity: Some(12),
            ..Default::default()
        });
        assert_eq!(array_size(&field).unwrap(), ArraySize::Capacity(12));
        assert_eq!(array_size(&field).unwrap().to_string(), "12");
    }

    #[test]
    fn missing_capacity_is_fatal() {
        let field = field_with_ext(FieldExt::default());
        assert!(matches!(
            array_size(&field),
            Err(Error::MissingCapacity { .. })
        ));

        let bare = FieldDescriptor::default();
        assert!(matches!(
            array_size(&bare),
            Err(Error::MissingCapacity { .. })
        ));
    }
}
