//! Wire-encoding metadata.
//!
//! Tag and wire-type arithmetic must reproduce the byte-level wire format
//! exactly: generated parsers and emitters compare these values against the
//! bytes on the wire.

use crate::descriptor::{FieldDescriptor, FieldType, Label, MessageDescriptor};

/// Varint encoding (int32, int64, uint32, uint64, sint32, sint64, bool, enum)
pub const WIRE_VARINT: u32 = 0;
/// Fixed 64-bit encoding (fixed64, sfixed64, double)
pub const WIRE_64BIT: u32 = 1;
/// Length-delimited encoding (string, bytes, embedded messages, packed runs)
pub const WIRE_LENGTH_DELIMITED: u32 = 2;
/// Fixed 32-bit encoding (fixed32, sfixed32, float)
pub const WIRE_32BIT: u32 = 5;

/// The 3-bit wire type written alongside a field number for the given
/// declared type.
pub const fn wire_type(kind: FieldType) -> u32 {
    match kind {
        FieldType::Int32
        | FieldType::Int64
        | FieldType::Uint32
        | FieldType::Uint64
        | FieldType::Sint32
        | FieldType::Sint64
        | FieldType::Bool
        | FieldType::Enum => WIRE_VARINT,

        FieldType::Fixed64 | FieldType::Sfixed64 | FieldType::Double => WIRE_64BIT,

        FieldType::Bytes | FieldType::String | FieldType::Message => WIRE_LENGTH_DELIMITED,

        FieldType::Fixed32 | FieldType::Sfixed32 | FieldType::Float => WIRE_32BIT,
    }
}

/// The tag value preceding this field's payload on the wire:
/// `(number << 3) | wire_type`.
pub fn tag(field: &FieldDescriptor) -> u32 {
    ((field.number() as u32) << 3) | wire_type(field.kind())
}

/// The tag value for the packed encoding of this field. Packed runs are
/// always length-delimited, independent of the element wire type.
pub fn packed_tag(field: &FieldDescriptor) -> u32 {
    ((field.number() as u32) << 3) | WIRE_LENGTH_DELIMITED
}

/// Whether the field declares the `repeated` label.
pub fn is_repeated(field: &FieldDescriptor) -> bool {
    field.label() == Some(Label::Repeated)
}

/// Whether the field is repeated and its own options explicitly set the
/// packed flag true. An absent flag never counts as packed.
pub fn is_packed(field: &FieldDescriptor) -> bool {
    if !is_repeated(field) {
        return false;
    }
    field
        .options
        .as_ref()
        .and_then(|options| options.packed)
        .unwrap_or(false)
}

/// Whether the field is of a fixed-width scalar kind. Enums count as
/// primitive; messages do not.
pub fn is_primitive(field: &FieldDescriptor) -> bool {
    field.kind() != FieldType::Message
}

/// Whether the field is of message type.
pub fn is_message(field: &FieldDescriptor) -> bool {
    field.kind() == FieldType::Message
}

/// Whether the field is of enum type.
pub fn is_enum(field: &FieldDescriptor) -> bool {
    field.kind() == FieldType::Enum
}

/// Whether any direct field of the message is packed. Drives whether the
/// packed wire helpers are emitted for the message.
pub fn has_packed_field(message: &MessageDescriptor) -> bool {
    message.field.iter().any(is_packed)
}

/// Whether any direct field of the message is of message type. Drives
/// whether the submessage wire helpers are emitted for the message.
pub fn has_message_field(message: &MessageDescriptor) -> bool {
    message.field.iter().any(is_message)
}
