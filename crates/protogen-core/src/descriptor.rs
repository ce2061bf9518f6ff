//! The decoded descriptor model.
//!
//! These types mirror the layout of `google/protobuf/descriptor.proto` at the
//! standard tag numbers, restricted to the subset this generator consumes, so
//! that descriptor bytes produced by a stock schema compiler decode directly
//! with [`prost`]. The per-kind generator extensions live at tag
//! [`EXTENSION_TAG`] of the corresponding options message.
//!
//! All descriptor data is read-only input: it is decoded once per invocation
//! and never mutated by the generator. Every optional attribute is a real
//! `Option` so that "declared with default value" and "not declared" remain
//! distinguishable.

/// Options-message tag carrying the generator's extension payload.
pub const EXTENSION_TAG: u32 = 50000;

/// A collection of schema files, as produced by a compiler invoked with
/// `--include_imports`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileDescriptorSet {
    /// The files in declaration order. Processing order follows this order.
    #[prost(message, repeated, tag = "1")]
    pub file: Vec<FileDescriptor>,
}

/// One schema unit: a single compiled source file.
///
/// `prost::Message` is implemented by hand (mirroring the derive expansion at
/// the standard tags) because the derive would also generate accessor methods
/// that collide with the inherent accessors below.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FileDescriptor {
    /// Source-relative file name, e.g. `tangent/test/test_messages.proto`.
    /// Tag 1.
    pub name: Option<String>,
    /// Dot-separated package, e.g. `tangent.test`. Tag 2.
    pub package: Option<String>,
    /// Top-level message declarations, in declaration order. Tag 4.
    pub message_type: Vec<MessageDescriptor>,
    /// Top-level enum declarations, in declaration order. Tag 5.
    pub enum_type: Vec<EnumDescriptor>,
    /// File-level options, including the generator extension. Tag 8.
    pub options: Option<FileOptions>,
    /// Comment metadata keyed by structural path. Tag 9.
    pub source_code_info: Option<SourceCodeInfo>,
    /// Declared syntax, absent for proto2. Tag 12.
    pub syntax: Option<String>,
}

impl ::prost::Message for FileDescriptor {
    fn encode_raw(&self, buf: &mut impl ::prost::bytes::BufMut) {
        if let Some(ref value) = self.name {
            ::prost::encoding::string::encode(1, value, buf);
        }
        if let Some(ref value) = self.package {
            ::prost::encoding::string::encode(2, value, buf);
        }
        for msg in &self.message_type {
            ::prost::encoding::message::encode(4, msg, buf);
        }
        for msg in &self.enum_type {
            ::prost::encoding::message::encode(5, msg, buf);
        }
        if let Some(ref msg) = self.options {
            ::prost::encoding::message::encode(8, msg, buf);
        }
        if let Some(ref msg) = self.source_code_info {
            ::prost::encoding::message::encode(9, msg, buf);
        }
        if let Some(ref value) = self.syntax {
            ::prost::encoding::string::encode(12, value, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: ::prost::encoding::wire_type::WireType,
        buf: &mut impl ::prost::bytes::Buf,
        ctx: ::prost::encoding::DecodeContext,
    ) -> Result<(), ::prost::DecodeError> {
        const STRUCT_NAME: &str = "FileDescriptor";
        match tag {
            1 => ::prost::encoding::string::merge(
                wire_type,
                self.name.get_or_insert_with(Default::default),
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "name");
                error
            }),
            2 => ::prost::encoding::string::merge(
                wire_type,
                self.package.get_or_insert_with(Default::default),
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "package");
                error
            }),
            4 => ::prost::encoding::message::merge_repeated(
                wire_type,
                &mut self.message_type,
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "message_type");
                error
            }),
            5 => {
                ::prost::encoding::message::merge_repeated(wire_type, &mut self.enum_type, buf, ctx)
                    .map_err(|mut error| {
                        error.push(STRUCT_NAME, "enum_type");
                        error
                    })
            }
            8 => ::prost::encoding::message::merge(
                wire_type,
                self.options.get_or_insert_with(Default::default),
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "options");
                error
            }),
            9 => ::prost::encoding::message::merge(
                wire_type,
                self.source_code_info.get_or_insert_with(Default::default),
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "source_code_info");
                error
            }),
            12 => ::prost::encoding::string::merge(
                wire_type,
                self.syntax.get_or_insert_with(Default::default),
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "syntax");
                error
            }),
            _ => ::prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        self.name
            .as_ref()
            .map_or(0, |value| ::prost::encoding::string::encoded_len(1, value))
            + self
                .package
                .as_ref()
                .map_or(0, |value| ::prost::encoding::string::encoded_len(2, value))
            + ::prost::encoding::message::encoded_len_repeated(4, &self.message_type)
            + ::prost::encoding::message::encoded_len_repeated(5, &self.enum_type)
            + self
                .options
                .as_ref()
                .map_or(0, |msg| ::prost::encoding::message::encoded_len(8, msg))
            + self
                .source_code_info
                .as_ref()
                .map_or(0, |msg| ::prost::encoding::message::encoded_len(9, msg))
            + self
                .syntax
                .as_ref()
                .map_or(0, |value| ::prost::encoding::string::encoded_len(12, value))
    }

    fn clear(&mut self) {
        self.name = None;
        self.package = None;
        self.message_type.clear();
        self.enum_type.clear();
        self.options = None;
        self.source_code_info = None;
        self.syntax = None;
    }
}

impl FileDescriptor {
    /// The file name, or `""` when absent.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// The package, or `""` when absent.
    pub fn package(&self) -> &str {
        self.package.as_deref().unwrap_or("")
    }

    /// The declared syntax string, defaulting to `proto2`.
    pub fn syntax(&self) -> &str {
        match self.syntax.as_deref() {
            None | Some("") => "proto2",
            Some(s) => s,
        }
    }
}

/// A message declaration.
///
/// `prost::Message` is implemented by hand for the same reason as
/// [`FileDescriptor`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageDescriptor {
    /// Unqualified message name. Tag 1.
    pub name: Option<String>,
    /// Fields in declaration order. Field numbers are unique within the
    /// message. Tag 2.
    pub field: Vec<FieldDescriptor>,
    /// Nested message declarations. Carried through decoding; the generator
    /// itself only walks top-level declarations. Tag 3.
    pub nested_type: Vec<MessageDescriptor>,
    /// Nested enum declarations. Tag 4.
    pub enum_type: Vec<EnumDescriptor>,
    /// Message-level options, including the generator extension. Tag 7.
    pub options: Option<MessageOptions>,
    /// Reserved field-number ranges, half-open `[start, end)`. Tag 9.
    pub reserved_range: Vec<ReservedRange>,
}

impl ::prost::Message for MessageDescriptor {
    fn encode_raw(&self, buf: &mut impl ::prost::bytes::BufMut) {
        if let Some(ref value) = self.name {
            ::prost::encoding::string::encode(1, value, buf);
        }
        for msg in &self.field {
            ::prost::encoding::message::encode(2, msg, buf);
        }
        for msg in &self.nested_type {
            ::prost::encoding::message::encode(3, msg, buf);
        }
        for msg in &self.enum_type {
            ::prost::encoding::message::encode(4, msg, buf);
        }
        if let Some(ref msg) = self.options {
            ::prost::encoding::message::encode(7, msg, buf);
        }
        for msg in &self.reserved_range {
            ::prost::encoding::message::encode(9, msg, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: ::prost::encoding::wire_type::WireType,
        buf: &mut impl ::prost::bytes::Buf,
        ctx: ::prost::encoding::DecodeContext,
    ) -> Result<(), ::prost::DecodeError> {
        const STRUCT_NAME: &str = "MessageDescriptor";
        match tag {
            1 => ::prost::encoding::string::merge(
                wire_type,
                self.name.get_or_insert_with(Default::default),
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "name");
                error
            }),
            2 => ::prost::encoding::message::merge_repeated(wire_type, &mut self.field, buf, ctx)
                .map_err(|mut error| {
                    error.push(STRUCT_NAME, "field");
                    error
                }),
            3 => ::prost::encoding::message::merge_repeated(
                wire_type,
                &mut self.nested_type,
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "nested_type");
                error
            }),
            4 => {
                ::prost::encoding::message::merge_repeated(wire_type, &mut self.enum_type, buf, ctx)
                    .map_err(|mut error| {
                        error.push(STRUCT_NAME, "enum_type");
                        error
                    })
            }
            7 => ::prost::encoding::message::merge(
                wire_type,
                self.options.get_or_insert_with(Default::default),
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "options");
                error
            }),
            9 => ::prost::encoding::message::merge_repeated(
                wire_type,
                &mut self.reserved_range,
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "reserved_range");
                error
            }),
            _ => ::prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        self.name
            .as_ref()
            .map_or(0, |value| ::prost::encoding::string::encoded_len(1, value))
            + ::prost::encoding::message::encoded_len_repeated(2, &self.field)
            + ::prost::encoding::message::encoded_len_repeated(3, &self.nested_type)
            + ::prost::encoding::message::encoded_len_repeated(4, &self.enum_type)
            + self
                .options
                .as_ref()
                .map_or(0, |msg| ::prost::encoding::message::encoded_len(7, msg))
            + ::prost::encoding::message::encoded_len_repeated(9, &self.reserved_range)
    }

    fn clear(&mut self) {
        self.name = None;
        self.field.clear();
        self.nested_type.clear();
        self.enum_type.clear();
        self.options = None;
        self.reserved_range.clear();
    }
}

impl MessageDescriptor {
    /// The message name, or `""` when absent.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// A single field of a message.
///
/// `prost::Message` is implemented by hand for the same reason as
/// [`FileDescriptor`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldDescriptor {
    /// Field name as written in the source schema. Tag 1.
    pub name: Option<String>,
    /// Field number, unique within the owning message, >= 1. Tag 3.
    pub number: Option<i32>,
    /// Declaration label ([`Label`] enumeration); absent means singular.
    /// Tag 4.
    pub label: Option<i32>,
    /// Declared type ([`FieldType`] enumeration). Absent only for legacy
    /// descriptors where the type must be inferred from `type_name`. Tag 5.
    pub r#type: Option<i32>,
    /// Qualified type reference, set if and only if the field is of enum or
    /// message type. Tag 6.
    pub type_name: Option<String>,
    /// Field-level options, including the generator extension. Tag 8.
    pub options: Option<FieldOptions>,
}

impl ::prost::Message for FieldDescriptor {
    fn encode_raw(&self, buf: &mut impl ::prost::bytes::BufMut) {
        if let Some(ref value) = self.name {
            ::prost::encoding::string::encode(1, value, buf);
        }
        if let Some(ref value) = self.number {
            ::prost::encoding::int32::encode(3, value, buf);
        }
        if let Some(ref value) = self.label {
            ::prost::encoding::int32::encode(4, value, buf);
        }
        if let Some(ref value) = self.r#type {
            ::prost::encoding::int32::encode(5, value, buf);
        }
        if let Some(ref value) = self.type_name {
            ::prost::encoding::string::encode(6, value, buf);
        }
        if let Some(ref msg) = self.options {
            ::prost::encoding::message::encode(8, msg, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: ::prost::encoding::wire_type::WireType,
        buf: &mut impl ::prost::bytes::Buf,
        ctx: ::prost::encoding::DecodeContext,
    ) -> Result<(), ::prost::DecodeError> {
        const STRUCT_NAME: &str = "FieldDescriptor";
        match tag {
            1 => ::prost::encoding::string::merge(
                wire_type,
                self.name.get_or_insert_with(Default::default),
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "name");
                error
            }),
            3 => ::prost::encoding::int32::merge(
                wire_type,
                self.number.get_or_insert_with(Default::default),
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "number");
                error
            }),
            4 => ::prost::encoding::int32::merge(
                wire_type,
                self.label.get_or_insert_with(Default::default),
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "label");
                error
            }),
            5 => ::prost::encoding::int32::merge(
                wire_type,
                self.r#type.get_or_insert_with(Default::default),
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "r#type");
                error
            }),
            6 => ::prost::encoding::string::merge(
                wire_type,
                self.type_name.get_or_insert_with(Default::default),
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "type_name");
                error
            }),
            8 => ::prost::encoding::message::merge(
                wire_type,
                self.options.get_or_insert_with(Default::default),
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "options");
                error
            }),
            _ => ::prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        self.name
            .as_ref()
            .map_or(0, |value| ::prost::encoding::string::encoded_len(1, value))
            + self
                .number
                .as_ref()
                .map_or(0, |value| ::prost::encoding::int32::encoded_len(3, value))
            + self
                .label
                .as_ref()
                .map_or(0, |value| ::prost::encoding::int32::encoded_len(4, value))
            + self
                .r#type
                .as_ref()
                .map_or(0, |value| ::prost::encoding::int32::encoded_len(5, value))
            + self
                .type_name
                .as_ref()
                .map_or(0, |value| ::prost::encoding::string::encoded_len(6, value))
            + self
                .options
                .as_ref()
                .map_or(0, |msg| ::prost::encoding::message::encoded_len(8, msg))
    }

    fn clear(&mut self) {
        self.name = None;
        self.number = None;
        self.label = None;
        self.r#type = None;
        self.type_name = None;
        self.options = None;
    }
}

impl FieldDescriptor {
    /// The field name, or `""` when absent.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// The field number, or 0 when absent.
    pub fn number(&self) -> i32 {
        self.number.unwrap_or(0)
    }

    /// The declared label, if present and recognized.
    pub fn label(&self) -> Option<Label> {
        self.label.and_then(|raw| Label::try_from(raw).ok())
    }

    /// The declared type. Fields with an absent or unrecognized type carry a
    /// `type_name` reference and behave as message-typed.
    pub fn kind(&self) -> FieldType {
        self.r#type
            .and_then(|raw| FieldType::try_from(raw).ok())
            .unwrap_or(FieldType::Message)
    }

    /// The qualified type reference, or `""` when absent.
    pub fn type_name(&self) -> &str {
        self.type_name.as_deref().unwrap_or("")
    }
}

/// An enum declaration.
///
/// `prost::Message` is implemented by hand for the same reason as
/// [`FileDescriptor`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnumDescriptor {
    /// Unqualified enum name. Tag 1.
    pub name: Option<String>,
    /// Enumerator values in declaration order. Tag 2.
    pub value: Vec<EnumValueDescriptor>,
    /// Enum-level options, including the generator extension. Tag 3.
    pub options: Option<EnumOptions>,
}

impl ::prost::Message for EnumDescriptor {
    fn encode_raw(&self, buf: &mut impl ::prost::bytes::BufMut) {
        if let Some(ref value) = self.name {
            ::prost::encoding::string::encode(1, value, buf);
        }
        for msg in &self.value {
            ::prost::encoding::message::encode(2, msg, buf);
        }
        if let Some(ref msg) = self.options {
            ::prost::encoding::message::encode(3, msg, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: ::prost::encoding::wire_type::WireType,
        buf: &mut impl ::prost::bytes::Buf,
        ctx: ::prost::encoding::DecodeContext,
    ) -> Result<(), ::prost::DecodeError> {
        const STRUCT_NAME: &str = "EnumDescriptor";
        match tag {
            1 => ::prost::encoding::string::merge(
                wire_type,
                self.name.get_or_insert_with(Default::default),
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "name");
                error
            }),
            2 => ::prost::encoding::message::merge_repeated(wire_type, &mut self.value, buf, ctx)
                .map_err(|mut error| {
                    error.push(STRUCT_NAME, "value");
                    error
                }),
            3 => ::prost::encoding::message::merge(
                wire_type,
                self.options.get_or_insert_with(Default::default),
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "options");
                error
            }),
            _ => ::prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        self.name
            .as_ref()
            .map_or(0, |value| ::prost::encoding::string::encoded_len(1, value))
            + ::prost::encoding::message::encoded_len_repeated(2, &self.value)
            + self
                .options
                .as_ref()
                .map_or(0, |msg| ::prost::encoding::message::encoded_len(3, msg))
    }

    fn clear(&mut self) {
        self.name = None;
        self.value.clear();
        self.options = None;
    }
}

impl EnumDescriptor {
    /// The enum name, or `""` when absent.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// A single enumerator of an enum.
///
/// `prost::Message` is implemented by hand for the same reason as
/// [`FileDescriptor`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnumValueDescriptor {
    /// Enumerator name. Tag 1.
    pub name: Option<String>,
    /// Enumerator number. Tag 2.
    pub number: Option<i32>,
    /// Value-level options, including the generator extension. Tag 3.
    pub options: Option<EnumValueOptions>,
}

impl ::prost::Message for EnumValueDescriptor {
    fn encode_raw(&self, buf: &mut impl ::prost::bytes::BufMut) {
        if let Some(ref value) = self.name {
            ::prost::encoding::string::encode(1, value, buf);
        }
        if let Some(ref value) = self.number {
            ::prost::encoding::int32::encode(2, value, buf);
        }
        if let Some(ref msg) = self.options {
            ::prost::encoding::message::encode(3, msg, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: ::prost::encoding::wire_type::WireType,
        buf: &mut impl ::prost::bytes::Buf,
        ctx: ::prost::encoding::DecodeContext,
    ) -> Result<(), ::prost::DecodeError> {
        const STRUCT_NAME: &str = "EnumValueDescriptor";
        match tag {
            1 => ::prost::encoding::string::merge(
                wire_type,
                self.name.get_or_insert_with(Default::default),
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "name");
                error
            }),
            2 => ::prost::encoding::int32::merge(
                wire_type,
                self.number.get_or_insert_with(Default::default),
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "number");
                error
            }),
            3 => ::prost::encoding::message::merge(
                wire_type,
                self.options.get_or_insert_with(Default::default),
                buf,
                ctx,
            )
            .map_err(|mut error| {
                error.push(STRUCT_NAME, "options");
                error
            }),
            _ => ::prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        self.name
            .as_ref()
            .map_or(0, |value| ::prost::encoding::string::encoded_len(1, value))
            + self
                .number
                .as_ref()
                .map_or(0, |value| ::prost::encoding::int32::encoded_len(2, value))
            + self
                .options
                .as_ref()
                .map_or(0, |msg| ::prost::encoding::message::encoded_len(3, msg))
    }

    fn clear(&mut self) {
        self.name = None;
        self.number = None;
        self.options = None;
    }
}

impl EnumValueDescriptor {
    /// The enumerator name, or `""` when absent.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// The enumerator number, or 0 when absent.
    pub fn number(&self) -> i32 {
        self.number.unwrap_or(0)
    }
}

/// A reserved field-number range, half-open `[start, end)`. An absent `end`
/// means the range extends to the maximum field number.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ReservedRange {
    /// Inclusive start.
    #[prost(int32, optional, tag = "1")]
    pub start: Option<i32>,
    /// Exclusive end, absent for "to max".
    #[prost(int32, optional, tag = "2")]
    pub end: Option<i32>,
}

/// Comment metadata attached to a file descriptor.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SourceCodeInfo {
    /// All recorded source locations.
    #[prost(message, repeated, tag = "1")]
    pub location: Vec<Location>,
}

/// One recorded source location, keyed by structural path.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Location {
    /// Structural path into the descriptor tree, e.g. `[4, 0, 2, 3]` for the
    /// fourth field of the first message.
    #[prost(int32, repeated, tag = "1")]
    pub path: Vec<i32>,
    /// Comment block preceding the declaration.
    #[prost(string, optional, tag = "3")]
    pub leading_comments: Option<String>,
    /// Comment trailing the declaration on the same line.
    #[prost(string, optional, tag = "4")]
    pub trailing_comments: Option<String>,
}

/// File-level options.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileOptions {
    /// The generator's file extension payload.
    #[prost(message, optional, tag = "50000")]
    pub ext: Option<FileExt>,
}

/// Message-level options.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MessageOptions {
    /// The generator's message extension payload.
    #[prost(message, optional, tag = "50000")]
    pub ext: Option<MessageExt>,
}

/// Field-level options.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldOptions {
    /// Standard packed flag. Presence is meaningful: an explicit
    /// `packed=false` is not the same as an absent flag.
    #[prost(bool, optional, tag = "2")]
    pub packed: Option<bool>,
    /// The generator's field extension payload.
    #[prost(message, optional, tag = "50000")]
    pub ext: Option<FieldExt>,
}

/// Enum-level options.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnumOptions {
    /// The generator's enum extension payload.
    #[prost(message, optional, tag = "50000")]
    pub ext: Option<EnumExt>,
}

/// Enumerator-level options.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnumValueOptions {
    /// The generator's enumerator extension payload.
    #[prost(message, optional, tag = "50000")]
    pub ext: Option<EnumValueExt>,
}

/// Generator extension payload for files.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileExt {
    /// Free-text comment emitted at the top of generated artifacts.
    #[prost(string, optional, tag = "1")]
    pub comment: Option<String>,
    /// Path of the source header this descriptor was compiled from. Output
    /// paths and the include base are derived from it.
    #[prost(string, optional, tag = "2")]
    pub header_filepath: Option<String>,
    /// Preprocessor macros that named array capacities in the source header.
    #[prost(string, repeated, tag = "3")]
    pub capacity_macros: Vec<String>,
}

/// Generator extension payload for messages.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MessageExt {
    /// Free-text comment attached to the message.
    #[prost(string, optional, tag = "1")]
    pub comment: Option<String>,
}

/// Generator extension payload for fields.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FieldExt {
    /// Free-text comment attached to the field.
    #[prost(string, optional, tag = "1")]
    pub comment: Option<String>,
    /// Name of the companion field holding the occupied size of a repeated
    /// field in the structural bindings.
    #[prost(string, optional, tag = "2")]
    pub lenfield: Option<String>,
    /// Fixed capacity of the backing array in the structural bindings.
    #[prost(uint32, optional, tag = "3")]
    pub capacity: Option<u32>,
    /// Symbolic capacity (macro or enumerator name); takes precedence over
    /// `capacity` when both are present.
    #[prost(string, optional, tag = "4")]
    pub capname: Option<String>,
    /// Verbatim structural type override, bypassing the storage-type table.
    #[prost(string, optional, tag = "5")]
    pub fieldtype: Option<String>,
}

/// Generator extension payload for enums.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnumExt {
    /// Free-text comment attached to the enum.
    #[prost(string, optional, tag = "1")]
    pub comment: Option<String>,
}

/// Generator extension payload for enumerators.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnumValueExt {
    /// Free-text comment attached to the enumerator.
    #[prost(string, optional, tag = "1")]
    pub comment: Option<String>,
}

/// Field declaration label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Label {
    /// Singular, presence-tracked field.
    Optional = 1,
    /// Required field (legacy proto2).
    Required = 2,
    /// Repeated field.
    Repeated = 3,
}

/// Declared field type.
///
/// Mirrors the wire-relevant subset of the standard descriptor `Type`
/// enumeration. Groups are not supported by this generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum FieldType {
    /// 64-bit IEEE float.
    Double = 1,
    /// 32-bit IEEE float.
    Float = 2,
    /// Varint-encoded signed 64-bit integer.
    Int64 = 3,
    /// Varint-encoded unsigned 64-bit integer.
    Uint64 = 4,
    /// Varint-encoded signed 32-bit integer.
    Int32 = 5,
    /// Fixed-width unsigned 64-bit integer.
    Fixed64 = 6,
    /// Fixed-width unsigned 32-bit integer.
    Fixed32 = 7,
    /// Boolean.
    Bool = 8,
    /// Length-delimited UTF-8 string.
    String = 9,
    /// Length-delimited embedded message.
    Message = 11,
    /// Length-delimited byte blob.
    Bytes = 12,
    /// Varint-encoded unsigned 32-bit integer.
    Uint32 = 13,
    /// Varint-encoded enumerator.
    Enum = 14,
    /// Fixed-width signed 32-bit integer.
    Sfixed32 = 15,
    /// Fixed-width signed 64-bit integer.
    Sfixed64 = 16,
    /// Zigzag-varint signed 32-bit integer.
    Sint32 = 17,
    /// Zigzag-varint signed 64-bit integer.
    Sint64 = 18,
}
