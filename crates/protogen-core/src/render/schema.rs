//! Built-in renderer for the canonical schema template.

use crate::descriptor::{EnumDescriptor, MessageDescriptor};
use crate::error::{Error, Result};
use crate::naming::{leading_comment_block, trailing_comment, Style};
use crate::options::Descriptor;

use super::{RenderContext, Renderer};

/// Template identifier handled by [`SchemaRenderer`].
pub const SCHEMA_TEMPLATE: &str = "XXX.proto.jinja2";

/// Renders the canonical schema artifact directly, without an external
/// template engine.
///
/// Declarations come out column-aligned per message and per enum, with
/// extension comments restored as schema comments. Any other template
/// identifier is a configuration error.
#[derive(Debug, Default)]
pub struct SchemaRenderer;

impl SchemaRenderer {
    /// Creates a new schema renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for SchemaRenderer {
    fn render(&mut self, template: &str, ctx: &RenderContext<'_>) -> Result<String> {
        if template != SCHEMA_TEMPLATE {
            return Err(Error::missing_template(template));
        }

        let mut writer = SchemaWriter::new(*ctx);
        writer.write_file()?;
        Ok(writer.finish())
    }
}

/// Accumulates the schema text with indentation tracking.
struct SchemaWriter<'a> {
    ctx: RenderContext<'a>,
    out: String,
    indent_level: usize,
}

impl<'a> SchemaWriter<'a> {
    fn new(ctx: RenderContext<'a>) -> Self {
        Self {
            ctx,
            out: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn writeln(&mut self, line: &str) {
        // Rows may carry a padded-out empty trailing column.
        let line = line.trim_end();
        if !line.is_empty() {
            for _ in 0..self.indent_level {
                self.out.push_str("  ");
            }
            self.out.push_str(line);
        }
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn write_comment_block(&mut self, comment: &str) {
        for line in leading_comment_block(comment, Style::Schema).lines() {
            self.writeln(line);
        }
    }

    fn write_file(&mut self) -> Result<()> {
        let syntax = self.ctx.syntax()?;
        self.writeln(&format!("syntax = \"{}\";", syntax.as_str()));
        self.blank();

        let package = self.ctx.package();
        if !package.is_empty() {
            self.writeln(&format!("package {};", package));
            self.blank();
        }

        let file = self.ctx.file();
        if let Some(comment) = self.ctx.comment(Descriptor::File(file)) {
            self.write_comment_block(comment);
            self.blank();
        }

        for enum_type in &file.enum_type {
            self.write_enum(enum_type);
        }
        for message in &file.message_type {
            self.write_message(message);
        }

        Ok(())
    }

    fn write_enum(&mut self, descr: &EnumDescriptor) {
        if let Some(comment) = self.ctx.comment(Descriptor::Enum(descr)) {
            self.write_comment_block(comment);
        }
        self.writeln(&format!("enum {} {{", descr.name()));
        self.indent();

        let columns = self.ctx.enum_columns(&descr.value);
        for value in &descr.value {
            let mut row = format!("{};", columns.format(value));
            if let Some(comment) = self.ctx.comment(Descriptor::EnumValue(value)) {
                row.push_str("  ");
                row.push_str(&trailing_comment(comment, Style::Schema));
            }
            self.writeln(&row);
        }

        self.dedent();
        self.writeln("}");
        self.blank();
    }

    fn write_message(&mut self, descr: &MessageDescriptor) {
        if let Some(comment) = self.ctx.comment(Descriptor::Message(descr)) {
            self.write_comment_block(comment);
        }
        self.writeln(&format!("message {} {{", descr.name()));
        self.indent();

        if !descr.reserved_range.is_empty() {
            let body = self.ctx.format_reserved(&descr.reserved_range);
            self.writeln(&format!("reserved {};", body));
        }

        for enum_type in &descr.enum_type {
            self.write_enum(enum_type);
        }
        for nested in &descr.nested_type {
            self.write_message(nested);
        }

        let columns = self.ctx.field_columns(descr, Style::Schema);
        for field in &descr.field {
            let mut cells = self.ctx.field_tuple(field, Style::Schema);
            if let Some(last) = cells.last_mut() {
                if !last.is_empty() {
                    let decorated = trailing_comment(last, Style::Schema);
                    *last = decorated;
                }
            }
            self.writeln(&columns.format(&cells));
        }

        self.dedent();
        self.writeln("}");
        self.blank();
    }

    fn finish(self) -> String {
        format!("{}\n", self.out.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{
        EnumDescriptor, EnumExt, EnumOptions, EnumValueDescriptor, EnumValueExt, EnumValueOptions,
        FieldDescriptor, FieldExt, FieldOptions, FieldType, FileDescriptor, FileExt, FileOptions,
        Label, MessageDescriptor, MessageExt, MessageOptions, ReservedRange,
    };
    use pretty_assertions::assert_eq;

    fn render(file: &FileDescriptor) -> String {
        let ctx = RenderContext::new(file, "foo/test_messages");
        SchemaRenderer::new()
            .render(SCHEMA_TEMPLATE, &ctx)
            .unwrap()
    }

    #[test]
    fn minimal_file_renders_exactly() {
        let file = FileDescriptor {
            name: Some("point.proto".into()),
            package: Some("foo".into()),
            syntax: Some("proto3".into()),
            enum_type: vec![EnumDescriptor {
                name: Some("Color".into()),
                value: vec![EnumValueDescriptor {
                    name: Some("RED".into()),
                    number: Some(0),
                    options: None,
                }],
                options: None,
            }],
            message_type: vec![MessageDescriptor {
                name: Some("Point".into()),
                field: vec![FieldDescriptor {
                    name: Some("x".into()),
                    number: Some(1),
                    r#type: Some(FieldType::Int32 as i32),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        };

        let expected = "\
syntax = \"proto3\";

package foo;

enum Color {
  RED = 0;
}

message Point {
  int32 x = 1;
}
";
        assert_eq!(render(&file), expected);
    }

    fn commented_file() -> FileDescriptor {
        FileDescriptor {
            name: Some("test_messages.proto".into()),
            package: Some("foo.bar".into()),
            options: Some(FileOptions {
                ext: Some(FileExt {
                    comment: Some("Messages used in tests".into()),
                    ..Default::default()
                }),
            }),
            enum_type: vec![EnumDescriptor {
                name: Some("MyEnumA".into()),
                value: vec![
                    EnumValueDescriptor {
                        name: Some("VALUE1".into()),
                        number: Some(0),
                        options: Some(EnumValueOptions {
                            ext: Some(EnumValueExt {
                                comment: Some("value 1".into()),
                            }),
                        }),
                    },
                    EnumValueDescriptor {
                        name: Some("LONG_VALUE2".into()),
                        number: Some(100),
                        options: None,
                    },
                ],
                options: Some(EnumOptions {
                    ext: Some(EnumExt {
                        comment: Some("enum A".into()),
                    }),
                }),
            }],
            message_type: vec![MessageDescriptor {
                name: Some("MyMessageA".into()),
                options: Some(MessageOptions {
                    ext: Some(MessageExt {
                        comment: Some("message A".into()),
                    }),
                }),
                reserved_range: vec![
                    ReservedRange {
                        start: Some(9),
                        end: Some(10),
                    },
                    ReservedRange {
                        start: Some(15),
                        end: None,
                    },
                ],
                field: vec![
                    FieldDescriptor {
                        name: Some("fieldA".into()),
                        number: Some(1),
                        r#type: Some(FieldType::Int32 as i32),
                        options: Some(FieldOptions {
                            packed: None,
                            ext: Some(FieldExt {
                                comment: Some("field A".into()),
                                ..Default::default()
                            }),
                        }),
                        ..Default::default()
                    },
                    FieldDescriptor {
                        name: Some("values".into()),
                        number: Some(2),
                        label: Some(Label::Repeated as i32),
                        r#type: Some(FieldType::Sint32 as i32),
                        options: Some(FieldOptions {
                            packed: Some(true),
                            ext: Some(FieldExt {
                                lenfield: Some("numValues".into()),
                                ..Default::default()
                            }),
                        }),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn comments_and_options_are_restored() {
        let out = render(&commented_file());

        assert!(out.contains("// Messages used in tests\n"));
        assert!(out.contains("// enum A\nenum MyEnumA {"));
        assert!(out.contains("  VALUE1      =   0;  // value 1\n"));
        assert!(out.contains("  LONG_VALUE2 = 100;\n"));
        assert!(out.contains("// message A\nmessage MyMessageA {"));
        assert!(out.contains("  reserved 9, 15 to max;\n"));
        assert!(out.contains(
            "  repeated sint32 values = 2 \
             [packed=true, (protogen.fieldopts).lenfield=\"numValues\"];\n"
        ));
    }

    #[test]
    fn field_declarations_align() {
        let out = render(&commented_file());
        let lines: Vec<&str> = out.lines().collect();

        let field_a = lines
            .iter()
            .find(|l| l.contains("fieldA"))
            .copied()
            .unwrap();
        let values = lines
            .iter()
            .find(|l| l.contains("values"))
            .copied()
            .unwrap();

        assert_eq!(field_a.trim(), "int32 fieldA = 1;  // field A");
        assert_eq!(field_a.find(" = "), values.find(" = "));
    }

    #[test]
    fn no_trailing_whitespace_and_single_final_newline() {
        let out = render(&commented_file());
        for line in out.lines() {
            assert_eq!(line, line.trim_end());
        }
        assert!(out.ends_with("}\n"));
        assert!(!out.ends_with("\n\n"));
    }

    #[test]
    fn unknown_template_is_rejected() {
        let file = FileDescriptor::default();
        let ctx = RenderContext::new(&file, "test_messages");
        let err = SchemaRenderer::new()
            .render("XXX.cereal.h.jinja2", &ctx)
            .unwrap_err();
        assert!(matches!(err, Error::MissingTemplate { .. }));
    }

    #[test]
    fn unsupported_syntax_is_rejected() {
        let file = FileDescriptor {
            syntax: Some("proto4".into()),
            ..Default::default()
        };
        let ctx = RenderContext::new(&file, "test_messages");
        let err = SchemaRenderer::new()
            .render(SCHEMA_TEMPLATE, &ctx)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedSyntax { .. }));
    }
}
