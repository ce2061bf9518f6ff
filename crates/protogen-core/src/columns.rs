//! Column-aligned declaration formatting.
//!
//! Generated declarations line up vertically: the name column, the `=`
//! column, and the trailing comment column all start at the same character
//! offset across every field of a message. The widths are computed from the
//! rendered cells of each field, so they depend only on the multiset of cell
//! lengths, never on field order.

use crate::descriptor::{EnumValueDescriptor, FieldDescriptor, ReservedRange};
use crate::naming::{typename, Style};
use crate::options::{comment, field_ext, Descriptor};
use crate::wire::is_repeated;

/// Number of cells in a schema-style field tuple.
const SCHEMA_ARITY: usize = 6;
/// Number of cells in a structural-style field tuple.
const STRUCTURAL_ARITY: usize = 3;

/// Minimum enumerator name column width used when an enum has no values.
const MIN_ENUM_NAME_WIDTH: usize = 8;
/// Minimum enumerator number column width used when an enum has no values.
const MIN_ENUM_NUMBER_WIDTH: usize = 3;

fn label_string(field: &FieldDescriptor) -> &'static str {
    if is_repeated(field) {
        "repeated"
    } else {
        ""
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// The bracketed options annotation for a schema field declaration, with a
/// leading space, or `""` when nothing needs recording.
///
/// The own packed flag is recorded whenever explicitly present. Extension
/// annotations are recorded only when they differ from their computed
/// defaults: a `lenfield` equal to `<fieldname>Count` is omitted, a symbolic
/// capacity name suppresses the numeric capacity, and multiple annotations
/// collapse into one aggregate option.
fn options_string(field: &FieldDescriptor) -> String {
    let Some(field_options) = field.options.as_ref() else {
        return String::new();
    };

    let mut options: Vec<String> = Vec::new();
    if let Some(packed) = field_options.packed {
        options.push(format!("packed={}", packed));
    }

    if let Some(ext) = field_ext(field) {
        let mut annotations: Vec<(&str, String)> = Vec::new();

        if let Some(lenfield) = ext.lenfield.as_deref().filter(|s| !s.is_empty()) {
            if lenfield != format!("{}Count", field.name()) {
                annotations.push(("lenfield", quote(lenfield)));
            }
        }
        if let Some(capacity) = ext.capacity.filter(|&c| c != 0) {
            annotations.push(("capacity", capacity.to_string()));
        }
        if let Some(capname) = ext.capname.as_deref().filter(|s| !s.is_empty()) {
            annotations.retain(|(key, _)| *key != "capacity");
            annotations.push(("capname", quote(capname)));
        }

        if annotations.len() > 1 {
            let body = annotations
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value))
                .collect::<Vec<_>>()
                .join(" ");
            options.push(format!("(protogen.fieldopts) = {{{}}}", body));
        } else if let Some((key, value)) = annotations.pop() {
            options.push(format!("(protogen.fieldopts).{}={}", key, value));
        }
    }

    if options.is_empty() {
        String::new()
    } else {
        format!(" [{}]", options.join(", "))
    }
}

/// The ordered display cells of one field declaration.
///
/// Schema style yields six cells (label, type, name, number, options,
/// comment); structural style yields three (type, name, comment). The
/// comment cell is the raw extension comment; renderers decorate it with the
/// style's trailing-comment prefix.
pub fn field_tuple(field: &FieldDescriptor, package: &str, style: Style) -> Vec<String> {
    match style {
        Style::Schema => vec![
            label_string(field).to_string(),
            typename(field, package, style),
            field.name().to_string(),
            field.number().to_string(),
            options_string(field),
            comment(Descriptor::Field(field)).unwrap_or("").to_string(),
        ],
        Style::Structural => vec![
            typename(field, package, style),
            field.name().to_string(),
            comment(Descriptor::Field(field)).unwrap_or("").to_string(),
        ],
    }
}

/// Per-position maximum rendered cell length across the given fields.
///
/// A message with zero fields yields all-zero widths rather than an error.
pub fn column_widths(fields: &[FieldDescriptor], package: &str, style: Style) -> Vec<usize> {
    let arity = match style {
        Style::Schema => SCHEMA_ARITY,
        Style::Structural => STRUCTURAL_ARITY,
    };
    let mut widths = vec![0usize; arity];

    for field in fields {
        for (width, cell) in widths.iter_mut().zip(field_tuple(field, package, style)) {
            *width = (*width).max(cell.chars().count());
        }
    }

    widths
}

/// A reusable column-aligned format for the field declarations of one
/// message, in one output style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldColumns {
    widths: Vec<usize>,
    style: Style,
}

impl FieldColumns {
    /// Computes the column widths over the given set of fields.
    pub fn new(fields: &[FieldDescriptor], package: &str, style: Style) -> Self {
        Self {
            widths: column_widths(fields, package, style),
            style,
        }
    }

    /// The computed per-position widths.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Formats one field's cells into an aligned declaration line.
    ///
    /// `cells` must have the arity of this formatter's style; it is normally
    /// produced by [`field_tuple`], with the comment cell decorated by the
    /// renderer.
    pub fn format(&self, cells: &[String]) -> String {
        debug_assert_eq!(cells.len(), self.widths.len());

        let mut out = String::new();
        match self.style {
            Style::Schema => {
                // Label column degenerates to the bare cell when no field in
                // the set has a label.
                if self.widths[0] > 0 {
                    out.push_str(&format!("{:<width$} ", cells[0], width = self.widths[0]));
                } else {
                    out.push_str(&cells[0]);
                }
                out.push_str(&format!(
                    "{:>tw$} {:<nw$} = {:>dw$}",
                    cells[1],
                    cells[2],
                    cells[3],
                    tw = self.widths[1],
                    nw = self.widths[2],
                    dw = self.widths[3],
                ));
                out.push_str(&cells[4]);
            }
            Style::Structural => {
                out.push_str(&format!(
                    "{:>tw$} {:<nw$}",
                    cells[0],
                    cells[1],
                    tw = self.widths[0],
                    nw = self.widths[1],
                ));
            }
        }
        out.push(';');

        let comment = cells.last().map(String::as_str).unwrap_or("");
        if self.widths.last().copied().unwrap_or(0) > 0 {
            out.push_str("  ");
        }
        out.push_str(comment);
        out
    }
}

/// A reusable column-aligned format for enumerator declarations.
///
/// The declaration shape (`NAME = NUMBER`) is shared by both output styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumColumns {
    name_width: usize,
    number_width: usize,
}

impl EnumColumns {
    /// Computes the column widths over the given enumerators. An enum with
    /// no values falls back to a fixed minimum width.
    pub fn new(values: &[EnumValueDescriptor]) -> Self {
        if values.is_empty() {
            return Self {
                name_width: MIN_ENUM_NAME_WIDTH,
                number_width: MIN_ENUM_NUMBER_WIDTH,
            };
        }
        Self {
            name_width: values
                .iter()
                .map(|v| v.name().chars().count())
                .max()
                .unwrap_or(0),
            number_width: values
                .iter()
                .map(|v| v.number().to_string().chars().count())
                .max()
                .unwrap_or(0),
        }
    }

    /// Formats one enumerator into an aligned `NAME = NUMBER` cell pair.
    /// Callers append the declaration terminator and any trailing comment.
    pub fn format(&self, value: &EnumValueDescriptor) -> String {
        format!(
            "{:<nw$} = {:>dw$}",
            value.name(),
            value.number(),
            nw = self.name_width,
            dw = self.number_width,
        )
    }
}

/// Renders a `reserved` declaration body from half-open field-number ranges.
///
/// A singleton range renders as the bare number, an open-ended range as
/// `"<start> to max"`, and anything else as `"<start> to <end - 1>"`, all
/// joined with `", "`.
pub fn format_reserved(ranges: &[ReservedRange]) -> String {
    ranges
        .iter()
        .map(|range| {
            let start = range.start.unwrap_or(0);
            match range.end {
                None => format!("{} to max", start),
                Some(end) if end == start + 1 => format!("{}", start),
                Some(end) => format!("{} to {}", start, end - 1),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
