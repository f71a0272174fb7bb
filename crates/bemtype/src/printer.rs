//! TypeScript printer for type declarations.
//!
//! Turns a [`TypeDeclaration`] into a TypeScript type alias:
//!
//! ```text
//! export type FooBlock = {
//!     name: "foo";
//!     elements: {
//!         qux: undefined;
//!         "large-icon": "active" | "disabled";
//!     };
//!     modifiers: "bar" | "baz";
//! };
//! ```

use bemtype_core::{FieldType, LineBreak, RecordType, TypeDeclaration};

use crate::config::OutputConfig;

/// Formatting options for [`TypeScriptPrinter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterOptions {
    line_break: LineBreak,
    semicolons: bool,
    indent: usize,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self::from(&OutputConfig::default())
    }
}

impl From<&OutputConfig> for PrinterOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            line_break: config.line_break(),
            semicolons: config.semicolons(),
            indent: config.indent(),
        }
    }
}

impl PrinterOptions {
    pub fn with_line_break(mut self, line_break: LineBreak) -> Self {
        self.line_break = line_break;
        self
    }

    /// Whether the declaration ends with a trailing `;`.
    pub fn with_semicolons(mut self, semicolons: bool) -> Self {
        self.semicolons = semicolons;
        self
    }

    /// Spaces per nesting level.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn line_break(&self) -> LineBreak {
        self.line_break
    }

    pub fn semicolons(&self) -> bool {
        self.semicolons
    }

    pub fn indent(&self) -> usize {
        self.indent
    }
}

/// Prints type declarations as TypeScript source.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptPrinter {
    options: PrinterOptions,
}

impl TypeScriptPrinter {
    pub fn new(options: PrinterOptions) -> Self {
        Self { options }
    }

    /// Print `declaration` as a single type alias.
    ///
    /// The output always ends with one line break.
    pub fn print(&self, declaration: &TypeDeclaration) -> String {
        let mut out = String::new();

        if declaration.exported() {
            out.push_str("export ");
        }
        out.push_str("type ");
        out.push_str(&type_identifier(declaration.identifier()));
        out.push_str(" = ");
        self.push_record(&mut out, declaration.shape(), 0);

        if self.options.semicolons {
            out.push(';');
        }
        out.push_str(self.options.line_break.as_str());
        out
    }

    fn push_record(&self, out: &mut String, record: &RecordType, depth: usize) {
        if record.is_empty() {
            out.push_str("{}");
            return;
        }

        let line_break = self.options.line_break.as_str();
        let inner = " ".repeat(self.options.indent * (depth + 1));

        out.push('{');
        for (name, field_type) in record.fields() {
            out.push_str(line_break);
            out.push_str(&inner);
            out.push_str(&property_key(name));
            out.push_str(": ");
            self.push_field_type(out, field_type, depth + 1);
            out.push(';');
        }
        out.push_str(line_break);
        out.push_str(&" ".repeat(self.options.indent * depth));
        out.push('}');
    }

    fn push_field_type(&self, out: &mut String, field_type: &FieldType, depth: usize) {
        match field_type {
            FieldType::StringUnion(values) => {
                let literals: Vec<String> = values.iter().map(|v| string_literal(v)).collect();
                out.push_str(&literals.join(" | "));
            }
            FieldType::Undefined => out.push_str("undefined"),
            FieldType::Never => out.push_str("never"),
            FieldType::Record(record) => self.push_record(out, record, depth),
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(is_identifier_start) && chars.all(is_identifier_part)
}

/// A type name that TypeScript accepts.
fn type_identifier(identifier: &str) -> String {
    let sanitized: String = identifier
        .chars()
        .map(|c| if is_identifier_part(c) { c } else { '_' })
        .collect();

    match sanitized.chars().next() {
        Some(c) if is_identifier_start(c) => sanitized,
        _ => format!("_{sanitized}"),
    }
}

/// A property key, quoted when it is not a plain identifier.
fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}

/// A double-quoted TypeScript string literal.
fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
