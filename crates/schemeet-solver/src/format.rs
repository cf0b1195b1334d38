//! TypeScript-like rendering of descriptors and schemas.

use crate::schema::Schema;
use crate::types::{OpaqueShape, OrderedFloat, TypeDescriptor};
use std::fmt::{self, Write};

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::StringLiteral(value) => write_quoted(f, value),
            TypeDescriptor::NumberLiteral(value) => fmt::Display::fmt(value, f),
            TypeDescriptor::BooleanLiteral(value) => write!(f, "{value}"),
            TypeDescriptor::StringPrimitive => f.write_str("string"),
            TypeDescriptor::NumberPrimitive => f.write_str("number"),
            TypeDescriptor::BooleanPrimitive => f.write_str("boolean"),
            TypeDescriptor::Opaque(shape) => fmt::Display::fmt(shape, f),
        }
    }
}

impl fmt::Display for OrderedFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            f.write_str("NaN")
        } else if value.is_infinite() {
            f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
        } else if value == 0.0 {
            f.write_char('0')
        } else {
            write!(f, "{value}")
        }
    }
}

impl fmt::Display for OpaqueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpaqueShape::Null => f.write_str("null"),
            OpaqueShape::Undefined => f.write_str("undefined"),
            OpaqueShape::Unknown => f.write_str("unknown"),
            OpaqueShape::Never => f.write_str("never"),
            OpaqueShape::Array { element } => {
                if needs_parens(element) {
                    write!(f, "({element})[]")
                } else {
                    write!(f, "{element}[]")
                }
            }
            OpaqueShape::Tuple { elements } => {
                f.write_char('[')?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_char(']')
            }
            OpaqueShape::Object { fields } => {
                write_fields(f, fields.iter().map(|(name, ty)| (name.as_str(), ty)))
            }
            OpaqueShape::Function { params, ret } => {
                f.write_char('(')?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "arg{i}: {param}")?;
                }
                write!(f, ") => {ret}")
            }
            OpaqueShape::Union { members } => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    if matches!(member.as_opaque(), Some(OpaqueShape::Function { .. })) {
                        write!(f, "({member})")?;
                    } else {
                        write!(f, "{member}")?;
                    }
                }
                Ok(())
            }
            OpaqueShape::Named { name } => f.write_str(name),
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fields(f, self.iter().map(|(name, ty)| (name.as_str(), ty)))
    }
}

fn needs_parens(descriptor: &TypeDescriptor) -> bool {
    matches!(
        descriptor.as_opaque(),
        Some(OpaqueShape::Union { .. } | OpaqueShape::Function { .. })
    )
}

fn write_fields<'a>(
    f: &mut fmt::Formatter<'_>,
    fields: impl ExactSizeIterator<Item = (&'a str, &'a TypeDescriptor)>,
) -> fmt::Result {
    if fields.len() == 0 {
        return f.write_str("{}");
    }
    f.write_str("{ ")?;
    for (i, (name, descriptor)) in fields.enumerate() {
        if i > 0 {
            f.write_str("; ")?;
        }
        if is_identifier(name) {
            f.write_str(name)?;
        } else {
            write_quoted(f, name)?;
        }
        write!(f, ": {descriptor}")?;
    }
    f.write_str(" }")
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
