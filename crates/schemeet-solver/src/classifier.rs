//! Descriptor classification.
//!
//! Splits descriptors into the three families the merge cares about. One
//! `classify` call answers both "is this upcastable?" and "what is its base
//! kind?", so callers that need both match on [`DescriptorClass`] directly.

use crate::types::{BaseKind, TypeDescriptor};

/// Classification of a descriptor for merge purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorClass {
    /// A single value of the given base kind.
    Literal(BaseKind),
    /// The unconstrained base kind itself.
    Primitive(BaseKind),
    /// Anything else. Never widened.
    Opaque,
}

impl DescriptorClass {
    #[inline]
    pub const fn is_upcastable(self) -> bool {
        matches!(self, DescriptorClass::Literal(_))
    }

    #[inline]
    pub const fn base_kind(self) -> Option<BaseKind> {
        match self {
            DescriptorClass::Literal(kind) | DescriptorClass::Primitive(kind) => Some(kind),
            DescriptorClass::Opaque => None,
        }
    }
}

/// Classify a descriptor as literal, primitive, or opaque.
///
/// The yes/no "is this a literal" question is [`is_upcastable`], which is
/// `classify(d).is_upcastable()`.
pub const fn classify(descriptor: &TypeDescriptor) -> DescriptorClass {
    match descriptor {
        TypeDescriptor::StringLiteral(_) => DescriptorClass::Literal(BaseKind::String),
        TypeDescriptor::NumberLiteral(_) => DescriptorClass::Literal(BaseKind::Number),
        TypeDescriptor::BooleanLiteral(_) => DescriptorClass::Literal(BaseKind::Boolean),
        TypeDescriptor::StringPrimitive => DescriptorClass::Primitive(BaseKind::String),
        TypeDescriptor::NumberPrimitive => DescriptorClass::Primitive(BaseKind::Number),
        TypeDescriptor::BooleanPrimitive => DescriptorClass::Primitive(BaseKind::Boolean),
        TypeDescriptor::Opaque(_) => DescriptorClass::Opaque,
    }
}

/// True iff `descriptor` is a string, number, or boolean literal.
///
/// `boolean` is a primitive, not a literal: the full boolean domain is only
/// ever represented as `BooleanPrimitive`.
#[inline]
pub const fn is_upcastable(descriptor: &TypeDescriptor) -> bool {
    classify(descriptor).is_upcastable()
}

/// Base kind of a literal or primitive; `None` for opaque descriptors.
#[inline]
pub const fn base_kind(descriptor: &TypeDescriptor) -> Option<BaseKind> {
    classify(descriptor).base_kind()
}
