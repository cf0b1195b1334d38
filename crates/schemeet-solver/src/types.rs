//! Core descriptor representation.
//!
//! A [`TypeDescriptor`] is the declared type of one schema field. The algebra
//! only distinguishes three families:
//!
//! - **Literals** (`"cat"`, `1`, `true`): a single value of a base kind
//! - **Primitives** (`string`, `number`, `boolean`): the unconstrained base kinds
//! - **Opaque** shapes: everything else, compared by structural identity only
//!
//! All equality is structural. Derived `PartialEq`/`Ord`/`Hash` are relied on
//! by the merge and by union normalization, so every payload type here must keep
//! those derives consistent with each other.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Primitive base kind shared by a literal and its widened primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseKind {
    String,
    Number,
    Boolean,
}

impl BaseKind {
    /// The unconstrained primitive descriptor for this kind.
    pub const fn primitive(self) -> TypeDescriptor {
        match self {
            BaseKind::String => TypeDescriptor::StringPrimitive,
            BaseKind::Number => TypeDescriptor::NumberPrimitive,
            BaseKind::Boolean => TypeDescriptor::BooleanPrimitive,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            BaseKind::String => "string",
            BaseKind::Number => "number",
            BaseKind::Boolean => "boolean",
        }
    }
}

/// `f64` wrapper with total equality, ordering and hashing.
///
/// `0` and `-0` are the same literal, and every NaN payload is the same value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedFloat(pub f64);

impl OrderedFloat {
    #[inline]
    fn canonical(self) -> f64 {
        if self.0 == 0.0 {
            0.0
        } else if self.0.is_nan() {
            f64::NAN
        } else {
            self.0
        }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for OrderedFloat {
    fn eq(&self, other: &Self) -> bool {
        self.canonical().to_bits() == other.canonical().to_bits()
    }
}

impl Eq for OrderedFloat {}

impl PartialOrd for OrderedFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().total_cmp(&other.canonical())
    }
}

impl Hash for OrderedFloat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().to_bits().hash(state);
    }
}

impl From<f64> for OrderedFloat {
    fn from(value: f64) -> Self {
        OrderedFloat(value)
    }
}

/// Declared type of a single schema field.
///
/// The full boolean domain is always `BooleanPrimitive`. A union of
/// `BooleanLiteral(true)` and `BooleanLiteral(false)` is never a valid
/// descriptor; [`TypeDescriptor::union`] collapses it and
/// [`TypeDescriptor::validate`] rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TypeDescriptor {
    StringLiteral(String),
    NumberLiteral(OrderedFloat),
    BooleanLiteral(bool),
    #[serde(rename = "string")]
    StringPrimitive,
    #[serde(rename = "number")]
    NumberPrimitive,
    #[serde(rename = "boolean")]
    BooleanPrimitive,
    Opaque(OpaqueShape),
}

/// Structural signature of a descriptor the algebra never widens.
///
/// Object fields live in a sorted map so that declaration order never affects
/// identity. Union members are kept sorted and deduplicated by the factory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum OpaqueShape {
    Null,
    Undefined,
    Unknown,
    Never,
    Array {
        element: Box<TypeDescriptor>,
    },
    Tuple {
        elements: Vec<TypeDescriptor>,
    },
    Object {
        fields: BTreeMap<String, TypeDescriptor>,
    },
    Function {
        params: Vec<TypeDescriptor>,
        ret: Box<TypeDescriptor>,
    },
    Union {
        members: Vec<TypeDescriptor>,
    },
    /// Nominal reference (e.g. `Date`), identical only to the same name.
    Named {
        name: String,
    },
}

impl TypeDescriptor {
    #[inline]
    pub fn is_opaque(&self) -> bool {
        matches!(self, TypeDescriptor::Opaque(_))
    }

    #[inline]
    pub fn as_opaque(&self) -> Option<&OpaqueShape> {
        match self {
            TypeDescriptor::Opaque(shape) => Some(shape),
            _ => None,
        }
    }

    /// Members of an opaque union, if this is one.
    pub fn union_members(&self) -> Option<&[TypeDescriptor]> {
        match self {
            TypeDescriptor::Opaque(OpaqueShape::Union { members }) => Some(members),
            _ => None,
        }
    }
}
