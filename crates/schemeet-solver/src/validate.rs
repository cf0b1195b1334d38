//! Construction invariants for descriptors from untrusted producers.
//!
//! The merge algebra itself never fails. Descriptors built through the
//! factory in `type_factory` are always valid; descriptors deserialized or
//! assembled by hand may not be, and these checks reject them before they
//! reach the merge.

use crate::classifier::{DescriptorClass, classify};
use crate::schema::Schema;
use crate::types::{BaseKind, OpaqueShape, TypeDescriptor};
use thiserror::Error;

/// Why a union is not in normal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnionDefect {
    /// Fewer than two members.
    #[error("a union needs at least two members")]
    TooFewMembers,
    /// A member is itself a union.
    #[error("nested unions must be flattened")]
    NestedUnion,
    /// A member is `never` or `unknown`.
    #[error("`never` and `unknown` cannot appear inside a union")]
    DegenerateMember,
    /// Members are not strictly sorted (unsorted or duplicated).
    #[error("members must be sorted and distinct")]
    NotCanonical,
    /// Both `true` and `false` are present; the domain must be `boolean`.
    #[error("`true | false` must be written as `boolean`")]
    BooleanDomain,
    /// A literal appears next to its own primitive.
    #[error("a {} literal is redundant next to `{}`", .0.name(), .0.name())]
    AbsorbedLiteral(BaseKind),
}

/// A descriptor that breaks a construction invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DescriptorError {
    #[error("{path}: number literal {value} is not finite")]
    NonFiniteNumber { path: String, value: f64 },
    #[error("{path}: {defect}")]
    UnnormalizedUnion { path: String, defect: UnionDefect },
}

impl DescriptorError {
    pub fn path(&self) -> &str {
        match self {
            DescriptorError::NonFiniteNumber { path, .. }
            | DescriptorError::UnnormalizedUnion { path, .. } => path,
        }
    }
}

impl TypeDescriptor {
    /// Check construction invariants. `path` prefixes error locations.
    pub fn validate(&self, path: &str) -> Result<(), DescriptorError> {
        match self {
            TypeDescriptor::NumberLiteral(value) if !value.value().is_finite() => {
                Err(DescriptorError::NonFiniteNumber {
                    path: path.to_string(),
                    value: value.value(),
                })
            }
            TypeDescriptor::Opaque(shape) => validate_shape(shape, path),
            _ => Ok(()),
        }
    }
}

impl Schema {
    /// Validate every field descriptor, reporting the first violation.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        for (name, descriptor) in self {
            descriptor.validate(name)?;
        }
        Ok(())
    }
}

fn validate_shape(shape: &OpaqueShape, path: &str) -> Result<(), DescriptorError> {
    match shape {
        OpaqueShape::Null
        | OpaqueShape::Undefined
        | OpaqueShape::Unknown
        | OpaqueShape::Never
        | OpaqueShape::Named { .. } => Ok(()),
        OpaqueShape::Array { element } => element.validate(&format!("{path}[]")),
        OpaqueShape::Tuple { elements } => {
            for (i, element) in elements.iter().enumerate() {
                element.validate(&format!("{path}[{i}]"))?;
            }
            Ok(())
        }
        OpaqueShape::Object { fields } => {
            for (name, descriptor) in fields {
                descriptor.validate(&format!("{path}.{name}"))?;
            }
            Ok(())
        }
        OpaqueShape::Function { params, ret } => {
            for (i, param) in params.iter().enumerate() {
                param.validate(&format!("{path}({i})"))?;
            }
            ret.validate(&format!("{path}()"))
        }
        OpaqueShape::Union { members } => {
            if let Some(defect) = union_defect(members) {
                return Err(DescriptorError::UnnormalizedUnion {
                    path: path.to_string(),
                    defect,
                });
            }
            for (i, member) in members.iter().enumerate() {
                member.validate(&format!("{path}|{i}"))?;
            }
            Ok(())
        }
    }
}

fn union_defect(members: &[TypeDescriptor]) -> Option<UnionDefect> {
    if members.len() < 2 {
        return Some(UnionDefect::TooFewMembers);
    }
    for member in members {
        match member.as_opaque() {
            Some(OpaqueShape::Union { .. }) => return Some(UnionDefect::NestedUnion),
            Some(OpaqueShape::Never | OpaqueShape::Unknown) => {
                return Some(UnionDefect::DegenerateMember);
            }
            _ => {}
        }
    }
    if members.contains(&TypeDescriptor::BooleanLiteral(true))
        && members.contains(&TypeDescriptor::BooleanLiteral(false))
    {
        return Some(UnionDefect::BooleanDomain);
    }
    for member in members {
        if let DescriptorClass::Literal(kind) = classify(member) {
            if members.contains(&kind.primitive()) {
                return Some(UnionDefect::AbsorbedLiteral(kind));
            }
        }
    }
    if members.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Some(UnionDefect::NotCanonical);
    }
    None
}
