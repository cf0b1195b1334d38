//! Assignability between descriptors.
//!
//! The relation is deliberately shallow: a literal is assignable to its own
//! primitive, and everything else is assignable only to a structurally
//! identical descriptor. Opaque shapes that would be related under structural
//! record subtyping (`{ a: string; b: number }` vs `{ a: string }`) are treated
//! as unrelated.

use crate::classifier::{DescriptorClass, classify};
use crate::types::TypeDescriptor;

/// Relative generality of two descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specificity {
    /// Structurally equal.
    Identical,
    /// Left is assignable to right but not the other way around.
    LeftNarrower,
    /// Right is assignable to left but not the other way around.
    RightNarrower,
    /// Neither side is assignable to the other.
    Unrelated,
}

/// `source` is at least as specific as `target`.
pub fn is_assignable(source: &TypeDescriptor, target: &TypeDescriptor) -> bool {
    if source == target {
        return true;
    }
    match (classify(source), classify(target)) {
        (DescriptorClass::Literal(from), DescriptorClass::Primitive(to)) => from == to,
        _ => false,
    }
}

/// Mutual assignability, which reduces to structural equality.
#[inline]
pub fn is_exact_match(left: &TypeDescriptor, right: &TypeDescriptor) -> bool {
    is_assignable(left, right) && is_assignable(right, left)
}

pub fn compare_specificity(left: &TypeDescriptor, right: &TypeDescriptor) -> Specificity {
    match (is_assignable(left, right), is_assignable(right, left)) {
        (true, true) => Specificity::Identical,
        (true, false) => Specificity::LeftNarrower,
        (false, true) => Specificity::RightNarrower,
        (false, false) => Specificity::Unrelated,
    }
}
