//! Structural schema intersection.
//!
//! Given a family of record schemas (field name → [`TypeDescriptor`]), this
//! crate computes the schema of fields every member agrees on, under one of
//! two policies:
//!
//! - **Strict**: a field survives only when every schema declares it with an
//!   identical descriptor.
//! - **Upcast**: a field survives when the descriptors are identical, when one
//!   generalizes the other (`"cat"` vs `string`), or when both are literals of
//!   one base kind (`"cat"` vs `"dog"` widens to `string`).
//!
//! Layering, leaves first:
//!
//! - [`classifier`]: literal / primitive / opaque classification and base kinds
//! - [`relation`]: assignability between two descriptors
//! - [`merge`]: pairwise schema merge
//! - [`fold`]: left fold of the merge over any number of schemas
//!
//! Everything is a pure function of immutable inputs. The only fallible
//! surface is [`Schema::validate`], which producers of untrusted descriptors
//! call before handing schemas to the merge.
pub mod classifier;
pub mod explain;
pub mod fold;
mod format;
pub mod merge;
mod query_trace;
pub mod relation;
pub mod schema;
mod type_factory;
pub mod types;
pub mod validate;

pub use classifier::{DescriptorClass, base_kind, classify, is_upcastable};
pub use explain::{
    DroppedField, FoldReport, FoldStep, MergeReport, fold_explained, merge_explained,
};
pub use fold::{fold, fold_strict, fold_upcast};
pub use merge::{
    FieldDropReason, FieldOutcome, KeepRule, MergePolicy, merge, merge_field, merge_strict,
    merge_upcast,
};
pub use relation::{Specificity, compare_specificity, is_assignable, is_exact_match};
pub use schema::{FieldMap, Schema};
pub use types::{BaseKind, OpaqueShape, OrderedFloat, TypeDescriptor};
pub use validate::{DescriptorError, UnionDefect};

#[cfg(test)]
#[path = "../tests/classifier_tests.rs"]
mod classifier_tests;
#[cfg(test)]
#[path = "../tests/relation_tests.rs"]
mod relation_tests;
#[cfg(test)]
#[path = "../tests/type_factory_tests.rs"]
mod type_factory_tests;
#[cfg(test)]
#[path = "../tests/merge_tests.rs"]
mod merge_tests;
#[cfg(test)]
#[path = "../tests/merge_law_tests.rs"]
mod merge_law_tests;
#[cfg(test)]
#[path = "../tests/fold_tests.rs"]
mod fold_tests;
#[cfg(test)]
#[path = "../tests/explain_tests.rs"]
mod explain_tests;
#[cfg(test)]
#[path = "../tests/validate_tests.rs"]
mod validate_tests;
#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod format_tests;
#[cfg(test)]
#[path = "../tests/serde_tests.rs"]
mod serde_tests;
