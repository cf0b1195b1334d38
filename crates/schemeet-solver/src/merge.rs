//! Pairwise schema merge.
//!
//! A merge keeps only fields present on both sides. Each shared field is then
//! decided independently by [`merge_field`]:
//!
//! | policy | kept when | stored value |
//! |---|---|---|
//! | strict | descriptors identical | the common descriptor |
//! | upcast | identical | the common descriptor |
//! | upcast | one side assignable to the other | the more general side |
//! | upcast | both literals of one base kind | that kind's primitive |
//!
//! Everything else is dropped; a dropped field never appears in the output
//! with a placeholder. Both policies are commutative: swapping operands only
//! swaps which side is reported as the more general one.

use crate::classifier::{DescriptorClass, base_kind, classify};
use crate::explain::DroppedField;
use crate::query_trace;
use crate::relation::{Specificity, compare_specificity, is_exact_match};
use crate::schema::Schema;
use crate::types::{BaseKind, TypeDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Field compatibility policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Keep a field only on exact descriptor identity.
    Strict,
    /// Keep a field when identical, when one side generalizes the other, or
    /// when both sides are literals of one base kind.
    #[default]
    Upcast,
}

impl MergePolicy {
    pub const fn name(self) -> &'static str {
        match self {
            MergePolicy::Strict => "strict",
            MergePolicy::Upcast => "upcast",
        }
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which rule kept a shared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeepRule {
    Identical,
    /// The right descriptor generalizes the left one.
    RightWidensLeft,
    /// The left descriptor generalizes the right one.
    LeftWidensRight,
    /// Two distinct literals widened to their shared primitive.
    LiteralUpcast(BaseKind),
}

/// Why a field is absent from a merge result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldDropReason {
    /// Only the right schema declares the field.
    MissingLeft,
    /// Only the left schema declares the field.
    MissingRight,
    /// Same base kind but not identical, under the strict policy.
    NotIdentical,
    /// At least one side is opaque and the two are not identical.
    OpaqueMismatch,
    /// The two sides belong to different base kinds.
    BaseKindMismatch { left: BaseKind, right: BaseKind },
}

/// Per-field decision of a pairwise merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    Kept {
        value: TypeDescriptor,
        rule: KeepRule,
    },
    Dropped(FieldDropReason),
}

impl FieldOutcome {
    pub fn kept_value(&self) -> Option<&TypeDescriptor> {
        match self {
            FieldOutcome::Kept { value, .. } => Some(value),
            FieldOutcome::Dropped(_) => None,
        }
    }

    pub fn is_kept(&self) -> bool {
        matches!(self, FieldOutcome::Kept { .. })
    }
}

/// Decide a single field present on both sides.
pub fn merge_field(
    left: &TypeDescriptor,
    right: &TypeDescriptor,
    policy: MergePolicy,
) -> FieldOutcome {
    match policy {
        MergePolicy::Strict => {
            if is_exact_match(left, right) {
                FieldOutcome::Kept {
                    value: left.clone(),
                    rule: KeepRule::Identical,
                }
            } else {
                FieldOutcome::Dropped(mismatch_reason(left, right))
            }
        }
        MergePolicy::Upcast => match compare_specificity(left, right) {
            Specificity::Identical => FieldOutcome::Kept {
                value: left.clone(),
                rule: KeepRule::Identical,
            },
            Specificity::LeftNarrower => FieldOutcome::Kept {
                value: right.clone(),
                rule: KeepRule::RightWidensLeft,
            },
            Specificity::RightNarrower => FieldOutcome::Kept {
                value: left.clone(),
                rule: KeepRule::LeftWidensRight,
            },
            Specificity::Unrelated => match (classify(left), classify(right)) {
                (DescriptorClass::Literal(l), DescriptorClass::Literal(r)) if l == r => {
                    FieldOutcome::Kept {
                        value: l.primitive(),
                        rule: KeepRule::LiteralUpcast(l),
                    }
                }
                _ => FieldOutcome::Dropped(mismatch_reason(left, right)),
            },
        },
    }
}

fn mismatch_reason(left: &TypeDescriptor, right: &TypeDescriptor) -> FieldDropReason {
    match (base_kind(left), base_kind(right)) {
        (Some(l), Some(r)) if l != r => FieldDropReason::BaseKindMismatch { left: l, right: r },
        (Some(_), Some(_)) => FieldDropReason::NotIdentical,
        _ => FieldDropReason::OpaqueMismatch,
    }
}

/// Merge two schemas under `policy`.
pub fn merge(left: &Schema, right: &Schema, policy: MergePolicy) -> Schema {
    merge_schemas(left, right, policy, None)
}

/// Keep shared fields whose descriptors are identical.
pub fn merge_strict(left: &Schema, right: &Schema) -> Schema {
    merge(left, right, MergePolicy::Strict)
}

/// Keep shared fields that are identical, where one side generalizes the
/// other, or where both sides are literals of one base kind.
pub fn merge_upcast(left: &Schema, right: &Schema) -> Schema {
    merge(left, right, MergePolicy::Upcast)
}

/// Shared merge loop. When `drops` is given, every absent field (including
/// fields declared on only one side) is recorded there.
pub(crate) fn merge_schemas(
    left: &Schema,
    right: &Schema,
    policy: MergePolicy,
    mut drops: Option<&mut Vec<DroppedField>>,
) -> Schema {
    let query_id = query_trace::enabled().then(query_trace::next_query_id);
    if let Some(id) = query_id {
        query_trace::merge_start(id, policy, left.len(), right.len());
    }

    let mut merged = Schema::with_capacity(left.len().min(right.len()));
    let mut dropped = 0usize;

    for (name, left_descriptor) in left {
        let outcome = match right.get(name) {
            Some(right_descriptor) => merge_field(left_descriptor, right_descriptor, policy),
            None => FieldOutcome::Dropped(FieldDropReason::MissingRight),
        };
        match outcome {
            FieldOutcome::Kept { value, .. } => {
                merged.insert(name.clone(), value);
            }
            FieldOutcome::Dropped(reason) => {
                dropped += 1;
                if reason != FieldDropReason::MissingRight {
                    trace!(field = %name, ?reason, %policy, "field dropped");
                }
                if let Some(drops) = drops.as_deref_mut() {
                    drops.push(DroppedField::new(name.clone(), reason));
                }
            }
        }
    }

    if let Some(drops) = drops {
        for name in right.field_names().filter(|name| !left.contains(name)) {
            drops.push(DroppedField::new(name, FieldDropReason::MissingLeft));
        }
    }

    if let Some(id) = query_id {
        query_trace::merge_end(id, merged.len(), dropped);
    }
    merged
}
