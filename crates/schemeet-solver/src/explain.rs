//! Merge and fold results annotated with the reason each field was dropped.
//!
//! These entry points produce exactly the schema the plain `merge`/`fold`
//! functions produce; the extra bookkeeping only records what fell out.

use crate::fold::fold_schemas;
use crate::merge::{FieldDropReason, MergePolicy, merge_schemas};
use crate::schema::Schema;
use serde::Serialize;
use std::fmt;

/// A field absent from a merge result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedField {
    pub name: String,
    pub reason: FieldDropReason,
}

impl DroppedField {
    pub fn new(name: impl Into<String>, reason: FieldDropReason) -> Self {
        DroppedField {
            name: name.into(),
            reason,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub schema: Schema,
    /// Left-side fields first (in left order), then right-only fields.
    pub dropped: Vec<DroppedField>,
}

impl MergeReport {
    pub fn dropped_reason(&self, name: &str) -> Option<FieldDropReason> {
        self.dropped
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.reason)
    }
}

/// One pairwise step of a fold: the accumulator merged with `schemas[index]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoldStep {
    pub index: usize,
    pub dropped: Vec<DroppedField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoldReport {
    pub schema: Schema,
    pub steps: Vec<FoldStep>,
}

impl FoldReport {
    /// Every drop across all steps, paired with the step's schema index.
    pub fn all_dropped(&self) -> impl Iterator<Item = (usize, &DroppedField)> {
        self.steps
            .iter()
            .flat_map(|step| step.dropped.iter().map(move |field| (step.index, field)))
    }
}

pub fn merge_explained(left: &Schema, right: &Schema, policy: MergePolicy) -> MergeReport {
    let mut dropped = Vec::new();
    let schema = merge_schemas(left, right, policy, Some(&mut dropped));
    MergeReport { schema, dropped }
}

/// Fold like [`fold`](crate::fold::fold), recording every step. Steps continue after the
/// accumulator empties so that every right-only field is reported.
pub fn fold_explained(schemas: &[Schema], policy: MergePolicy, empty: Schema) -> FoldReport {
    let mut steps = Vec::new();
    let schema = fold_schemas(schemas, policy, empty, Some(&mut steps));
    FoldReport { schema, steps }
}

impl fmt::Display for FieldDropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldDropReason::MissingLeft => f.write_str("declared only by the right schema"),
            FieldDropReason::MissingRight => f.write_str("declared only by the left schema"),
            FieldDropReason::NotIdentical => f.write_str("descriptors are not identical"),
            FieldDropReason::OpaqueMismatch => {
                f.write_str("opaque descriptors are only compatible when identical")
            }
            FieldDropReason::BaseKindMismatch { left, right } => {
                write!(f, "{} is incompatible with {}", left.name(), right.name())
            }
        }
    }
}
