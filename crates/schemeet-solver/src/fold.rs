//! Left fold of the pairwise merge over a list of schemas.
//!
//! - zero schemas: the caller-supplied `empty` schema
//! - one schema: that schema, unchanged (never merged with itself)
//! - two or more: `merge(merge(merge(S1, S2), S3), ..., SN)`
//!
//! The loop holds a single accumulator, so stack depth is constant and live
//! memory is bounded by the widest schema rather than by the schema count.

use crate::explain::FoldStep;
use crate::merge::{MergePolicy, merge_schemas};
use crate::query_trace;
use crate::schema::Schema;
use tracing::{debug, debug_span, trace};

/// Fold `schemas` left to right under `policy`.
pub fn fold(schemas: &[Schema], policy: MergePolicy, empty: Schema) -> Schema {
    fold_schemas(schemas, policy, empty, None)
}

/// Fold keeping only fields identical across every schema.
pub fn fold_strict(schemas: &[Schema], empty: Schema) -> Schema {
    fold(schemas, MergePolicy::Strict, empty)
}

/// Fold keeping the most general compatible descriptor for every field.
pub fn fold_upcast(schemas: &[Schema], empty: Schema) -> Schema {
    fold(schemas, MergePolicy::Upcast, empty)
}

pub(crate) fn fold_schemas(
    schemas: &[Schema],
    policy: MergePolicy,
    empty: Schema,
    mut steps: Option<&mut Vec<FoldStep>>,
) -> Schema {
    let _span = debug_span!("fold", %policy, schemas = schemas.len()).entered();
    let query_id = query_trace::enabled().then(query_trace::next_query_id);
    if let Some(id) = query_id {
        query_trace::fold_start(id, policy, schemas.len());
    }

    let Some((first, rest)) = schemas.split_first() else {
        trace!("no schemas, returning the supplied default");
        if let Some(id) = query_id {
            query_trace::fold_end(id, 0, empty.len());
        }
        return empty;
    };

    let mut acc = first.clone();
    let mut merged_steps = 0usize;
    for (offset, next) in rest.iter().enumerate() {
        // merge(empty, X) is empty for every X under both policies.
        if acc.is_empty() && steps.is_none() {
            debug!(remaining = rest.len() - offset, "accumulator empty, stopping early");
            break;
        }
        acc = match steps.as_deref_mut() {
            Some(steps) => {
                let mut dropped = Vec::new();
                let merged = merge_schemas(&acc, next, policy, Some(&mut dropped));
                steps.push(FoldStep {
                    index: offset + 1,
                    dropped,
                });
                merged
            }
            None => merge_schemas(&acc, next, policy, None),
        };
        merged_steps += 1;
        trace!(step = offset + 1, fields = acc.len(), "merged next schema");
    }

    if let Some(id) = query_id {
        query_trace::fold_end(id, merged_steps, acc.len());
    }
    acc
}
