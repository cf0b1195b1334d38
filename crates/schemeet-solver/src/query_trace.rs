//! Structured tracing for merge and fold entry points.
//!
//! Events use target `schemeet::query_json` and are intended to be consumed with:
//! `SCHEMEET_LOG=schemeet::query_json=trace SCHEMEET_LOG_FORMAT=json`.
//!
//! Environment:
//! - `SCHEMEET_QUERY_RUN_ID`: optional run identifier attached to every event.

use crate::merge::MergePolicy;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{Level, trace};

static NEXT_QUERY_ID: AtomicU64 = AtomicU64::new(1);
static QUERY_RUN_ID: OnceLock<String> = OnceLock::new();

#[inline]
pub(crate) fn enabled() -> bool {
    tracing::enabled!(target: "schemeet::query_json", Level::TRACE)
}

#[inline]
pub(crate) fn next_query_id() -> u64 {
    NEXT_QUERY_ID.fetch_add(1, Ordering::Relaxed)
}

#[inline]
fn run_id() -> &'static str {
    QUERY_RUN_ID
        .get_or_init(|| {
            std::env::var("SCHEMEET_QUERY_RUN_ID").unwrap_or_else(|_| "default".to_string())
        })
        .as_str()
}

#[inline]
pub(crate) fn merge_start(query_id: u64, policy: MergePolicy, left_fields: usize, right_fields: usize) {
    trace!(
        target: "schemeet::query_json",
        event = "query",
        phase = "start",
        run_id = run_id(),
        query_id,
        op = "merge",
        policy = policy.name(),
        left_fields,
        right_fields
    );
}

#[inline]
pub(crate) fn merge_end(query_id: u64, kept: usize, dropped: usize) {
    trace!(
        target: "schemeet::query_json",
        event = "query",
        phase = "end",
        run_id = run_id(),
        query_id,
        op = "merge",
        kept,
        dropped
    );
}

#[inline]
pub(crate) fn fold_start(query_id: u64, policy: MergePolicy, schemas: usize) {
    trace!(
        target: "schemeet::query_json",
        event = "query",
        phase = "start",
        run_id = run_id(),
        query_id,
        op = "fold",
        policy = policy.name(),
        schemas
    );
}

#[inline]
pub(crate) fn fold_end(query_id: u64, steps: usize, result_fields: usize) {
    trace!(
        target: "schemeet::query_json",
        event = "query",
        phase = "end",
        run_id = run_id(),
        query_id,
        op = "fold",
        steps,
        result_fields
    );
}
