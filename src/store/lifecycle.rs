//! Whole-flow lifecycle operations: rename, duplicate, delete, set-default.
//!
//! These sit on the interaction surface's side of the store boundary: they
//! validate against the collection (slug uniqueness, default protection)
//! and then issue the collaborator writes. Validation failures come back as
//! [`StoreError`] values for inline display next to the triggering control.

use super::{FlowRecord, FlowStore, FlowSummary};
use crate::error::StoreError;
use crate::graph::id::fresh_id;
use chrono::Utc;

/// Renames and/or re-slugs a flow, checking slug availability first when the
/// slug actually changes.
pub fn rename_flow<S: FlowStore>(
    store: &mut S,
    slug: &str,
    new_name: &str,
    new_slug: &str,
) -> Result<(), StoreError> {
    if new_slug != slug && !store.slug_available(new_slug)? {
        return Err(StoreError::SlugTaken {
            slug: new_slug.to_string(),
        });
    }
    store.rename_flow(slug, new_name, new_slug)
}

/// Copies an entire flow under a new name and slug. The slug-uniqueness
/// check runs before the insert; on collision nothing is written.
pub fn duplicate_flow<S: FlowStore>(
    store: &mut S,
    slug: &str,
    new_name: &str,
    new_slug: &str,
) -> Result<FlowSummary, StoreError> {
    if !store.slug_available(new_slug)? {
        return Err(StoreError::SlugTaken {
            slug: new_slug.to_string(),
        });
    }
    let source = store.load_flow(slug)?;
    let record = FlowRecord {
        id: fresh_id("flow"),
        name: new_name.to_string(),
        slug: new_slug.to_string(),
        graph: source.graph,
        is_default: false,
        updated_at: Utc::now(),
    };
    let summary = FlowSummary::from(&record);
    store.insert_flow(record)?;
    Ok(summary)
}

/// Deletes a flow. Refused while the flow is marked default: the collection
/// must always keep its default flow servable.
pub fn delete_flow<S: FlowStore>(store: &mut S, slug: &str) -> Result<(), StoreError> {
    let record = store.load_flow(slug)?;
    if record.is_default {
        return Err(StoreError::DefaultFlowProtected {
            slug: slug.to_string(),
        });
    }
    store.delete_flow(slug)
}

/// Marks one flow as the collection-wide default: unset the previous
/// default, then set the new one. Two separate collaborator writes, not a
/// transaction; two near-simultaneous calls race and the storage layer's
/// last write wins. Accepted limitation for a single-operator tool.
pub fn set_default_flow<S: FlowStore>(store: &mut S, slug: &str) -> Result<(), StoreError> {
    // Resolve the flow first so a stale slug fails before any write.
    store.load_flow(slug)?;
    store.clear_default()?;
    store.mark_default(slug)
}
