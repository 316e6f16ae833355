//! Domain Layer - Core Entity Trait
//!
//! Every persisted entity carries a store-assigned identifier.

use std::collections::HashSet;
use std::hash::Hash;

/// Core trait for entities mirrored from the remote store
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Drop later entries whose id was already seen, keeping the original order.
pub fn dedup_by_id<T: Entity>(entities: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(entities.len());
    entities
        .into_iter()
        .filter(|entity| seen.insert(entity.id().clone()))
        .collect()
}
