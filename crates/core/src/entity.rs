//! Entity trait: catalog entries keep their identity while fields change.
//!
//! A product is created once under an id and keeps that id until it is
//! deleted. Its price may be reassigned in between; it is still the same entry.

/// Something stored in the catalog under a unique identifier.
pub trait Entity {
    /// Identifier used as the catalog key.
    type Id: Clone + Ord + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// True when both values describe the same catalog entry, even if their
    /// other fields differ (e.g. before and after a price update).
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
