//! Value object trait: equality by value, not identity.
//!
//! Prices, stock counts and the enumerated product attributes (unit form,
//! clothing size) carry no identity of their own. They are validated once,
//! at construction, and afterwards can only be replaced, never edited.
//!
//! ```ignore
//! let a = Price::new(500.0)?;
//! let b = Price::new(500.0)?;
//! assert_eq!(a, b);
//! ```

/// Marker trait for validated, immutable domain values.
///
/// Implementors guarantee that every reachable instance already satisfies
/// its invariants, so holders never need to re-check them.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
