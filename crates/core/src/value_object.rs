//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two value
/// objects with the same attribute values are the same value. To "modify"
/// one, construct a new one. A recorded ledger movement is the canonical
/// example here: once written it never changes, and two movements with the
/// same date, amount, and kind are indistinguishable.
///
/// The trait requires `Clone + PartialEq + Debug` so values can be copied,
/// compared, and inspected like primitives.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
