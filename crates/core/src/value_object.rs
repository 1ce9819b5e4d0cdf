//! Value object trait: equality by value, not identity.
//!
//! A card has no identity of its own. Two cards carrying the same name, code,
//! type and expiration date are the same card as far as this crate cares.

/// Marker trait for value objects.
///
/// Unlike a textbook value object, card state is **mutable**: fields are set
/// and cleared in place through `&mut self`. What the trait promises is value
/// semantics at the boundary:
///
/// - **Clone** hands out an independent copy, never a shared handle
/// - **PartialEq** compares attribute values only
/// - **Debug** so values show up in logs and test failures
///
/// No internal synchronization is implied. Mutating one value from several
/// threads needs an outer lock held by the caller.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Expiry { year: i32, month: u32, day: u32 }
///
/// impl ValueObject for Expiry {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
