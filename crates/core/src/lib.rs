//! `locker-core`: the card value object.
//!
//! This crate holds the **pure** card model: optional fields, day-granularity
//! expiry, value equality and the [`Card`] contract concrete card kinds
//! implement. Rendering lives with the card kinds, not here.

pub mod card;
pub mod date;
pub mod error;
pub mod value_object;

pub use card::{Card, CardData};
pub use date::CardDate;
pub use error::{CardError, CardResult};
pub use value_object::ValueObject;
