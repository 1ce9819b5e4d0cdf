//! Barcode card kind.
//!
//! Implements [`locker_core::Card`] for cards whose code is a 1D barcode
//! payload (EAN-13, EAN-8, UPC-A, Code 39) and renders them to grayscale
//! images sized to the caller's target.

pub mod card;
pub mod render;
pub mod symbology;

mod code39;
mod ean;

pub use card::BarcodeCard;
pub use render::{RenderContext, png_bytes};
pub use symbology::Symbology;
