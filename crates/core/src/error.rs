//! Card error model.

use thiserror::Error;

/// Result type used across the card crates.
pub type CardResult<T> = Result<T, CardError>;

/// Card-level error.
///
/// The base card never produces these on its own: storing and reading fields
/// cannot fail. They exist so concrete card kinds can surface `encode`
/// failures through one shared type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardError {
    /// Requested target dimensions are unusable (zero width or height).
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The target is too narrow to draw one pixel per module.
    #[error("target too small: symbol needs {required} px, got {width} px")]
    TargetTooSmall { required: u32, width: u32 },

    /// The target has more pixels than a card kind is willing to allocate.
    #[error("target too large: {width}x{height} exceeds {max_pixels} px")]
    TargetTooLarge {
        width: u32,
        height: u32,
        max_pixels: u64,
    },

    /// The type tag does not name a symbology this card kind can render.
    #[error("unsupported symbology: {0}")]
    UnsupportedSymbology(String),

    /// The code value cannot be encoded with the selected symbology.
    #[error("invalid code: {0}")]
    InvalidCode(String),

    /// A field required for encoding is absent.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// The rendering backend failed.
    #[error("render failed: {0}")]
    Render(String),
}

impl CardError {
    pub fn invalid_dimensions(width: u32, height: u32) -> Self {
        Self::InvalidDimensions { width, height }
    }

    pub fn too_small(required: u32, width: u32) -> Self {
        Self::TargetTooSmall { required, width }
    }

    pub fn too_large(width: u32, height: u32, max_pixels: u64) -> Self {
        Self::TargetTooLarge {
            width,
            height,
            max_pixels,
        }
    }

    pub fn unsupported(tag: impl Into<String>) -> Self {
        Self::UnsupportedSymbology(tag.into())
    }

    pub fn invalid_code(msg: impl Into<String>) -> Self {
        Self::InvalidCode(msg.into())
    }

    pub fn missing(field: &'static str) -> Self {
        Self::MissingField(field)
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
