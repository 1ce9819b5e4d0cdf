//! Rasterizing module patterns into grayscale images.

use std::io::Cursor;

use image::{GrayImage, ImageFormat, Luma};

use locker_core::{CardError, CardResult};

pub const DEFAULT_QUIET_ZONE: u32 = 10;
pub const DEFAULT_FOREGROUND: u8 = 0;
pub const DEFAULT_BACKGROUND: u8 = 255;

/// Largest target `rasterize` will allocate, in pixels (64 MiB of luma).
pub const MAX_PIXELS: u64 = 64 * 1024 * 1024;

/// Rendering environment for barcode cards.
///
/// Built once by the host and passed to every `encode` call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Blank modules on each side of the symbol.
    pub quiet_zone: u32,
    /// Bar luma.
    pub foreground: u8,
    /// Space luma.
    pub background: u8,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            quiet_zone: DEFAULT_QUIET_ZONE,
            foreground: DEFAULT_FOREGROUND,
            background: DEFAULT_BACKGROUND,
        }
    }
}

impl RenderContext {
    /// Read `LOCKER_QUIET_ZONE`, `LOCKER_FOREGROUND` and `LOCKER_BACKGROUND`.
    ///
    /// Unset variables fall back to defaults; unparsable ones do too, with a
    /// warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RenderContext::from_env`] with a caller-supplied lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            quiet_zone: setting(&lookup, "LOCKER_QUIET_ZONE", defaults.quiet_zone),
            foreground: setting(&lookup, "LOCKER_FOREGROUND", defaults.foreground),
            background: setting(&lookup, "LOCKER_BACKGROUND", defaults.background),
        }
    }

    pub fn with_quiet_zone(mut self, modules: u32) -> Self {
        self.quiet_zone = modules;
        self
    }

    pub fn with_colors(mut self, foreground: u8, background: u8) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }
}

fn setting<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: core::str::FromStr + core::fmt::Display + Copy,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!("{key}={raw:?} is not valid; using default {default}");
        default
    })
}

/// Draw `modules` into an image of exactly `width` x `height` pixels.
///
/// Each module gets the same whole number of pixels; leftover width is split
/// evenly on both sides. Bars span the full height. Targets above
/// [`MAX_PIXELS`] are rejected before anything is allocated.
pub fn rasterize(
    ctx: &RenderContext,
    modules: &[bool],
    width: u32,
    height: u32,
) -> CardResult<GrayImage> {
    if width == 0 || height == 0 {
        return Err(CardError::invalid_dimensions(width, height));
    }
    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(CardError::too_large(width, height, MAX_PIXELS));
    }

    let total = u32::try_from(modules.len())
        .ok()
        .and_then(|n| n.checked_add(ctx.quiet_zone.saturating_mul(2)))
        .ok_or_else(|| CardError::render("symbol too long"))?;
    if total == 0 {
        return Err(CardError::render("nothing to draw"));
    }
    let module_px = width / total;
    if module_px == 0 {
        return Err(CardError::too_small(total, width));
    }

    let slack = width - module_px * total;
    let left = slack / 2 + ctx.quiet_zone * module_px;

    let mut img = GrayImage::from_pixel(width, height, Luma([ctx.background]));
    let bar = Luma([ctx.foreground]);
    for (i, _) in modules.iter().enumerate().filter(|(_, is_bar)| **is_bar) {
        let x0 = left + i as u32 * module_px;
        for x in x0..x0 + module_px {
            for y in 0..height {
                img.put_pixel(x, y, bar);
            }
        }
    }

    Ok(img)
}

/// Encode a rendered card as PNG bytes.
pub fn png_bytes(image: &GrayImage) -> CardResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|e| CardError::render(format!("png encoding failed: {e}")))?;
    Ok(out.into_inner())
}
