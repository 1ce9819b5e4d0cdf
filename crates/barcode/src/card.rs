//! Barcode card: the card kind that renders as a 1D barcode.

use image::GrayImage;
use serde::{Deserialize, Serialize};

use locker_core::{Card, CardData, CardError, CardResult};

use crate::render::{self, RenderContext};
use crate::symbology::Symbology;

/// A card whose type tag names a [`Symbology`] and whose code is the barcode
/// payload.
///
/// Fields may hold anything; they are only checked by the presence
/// predicates and by [`Card::encode`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BarcodeCard {
    data: CardData,
}

impl BarcodeCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(
        name: Option<impl Into<String>>,
        code: Option<impl Into<String>>,
        card_type: Option<impl Into<String>>,
    ) -> Self {
        Self {
            data: CardData::with_fields(name, code, card_type),
        }
    }

    /// The symbology named by the type tag.
    pub fn symbology(&self) -> CardResult<Symbology> {
        self.data
            .card_type()
            .ok_or_else(|| CardError::missing("type"))?
            .parse()
    }

    /// The code as it will be encoded (check digit completed, upper-cased...).
    pub fn normalized_code(&self) -> CardResult<String> {
        let code = self.data.code().ok_or_else(|| CardError::missing("code"))?;
        self.symbology()?.normalize(code)
    }
}

impl From<CardData> for BarcodeCard {
    fn from(data: CardData) -> Self {
        Self { data }
    }
}

impl From<BarcodeCard> for CardData {
    fn from(card: BarcodeCard) -> Self {
        card.data
    }
}

impl core::fmt::Display for BarcodeCard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.data, f)
    }
}

impl Card for BarcodeCard {
    type Context = RenderContext;
    type Encoded = GrayImage;

    fn data(&self) -> &CardData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut CardData {
        &mut self.data
    }

    /// A name counts once it has something other than whitespace.
    fn name_is_set(&self) -> bool {
        self.data.name().is_some_and(|n| !n.trim().is_empty())
    }

    /// A code counts when the symbology can encode it. Without a usable
    /// type, any non-blank code counts.
    fn code_is_set(&self) -> bool {
        let Some(code) = self.data.code().filter(|c| !c.trim().is_empty()) else {
            return false;
        };
        match self.symbology() {
            Ok(symbology) => symbology.accepts(code),
            Err(_) => true,
        }
    }

    fn type_is_set(&self) -> bool {
        self.symbology().is_ok()
    }

    fn encode(&self, ctx: &RenderContext, width: u32, height: u32) -> CardResult<GrayImage> {
        if width == 0 || height == 0 {
            return Err(CardError::invalid_dimensions(width, height));
        }

        let symbology = self.symbology()?;
        let code = self.data.code().ok_or_else(|| CardError::missing("code"))?;
        let modules = symbology.modules(code)?;

        tracing::debug!(
            name = self.data.name().unwrap_or_default(),
            %symbology,
            modules = modules.len(),
            width,
            height,
            "encoding card"
        );

        render::rasterize(ctx, &modules, width, height)
    }
}
