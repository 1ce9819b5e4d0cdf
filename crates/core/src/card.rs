//! The card value object and the contract every card kind fulfils.
//!
//! `CardData` holds the state every card shares (name, code, type, expiry).
//! Concrete card kinds wrap it and implement [`Card`], which adds the
//! kind-specific parts: what counts as a "set" field and how the card is
//! rendered.
//!
//! Nothing here is synchronized. A card is owned by one logical owner at a
//! time; sharing one across threads for mutation needs an outer lock.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::date::CardDate;
use crate::error::CardResult;
use crate::value_object::ValueObject;

const HASH_SEED: i32 = 17;
const HASH_MULTIPLIER: i32 = 31;

/// Base card state.
///
/// No field implies another and none is validated here. The expiration date
/// is stored by value and only ever leaves as a copy.
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
pub struct CardData {
    name: Option<String>,
    code: Option<String>,
    #[serde(rename = "type")]
    card_type: Option<String>,
    date: Option<CardDate>,
}

impl ValueObject for CardData {}

impl CardData {
    /// A card with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// A card with name, code and type seeded; the date stays absent.
    pub fn with_fields(
        name: Option<impl Into<String>>,
        code: Option<impl Into<String>>,
        card_type: Option<impl Into<String>>,
    ) -> Self {
        Self {
            name: name.map(Into::into),
            code: code.map(Into::into),
            card_type: card_type.map(Into::into),
            date: None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The barcode value.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The barcode symbology tag.
    pub fn card_type(&self) -> Option<&str> {
        self.card_type.as_deref()
    }

    /// A copy of the expiration date, if any.
    pub fn date(&self) -> Option<CardDate> {
        self.date
    }

    pub fn set_name(&mut self, name: Option<impl Into<String>>) {
        self.name = name.map(Into::into);
    }

    pub fn set_code(&mut self, code: Option<impl Into<String>>) {
        self.code = code.map(Into::into);
    }

    pub fn set_card_type(&mut self, card_type: Option<impl Into<String>>) {
        self.card_type = card_type.map(Into::into);
    }

    /// Set the expiration date from raw components.
    ///
    /// `month` is 1-based. Components are stored as given; checking them is
    /// up to the caller or the card kind.
    pub fn set_date_ymd(&mut self, year: i32, month: u32, day: u32) {
        let date = CardDate::new(year, month, day);
        if !date.is_valid() {
            tracing::trace!(%date, "stored expiration date is not a calendar day");
        }
        self.date = Some(date);
    }

    /// Copy the year, month and day of `date` into the card, or clear the
    /// date on `None`. Anything finer than a day is dropped.
    ///
    /// A bare `None` needs the date type spelled out
    /// (`set_date(None::<&NaiveDate>)`); use [`CardData::clear_date`] to clear
    /// unconditionally.
    pub fn set_date<D: Datelike>(&mut self, date: Option<&D>) {
        match date {
            Some(d) => self.set_date_ymd(d.year(), d.month(), d.day()),
            None => self.date = None,
        }
    }

    /// Remove the expiration date; the card never expires afterwards.
    pub fn clear_date(&mut self) {
        self.date = None;
    }

    /// True iff a date is stored and it is strictly before today.
    ///
    /// The answer flips when the local calendar crosses midnight past the
    /// stored day; callers must not cache it.
    pub fn date_is_expired(&self) -> bool {
        self.expired_relative_to(CardDate::today())
    }

    /// Expiration check against an explicit "today".
    pub fn date_is_expired_at(&self, today: &impl Datelike) -> bool {
        self.expired_relative_to(CardDate::from_datelike(today))
    }

    fn expired_relative_to(&self, today: CardDate) -> bool {
        self.date.is_some_and(|d| d.is_before(&today))
    }

    /// Fold the present text fields into a 32-bit hash.
    ///
    /// Starts at 17 and folds name, code, then type with a multiplier of 31,
    /// skipping absent fields. The date never contributes. Each string is
    /// hashed over its UTF-16 code units so values match hashes produced by
    /// JVM-based card stores.
    pub fn hash_code(&self) -> i32 {
        [&self.name, &self.code, &self.card_type]
            .into_iter()
            .flatten()
            .fold(HASH_SEED, |acc, s| {
                acc.wrapping_mul(HASH_MULTIPLIER)
                    .wrapping_add(string_hash(s))
            })
    }
}

fn string_hash(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |h, unit| {
        h.wrapping_mul(HASH_MULTIPLIER).wrapping_add(i32::from(unit))
    })
}

impl PartialEq for CardData {
    fn eq(&self, other: &Self) -> bool {
        let names = self.name == other.name;
        let codes = self.code == other.code;
        let types = self.card_type == other.card_type;
        let dates = self.date == other.date;

        names && codes && types && dates
    }
}

impl core::hash::Hash for CardData {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// Informal summary, e.g. `Name:CVS Code:384038939120 Type:EAN_13`.
///
/// Absent fields are left out. Not a stable format; do not parse it.
impl core::fmt::Display for CardData {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let labelled = [
            ("Name", &self.name),
            ("Code", &self.code),
            ("Type", &self.card_type),
        ];

        let mut first = true;
        for (label, value) in labelled {
            if let Some(value) = value {
                if !first {
                    f.write_str(" ")?;
                }
                write!(f, "{label}:{value}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// A concrete kind of card.
///
/// Implementors wrap a [`CardData`] and decide two things the base state
/// cannot: when a field counts as "set" (a code may need a valid checksum,
/// a name may need to be non-blank) and how the card is drawn.
pub trait Card {
    /// Rendering environment handed in by the host. Never inspected by the
    /// base state.
    type Context: ?Sized;

    /// What `encode` produces (an image, a bitmap, a vector path...).
    type Encoded;

    fn data(&self) -> &CardData;

    fn data_mut(&mut self) -> &mut CardData;

    fn name_is_set(&self) -> bool;

    fn code_is_set(&self) -> bool;

    fn type_is_set(&self) -> bool;

    /// Render the card to fit `width` x `height`, in units defined by the
    /// context. Failure conditions are up to the card kind.
    fn encode(&self, ctx: &Self::Context, width: u32, height: u32) -> CardResult<Self::Encoded>;

    fn date_is_expired(&self) -> bool {
        self.data().date_is_expired()
    }

    /// Field-by-field comparison with any other kind of card.
    fn same_card<C>(&self, other: &C) -> bool
    where
        C: Card + ?Sized,
        Self: Sized,
    {
        self.data() == other.data()
    }
}
