//! Catalog data model — items, ratings, prices, languages.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Unique, immutable catalog item identifier.
pub type ItemId = u64;

/// Star rating in `0.0..=5.0`, stored in tenths of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Rating(u8);

impl Rating {
    pub const MAX: Rating = Rating(50);

    /// Build a rating from a float, rounded to the nearest tenth.
    ///
    /// Rounding never crosses a whole star: 4.95 is stored as 4.9, so
    /// `stars()` stays `floor(value)`.
    pub fn new(value: f32) -> Result<Self, CatalogError> {
        if !value.is_finite() || !(0.0..=5.0).contains(&value) {
            return Err(CatalogError::RatingOutOfRange { value });
        }
        let whole = value.floor() * 10.0;
        let tenths = (value * 10.0).round().min(whole + 9.0);
        Ok(Self(tenths as u8))
    }

    /// Whole stars, i.e. `floor(rating)`.
    pub fn stars(self) -> u8 {
        self.0 / 10
    }

    pub fn tenths(self) -> u8 {
        self.0
    }

    pub fn as_f32(self) -> f32 {
        f32::from(self.0) / 10.0
    }
}

impl TryFrom<f32> for Rating {
    type Error = CatalogError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f32 {
    fn from(rating: Rating) -> Self {
        rating.as_f32()
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// Non-negative currency amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Result<Self, CatalogError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(CatalogError::NegativePrice { value: amount });
        }
        Ok(Self(amount))
    }

    /// Whole-currency price; never fails.
    pub fn from_units(units: u32) -> Self {
        Self(Decimal::from(units))
    }

    pub fn amount(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = CatalogError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// Languages a catalog item can be published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    French,
    Spanish,
    German,
    Arabic,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Self::English,
        Self::French,
        Self::Spanish,
        Self::German,
        Self::Arabic,
    ];
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::English => write!(f, "English"),
            Self::French => write!(f, "French"),
            Self::Spanish => write!(f, "Spanish"),
            Self::German => write!(f, "German"),
            Self::Arabic => write!(f, "Arabic"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = CatalogError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "french" | "fr" => Ok(Self::French),
            "spanish" | "es" => Ok(Self::Spanish),
            "german" | "de" => Ok(Self::German),
            "arabic" | "ar" => Ok(Self::Arabic),
            _ => Err(CatalogError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Publication format of a work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    #[default]
    Ebook,
    Audiobook,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ebook => write!(f, "ebook"),
            Self::Audiobook => write!(f, "audiobook"),
        }
    }
}

/// One purchasable work (ebook or audiobook) shown in listings.
///
/// Items are built once when a catalog is loaded and never mutated after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    pub author_name: String,
    pub author_id: u64,
    pub rating: Rating,
    pub price: Price,
    pub release_date: NaiveDate,
    pub language: Language,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub format: Format,
}

impl CatalogItem {
    /// Create an item with a zero rating, zero price, English language and
    /// an unset (epoch) release date. Use the `with_*` methods to fill in
    /// the rest.
    pub fn new(
        id: ItemId,
        title: impl Into<String>,
        author_name: impl Into<String>,
        author_id: u64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author_name: author_name.into(),
            author_id,
            rating: Rating::default(),
            price: Price::ZERO,
            release_date: NaiveDate::default(),
            language: Language::English,
            category: String::new(),
            subcategory: None,
            format: Format::Ebook,
        }
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_price(mut self, price: Price) -> Self {
        self.price = price;
        self
    }

    pub fn with_release_date(mut self, date: NaiveDate) -> Self {
        self.release_date = date;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn is_audio(&self) -> bool {
        self.format == Format::Audiobook
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rating_rounds_to_tenths() {
        assert_eq!(Rating::new(4.54).unwrap().tenths(), 45);
        assert_eq!(Rating::new(4.56).unwrap().tenths(), 46);
        assert_eq!(Rating::new(5.0).unwrap(), Rating::MAX);
    }

    #[test]
    fn rating_rounding_stops_below_next_star() {
        let rating = Rating::new(4.95).unwrap();
        assert_eq!(rating.stars(), 4);
        assert_eq!(rating.tenths(), 49);
        assert_eq!(Rating::new(3.999).unwrap().stars(), 3);
        assert_eq!(Rating::new(2.96).unwrap().to_string(), "2.9");

        let parsed: Rating = serde_json::from_str("4.97").unwrap();
        assert_eq!(parsed.stars(), 4);
    }

    #[test]
    fn rating_stars_is_floor() {
        assert_eq!(Rating::new(4.9).unwrap().stars(), 4);
        assert_eq!(Rating::new(3.0).unwrap().stars(), 3);
        assert_eq!(Rating::new(0.4).unwrap().stars(), 0);
    }

    #[test]
    fn rating_rejects_out_of_range() {
        assert!(Rating::new(-0.1).is_err());
        assert!(Rating::new(5.1).is_err());
        assert!(Rating::new(f32::NAN).is_err());
    }

    #[test]
    fn rating_serializes_as_float() {
        let rating = Rating::new(4.5).unwrap();
        assert_eq!(serde_json::to_string(&rating).unwrap(), "4.5");
        let parsed: Rating = serde_json::from_str("3.2").unwrap();
        assert_eq!(parsed.to_string(), "3.2");
        assert!(serde_json::from_str::<Rating>("7.0").is_err());
    }

    #[test]
    fn price_rejects_negative() {
        assert!(Price::new(dec!(-1.00)).is_err());
        assert!(Price::new(dec!(0)).is_ok());
        assert_eq!(Price::new(dec!(12.5)).unwrap().to_string(), "$12.50");
    }

    #[test]
    fn price_serializes_as_string() {
        let json = serde_json::to_string(&Price::from_units(10)).unwrap();
        assert_eq!(json, "\"10\"");
        assert!(serde_json::from_str::<Price>("\"-3\"").is_err());
    }

    #[test]
    fn language_parses_names_and_codes() {
        assert_eq!("French".parse::<Language>().unwrap(), Language::French);
        assert_eq!("ar".parse::<Language>().unwrap(), Language::Arabic);
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn builder_sets_fields() {
        let item = CatalogItem::new(1, "Dune", "Frank Herbert", 7)
            .with_format(Format::Audiobook)
            .with_subcategory("Classics")
            .with_language(Language::German);
        assert!(item.is_audio());
        assert_eq!(item.subcategory.as_deref(), Some("Classics"));
        assert_eq!(item.language, Language::German);
    }
}
