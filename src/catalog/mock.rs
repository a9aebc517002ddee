//! Mock catalog source — deterministic demo data for a category listing.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::engine::Catalog;
use super::model::{CatalogItem, Format, Language, Price, Rating};
use crate::error::Result;

/// First id handed out by the generator.
pub const FIRST_ID: u64 = 100;

/// Number of distinct mock authors.
const AUTHOR_COUNT: u64 = 8;

/// Generate `count` items for `category` (a slug such as `"science-fiction"`).
///
/// The same seed always yields the same catalog. Every generated item goes
/// through the checked `Rating` constructor, so a bad rating surfaces as
/// `Error::Catalog`.
pub fn generate(category: &str, format: Format, count: usize, seed: u64) -> Result<Catalog> {
    let mut rng = StdRng::seed_from_u64(seed);
    let heading = title_prefix(category);

    let items = (0..count as u64)
        .map(|index| -> Result<CatalogItem> {
            let mut title = format!("{heading} Book {}", index + 1);
            if format == Format::Audiobook {
                title.push_str(" (Audio Edition)");
            }

            let author_id = index % AUTHOR_COUNT + 1;
            let tenths: u8 = rng.gen_range(30..=50);
            let rating = Rating::new(f32::from(tenths) / 10.0)?;
            let price = Price::from_units(rng.gen_range(10..=49));
            let release_date = NaiveDate::from_ymd_opt(2022, rng.gen_range(1..=12), rng.gen_range(1..=28))
                .unwrap_or_default();
            let language = Language::ALL[rng.gen_range(0..Language::ALL.len())];

            let mut item = CatalogItem::new(FIRST_ID + index, title, format!("Author {author_id}"), author_id)
                .with_rating(rating)
                .with_price(price)
                .with_release_date(release_date)
                .with_language(language)
                .with_category(category)
                .with_format(format);
            if rng.gen_bool(0.5) {
                item = item.with_subcategory(format!("Subcategory {}", rng.gen_range(1..=3)));
            }
            Ok(item)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(category, %format, count = items.len(), seed, "Generated mock catalog");
    Ok(Catalog::new(items))
}

/// "science-fiction" -> "science fiction"; empty slugs become "Unknown".
fn title_prefix(category: &str) -> String {
    let words: Vec<&str> = category.split('-').filter(|w| !w.is_empty()).collect();
    if words.is_empty() {
        "Unknown".to_string()
    } else {
        words.join(" ")
    }
}
