//! Catalog browsing — item model, filter criteria, and the filter/sort engine
//! behind the category listing pages.

pub mod criteria;
pub mod engine;
pub mod mock;
pub mod model;
pub mod page;

pub use criteria::{FilterCriteria, PriceRange, SortKey};
pub use engine::{Catalog, apply, price_bounds, reset};
pub use model::{CatalogItem, Format, ItemId, Language, Price, Rating};
pub use page::{Page, paginate};
