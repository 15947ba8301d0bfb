//! Turning a search results page into job records.
//!
//! ```text
//! HTML ──► ListingLocator (ranked, first non-empty wins)
//!            └─► RawListing per fragment (every field optional)
//!                  └─► extract_record ──► JobRecord (or dropped: no link)
//! ```

pub mod locator;
pub mod page;
pub mod raw;
pub mod record;

pub use locator::{default_locators, CssLocator, ListingLocator};
pub use page::ListingPageParser;
pub use raw::{FieldSelectors, RawListing};
pub use record::{extract_record, infer_contract};
