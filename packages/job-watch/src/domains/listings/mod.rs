pub mod extraction;
pub mod filter;
pub mod fingerprint_store;
pub mod models;
pub mod notification;

pub use extraction::{
    default_locators, extract_record, infer_contract, CssLocator, FieldSelectors,
    ListingLocator, ListingPageParser, RawListing,
};
pub use filter::{filter_eligible, mentions_remote, FilterPolicy};
pub use fingerprint_store::FingerprintStore;
pub use models::job_record::{ContractTag, JobRecord};
pub use models::search_query::SearchQuery;
pub use notification::{format_job_message, notify_job};
