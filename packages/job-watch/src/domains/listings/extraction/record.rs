use url::Url;

use super::raw::RawListing;
use crate::domains::listings::models::job_record::{ContractTag, JobRecord};

/// Characters of fragment text kept as a title when the card has no heading.
const FALLBACK_TITLE_CHARS: usize = 80;

/// Normalize one raw listing into a record.
///
/// Returns `None` when the fragment has no link that resolves against
/// `base_url`; every other missing field becomes an empty string.
pub fn extract_record(
    raw: RawListing,
    base_url: &Url,
    contract_keywords: &[String],
) -> Option<JobRecord> {
    let href = raw.href.filter(|h| !h.trim().is_empty())?;
    let link = match base_url.join(&href) {
        Ok(link) => link,
        Err(e) => {
            tracing::debug!(href = %href, error = %e, "Dropping listing with unresolvable link");
            return None;
        }
    };

    // An empty heading is still a heading: only a missing one falls back.
    let title = raw
        .title
        .unwrap_or_else(|| raw.text.chars().take(FALLBACK_TITLE_CHARS).collect());

    let mut record = JobRecord::new(
        title,
        raw.company.unwrap_or_default(),
        raw.location.unwrap_or_default(),
        raw.summary.unwrap_or_default(),
        link.to_string(),
        None,
    );
    record.contract = infer_contract(&record.searchable_text(), contract_keywords);

    Some(record)
}

/// First keyword (in list order) found anywhere in `text`, case-insensitively.
///
/// Overlapping spellings such as "Intérim" and "Interim" are both listed;
/// whichever comes first in `keywords` wins.
pub fn infer_contract(text: &str, keywords: &[String]) -> Option<ContractTag> {
    let haystack = text.to_uppercase();
    keywords
        .iter()
        .find(|kw| haystack.contains(&kw.to_uppercase()))
        .map(|kw| ContractTag::new(kw.as_str()))
}
