use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::utils::link_fingerprint;

/// Employment-type label inferred from listing text (CDI, CDD, Intérim, ...).
///
/// Holds the configured keyword exactly as written in the settings, not the
/// spelling found in the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractTag(String);

impl ContractTag {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self(keyword.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One posting observed during a cycle.
///
/// Records are rebuilt from the search page on every cycle; only `id`
/// outlives the cycle, through the fingerprint store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub summary: String,
    pub link: String,
    pub contract: Option<ContractTag>,
}

impl JobRecord {
    /// Build a record, deriving `id` from the (already canonical) link.
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        summary: impl Into<String>,
        link: impl Into<String>,
        contract: Option<ContractTag>,
    ) -> Self {
        let link = link.into();
        Self {
            id: link_fingerprint(&link),
            title: title.into(),
            company: company.into(),
            location: location.into(),
            summary: summary.into(),
            link,
            contract,
        }
    }

    /// Title, company, location and summary joined by spaces.
    pub fn searchable_text(&self) -> String {
        [
            self.title.as_str(),
            self.company.as_str(),
            self.location.as_str(),
            self.summary.as_str(),
        ]
        .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_derived_from_link() {
        let a = JobRecord::new("A", "", "", "", "https://fr.indeed.com/viewjob?jk=1", None);
        let b = JobRecord::new(
            "B",
            "Other Co",
            "Brest",
            "different text",
            "https://fr.indeed.com/viewjob?jk=1",
            Some(ContractTag::new("CDI")),
        );
        assert_eq!(a.id, b.id);
        assert_eq!(a.id, link_fingerprint("https://fr.indeed.com/viewjob?jk=1"));
    }

    #[test]
    fn test_contract_tag_serializes_as_plain_string() {
        let json = serde_json::to_string(&ContractTag::new("Intérim")).unwrap();
        assert_eq!(json, "\"Intérim\"");
    }
}
