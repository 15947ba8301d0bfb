//! Region / remote / contract eligibility.
//!
//! Pure functions over a batch of records: no I/O, same input and policy
//! always give the same output.

use super::models::job_record::JobRecord;
use super::models::search_query::SearchQuery;
use crate::config::SearchSettings;

/// Switches for one filtering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPolicy {
    pub accept_contract_filter: bool,
    /// Remote listings are admitted even outside the target region.
    pub accept_remote: bool,
}

impl FilterPolicy {
    pub fn regional() -> Self {
        Self {
            accept_contract_filter: true,
            accept_remote: false,
        }
    }

    pub fn remote() -> Self {
        Self {
            accept_contract_filter: true,
            accept_remote: true,
        }
    }

    /// Policy for the results of `query`: remote queries admit remote listings.
    pub fn for_query(query: &SearchQuery) -> Self {
        if query.remote {
            Self::remote()
        } else {
            Self::regional()
        }
    }
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles
        .iter()
        .any(|needle| haystack.contains(&needle.to_lowercase()))
}

fn is_remote(location: &str, text: &str, markers: &[String]) -> bool {
    contains_any(location, markers) || contains_any(text, markers)
}

fn in_region(location: &str, text: &str, cities: &[String]) -> bool {
    contains_any(location, cities) || contains_any(text, cities)
}

/// Whether the record's location or summary itself mentions remote work.
///
/// Stricter than the filter's remote check, which also looks at the title:
/// the remote sweep searches with a remote qualifier, so titles echoing the
/// query are not trusted on their own.
pub fn mentions_remote(record: &JobRecord, markers: &[String]) -> bool {
    let text = format!("{} {}", record.location, record.summary).to_lowercase();
    contains_any(&text, markers)
}

fn passes_contract_gate(record: &JobRecord, settings: &SearchSettings) -> bool {
    let Some(contract) = &record.contract else {
        // Many listings never state a contract type.
        return true;
    };

    let tag = contract.as_str().to_uppercase();
    let accepted = settings
        .accepted_contracts
        .iter()
        .any(|kw| tag.contains(&kw.to_uppercase()));
    if accepted {
        return true;
    }

    contains_any(
        &record.summary.to_lowercase(),
        &settings.summary_contract_keywords,
    )
}

/// Records passing the locality gate and, when enabled, the contract gate.
/// Order is preserved.
pub fn filter_eligible(
    records: Vec<JobRecord>,
    settings: &SearchSettings,
    policy: FilterPolicy,
) -> Vec<JobRecord> {
    records
        .into_iter()
        .filter(|record| {
            let location = record.location.to_lowercase();
            let text = format!("{} {}", record.title, record.summary).to_lowercase();

            let remote = is_remote(&location, &text, &settings.remote_markers);
            let regional = in_region(&location, &text, &settings.cities);

            let locality_ok = (policy.accept_remote && remote) || regional;
            if !locality_ok {
                return false;
            }

            !policy.accept_contract_filter || passes_contract_gate(record, settings)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::listings::models::job_record::ContractTag;

    fn record(title: &str, location: &str, summary: &str, contract: Option<&str>) -> JobRecord {
        JobRecord::new(
            title,
            "Acme",
            location,
            summary,
            format!("https://fr.indeed.com/viewjob?jk={title}{location}{summary}"),
            contract.map(ContractTag::new),
        )
    }

    fn settings() -> SearchSettings {
        SearchSettings::default()
    }

    #[test]
    fn test_regional_record_kept() {
        let records = vec![record("Opérateur de saisie", "Rennes", "", None)];
        let kept = filter_eligible(records.clone(), &settings(), FilterPolicy::regional());
        assert_eq!(kept, records);
    }

    #[test]
    fn test_region_matched_case_insensitively_in_text() {
        let records = vec![record("Saisie - poste basé à QUIMPER", "", "", None)];
        let kept = filter_eligible(records, &settings(), FilterPolicy::regional());
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_out_of_region_rejected() {
        let records = vec![record("Saisie", "Lyon", "Bureau en centre-ville", None)];
        assert!(filter_eligible(records, &settings(), FilterPolicy::regional()).is_empty());
    }

    #[test]
    fn test_remote_outside_region_needs_remote_policy() {
        let records = vec![record("Saisie", "Paris", "Poste en télétravail", None)];

        let regional = filter_eligible(records.clone(), &settings(), FilterPolicy::regional());
        assert!(regional.is_empty());

        let remote = filter_eligible(records, &settings(), FilterPolicy::remote());
        assert_eq!(remote.len(), 1);
    }

    #[test]
    fn test_remote_marker_variants() {
        for summary in ["TELETRAVAIL complet", "Full Remote", "Télétravail partiel"] {
            let records = vec![record("Saisie", "Lille", summary, None)];
            let kept = filter_eligible(records, &settings(), FilterPolicy::remote());
            assert_eq!(kept.len(), 1, "summary {summary:?} should count as remote");
        }
    }

    #[test]
    fn test_remote_marker_in_location() {
        let records = vec![record("Saisie", "Télétravail à Lyon", "", None)];
        let kept = filter_eligible(records, &settings(), FilterPolicy::remote());
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_untagged_record_passes_contract_gate() {
        let records = vec![record("Saisie", "Brest", "", None)];
        for accept_contract_filter in [true, false] {
            let policy = FilterPolicy {
                accept_contract_filter,
                accept_remote: false,
            };
            assert_eq!(filter_eligible(records.clone(), &settings(), policy).len(), 1);
        }
    }

    #[test]
    fn test_unaccepted_contract_rejected_unless_summary_rescues() {
        let strict = settings().with_accepted_contracts(vec!["CDI".into()]);

        let rejected = vec![record("Saisie", "Vannes", "Mission courte", Some("Contrat"))];
        assert!(filter_eligible(rejected, &strict, FilterPolicy::regional()).is_empty());

        let rescued = vec![record("Saisie", "Vannes", "Contrat en CDD", Some("Contrat"))];
        assert_eq!(
            filter_eligible(rescued, &strict, FilterPolicy::regional()).len(),
            1
        );

        let accepted = vec![record("Saisie", "Vannes", "", Some("CDI"))];
        assert_eq!(
            filter_eligible(accepted, &strict, FilterPolicy::regional()).len(),
            1
        );
    }

    #[test]
    fn test_contract_gate_skipped_when_disabled() {
        let strict = settings().with_accepted_contracts(vec!["CDI".into()]);
        let records = vec![record("Saisie", "Vannes", "", Some("Contrat"))];
        let policy = FilterPolicy {
            accept_contract_filter: false,
            accept_remote: false,
        };
        assert_eq!(filter_eligible(records, &strict, policy).len(), 1);
    }

    #[test]
    fn test_order_preserved_and_idempotent() {
        let records = vec![
            record("A", "Rennes", "", None),
            record("B", "Lyon", "", None),
            record("C", "Nantes", "", Some("CDD")),
            record("D", "Paris", "remote", None),
        ];

        let once = filter_eligible(records, &settings(), FilterPolicy::remote());
        let titles: Vec<&str> = once.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C", "D"]);

        let twice = filter_eligible(once.clone(), &settings(), FilterPolicy::remote());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_policy_follows_query_kind() {
        assert_eq!(
            FilterPolicy::for_query(&SearchQuery::regional("saisie", "Rennes")),
            FilterPolicy::regional()
        );
        assert_eq!(
            FilterPolicy::for_query(&SearchQuery::remote("saisie télétravail", "France")),
            FilterPolicy::remote()
        );
    }

    #[test]
    fn test_mentions_remote_ignores_title() {
        let markers = settings().remote_markers;
        assert!(!mentions_remote(
            &record("Saisie télétravail", "Paris", "", None),
            &markers
        ));
        assert!(mentions_remote(
            &record("Saisie", "Paris", "100% Télétravail", None),
            &markers
        ));
    }
}
