use scraper::{ElementRef, Html};
use url::Url;

use super::locator::{default_locators, ListingLocator};
use super::raw::{FieldSelectors, RawListing};
use super::record::extract_record;
use crate::domains::listings::models::job_record::JobRecord;

/// Parses one search results page into job records.
pub struct ListingPageParser {
    locators: Vec<Box<dyn ListingLocator>>,
    fields: FieldSelectors,
    base_url: Url,
    contract_keywords: Vec<String>,
}

impl ListingPageParser {
    pub fn new(base_url: Url, contract_keywords: Vec<String>) -> Self {
        Self {
            locators: default_locators(),
            fields: FieldSelectors::default(),
            base_url,
            contract_keywords,
        }
    }

    /// Replace the ranked locator list.
    pub fn with_locators(mut self, locators: Vec<Box<dyn ListingLocator>>) -> Self {
        self.locators = locators;
        self
    }

    /// Fragments from the first locator that finds any, with that locator's name.
    fn locate<'a>(&self, document: &'a Html) -> Option<(&str, Vec<ElementRef<'a>>)> {
        self.locators.iter().find_map(|locator| {
            let fragments = locator.locate(document);
            (!fragments.is_empty()).then(|| (locator.name(), fragments))
        })
    }

    /// Records on the page, in document order.
    ///
    /// An empty result means the page is exhausted: either no locator matched
    /// or every fragment lacked a usable link.
    pub fn parse(&self, html: &str) -> Vec<JobRecord> {
        let document = Html::parse_document(html);

        let Some((strategy, fragments)) = self.locate(&document) else {
            tracing::debug!("No listing container matched any locator");
            return Vec::new();
        };

        let found = fragments.len();
        let records: Vec<JobRecord> = fragments
            .into_iter()
            .map(|fragment| RawListing::from_fragment(fragment, &self.fields))
            .filter_map(|raw| extract_record(raw, &self.base_url, &self.contract_keywords))
            .collect();

        tracing::debug!(
            strategy,
            fragments = found,
            records = records.len(),
            "Parsed results page"
        );

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchSettings;
    use crate::domains::listings::extraction::locator::CssLocator;

    fn parser() -> ListingPageParser {
        ListingPageParser::new(
            Url::parse("https://fr.indeed.com").unwrap(),
            SearchSettings::default().contract_keywords,
        )
    }

    #[test]
    fn test_tap_item_cards_preferred() {
        let html = r#"<html><body>
            <a class="tapItem" href="/rc/clk?jk=1"><h2>Opérateur de saisie</h2>
               <span class="companyName">Acme</span>
               <div class="companyLocation">Rennes</div></a>
            <article><a href="/rc/clk?jk=99">ignored</a></article>
        </body></html>"#;

        let records = parser().parse(html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].link, "https://fr.indeed.com/rc/clk?jk=1");
        assert_eq!(records[0].company, "Acme");
    }

    #[test]
    fn test_falls_back_to_beacon_then_article() {
        let beacon = r#"<div class="job_seen_beacon"><a href="/viewjob?jk=2">Saisie</a></div>"#;
        let records = parser().parse(beacon);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Saisie");

        let article = r#"<article><h2>Data entry</h2><a href="/viewjob?jk=3">x</a></article>"#;
        let records = parser().parse(article);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Data entry");
        assert_eq!(records[0].link, "https://fr.indeed.com/viewjob?jk=3");
    }

    #[test]
    fn test_empty_heading_does_not_take_card_text() {
        let html = r#"<a class="tapItem" href="/rc/clk?jk=8"><h2></h2>
            <span class="companyName">Acme</span> Rennes</a>"#;
        let records = parser().parse(html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "");
        assert_eq!(records[0].company, "Acme");
    }

    #[test]
    fn test_no_container_is_empty() {
        assert!(parser().parse("<html><body><p>Aucun résultat</p></body></html>").is_empty());
    }

    #[test]
    fn test_linkless_fragments_dropped() {
        let html = r#"<article><h2>Sans lien</h2></article>
                      <article><h2>Avec lien</h2><a href="/viewjob?jk=4">x</a></article>"#;
        let records = parser().parse(html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Avec lien");
    }

    #[test]
    fn test_custom_locators() {
        let parser = parser().with_locators(vec![Box::new(
            CssLocator::new("result rows", "li.result").unwrap(),
        )]);
        let html = r#"<ul><li class="result"><a href="/j/1">One</a></li>
                      <li class="result"><a href="/j/2">Two</a></li></ul>"#;
        let titles: Vec<String> = parser.parse(html).into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }
}
