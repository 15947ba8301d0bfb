use scraper::{ElementRef, Selector};

use crate::common::utils::collapse_whitespace;

/// Fields read straight off one listing fragment, before normalization.
///
/// Every field is independently optional; the board omits company, location
/// or snippet on a fair share of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawListing {
    /// Text of the heading, when the fragment has one.
    pub title: Option<String>,
    /// Whole fragment text, used when there is no heading.
    pub text: String,
    pub href: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
}

/// Sub-element selectors, each list tried in order.
#[derive(Debug)]
pub struct FieldSelectors {
    title: Vec<Selector>,
    link: Vec<Selector>,
    company: Vec<Selector>,
    location: Vec<Selector>,
    summary: Vec<Selector>,
}

impl Default for FieldSelectors {
    fn default() -> Self {
        Self {
            title: parse_all(&["h2"]),
            link: parse_all(&["a[href]"]),
            company: parse_all(&[".companyName", ".company"]),
            location: parse_all(&[".companyLocation", ".location"]),
            summary: parse_all(&[".job-snippet", ".summary"]),
        }
    }
}

fn parse_all(css: &[&str]) -> Vec<Selector> {
    css.iter().filter_map(|s| Selector::parse(s).ok()).collect()
}

fn first_match<'a>(fragment: &ElementRef<'a>, selectors: &[Selector]) -> Option<ElementRef<'a>> {
    selectors
        .iter()
        .find_map(|selector| fragment.select(selector).next())
}

fn element_text(element: &ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<Vec<_>>().join(" "))
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl RawListing {
    /// Read the raw fields of one fragment. Never fails; missing pieces stay `None`.
    pub fn from_fragment(fragment: ElementRef<'_>, selectors: &FieldSelectors) -> Self {
        let field = |list: &[Selector]| first_match(&fragment, list).map(|el| element_text(&el));

        // The card itself is usually the anchor; otherwise take the first link inside it.
        let href = fragment
            .value()
            .attr("href")
            .and_then(non_blank)
            .or_else(|| {
                first_match(&fragment, &selectors.link)
                    .and_then(|a| a.value().attr("href"))
                    .and_then(non_blank)
            });

        Self {
            title: field(&selectors.title),
            text: element_text(&fragment),
            href,
            company: field(&selectors.company),
            location: field(&selectors.location),
            summary: field(&selectors.summary),
        }
    }
}
