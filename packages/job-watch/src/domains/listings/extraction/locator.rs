use scraper::{ElementRef, Html, Selector};

/// A strategy for finding listing fragments in a parsed results page.
///
/// The job board's markup drifts without notice, so several strategies are
/// kept in rank order and the first one that finds anything wins.
pub trait ListingLocator: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    /// Every listing fragment this strategy recognises, in document order.
    fn locate<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>>;
}

/// Locator backed by a single CSS selector.
#[derive(Debug)]
pub struct CssLocator {
    name: String,
    selector: Selector,
}

impl CssLocator {
    /// Returns `None` when `css` is not a valid selector.
    pub fn new(name: impl Into<String>, css: &str) -> Option<Self> {
        Selector::parse(css).ok().map(|selector| Self {
            name: name.into(),
            selector,
        })
    }
}

impl ListingLocator for CssLocator {
    fn name(&self) -> &str {
        &self.name
    }

    fn locate<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        document.select(&self.selector).collect()
    }
}

/// The job board's card layouts, newest markup first.
pub fn default_locators() -> Vec<Box<dyn ListingLocator>> {
    [
        ("tap-item cards", "a.tapItem"),
        ("job-seen beacons", "div.job_seen_beacon a"),
        ("article elements", "article"),
    ]
    .into_iter()
    .filter_map(|(name, css)| CssLocator::new(name, css))
    .map(|locator| Box::new(locator) as Box<dyn ListingLocator>)
    .collect()
}
