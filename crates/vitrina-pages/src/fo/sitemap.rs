//! Front-office sitemap page.

use crate::identity::PageIdentity;
use vitrina::{Interactor, Selector, Tab, VitrinaResult};

/// The sitemap, listing every reachable shop section.
#[derive(Debug, Clone)]
pub struct SiteMapPage {
    ui: Interactor,
}

impl SiteMapPage {
    /// Title rendered by the page.
    pub const PAGE_TITLE: &'static str = "Sitemap";

    /// Wrap a tab.
    #[must_use]
    pub fn new(tab: &Tab) -> Self {
        Self {
            ui: Interactor::new(tab),
        }
    }

    fn page_header() -> Selector {
        Selector::css("#main h1")
    }

    fn brands_link() -> Selector {
        Selector::css(".sitemap a[href*='manufacturer']")
    }

    /// The rendered page header text.
    pub async fn page_title(&self) -> VitrinaResult<String> {
        self.ui.text_content(&Self::page_header()).await
    }

    /// Whether the brands section link is present. Probe only: absence is a
    /// legitimate outcome, not a failure.
    pub async fn is_brands_link_visible(&self) -> bool {
        self.ui.element_visible(&Self::brands_link(), 2000).await
    }
}

impl PageIdentity for SiteMapPage {
    fn expected_title(&self) -> &'static str {
        Self::PAGE_TITLE
    }
}
