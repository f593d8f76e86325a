//! Front-office home page.

use vitrina::{Interactor, Selector, SuiteConfig, Tab, VitrinaResult};

/// The shop's home page.
#[derive(Debug, Clone)]
pub struct HomePage {
    ui: Interactor,
}

impl HomePage {
    /// Wrap a tab.
    #[must_use]
    pub fn new(tab: &Tab) -> Self {
        Self {
            ui: Interactor::new(tab),
        }
    }

    fn home_body() -> Selector {
        Selector::css("body#index")
    }

    fn language_selector() -> Selector {
        Selector::css("#_desktop_language_selector select")
    }

    fn sitemap_link() -> Selector {
        Selector::css(".links a[href*='sitemap']")
    }

    /// Navigate to the front-office base URL.
    pub async fn open(&self, config: &SuiteConfig) -> VitrinaResult<()> {
        self.ui.goto_and_wait(&config.fo_url("")).await
    }

    /// Whether the tab currently shows the home page.
    pub async fn is_home_page(&self) -> bool {
        self.ui.element_visible(&Self::home_body(), 3000).await
    }

    /// Switch the shop language; `language` is the option's visible text
    /// (e.g. `English`).
    pub async fn change_language(&self, language: &str) -> VitrinaResult<()> {
        self.ui
            .select_by_visible_text(&Self::language_selector(), language)
            .await?;
        self.ui
            .tab()
            .driver()
            .wait_for_navigation(&vitrina::NavigationOptions::default())
            .await
    }

    /// Follow the footer link to the sitemap.
    pub async fn go_to_sitemap(&self) -> VitrinaResult<()> {
        self.ui
            .click_and_wait_for_navigation(&Self::sitemap_link())
            .await
    }
}
