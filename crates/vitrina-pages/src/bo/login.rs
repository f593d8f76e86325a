//! Back-office login screen.

use crate::identity::PageIdentity;
use vitrina::{Interactor, Selector, SuiteConfig, Tab, VitrinaResult};

/// The login screen.
#[derive(Debug, Clone)]
pub struct LoginPage {
    ui: Interactor,
}

impl LoginPage {
    /// Title rendered by the login screen.
    pub const PAGE_TITLE: &'static str = "Log in";

    /// Wrap a tab.
    #[must_use]
    pub fn new(tab: &Tab) -> Self {
        Self {
            ui: Interactor::new(tab),
        }
    }

    fn email_input() -> Selector {
        Selector::css("#email")
    }

    fn password_input() -> Selector {
        Selector::css("#passwd")
    }

    fn submit_button() -> Selector {
        Selector::css("#submit_login")
    }

    /// Navigate to the back-office login URL.
    pub async fn open(&self, config: &SuiteConfig) -> VitrinaResult<()> {
        self.ui.goto_and_wait(&config.bo_url("")).await
    }

    /// Whether the login form is on screen.
    pub async fn is_displayed(&self) -> bool {
        self.ui.element_visible(&Self::submit_button(), 3000).await
    }

    /// Fill the credentials and submit; waits for the dashboard navigation.
    pub async fn login(&self, email: &str, password: &str) -> VitrinaResult<()> {
        self.ui.set_value(&Self::email_input(), email).await?;
        self.ui.set_value(&Self::password_input(), password).await?;
        self.ui
            .click_and_wait_for_navigation(&Self::submit_button())
            .await
    }
}

impl PageIdentity for LoginPage {
    fn expected_title(&self) -> &'static str {
        Self::PAGE_TITLE
    }
}
