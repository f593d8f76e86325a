//! Shop Parameters > General.
//!
//! The preferences form, including the switch that controls whether brands
//! show in the front office.

use crate::bo::shell::BoShell;
use crate::identity::PageIdentity;
use vitrina::{Interactor, Selector, Tab, VitrinaResult};

/// The general shop-parameters form.
#[derive(Debug, Clone)]
pub struct GeneralPage {
    ui: Interactor,
    shell: BoShell,
}

impl GeneralPage {
    /// Title rendered by the screen.
    pub const PAGE_TITLE: &'static str = "Preferences";

    /// Status message after a successful save.
    pub const SUCCESSFUL_UPDATE_MESSAGE: &'static str =
        crate::bo::shell::SUCCESSFUL_UPDATE_MESSAGE;

    /// Wrap a tab.
    #[must_use]
    pub fn new(tab: &Tab) -> Self {
        Self {
            ui: Interactor::new(tab),
            shell: BoShell::new(tab),
        }
    }

    /// The common back-office chrome.
    #[must_use]
    pub const fn shell(&self) -> &BoShell {
        &self.shell
    }

    /// The rendered page header text.
    pub async fn page_title(&self) -> VitrinaResult<String> {
        self.shell.page_title().await
    }

    // The display-brands switch renders as two radio labels; `1` enables.
    fn display_brands_choice(enable: bool) -> Selector {
        let value = u8::from(enable);
        Selector::css(format!(
            "label[for='form_display_manufacturers_{value}']"
        ))
    }

    fn save_button() -> Selector {
        Selector::css("#form-preferences-save-button")
    }

    /// Flip the display-brands switch, save, and return the resulting
    /// status-message text for the caller to assert against.
    pub async fn set_display_brands(&self, enable: bool) -> VitrinaResult<String> {
        self.ui.click(&Self::display_brands_choice(enable)).await?;
        self.ui
            .click_and_wait_for_navigation(&Self::save_button())
            .await?;
        self.shell.success_alert_text().await
    }
}

impl PageIdentity for GeneralPage {
    fn expected_title(&self) -> &'static str {
        Self::PAGE_TITLE
    }
}
