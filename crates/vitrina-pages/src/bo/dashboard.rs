//! Back-office dashboard.

use crate::bo::shell::BoShell;
use crate::identity::PageIdentity;
use vitrina::{Interactor, Selector, Tab, VitrinaResult};

/// The dashboard, the landing screen after login.
#[derive(Debug, Clone)]
pub struct DashboardPage {
    ui: Interactor,
    shell: BoShell,
}

impl DashboardPage {
    /// Title rendered by the dashboard.
    pub const PAGE_TITLE: &'static str = "Dashboard";

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

    /// Whether the dashboard content is on screen.
    pub async fn is_displayed(&self) -> bool {
        self.ui
            .element_visible(&Selector::css("#dashboard"), 3000)
            .await
    }
}

impl PageIdentity for DashboardPage {
    fn expected_title(&self) -> &'static str {
        Self::PAGE_TITLE
    }
}
