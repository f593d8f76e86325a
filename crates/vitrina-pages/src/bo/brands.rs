//! Catalog > Brands & Suppliers.

use crate::bo::shell::BoShell;
use crate::grid::{GridSelectors, GridView};
use crate::identity::PageIdentity;
use vitrina::{Interactor, Selector, Tab, VitrinaResult};

/// The brands list screen.
///
/// When the display-brands preference is off, the screen keeps working but
/// shows an informational alert naming the pending action word.
#[derive(Debug, Clone)]
pub struct BrandsPage {
    ui: Interactor,
    shell: BoShell,
    grid: GridView,
}

impl BrandsPage {
    /// Title rendered by the screen.
    pub const PAGE_TITLE: &'static str = "Brands";

    /// Wrap a tab.
    #[must_use]
    pub fn new(tab: &Tab) -> Self {
        let ui = Interactor::new(tab);
        let shell = BoShell::new(tab);
        let grid = GridView::new(
            ui.clone(),
            GridSelectors::new("manufacturer"),
            shell.success_alert_selector(),
        );
        Self { ui, shell, grid }
    }

    /// The common back-office chrome.
    #[must_use]
    pub const fn shell(&self) -> &BoShell {
        &self.shell
    }

    /// The brands grid.
    #[must_use]
    pub const fn grid(&self) -> &GridView {
        &self.grid
    }

    fn info_alert() -> Selector {
        Selector::css("div.alert-info p.alert-text")
    }

    /// The rendered page header text.
    pub async fn page_title(&self) -> VitrinaResult<String> {
        self.shell.page_title().await
    }

    /// Text of the informational alert about the display-brands preference.
    pub async fn alert_text(&self) -> VitrinaResult<String> {
        self.ui.text_content(&Self::info_alert()).await
    }

    /// Row count read from the grid header.
    pub async fn grid_row_count(&self) -> VitrinaResult<u32> {
        self.grid.count_from_header().await
    }

    /// Open the front office in a new tab.
    pub async fn view_my_shop(&self) -> VitrinaResult<Tab> {
        self.shell.view_my_shop().await
    }
}

impl PageIdentity for BrandsPage {
    fn expected_title(&self) -> &'static str {
        Self::PAGE_TITLE
    }
}
