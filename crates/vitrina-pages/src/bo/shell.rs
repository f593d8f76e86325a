//! Common back-office chrome.
//!
//! Every BO screen shares the same surrounding chrome: the main menu, the
//! page header, the status alert block, the shop-front toolbar and the
//! view-my-shop link. Page objects compose a [`BoShell`] next to their own
//! selectors instead of inheriting these behaviors.

use vitrina::{Interactor, Selector, Tab, VitrinaResult};

/// Generic status message after a successful form save.
pub const SUCCESSFUL_UPDATE_MESSAGE: &str = "Successful update.";
/// Generic status message after a successful single deletion.
pub const SUCCESSFUL_DELETE_MESSAGE: &str = "Successful deletion.";
/// Generic status message after a successful bulk deletion.
pub const SUCCESSFUL_MULTI_DELETE_MESSAGE: &str = "The selection has been successfully deleted.";

/// Top-level main-menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoMenu {
    /// Catalog
    Catalog,
    /// Shop Parameters
    ShopParameters,
    /// Advanced Parameters
    AdvancedParameters,
}

impl BoMenu {
    /// The menu entry's locator.
    #[must_use]
    pub fn selector(self) -> Selector {
        match self {
            Self::Catalog => Selector::css("#subtab-AdminCatalog"),
            Self::ShopParameters => Selector::css("#subtab-AdminParentShopParameters"),
            Self::AdvancedParameters => Selector::css("#subtab-AdminAdvancedParameters"),
        }
    }
}

/// Sub-menu entries the suite navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoSubMenu {
    /// Shop Parameters > General
    General,
    /// Catalog > Brands & Suppliers
    BrandsAndSuppliers,
    /// Advanced Parameters > Team
    Team,
}

impl BoSubMenu {
    /// The sub-menu entry's locator.
    #[must_use]
    pub fn selector(self) -> Selector {
        match self {
            Self::General => Selector::css("#subtab-AdminParentPreferences"),
            Self::BrandsAndSuppliers => Selector::css("#subtab-AdminParentManufacturers"),
            Self::Team => Selector::css("#subtab-AdminParentEmployees"),
        }
    }
}

/// The chrome around every back-office screen.
#[derive(Debug, Clone)]
pub struct BoShell {
    ui: Interactor,
}

impl BoShell {
    /// Wrap the tab's chrome.
    #[must_use]
    pub fn new(tab: &Tab) -> Self {
        Self {
            ui: Interactor::new(tab),
        }
    }

    fn page_header() -> Selector {
        Selector::css("#main-div .page-title")
    }

    fn success_alert() -> Selector {
        Selector::css("div.alert-success p.alert-text")
    }

    fn sf_toolbar() -> Selector {
        Selector::css("div[id*='sfToolbarMainContent']")
    }

    fn sf_toolbar_hide_link() -> Selector {
        Selector::css("a[id*='hide-sf-toolbar']")
    }

    fn view_shop_link() -> Selector {
        Selector::css("#header_shopname")
    }

    /// The status alert paragraph, shared by every grid and form screen.
    #[must_use]
    pub fn success_alert_selector(&self) -> Selector {
        Self::success_alert()
    }

    /// The rendered page header text.
    pub async fn page_title(&self) -> VitrinaResult<String> {
        self.ui.text_content(&Self::page_header()).await
    }

    /// Text of the status alert block.
    pub async fn success_alert_text(&self) -> VitrinaResult<String> {
        self.ui.text_content(&Self::success_alert()).await
    }

    /// Navigate the main menu: open `parent`, then follow `child` and wait
    /// for the landing page.
    pub async fn go_to_submenu(&self, parent: BoMenu, child: BoSubMenu) -> VitrinaResult<()> {
        tracing::debug!(?parent, ?child, "submenu navigation");
        self.ui
            .click_and_wait_for_visible(&parent.selector(), &child.selector())
            .await?;
        self.ui
            .click_and_wait_for_navigation(&child.selector())
            .await
    }

    /// Dismiss the shop-front toolbar when it overlays the page. The
    /// toolbar only renders under some profiles, so it is probed first.
    pub async fn close_sf_toolbar(&self) -> VitrinaResult<()> {
        if self.ui.element_visible(&Self::sf_toolbar(), 1000).await {
            self.ui.click(&Self::sf_toolbar_hide_link()).await?;
        }
        Ok(())
    }

    /// Open the front office in a new tab and return its handle.
    pub async fn view_my_shop(&self) -> VitrinaResult<Tab> {
        self.ui.open_popup(&Self::view_shop_link()).await
    }
}
