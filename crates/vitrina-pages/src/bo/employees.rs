//! Advanced Parameters > Team.
//!
//! The employees list is the suite's representative grid screen: filters,
//! per-row status togglers, row deletion with confirmation, and the bulk
//! enable/disable/delete menu.

use crate::bo::shell::BoShell;
use crate::grid::{GridSelectors, GridView};
use crate::identity::PageIdentity;
use vitrina::{ColumnName, Interactor, Row, Selector, Tab, VitrinaResult};

/// Columns of the employees grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeColumn {
    /// First name
    Firstname,
    /// Last name
    Lastname,
    /// Email address
    Email,
    /// Access profile
    Profile,
    /// Enabled status (the toggle column)
    Active,
}

impl ColumnName for EmployeeColumn {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Firstname => "firstname",
            Self::Lastname => "lastname",
            Self::Email => "email",
            Self::Profile => "profile",
            Self::Active => "active",
        }
    }
}

/// Which filter control a column uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Free-text input
    Input,
    /// Yes/No select
    Select,
}

/// The employees list screen.
#[derive(Debug, Clone)]
pub struct EmployeesPage {
    ui: Interactor,
    shell: BoShell,
    grid: GridView,
}

impl EmployeesPage {
    /// Title rendered by the screen.
    pub const PAGE_TITLE: &'static str = "Employees";

    /// Status message after a successful status toggle.
    pub const SUCCESSFUL_STATUS_UPDATE_MESSAGE: &'static str =
        "The status has been successfully updated.";

    /// Wrap a tab.
    #[must_use]
    pub fn new(tab: &Tab) -> Self {
        let ui = Interactor::new(tab);
        let shell = BoShell::new(tab);
        let grid = GridView::new(
            ui.clone(),
            GridSelectors::new("employee"),
            shell.success_alert_selector(),
        );
        Self { ui, shell, grid }
    }

    /// The common back-office chrome.
    #[must_use]
    pub const fn shell(&self) -> &BoShell {
        &self.shell
    }

    /// The employees grid.
    #[must_use]
    pub const fn grid(&self) -> &GridView {
        &self.grid
    }

    fn add_employee_link() -> Selector {
        Selector::css("#page-header-desc-configuration-add")
    }

    fn profiles_tab() -> Selector {
        Selector::css("#subtab-AdminProfiles")
    }

    /// The rendered page header text.
    pub async fn page_title(&self) -> VitrinaResult<String> {
        self.shell.page_title().await
    }

    /// Open the add-employee form.
    pub async fn go_to_add_employee_page(&self) -> VitrinaResult<()> {
        self.ui
            .click_and_wait_for_navigation(&Self::add_employee_link())
            .await
    }

    /// Open the edit form for one row.
    pub async fn go_to_edit_employee_page(&self, row: Row) -> VitrinaResult<()> {
        self.ui
            .click_and_wait_for_navigation(&self.grid.selectors().edit_link(row))
            .await
    }

    /// Switch to the Profiles tab.
    pub async fn go_to_profiles_page(&self) -> VitrinaResult<()> {
        self.ui
            .click_and_wait_for_navigation(&Self::profiles_tab())
            .await
    }

    /// Row count read from the grid header.
    pub async fn grid_row_count(&self) -> VitrinaResult<u32> {
        self.grid.count_from_header().await
    }

    /// Reset any active filters, then read the row count.
    pub async fn reset_and_count(&self) -> VitrinaResult<u32> {
        self.grid.reset_and_count().await
    }

    /// Text of one cell.
    pub async fn text_at(&self, row: Row, column: EmployeeColumn) -> VitrinaResult<String> {
        self.grid.text_at(row, column).await
    }

    /// Filter the list by one column.
    ///
    /// `Input` columns take `value` verbatim; `Select` columns interpret it
    /// as a boolean (`"1"`, `"true"`, `"yes"` enable).
    pub async fn filter(
        &self,
        kind: FilterKind,
        column: EmployeeColumn,
        value: &str,
    ) -> VitrinaResult<()> {
        match kind {
            FilterKind::Input => self.grid.filter_by_input(column, value).await,
            FilterKind::Select => {
                let enabled = matches!(value.trim(), "1" | "true" | "yes" | "Yes");
                self.grid.filter_by_select(column, enabled).await
            }
        }
    }

    /// Current state of a row's status toggler.
    pub async fn status(&self, row: Row) -> bool {
        self.grid.toggle_state(row, EmployeeColumn::Active).await
    }

    /// Drive a row's status toggler to `wanted`; returns whether a change
    /// occurred.
    pub async fn set_status(&self, row: Row, wanted: bool) -> VitrinaResult<bool> {
        self.grid.set_toggle(row, EmployeeColumn::Active, wanted).await
    }

    /// Delete one employee via the row's actions dropdown; returns the
    /// resulting status-message text.
    pub async fn delete_employee(&self, row: Row) -> VitrinaResult<String> {
        self.grid.delete_row(row).await
    }

    /// Enable or disable all listed employees via bulk actions; returns the
    /// resulting status-message text.
    pub async fn bulk_set_status(&self, enable: bool) -> VitrinaResult<String> {
        self.grid.bulk_set_enabled(enable).await
    }

    /// Delete all listed employees via bulk actions; returns the resulting
    /// status-message text.
    pub async fn bulk_delete(&self) -> VitrinaResult<String> {
        self.grid.bulk_delete().await
    }
}

impl PageIdentity for EmployeesPage {
    fn expected_title(&self) -> &'static str {
        Self::PAGE_TITLE
    }
}
