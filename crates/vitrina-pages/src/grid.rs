//! The back-office list grid.
//!
//! Every BO list screen renders the same grid component under a
//! screen-specific name (`employee`, `manufacturer`, ...): a panel with a
//! counted header, filterable columns, per-row action dropdowns, status
//! togglers and a bulk-action menu. [`GridSelectors`] builds the selector
//! family for one grid name; [`GridView`] implements the interaction
//! protocols on top of it.

use vitrina::{ColumnName, Interactor, Row, Selector, VitrinaResult};

/// Selector factories for one named grid.
///
/// Factories are deterministic and injective over their row/column
/// parameters: distinct coordinates always produce distinct locators.
#[derive(Debug, Clone)]
pub struct GridSelectors {
    name: &'static str,
}

impl GridSelectors {
    /// Selector family for the grid registered under `name`
    /// (`employee` yields `#employee_grid`, `#employee_grid_panel`, ...).
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// The grid name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The surrounding panel.
    #[must_use]
    pub fn panel(&self) -> Selector {
        Selector::css(format!("#{}_grid_panel", self.name))
    }

    /// The counted panel header, e.g. `Employees (7)`.
    #[must_use]
    pub fn header_title(&self) -> Selector {
        self.panel().within("h3.card-header-title")
    }

    /// The grid form element.
    #[must_use]
    pub fn form(&self) -> Selector {
        Selector::css(format!("#{}_grid", self.name))
    }

    /// A table row (1-based).
    #[must_use]
    pub fn row(&self, row: Row) -> Selector {
        self.form().within(&format!("tbody tr:nth-child({row})"))
    }

    /// A table cell addressed by row and typed column.
    #[must_use]
    pub fn cell<C: ColumnName>(&self, row: Row, column: C) -> Selector {
        self.row(row).within(&format!("td.column-{}", column.as_str()))
    }

    /// The row's actions cell.
    #[must_use]
    pub fn actions_cell(&self, row: Row) -> Selector {
        self.row(row).within("td.column-actions")
    }

    /// The actions dropdown toggle of a row.
    #[must_use]
    pub fn row_dropdown_toggle(&self, row: Row) -> Selector {
        self.actions_cell(row).within("a[data-toggle='dropdown']")
    }

    /// The row's edit link.
    #[must_use]
    pub fn edit_link(&self, row: Row) -> Selector {
        self.actions_cell(row).within("a[href*='edit']")
    }

    /// The row's delete link inside the actions dropdown.
    #[must_use]
    pub fn delete_link(&self, row: Row) -> Selector {
        self.actions_cell(row)
            .within("a[data-confirm-button-label='Delete']")
    }

    /// The enabled-state icon in a toggle cell.
    #[must_use]
    pub fn valid_icon<C: ColumnName>(&self, row: Row, column: C) -> Selector {
        self.cell(row, column).within("i.grid-toggler-icon-valid")
    }

    /// The disabled-state icon in a toggle cell.
    #[must_use]
    pub fn not_valid_icon<C: ColumnName>(&self, row: Row, column: C) -> Selector {
        self.cell(row, column).within("i.grid-toggler-icon-not-valid")
    }

    /// The filter field for a column (`#employee_email`, ...).
    #[must_use]
    pub fn filter_input<C: ColumnName>(&self, column: C) -> Selector {
        self.form()
            .within(&format!("#{}_{}", self.name, column.as_str()))
    }

    /// The filter search button.
    #[must_use]
    pub fn search_button(&self) -> Selector {
        self.form()
            .within(&format!("button[name='{}[actions][search]']", self.name))
    }

    /// The filter reset button.
    #[must_use]
    pub fn reset_button(&self) -> Selector {
        self.form()
            .within(&format!("button[name='{}[actions][reset]']", self.name))
    }

    /// The select-all checkbox in the filters row. Assumes the grid's fixed
    /// header DOM (`tr.column-filters .md-checkbox`).
    #[must_use]
    pub fn select_all_label(&self) -> Selector {
        self.form().within("tr.column-filters .md-checkbox i")
    }

    /// The bulk-actions menu button.
    #[must_use]
    pub fn bulk_toggle_button(&self) -> Selector {
        self.form().within("button.dropdown-toggle")
    }

    /// The bulk enable command.
    #[must_use]
    pub fn bulk_enable_button(&self) -> Selector {
        self.form()
            .within(&format!("#{}_grid_bulk_action_enable_selection", self.name))
    }

    /// The bulk disable command.
    #[must_use]
    pub fn bulk_disable_button(&self) -> Selector {
        self.form()
            .within(&format!("#{}_grid_bulk_action_disable_selection", self.name))
    }

    /// The bulk delete command.
    #[must_use]
    pub fn bulk_delete_button(&self) -> Selector {
        self.form()
            .within(&format!("#{}_grid_bulk_action_delete_selection", self.name))
    }

    /// The delete confirmation modal.
    #[must_use]
    pub fn confirm_modal(&self) -> Selector {
        Selector::css(format!("#{}-grid-confirm-modal", self.name))
    }

    /// The confirmation modal's submit button.
    #[must_use]
    pub fn confirm_delete_button(&self) -> Selector {
        self.confirm_modal().within("button.btn-confirm-submit")
    }
}

/// Interaction protocols over one grid.
#[derive(Debug, Clone)]
pub struct GridView {
    ui: Interactor,
    selectors: GridSelectors,
    success_alert: Selector,
}

impl GridView {
    /// Drive the grid through `ui`; bulk and delete protocols read their
    /// outcome from `success_alert`.
    #[must_use]
    pub fn new(ui: Interactor, selectors: GridSelectors, success_alert: Selector) -> Self {
        Self {
            ui,
            selectors,
            success_alert,
        }
    }

    /// The selector family.
    #[must_use]
    pub const fn selectors(&self) -> &GridSelectors {
        &self.selectors
    }

    /// Row count read from the panel header.
    pub async fn count_from_header(&self) -> VitrinaResult<u32> {
        self.ui.number_from_text(&self.selectors.header_title()).await
    }

    /// Reset any active filters, then read the row count. The reset button
    /// only renders while filters are active, so it is probed, not awaited.
    pub async fn reset_and_count(&self) -> VitrinaResult<u32> {
        let reset = self.selectors.reset_button();
        if self.ui.element_visible(&reset, 2000).await {
            self.ui.click_and_wait_for_navigation(&reset).await?;
        }
        self.count_from_header().await
    }

    /// Text of one cell.
    pub async fn text_at<C: ColumnName>(&self, row: Row, column: C) -> VitrinaResult<String> {
        self.ui.text_content(&self.selectors.cell(row, column)).await
    }

    /// Filter by typing into a column's filter field and searching.
    pub async fn filter_by_input<C: ColumnName>(
        &self,
        column: C,
        value: &str,
    ) -> VitrinaResult<()> {
        self.ui
            .set_value(&self.selectors.filter_input(column), value)
            .await?;
        self.ui
            .click_and_wait_for_navigation(&self.selectors.search_button())
            .await
    }

    /// Filter a boolean column through its Yes/No select and search.
    pub async fn filter_by_select<C: ColumnName>(
        &self,
        column: C,
        enabled: bool,
    ) -> VitrinaResult<()> {
        let option = if enabled { "Yes" } else { "No" };
        self.ui
            .select_by_visible_text(&self.selectors.filter_input(column), option)
            .await?;
        self.ui
            .click_and_wait_for_navigation(&self.selectors.search_button())
            .await
    }

    /// Current state of a row's status toggler: `true` when the
    /// enabled icon shows.
    pub async fn toggle_state<C: ColumnName>(&self, row: Row, column: C) -> bool {
        self.ui
            .element_visible(&self.selectors.valid_icon(row, column), 100)
            .await
    }

    /// Drive a row's status toggler to `wanted`.
    ///
    /// Clicks only when the current state differs, then waits for the icon
    /// class to flip. Returns whether a change occurred; asking for the
    /// state the row is already in is a no-op returning `false`.
    pub async fn set_toggle<C: ColumnName>(
        &self,
        row: Row,
        column: C,
        wanted: bool,
    ) -> VitrinaResult<bool> {
        let cell = self.selectors.cell(row, column);
        self.ui.wait_for_visible_within(&cell, 2000).await?;
        if self.toggle_state(row, column).await == wanted {
            tracing::debug!(grid = self.selectors.name(), %row, wanted, "toggle already in state");
            return Ok(false);
        }
        let expected = if wanted {
            self.selectors.valid_icon(row, column)
        } else {
            self.selectors.not_valid_icon(row, column)
        };
        self.ui.click_and_wait_for_visible(&cell, &expected).await?;
        Ok(true)
    }

    /// Delete one row through its actions dropdown and the confirmation
    /// modal; returns the resulting status-message text.
    pub async fn delete_row(&self, row: Row) -> VitrinaResult<String> {
        let toggle = self.selectors.row_dropdown_toggle(row);
        self.ui
            .click_and_wait_for_visible(&toggle, &toggle.and("[aria-expanded='true']"))
            .await?;
        self.ui
            .click_and_wait_for_visible(
                &self.selectors.delete_link(row),
                &self.selectors.confirm_modal().and(".show"),
            )
            .await?;
        self.ui
            .click_and_wait_for_navigation(&self.selectors.confirm_delete_button())
            .await?;
        self.ui.text_content(&self.success_alert).await
    }

    /// Enable or disable every row through the bulk-action menu; returns the
    /// resulting status-message text.
    pub async fn bulk_set_enabled(&self, enable: bool) -> VitrinaResult<String> {
        self.select_all_and_open_menu().await?;
        let command = if enable {
            self.selectors.bulk_enable_button()
        } else {
            self.selectors.bulk_disable_button()
        };
        self.ui.click_and_wait_for_navigation(&command).await?;
        self.ui.text_content(&self.success_alert).await
    }

    /// Delete every row through the bulk-action menu, auto-accepting the
    /// confirmation dialog; returns the resulting status-message text.
    pub async fn bulk_delete(&self) -> VitrinaResult<String> {
        self.ui.accept_all_dialogs().await?;
        self.select_all_and_open_menu().await?;
        self.ui
            .click_and_wait_for_navigation(&self.selectors.bulk_delete_button())
            .await?;
        self.ui.text_content(&self.success_alert).await
    }

    // Steps 1 and 2 of every bulk action: select all rows and wait for the
    // menu button to enable, then open the menu and wait for it to expand.
    async fn select_all_and_open_menu(&self) -> VitrinaResult<()> {
        tracing::debug!(grid = self.selectors.name(), "bulk action: select all and open menu");
        let menu = self.selectors.bulk_toggle_button();
        self.ui
            .click_and_wait_for_visible(
                &self.selectors.select_all_label(),
                &menu.and(":not([disabled])"),
            )
            .await?;
        self.ui
            .click_and_wait_for_visible(&menu, &menu.and("[aria-expanded='true']"))
            .await?;
        Ok(())
    }
}
