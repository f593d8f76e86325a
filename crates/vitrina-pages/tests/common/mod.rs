//! Scripted mock storefront backing the scenario tests.
//!
//! Builds [`MockPage`] tabs whose click handlers and routes behave like the
//! application under test: the display-brands preference flips the sitemap
//! link and the brands-page alert, grid togglers flip their icons, and bulk
//! or row deletion updates the count and raises the generic status alert.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use vitrina::mock::{MockElement, MockPage, PageState};
use vitrina::{DialogType, SuiteConfig, Tab};
use vitrina_pages::bo::shell;

/// Shared application state observed by both offices.
#[derive(Debug)]
pub struct ShopSettings {
    /// Whether brands show in the front office
    pub display_brands: bool,
    /// The pending (unsaved) choice on the preferences form
    pub chosen_display_brands: bool,
}

/// The mock application.
pub struct MockStorefront {
    /// Suite configuration the scenario runs against
    pub config: SuiteConfig,
    settings: Arc<Mutex<ShopSettings>>,
    bo_page: MockPage,
}

impl MockStorefront {
    /// Build the back office with brands enabled.
    pub fn new() -> Self {
        let config = SuiteConfig::default();
        let settings = Arc::new(Mutex::new(ShopSettings {
            display_brands: true,
            chosen_display_brands: true,
        }));
        let bo_page = MockPage::new();
        install_bo_routes(&bo_page, &config, &settings);
        install_bo_handlers(&bo_page, &config, &settings);
        Self {
            config,
            settings,
            bo_page,
        }
    }

    /// The back-office tab, parked on the login screen.
    pub async fn open_bo_tab(&self) -> Tab {
        let tab = Tab::from_driver(Arc::new(self.bo_page.clone()));
        tab.driver()
            .goto(
                &self.config.bo_url(""),
                &vitrina::NavigationOptions::default(),
            )
            .await
            .expect("mock goto");
        tab
    }

    /// Direct access to the scripted back-office page.
    pub fn bo_page(&self) -> &MockPage {
        &self.bo_page
    }

    /// Whether the shop currently displays brands.
    pub fn displays_brands(&self) -> bool {
        self.settings.lock().expect("settings").display_brands
    }
}

fn bo_urls(config: &SuiteConfig) -> (String, String, String, String) {
    (
        config.bo_url(""),
        config.bo_url("dashboard"),
        config.bo_url("preferences"),
        config.bo_url("brands"),
    )
}

fn install_menu_chrome(s: &mut PageState) {
    s.upsert("#subtab-AdminParentShopParameters", MockElement::new());
    s.upsert("#subtab-AdminCatalog", MockElement::new());
    s.upsert("#subtab-AdminAdvancedParameters", MockElement::new());
    s.upsert("#subtab-AdminParentPreferences", MockElement::hidden());
    s.upsert("#subtab-AdminParentManufacturers", MockElement::hidden());
    s.upsert("#subtab-AdminParentEmployees", MockElement::hidden());
    s.upsert("#header_shopname", MockElement::new());
}

fn install_bo_routes(
    page: &MockPage,
    config: &SuiteConfig,
    settings: &Arc<Mutex<ShopSettings>>,
) {
    let (login_url, dashboard_url, general_url, brands_url) = bo_urls(config);

    page.on_goto(&login_url, |s| {
        s.set_title("Log in");
        s.upsert("#email", MockElement::new());
        s.upsert("#passwd", MockElement::new());
        s.upsert("#submit_login", MockElement::new());
    });

    page.on_goto(&dashboard_url, |s| {
        s.set_title("Dashboard");
        install_menu_chrome(s);
        s.upsert("#dashboard", MockElement::new());
        s.set_text("#main-div .page-title", "Dashboard");
    });

    page.on_goto(&general_url, |s| {
        s.set_title("Preferences");
        install_menu_chrome(s);
        s.set_text("#main-div .page-title", "Preferences");
        // The storefront toolbar overlays freshly opened BO pages.
        s.upsert("div[id*='sfToolbarMainContent']", MockElement::new());
        s.upsert("a[id*='hide-sf-toolbar']", MockElement::new());
        s.upsert("label[for='form_display_manufacturers_1']", MockElement::new());
        s.upsert("label[for='form_display_manufacturers_0']", MockElement::new());
        s.upsert("#form-preferences-save-button", MockElement::new());
    });

    let for_brands = Arc::clone(settings);
    page.on_goto(&brands_url, move |s| {
        let enabled = for_brands.lock().expect("settings").display_brands;
        s.set_title("Brands");
        install_menu_chrome(s);
        s.set_text("#main-div .page-title", "Brands");
        let state_word = if enabled { "enabled" } else { "disabled" };
        s.set_text(
            "div.alert-info p.alert-text",
            format!("The display of your brands is currently {state_word} in your shop."),
        );
        s.set_text("#manufacturer_grid_panel h3.card-header-title", "Brands (3)");
    });
}

fn install_bo_handlers(
    page: &MockPage,
    config: &SuiteConfig,
    settings: &Arc<Mutex<ShopSettings>>,
) {
    let (_, dashboard_url, general_url, brands_url) = bo_urls(config);

    let to_dashboard = dashboard_url.clone();
    page.on_click("#submit_login", move |s| {
        s.begin_navigation(to_dashboard.clone());
    });

    page.on_click("#subtab-AdminParentShopParameters", |s| {
        s.show("#subtab-AdminParentPreferences");
    });
    page.on_click("#subtab-AdminCatalog", |s| {
        s.show("#subtab-AdminParentManufacturers");
    });

    let to_general = general_url.clone();
    page.on_click("#subtab-AdminParentPreferences", move |s| {
        s.begin_navigation(to_general.clone());
    });
    let to_brands = brands_url;
    page.on_click("#subtab-AdminParentManufacturers", move |s| {
        s.begin_navigation(to_brands.clone());
    });

    page.on_click("a[id*='hide-sf-toolbar']", |s| {
        s.hide("div[id*='sfToolbarMainContent']");
    });

    let choose_on = Arc::clone(settings);
    page.on_click("label[for='form_display_manufacturers_1']", move |_s| {
        choose_on.lock().expect("settings").chosen_display_brands = true;
    });
    let choose_off = Arc::clone(settings);
    page.on_click("label[for='form_display_manufacturers_0']", move |_s| {
        choose_off.lock().expect("settings").chosen_display_brands = false;
    });

    let on_save = Arc::clone(settings);
    let back_to_general = general_url;
    page.on_click("#form-preferences-save-button", move |s| {
        let mut shop = on_save.lock().expect("settings");
        shop.display_brands = shop.chosen_display_brands;
        s.set_text("div.alert-success p.alert-text", shell::SUCCESSFUL_UPDATE_MESSAGE);
        s.begin_navigation(back_to_general.clone());
    });

    let fo_settings = Arc::clone(settings);
    let fo_config = config.clone();
    page.on_click("#header_shopname", move |s| {
        s.open_popup(make_fo_page(&fo_config, &fo_settings));
    });
}

/// Build a front-office tab already parked on the home page.
pub fn make_fo_page(config: &SuiteConfig, settings: &Arc<Mutex<ShopSettings>>) -> MockPage {
    let page = MockPage::new();
    let home_url = config.fo_url("");
    let sitemap_url = config.fo_url("sitemap");

    fn build_home(s: &mut PageState) {
        s.set_title("My Store");
        s.upsert("body#index", MockElement::new());
        s.upsert(
            "#_desktop_language_selector select",
            MockElement::new().with_options(["English", "Français"]),
        );
        s.upsert(".links a[href*='sitemap']", MockElement::new());
    }

    page.on_goto(&home_url, build_home);

    let on_sitemap = Arc::clone(settings);
    page.on_goto(&sitemap_url, move |s| {
        s.set_title("Sitemap");
        s.set_text("#main h1", "Sitemap");
        if on_sitemap.lock().expect("settings").display_brands {
            s.show(".sitemap a[href*='manufacturer']");
        } else {
            s.remove(".sitemap a[href*='manufacturer']");
        }
    });

    let to_sitemap = sitemap_url;
    page.on_click(".links a[href*='sitemap']", move |s| {
        s.begin_navigation(to_sitemap.clone());
    });

    // The popup opens directly on the home page.
    page.with_state(|s| {
        build_home(s);
    });
    page
}

// ---------------------------------------------------------------------------
// Employees screen
// ---------------------------------------------------------------------------

/// One employee row in the mock model.
#[derive(Debug, Clone)]
pub struct Employee {
    /// First name
    pub firstname: String,
    /// Last name
    pub lastname: String,
    /// Email address
    pub email: String,
    /// Enabled status
    pub active: bool,
}

impl Employee {
    fn new(firstname: &str, lastname: &str, email: &str, active: bool) -> Self {
        Self {
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
            email: email.to_string(),
            active,
        }
    }
}

/// Model behind the employees grid.
#[derive(Debug)]
pub struct EmployeesModel {
    /// All employees still in the shop
    pub employees: Vec<Employee>,
    /// Indices of the rows the active filter keeps, if any
    pub filter: Option<Vec<usize>>,
}

impl EmployeesModel {
    /// The demo data set the scenarios start from.
    pub fn demo() -> Self {
        Self {
            employees: vec![
                Employee::new("Marc", "Beier", "marc@shop.test", true),
                Employee::new("Dina", "Gaillard", "dina@shop.test", true),
                Employee::new("Rafa", "Soto", "rafa@shop.test", false),
            ],
            filter: None,
        }
    }

    fn visible_indices(&self) -> Vec<usize> {
        self.filter
            .clone()
            .unwrap_or_else(|| (0..self.employees.len()).collect())
    }
}

const EMPLOYEES_PATH: &str = "employees";

fn render_employees(s: &mut PageState, model: &EmployeesModel) {
    s.set_title("Employees");
    install_menu_chrome(s);
    s.set_text("#main-div .page-title", "Employees");
    s.upsert("#page-header-desc-configuration-add", MockElement::new());
    s.upsert("#subtab-AdminProfiles", MockElement::new());

    let visible = model.visible_indices();
    s.set_text(
        "#employee_grid_panel h3.card-header-title",
        format!("Employees ({})", visible.len()),
    );

    // Stale rows from a previous render are dropped before re-drawing.
    for row in 1..=10 {
        for sel in row_selectors(row) {
            s.remove(&sel);
        }
    }

    for (position, &index) in visible.iter().enumerate() {
        let row = position + 1;
        let employee = &model.employees[index];
        let base = format!("#employee_grid tbody tr:nth-child({row})");
        s.set_text(&format!("{base} td.column-firstname"), employee.firstname.clone());
        s.set_text(&format!("{base} td.column-lastname"), employee.lastname.clone());
        s.set_text(&format!("{base} td.column-email"), employee.email.clone());
        s.upsert(&format!("{base} td.column-active"), MockElement::new());
        let valid = format!("{base} td.column-active i.grid-toggler-icon-valid");
        let not_valid = format!("{base} td.column-active i.grid-toggler-icon-not-valid");
        if employee.active {
            s.show(&valid);
            s.hide(&not_valid);
        } else {
            s.hide(&valid);
            s.show(&not_valid);
        }
        s.upsert(&format!("{base} td.column-actions"), MockElement::new());
        s.upsert(
            &format!("{base} td.column-actions a[data-toggle='dropdown']"),
            MockElement::new(),
        );
        s.upsert(
            &format!("{base} td.column-actions a[data-confirm-button-label='Delete']"),
            MockElement::new(),
        );
        s.upsert(
            &format!("{base} td.column-actions a[href*='edit']"),
            MockElement::new(),
        );
    }

    // Filter controls and the bulk-action machinery.
    s.upsert("#employee_grid #employee_email", MockElement::new());
    s.upsert("#employee_grid #employee_firstname", MockElement::new());
    s.upsert(
        "#employee_grid #employee_active",
        MockElement::new().with_options(["Yes", "No"]),
    );
    s.upsert(
        "#employee_grid button[name='employee[actions][search]']",
        MockElement::new(),
    );
    if model.filter.is_some() {
        s.upsert(
            "#employee_grid button[name='employee[actions][reset]']",
            MockElement::new(),
        );
    } else {
        s.remove("#employee_grid button[name='employee[actions][reset]']");
    }
    s.upsert("#employee_grid tr.column-filters .md-checkbox i", MockElement::new());
    s.upsert("#employee_grid button.dropdown-toggle", MockElement::new());
    s.remove("#employee_grid button.dropdown-toggle:not([disabled])");
    s.remove("#employee_grid button.dropdown-toggle[aria-expanded='true']");
    s.upsert(
        "#employee_grid #employee_grid_bulk_action_enable_selection",
        MockElement::new(),
    );
    s.upsert(
        "#employee_grid #employee_grid_bulk_action_disable_selection",
        MockElement::new(),
    );
    s.upsert(
        "#employee_grid #employee_grid_bulk_action_delete_selection",
        MockElement::new(),
    );
    s.upsert("#employee-grid-confirm-modal", MockElement::hidden());
    s.remove("#employee-grid-confirm-modal.show");
    s.upsert(
        "#employee-grid-confirm-modal button.btn-confirm-submit",
        MockElement::new(),
    );
}

fn row_selectors(row: usize) -> Vec<String> {
    let base = format!("#employee_grid tbody tr:nth-child({row})");
    vec![
        format!("{base} td.column-firstname"),
        format!("{base} td.column-lastname"),
        format!("{base} td.column-email"),
        format!("{base} td.column-active"),
        format!("{base} td.column-active i.grid-toggler-icon-valid"),
        format!("{base} td.column-active i.grid-toggler-icon-not-valid"),
        format!("{base} td.column-actions"),
        format!("{base} td.column-actions a[data-toggle='dropdown']"),
        format!("{base} td.column-actions a[data-confirm-button-label='Delete']"),
        format!("{base} td.column-actions a[href*='edit']"),
    ]
}

/// Build an employees tab already parked on the list, driven by `model`.
pub fn make_employees_page(model: &Arc<Mutex<EmployeesModel>>) -> MockPage {
    let config = SuiteConfig::default();
    let employees_url = config.bo_url(EMPLOYEES_PATH);
    let page = MockPage::new();

    let route_model = Arc::clone(model);
    page.on_goto(&employees_url, move |s| {
        render_employees(s, &route_model.lock().expect("employees model"));
    });

    // Row status togglers: flip the clicked row and raise the status alert.
    for row in 1..=4_usize {
        let toggle_model = Arc::clone(model);
        let cell = format!("#employee_grid tbody tr:nth-child({row}) td.column-active");
        page.on_click(&cell, move |s| {
            let mut model = toggle_model.lock().expect("employees model");
            let visible = model.visible_indices();
            if let Some(&index) = visible.get(row - 1) {
                model.employees[index].active = !model.employees[index].active;
                s.set_text(
                    "div.alert-success p.alert-text",
                    "The status has been successfully updated.",
                );
                render_employees(s, &model);
            }
        });

        // Per-row actions dropdown and delete confirmation.
        let base = format!("#employee_grid tbody tr:nth-child({row}) td.column-actions");
        let toggle = format!("{base} a[data-toggle='dropdown']");
        let expanded = format!("{toggle}[aria-expanded='true']");
        page.on_click(&toggle, move |s| {
            s.show(&expanded);
        });
        let delete_link = format!("{base} a[data-confirm-button-label='Delete']");
        page.on_click(&delete_link, |s| {
            s.show("#employee-grid-confirm-modal.show");
        });
    }

    let delete_model = Arc::clone(model);
    let delete_url = employees_url.clone();
    page.on_click("#employee-grid-confirm-modal button.btn-confirm-submit", move |s| {
        let mut model = delete_model.lock().expect("employees model");
        // The confirmed row is always the first one in these scenarios.
        if let Some(&index) = model.visible_indices().first() {
            let _ = model.employees.remove(index);
            model.filter = None;
        }
        s.set_text("div.alert-success p.alert-text", shell::SUCCESSFUL_DELETE_MESSAGE);
        s.begin_navigation(delete_url.clone());
    });

    page.on_click("#employee_grid tr.column-filters .md-checkbox i", |s| {
        s.show("#employee_grid button.dropdown-toggle:not([disabled])");
    });
    page.on_click("#employee_grid button.dropdown-toggle", |s| {
        s.show("#employee_grid button.dropdown-toggle[aria-expanded='true']");
    });

    for (selector, enable) in [
        ("#employee_grid #employee_grid_bulk_action_enable_selection", true),
        ("#employee_grid #employee_grid_bulk_action_disable_selection", false),
    ] {
        let bulk_model = Arc::clone(model);
        let bulk_url = employees_url.clone();
        page.on_click(selector, move |s| {
            let mut model = bulk_model.lock().expect("employees model");
            for index in model.visible_indices() {
                model.employees[index].active = enable;
            }
            s.set_text("div.alert-success p.alert-text", shell::SUCCESSFUL_UPDATE_MESSAGE);
            s.begin_navigation(bulk_url.clone());
        });
    }

    let wipe_model = Arc::clone(model);
    let wipe_url = employees_url.clone();
    page.on_click("#employee_grid #employee_grid_bulk_action_delete_selection", move |s| {
        s.raise_dialog(DialogType::Confirm);
        let mut model = wipe_model.lock().expect("employees model");
        let doomed = model.visible_indices();
        for index in doomed.into_iter().rev() {
            let _ = model.employees.remove(index);
        }
        model.filter = None;
        s.set_text(
            "div.alert-success p.alert-text",
            shell::SUCCESSFUL_MULTI_DELETE_MESSAGE,
        );
        s.begin_navigation(wipe_url.clone());
    });

    let search_model = Arc::clone(model);
    let search_url = employees_url;
    page.on_click("#employee_grid button[name='employee[actions][search]']", move |s| {
        let mut model = search_model.lock().expect("employees model");
        let needle = s
            .element_value("#employee_grid #employee_email")
            .unwrap_or_default();
        let keep: Vec<usize> = model
            .employees
            .iter()
            .enumerate()
            .filter(|(_, e)| needle.is_empty() || e.email.contains(&needle))
            .map(|(i, _)| i)
            .collect();
        model.filter = Some(keep);
        s.begin_navigation(search_url.clone());
    });

    let reset_model = Arc::clone(model);
    let reset_url = config.bo_url(EMPLOYEES_PATH);
    page.on_click("#employee_grid button[name='employee[actions][reset]']", move |s| {
        reset_model.lock().expect("employees model").filter = None;
        s.begin_navigation(reset_url.clone());
    });

    // Park the page on the rendered list.
    page.with_state(|s| {
        render_employees(s, &model.lock().expect("employees model"));
    });
    page
}

/// Wrap a scripted page in a tab handle.
pub fn tab_for(page: &MockPage) -> Tab {
    Tab::from_driver(Arc::new(page.clone()))
}
