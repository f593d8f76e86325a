//! Back-office screens.

/// Brands & Suppliers list.
pub mod brands;
/// Main dashboard.
pub mod dashboard;
/// Team / employees list.
pub mod employees;
/// Login screen.
pub mod login;
/// Common back-office chrome.
pub mod shell;
/// Shop Parameters > General.
pub mod shop_params_general;

pub use brands::BrandsPage;
pub use dashboard::DashboardPage;
pub use employees::{EmployeeColumn, EmployeesPage, FilterKind};
pub use login::LoginPage;
pub use shell::{BoMenu, BoShell, BoSubMenu};
pub use shop_params_general::GeneralPage;
