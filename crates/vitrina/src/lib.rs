//! Vitrina: browser interaction primitives for storefront UI suites
//!
//! Vitrina (Spanish: "shop window") is the shared vocabulary a storefront
//! end-to-end suite is written in: typed selectors, waiting and extraction
//! primitives, dialog policies and browser/context/tab lifecycle, behind an
//! abstract driver seam.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Test script                                                     │
//! │    └── Page objects (vitrina-pages)                              │
//! │          └── Interactor  (click / wait / extract vocabulary)     │
//! │                └── Driver (trait)                                │
//! │                      ├── CDP backend   (`browser` feature)       │
//! │                      └── MockPage      (default, scriptable)     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Page objects compose an [`Interactor`] instead of inheriting from a base
//! page; test scripts mediate all cross-page flow by passing the shared
//! [`Tab`] handle forward.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

/// Browser, context and tab lifecycle.
pub mod browser;
/// Suite configuration from the environment.
pub mod config;
/// Dialog types and auto-answer policies.
pub mod dialog;
/// Abstract driver seam to the automation backend.
pub mod driver;
/// Shared interaction vocabulary for page objects.
pub mod interact;
/// Tracing setup.
pub mod logging;
/// Scriptable in-memory page backend.
pub mod mock;
/// Result and error types.
pub mod result;
/// Opaque selectors and typed grid coordinates.
pub mod selector;
/// Wait options and the polling loop.
pub mod wait;

pub use browser::{Browser, BrowserConfig, BrowserContext, Tab};
pub use config::SuiteConfig;
pub use dialog::{DialogPolicy, DialogType};
pub use driver::Driver;
pub use interact::Interactor;
pub use result::{VitrinaError, VitrinaResult};
pub use selector::{ColumnName, Row, Selector};
pub use wait::{LoadState, NavigationOptions, WaitOptions};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::browser::{Browser, BrowserConfig, BrowserContext, Tab};
    pub use super::config::SuiteConfig;
    pub use super::dialog::{DialogPolicy, DialogType};
    pub use super::driver::Driver;
    pub use super::interact::Interactor;
    pub use super::mock::{MockElement, MockPage};
    pub use super::result::{VitrinaError, VitrinaResult};
    pub use super::selector::{ColumnName, Row, Selector};
    pub use super::wait::{LoadState, NavigationOptions, WaitOptions};
}
