//! Page objects for the storefront under test.
//!
//! One type per application screen, each declaring its identity constants
//! (expected title, success-message text), its selector factories, and
//! compound actions built from the [`vitrina::Interactor`] vocabulary. Page
//! objects never call each other; test scripts mediate all cross-page flow
//! by passing the shared [`vitrina::Tab`] handle forward.
//!
//! The back office (BO) is the administrative interface, the front office
//! (FO) the customer-facing shop.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

/// Back-office screens.
pub mod bo;
/// Front-office screens.
pub mod fo;
/// Reusable list-grid component shared by BO list screens.
pub mod grid;
/// Page identity contract.
pub mod identity;

pub use identity::PageIdentity;
