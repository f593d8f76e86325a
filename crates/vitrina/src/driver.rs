//! Abstract driver seam to the browser-automation backend.
//!
//! Page-level code only ever talks to this trait. The default backend is the
//! scriptable in-memory page in [`crate::mock`]; the `browser` feature swaps
//! in a Chromium instance over CDP. Keeping the seam abstract protects the
//! suite from backend API churn and makes page-object contracts testable
//! without a browser.

use crate::dialog::DialogPolicy;
use crate::result::VitrinaResult;
use crate::selector::Selector;
use crate::wait::NavigationOptions;
use async_trait::async_trait;
use std::sync::Arc;

/// Browser operations the interaction layer consumes.
///
/// Semantics the implementations must honor:
///
/// - `is_visible` is a single instantaneous probe; it does not wait and only
///   errors on driver failure, never on absence.
/// - `text_content` fails with
///   [`VitrinaError::ElementNotFound`](crate::VitrinaError::ElementNotFound)
///   when nothing matches.
/// - `wait_for_navigation` suspends until the pending navigation settles on
///   the requested load state or the timeout elapses.
/// - `click_expecting_popup` clicks and hands back the driver of the tab the
///   click opened.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Navigate this tab to a URL and wait for the load state.
    async fn goto(&self, url: &str, options: &NavigationOptions) -> VitrinaResult<()>;

    /// Click the first element matching the selector.
    async fn click(&self, selector: &Selector) -> VitrinaResult<()>;

    /// Probe whether the selector currently matches a visible element.
    async fn is_visible(&self, selector: &Selector) -> VitrinaResult<bool>;

    /// Text content of the first matching element.
    async fn text_content(&self, selector: &Selector) -> VitrinaResult<String>;

    /// Fill a form input with a value.
    async fn set_value(&self, selector: &Selector, value: &str) -> VitrinaResult<()>;

    /// Choose a `<select>` option by its visible text.
    async fn select_by_visible_text(&self, selector: &Selector, text: &str) -> VitrinaResult<()>;

    /// Wait for the navigation triggered by a prior action to settle.
    async fn wait_for_navigation(&self, options: &NavigationOptions) -> VitrinaResult<()>;

    /// The document title.
    async fn title(&self) -> VitrinaResult<String>;

    /// The tab's current URL.
    async fn current_url(&self) -> VitrinaResult<String>;

    /// Install a dialog policy for this tab.
    async fn set_dialog_policy(&self, policy: DialogPolicy) -> VitrinaResult<()>;

    /// Click an element that opens a new tab; returns the new tab's driver.
    async fn click_expecting_popup(&self, selector: &Selector)
        -> VitrinaResult<Arc<dyn Driver>>;

    /// Close this tab.
    async fn close(&self) -> VitrinaResult<()>;
}
