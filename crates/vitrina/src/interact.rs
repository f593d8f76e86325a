//! The shared interaction vocabulary page objects compose.
//!
//! [`Interactor`] wraps a [`Tab`] with the waiting, extraction and form
//! primitives every screen needs, so page objects declare selectors and
//! compound actions without re-implementing synchronization. Page objects
//! hold an `Interactor` by value (clones share the tab).

use crate::browser::Tab;
use crate::dialog::DialogPolicy;
use crate::result::{VitrinaError, VitrinaResult};
use crate::selector::Selector;
use crate::wait::{poll_until, NavigationOptions, WaitOptions};
use regex::Regex;
use std::sync::OnceLock;

fn first_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("static regex"))
}

/// Interaction primitives over one tab.
#[derive(Debug, Clone)]
pub struct Interactor {
    tab: Tab,
    waits: WaitOptions,
    navigation: NavigationOptions,
}

impl Interactor {
    /// Wrap a tab with default wait settings.
    #[must_use]
    pub fn new(tab: &Tab) -> Self {
        Self {
            tab: tab.clone(),
            waits: WaitOptions::default(),
            navigation: NavigationOptions::default(),
        }
    }

    /// Override the polling wait settings.
    #[must_use]
    pub fn with_waits(mut self, waits: WaitOptions) -> Self {
        self.waits = waits;
        self
    }

    /// Override the navigation settings.
    #[must_use]
    pub fn with_navigation(mut self, navigation: NavigationOptions) -> Self {
        self.navigation = navigation;
        self
    }

    /// The tab this interactor drives.
    #[must_use]
    pub fn tab(&self) -> &Tab {
        &self.tab
    }

    /// Navigate the tab and wait for the load to settle.
    pub async fn goto_and_wait(&self, url: &str) -> VitrinaResult<()> {
        tracing::debug!(url, "goto");
        self.tab.driver().goto(url, &self.navigation).await
    }

    /// Click the element once it is visible.
    pub async fn click(&self, selector: &Selector) -> VitrinaResult<()> {
        self.wait_for_visible(selector).await?;
        tracing::debug!(selector = %selector, "click");
        self.tab.driver().click(selector).await
    }

    /// Click an element and suspend until the triggered navigation settles.
    ///
    /// Fails with [`VitrinaError::Timeout`] if the element never becomes
    /// clickable or the navigation does not settle in time.
    pub async fn click_and_wait_for_navigation(&self, selector: &Selector) -> VitrinaResult<()> {
        self.click(selector).await?;
        tracing::debug!(selector = %selector, "awaiting navigation");
        self.tab.driver().wait_for_navigation(&self.navigation).await
    }

    /// Issue a click and a visibility wait together: the click triggers the
    /// condition being awaited, so both sides of the rendezvous start at the
    /// same time.
    pub async fn click_and_wait_for_visible(
        &self,
        click: &Selector,
        expect: &Selector,
    ) -> VitrinaResult<()> {
        self.wait_for_visible(click).await?;
        tracing::debug!(click = %click, expect = %expect, "click+wait rendezvous");
        let click_fut = self.tab.driver().click(click);
        let wait_fut = self.wait_for_visible(expect);
        futures::future::try_join(click_fut, wait_fut).await?;
        Ok(())
    }

    /// Probe whether an element becomes visible within `timeout_ms`.
    ///
    /// Never fails: absence, invisibility and driver trouble all report
    /// `false`.
    pub async fn element_visible(&self, selector: &Selector, timeout_ms: u64) -> bool {
        let options = WaitOptions {
            timeout_ms,
            poll_interval_ms: self.waits.poll_interval_ms,
        };
        let driver = self.tab.driver();
        let outcome = poll_until(
            || async move { Ok(driver.is_visible(selector).await.unwrap_or(false)) },
            &options,
            selector.as_str(),
        )
        .await;
        let visible = outcome.is_ok();
        tracing::trace!(selector = %selector, visible, "visibility probe");
        visible
    }

    /// Suspend until the element is visible; [`VitrinaError::Timeout`]
    /// otherwise.
    pub async fn wait_for_visible(&self, selector: &Selector) -> VitrinaResult<()> {
        self.wait_for_visible_within(selector, self.waits.timeout_ms).await
    }

    /// [`Self::wait_for_visible`] with an explicit timeout.
    pub async fn wait_for_visible_within(
        &self,
        selector: &Selector,
        timeout_ms: u64,
    ) -> VitrinaResult<()> {
        let options = WaitOptions {
            timeout_ms,
            poll_interval_ms: self.waits.poll_interval_ms,
        };
        let driver = self.tab.driver();
        let waiting_for = format!("selector '{selector}' visible");
        let _ = poll_until(
            || async move { driver.is_visible(selector).await },
            &options,
            &waiting_for,
        )
        .await?;
        Ok(())
    }

    /// Text content of the first matching element, trimmed.
    ///
    /// Waits for visibility first; extraction on a selector that matches
    /// nothing fails with [`VitrinaError::ElementNotFound`].
    pub async fn text_content(&self, selector: &Selector) -> VitrinaResult<String> {
        self.wait_for_visible(selector).await?;
        let text = self.tab.driver().text_content(selector).await?;
        Ok(text.trim().to_string())
    }

    /// First integer embedded in the element's text, e.g. a grid header
    /// count like `Employees (7)`.
    pub async fn number_from_text(&self, selector: &Selector) -> VitrinaResult<u32> {
        let text = self.text_content(selector).await?;
        let digits = first_number_re()
            .find(&text)
            .ok_or(VitrinaError::NumberParse { text: text.clone() })?;
        digits
            .as_str()
            .parse()
            .map_err(|_| VitrinaError::NumberParse { text })
    }

    /// Fill a form input.
    pub async fn set_value(&self, selector: &Selector, value: &str) -> VitrinaResult<()> {
        self.wait_for_visible(selector).await?;
        tracing::debug!(selector = %selector, "fill");
        self.tab.driver().set_value(selector, value).await
    }

    /// Choose a `<select>` option by its visible text.
    pub async fn select_by_visible_text(
        &self,
        selector: &Selector,
        text: &str,
    ) -> VitrinaResult<()> {
        self.wait_for_visible(selector).await?;
        tracing::debug!(selector = %selector, option = text, "select");
        self.tab.driver().select_by_visible_text(selector, text).await
    }

    /// The document title.
    pub async fn page_title(&self) -> VitrinaResult<String> {
        self.tab.driver().title().await
    }

    /// The tab's current URL.
    pub async fn current_url(&self) -> VitrinaResult<String> {
        self.tab.driver().current_url().await
    }

    /// Answer every dialog this tab raises from now on.
    pub async fn accept_all_dialogs(&self) -> VitrinaResult<()> {
        self.tab.driver().set_dialog_policy(DialogPolicy::AcceptAll).await
    }

    /// Click an element that opens a new tab and return its handle.
    pub async fn open_popup(&self, selector: &Selector) -> VitrinaResult<Tab> {
        self.wait_for_visible(selector).await?;
        tracing::debug!(selector = %selector, "click expecting new tab");
        let driver = self.tab.driver().click_expecting_popup(selector).await?;
        Ok(Tab::from_driver(driver))
    }
}
