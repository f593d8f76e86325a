//! Scriptable in-memory page backend.
//!
//! [`MockPage`] implements [`Driver`] over a plain element table so page
//! objects can be exercised without a browser. Tests script the page: insert
//! elements, toggle visibility, and register click handlers that mutate the
//! page the way the application under test would (flip an icon class, show a
//! modal, start a navigation, open a popup tab).
//!
//! Selectors are matched **literally** by their CSS text. A refined selector
//! such as `button.dropdown-toggle:not([disabled])` is a distinct entry from
//! `button.dropdown-toggle`; scripts that model state transitions insert or
//! remove the refined entry explicitly.

use crate::dialog::{DialogPolicy, DialogType};
use crate::driver::Driver;
use crate::result::{VitrinaError, VitrinaResult};
use crate::selector::Selector;
use crate::wait::NavigationOptions;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One element in the mock DOM.
#[derive(Debug, Clone)]
pub struct MockElement {
    /// Whether the element is currently visible
    pub visible: bool,
    /// Text content
    pub text: String,
    /// Form value
    pub value: String,
    /// Visible option texts, for `<select>` elements
    pub options: Vec<String>,
    /// Whether form interaction is refused
    pub disabled: bool,
}

impl Default for MockElement {
    fn default() -> Self {
        Self {
            visible: true,
            text: String::new(),
            value: String::new(),
            options: Vec::new(),
            disabled: false,
        }
    }
}

impl MockElement {
    /// A visible element with no text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A present but hidden element.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visible: false,
            ..Self::default()
        }
    }

    /// Set the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the `<select>` option texts.
    #[must_use]
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the element disabled.
    #[must_use]
    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Mutable page state handed to click and route handlers.
#[derive(Default)]
pub struct PageState {
    url: String,
    title: String,
    elements: HashMap<String, MockElement>,
    pending_navigation: Option<String>,
    blocking_dialog: Option<DialogType>,
    dialog_policy: DialogPolicy,
    dialogs_answered: Vec<DialogType>,
    navigations: Vec<String>,
    popup: Option<MockPage>,
}

impl PageState {
    /// Insert or replace an element.
    pub fn upsert(&mut self, selector: &str, element: MockElement) {
        let _ = self.elements.insert(selector.to_string(), element);
    }

    /// Remove an element entirely.
    pub fn remove(&mut self, selector: &str) {
        let _ = self.elements.remove(selector);
    }

    /// Make an element visible, inserting it if absent.
    pub fn show(&mut self, selector: &str) {
        self.elements.entry(selector.to_string()).or_default().visible = true;
    }

    /// Hide an element, inserting it hidden if absent.
    pub fn hide(&mut self, selector: &str) {
        self.elements
            .entry(selector.to_string())
            .or_insert_with(MockElement::hidden)
            .visible = false;
    }

    /// Set an element's text, inserting it if absent.
    pub fn set_text(&mut self, selector: &str, text: impl Into<String>) {
        self.elements.entry(selector.to_string()).or_default().text = text.into();
    }

    /// Set the document title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Record that a click started a navigation; it settles on the next
    /// `wait_for_navigation`.
    pub fn begin_navigation(&mut self, url: impl Into<String>) {
        self.pending_navigation = Some(url.into());
    }

    /// Raise a browser dialog. Under an automatic policy it is answered on
    /// the spot; otherwise it blocks navigation settles until the test
    /// clears it.
    pub fn raise_dialog(&mut self, dialog: DialogType) {
        if self.dialog_policy.is_automatic() {
            self.dialogs_answered.push(dialog);
        } else {
            self.blocking_dialog = Some(dialog);
        }
    }

    /// Attach the page a popup-opening click hands back.
    pub fn open_popup(&mut self, page: MockPage) {
        self.popup = Some(page);
    }

    /// Current form value of an element, if present.
    #[must_use]
    pub fn element_value(&self, selector: &str) -> Option<String> {
        self.elements.get(selector).map(|el| el.value.clone())
    }
}

type Handler = Box<dyn FnMut(&mut PageState) + Send>;

#[derive(Default)]
struct Handlers {
    on_click: HashMap<String, Handler>,
    // (url prefix, handler); longest matching prefix wins
    on_goto: Vec<(String, Handler)>,
}

/// Scriptable in-memory page. Cheap to clone; clones share state.
#[derive(Clone, Default)]
pub struct MockPage {
    state: Arc<Mutex<PageState>>,
    handlers: Arc<Mutex<Handlers>>,
}

impl std::fmt::Debug for MockPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock().expect("mock page state poisoned");
        f.debug_struct("MockPage")
            .field("url", &state.url)
            .field("title", &state.title)
            .field("elements", &state.elements.len())
            .finish_non_exhaustive()
    }
}

impl MockPage {
    /// Create an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the page state directly.
    pub fn with_state<R>(&self, f: impl FnOnce(&mut PageState) -> R) -> R {
        let mut state = self.state.lock().expect("mock page state poisoned");
        f(&mut state)
    }

    /// Insert or replace an element.
    pub fn upsert_element(&self, selector: &str, element: MockElement) {
        self.with_state(|s| s.upsert(selector, element));
    }

    /// Remove an element.
    pub fn remove_element(&self, selector: &str) {
        self.with_state(|s| s.remove(selector));
    }

    /// Register a click handler for a selector.
    pub fn on_click(&self, selector: &str, handler: impl FnMut(&mut PageState) + Send + 'static) {
        let mut handlers = self.handlers.lock().expect("mock page handlers poisoned");
        let _ = handlers
            .on_click
            .insert(selector.to_string(), Box::new(handler));
    }

    /// Register a route: navigating to a URL with this prefix rebuilds the
    /// page through the handler.
    pub fn on_goto(&self, url_prefix: &str, handler: impl FnMut(&mut PageState) + Send + 'static) {
        let mut handlers = self.handlers.lock().expect("mock page handlers poisoned");
        handlers
            .on_goto
            .push((url_prefix.to_string(), Box::new(handler)));
    }

    /// Snapshot of an element, if present.
    #[must_use]
    pub fn element(&self, selector: &str) -> Option<MockElement> {
        self.with_state(|s| s.elements.get(selector).cloned())
    }

    /// URLs this page has navigated to, in order.
    #[must_use]
    pub fn navigations(&self) -> Vec<String> {
        self.with_state(|s| s.navigations.clone())
    }

    /// Dialogs answered by the automatic policy, in order.
    #[must_use]
    pub fn dialogs_answered(&self) -> Vec<DialogType> {
        self.with_state(|s| s.dialogs_answered.clone())
    }

    fn run_click_handler(&self, selector: &Selector) {
        // Take the handler out so it can mutate state without holding the
        // handler table lock.
        let taken = {
            let mut handlers = self.handlers.lock().expect("mock page handlers poisoned");
            handlers.on_click.remove(selector.as_str())
        };
        if let Some(mut handler) = taken {
            self.with_state(|s| handler(s));
            let mut handlers = self.handlers.lock().expect("mock page handlers poisoned");
            let _ = handlers
                .on_click
                .entry(selector.as_str().to_string())
                .or_insert(handler);
        }
    }

    fn run_route_handler(&self, url: &str) {
        let taken = {
            let mut handlers = self.handlers.lock().expect("mock page handlers poisoned");
            let best = handlers
                .on_goto
                .iter()
                .enumerate()
                .filter(|(_, (prefix, _))| url.starts_with(prefix.as_str()))
                .max_by_key(|(_, (prefix, _))| prefix.len())
                .map(|(i, _)| i);
            best.map(|i| handlers.on_goto.remove(i))
        };
        if let Some((prefix, mut handler)) = taken {
            self.with_state(|s| handler(s));
            let mut handlers = self.handlers.lock().expect("mock page handlers poisoned");
            handlers.on_goto.push((prefix, handler));
        }
    }
}

#[async_trait]
impl Driver for MockPage {
    async fn goto(&self, url: &str, _options: &NavigationOptions) -> VitrinaResult<()> {
        self.with_state(|s| {
            s.url = url.to_string();
            s.navigations.push(url.to_string());
            s.pending_navigation = None;
        });
        self.run_route_handler(url);
        Ok(())
    }

    async fn click(&self, selector: &Selector) -> VitrinaResult<()> {
        let present = self.with_state(|s| s.elements.contains_key(selector.as_str()));
        if !present {
            return Err(VitrinaError::element_not_found(selector.as_str()));
        }
        self.run_click_handler(selector);
        Ok(())
    }

    async fn is_visible(&self, selector: &Selector) -> VitrinaResult<bool> {
        Ok(self.with_state(|s| {
            s.elements
                .get(selector.as_str())
                .is_some_and(|el| el.visible)
        }))
    }

    async fn text_content(&self, selector: &Selector) -> VitrinaResult<String> {
        self.with_state(|s| {
            s.elements
                .get(selector.as_str())
                .map(|el| el.text.clone())
                .ok_or_else(|| VitrinaError::element_not_found(selector.as_str()))
        })
    }

    async fn set_value(&self, selector: &Selector, value: &str) -> VitrinaResult<()> {
        self.with_state(|s| {
            let el = s
                .elements
                .get_mut(selector.as_str())
                .ok_or_else(|| VitrinaError::element_not_found(selector.as_str()))?;
            if el.disabled {
                return Err(VitrinaError::NotInteractable {
                    selector: selector.as_str().to_string(),
                    message: "element is disabled".to_string(),
                });
            }
            el.value = value.to_string();
            Ok(())
        })
    }

    async fn select_by_visible_text(&self, selector: &Selector, text: &str) -> VitrinaResult<()> {
        self.with_state(|s| {
            let el = s
                .elements
                .get_mut(selector.as_str())
                .ok_or_else(|| VitrinaError::element_not_found(selector.as_str()))?;
            if el.disabled {
                return Err(VitrinaError::NotInteractable {
                    selector: selector.as_str().to_string(),
                    message: "element is disabled".to_string(),
                });
            }
            if !el.options.is_empty() && !el.options.iter().any(|o| o == text) {
                return Err(VitrinaError::NotInteractable {
                    selector: selector.as_str().to_string(),
                    message: format!("no option with visible text '{text}'"),
                });
            }
            el.value = text.to_string();
            Ok(())
        })
    }

    async fn wait_for_navigation(&self, options: &NavigationOptions) -> VitrinaResult<()> {
        let pending = self.with_state(|s| {
            if s.blocking_dialog.is_some() {
                return Err(VitrinaError::timeout(
                    options.timeout_ms,
                    "navigation settle (unanswered dialog open)",
                ));
            }
            Ok(s.pending_navigation.take())
        })?;
        if let Some(url) = pending {
            self.with_state(|s| {
                s.url.clone_from(&url);
                s.navigations.push(url.clone());
            });
            self.run_route_handler(&url);
        }
        Ok(())
    }

    async fn title(&self) -> VitrinaResult<String> {
        Ok(self.with_state(|s| s.title.clone()))
    }

    async fn current_url(&self) -> VitrinaResult<String> {
        Ok(self.with_state(|s| s.url.clone()))
    }

    async fn set_dialog_policy(&self, policy: DialogPolicy) -> VitrinaResult<()> {
        self.with_state(|s| s.dialog_policy = policy);
        Ok(())
    }

    async fn click_expecting_popup(
        &self,
        selector: &Selector,
    ) -> VitrinaResult<Arc<dyn Driver>> {
        self.click(selector).await?;
        let popup = self.with_state(|s| s.popup.take());
        popup.map_or_else(
            || {
                Err(VitrinaError::Page {
                    message: format!("click on '{selector}' opened no tab"),
                })
            },
            |page| Ok(Arc::new(page) as Arc<dyn Driver>),
        )
    }

    async fn close(&self) -> VitrinaResult<()> {
        Ok(())
    }
}
