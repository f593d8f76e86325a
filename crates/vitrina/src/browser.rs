//! Browser, context and tab lifecycle.
//!
//! With the `browser` feature this drives a real Chromium over CDP via
//! chromiumoxide; without it, tabs are backed by the in-memory mock page so
//! the suite compiles and its unit layer runs anywhere.
//!
//! Each test suite creates its own [`BrowserContext`] so parallel suites do
//! not share cookies or storage. Tabs are cheap-clone handles shared by
//! reference across every page object instantiated against them; hand-off
//! between pages is explicit value passing.

use crate::driver::Driver;
use crate::result::VitrinaResult;
use std::sync::{Arc, Mutex};

/// Browser launch configuration
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run in headless mode
    pub headless: bool,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
    /// Path to the chromium binary (None = auto-detect)
    pub chromium_path: Option<String>,
    /// Sandbox mode (disable for containers)
    pub sandbox: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport_width: 1680,
            viewport_height: 900,
            chromium_path: None,
            sandbox: true,
        }
    }
}

impl BrowserConfig {
    /// Set viewport dimensions.
    #[must_use]
    pub const fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set headless mode.
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set the chromium executable path.
    #[must_use]
    pub fn with_chromium_path(mut self, path: impl Into<String>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }

    /// Disable the sandbox (containers/CI).
    #[must_use]
    pub const fn with_no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }
}

/// A browser tab handle.
///
/// Clones share the underlying tab. The tab outlives any single page object;
/// a new page object simply re-wraps the same handle after navigation.
#[derive(Clone)]
pub struct Tab {
    driver: Arc<dyn Driver>,
}

impl std::fmt::Debug for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tab").finish_non_exhaustive()
    }
}

impl Tab {
    /// Wrap a driver in a tab handle.
    #[must_use]
    pub fn from_driver(driver: Arc<dyn Driver>) -> Self {
        Self { driver }
    }

    /// The underlying driver.
    #[must_use]
    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.driver
    }

    /// Close this tab.
    pub async fn close(&self) -> VitrinaResult<()> {
        self.driver.close().await
    }
}

/// An isolated browser context (own cookies/storage), owning the tabs it
/// opened. Closed explicitly at suite teardown.
pub struct BrowserContext {
    tabs: Mutex<Vec<Tab>>,
    #[cfg(feature = "browser")]
    inner: cdp::ContextHandle,
}

impl std::fmt::Debug for BrowserContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tabs = self.tabs.lock().expect("tab list poisoned");
        f.debug_struct("BrowserContext")
            .field("tabs", &tabs.len())
            .finish_non_exhaustive()
    }
}

impl BrowserContext {
    /// Open a new tab in this context.
    pub async fn new_tab(&self) -> VitrinaResult<Tab> {
        #[cfg(feature = "browser")]
        let driver: Arc<dyn Driver> = Arc::new(self.inner.new_tab().await?);
        #[cfg(not(feature = "browser"))]
        let driver: Arc<dyn Driver> = Arc::new(crate::mock::MockPage::new());

        let tab = Tab::from_driver(driver);
        self.tabs.lock().expect("tab list poisoned").push(tab.clone());
        Ok(tab)
    }

    /// A previously opened tab by index, if still tracked.
    #[must_use]
    pub fn tab(&self, index: usize) -> Option<Tab> {
        self.tabs.lock().expect("tab list poisoned").get(index).cloned()
    }

    /// Track a tab this context did not open itself (e.g. a popup), so
    /// teardown closes it too.
    pub fn adopt(&self, tab: Tab) {
        self.tabs.lock().expect("tab list poisoned").push(tab);
    }

    /// Close every tab this context tracks.
    pub async fn close(&self) -> VitrinaResult<()> {
        let tabs: Vec<Tab> = std::mem::take(&mut *self.tabs.lock().expect("tab list poisoned"));
        for tab in tabs {
            tab.close().await?;
        }
        Ok(())
    }
}

/// A launched browser instance
pub struct Browser {
    config: BrowserConfig,
    #[cfg(feature = "browser")]
    backend: cdp::Backend,
}

impl std::fmt::Debug for Browser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Browser")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Browser {
    /// Launch a browser with the given configuration.
    pub async fn launch(config: BrowserConfig) -> VitrinaResult<Self> {
        #[cfg(feature = "browser")]
        {
            let backend = cdp::Backend::launch(&config).await?;
            Ok(Self { config, backend })
        }
        #[cfg(not(feature = "browser"))]
        {
            tracing::debug!("browser feature disabled, using mock backend");
            Ok(Self { config })
        }
    }

    /// The launch configuration.
    #[must_use]
    pub const fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Create an isolated context for one suite run.
    pub async fn new_context(&self) -> VitrinaResult<BrowserContext> {
        #[cfg(feature = "browser")]
        {
            let inner = self.backend.new_context().await?;
            Ok(BrowserContext {
                tabs: Mutex::new(Vec::new()),
                inner,
            })
        }
        #[cfg(not(feature = "browser"))]
        {
            Ok(BrowserContext {
                tabs: Mutex::new(Vec::new()),
            })
        }
    }

    /// Shut the browser down.
    pub async fn close(self) -> VitrinaResult<()> {
        #[cfg(feature = "browser")]
        self.backend.close().await?;
        Ok(())
    }
}

// ============================================================================
// CDP backend (behind the `browser` feature)
// ============================================================================

#[cfg(feature = "browser")]
mod cdp {
    use super::BrowserConfig;
    use crate::dialog::DialogPolicy;
    use crate::driver::Driver;
    use crate::result::{VitrinaError, VitrinaResult};
    use crate::selector::Selector;
    use crate::wait::NavigationOptions;
    use async_trait::async_trait;
    use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
    use chromiumoxide::cdp::browser_protocol::page::{
        EventJavascriptDialogOpening, HandleJavaScriptDialogParams,
    };
    use chromiumoxide::cdp::browser_protocol::target::CreateTargetParams;
    use chromiumoxide::page::Page as CdpPage;
    use futures::StreamExt;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    pub(super) struct Backend {
        browser: Arc<Mutex<CdpBrowser>>,
        #[allow(dead_code)]
        handle: tokio::task::JoinHandle<()>,
    }

    impl Backend {
        pub(super) async fn launch(config: &BrowserConfig) -> VitrinaResult<Self> {
            let mut builder = CdpConfig::builder()
                .window_size(config.viewport_width, config.viewport_height);

            if !config.headless {
                builder = builder.with_head();
            }
            if !config.sandbox {
                builder = builder.no_sandbox();
            }
            if let Some(ref path) = config.chromium_path {
                builder = builder.chrome_executable(path);
            }

            let cdp_config = builder.build().map_err(|e| VitrinaError::BrowserLaunch {
                message: e.to_string(),
            })?;

            let (browser, mut handler) =
                CdpBrowser::launch(cdp_config)
                    .await
                    .map_err(|e| VitrinaError::BrowserLaunch {
                        message: e.to_string(),
                    })?;

            let handle = tokio::spawn(async move {
                while let Some(h) = handler.next().await {
                    if h.is_err() {
                        break;
                    }
                }
            });

            Ok(Self {
                browser: Arc::new(Mutex::new(browser)),
                handle,
            })
        }

        pub(super) async fn new_context(&self) -> VitrinaResult<ContextHandle> {
            let mut browser = self.browser.lock().await;
            let context =
                browser
                    .start_incognito_context()
                    .await
                    .map_err(|e| VitrinaError::Page {
                        message: e.to_string(),
                    })?;
            let context_id = context.id().cloned();
            Ok(ContextHandle {
                browser: Arc::clone(&self.browser),
                context_id,
            })
        }

        pub(super) async fn close(&self) -> VitrinaResult<()> {
            let mut browser = self.browser.lock().await;
            browser
                .close()
                .await
                .map_err(|e| VitrinaError::BrowserLaunch {
                    message: e.to_string(),
                })?;
            Ok(())
        }
    }

    pub(super) struct ContextHandle {
        browser: Arc<Mutex<CdpBrowser>>,
        context_id: Option<chromiumoxide::cdp::browser_protocol::browser::BrowserContextId>,
    }

    impl ContextHandle {
        pub(super) async fn new_tab(&self) -> VitrinaResult<CdpDriver> {
            let browser = self.browser.lock().await;
            let mut params = CreateTargetParams::builder().url("about:blank");
            if let Some(ref id) = self.context_id {
                params = params.browser_context_id(id.clone());
            }
            let params = params.build().map_err(|e| VitrinaError::Page {
                message: e.to_string(),
            })?;
            let page = browser
                .new_page(params)
                .await
                .map_err(|e| VitrinaError::Page {
                    message: e.to_string(),
                })?;
            Ok(CdpDriver {
                browser: Arc::clone(&self.browser),
                page,
            })
        }
    }

    /// Driver over one CDP page.
    pub(super) struct CdpDriver {
        browser: Arc<Mutex<CdpBrowser>>,
        page: CdpPage,
    }

    impl CdpDriver {
        fn visible_probe(selector: &Selector) -> String {
            let sel = selector.as_str();
            format!(
                "(() => {{ const el = document.querySelector({sel:?}); if (!el) return false; \
                 const r = el.getBoundingClientRect(); const st = window.getComputedStyle(el); \
                 return r.width > 0 && r.height > 0 && st.visibility !== 'hidden' && st.display !== 'none'; }})()"
            )
        }

        async fn eval_bool(&self, expr: &str) -> VitrinaResult<bool> {
            let result = self
                .page
                .evaluate(expr)
                .await
                .map_err(|e| VitrinaError::Page {
                    message: e.to_string(),
                })?;
            result.into_value().map_err(|e| VitrinaError::Page {
                message: e.to_string(),
            })
        }
    }

    #[async_trait]
    impl Driver for CdpDriver {
        async fn goto(&self, url: &str, _options: &NavigationOptions) -> VitrinaResult<()> {
            self.page
                .goto(url)
                .await
                .map_err(|e| VitrinaError::Navigation {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
            self.page
                .wait_for_navigation()
                .await
                .map_err(|e| VitrinaError::Navigation {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
            Ok(())
        }

        async fn click(&self, selector: &Selector) -> VitrinaResult<()> {
            let element = self
                .page
                .find_element(selector.as_str())
                .await
                .map_err(|_| VitrinaError::element_not_found(selector.as_str()))?;
            element.click().await.map_err(|e| VitrinaError::Page {
                message: e.to_string(),
            })?;
            Ok(())
        }

        async fn is_visible(&self, selector: &Selector) -> VitrinaResult<bool> {
            self.eval_bool(&Self::visible_probe(selector)).await
        }

        async fn text_content(&self, selector: &Selector) -> VitrinaResult<String> {
            let element = self
                .page
                .find_element(selector.as_str())
                .await
                .map_err(|_| VitrinaError::element_not_found(selector.as_str()))?;
            let text = element.inner_text().await.map_err(|e| VitrinaError::Page {
                message: e.to_string(),
            })?;
            Ok(text.unwrap_or_default())
        }

        async fn set_value(&self, selector: &Selector, value: &str) -> VitrinaResult<()> {
            let sel = selector.as_str();
            let expr = format!(
                "(() => {{ const el = document.querySelector({sel:?}); if (!el) return false; \
                 el.value = {value:?}; \
                 el.dispatchEvent(new Event('input', {{bubbles: true}})); \
                 el.dispatchEvent(new Event('change', {{bubbles: true}})); return true; }})()"
            );
            if self.eval_bool(&expr).await? {
                Ok(())
            } else {
                Err(VitrinaError::element_not_found(sel))
            }
        }

        async fn select_by_visible_text(
            &self,
            selector: &Selector,
            text: &str,
        ) -> VitrinaResult<()> {
            let sel = selector.as_str();
            let expr = format!(
                "(() => {{ const el = document.querySelector({sel:?}); if (!el) return false; \
                 const opt = Array.from(el.options).find(o => o.text.trim() === {text:?}); \
                 if (!opt) return false; el.value = opt.value; \
                 el.dispatchEvent(new Event('change', {{bubbles: true}})); return true; }})()"
            );
            if self.eval_bool(&expr).await? {
                Ok(())
            } else {
                Err(VitrinaError::NotInteractable {
                    selector: sel.to_string(),
                    message: format!("no option with visible text '{text}'"),
                })
            }
        }

        async fn wait_for_navigation(&self, options: &NavigationOptions) -> VitrinaResult<()> {
            let wait = self.page.wait_for_navigation();
            let timeout = std::time::Duration::from_millis(options.timeout_ms);
            match tokio::time::timeout(timeout, wait).await {
                Ok(Ok(_)) => Ok(()),
                Ok(Err(e)) => Err(VitrinaError::Page {
                    message: e.to_string(),
                }),
                Err(_) => Err(VitrinaError::timeout(
                    options.timeout_ms,
                    format!("navigation settle ({})", options.wait_until),
                )),
            }
        }

        async fn title(&self) -> VitrinaResult<String> {
            let title = self.page.get_title().await.map_err(|e| VitrinaError::Page {
                message: e.to_string(),
            })?;
            Ok(title.unwrap_or_default())
        }

        async fn current_url(&self) -> VitrinaResult<String> {
            let url = self.page.url().await.map_err(|e| VitrinaError::Page {
                message: e.to_string(),
            })?;
            Ok(url.unwrap_or_default())
        }

        async fn set_dialog_policy(&self, policy: DialogPolicy) -> VitrinaResult<()> {
            if !policy.is_automatic() {
                return Ok(());
            }
            let accept = policy == DialogPolicy::AcceptAll;
            let mut events = self
                .page
                .event_listener::<EventJavascriptDialogOpening>()
                .await
                .map_err(|e| VitrinaError::Page {
                    message: e.to_string(),
                })?;
            let page = self.page.clone();
            let _ = tokio::spawn(async move {
                while events.next().await.is_some() {
                    let params = HandleJavaScriptDialogParams::new(accept);
                    if page.execute(params).await.is_err() {
                        break;
                    }
                }
            });
            Ok(())
        }

        async fn click_expecting_popup(
            &self,
            selector: &Selector,
        ) -> VitrinaResult<Arc<dyn Driver>> {
            let before: Vec<_> = {
                let browser = self.browser.lock().await;
                browser
                    .pages()
                    .await
                    .map_err(|e| VitrinaError::Page {
                        message: e.to_string(),
                    })?
                    .iter()
                    .map(|p| p.target_id().clone())
                    .collect()
            };

            self.click(selector).await?;

            // Poll for a target that did not exist before the click.
            let deadline = std::time::Instant::now() + std::time::Duration::from_secs(30);
            loop {
                let pages = {
                    let browser = self.browser.lock().await;
                    browser.pages().await.map_err(|e| VitrinaError::Page {
                        message: e.to_string(),
                    })?
                };
                if let Some(page) = pages
                    .into_iter()
                    .find(|p| !before.contains(p.target_id()))
                {
                    return Ok(Arc::new(CdpDriver {
                        browser: Arc::clone(&self.browser),
                        page,
                    }));
                }
                if std::time::Instant::now() >= deadline {
                    return Err(VitrinaError::timeout(
                        30_000,
                        format!("new tab after clicking '{selector}'"),
                    ));
                }
                tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            }
        }

        async fn close(&self) -> VitrinaResult<()> {
            self.page
                .clone()
                .close()
                .await
                .map_err(|e| VitrinaError::Page {
                    message: e.to_string(),
                })?;
            Ok(())
        }
    }
}
