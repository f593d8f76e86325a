//! Page identity contract.

/// Identity constants a page object exposes for script assertions.
///
/// Scripts assert the screen they landed on by comparing the rendered header
/// against `expected_title`, the way every scenario opens.
pub trait PageIdentity {
    /// The title text this screen is expected to render.
    fn expected_title(&self) -> &'static str;
}
