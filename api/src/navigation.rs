//! Leaving the current view.

/// The path an unauthorized submission sends the user to by default.
pub const DEFAULT_REDIRECT: &str = "/";

/// Something that can move the user to another location of the app.
///
/// The browser implementation replaces `window.location`; tests record the
/// requested paths instead.
pub trait Navigator {
    fn navigate(&self, path: &str);
}
