// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use api::navigation::Navigator;
    use dioxus_logger::tracing::warn;
    use web_sys::Window;

    /// Navigates by replacing `window.location`, leaving the app entirely.
    pub struct BrowserNavigator;

    impl Navigator for BrowserNavigator {
        fn navigate(&self, path: &str) {
            match web_sys::window().map(|win: Window| win.location()) {
                Some(location) => {
                    if let Err(e) = location.set_href(path) {
                        warn!("navigation to {path} failed: {e:?}");
                    }
                }
                None => warn!("navigation to {path} failed: no window"),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use api::navigation::Navigator;
    use dioxus::prelude::document;
    use dioxus::prelude::spawn;
    use dioxus_logger::tracing::debug;
    use dioxus_logger::tracing::warn;

    /// Navigates the webview the app is rendered in.
    ///
    /// Must be called from inside the Dioxus runtime (an event handler or a
    /// spawned task).
    pub struct BrowserNavigator;

    impl Navigator for BrowserNavigator {
        fn navigate(&self, path: &str) {
            debug!("navigating webview to {path}");
            // {:?} quotes and escapes the path as a JS string literal.
            let eval = document::eval(&format!("window.location.href = {path:?};"));
            let path = path.to_string();
            spawn(async move {
                if let Err(e) = eval.await {
                    warn!("navigation to {path} failed: {e:?}");
                }
            });
        }
    }
}
