//! Delayed full-page navigation through `window.location`.

use std::time::Duration;

use session::{Navigator, Page};
use tracing::debug;

/// [`Navigator`] that sets `location.href` once the delay has elapsed.
///
/// Scheduled navigations are fire-and-forget timers; nothing cancels them.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate_after(&self, page: Page, delay: Duration) {
        debug!(path = page.path(), delay_ms = delay.as_millis(), "navigation scheduled");
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if !delay.is_zero() {
                    gloo_timers::future::sleep(delay).await;
                }
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(page.path());
                }
            });
        }
    }
}
