//! Navigation for a terminal: there is no page to open, so intents are logged.

use std::time::Duration;

use session::{Navigator, Page};
use tracing::info;

#[derive(Clone, Copy, Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate_after(&self, page: Page, delay: Duration) {
        info!(path = page.path(), delay_ms = delay.as_millis(), "next page");
    }
}
