//! Hands links to the system browser.

use hub_core::external_search_url;
use hub_logging::{hub_info, hub_warn};

/// Opens a generic web search for `title` in a new browser tab.
pub fn open_external_search(title: &str) {
    open_url(&external_search_url(title));
}

/// Failures are logged and otherwise left to the host environment.
pub fn open_url(url: &str) {
    hub_info!("Opening {}", url);
    if let Err(err) = open::that_detached(url) {
        hub_warn!("Could not open {}: {}", url, err);
    }
}
