use url::Url;

const WEB_SEARCH_BASE: &str = "https://www.google.com/search";
const VIDEO_WATCH_BASE: &str = "https://www.youtube.com/watch";

/// Generic web-search URL for `text`, e.g. `https://www.google.com/search?q=Index+Funds`.
pub fn external_search_url(text: &str) -> String {
    with_single_param(WEB_SEARCH_BASE, "q", text)
}

/// Watch page for a YouTube video id.
pub fn video_watch_url(video_id: &str) -> String {
    with_single_param(VIDEO_WATCH_BASE, "v", video_id)
}

fn with_single_param(base: &str, key: &str, value: &str) -> String {
    match Url::parse_with_params(base, &[(key, value)]) {
        Ok(url) => url.to_string(),
        // Both bases are constant, valid URLs.
        Err(_) => format!("{base}?{key}="),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_encodes_the_title() {
        assert_eq!(
            external_search_url("Stocks & Bonds: 2025?"),
            "https://www.google.com/search?q=Stocks+%26+Bonds%3A+2025%3F"
        );
    }

    #[test]
    fn empty_title_still_builds_a_url() {
        assert_eq!(external_search_url(""), "https://www.google.com/search?q=");
    }

    #[test]
    fn watch_url_carries_the_video_id() {
        assert_eq!(
            video_watch_url("p7HKvqRI_Bo"),
            "https://www.youtube.com/watch?v=p7HKvqRI_Bo"
        );
    }
}
