use hub_engine::{
    ApiKey, ApiKeys, ArticleResult, ReqwestSearchBackend, SearchBackend, SearchError,
    SearchSettings, VideoResult, MISSING_DESCRIPTION, RESULT_CAP,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> SearchSettings {
    SearchSettings {
        video_endpoint: format!("{}/youtube/v3/search", server.uri()),
        article_endpoint: format!("{}/v2/everything", server.uri()),
        ..SearchSettings::default()
    }
}

fn keys() -> ApiKeys {
    ApiKeys {
        youtube: Some(ApiKey::new("yt-key")),
        news: Some(ApiKey::new("news-key")),
    }
}

fn backend(server: &MockServer, keys: ApiKeys) -> ReqwestSearchBackend {
    ReqwestSearchBackend::new(settings(server), keys).expect("backend")
}

fn video_item(id: &str, title: &str) -> serde_json::Value {
    json!({ "id": { "kind": "youtube#video", "videoId": id }, "snippet": { "title": title } })
}

#[tokio::test]
async fn video_search_sends_expected_parameters_and_maps_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .and(query_param("part", "snippet"))
        .and(query_param("q", "index funds & ETFs"))
        .and(query_param("type", "video"))
        .and(query_param("maxResults", "6"))
        .and(query_param("key", "yt-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [video_item("v2", "Second by id"), video_item("v1", "First by id")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let videos = backend(&server, keys())
        .search_videos("index funds & ETFs")
        .await
        .expect("videos");

    assert_eq!(
        videos,
        vec![
            VideoResult {
                title: "Second by id".to_string(),
                video_id: "v2".to_string(),
            },
            VideoResult {
                title: "First by id".to_string(),
                video_id: "v1".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn empty_video_query_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    for query in ["", "   ", "\n"] {
        let err = backend(&server, keys()).search_videos(query).await.unwrap_err();
        assert_eq!(err, SearchError::Validation);
    }
}

#[tokio::test]
async fn missing_keys_never_reach_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let no_keys = backend(&server, ApiKeys::default());
    assert_eq!(
        no_keys.search_videos("ETF").await.unwrap_err(),
        SearchError::Config { service: "YouTube" }
    );
    assert_eq!(
        no_keys.search_articles("").await.unwrap_err(),
        SearchError::Config { service: "News" }
    );

    let blank_keys = backend(
        &server,
        ApiKeys {
            youtube: Some(ApiKey::new("")),
            news: Some(ApiKey::new("  ")),
        },
    );
    assert!(matches!(
        blank_keys.search_videos("ETF").await,
        Err(SearchError::Config { .. })
    ));
    assert!(matches!(
        blank_keys.search_articles("gold").await,
        Err(SearchError::Config { .. })
    ));
}

#[tokio::test]
async fn non_success_status_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .respond_with(ResponseTemplate::new(403).set_body_string("quotaExceeded"))
        .mount(&server)
        .await;

    let err = backend(&server, keys()).search_videos("ETF").await.unwrap_err();

    assert_eq!(
        err,
        SearchError::Http {
            status: 403,
            body: "quotaExceeded".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "HTTP error! Status: 403, Message: quotaExceeded"
    );
}

#[tokio::test]
async fn empty_or_absent_lists_are_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "kind": "x" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "ok", "articles": [] })),
        )
        .mount(&server)
        .await;

    let backend = backend(&server, keys());
    assert_eq!(
        backend.search_videos("ETF").await.unwrap_err(),
        SearchError::EmptyResult
    );
    assert_eq!(
        backend.search_articles("gold").await.unwrap_err(),
        SearchError::EmptyResult
    );
}

#[tokio::test]
async fn malformed_payload_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = backend(&server, keys()).search_articles("gold").await.unwrap_err();
    assert!(matches!(err, SearchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn empty_article_query_uses_default_topic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/everything"))
        .and(query_param("q", "finance"))
        .and(query_param("language", "en"))
        .and(query_param("sortBy", "relevancy"))
        .and(query_param("apiKey", "news-key"))
        .and(query_param("pageSize", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "articles": [
                { "title": "Markets open higher", "description": "Stocks rise.", "url": "https://n.example/a" },
                { "title": "Bond yields slip", "description": null, "url": "https://n.example/b" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let articles = backend(&server, keys())
        .search_articles("")
        .await
        .expect("articles");

    assert_eq!(
        articles,
        vec![
            ArticleResult {
                title: "Markets open higher".to_string(),
                description: "Stocks rise.".to_string(),
                url: "https://n.example/a".to_string(),
            },
            ArticleResult {
                title: "Bond yields slip".to_string(),
                description: MISSING_DESCRIPTION.to_string(),
                url: "https://n.example/b".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn same_query_twice_yields_same_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [video_item("a", "A"), video_item("b", "B"), video_item("c", "C")]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let backend = backend(&server, keys());
    let first = backend.search_videos("bonds").await.expect("first");
    let second = backend.search_videos("bonds").await.expect("second");

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[tokio::test]
async fn results_beyond_the_cap_are_dropped() {
    let server = MockServer::start().await;
    let items: Vec<_> = (0..9)
        .map(|i| video_item(&format!("v{i}"), &format!("Video {i}")))
        .collect();
    Mock::given(method("GET"))
        .and(path("/youtube/v3/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": items })))
        .mount(&server)
        .await;

    let videos = backend(&server, keys())
        .search_videos("dividends")
        .await
        .expect("videos");

    assert_eq!(videos.len(), RESULT_CAP);
    assert_eq!(videos[0].video_id, "v0");
    assert_eq!(videos[RESULT_CAP - 1].video_id, "v5");
}
