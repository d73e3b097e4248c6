// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::settings_for;
use metadata_explorer::domain::catalog::adapter::{CatalogAdapter, CatalogError};
use metadata_explorer::infrastructure::catalog::huggingface::HuggingFaceAdapter;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn adapter() -> (MockServer, HuggingFaceAdapter) {
    let mock = MockServer::start().await;
    let adapter = HuggingFaceAdapter::new(&settings_for(&mock).huggingface).unwrap();
    (mock, adapter)
}

#[tokio::test]
async fn test_search_sends_query_and_user_agent() {
    let (mock, adapter) = adapter().await;
    Mock::given(method("GET"))
        .and(path("/api/datasets"))
        .and(query_param("search", "text classification"))
        .and(query_param("limit", "15"))
        .and(query_param("full", "true"))
        .and(header("User-Agent", "metadata-explorer/0.1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "id": "imdb" }, { "id": "ag_news" }])),
        )
        .expect(1)
        .mount(&mock)
        .await;

    let items = adapter.search("text classification").await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["id"], "ag_news");
}

#[tokio::test]
async fn test_search_non_array_body_is_malformed() {
    let (mock, adapter) = adapter().await;
    Mock::given(method("GET"))
        .and(path("/api/datasets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "rate limited" })))
        .mount(&mock)
        .await;

    let err = adapter.search("audio").await.unwrap_err();

    assert!(matches!(err, CatalogError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_search_non_200_status_fails() {
    let (mock, adapter) = adapter().await;
    Mock::given(method("GET"))
        .and(path("/api/datasets"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock)
        .await;

    let err = adapter.search("audio").await.unwrap_err();

    assert!(matches!(err, CatalogError::UnexpectedStatus(204)));
}
