// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, create_test_app_with_kaggle, FakeRunner, RouterScript};
use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn ckan_package(id: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Dataset {}", id),
        "name": format!("dataset-{}", id),
        "metadata_modified": "2024-01-15T09:30:00.000000",
        "organization": { "title": "City of New York" },
        "tags": [{ "display_name": "covid" }, { "display_name": "health" }]
    })
}

#[tokio::test]
async fn test_search_kaggle_route_uses_cli_listing() {
    // Given: 路由器把查询分到 Kaggle
    let app = create_test_app(RouterScript::Route("Kaggle", "climate change")).await;

    // When
    let response = app
        .server
        .post("/api/search")
        .json(&json!({ "query": "kaggle data on climate change" }))
        .await;

    // Then
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["source"], "Kaggle");
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["id"], "sevgisarac/temperature-change");
    assert_eq!(
        results[0]["url"],
        "https://www.kaggle.com/datasets/sevgisarac/temperature-change"
    );
    assert_eq!(results[0]["lastUpdated"], "N/A");
    assert_eq!(results[0]["author"], "N/A");
    assert_eq!(results[0]["tags"], json!([]));

    let calls = app.kaggle.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "kaggle");
    assert_eq!(calls[0].1, vec!["datasets", "list", "--search=climate change"]);
}

#[tokio::test]
async fn test_search_ckan_route() {
    let app = create_test_app(RouterScript::Route("CKAN", "new york covid")).await;
    Mock::given(method("GET"))
        .and(path("/api/3/action/package_search"))
        .and(query_param("q", "new york covid"))
        .and(query_param("rows", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "result": { "count": 1, "results": [ckan_package("1")] }
        })))
        .expect(1)
        .mount(&app.mock)
        .await;

    let response = app
        .server
        .post("/api/search")
        .json(&json!({ "query": "new york covid data" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["source"], "CKAN");
    assert_eq!(body["results"][0]["source"], "data.gov (CKAN)");
    assert_eq!(body["results"][0]["author"], "City of New York");
    assert_eq!(body["results"][0]["lastUpdated"], "2024-01-15");
    assert_eq!(body["results"][0]["tags"], json!(["covid", "health"]));
    assert_eq!(
        body["results"][0]["url"],
        "https://catalog.data.gov/dataset/dataset-1"
    );
}

#[tokio::test]
async fn test_search_huggingface_route_is_case_insensitive() {
    let app = create_test_app(RouterScript::Route("huggingface", "audio")).await;
    Mock::given(method("GET"))
        .and(path("/api/datasets"))
        .and(query_param("search", "audio"))
        .and(query_param("limit", "15"))
        .and(query_param("full", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "openslr/librispeech_asr",
                "author": "openslr",
                "lastModified": "2024-02-10T08:00:00.000Z",
                "tags": ["audio", "speech", "asr", "english"]
            }
        ])))
        .expect(1)
        .mount(&app.mock)
        .await;

    let response = app
        .server
        .post("/api/search")
        .json(&json!({ "query": "Show me audio datasets on HuggingFace" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["source"], "huggingface");
    assert_eq!(body["results"][0]["title"], "openslr/librispeech_asr");
    assert_eq!(body["results"][0]["source"], "Hugging Face");
    assert_eq!(body["results"][0]["tags"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_unrecognized_label_falls_back_to_ckan() {
    let app = create_test_app(RouterScript::Route("Zenodo", "particle physics")).await;
    Mock::given(method("GET"))
        .and(path("/api/3/action/package_search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "result": { "count": 0, "results": [] }
        })))
        .expect(1)
        .mount(&app.mock)
        .await;

    let response = app
        .server
        .post("/api/search")
        .json(&json!({ "query": "particle physics on zenodo" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["source"], "Zenodo");
    assert_eq!(body["results"], json!([]));
    assert!(app.kaggle.calls().is_empty());
}

#[tokio::test]
async fn test_empty_query_is_rejected_before_routing() {
    let app = create_test_app(RouterScript::Route("CKAN", "x")).await;

    for payload in [json!({ "query": "" }), json!({})] {
        let response = app.server.post("/api/search").json(&payload).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "Query is required" })
        );
    }
    assert_eq!(app.router.calls(), 0);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = create_test_app(RouterScript::Route("CKAN", "x")).await;

    let response = app.server.post("/api/search").text("not json").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
    assert_eq!(app.router.calls(), 0);
}

#[tokio::test]
async fn test_unclassified_query_returns_rephrase_message() {
    let app = create_test_app(RouterScript::Unclassified).await;

    let response = app
        .server
        .post("/api/search")
        .json(&json!({ "query": "hmm" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>()["error"],
        "The AI failed to determine a valid data source or keywords from your query. Please rephrase your query and try again."
    );
    assert!(app.kaggle.calls().is_empty());
}

#[tokio::test]
async fn test_router_failure_returns_generic_message() {
    let app = create_test_app(RouterScript::Fail).await;

    let response = app
        .server
        .post("/api/search")
        .json(&json!({ "query": "census" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>()["error"],
        "Failed to parse query with AI."
    );
}

#[tokio::test]
async fn test_ckan_rejection_returns_server_error() {
    let app = create_test_app(RouterScript::Route("CKAN", "crime rates")).await;
    Mock::given(method("GET"))
        .and(path("/api/3/action/package_search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": { "message": "Search error" }
        })))
        .mount(&app.mock)
        .await;

    let response = app
        .server
        .post("/api/search")
        .json(&json!({ "query": "crime rates" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>()["error"],
        "Failed to fetch from data.gov (CKAN)."
    );
}

#[tokio::test]
async fn test_missing_kaggle_cli_is_distinct_error() {
    let app = create_test_app_with_kaggle(
        RouterScript::Route("Kaggle", "titanic"),
        FakeRunner::unavailable(),
    )
    .await;

    let response = app
        .server
        .post("/api/search")
        .json(&json!({ "query": "kaggle titanic" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Failed to fetch from Kaggle"));
    assert!(error.contains("'kaggle' is not installed"));
}

#[tokio::test]
async fn test_kaggle_details_with_metadata_file() {
    let metadata = r#"{"name":"temperature-change","resources":[{"name":"Environment_Temperature_change_E_All_Data_NOFLAG.csv","bytes":2048}]}"#;
    let app = create_test_app_with_kaggle(
        RouterScript::Route("Kaggle", "x"),
        FakeRunner::with_metadata(metadata),
    )
    .await;

    let response = app
        .server
        .post("/api/details")
        .json(&json!({ "id": "sevgisarac/temperature-change", "source": "Kaggle" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["name"], "temperature-change");
    assert_eq!(body["resources"][0]["bytes"], 2048);

    let calls = app.kaggle.calls();
    assert_eq!(calls[0].1[..3], ["datasets", "metadata", "-p"]);
    assert_eq!(calls[0].1[4..], ["--", "sevgisarac/temperature-change"]);
}

#[tokio::test]
async fn test_kaggle_details_without_metadata_file() {
    let app = create_test_app_with_kaggle(
        RouterScript::Route("Kaggle", "x"),
        FakeRunner::default(),
    )
    .await;

    let response = app
        .server
        .post("/api/details")
        .json(&json!({ "id": "owner/no-package", "source": "kaggle" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "name": "owner/no-package",
            "resources": [],
            "message": "This Kaggle dataset does not have a detailed datapackage.json metadata file."
        })
    );
}

#[tokio::test]
async fn test_kaggle_details_cli_failure_is_server_error() {
    let app = create_test_app_with_kaggle(
        RouterScript::Route("Kaggle", "x"),
        FakeRunner::failing(),
    )
    .await;

    let response = app
        .server
        .post("/api/details")
        .json(&json!({ "id": "owner/private", "source": "Kaggle" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>()["error"],
        "Failed to fetch details from Kaggle."
    );
}

#[tokio::test]
async fn test_ckan_details_returns_raw_record() {
    let app = create_test_app(RouterScript::Route("CKAN", "x")).await;
    let record = json!({
        "id": "pkg-1",
        "name": "dataset-pkg-1",
        "resources": [{ "name": "data.csv", "format": "CSV" }]
    });
    Mock::given(method("GET"))
        .and(path("/api/3/action/package_show"))
        .and(query_param("id", "pkg-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "result": record.clone() })),
        )
        .expect(1)
        .mount(&app.mock)
        .await;

    let response = app
        .server
        .post("/api/details")
        .json(&json!({ "id": "pkg-1", "source": "data.gov (CKAN)" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), record);
}

#[tokio::test]
async fn test_details_for_huggingface_is_not_available() {
    let app = create_test_app(RouterScript::Route("CKAN", "x")).await;

    let response = app
        .server
        .post("/api/details")
        .json(&json!({ "id": "openslr/librispeech_asr", "source": "Hugging Face" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Detailed view is not yet available for this source." })
    );
}

#[tokio::test]
async fn test_details_requires_id_and_source() {
    let app = create_test_app(RouterScript::Route("CKAN", "x")).await;

    for payload in [
        json!({ "id": "pkg-1" }),
        json!({ "source": "Kaggle" }),
        json!({ "id": "", "source": "Kaggle" }),
    ] {
        let response = app.server.post("/api/details").json(&payload).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "Dataset ID and source are required" })
        );
    }
    assert!(app.kaggle.calls().is_empty());
}
