// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ServerSettings;
use crate::domain::services::search_service::SearchService;
use crate::presentation::handlers::{details_handler, search_handler, ui_handler};
use axum::{
    body::Body,
    http::{header, Method, Request},
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info_span;
use uuid::Uuid;

/// 创建应用路由
///
/// # 参数
///
/// * `service` - 搜索服务，通过 `Extension` 注入处理器
/// * `server` - 服务器配置，决定跨域策略
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(service: Arc<SearchService>, server: &ServerSettings) -> Router {
    let public_routes = Router::new()
        .route("/", get(ui_handler::index))
        .route("/health", get(health_check))
        .route("/version", get(version));

    let api_routes = Router::new()
        .route("/api/search", post(search_handler::search))
        .route("/api/details", post(details_handler::details));

    let cors = if server.cors_permissive {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
    };

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        info_span!(
            "http_request",
            request_id = %Uuid::new_v4(),
            method = %request.method(),
            uri = %request.uri(),
        )
    });

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(Extension(service))
        .layer(cors)
        .layer(trace)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
