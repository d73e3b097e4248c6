// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::response::Html;

static INDEX_HTML: &str = include_str!("../../../static/index.html");

/// 浏览器端界面，与 API 同源
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
