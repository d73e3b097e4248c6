// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{rejection::JsonRejection, Extension, Json};
use std::sync::Arc;

use crate::{
    application::dto::search_request::{SearchRequestDto, SearchResponseDto},
    domain::services::search_service::SearchService,
    presentation::errors::AppError,
};

/// 处理搜索请求
///
/// # 参数
///
/// * `service` - 搜索服务实例
/// * `payload` - 搜索请求数据 `{"query": string}`
///
/// # 返回值
///
/// 成功时返回 `{"source", "results"}`
///
/// # 错误
///
/// - 请求体无法解析或查询为空时返回 400
/// - 路由、目录访问或归一化失败时返回 500
pub async fn search(
    Extension(service): Extension<Arc<SearchService>>,
    payload: Result<Json<SearchRequestDto>, JsonRejection>,
) -> Result<Json<SearchResponseDto>, AppError> {
    let Json(payload) = payload?;
    let response = service.search(payload).await?;
    Ok(Json(response))
}
