// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{rejection::JsonRejection, Extension, Json};
use std::sync::Arc;

use crate::{
    application::dto::details_request::DetailsRequestDto,
    domain::{models::dataset::DatasetDetails, services::search_service::SearchService},
    presentation::errors::AppError,
};

/// 处理数据集详情请求
///
/// 返回上游原始记录，不做归一化。
/// 不支持详情的目录返回固定的说明对象（200）
pub async fn details(
    Extension(service): Extension<Arc<SearchService>>,
    payload: Result<Json<DetailsRequestDto>, JsonRejection>,
) -> Result<Json<DatasetDetails>, AppError> {
    let Json(payload) = payload?;
    let details = service.details(payload).await?;
    Ok(Json(details))
}
