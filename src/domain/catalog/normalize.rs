// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::catalog::adapter::CatalogError;
use crate::domain::models::dataset::{CatalogItem, NOT_AVAILABLE};
use serde::de::DeserializeOwned;

/// 将原生条目反序列化为适配器内部的类型化结构
///
/// 缺少必需字段即归一化失败
pub fn typed_item<T: DeserializeOwned>(item: &CatalogItem) -> Result<T, CatalogError> {
    T::deserialize(item).map_err(|e| CatalogError::Normalization(e.to_string()))
}

/// ISO 时间戳截取日期部分（`T` 之前）
pub fn date_portion(timestamp: &str) -> String {
    timestamp
        .split('T')
        .next()
        .unwrap_or(timestamp)
        .to_string()
}

/// 空值或缺失时回退为 "N/A"
pub fn or_not_available(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
