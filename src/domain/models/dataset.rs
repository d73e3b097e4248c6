// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 目录原生条目
///
/// 各目录格式不同，由对应适配器自行解释
pub type CatalogItem = Value;

/// 缺省字段的占位值
pub const NOT_AVAILABLE: &str = "N/A";

pub const DETAILS_NOT_AVAILABLE_MESSAGE: &str =
    "Detailed view is not yet available for this source.";

pub const MISSING_METADATA_MESSAGE: &str =
    "This Kaggle dataset does not have a detailed datapackage.json metadata file.";

/// 归一化后的搜索结果
///
/// 所有字段始终存在，前端无条件渲染
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedResult {
    pub id: String,
    pub title: String,
    pub source: String,
    pub author: String,
    pub url: String,
    pub last_updated: String,
    pub tags: Vec<String>,
}

/// 数据集详情，不做归一化
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DatasetDetails {
    /// 上游返回的原始记录
    Record(Value),
    /// 上游没有元数据文件，仍视为成功
    MissingMetadata {
        name: String,
        resources: Vec<Value>,
        message: String,
    },
    /// 该目录不支持详情
    NotAvailable { message: String },
}

impl DatasetDetails {
    pub fn not_available() -> Self {
        Self::NotAvailable {
            message: DETAILS_NOT_AVAILABLE_MESSAGE.to_string(),
        }
    }

    pub fn missing_metadata(id: &str) -> Self {
        Self::MissingMetadata {
            name: id.to_string(),
            resources: Vec::new(),
            message: MISSING_METADATA_MESSAGE.to_string(),
        }
    }
}
