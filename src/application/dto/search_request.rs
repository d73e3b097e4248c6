// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::dataset::NormalizedResult;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct SearchRequestDto {
    #[serde(default)]
    #[validate(required(message = "Query is required"), length(min = 1, message = "Query is required"))]
    pub query: Option<String>,
}

/// 搜索响应
///
/// `source` 原样回传路由器给出的标签，实际分发的目录见结果中的 `source`
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponseDto {
    pub source: String,
    pub results: Vec<NormalizedResult>,
}
