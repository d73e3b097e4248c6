// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::catalog_source::CatalogSource;

/// 路由决策：目标目录和搜索关键词
///
/// 每个查询产生一次，分发后即丢弃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDecision {
    pub source: CatalogSource,
    /// 模型返回的原始标签，原样回传给调用方
    pub label: String,
    pub keywords: String,
}

impl RouteDecision {
    pub fn new(label: impl Into<String>, keywords: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            source: CatalogSource::from_route_label(&label),
            label,
            keywords: keywords.into(),
        }
    }
}

/// 路由结果
///
/// `Unclassified` 表示模型有回复但不符合约定格式，调用方必须显式处理
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Routed(RouteDecision),
    Unclassified { reply: String },
}
