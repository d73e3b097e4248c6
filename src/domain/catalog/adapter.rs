// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::catalog_source::CatalogSource;
use crate::domain::models::dataset::{CatalogItem, DatasetDetails, NormalizedResult};
use async_trait::async_trait;
use thiserror::Error;

/// 目录适配器错误类型
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 外部命令无法启动（未安装或不在 PATH 中）
    #[error("Command-line tool '{0}' is not installed or not on PATH")]
    ToolUnavailable(String),
    /// 外部命令以非零状态退出
    #[error("Command exited with {status}: {stderr}")]
    CommandFailed { status: String, stderr: String },
    /// HTTP 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 上游返回非成功状态码
    #[error("Upstream responded with status code: {0}")]
    UnexpectedStatus(u16),
    /// 上游在响应体中声明失败
    #[error("Upstream reported an error: {0}")]
    Rejected(String),
    /// 响应体无法解析或格式不符
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    /// 条目缺少必需字段
    #[error("Failed to normalize item: {0}")]
    Normalization(String),
    /// 超时
    #[error("Timed out after {0:?}")]
    Timeout(std::time::Duration),
    /// 文件系统错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// 数据目录适配器
///
/// 每个目录一个实现，提供搜索、详情和归一化三项能力。
/// 适配器注册到 [`CatalogRegistry`](crate::domain::catalog::registry::CatalogRegistry)
/// 后，编排逻辑不再按目录分支
#[async_trait]
pub trait CatalogAdapter: Send + Sync {
    /// 适配器对应的目录
    fn source(&self) -> CatalogSource;

    /// 按关键词搜索，返回目录原生条目
    async fn search(&self, keywords: &str) -> Result<Vec<CatalogItem>, CatalogError>;

    /// 获取单个数据集详情
    ///
    /// 默认不支持，返回固定占位对象
    async fn details(&self, _id: &str) -> Result<DatasetDetails, CatalogError> {
        Ok(DatasetDetails::not_available())
    }

    /// 将原生条目映射为统一结构
    fn normalize(&self, item: &CatalogItem) -> Result<NormalizedResult, CatalogError>;
}
