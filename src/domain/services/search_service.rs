// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::details_request::DetailsRequestDto;
use crate::application::dto::search_request::{SearchRequestDto, SearchResponseDto};
use crate::domain::catalog::adapter::CatalogError;
use crate::domain::catalog::registry::CatalogRegistry;
use crate::domain::models::catalog_source::CatalogSource;
use crate::domain::models::dataset::{DatasetDetails, NormalizedResult};
use crate::domain::models::route_decision::RouteOutcome;
use crate::domain::services::llm_service::{LlmError, QueryRouter};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};
use validator::{Validate, ValidationErrors};

#[derive(Error, Debug)]
pub enum SearchServiceError {
    #[error("{0}")]
    ValidationError(String),
    #[error("The AI failed to determine a valid data source or keywords from your query. Please rephrase your query and try again.")]
    Unclassified,
    #[error("Failed to parse query with AI.")]
    Routing(#[source] LlmError),
    #[error("No adapter registered for {}.", .0.display_name())]
    NoAdapter(CatalogSource),
    #[error("Failed to fetch from {}: {cause}", .catalog.display_name())]
    ToolUnavailable {
        catalog: CatalogSource,
        #[source]
        cause: CatalogError,
    },
    #[error("Failed to fetch from {}.", .catalog.display_name())]
    Fetch {
        catalog: CatalogSource,
        #[source]
        cause: CatalogError,
    },
    #[error("Failed to fetch details from {}.", .catalog.display_name())]
    Details {
        catalog: CatalogSource,
        #[source]
        cause: CatalogError,
    },
    #[error("Failed to normalize results from {}.", .catalog.display_name())]
    Normalize {
        catalog: CatalogSource,
        #[source]
        cause: CatalogError,
    },
}

impl SearchServiceError {
    fn fetch(catalog: CatalogSource, cause: CatalogError) -> Self {
        match cause {
            CatalogError::ToolUnavailable(_) => Self::ToolUnavailable { catalog, cause },
            cause => Self::Fetch { catalog, cause },
        }
    }
}

/// 搜索服务
///
/// 串联 路由器 → 适配器 → 归一化，以及详情查询的直通流程。
/// 不按目录分支，目录差异全部封装在 [`CatalogRegistry`] 的适配器中
pub struct SearchService {
    router: Arc<dyn QueryRouter>,
    catalogs: Arc<CatalogRegistry>,
}

impl SearchService {
    pub fn new(router: Arc<dyn QueryRouter>, catalogs: Arc<CatalogRegistry>) -> Self {
        Self { router, catalogs }
    }

    /// 处理搜索请求
    ///
    /// # 错误
    ///
    /// - 查询为空时返回 `ValidationError`，不会调用路由器
    /// - 模型回复不符合约定时返回 `Unclassified`，不会调用任何适配器
    /// - 任何一个条目归一化失败都会使整个请求失败
    pub async fn search(
        &self,
        dto: SearchRequestDto,
    ) -> Result<SearchResponseDto, SearchServiceError> {
        dto.validate()
            .map_err(|e| SearchServiceError::ValidationError(first_message(&e)))?;
        let query = dto.query.unwrap_or_default();

        // 1. Route
        let decision = match self.router.route(&query).await {
            Ok(RouteOutcome::Routed(decision)) => decision,
            Ok(RouteOutcome::Unclassified { .. }) => {
                warn!(query = %query, "Query could not be classified");
                return Err(SearchServiceError::Unclassified);
            }
            Err(e) => {
                error!(error = %e, "Error communicating with the LLM API");
                return Err(SearchServiceError::Routing(e));
            }
        };
        info!(
            source = %decision.label,
            resolved = %decision.source,
            keywords = %decision.keywords,
            "AI determined routing"
        );

        // 2. Dispatch
        let adapter = self
            .catalogs
            .resolve(decision.source)
            .ok_or(SearchServiceError::NoAdapter(decision.source))?;
        let catalog = adapter.source();

        let items = adapter.search(&decision.keywords).await.map_err(|e| {
            error!(catalog = %catalog, error = %e, "Catalog search failed");
            SearchServiceError::fetch(catalog, e)
        })?;

        // 3. Normalize
        let results = items
            .iter()
            .map(|item| adapter.normalize(item))
            .collect::<Result<Vec<NormalizedResult>, _>>()
            .map_err(|e| {
                error!(catalog = %catalog, error = %e, "Normalization failed");
                SearchServiceError::Normalize { catalog, cause: e }
            })?;

        Ok(SearchResponseDto {
            source: decision.label,
            results,
        })
    }

    /// 处理详情请求
    ///
    /// 来源标签不匹配任何已注册目录时返回固定的"不可用"对象
    pub async fn details(
        &self,
        dto: DetailsRequestDto,
    ) -> Result<DatasetDetails, SearchServiceError> {
        dto.validate()
            .map_err(|e| SearchServiceError::ValidationError(first_message(&e)))?;
        let id = dto.id.unwrap_or_default();
        let label = dto.source.unwrap_or_default();

        info!(id = %id, source = %label, "Fetching details");

        let Some(adapter) = CatalogSource::from_label(&label).and_then(|s| self.catalogs.get(s))
        else {
            return Ok(DatasetDetails::not_available());
        };
        let catalog = adapter.source();

        adapter.details(&id).await.map_err(|e| {
            error!(catalog = %catalog, id = %id, error = %e, "Details fetch failed");
            SearchServiceError::Details { catalog, cause: e }
        })
    }
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
