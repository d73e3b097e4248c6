// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::CkanSettings;
use crate::domain::catalog::adapter::{CatalogAdapter, CatalogError};
use crate::domain::catalog::normalize::{date_portion, or_not_available, typed_item};
use crate::domain::models::catalog_source::CatalogSource;
use crate::domain::models::dataset::{CatalogItem, DatasetDetails, NormalizedResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// CKAN Action API 响应信封
#[derive(Debug, Deserialize)]
struct ActionEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct CkanPackage {
    id: String,
    title: String,
    name: String,
    metadata_modified: String,
    #[serde(default)]
    organization: Option<CkanOrganization>,
    tags: Vec<CkanTag>,
}

#[derive(Debug, Deserialize)]
struct CkanOrganization {
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CkanTag {
    display_name: String,
}

/// CKAN 适配器（默认指向 catalog.data.gov）
pub struct CkanAdapter {
    client: Client,
    base_url: String,
    rows: u32,
}

impl CkanAdapter {
    pub fn new(settings: &CkanSettings) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            rows: settings.rows,
        })
    }

    /// 调用 Action API，返回 `result` 字段
    async fn action(&self, action: &str, query: &[(&str, String)]) -> Result<Value, CatalogError> {
        let url = format!("{}/api/3/action/{}", self.base_url, action);
        debug!(url = %url, ?query, "Calling CKAN action");

        let response = self.client.get(&url).query(query).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::UnexpectedStatus(response.status().as_u16()));
        }

        let envelope: ActionEnvelope = response
            .json()
            .await
            .map_err(|e| CatalogError::MalformedResponse(e.to_string()))?;

        if !envelope.success {
            let detail = envelope
                .error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "CKAN API returned an error.".to_string());
            return Err(CatalogError::Rejected(detail));
        }

        Ok(envelope.result)
    }
}

#[async_trait]
impl CatalogAdapter for CkanAdapter {
    fn source(&self) -> CatalogSource {
        CatalogSource::Ckan
    }

    async fn search(&self, keywords: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        let result = self
            .action(
                "package_search",
                &[("q", keywords.to_string()), ("rows", self.rows.to_string())],
            )
            .await?;

        match result.get("results") {
            Some(Value::Array(items)) => Ok(items.clone()),
            _ => Err(CatalogError::MalformedResponse(
                "package_search result has no results array".to_string(),
            )),
        }
    }

    async fn details(&self, id: &str) -> Result<DatasetDetails, CatalogError> {
        match self.action("package_show", &[("id", id.to_string())]).await? {
            record @ Value::Object(_) => Ok(DatasetDetails::Record(record)),
            _ => Err(CatalogError::MalformedResponse(
                "package_show result is not an object".to_string(),
            )),
        }
    }

    fn normalize(&self, item: &CatalogItem) -> Result<NormalizedResult, CatalogError> {
        let package: CkanPackage = typed_item(item)?;
        Ok(NormalizedResult {
            id: package.id,
            title: package.title,
            source: CatalogSource::Ckan.display_name().to_string(),
            author: or_not_available(package.organization.and_then(|o| o.title)),
            url: format!("https://catalog.data.gov/dataset/{}", package.name),
            last_updated: date_portion(&package.metadata_modified),
            tags: package.tags.into_iter().map(|t| t.display_name).collect(),
        })
    }
}
