// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::HuggingFaceSettings;
use crate::domain::catalog::adapter::{CatalogAdapter, CatalogError};
use crate::domain::catalog::normalize::{date_portion, or_not_available, typed_item};
use crate::domain::models::catalog_source::CatalogSource;
use crate::domain::models::dataset::{CatalogItem, NormalizedResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HubDataset {
    id: String,
    #[serde(default)]
    author: Option<String>,
    last_modified: String,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

/// Hugging Face Hub 数据集适配器
///
/// Hub 没有详情接口，详情请求走默认的"不可用"实现
pub struct HuggingFaceAdapter {
    client: Client,
    base_url: String,
    limit: u32,
}

impl HuggingFaceAdapter {
    pub fn new(settings: &HuggingFaceSettings) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            limit: settings.limit,
        })
    }
}

#[async_trait]
impl CatalogAdapter for HuggingFaceAdapter {
    fn source(&self) -> CatalogSource {
        CatalogSource::HuggingFace
    }

    async fn search(&self, keywords: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        let url = format!("{}/api/datasets", self.base_url);
        debug!(url = %url, keywords = %keywords, "Searching Hugging Face Hub");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("search", keywords.to_string()),
                ("limit", self.limit.to_string()),
                ("full", "true".to_string()),
            ])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(CatalogError::UnexpectedStatus(response.status().as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| CatalogError::MalformedResponse(e.to_string()))?;

        match body {
            Value::Array(items) => Ok(items),
            _ => Err(CatalogError::MalformedResponse(
                "Hugging Face API did not return the expected array format.".to_string(),
            )),
        }
    }

    fn normalize(&self, item: &CatalogItem) -> Result<NormalizedResult, CatalogError> {
        let dataset: HubDataset = typed_item(item)?;
        Ok(NormalizedResult {
            url: format!("https://huggingface.co/datasets/{}", dataset.id),
            title: dataset.id.clone(),
            id: dataset.id,
            source: CatalogSource::HuggingFace.display_name().to_string(),
            author: or_not_available(dataset.author),
            last_updated: date_portion(&dataset.last_modified),
            tags: dataset.tags.unwrap_or_default(),
        })
    }
}
