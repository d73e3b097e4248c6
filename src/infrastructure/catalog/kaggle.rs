// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::KaggleSettings;
use crate::domain::catalog::adapter::{CatalogAdapter, CatalogError};
use crate::domain::catalog::normalize::{or_not_available, typed_item};
use crate::domain::models::catalog_source::CatalogSource;
use crate::domain::models::dataset::{CatalogItem, DatasetDetails, NormalizedResult, NOT_AVAILABLE};
use crate::infrastructure::catalog::command::{CommandRunner, TokioCommandRunner};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tracing::{debug, info, warn};

/// 列分隔符：两个及以上空白
static COLUMN_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("Failed to compile column separator regex"));

#[derive(Debug, Deserialize)]
struct KaggleRow {
    #[serde(rename = "ref")]
    reference: String,
    title: String,
    #[serde(rename = "ownerName", default)]
    owner_name: Option<String>,
}

/// Kaggle 适配器
///
/// 通过本机的 Kaggle CLI 搜索数据集和下载元数据
pub struct KaggleAdapter {
    runner: Arc<dyn CommandRunner>,
    binary: String,
    metadata_file: String,
    temp_dir: Option<PathBuf>,
    timeout: Duration,
}

impl KaggleAdapter {
    pub fn new(settings: &KaggleSettings) -> Self {
        Self::with_runner(settings, Arc::new(TokioCommandRunner))
    }

    pub fn with_runner(settings: &KaggleSettings, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            binary: settings.binary.clone(),
            metadata_file: settings.metadata_file.clone(),
            temp_dir: settings.temp_dir.as_ref().map(PathBuf::from),
            timeout: settings.timeout(),
        }
    }

    fn scratch_dir(&self, id: &str) -> Result<TempDir, CatalogError> {
        let prefix = format!("kaggle-{}-", id.replace('/', "_"));
        let mut builder = tempfile::Builder::new();
        builder.prefix(&prefix);
        let dir = match &self.temp_dir {
            Some(parent) => builder.tempdir_in(parent)?,
            None => builder.tempdir()?,
        };
        Ok(dir)
    }

    async fn read_metadata(&self, id: &str, dir: &Path) -> Result<DatasetDetails, CatalogError> {
        let args = vec![
            "datasets".to_string(),
            "metadata".to_string(),
            "-p".to_string(),
            dir.to_string_lossy().into_owned(),
            "--".to_string(),
            id.to_string(),
        ];
        self.runner.run(&self.binary, &args, self.timeout).await?;

        let path = dir.join(&self.metadata_file);
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            info!(id = %id, file = %self.metadata_file, "Kaggle dataset has no metadata file");
            return Ok(DatasetDetails::missing_metadata(id));
        }

        let content = tokio::fs::read_to_string(&path).await?;
        let record: Value = serde_json::from_str(&content)
            .map_err(|e| CatalogError::MalformedResponse(e.to_string()))?;
        Ok(DatasetDetails::Record(record))
    }
}

/// 解析 `kaggle datasets list` 的列对齐文本输出
///
/// 第一行为表头，第二行为分隔线，其后每行一条记录，
/// 按位置将值映射到表头字段。少于三行时视为无结果
pub fn parse_listing(stdout: &str) -> Vec<CatalogItem> {
    let lines: Vec<&str> = stdout.trim().lines().collect();
    if lines.len() < 3 {
        return Vec::new();
    }

    let headers: Vec<&str> = COLUMN_SEPARATOR
        .split(lines[0])
        .map(str::trim)
        .collect();

    lines[2..]
        .iter()
        .filter(|row| !row.trim().is_empty())
        .map(|row| {
            let values = COLUMN_SEPARATOR.split(row.trim()).map(str::trim);
            let object: Map<String, Value> = headers
                .iter()
                .zip(values)
                .map(|(header, value)| (header.to_string(), Value::String(value.to_string())))
                .collect();
            Value::Object(object)
        })
        .collect()
}

#[async_trait]
impl CatalogAdapter for KaggleAdapter {
    fn source(&self) -> CatalogSource {
        CatalogSource::Kaggle
    }

    async fn search(&self, keywords: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        let args = vec![
            "datasets".to_string(),
            "list".to_string(),
            // 合并为单个参数，以 `-` 开头的关键词不会被当作选项
            format!("--search={}", keywords),
        ];
        let output = self.runner.run(&self.binary, &args, self.timeout).await?;
        let items = parse_listing(&output.stdout);
        debug!(count = items.len(), "Parsed Kaggle listing");
        Ok(items)
    }

    async fn details(&self, id: &str) -> Result<DatasetDetails, CatalogError> {
        let dir = self.scratch_dir(id)?;
        let result = self.read_metadata(id, dir.path()).await;

        // 后台清理，失败不影响结果
        tokio::task::spawn_blocking(move || {
            if let Err(e) = dir.close() {
                warn!(error = %e, "Failed to remove Kaggle scratch directory");
            }
        });

        result
    }

    fn normalize(&self, item: &CatalogItem) -> Result<NormalizedResult, CatalogError> {
        let row: KaggleRow = typed_item(item)?;
        Ok(NormalizedResult {
            url: format!("https://www.kaggle.com/datasets/{}", row.reference),
            id: row.reference,
            title: row.title,
            source: CatalogSource::Kaggle.display_name().to_string(),
            author: or_not_available(row.owner_name),
            last_updated: NOT_AVAILABLE.to_string(),
            tags: Vec::new(),
        })
    }
}
