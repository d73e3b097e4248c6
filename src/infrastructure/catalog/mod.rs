// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod ckan;
pub mod command;
pub mod huggingface;
pub mod kaggle;

use crate::config::settings::Settings;
use crate::domain::catalog::adapter::CatalogError;
use crate::domain::catalog::registry::CatalogRegistry;
use ckan::CkanAdapter;
use huggingface::HuggingFaceAdapter;
use kaggle::KaggleAdapter;
use std::sync::Arc;
use tracing::info;

/// 根据配置创建包含全部目录适配器的注册表
pub fn build_registry(settings: &Settings) -> Result<CatalogRegistry, CatalogError> {
    let registry = CatalogRegistry::new()
        .with(Arc::new(KaggleAdapter::new(&settings.kaggle)))
        .with(Arc::new(CkanAdapter::new(&settings.ckan)?))
        .with(Arc::new(HuggingFaceAdapter::new(&settings.huggingface)?));

    info!(sources = ?registry.sources(), "Catalog adapters registered");
    Ok(registry)
}
