// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::catalog::adapter::CatalogAdapter;
use crate::domain::models::catalog_source::CatalogSource;
use std::collections::HashMap;
use std::sync::Arc;

/// 目录能力表
///
/// 每个目录对应一个提供 `{search, details, normalize}` 的适配器。
/// 新增目录只需注册新的适配器，编排逻辑不变
pub struct CatalogRegistry {
    adapters: HashMap<CatalogSource, Arc<dyn CatalogAdapter>>,
    fallback: CatalogSource,
}

impl Default for CatalogRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRegistry {
    /// 创建空注册表，回退目录为 CKAN
    pub fn new() -> Self {
        Self {
            adapters: HashMap::new(),
            fallback: CatalogSource::Ckan,
        }
    }

    /// 注册适配器，同一目录重复注册时后者覆盖前者
    pub fn register(&mut self, adapter: Arc<dyn CatalogAdapter>) -> &mut Self {
        self.adapters.insert(adapter.source(), adapter);
        self
    }

    pub fn with(mut self, adapter: Arc<dyn CatalogAdapter>) -> Self {
        self.register(adapter);
        self
    }

    /// 精确查找
    pub fn get(&self, source: CatalogSource) -> Option<Arc<dyn CatalogAdapter>> {
        self.adapters.get(&source).cloned()
    }

    /// 查找适配器，未注册时回退到默认目录
    pub fn resolve(&self, source: CatalogSource) -> Option<Arc<dyn CatalogAdapter>> {
        self.get(source).or_else(|| self.get(self.fallback))
    }

    pub fn sources(&self) -> Vec<CatalogSource> {
        CatalogSource::ALL
            .into_iter()
            .filter(|s| self.adapters.contains_key(s))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}
