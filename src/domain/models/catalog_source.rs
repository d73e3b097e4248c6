// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 数据目录类型
///
/// 路由器输出、适配器注册表和归一化结果都以它为键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogSource {
    /// Kaggle，通过本地 CLI 访问
    #[serde(rename = "Kaggle")]
    Kaggle,
    /// CKAN 元数据目录（catalog.data.gov），默认目录
    #[serde(rename = "CKAN")]
    Ckan,
    /// Hugging Face Hub 数据集
    #[serde(rename = "HuggingFace")]
    HuggingFace,
}

impl CatalogSource {
    pub const ALL: [CatalogSource; 3] = [Self::Kaggle, Self::Ckan, Self::HuggingFace];

    /// 路由标签，与提示词中的示例一致
    pub fn label(&self) -> &'static str {
        match self {
            Self::Kaggle => "Kaggle",
            Self::Ckan => "CKAN",
            Self::HuggingFace => "HuggingFace",
        }
    }

    /// 展示名称，写入归一化结果的 `source` 字段
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Kaggle => "Kaggle",
            Self::Ckan => "data.gov (CKAN)",
            Self::HuggingFace => "Hugging Face",
        }
    }

    /// 解析路由器给出的标签
    ///
    /// 不区分大小写；无法识别的标签回退到 CKAN
    pub fn from_route_label(label: &str) -> Self {
        Self::from_label(label).unwrap_or(Self::Ckan)
    }

    /// 精确匹配路由标签或展示名称（不区分大小写）
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "kaggle" => Some(Self::Kaggle),
            "ckan" | "data.gov (ckan)" => Some(Self::Ckan),
            "huggingface" | "hugging face" => Some(Self::HuggingFace),
            _ => None,
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
