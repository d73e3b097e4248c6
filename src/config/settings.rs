// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// 应用程序配置设置
///
/// 包含服务器、LLM 路由以及三个数据目录适配器的全部配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// LLM 配置
    pub llm: LlmSettings,
    /// Kaggle CLI 配置
    pub kaggle: KaggleSettings,
    /// CKAN 配置
    pub ckan: CkanSettings,
    /// Hugging Face 配置
    pub huggingface: HuggingFaceSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// 是否允许任意来源的跨域请求
    pub cors_permissive: bool,
}

/// LLM 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    /// API 密钥（OpenRouter 或其他 OpenAI 兼容服务）
    pub api_key: Option<String>,
    /// 模型名称
    pub model: String,
    /// API 基础 URL
    pub api_base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

/// Kaggle CLI 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct KaggleSettings {
    /// CLI 可执行文件
    pub binary: String,
    /// `datasets metadata` 写出的元数据文件名
    pub metadata_file: String,
    /// 临时目录的父目录，缺省为系统临时目录
    pub temp_dir: Option<String>,
    /// 子进程超时时间（秒）
    pub timeout_secs: u64,
}

/// CKAN 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CkanSettings {
    /// 目录站点基础 URL
    pub base_url: String,
    /// 每次搜索返回的条目数
    pub rows: u32,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

/// Hugging Face 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HuggingFaceSettings {
    /// Hub 基础 URL
    pub base_url: String,
    /// 每次搜索返回的条目数
    pub limit: u32,
    /// 请求使用的 User-Agent
    pub user_agent: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl LlmSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl KaggleSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl CkanSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl HuggingFaceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/default`、`config/{APP_ENVIRONMENT}`、
    /// `EXPLORER__*` 环境变量，最后是 `OPENROUTER_API_KEY` 与 `PORT`
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败或校验失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let port = std::env::var("PORT").ok();
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("EXPLORER").separator("__"))
            .set_override_option("server.port", port)?
            .set_override_option("llm.api_key", api_key)?;

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// 仅包含内置默认值的配置，不读取文件和环境变量
    pub fn default_values() -> Result<Self, ConfigError> {
        let settings: Settings = Self::defaults()?.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            // Server
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3001)?
            .set_default("server.cors_permissive", true)?
            // LLM
            .set_default("llm.model", "google/gemini-flash-1.5")?
            .set_default("llm.api_base_url", "https://openrouter.ai/api/v1")?
            .set_default("llm.timeout_secs", 30)?
            // Kaggle
            .set_default("kaggle.binary", "kaggle")?
            .set_default("kaggle.metadata_file", "datapackage.json")?
            .set_default("kaggle.timeout_secs", 60)?
            // CKAN
            .set_default("ckan.base_url", "https://catalog.data.gov")?
            .set_default("ckan.rows", 9)?
            .set_default("ckan.timeout_secs", 30)?
            // Hugging Face
            .set_default("huggingface.base_url", "https://huggingface.co")?
            .set_default("huggingface.limit", 15)?
            .set_default("huggingface.user_agent", "metadata-explorer/0.1")?
            .set_default("huggingface.timeout_secs", 30)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("llm.api_base_url", &self.llm.api_base_url),
            ("ckan.base_url", &self.ckan.base_url),
            ("huggingface.base_url", &self.huggingface.base_url),
        ] {
            Url::parse(value)
                .map_err(|e| ConfigError::Message(format!("{} is not a valid URL: {}", key, e)))?;
        }

        for (key, value) in [
            ("llm.timeout_secs", self.llm.timeout_secs),
            ("kaggle.timeout_secs", self.kaggle.timeout_secs),
            ("ckan.timeout_secs", self.ckan.timeout_secs),
            ("huggingface.timeout_secs", self.huggingface.timeout_secs),
        ] {
            if value == 0 {
                return Err(ConfigError::Message(format!("{} must be > 0", key)));
            }
        }

        if self.ckan.rows == 0 || self.huggingface.limit == 0 {
            return Err(ConfigError::Message(
                "ckan.rows and huggingface.limit must be > 0".to_string(),
            ));
        }

        if self.kaggle.binary.trim().is_empty() || self.kaggle.metadata_file.trim().is_empty() {
            return Err(ConfigError::Message(
                "kaggle.binary and kaggle.metadata_file cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
