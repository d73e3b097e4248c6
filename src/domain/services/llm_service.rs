// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::settings::LlmSettings;
use crate::domain::models::route_decision::{RouteDecision, RouteOutcome};

/// LLM 服务错误类型
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM API key not configured")]
    MissingApiKey,
    #[error("Failed to send request to LLM API: {0}")]
    Request(#[from] reqwest::Error),
    #[error("LLM API returned error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("Invalid response format from LLM API: {0}")]
    InvalidEnvelope(String),
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// 查询路由器
///
/// 将自由文本查询分类为目标目录和关键词
#[async_trait]
pub trait QueryRouter: Send + Sync {
    async fn route(&self, query: &str) -> Result<RouteOutcome, LlmError>;
}

/// LLM服务 - 通过 OpenAI 兼容接口完成查询路由
///
/// # 配置
///
/// 由 [`LlmSettings`] 提供：
/// - `api_key` - API 密钥（也可通过 `OPENROUTER_API_KEY` 设置）
/// - `model` - 模型名称（默认为 google/gemini-flash-1.5）
/// - `api_base_url` - API 基础 URL（默认为 OpenRouter）
/// - `timeout_secs` - 单次调用的超时时间
pub struct LLMService {
    client: Client,
    api_key: Option<String>,
    model: String,
    api_base_url: String,
}

#[async_trait]
impl QueryRouter for LLMService {
    async fn route(&self, query: &str) -> Result<RouteOutcome, LlmError> {
        let (content, usage) = self.complete_json(&build_routing_prompt(query)).await?;
        debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "Routing completion received"
        );

        match parse_route_reply(&content) {
            Some(decision) => Ok(RouteOutcome::Routed(decision)),
            None => {
                warn!(reply = %content, "AI response did not match the routing schema");
                Ok(RouteOutcome::Unclassified { reply: content })
            }
        }
    }
}

impl LLMService {
    pub fn new(settings: &LlmSettings) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self {
            client,
            api_key: settings.api_key.clone().filter(|k| !k.trim().is_empty()),
            model: settings.model.clone(),
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 以 JSON 对象模式调用聊天补全接口
    ///
    /// # 返回值
    /// * `Result<(String, TokenUsage)>` - 模型回复内容和令牌使用情况
    ///
    /// # 错误
    /// * 当 API 密钥未配置时返回错误
    /// * 当网络失败、状态码非 2xx 或响应信封格式不符时返回错误
    pub async fn complete_json(&self, prompt: &str) -> Result<(String, TokenUsage), LlmError> {
        let api_key = self.api_key.as_ref().ok_or(LlmError::MissingApiKey)?;

        let request_body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "response_format": { "type": "json_object" }
        });

        let url = format!("{}/chat/completions", self.api_base_url);
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status { status, body });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidEnvelope(e.to_string()))?;

        let usage = body
            .get("usage")
            .and_then(|u| serde_json::from_value::<TokenUsage>(u.clone()).ok())
            .unwrap_or_default();

        match body["choices"][0]["message"]["content"].as_str() {
            Some(content) => Ok((content.to_string(), usage)),
            None => Err(LlmError::InvalidEnvelope(
                "missing choices[0].message.content".to_string(),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RouteReply {
    source: String,
    keywords: String,
}

/// 严格解析模型回复
///
/// 回复必须恰好是 `{"source": string, "keywords": string}`，允许外层 markdown 代码块。
/// 其余任何偏差都返回 `None`
pub fn parse_route_reply(content: &str) -> Option<RouteDecision> {
    let clean_content = content
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    let reply: RouteReply = serde_json::from_str(clean_content).ok()?;
    let source = reply.source.trim();
    let keywords = reply.keywords.trim();
    if source.is_empty() || keywords.is_empty() {
        return None;
    }
    Some(RouteDecision::new(source, keywords))
}

/// 构造路由提示词
pub fn build_routing_prompt(query: &str) -> String {
    format!(
        r#"You are an intelligent API routing assistant. Your task is to analyze a user's query to determine the correct data source and to extract concise, effective search keywords.

RULES FOR CHOOSING A SOURCE:
- If the query is about machine learning, AI, models, NLP, vision, audio, or explicitly mentions "HuggingFace", the source is "HuggingFace".
- If the query explicitly mentions "Kaggle", the source is "Kaggle".
- For general government, city, public data, or civic topics (e.g., "new york", "census", "covid data", "crime rates"), the source is "CKAN".

RULES FOR EXTRACTING KEYWORDS:
- Extract ONLY the core subject of the query.
- Be concise. Use 2-4 words maximum.
- DO NOT include filler words like "datasets", "find", "show me", or the name of the source (e.g., "kaggle").

User Query: {query}

Your response MUST be ONLY a single, minified JSON object with two keys: "source" and "keywords".

Example 1: for "kaggle data on climate change" -> {{"source":"Kaggle","keywords":"climate change"}}
Example 2: for "new york covid data" -> {{"source":"CKAN","keywords":"new york covid"}}
Example 3: for "machine learning datasets for text classification" -> {{"source":"HuggingFace","keywords":"text classification"}}
Example 4: for "Show me audio datasets on HuggingFace" -> {{"source":"HuggingFace","keywords":"audio"}}"#,
        query = serde_json::to_string(query).unwrap_or_else(|_| format!("\"{}\"", query))
    )
}
