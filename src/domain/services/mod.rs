// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - LLM服务（llm_service）：用大语言模型将自由文本查询路由到数据目录
/// - 搜索服务（search_service）：串联路由、目录适配器和归一化
pub mod llm_service;
pub mod search_service;
