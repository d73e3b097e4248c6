// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 数据目录抽象（catalog）：适配器接口、能力注册表和归一化辅助函数
/// - 领域模型（models）：核心业务实体和数据结构
/// - 服务（services）：查询路由和搜索编排
///
/// 领域层不依赖于任何具体的目录实现。
pub mod catalog;
pub mod models;
pub mod services;
