// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 数据目录（catalog_source）：Kaggle、CKAN、Hugging Face 三个目录
/// - 数据集（dataset）：归一化搜索结果和详情对象
/// - 路由决策（route_decision）：查询分类的结果
pub mod catalog_source;
pub mod dataset;
pub mod route_decision;
