// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，负责与外部系统交互。
///
/// 包含的子模块：
/// - 数据目录（catalog）：Kaggle CLI、CKAN Action API 和 Hugging Face Hub 的适配器实现
///
/// 基础设施层依赖于领域层的抽象接口。
pub mod catalog;
