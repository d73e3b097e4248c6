// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据目录领域模块
///
/// 定义目录适配器接口、适配器错误以及归一化辅助函数
pub mod adapter;
pub mod normalize;
pub mod registry;
