// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct DetailsRequestDto {
    #[serde(default)]
    #[validate(
        required(message = "Dataset ID and source are required"),
        length(min = 1, message = "Dataset ID and source are required")
    )]
    pub id: Option<String>,
    #[serde(default)]
    #[validate(
        required(message = "Dataset ID and source are required"),
        length(min = 1, message = "Dataset ID and source are required")
    )]
    pub source: Option<String>,
}
