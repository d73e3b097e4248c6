// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use metadata_explorer::config::settings::Settings;
use metadata_explorer::domain::services::llm_service::LLMService;
use metadata_explorer::domain::services::search_service::SearchService;
use metadata_explorer::infrastructure::catalog::build_registry;
use metadata_explorer::presentation::routes;
use metadata_explorer::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting metadata-explorer...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");
    if settings.llm.api_key.is_none() {
        warn!("OPENROUTER_API_KEY is not set, every search will fail at the routing step");
    }

    // 3. Initialize components
    let router = Arc::new(LLMService::new(&settings.llm)?);
    let catalogs = Arc::new(build_registry(&settings)?);
    let service = Arc::new(SearchService::new(router, catalogs));

    // 4. Serve
    let app = routes::routes(service, &settings.server);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
