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

use memehub::config::settings::Settings;
use memehub::infrastructure::aggregation::{AggregatorConfig, MemeAggregator};
use memehub::infrastructure::sources::create_sources;
use memehub::presentation::routes;
use memehub::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting memehub...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Register source adapters
    let sources = create_sources(&settings.sources)?;

    // 4. Build the aggregator
    let aggregator = Arc::new(MemeAggregator::new(
        sources,
        AggregatorConfig::from(&settings.aggregator),
    ));

    // 5. Start HTTP server
    let app = routes::routes(aggregator, settings.clone());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
