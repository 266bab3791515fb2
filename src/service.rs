use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use std::sync::Arc;

use crate::config::WeatherConfig;
use crate::error::ConfigError;
use crate::fetcher::WeatherFetcher;
use crate::formatters::{format_alerts, format_fetch_failure, format_forecast};
use crate::models::{Coordinate, CoordinatesRequest};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    fetcher: Arc<WeatherFetcher>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: WeatherConfig) -> anyhow::Result<Self> {
        let fetcher = WeatherFetcher::new(config)?;

        Ok(Self {
            fetcher: Arc::new(fetcher),
            tool_router: Self::tool_router(),
        })
    }

    /// Fetches and renders the active alerts at `coordinate`
    pub async fn alerts_report(&self, coordinate: Coordinate) -> Result<String, ConfigError> {
        let report = match self.fetcher.fetch(coordinate).await? {
            Some(payload) => format_alerts(coordinate, &payload),
            None => format_fetch_failure(coordinate),
        };
        Ok(report)
    }

    /// Fetches and renders current conditions at `coordinate`
    pub async fn forecast_report(&self, coordinate: Coordinate) -> Result<String, ConfigError> {
        let report = match self.fetcher.fetch(coordinate).await? {
            Some(payload) => format_forecast(coordinate, &payload),
            None => format_fetch_failure(coordinate),
        };
        Ok(report)
    }

    fn coordinate(request: &CoordinatesRequest) -> Result<Coordinate, McpError> {
        request
            .coordinate()
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-openweather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by the OpenWeatherMap API. \
                Provides active weather alerts and current conditions for any location."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a location
    #[tool(
        name = "get-alerts",
        description = "Get weather alerts for a location (OpenWeatherMap). Provide latitude (-90 to 90) and longitude (-180 to 180)."
    )]
    pub async fn get_alerts(
        &self,
        Parameters(request): Parameters<CoordinatesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let coordinate = Self::coordinate(&request)?;
        tracing::info!("Getting alerts for coordinates: {}", coordinate);

        let report = self
            .alerts_report(coordinate)
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    /// Gets current weather conditions for a location
    #[tool(
        name = "get-forecast",
        description = "Get weather forecast for a location (OpenWeatherMap). Provide latitude (-90 to 90) and longitude (-180 to 180), e.g. latitude: 37.5665, longitude: 126.978 for Seoul."
    )]
    pub async fn get_forecast(
        &self,
        Parameters(request): Parameters<CoordinatesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let coordinate = Self::coordinate(&request)?;
        tracing::info!("Getting forecast for coordinates: {}", coordinate);

        let report = self
            .forecast_report(coordinate)
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(report)]))
    }
}
