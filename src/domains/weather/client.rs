//! Open-Meteo forecast client.
//!
//! Issues a single `GET {base}/forecast` per call and hands back the body
//! verbatim. The body is never parsed.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument, warn};

use super::error::{WeatherError, WeatherResult};
use crate::core::config::WeatherConfig;

/// Public Open-Meteo API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1";

/// Current-conditions fields requested from the forecast endpoint.
pub const CURRENT_FIELDS: &str = "temperature_2m,wind_speed_10m";

/// User agent string for outbound requests.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Upper bound on how much of an error body ends up in the error message.
const MAX_ERROR_BODY: usize = 256;

/// Client for the Open-Meteo forecast endpoint.
///
/// The underlying `reqwest::Client` is built once and reused for every call.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    base_url: String,
}

impl OpenMeteoClient {
    /// Build a client from the weather configuration.
    pub fn new(config: &WeatherConfig) -> WeatherResult<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http = builder.build().map_err(WeatherError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the forecast endpoint (without query string).
    pub fn forecast_url(&self) -> String {
        format!("{}/forecast", self.base_url)
    }

    /// Fetch current conditions for a coordinate pair.
    ///
    /// Latitude and longitude are passed through as-is; no parsing or bounds
    /// checking happens here. Non-2xx responses are reported as errors.
    #[instrument(skip(self))]
    pub async fn fetch_forecast(&self, latitude: &str, longitude: &str) -> WeatherResult<String> {
        let url = self.forecast_url();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("latitude", latitude),
                ("longitude", longitude),
                ("current", CURRENT_FIELDS),
                ("timezone", "auto"),
            ])
            .send()
            .await
            .map_err(WeatherError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Open-Meteo responded with {}", status);
            return Err(WeatherError::status(status.as_u16(), truncate_body(&body)));
        }

        let body = response.text().await.map_err(WeatherError::Body)?;
        debug!("Received {} bytes from Open-Meteo", body.len());

        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(base_url: &str) -> OpenMeteoClient {
        let config = WeatherConfig {
            base_url: base_url.to_string(),
            timeout_secs: Some(5),
        };
        OpenMeteoClient::new(&config).unwrap()
    }

    fn forecast_query(latitude: &str, longitude: &str) -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("latitude".into(), latitude.into()),
            Matcher::UrlEncoded("longitude".into(), longitude.into()),
            Matcher::UrlEncoded("current".into(), CURRENT_FIELDS.into()),
            Matcher::UrlEncoded("timezone".into(), "auto".into()),
        ])
    }

    #[test]
    fn test_forecast_url_trims_trailing_slash() {
        let client = client_for("http://localhost:9999/v1/");
        assert_eq!(client.base_url(), "http://localhost:9999/v1");
        assert_eq!(client.forecast_url(), "http://localhost:9999/v1/forecast");
    }

    #[test]
    fn test_default_config_targets_open_meteo() {
        let client = OpenMeteoClient::new(&WeatherConfig::default()).unwrap();
        assert_eq!(
            client.forecast_url(),
            "https://api.open-meteo.com/v1/forecast"
        );
    }

    #[tokio::test]
    async fn test_fetch_forecast_returns_raw_body() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{"current":{"temperature_2m":21.3,"wind_speed_10m":7.2}}"#;
        let mock = server
            .mock("GET", "/forecast")
            .match_query(forecast_query("39.9042", "116.4074"))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let result = client.fetch_forecast("39.9042", "116.4074").await.unwrap();

        assert_eq!(result, body);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_forecast_passes_coordinates_unvalidated() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/forecast")
            .match_query(forecast_query("north", "999"))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = client_for(&server.url());
        let result = client.fetch_forecast("north", "999").await.unwrap();

        assert_eq!(result, "{}");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_forecast_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/forecast")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(r#"{"error":true,"reason":"Latitude must be in range"}"#)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let err = client.fetch_forecast("200", "0").await.unwrap_err();

        match &err {
            WeatherError::Status { status, body } => {
                assert_eq!(*status, 400);
                assert!(body.contains("Latitude must be in range"));
            }
            other => panic!("Expected status error, got {:?}", other),
        }
        assert!(err.to_string().contains("400"));
    }

    #[tokio::test]
    async fn test_fetch_forecast_unreachable() {
        // Bind then drop to get a local port nothing listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{}", addr));
        let err = client.fetch_forecast("39.9042", "116.4074").await.unwrap_err();

        assert!(matches!(err, WeatherError::Request(_)));
        // The URL appears once, from reqwest's own message.
        let message = err.to_string();
        assert!(message.starts_with("request failed: "));
        assert_eq!(message.matches(&addr.to_string()).count(), 1);
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short"), "short");

        let long = "x".repeat(MAX_ERROR_BODY + 10);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.len(), MAX_ERROR_BODY + 3);
    }
}
