//! Google Distance Matrix HTTP adapter.

use serde::Deserialize;
use tracing::warn;

use crate::traits::DistanceProvider;

/// Meters to miles, the unit the optimizer reports.
const METERS_TO_MILES: f64 = 0.000621371;

#[derive(Debug, Clone)]
pub struct DistanceMatrixConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl DistanceMatrixConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://maps.googleapis.com/maps/api/distancematrix/json".to_string(),
            api_key: api_key.into(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DistanceMatrixClient {
    config: DistanceMatrixConfig,
    client: reqwest::blocking::Client,
}

impl DistanceMatrixClient {
    pub fn new(config: DistanceMatrixConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl DistanceProvider for DistanceMatrixClient {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> Option<f64> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("origins", format!("{:.6},{:.6}", from.0, from.1)),
                ("destinations", format!("{:.6},{:.6}", to.0, to.1)),
                ("mode", "driving".to_string()),
                ("key", self.config.api_key.clone()),
            ])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<TableResponse>());

        let element = match response {
            Ok(body) => body
                .rows
                .into_iter()
                .next()?
                .elements
                .into_iter()
                .next()?,
            Err(err) => {
                warn!(%err, "distance matrix request failed");
                return None;
            }
        };

        if element.status != "OK" {
            warn!(status = %element.status, "no driving route for waypoint pair");
            return None;
        }

        element.distance.map(|d| d.value * METERS_TO_MILES)
    }
}

#[derive(Debug, Deserialize)]
struct TableResponse {
    rows: Vec<Row>,
}

#[derive(Debug, Deserialize)]
struct Row {
    elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
struct Element {
    status: String,
    distance: Option<Distance>,
}

#[derive(Debug, Deserialize)]
struct Distance {
    value: f64,
}
