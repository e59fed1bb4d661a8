//! Weather tools module.
//!
//! - `forecast`: current conditions from Open-Meteo for a coordinate pair
//! - `air_quality`: air quality readings for a coordinate pair
//! - `common`: parameters and result helpers shared by both tools

pub mod air_quality;
pub mod common;
pub mod forecast;

pub use air_quality::AirQualityTool;
pub use common::CoordinateParams;
pub use forecast::WeatherForecastTool;
