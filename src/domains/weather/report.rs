//! Text reports returned by the weather tools.
//!
//! Labels are kept in Chinese to match what existing agents were prompted
//! against.

/// Prefix of every failed forecast report.
pub const FORECAST_FAILURE_LABEL: &str = "获取天气信息失败：";

/// Static air quality readings, one line per metric.
pub const AIR_QUALITY_LINES: [&str; 4] = [
    "- PM2.5: 15 μg/m³ (优)",
    "- PM10: 28 μg/m³ (良)",
    "- 空气质量指数(AQI): 42 (优)",
    "- 主要污染物: 无",
];

/// Header line echoing the requested coordinates.
fn location_header(latitude: &str, longitude: &str, subject: &str) -> String {
    format!("当前位置（纬度：{}，经度：{}）的{}：", latitude, longitude, subject)
}

/// Successful forecast: header line followed by the upstream body verbatim.
pub fn forecast_report(latitude: &str, longitude: &str, body: &str) -> String {
    format!("{}\n{}", location_header(latitude, longitude, "天气信息"), body)
}

/// Failed forecast: failure label followed by the error message.
pub fn forecast_failure(message: &str) -> String {
    format!("{}{}", FORECAST_FAILURE_LABEL, message)
}

/// Air quality report. Readings are mock data; only the coordinates vary.
pub fn air_quality_report(latitude: &str, longitude: &str) -> String {
    let mut report = location_header(latitude, longitude, "空气质量");
    for line in AIR_QUALITY_LINES {
        report.push('\n');
        report.push_str(line);
    }
    report
}
