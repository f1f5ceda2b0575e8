//! Open-Meteo archive client and daily-to-monthly aggregation
//!
//! Request shape:
//! `GET {base_url}?latitude=..&longitude=..&start_date=..&end_date=..&daily=precipitation_sum&timezone=..`
//!
//! The response carries two parallel arrays under `daily`: ISO dates in
//! `time` and millimetres in `precipitation_sum`. Pairs are taken in order;
//! surplus entries in the longer array are ignored.

use chrono::{Datelike, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::resolver::{PrecipitationSource, RainfallError};
use super::RainfallProfile;
use crate::config::RainfallConfig;
use crate::types::{Coordinate, Month, MonthlyValues};
use crate::utils::{round_to, round_whole};

/// Parallel daily series as returned by the archive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyPrecipitation {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub precipitation_sum: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    daily: Option<DailyPrecipitation>,
}

/// HTTP client for the historical-weather archive.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    config: RainfallConfig,
}

impl OpenMeteoClient {
    pub fn new(config: RainfallConfig) -> Result<Self, RainfallError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RainfallError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RainfallConfig {
        &self.config
    }
}

impl PrecipitationSource for OpenMeteoClient {
    async fn fetch_daily(&self, coord: &Coordinate) -> Result<DailyPrecipitation, RainfallError> {
        let start = self.config.start_date.format("%Y-%m-%d").to_string();
        let end = self.config.end_date.format("%Y-%m-%d").to_string();

        debug!(
            lat = coord.latitude,
            lng = coord.longitude,
            start = %start,
            end = %end,
            "Requesting archive precipitation"
        );

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("latitude", coord.latitude.to_string()),
                ("longitude", coord.longitude.to_string()),
                ("start_date", start),
                ("end_date", end),
                ("daily", "precipitation_sum".to_string()),
                ("timezone", self.config.timezone.clone()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RainfallError::Timeout
                } else {
                    RainfallError::Transport(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(RainfallError::Status(response.status().as_u16()));
        }

        let payload: ArchiveResponse = response
            .json()
            .await
            .map_err(|e| RainfallError::Decode(e.to_string()))?;

        payload.daily.ok_or(RainfallError::EmptySeries)
    }
}

/// Sum daily precipitation into calendar months.
///
/// `annual = round(total)`; each month is `round(month / total * 100, 1)`,
/// or 0 for every month when the total is zero. Any unparsable date, null
/// value or negative value rejects the whole series.
pub fn aggregate_daily(series: &DailyPrecipitation) -> Result<RainfallProfile, RainfallError> {
    if series.time.is_empty() || series.precipitation_sum.is_empty() {
        return Err(RainfallError::EmptySeries);
    }

    let mut totals = MonthlyValues::zeros();
    for (date_str, value) in series.time.iter().zip(series.precipitation_sum.iter()) {
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| RainfallError::InvalidDate(date_str.clone()))?;
        let mm = value.ok_or_else(|| RainfallError::MissingValue(date_str.clone()))?;
        if !mm.is_finite() || mm < 0.0 {
            return Err(RainfallError::Decode(format!(
                "precipitation {} on {} is not a valid amount",
                mm, date_str
            )));
        }
        let month = Month::from_number(date.month())
            .ok_or_else(|| RainfallError::InvalidDate(date_str.clone()))?;
        totals.0[month.index()] += mm;
    }

    let total: f64 = totals.0.iter().sum();
    let monthly_distribution = if total > 0.0 {
        totals.map(|_, mm| round_to(mm / total * 100.0, 1))
    } else {
        MonthlyValues::zeros()
    };

    Ok(RainfallProfile {
        annual_mm: round_whole(total),
        monthly_distribution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rainfall::{RainfallOrigin, RainfallResolver};
    use approx::assert_relative_eq;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn series(pairs: &[(&str, Option<f64>)]) -> DailyPrecipitation {
        DailyPrecipitation {
            time: pairs.iter().map(|(d, _)| d.to_string()).collect(),
            precipitation_sum: pairs.iter().map(|(_, v)| *v).collect(),
        }
    }

    #[test]
    fn test_aggregate_sums_by_calendar_month() {
        let profile = aggregate_daily(&series(&[
            ("2020-01-05", Some(10.0)),
            ("2021-01-20", Some(15.0)),
            ("2020-07-01", Some(50.0)),
            ("2022-07-02", Some(25.0)),
        ]))
        .unwrap();

        assert_eq!(profile.annual_mm, 100.0);
        assert_relative_eq!(profile.monthly_distribution.get(Month::Jan), 25.0);
        assert_relative_eq!(profile.monthly_distribution.get(Month::Jul), 75.0);
        assert_eq!(profile.monthly_distribution.get(Month::Mar), 0.0);
    }

    #[test]
    fn test_aggregate_rounds_shares_to_one_decimal() {
        let profile = aggregate_daily(&series(&[
            ("2020-02-01", Some(1.0)),
            ("2020-03-01", Some(1.0)),
            ("2020-04-01", Some(1.0)),
        ]))
        .unwrap();

        assert_eq!(profile.annual_mm, 3.0);
        assert_relative_eq!(profile.monthly_distribution.get(Month::Feb), 33.3);
        // shares are not renormalized
        let sum: f64 = profile.monthly_distribution.0.iter().sum();
        assert_relative_eq!(sum, 99.9, epsilon = 1e-9);
    }

    #[test]
    fn test_aggregate_zero_total_fills_zeros() {
        let profile = aggregate_daily(&series(&[("2020-06-01", Some(0.0))])).unwrap();
        assert_eq!(profile.annual_mm, 0.0);
        assert!(profile.monthly_distribution.0.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_aggregate_ignores_unpaired_tail() {
        let mut s = series(&[("2020-06-01", Some(40.0))]);
        s.time.push("2020-07-01".to_string());
        let profile = aggregate_daily(&s).unwrap();
        assert_relative_eq!(profile.monthly_distribution.get(Month::Jun), 100.0);
    }

    #[test]
    fn test_aggregate_rejects_malformed_series() {
        assert!(matches!(
            aggregate_daily(&DailyPrecipitation::default()),
            Err(RainfallError::EmptySeries)
        ));
        assert!(matches!(
            aggregate_daily(&series(&[("2020-13-01", Some(1.0))])),
            Err(RainfallError::InvalidDate(_))
        ));
        assert!(matches!(
            aggregate_daily(&series(&[("2020-01-01", None)])),
            Err(RainfallError::MissingValue(_))
        ));
        assert!(matches!(
            aggregate_daily(&series(&[("2020-01-01", Some(-2.0))])),
            Err(RainfallError::Decode(_))
        ));
    }

    #[test]
    fn test_archive_response_decodes_nulls() {
        let body = r#"{"latitude":19.0,"daily":{"time":["2020-01-01","2020-01-02"],"precipitation_sum":[0.4,null]}}"#;
        let parsed: ArchiveResponse = serde_json::from_str(body).unwrap();
        let daily = parsed.daily.unwrap();
        assert_eq!(daily.time.len(), 2);
        assert_eq!(daily.precipitation_sum, vec![Some(0.4), None]);
    }

    // ========================================================================
    // Live client against a local archive stub
    // ========================================================================

    const MUMBAI: Coordinate = Coordinate {
        latitude: 19.0760,
        longitude: 72.8777,
    };

    /// Answer the first request with a canned HTTP response.
    async fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}/v1/archive", addr)
    }

    /// Accept the connection and never answer.
    async fn serve_silently() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });
        format!("http://{}/v1/archive", addr)
    }

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
    }

    fn resolver(base_url: String) -> RainfallResolver<OpenMeteoClient> {
        let client = OpenMeteoClient::new(RainfallConfig {
            base_url,
            timeout: Duration::from_secs(1),
            ..Default::default()
        })
        .unwrap();
        RainfallResolver::new(client)
    }

    fn fallback_reason(origin: RainfallOrigin, expected_city: &str) -> String {
        match origin {
            RainfallOrigin::Fallback { city, reason } => {
                assert_eq!(city, expected_city);
                reason
            }
            RainfallOrigin::Live => panic!("expected fallback origin"),
        }
    }

    #[tokio::test]
    async fn test_client_server_error_falls_back() {
        let url = serve_once(http_response("500 Internal Server Error", "")).await;
        let resolved = resolver(url).resolve(&MUMBAI).await;

        assert_eq!(resolved.profile.annual_mm, 2200.0);
        assert_eq!(fallback_reason(resolved.origin, "Mumbai"), "archive returned HTTP 500");
    }

    #[tokio::test]
    async fn test_client_bad_json_falls_back() {
        let url = serve_once(http_response("200 OK", "{not json")).await;
        let resolved = resolver(url).resolve(&MUMBAI).await;

        let reason = fallback_reason(resolved.origin, "Mumbai");
        assert!(reason.starts_with("undecodable response"), "{}", reason);
    }

    #[tokio::test]
    async fn test_client_missing_daily_series_falls_back() {
        let url = serve_once(http_response("200 OK", r#"{"latitude":19.0}"#)).await;
        let resolved = resolver(url).resolve(&MUMBAI).await;

        assert_eq!(
            fallback_reason(resolved.origin, "Mumbai"),
            "response carried no daily series"
        );
    }

    #[tokio::test]
    async fn test_client_timeout_falls_back() {
        let url = serve_silently().await;
        let bangalore = Coordinate::new(12.9716, 77.5946);

        let started = std::time::Instant::now();
        let resolved = resolver(url).resolve(&bangalore).await;

        assert!(started.elapsed() < Duration::from_secs(4));
        assert_eq!(fallback_reason(resolved.origin, "Bangalore"), "request timed out");
    }

    #[tokio::test]
    async fn test_client_live_series_is_aggregated() {
        let body = r#"{"daily":{"time":["2021-07-01","2021-08-01"],"precipitation_sum":[30.0,10.0]}}"#;
        let url = serve_once(http_response("200 OK", body)).await;
        let resolved = resolver(url).resolve(&MUMBAI).await;

        assert_eq!(resolved.origin, RainfallOrigin::Live);
        assert_eq!(resolved.profile.annual_mm, 40.0);
        assert_relative_eq!(resolved.profile.monthly_distribution.get(Month::Jul), 75.0);
    }
}
