//! Live-or-fallback rainfall resolution
//!
//! The resolver asks its [`PrecipitationSource`] for daily data and
//! aggregates it. Every failure on that path is logged and replaced by the
//! nearest reference city's profile; nothing propagates to the caller.

use std::future::Future;

use thiserror::Error;
use tracing::{debug, warn};

use super::open_meteo::{aggregate_daily, DailyPrecipitation};
use super::{RainfallOrigin, RainfallProfile, ResolvedRainfall};
use crate::geo::nearest_city;
use crate::types::Coordinate;

/// Failures of the live precipitation path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RainfallError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("archive returned HTTP {0}")]
    Status(u16),

    #[error("undecodable response: {0}")]
    Decode(String),

    #[error("response carried no daily series")]
    EmptySeries,

    #[error("unparsable date '{0}'")]
    InvalidDate(String),

    #[error("missing precipitation value for {0}")]
    MissingValue(String),
}

/// A provider of daily historical precipitation.
pub trait PrecipitationSource: Send + Sync {
    fn fetch_daily(
        &self,
        coord: &Coordinate,
    ) -> impl Future<Output = Result<DailyPrecipitation, RainfallError>> + Send;
}

/// Resolves a coordinate to a rainfall profile, falling back on failure.
#[derive(Debug, Clone)]
pub struct RainfallResolver<S> {
    source: S,
}

impl<S: PrecipitationSource> RainfallResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn resolve(&self, coord: &Coordinate) -> ResolvedRainfall {
        let live = match self.source.fetch_daily(coord).await {
            Ok(series) => aggregate_daily(&series),
            Err(e) => Err(e),
        };

        match live {
            Ok(profile) => {
                debug!(annual_mm = profile.annual_mm, "Using live rainfall data");
                ResolvedRainfall {
                    profile,
                    origin: RainfallOrigin::Live,
                }
            }
            Err(e) => fallback(coord, e),
        }
    }
}

/// Static profile of the nearest reference city.
pub fn fallback(coord: &Coordinate, reason: RainfallError) -> ResolvedRainfall {
    let city = nearest_city(coord);
    warn!(
        lat = coord.latitude,
        lng = coord.longitude,
        city = city.name,
        error = %reason,
        "Live rainfall unavailable, using reference city profile"
    );
    ResolvedRainfall {
        profile: RainfallProfile::from_city(city),
        origin: RainfallOrigin::Fallback {
            city: city.name.to_string(),
            reason: reason.to_string(),
        },
    }
}
