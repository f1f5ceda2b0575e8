//! Nearest reference city

use crate::types::Coordinate;
use crate::utils::lookup_tables::{city_by_key, CityProfile, CITIES, DEFAULT_CITY_KEY};

/// Find the reference city closest to `coord`.
///
/// Distance is planar in raw degrees. Cities are scanned in table order with a
/// strict `<`, so the first of several equidistant cities wins.
pub fn nearest_city(coord: &Coordinate) -> &'static CityProfile {
    let mut best: Option<(&'static CityProfile, f64)> = None;

    for city in CITIES {
        let distance = coord.degree_distance(&Coordinate::new(city.latitude, city.longitude));
        match best {
            Some((_, min_distance)) if distance >= min_distance => {}
            _ => best = Some((city, distance)),
        }
    }

    match best {
        Some((city, _)) => city,
        None => default_city(),
    }
}

fn default_city() -> &'static CityProfile {
    city_by_key(DEFAULT_CITY_KEY).unwrap_or(&CITIES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_city_coordinates() {
        assert_eq!(nearest_city(&Coordinate::new(19.0760, 72.8777)).key, "mumbai");
        assert_eq!(nearest_city(&Coordinate::new(28.6139, 77.2090)).key, "delhi");
        assert_eq!(nearest_city(&Coordinate::new(9.9312, 76.2673)).key, "kochi");
    }

    #[test]
    fn test_nearby_points() {
        // Thane is closer to Mumbai than to Pune
        assert_eq!(nearest_city(&Coordinate::new(19.2183, 72.9781)).key, "mumbai");
        // Gurugram resolves to Delhi
        assert_eq!(nearest_city(&Coordinate::new(28.4595, 77.0266)).key, "delhi");
        // Mysuru resolves to Bangalore
        assert_eq!(nearest_city(&Coordinate::new(12.2958, 76.6394)).key, "bangalore");
    }

    #[test]
    fn test_far_away_point_still_resolves() {
        // A point far outside India still maps to some reference city
        let city = nearest_city(&Coordinate::new(-45.0, -120.0));
        assert!(CITIES.iter().any(|c| c.key == city.key));
    }
}
