//! Rainfall climate analysis: peak months, seasonal shares, collection window
//!
//! Seasons: winter jan-feb, pre-monsoon mar-may, monsoon jun-sep,
//! post-monsoon oct-dec. All figures work on the monthly percentage shares.

use serde::Serialize;

use crate::rainfall::{RainfallOrigin, ResolvedRainfall};
use crate::types::{Month, MonthlyValues};
use crate::utils::round_to;

const MONSOON: [Month; 4] = [Month::Jun, Month::Jul, Month::Aug, Month::Sep];
const PRE_MONSOON: [Month; 3] = [Month::Mar, Month::Apr, Month::May];
const POST_MONSOON: [Month; 3] = [Month::Oct, Month::Nov, Month::Dec];
const WINTER: [Month; 2] = [Month::Jan, Month::Feb];

/// A month counts as a primary collection month above this share.
const SIGNIFICANT_SHARE: f64 = 10.0;
/// A month counts towards the collection window above this share.
const COLLECTION_SHARE: f64 = 5.0;

/// The three wettest months, wettest first. Ties keep calendar order.
pub fn peak_months(distribution: &MonthlyValues<f64>) -> Vec<Month> {
    let mut months: Vec<(Month, f64)> = distribution.iter().collect();
    months.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    months.into_iter().take(3).map(|(m, _)| m).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternType {
    MonsoonDominated,
    BiModal,
    Distributed,
    ExtendedMonsoon,
}

impl PatternType {
    /// Classify from unrounded monsoon and post-monsoon shares.
    pub fn classify(monsoon_percent: f64, post_monsoon_percent: f64) -> Self {
        if monsoon_percent > 70.0 {
            PatternType::MonsoonDominated
        } else if post_monsoon_percent > 25.0 {
            PatternType::BiModal
        } else if monsoon_percent < 50.0 {
            PatternType::Distributed
        } else {
            PatternType::ExtendedMonsoon
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            PatternType::MonsoonDominated => "Monsoon Dominated",
            PatternType::BiModal => "Bi-modal (Monsoon + Post-Monsoon)",
            PatternType::Distributed => "Distributed Pattern",
            PatternType::ExtendedMonsoon => "Monsoon with Extended Season",
        }
    }
}

impl Serialize for PatternType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_text())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonsoonCharacteristics {
    pub monsoon_concentration_percent: f64,
    pub pre_monsoon_percent: f64,
    pub post_monsoon_percent: f64,
    pub winter_percent: f64,
    pub pattern_type: PatternType,
}

pub fn monsoon_characteristics(distribution: &MonthlyValues<f64>) -> MonsoonCharacteristics {
    let monsoon = distribution.sum_of(&MONSOON);
    let post = distribution.sum_of(&POST_MONSOON);

    MonsoonCharacteristics {
        monsoon_concentration_percent: round_to(monsoon, 1),
        pre_monsoon_percent: round_to(distribution.sum_of(&PRE_MONSOON), 1),
        post_monsoon_percent: round_to(post, 1),
        winter_percent: round_to(distribution.sum_of(&WINTER), 1),
        pattern_type: PatternType::classify(monsoon, post),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionWindow {
    pub primary_collection_months: Vec<Month>,
    pub collection_season_type: &'static str,
    pub optimal_storage_period: String,
    pub storage_strategy: &'static str,
}

fn storage_strategy(collection_months: usize) -> &'static str {
    match collection_months {
        0..=2 => "Large storage capacity needed for dry season supply",
        3..=4 => "Moderate storage with seasonal usage planning",
        _ => "Smaller storage with continuous harvesting approach",
    }
}

pub fn collection_window(distribution: &MonthlyValues<f64>) -> CollectionWindow {
    let primary_collection_months: Vec<Month> = distribution
        .iter()
        .filter(|(_, share)| *share > SIGNIFICANT_SHARE)
        .map(|(m, _)| m)
        .collect();
    let collection_months = distribution
        .iter()
        .filter(|(_, share)| *share > COLLECTION_SHARE)
        .count();

    let collection_season_type = if collection_months >= 4 {
        "Extended (4+ months)"
    } else if collection_months >= 2 {
        "Moderate (2-3 months)"
    } else {
        "Short (1-2 months)"
    };

    CollectionWindow {
        primary_collection_months,
        collection_season_type,
        optimal_storage_period: format!("{} months", collection_months),
        storage_strategy: storage_strategy(collection_months),
    }
}

/// Rainfall section of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RainfallAnalysis {
    pub annual_rainfall_mm: f64,
    pub monthly_distribution: MonthlyValues<f64>,
    pub peak_months: Vec<Month>,
    pub monsoon_characteristics: MonsoonCharacteristics,
    pub collection_window: CollectionWindow,
    pub data_source: RainfallOrigin,
}

pub fn analyze_rainfall(rainfall: &ResolvedRainfall) -> RainfallAnalysis {
    let distribution = &rainfall.profile.monthly_distribution;
    RainfallAnalysis {
        annual_rainfall_mm: rainfall.profile.annual_mm,
        monthly_distribution: *distribution,
        peak_months: peak_months(distribution),
        monsoon_characteristics: monsoon_characteristics(distribution),
        collection_window: collection_window(distribution),
        data_source: rainfall.origin.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::lookup_tables::city_by_key;
    use approx::assert_relative_eq;

    fn distribution(key: &str) -> MonthlyValues<f64> {
        MonthlyValues(city_by_key(key).unwrap().distribution)
    }

    #[test]
    fn test_peak_months() {
        assert_eq!(peak_months(&distribution("mumbai")), vec![Month::Jul, Month::Aug, Month::Jun]);
        assert_eq!(peak_months(&distribution("chennai")), vec![Month::Nov, Month::Oct, Month::Dec]);
    }

    #[test]
    fn test_peak_months_ties_keep_calendar_order() {
        let flat = MonthlyValues([5.0; 12]);
        assert_eq!(peak_months(&flat), vec![Month::Jan, Month::Feb, Month::Mar]);
    }

    #[test]
    fn test_mumbai_is_monsoon_dominated() {
        let m = monsoon_characteristics(&distribution("mumbai"));
        assert_relative_eq!(m.monsoon_concentration_percent, 89.9);
        assert_relative_eq!(m.winter_percent, 0.2);
        assert_eq!(m.pattern_type, PatternType::MonsoonDominated);
    }

    #[test]
    fn test_chennai_is_bimodal() {
        let m = monsoon_characteristics(&distribution("chennai"));
        assert_relative_eq!(m.post_monsoon_percent, 65.0);
        assert_eq!(m.pattern_type, PatternType::BiModal);
    }

    #[test]
    fn test_pattern_fallthrough() {
        assert_eq!(PatternType::classify(45.0, 10.0), PatternType::Distributed);
        assert_eq!(PatternType::classify(60.0, 10.0), PatternType::ExtendedMonsoon);
        assert_eq!(PatternType::classify(70.0, 10.0), PatternType::ExtendedMonsoon);
    }

    #[test]
    fn test_collection_window_mumbai() {
        let w = collection_window(&distribution("mumbai"));
        assert_eq!(w.primary_collection_months, vec![Month::Jun, Month::Jul, Month::Aug, Month::Sep]);
        assert_eq!(w.collection_season_type, "Extended (4+ months)");
        assert_eq!(w.optimal_storage_period, "4 months");
        assert_eq!(w.storage_strategy, "Moderate storage with seasonal usage planning");
    }

    #[test]
    fn test_collection_window_dry_profile() {
        let w = collection_window(&MonthlyValues::zeros());
        assert!(w.primary_collection_months.is_empty());
        assert_eq!(w.collection_season_type, "Short (1-2 months)");
        assert_eq!(w.storage_strategy, "Large storage capacity needed for dry season supply");
    }
}
