//! Regulatory compliance notes by administrative region
//!
//! Delhi and Maharashtra carry their own mandates and subsidy schemes;
//! everywhere else gets generic guidance.

use serde::Serialize;

use crate::geo::AdministrativeRegion;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubsidyScheme {
    pub scheme: &'static str,
    pub amount: &'static str,
    pub eligibility: &'static str,
}

/// Either known schemes or a pointer to the local authority.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Subsidies {
    Schemes(Vec<SubsidyScheme>),
    Contact(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegulatoryInfo {
    pub local_mandate: &'static str,
    pub authority: &'static str,
    pub required_permits: Vec<&'static str>,
    pub available_subsidies: Subsidies,
    pub compliance_timeline: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalties: Option<&'static str>,
    pub technical_standards: &'static str,
    pub inspection_requirements: &'static str,
}

pub fn regulatory_info(region: &AdministrativeRegion) -> RegulatoryInfo {
    if region.state.contains("Delhi") {
        RegulatoryInfo {
            local_mandate: "Mandatory for plots >100 sq m under Delhi Building Bye-laws",
            authority: "Delhi Jal Board and DDA",
            required_permits: vec!["Building plan approval", "DJB NoC", "Electrical safety clearance"],
            available_subsidies: Subsidies::Schemes(vec![
                SubsidyScheme {
                    scheme: "DJB RTRWH Subsidy",
                    amount: "₹15,000",
                    eligibility: "Residential properties",
                },
                SubsidyScheme {
                    scheme: "Delhi Solar Policy",
                    amount: "₹5,000",
                    eligibility: "With solar integration",
                },
            ]),
            compliance_timeline: "Must be completed before occupancy certificate",
            penalties: Some("Water connection may be disconnected for non-compliance"),
            technical_standards: "As per CPWD guidelines and IS codes",
            inspection_requirements: "Pre-monsoon system check mandatory",
        }
    } else if region.state.contains("Maharashtra") {
        RegulatoryInfo {
            local_mandate: "Compulsory for plots >300 sq m in Mumbai, >500 sq m in other cities",
            authority: "Maharashtra Water Resources Department",
            required_permits: vec!["Municipal building approval", "Water supply NOC"],
            available_subsidies: Subsidies::Schemes(vec![SubsidyScheme {
                scheme: "Jal Yukt Shivar",
                amount: "₹10,000-25,000",
                eligibility: "Rural and semi-urban",
            }]),
            compliance_timeline: "Within 6 months of building construction",
            penalties: None,
            technical_standards: "Maharashtra RTRWH guidelines 2019",
            inspection_requirements: "Annual compliance certificate",
        }
    } else {
        RegulatoryInfo {
            local_mandate: "Check with local municipal corporation/panchayat",
            authority: "State Water Resources Department",
            required_permits: vec!["Building plan approval", "Local body NOC"],
            available_subsidies: Subsidies::Contact("Contact state/district water authority"),
            compliance_timeline: "Usually before occupancy certificate",
            penalties: None,
            technical_standards: "Follow BIS and CPWD guidelines",
            inspection_requirements: "As per local regulations",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::administrative_region;
    use crate::types::Coordinate;

    #[test]
    fn test_delhi_rules() {
        let info = regulatory_info(&administrative_region(&Coordinate::new(28.6139, 77.2090)));
        assert_eq!(info.authority, "Delhi Jal Board and DDA");
        assert!(info.penalties.is_some());
        match info.available_subsidies {
            Subsidies::Schemes(s) => assert_eq!(s.len(), 2),
            Subsidies::Contact(_) => panic!("Delhi lists schemes"),
        }
    }

    #[test]
    fn test_mumbai_uses_maharashtra_rules() {
        let info = regulatory_info(&administrative_region(&Coordinate::new(19.0760, 72.8777)));
        assert_eq!(info.technical_standards, "Maharashtra RTRWH guidelines 2019");
        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("penalties").is_none());
    }

    #[test]
    fn test_generic_rules() {
        let info = regulatory_info(&administrative_region(&Coordinate::new(12.9716, 77.5946)));
        assert_eq!(info.authority, "State Water Resources Department");
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["available_subsidies"], "Contact state/district water authority");
    }
}
