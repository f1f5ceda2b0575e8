//! Feasibility scoring and system recommendations

pub mod recommendation;
pub mod score;

pub use recommendation::{recommend_system, PrimaryRecommendation, SystemRecommendations};
pub use score::{feasibility_score, FeasibilityLevel, FeasibilityScore, ScoreBreakdown};
