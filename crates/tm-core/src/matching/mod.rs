pub mod location;
pub mod pipeline;
pub mod report;
pub mod salary;
pub mod semantic;
pub mod skills;
pub mod weights;

pub use location::LocationScorer;
pub use pipeline::{MatchingEngine, DEFAULT_TOP_N};
pub use report::{MatchReport, MatchResult};
pub use salary::calculate_salary_match;
pub use semantic::calculate_semantic_similarity;
pub use skills::{calculate_skills_match, skill_gap, SkillGap};
pub use weights::{Weights, AGGREGATE_WEIGHTS};
