pub mod experience;
pub mod skills;

pub use experience::extract_years;
pub use skills::SkillExtractor;
