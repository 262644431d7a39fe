use crate::normalize::nfkc_lower_trim;

/// Immutable category → skill-list vocabulary.
///
/// The built-in table carries the default vocabulary; custom tables are
/// constructed from `(category, skills)` pairs and injected into the
/// extractor. Extending the vocabulary is a configuration change, not a
/// code change.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillTaxonomy {
    categories: Vec<(String, Vec<String>)>,
}

const BUILTIN_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "python",
            "java",
            "javascript",
            "c++",
            "c#",
            "ruby",
            "go",
            "rust",
            "swift",
            "kotlin",
            "php",
            "typescript",
            "scala",
            "r",
            "matlab",
        ],
    ),
    (
        "web",
        &[
            "html",
            "css",
            "react",
            "angular",
            "vue",
            "node.js",
            "django",
            "flask",
            "spring",
            "express",
            "next.js",
            "nuxt.js",
        ],
    ),
    (
        "database",
        &[
            "sql",
            "mysql",
            "postgresql",
            "mongodb",
            "redis",
            "cassandra",
            "elasticsearch",
            "dynamodb",
        ],
    ),
    (
        "cloud",
        &[
            "aws",
            "azure",
            "gcp",
            "docker",
            "kubernetes",
            "terraform",
            "jenkins",
            "ci/cd",
        ],
    ),
    (
        "data",
        &[
            "pandas",
            "numpy",
            "scikit-learn",
            "tensorflow",
            "pytorch",
            "keras",
            "tableau",
            "power bi",
            "spark",
        ],
    ),
    (
        "mobile",
        &[
            "android",
            "ios",
            "react native",
            "flutter",
            "xamarin",
            "swift",
            "kotlin",
        ],
    ),
    (
        "design",
        &[
            "figma",
            "sketch",
            "adobe xd",
            "photoshop",
            "illustrator",
            "ui/ux",
            "wireframing",
        ],
    ),
    (
        "soft_skills",
        &[
            "leadership",
            "communication",
            "teamwork",
            "problem solving",
            "critical thinking",
            "creativity",
            "adaptability",
        ],
    ),
];

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::new(BUILTIN_CATEGORIES.iter().map(|(category, skills)| {
            (
                (*category).to_string(),
                skills.iter().map(|s| (*s).to_string()).collect(),
            )
        }))
    }
}

impl SkillTaxonomy {
    /// Build a taxonomy from `(category, skills)` pairs. Skills are
    /// normalized to lowercase; empty tokens are dropped.
    pub fn new(categories: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        let categories = categories
            .into_iter()
            .map(|(category, skills)| {
                let skills = skills
                    .iter()
                    .map(|skill| nfkc_lower_trim(skill))
                    .filter(|skill| !skill.is_empty())
                    .collect();
                (category, skills)
            })
            .collect();
        Self { categories }
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(category, skills)| (category.as_str(), skills.as_slice()))
    }

    /// All skills across every category, in declaration order.
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|(_, skills)| skills.iter().map(String::as_str))
    }

    pub fn contains(&self, skill: &str) -> bool {
        let needle = nfkc_lower_trim(skill);
        self.skills().any(|known| known == needle)
    }
}
