/// Aggregate weights for the overall match percentage.
/// Salary is deliberately absent: it is an optional signal, not part of
/// the default aggregate, and the four weights below already sum to 1.0.
pub const AGGREGATE_WEIGHTS: Weights = Weights {
    skills: 0.35,
    semantic: 0.30,
    experience: 0.20,
    location: 0.15,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub skills: f64,
    pub semantic: f64,
    pub experience: f64,
    pub location: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.semantic + self.experience + self.location
    }
}
