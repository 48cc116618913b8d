use serde::{Deserialize, Serialize};

use crate::*;
pub use seeded::*;

mod path;
mod seeded;

pub trait CourseGenerator {
    fn generate(self, config: CourseConfig) -> CourseLayout;
}

/// Freshly generated hole, before any shot has been played.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseLayout {
    pub grid: Grid,
    pub start: Coord2,
    pub hole: Coord2,
}

/// Generates the standard 14×20 layout for `seed`.
pub fn generate_course(seed: Seed) -> CourseLayout {
    SeededCourseGenerator::new(seed).generate(CourseConfig::default())
}
