use serde::{Deserialize, Serialize};
use web_time::{SystemTime, UNIX_EPOCH};

use crate::*;

/// Courses created on first launch, their names double as ids.
pub const DEFAULT_COURSE_NAMES: [&str; 9] = [
    "Pine Valley",
    "Augusta National",
    "St. Andrews",
    "Pebble Beach",
    "Royal County Down",
    "Cypress Point",
    "Shinnecock Hills",
    "Royal Melbourne",
    "Muirfield",
];

pub const HOLES_PER_COURSE: u32 = 10;

pub const DEFAULT_PAR: u32 = 3;

/// Milliseconds since the Unix epoch, the unit of every stored timestamp.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hole {
    pub id: String,
    pub name: String,
    pub seed: Seed,
    pub par: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_score: Option<u32>,
    pub completed: bool,
}

impl Hole {
    /// Hole `number` (1-based) of the course called `course_name`.
    pub fn numbered(course_name: &str, number: u32) -> Self {
        Self {
            id: format!("{course_name}-hole-{number}"),
            name: format!("Hole {number}"),
            seed: Seed::from_name(course_name, number),
            par: DEFAULT_PAR,
            best_score: None,
            completed: false,
        }
    }

    /// Marks the hole as played, keeping the lowest stroke count seen.
    pub fn record(&mut self, strokes: u32) {
        self.completed = true;
        self.best_score = Some(self.best_score.map_or(strokes, |best| best.min(strokes)));
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub holes: Vec<Hole>,
    pub created_at: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_played: Option<u64>,
}

impl Course {
    pub fn new(id: String, name: &str, now: u64) -> Self {
        Self {
            id,
            name: name.to_string(),
            holes: (1..=HOLES_PER_COURSE)
                .map(|number| Hole::numbered(name, number))
                .collect(),
            created_at: now,
            last_played: None,
        }
    }

    pub fn hole(&self, hole_id: &str) -> Option<&Hole> {
        self.holes.iter().find(|hole| hole.id == hole_id)
    }

    pub fn completed_holes(&self) -> usize {
        self.holes.iter().filter(|hole| hole.completed).count()
    }
}

/// Ordered collection of every course the player knows about.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseBook {
    courses: Vec<Course>,
}

impl CourseBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == course_id)
    }

    /// Adds a course named `name`, its id is the creation timestamp.
    ///
    /// The name is stored and hashed exactly as given, surrounding whitespace included.
    pub fn create_course(&mut self, name: &str, now: u64) -> Result<&Course> {
        if name.trim().is_empty() {
            return Err(GameError::InvalidCourseName);
        }

        log::debug!("creating course {name:?}");
        self.courses.push(Course::new(now.to_string(), name, now));
        Ok(&self.courses[self.courses.len() - 1])
    }

    pub fn delete_course(&mut self, course_id: &str) -> bool {
        let before = self.courses.len();
        self.courses.retain(|course| course.id != course_id);
        before != self.courses.len()
    }

    /// Fills an empty book with the default courses.
    pub fn ensure_courses_exist(&mut self, now: u64) -> &[Course] {
        if self.courses.is_empty() {
            log::debug!("no courses found, generating defaults");
            self.courses = DEFAULT_COURSE_NAMES
                .iter()
                .map(|&name| Course::new(name.to_string(), name, now))
                .collect();
        }
        &self.courses
    }

    /// Stores the stroke count of a finished hole.
    pub fn record_score(&mut self, course_id: &str, hole_id: &str, strokes: u32, now: u64) -> Result<()> {
        let course = self
            .courses
            .iter_mut()
            .find(|course| course.id == course_id)
            .ok_or_else(|| GameError::UnknownCourse(course_id.to_string()))?;
        let hole = course
            .holes
            .iter_mut()
            .find(|hole| hole.id == hole_id)
            .ok_or_else(|| GameError::UnknownHole(hole_id.to_string()))?;

        hole.record(strokes);
        log::debug!("{} on {}: {} strokes, best {:?}", hole.id, course.name, strokes, hole.best_score);
        course.last_played = Some(now);
        Ok(())
    }
}
