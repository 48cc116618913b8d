use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Please enter a valid number")]
    InvalidSeed(String),
    #[error("Power must be 1, 3 or 6, got {0}")]
    InvalidPower(u8),
    #[error("Course name cannot be empty")]
    InvalidCourseName,
    #[error("No course with id {0:?}")]
    UnknownCourse(String),
    #[error("No hole with id {0:?}")]
    UnknownHole(String),
    #[error("Could not encode course records")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, GameError>;
