use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonbookError {
    #[error("Section {index} does not exist. Valid range: 1-{len}")]
    SectionOutOfRange { index: i64, len: usize },
    #[error("Lesson {index} does not exist in section {section}. Valid range: 1-{len}")]
    LessonOutOfRange { section: i64, index: i64, len: usize },
    #[error(
        "Sub-section {index} does not exist in lesson {section}.{lesson}. Valid range: 1-{len}"
    )]
    SubSectionOutOfRange {
        section: i64,
        lesson: i64,
        index: i64,
        len: usize,
    },
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
}
