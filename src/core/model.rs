//! Curriculum content types.
//!
//! Every value is a compile-time literal. Fields borrow `'static` strings and
//! slices, so the whole curriculum lives in the binary's read-only data and
//! lookups hand out plain references.

use serde::Serialize;

/// A top-level curriculum unit: an ordered list of lessons plus an optional
/// hands-on challenge that closes the section.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: &'static str,
    pub description: &'static str,
    pub lessons: &'static [Lesson],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge: Option<Challenge>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub title: &'static str,
    pub description: &'static str,
    pub sections: &'static [SubSection],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_example: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise: Option<Exercise>,
}

/// One titled block of a lesson. `explanation` holds HTML.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubSection {
    pub title: &'static str,
    pub explanation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_example: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct Exercise {
    pub instructions: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub description: &'static str,
    pub requirements: &'static [&'static str],
    pub starter_code: &'static str,
}

impl Section {
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    pub fn subsection_count(&self) -> usize {
        self.lessons.iter().map(|l| l.sections.len()).sum()
    }
}

impl Lesson {
    /// Code samples of the lesson in reading order: sub-section samples first,
    /// then the lesson-level example.
    pub fn code_samples(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections
            .iter()
            .filter_map(|s| s.code_example)
            .chain(self.code_example)
    }
}
