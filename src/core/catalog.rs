//! Curriculum aggregator and 1-based lookups.
//!
//! Both tracks are static slices composed from the content modules. Lookups
//! take learner-facing 1-based indices and fail with a range error instead of
//! panicking, so `0` and negative values are rejected like any other
//! out-of-range input.

use crate::content::{self, shortlist};
use crate::core::error::LessonbookError;
use crate::core::model::{Challenge, Lesson, Section, SubSection};
use serde::Serialize;

pub static CURRICULUM: &[&Section] = &[
    &content::CSHARP_FUNDAMENTALS,
    &content::CSHARP_OOP,
    &content::CSHARP_COLLECTIONS,
    &content::CSHARP_ASYNC_WEB,
    &content::TYPESCRIPT_FUNDAMENTALS,
    &content::TYPESCRIPT_ADVANCED_TYPES,
    &content::REACT_TYPESCRIPT,
    &content::FULL_STACK_INTEGRATION,
];

pub static SHORTLIST_CURRICULUM: &[&Section] = &[
    &shortlist::CSHARP_ESSENTIALS_REVIEW,
    &shortlist::CSHARP_ASYNC_REVIEW,
    &shortlist::TYPESCRIPT_ESSENTIALS_REVIEW,
    &shortlist::REACT_REVIEW,
];

/// Which curriculum a lookup addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    #[default]
    Full,
    Shortlist,
}

impl Track {
    pub fn sections(self) -> &'static [&'static Section] {
        match self {
            Track::Full => CURRICULUM,
            Track::Shortlist => SHORTLIST_CURRICULUM,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Track::Full => "full",
            Track::Shortlist => "shortlist",
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a 1-based index into `len` items, or `None` when out of range.
fn slot(index: i64, len: usize) -> Option<usize> {
    if index < 1 {
        return None;
    }
    let zero_based = usize::try_from(index - 1).ok()?;
    (zero_based < len).then_some(zero_based)
}

fn section_in(sections: &'static [&'static Section], index: i64) -> Result<&'static Section, LessonbookError> {
    slot(index, sections.len())
        .map(|i| sections[i])
        .ok_or(LessonbookError::SectionOutOfRange {
            index,
            len: sections.len(),
        })
}

/// Section `section_index` (1-based) of the full curriculum.
pub fn get_section(section_index: i64) -> Result<&'static Section, LessonbookError> {
    section_in(CURRICULUM, section_index)
}

/// Section `section_index` (1-based) of the shortlist curriculum.
pub fn get_shortlist_section(section_index: i64) -> Result<&'static Section, LessonbookError> {
    section_in(SHORTLIST_CURRICULUM, section_index)
}

pub fn get_track_section(track: Track, section_index: i64) -> Result<&'static Section, LessonbookError> {
    section_in(track.sections(), section_index)
}

/// Lesson `lesson_index` of section `section_index`, both 1-based.
/// A bad section index surfaces the section error unchanged.
pub fn get_lesson(section_index: i64, lesson_index: i64) -> Result<&'static Lesson, LessonbookError> {
    get_track_lesson(Track::Full, section_index, lesson_index)
}

pub fn get_track_lesson(
    track: Track,
    section_index: i64,
    lesson_index: i64,
) -> Result<&'static Lesson, LessonbookError> {
    let section = get_track_section(track, section_index)?;
    slot(lesson_index, section.lessons.len())
        .map(|i| &section.lessons[i])
        .ok_or(LessonbookError::LessonOutOfRange {
            section: section_index,
            index: lesson_index,
            len: section.lessons.len(),
        })
}

pub fn get_subsection(
    track: Track,
    section_index: i64,
    lesson_index: i64,
    subsection_index: i64,
) -> Result<&'static SubSection, LessonbookError> {
    let lesson = get_track_lesson(track, section_index, lesson_index)?;
    slot(subsection_index, lesson.sections.len())
        .map(|i| &lesson.sections[i])
        .ok_or(LessonbookError::SubSectionOutOfRange {
            section: section_index,
            lesson: lesson_index,
            index: subsection_index,
            len: lesson.sections.len(),
        })
}

/// Closing challenge of a section. Sections without one yield `Ok(None)`.
pub fn get_challenge(track: Track, section_index: i64) -> Result<Option<&'static Challenge>, LessonbookError> {
    Ok(get_track_section(track, section_index)?.challenge.as_ref())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CurriculumStats {
    pub track: String,
    pub sections: usize,
    pub lessons: usize,
    pub subsections: usize,
    pub code_examples: usize,
    pub exercises: usize,
    pub challenges: usize,
}

pub fn stats(track: Track) -> CurriculumStats {
    let mut out = CurriculumStats {
        track: track.to_string(),
        ..Default::default()
    };
    for section in track.sections() {
        out.sections += 1;
        out.challenges += usize::from(section.challenge.is_some());
        out.lessons += section.lesson_count();
        out.subsections += section.subsection_count();
        for lesson in section.lessons {
            out.code_examples += lesson.code_samples().count();
            out.exercises += usize::from(lesson.exercise.is_some());
        }
    }
    out
}
