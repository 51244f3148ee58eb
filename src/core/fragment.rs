use crate::core::catalog::{self, Track};
use crate::core::error::LessonbookError;
use crate::core::render;
use sha2::{Digest, Sha256};

/// Content fingerprint of a single lesson.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LessonFragment {
    pub r#ref: String,
    pub title: String,
    pub excerpt: String,
    pub hash: String,
}

/// Fingerprint lesson `lesson_index` of section `section_index` on `track`.
/// The hash covers the lesson's full Markdown rendering, so any edit to its
/// prose or code changes it.
pub fn get_fragment(
    track: Track,
    section_index: i64,
    lesson_index: i64,
    excerpt_chars: usize,
) -> Result<LessonFragment, LessonbookError> {
    let lesson = catalog::get_track_lesson(track, section_index, lesson_index)?;
    let content = render::lesson_markdown(lesson);

    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let hash = format!("{:x}", hasher.finalize());

    let excerpt = content.lines().take(10).collect::<Vec<_>>().join("\n");
    let excerpt = if excerpt.chars().count() > excerpt_chars {
        let keep: String = excerpt.chars().take(excerpt_chars.saturating_sub(3)).collect();
        format!("{}...", keep)
    } else {
        excerpt
    };

    Ok(LessonFragment {
        r#ref: format!("{}:{}.{}", track, section_index, lesson_index),
        title: lesson.title.to_string(),
        excerpt,
        hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_is_stable_and_addressed() {
        let a = get_fragment(Track::Full, 3, 2, 500).expect("fragment");
        let b = get_fragment(Track::Full, 3, 2, 500).expect("fragment");
        assert_eq!(a.hash, b.hash);
        assert_eq!(a.hash.len(), 64);
        assert_eq!(a.r#ref, "full:3.2");
        assert_eq!(a.title, "Querying with LINQ");
    }

    #[test]
    fn test_fragments_differ_between_lessons() {
        let a = get_fragment(Track::Full, 1, 1, 500).expect("fragment");
        let b = get_fragment(Track::Full, 1, 2, 500).expect("fragment");
        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn test_excerpt_is_bounded() {
        let f = get_fragment(Track::Shortlist, 1, 1, 40).expect("fragment");
        assert!(f.excerpt.chars().count() <= 40);
        assert!(f.excerpt.ends_with("..."));
    }

    #[test]
    fn test_fragment_out_of_range() {
        assert!(matches!(
            get_fragment(Track::Shortlist, 9, 1, 500),
            Err(LessonbookError::SectionOutOfRange { index: 9, len: 4 })
        ));
    }
}
