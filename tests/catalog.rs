use lessonbook::core::catalog::{self, Track};
use lessonbook::core::render;
use lessonbook::{
    CSHARP_FUNDAMENTALS, CURRICULUM, FULL_STACK_INTEGRATION, LessonbookError, SHORTLIST_CURRICULUM,
    get_lesson, get_section, get_shortlist_section,
};

#[test]
fn every_section_index_resolves_to_its_slot() {
    for i in 1..=CURRICULUM.len() {
        let section = get_section(i as i64).expect("in-range section");
        assert!(std::ptr::eq(section, CURRICULUM[i - 1]));
    }
}

#[test]
fn out_of_range_sections_fail() {
    let len = CURRICULUM.len() as i64;
    assert!(get_section(0).is_err());
    assert!(get_section(-1).is_err());
    assert!(get_section(len + 1).is_err());

    let err = get_section(9).expect_err("eight sections only");
    assert_eq!(err.to_string(), "Section 9 does not exist. Valid range: 1-8");
}

#[test]
fn shortlist_lookup_has_the_same_contract() {
    for i in 1..=SHORTLIST_CURRICULUM.len() {
        let section = get_shortlist_section(i as i64).expect("in-range shortlist section");
        assert!(std::ptr::eq(section, SHORTLIST_CURRICULUM[i - 1]));
    }
    let len = SHORTLIST_CURRICULUM.len();
    let err = get_shortlist_section(0).expect_err("zero is out of range");
    assert_eq!(
        err.to_string(),
        format!("Section 0 does not exist. Valid range: 1-{}", len)
    );
    assert!(get_shortlist_section(len as i64 + 1).is_err());
}

#[test]
fn every_lesson_address_resolves() {
    for (si, section) in CURRICULUM.iter().enumerate() {
        for (li, expected) in section.lessons.iter().enumerate() {
            let lesson = get_lesson(si as i64 + 1, li as i64 + 1).expect("in-range lesson");
            assert!(std::ptr::eq(lesson, expected));
        }
    }
}

#[test]
fn bad_lesson_index_reports_that_sections_count() {
    for (si, section) in CURRICULUM.iter().enumerate() {
        let s = si as i64 + 1;
        let len = section.lessons.len();
        let err = get_lesson(s, len as i64 + 1).expect_err("past the last lesson");
        assert_eq!(
            err.to_string(),
            format!(
                "Lesson {} does not exist in section {}. Valid range: 1-{}",
                len + 1,
                s,
                len
            )
        );
        assert!(matches!(
            get_lesson(s, 0),
            Err(LessonbookError::LessonOutOfRange { index: 0, .. })
        ));
    }
}

#[test]
fn bad_section_in_lesson_lookup_is_passed_through() {
    let direct = get_section(42).expect_err("no section 42").to_string();
    let via_lesson = get_lesson(42, 1).expect_err("no section 42").to_string();
    assert_eq!(direct, via_lesson);
}

#[test]
fn named_sections_are_the_curriculum_entries() {
    assert!(std::ptr::eq(CURRICULUM[0], &CSHARP_FUNDAMENTALS));
    assert!(std::ptr::eq(CURRICULUM[7], &FULL_STACK_INTEGRATION));
}

#[test]
fn track_helpers_agree_with_free_functions() {
    assert_eq!(Track::Full.sections().len(), CURRICULUM.len());
    assert_eq!(Track::Shortlist.sections().len(), SHORTLIST_CURRICULUM.len());
    let a = catalog::get_track_section(Track::Shortlist, 2).expect("section");
    let b = get_shortlist_section(2).expect("section");
    assert!(std::ptr::eq(a, b));
}

#[test]
fn every_full_track_section_ends_with_a_challenge() {
    for (i, section) in CURRICULUM.iter().enumerate() {
        let challenge = section
            .challenge
            .as_ref()
            .unwrap_or_else(|| panic!("section {} has no challenge", i + 1));
        assert!(!challenge.requirements.is_empty());
        assert!(!challenge.starter_code.trim().is_empty());
    }
}

#[test]
fn json_export_uses_camel_case_field_names() {
    let section = get_section(1).expect("section");
    let value = serde_json::to_value(section).expect("serialize");
    let lesson = &value["lessons"][2];
    assert!(lesson.get("codeExample").is_some());
    assert!(lesson["exercise"]["instructions"].is_string());
    assert!(value["challenge"]["starterCode"].is_string());
    assert!(value["lessons"][0].get("codeExample").is_none());
}

#[test]
fn every_explanation_renders_to_plain_text() {
    for track in [Track::Full, Track::Shortlist] {
        for section in track.sections() {
            for lesson in section.lessons {
                for sub in lesson.sections {
                    let text = render::html_to_text(sub.explanation);
                    assert!(!text.is_empty(), "{} renders empty", sub.title);
                    assert!(!text.contains("<p>"), "{} kept markup", sub.title);
                }
            }
        }
    }
}
