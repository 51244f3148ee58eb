//! Terminal and Markdown rendering of curriculum content.
//!
//! Explanations are authored as HTML. Text output strips tags and decodes the
//! handful of entities the content uses; Markdown output maps the common
//! inline tags to Markdown and strips the rest.

use crate::core::model::{Challenge, Lesson, Section};
use regex::Regex;
use std::fmt::Write as _;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static BLOCK_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(p|li|ul|ol|h[1-6])>|<br\s*/?>").unwrap());
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<li>").unwrap());
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<code>(.*?)</code>").unwrap());
static STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(strong|b)>(.*?)</(strong|b)>").unwrap());
static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(em|i)>(.*?)</(em|i)>").unwrap());

pub fn decode_entities(input: &str) -> String {
    input
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// Plain text for terminals: block tags become line breaks, list items get a
/// bullet, other tags vanish.
pub fn html_to_text(html: &str) -> String {
    let with_items = LIST_ITEM.replace_all(html, "- ");
    let with_breaks = BLOCK_BREAK.replace_all(&with_items, "\n");
    let stripped = TAG.replace_all(&with_breaks, "");
    let decoded = decode_entities(&stripped);
    decoded
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn html_to_markdown(html: &str) -> String {
    let s = INLINE_CODE.replace_all(html, "`$1`");
    let s = STRONG.replace_all(&s, "**$2**");
    let s = EMPHASIS.replace_all(&s, "*$2*");
    html_to_text(&s)
}

/// One-line preview of at most `max_chars` characters with whitespace runs
/// folded. Truncated previews end in `...`.
pub fn compact_line(input: &str, max_chars: usize) -> String {
    let folded = input.split_whitespace().collect::<Vec<_>>().join(" ");
    match folded.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", folded[..cut].trim_end()),
        None => folded,
    }
}

pub fn lesson_markdown(lesson: &Lesson) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", lesson.title);
    let _ = writeln!(out, "{}\n", lesson.description);
    for sub in lesson.sections {
        let _ = writeln!(out, "## {}\n", sub.title);
        let _ = writeln!(out, "{}\n", html_to_markdown(sub.explanation));
        if let Some(code) = sub.code_example {
            let _ = writeln!(out, "```\n{}\n```\n", code);
        }
    }
    if let Some(code) = lesson.code_example {
        let _ = writeln!(out, "## Example\n\n```\n{}\n```\n", code);
    }
    if let Some(exercise) = &lesson.exercise {
        let _ = writeln!(out, "## Exercise\n\n{}\n", exercise.instructions);
    }
    out.trim_end().to_string()
}

pub fn lesson_text(lesson: &Lesson) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", lesson.title.to_uppercase());
    let _ = writeln!(out, "{}", lesson.description);
    for (n, sub) in lesson.sections.iter().enumerate() {
        let _ = writeln!(out, "\n{}. {}", n + 1, sub.title);
        let _ = writeln!(out, "{}", html_to_text(sub.explanation));
        if let Some(code) = sub.code_example {
            let _ = writeln!(out, "\n{}", indent(code, 4));
        }
    }
    if let Some(code) = lesson.code_example {
        let _ = writeln!(out, "\nExample:\n{}", indent(code, 4));
    }
    if let Some(exercise) = &lesson.exercise {
        let _ = writeln!(out, "\nExercise: {}", exercise.instructions);
    }
    out.trim_end().to_string()
}

/// Numbered lesson outline of a section.
pub fn section_outline(section: &Section, markdown: bool) -> String {
    let mut out = String::new();
    if markdown {
        let _ = writeln!(out, "# {}\n\n{}\n", section.title, section.description);
    } else {
        let _ = writeln!(out, "{}\n{}\n", section.title.to_uppercase(), section.description);
    }
    for (n, lesson) in section.lessons.iter().enumerate() {
        let bullet = if markdown { format!("{}.", n + 1) } else { format!("{:>3}.", n + 1) };
        let _ = writeln!(
            out,
            "{} {} ({} parts) - {}",
            bullet,
            lesson.title,
            lesson.sections.len(),
            compact_line(lesson.description, 60)
        );
    }
    if section.challenge.is_some() {
        let _ = writeln!(out, "\nChallenge available.");
    }
    out.trim_end().to_string()
}

pub fn challenge_text(section: &Section, challenge: &Challenge, markdown: bool) -> String {
    let mut out = String::new();
    if markdown {
        let _ = writeln!(out, "# Challenge: {}\n\n{}\n", section.title, challenge.description);
    } else {
        let _ = writeln!(out, "CHALLENGE: {}\n{}\n", section.title, challenge.description);
    }
    for req in challenge.requirements {
        let _ = writeln!(out, "- {}", req);
    }
    if markdown {
        let _ = writeln!(out, "\n```\n{}\n```", challenge.starter_code);
    } else {
        let _ = writeln!(out, "\nStarter code:\n{}", indent(challenge.starter_code, 4));
    }
    out.trim_end().to_string()
}

fn indent(code: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    code.lines()
        .map(|l| if l.is_empty() { String::new() } else { format!("{}{}", pad, l) })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog;

    #[test]
    fn test_html_to_text_strips_tags_and_entities() {
        let html = "<p>Use <code>List&lt;T&gt;</code> here.</p><ul><li>one</li><li>two</li></ul>";
        assert_eq!(html_to_text(html), "Use List<T> here.\n- one\n- two");

        let quoted = "<p>&quot;Hi&quot;,&nbsp;it&#39;s <code>a &amp;&amp; b</code></p>";
        assert_eq!(html_to_text(quoted), "\"Hi\", it's a && b");
    }

    #[test]
    fn test_html_to_markdown_keeps_inline_marks() {
        let html = "<p><strong>Bold</strong>, <em>soft</em> and <code>x &amp;&amp; y</code></p>";
        assert_eq!(html_to_markdown(html), "**Bold**, *soft* and `x && y`");
    }

    #[test]
    fn test_compact_line_bounds_length() {
        assert_eq!(compact_line("a  b\n c", 10), "a b c");
        assert_eq!(compact_line("abcdefghij", 4), "abcd...");
        assert_eq!(compact_line("ab cd", 3), "ab...");
        assert_eq!(compact_line("äöüß", 4), "äöüß");
    }

    #[test]
    fn test_lesson_markdown_has_all_parts() {
        let lesson = catalog::get_lesson(1, 3).expect("lesson");
        let md = lesson_markdown(lesson);
        assert!(md.starts_with(&format!("# {}", lesson.title)));
        for sub in lesson.sections {
            assert!(md.contains(&format!("## {}", sub.title)));
        }
        assert!(md.contains("## Example"));
        assert!(md.contains("## Exercise"));
        assert!(!md.contains("<p>"));
    }

    #[test]
    fn test_section_outline_numbers_lessons() {
        let section = catalog::get_section(2).expect("section");
        let text = section_outline(section, false);
        assert!(text.contains("  1. Classes and Properties"));
        assert!(text.contains("Challenge available."));
    }
}
