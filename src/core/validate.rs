//! Content lint for the compiled-in curriculum.
//!
//! Each gate walks both tracks and reports violations by address
//! (`track:section.lesson.subsection`). Gates never touch the lookup
//! contracts; they exist to catch authoring mistakes before a release.
//!
//! Set `LESSONBOOK_TRACE=1` to print gate names as they run.

use crate::core::catalog::Track;
use crate::core::model::Section;
use rayon::prelude::*;
use regex::Regex;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::sync::LazyLock;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9]*)[^>]*?(/?)>").unwrap());

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link", "wbr"];

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub pass_count: u32,
    pub fail_count: u32,
    pub failures: Vec<String>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.fail_count == 0
    }

    fn record(&mut self, gate: &str, violations: Vec<String>) {
        if violations.is_empty() {
            self.pass_count += 1;
            return;
        }
        self.fail_count += 1;
        let mut msg = format!("{}: {} violation(s):", gate, violations.len());
        for v in violations.iter().take(12) {
            msg.push_str(&format!(" {}", v));
        }
        if violations.len() > 12 {
            msg.push_str(&format!(" ... ({} total)", violations.len()));
        }
        self.failures.push(msg);
    }
}

fn trace_gate(name: &str) {
    if std::env::var("LESSONBOOK_TRACE").ok().as_deref() == Some("1") {
        eprintln!("validate: trace {}", name);
    }
}

/// Run a per-section check over both tracks in parallel and collect its
/// violations in curriculum order.
fn per_section<F>(check: F) -> Vec<String>
where
    F: Fn(&str, &Section) -> Vec<String> + Sync,
{
    [Track::Full, Track::Shortlist]
        .into_iter()
        .flat_map(|track| {
            track
                .sections()
                .par_iter()
                .enumerate()
                .map(|(i, section)| check(&format!("{}:{}", track, i + 1), *section))
                .collect::<Vec<_>>()
        })
        .flatten()
        .collect()
}

fn check_non_empty_text(addr: &str, section: &Section) -> Vec<String> {
    let mut out = Vec::new();
    if section.title.trim().is_empty() {
        out.push(format!("{} (section title)", addr));
    }
    if section.description.trim().is_empty() {
        out.push(format!("{} (section description)", addr));
    }
    for (li, lesson) in section.lessons.iter().enumerate() {
        let laddr = format!("{}.{}", addr, li + 1);
        if lesson.title.trim().is_empty() {
            out.push(format!("{} (lesson title)", laddr));
        }
        if lesson.description.trim().is_empty() {
            out.push(format!("{} (lesson description)", laddr));
        }
        for (ni, sub) in lesson.sections.iter().enumerate() {
            if sub.title.trim().is_empty() || sub.explanation.trim().is_empty() {
                out.push(format!("{}.{} (sub-section text)", laddr, ni + 1));
            }
            if sub.code_example.is_some_and(|c| c.trim().is_empty()) {
                out.push(format!("{}.{} (empty code example)", laddr, ni + 1));
            }
        }
        if lesson.exercise.as_ref().is_some_and(|e| e.instructions.trim().is_empty()) {
            out.push(format!("{} (exercise instructions)", laddr));
        }
    }
    out
}

fn check_structure(addr: &str, section: &Section) -> Vec<String> {
    let mut out = Vec::new();
    if section.lessons.is_empty() {
        out.push(format!("{} (no lessons)", addr));
    }
    for (li, lesson) in section.lessons.iter().enumerate() {
        if lesson.sections.is_empty() {
            out.push(format!("{}.{} (no sub-sections)", addr, li + 1));
        }
    }
    out
}

fn check_html_balance(addr: &str, section: &Section) -> Vec<String> {
    let mut out = Vec::new();
    for (li, lesson) in section.lessons.iter().enumerate() {
        for (ni, sub) in lesson.sections.iter().enumerate() {
            if let Some(problem) = unbalanced_tag(sub.explanation) {
                out.push(format!("{}.{}.{} ({})", addr, li + 1, ni + 1, problem));
            }
        }
    }
    out
}

fn check_challenge(addr: &str, section: &Section) -> Vec<String> {
    let Some(challenge) = &section.challenge else {
        return Vec::new();
    };
    let mut out = Vec::new();
    if challenge.description.trim().is_empty() {
        out.push(format!("{} (challenge description)", addr));
    }
    if challenge.requirements.is_empty() || challenge.requirements.iter().any(|r| r.trim().is_empty()) {
        out.push(format!("{} (challenge requirements)", addr));
    }
    if challenge.starter_code.trim().is_empty() {
        out.push(format!("{} (starter code)", addr));
    }
    out
}

fn check_unique_titles(track: Track) -> Vec<String> {
    let mut seen = FxHashSet::default();
    track
        .sections()
        .iter()
        .enumerate()
        .filter(|(_, s)| !seen.insert(s.title.to_lowercase()))
        .map(|(i, s)| format!("{}:{} (duplicate title {:?})", track, i + 1, s.title))
        .collect()
}

/// First nesting problem in `html`, if any. Void elements and self-closing
/// tags are ignored.
pub fn unbalanced_tag(html: &str) -> Option<String> {
    let mut stack: Vec<String> = Vec::new();
    for cap in HTML_TAG.captures_iter(html) {
        let closing = !cap[1].is_empty();
        let self_closing = !cap[3].is_empty();
        let name = cap[2].to_lowercase();
        if self_closing || VOID_TAGS.contains(&name.as_str()) {
            continue;
        }
        if !closing {
            stack.push(name);
            continue;
        }
        match stack.pop() {
            Some(open) if open == name => {}
            Some(open) => return Some(format!("</{}> closes <{}>", name, open)),
            None => return Some(format!("stray </{}>", name)),
        }
    }
    stack.pop().map(|open| format!("unclosed <{}>", open))
}

pub fn run_validation() -> ValidationReport {
    let mut report = ValidationReport::default();

    trace_gate("non_empty_text");
    report.record("Non-empty Text Gate", per_section(check_non_empty_text));
    trace_gate("lesson_structure");
    report.record("Lesson Structure Gate", per_section(check_structure));
    trace_gate("html_balance");
    report.record("HTML Balance Gate", per_section(check_html_balance));
    trace_gate("challenge_completeness");
    report.record("Challenge Completeness Gate", per_section(check_challenge));
    trace_gate("unique_titles");
    let mut dupes = check_unique_titles(Track::Full);
    dupes.extend(check_unique_titles(Track::Shortlist));
    report.record("Unique Title Gate", dupes);

    report
}
